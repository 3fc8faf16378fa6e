//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod feed;

pub use feed::FeedClientImpl;
