//! Feed adapter
//!
//! Loads feed documents over HTTP or from the local data directory.

pub mod client;

pub use client::FeedClientImpl;
