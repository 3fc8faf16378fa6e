//! Domain layer
//!
//! Contains pure feed models with no rendering or I/O concerns.
//! - `entities`: Feed items and sections
//! - `ports`: Trait definitions for external dependencies

pub mod entities;
pub mod ports;
