//! HTTP handlers
//!
//! Axum request handlers for the page, article, data and live endpoints.

pub mod article;
pub mod data;
pub mod home;
pub mod live;

pub use article::get_article;
pub use data::get_data_file;
pub use home::get_home;
pub use live::live_handler;
