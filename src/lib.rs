//! HTTP service over an in-memory catalog of books with user registration
//! and review editing.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod store;

pub use error::{ApiError, ConfigError};
pub use store::BookStore;
