//! Berry Library Catalog Management Console
//!
//! A Rust implementation of the Berry catalog manager: an interactive
//! console for tracking a small library's books, patrons and
//! checkouts, with JSON snapshots of the book list.

pub mod audit;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod shell;
pub mod snapshot;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
