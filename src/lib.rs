//! Visibot — Telegram storefront bot for X growth services
//!
//! This library provides the functionality behind the bot binary: the services
//! menu, the wallet balance lookup, and the storage layer they share.
//!
//! # Module Structure
//!
//! - `core`: Configuration, errors, and logging
//! - `storage`: SQLite connection pool and queries
//! - `telegram`: Bot setup, dispatcher schema, and the services menu

pub mod cli;
pub mod core;
pub mod storage;
pub mod telegram;

// Re-export commonly used types for convenience
pub use crate::core::{config, AppError, AppResult};
pub use crate::storage::{create_pool, get_connection, DbConnection, DbPool};
pub use crate::telegram::{handle_menu_callback, show_main_menu};
