//! Database access and schema management

pub mod db;

// Re-exports for convenience
pub use db::{create_pool, get_connection, get_user_balance, DbConnection, DbPool};
