//! Dispatcher schema and handler plumbing

pub mod schema;
pub mod types;

// Re-exports for convenience
pub use schema::schema;
pub use types::{HandlerDeps, HandlerError};
