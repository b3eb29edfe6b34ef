//! Services menu: keyboard construction and callback dispatch

pub mod callback_router;
pub mod main_menu;

// Re-exports for convenience
pub use callback_router::handle_menu_callback;
pub use main_menu::{main_menu_keyboard, show_main_menu};
