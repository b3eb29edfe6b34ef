//! Telegram bot integration and handlers

pub mod bot;
pub mod handlers;
pub mod menu;

use teloxide::types::InlineKeyboardButton;

/// Bot type used throughout the handlers
pub type Bot = teloxide::Bot;

// Re-exports for convenience
pub use bot::{create_bot, setup_bot_commands, Command};
pub use handlers::{schema, HandlerDeps, HandlerError};
pub use menu::{handle_menu_callback, show_main_menu};

/// Shorthand for an inline callback button.
pub fn cb<T, D>(text: T, data: D) -> InlineKeyboardButton
where
    T: Into<String>,
    D: Into<String>,
{
    InlineKeyboardButton::callback(text.into(), data.into())
}
