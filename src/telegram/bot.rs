//! Bot initialization and command definitions
//!
//! This module contains:
//! - Command enum definition
//! - Bot instance creation
//! - Command registration in the Telegram UI

use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;

use crate::telegram::Bot;

/// Bot commands enum with descriptions
#[derive(BotCommands, Clone, Debug)]
#[command(rename_rule = "lowercase", description = "Available commands:")]
pub enum Command {
    #[command(description = "show the services menu")]
    Start,
}

/// Creates a Bot instance from the given token.
///
/// The token is resolved and validated by the caller, so handlers never touch
/// the process environment.
pub fn create_bot(token: &str) -> Bot {
    Bot::new(token)
}

/// Sets up bot commands in Telegram UI
///
/// # Arguments
/// * `bot` - Bot instance to configure
///
/// # Returns
/// * `Ok(())` - Commands set successfully
/// * `Err(RequestError)` - Failed to set commands
pub async fn setup_bot_commands(bot: &Bot) -> Result<(), teloxide::RequestError> {
    use teloxide::types::BotCommand;

    bot.set_my_commands(vec![BotCommand::new("start", "show the services menu")])
        .await?;

    Ok(())
}
