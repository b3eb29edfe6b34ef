//! Dispatcher schema and handler chain builders

use teloxide::dispatching::{UpdateFilterExt, UpdateHandler};
use teloxide::prelude::*;

use super::types::{HandlerDeps, HandlerError};
use crate::telegram::bot::Command;
use crate::telegram::Bot;

/// Creates the main dispatcher schema for the Telegram bot.
///
/// This function returns a handler tree that can be used with teloxide's
/// Dispatcher. The same schema is used in production and in integration tests.
///
/// # Arguments
/// * `deps` - Handler dependencies (database pool)
///
/// # Returns
/// The complete handler tree for the bot
pub fn schema(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    dptree::entry()
        // Command handler
        .branch(command_handler())
        // Callback query handler
        .branch(callback_handler(deps))
}

/// Handler for bot commands (/start)
///
/// Takes no dependencies: the menu is static and sending it touches nothing
/// but the Telegram API.
fn command_handler() -> UpdateHandler<HandlerError> {
    use crate::telegram::menu::show_main_menu;

    Update::filter_message().branch(dptree::entry().filter_command::<Command>().endpoint(
        |bot: Bot, msg: Message, cmd: Command| async move {
            log::info!("Received command: {:?} from chat {}", cmd, msg.chat.id);

            match cmd {
                Command::Start => {
                    show_main_menu(&bot, msg.chat.id).await?;
                }
            }
            Ok(())
        },
    ))
}

/// Handler for callback queries (inline keyboard buttons)
fn callback_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    use crate::telegram::menu::handle_menu_callback;

    Update::filter_callback_query().endpoint(move |bot: Bot, q: CallbackQuery| {
        let deps = deps.clone();
        async move {
            let result: teloxide::RequestError = match handle_menu_callback(bot, q, deps.db_pool.clone()).await {
                Ok(()) => return Ok(()),
                Err(e) => e,
            };
            Err(Box::new(result) as HandlerError)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    #[test]
    fn test_schema_builds_from_deps() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("bot.db");
        let pool = crate::storage::create_pool(path.to_str().unwrap()).unwrap();

        let _handler = schema(HandlerDeps::new(Arc::new(pool)));
    }
}
