use anyhow::Result;
use dotenvy::dotenv;
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::update_listeners::webhooks;
use teloxide::update_listeners::Polling;

use visibot::cli::{Cli, Commands};
use visibot::core::config::{self, Transport};
use visibot::core::{init_logger, log_startup_configuration, AppResult};
use visibot::storage::create_pool;
use visibot::telegram::{create_bot, schema, setup_bot_commands, HandlerDeps};

/// Main entry point for the Telegram bot
///
/// Parses CLI arguments and dispatches to appropriate subcommand.
///
/// # Errors
/// Returns an error if initialization fails (logging, database, bot creation).
#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse_args();

    // Load environment variables from .env if present
    let _ = dotenv();

    // Initialize logger (console + file)
    init_logger(&config::LOG_FILE_PATH)?;

    // Dispatch to appropriate command
    match cli.command {
        Some(Commands::Run { webhook }) => {
            log::info!("Running bot in normal mode (webhook: {})", webhook);
            run_bot(webhook).await?;
        }
        None => {
            // No command specified - default to running the bot
            log::info!("No command specified, running bot in default mode");
            run_bot(false).await?;
        }
    }

    Ok(())
}

/// Run the Telegram bot
async fn run_bot(force_webhook: bool) -> AppResult<()> {
    log::info!("Starting bot...");

    // Fail fast before touching the network or the database
    let token = config::require_bot_token(&config::BOT_TOKEN)?.to_string();
    let transport = Transport::from_env(force_webhook)?;

    log_startup_configuration(&transport);

    // Create database connection pool
    let db_pool = Arc::new(create_pool(&config::DATABASE_PATH)?);

    // Create bot instance
    let bot = create_bot(&token);

    // Register the command menu; a failure here is not fatal
    if let Err(e) = setup_bot_commands(&bot).await {
        log::warn!("Failed to set bot commands: {}", e);
    }

    // Create the dispatcher handler tree using the modular schema
    let handler = schema(HandlerDeps::new(Arc::clone(&db_pool)));

    let mut dispatcher = Dispatcher::builder(bot.clone(), handler)
        .dependencies(DependencyMap::new())
        .enable_ctrlc_handler()
        .build();

    match transport {
        Transport::Webhook { port, host } => {
            log::info!("Starting bot in webhook mode on port {} (host: {})", port, host);

            // Telegram calls back at https://<host>/<token>; the token path
            // segment keeps strangers from posting fake updates.
            let addr = ([0, 0, 0, 0], port).into();
            let url = url::Url::parse(&format!("https://{}/{}", host, token))?;

            let listener = webhooks::axum(bot.clone(), webhooks::Options::new(addr, url)).await?;

            dispatcher
                .dispatch_with_listener(
                    listener,
                    LoggingErrorHandler::with_custom_text("An error from the update listener"),
                )
                .await;
        }
        Transport::Polling => {
            log::info!("Starting bot in long polling mode");

            // Create polling listener that drops pending updates on start
            let listener = Polling::builder(bot.clone()).drop_pending_updates().build();

            dispatcher
                .dispatch_with_listener(
                    listener,
                    LoggingErrorHandler::with_custom_text("An error from the update listener"),
                )
                .await;
        }
    }

    log::info!("Dispatcher shutdown gracefully");
    Ok(())
}
