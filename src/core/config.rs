//! Configuration constants for the bot

use once_cell::sync::Lazy;
use std::env;

use crate::core::error::{AppError, AppResult};

/// Bot token
/// Read from BOT_TOKEN or TELOXIDE_TOKEN environment variable
pub static BOT_TOKEN: Lazy<String> = Lazy::new(|| {
    env::var("BOT_TOKEN")
        .or_else(|_| env::var("TELOXIDE_TOKEN"))
        .unwrap_or_else(|_| String::new())
});

/// Database file path
/// Read from DATABASE_PATH environment variable
/// Default: bot.db
pub static DATABASE_PATH: Lazy<String> = Lazy::new(|| env::var("DATABASE_PATH").unwrap_or_else(|_| "bot.db".to_string()));

/// Log file path
/// Read from LOG_FILE_PATH environment variable
/// Default: visibot.log
pub static LOG_FILE_PATH: Lazy<String> =
    Lazy::new(|| env::var("LOG_FILE_PATH").unwrap_or_else(|_| "visibot.log".to_string()));

/// Webhook configuration (Render deployment)
pub mod webhook {
    use once_cell::sync::Lazy;
    use std::env;

    /// Default listen port when PORT is not set
    pub const DEFAULT_PORT: u16 = 8443;

    /// Presence of the RENDER environment variable selects webhook mode
    pub static RENDER: Lazy<bool> = Lazy::new(|| env::var("RENDER").is_ok());

    /// Webhook listen port
    /// Read from PORT environment variable
    pub static PORT: Lazy<u16> = Lazy::new(|| {
        env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_PORT)
    });

    /// Publicly reachable hostname used to build the webhook callback URL
    /// Read from RENDER_EXTERNAL_HOSTNAME environment variable
    pub static EXTERNAL_HOSTNAME: Lazy<Option<String>> = Lazy::new(|| {
        env::var("RENDER_EXTERNAL_HOSTNAME")
            .ok()
            .and_then(|s| if s.trim().is_empty() { None } else { Some(s) })
    });
}

/// How the bot receives updates from Telegram.
///
/// Resolved once at startup and passed explicitly to `run_bot`; handlers never
/// inspect the process environment themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transport {
    /// Pull-style long polling (local development default)
    Polling,
    /// Push-style webhook served over HTTP on `port`, reachable at `host`
    Webhook { port: u16, host: String },
}

impl Transport {
    /// Resolves the transport mode from explicit inputs.
    ///
    /// Webhook mode is selected when forced via CLI or when running on Render;
    /// it requires a publicly reachable hostname.
    pub fn resolve(force_webhook: bool, render: bool, port: u16, host: Option<&str>) -> AppResult<Self> {
        if force_webhook || render {
            let host = host
                .map(str::trim)
                .filter(|h| !h.is_empty())
                .ok_or_else(|| AppError::Config("webhook mode requires RENDER_EXTERNAL_HOSTNAME".to_string()))?;
            Ok(Transport::Webhook {
                port,
                host: host.to_string(),
            })
        } else {
            Ok(Transport::Polling)
        }
    }

    /// Resolves the transport mode from the process environment.
    pub fn from_env(force_webhook: bool) -> AppResult<Self> {
        Self::resolve(
            force_webhook,
            *webhook::RENDER,
            *webhook::PORT,
            webhook::EXTERNAL_HOSTNAME.as_deref(),
        )
    }
}

/// Returns the bot token, or a configuration error when it is absent.
///
/// Called before any listener starts so a missing secret aborts the process.
pub fn require_bot_token(token: &str) -> AppResult<&str> {
    if token.trim().is_empty() {
        Err(AppError::Config(
            "BOT_TOKEN environment variable is required".to_string(),
        ))
    } else {
        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_defaults_to_polling() {
        let transport = Transport::resolve(false, false, webhook::DEFAULT_PORT, None).unwrap();
        assert_eq!(transport, Transport::Polling);
    }

    #[test]
    fn test_render_selects_webhook_mode() {
        let transport = Transport::resolve(false, true, 10000, Some("example.onrender.com")).unwrap();
        assert_eq!(
            transport,
            Transport::Webhook {
                port: 10000,
                host: "example.onrender.com".to_string(),
            }
        );
    }

    #[test]
    fn test_webhook_without_hostname_is_an_error() {
        let result = Transport::resolve(true, false, webhook::DEFAULT_PORT, None);
        assert!(matches!(result, Err(AppError::Config(_))));

        let result = Transport::resolve(true, false, webhook::DEFAULT_PORT, Some("  "));
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_missing_token_is_an_error() {
        assert!(matches!(require_bot_token(""), Err(AppError::Config(_))));
        assert!(matches!(require_bot_token("   "), Err(AppError::Config(_))));
        assert_eq!(require_bot_token("123:abc").unwrap(), "123:abc");
    }
}
