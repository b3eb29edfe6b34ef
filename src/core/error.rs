use thiserror::Error;

/// Centralized error types for the application
///
/// All errors in the application are converted to this enum for consistent
/// error handling. Uses `thiserror` for automatic error conversion and
/// display formatting.
#[derive(Error, Debug)]
pub enum AppError {
    /// Database connection pool errors
    #[error("Database pool error: {0}")]
    DatabasePool(#[from] r2d2::Error),

    /// Telegram API errors
    #[error("Telegram error: {0}")]
    Telegram(#[from] teloxide::RequestError),

    /// URL parsing errors
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    /// Startup configuration errors (missing or invalid environment)
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_errors_convert_into_app_error() {
        let parse_err = url::Url::parse("not a url").unwrap_err();
        let err: AppError = parse_err.into();
        assert!(matches!(err, AppError::Url(_)));
    }

    #[test]
    fn test_config_error_display() {
        let err = AppError::Config("BOT_TOKEN environment variable is required".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration error: BOT_TOKEN environment variable is required"
        );
    }
}
