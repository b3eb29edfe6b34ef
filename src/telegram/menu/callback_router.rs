use std::sync::Arc;

use teloxide::prelude::*;
use teloxide::RequestError;

use crate::storage::{get_connection, get_user_balance, DbPool};
use crate::telegram::Bot;

/// Instructions shown for the followers service.
pub const BUY_FOLLOWERS_TEXT: &str =
    "Buy X Followers Real: Select quantity (e.g., 100 for $5). Reply with /buy 100 followers";

/// Formats the wallet balance line, always with two decimal places.
pub fn wallet_balance_text(balance: f64) -> String {
    format!("Your wallet balance: ${:.2}", balance)
}

/// Placeholder reply for services that are not wired up yet.
pub fn coming_soon_text(action: &str) -> String {
    format!("Coming soon: {}", title_case(action))
}

/// Turns an action id like "hire_mods" into "Hire Mods".
fn title_case(action: &str) -> String {
    action
        .split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Routes a services-menu button press.
///
/// Acknowledges the callback first so the client stops its spinner, then
/// edits the menu message in place with the selected service's reply.
pub async fn handle_menu_callback(
    bot: Bot,
    q: CallbackQuery,
    db_pool: Arc<DbPool>,
) -> ResponseResult<()> {
    let callback_id = q.id.clone();

    let Some(data) = q.data.as_deref() else {
        let _ = bot.answer_callback_query(callback_id).await;
        return Ok(());
    };

    let (chat_id, message_id) = match q.message.as_ref() {
        Some(m) => (m.chat().id, m.id()),
        None => {
            let _ = bot.answer_callback_query(callback_id).await;
            return Ok(());
        }
    };

    let _ = bot.answer_callback_query(callback_id).await;

    let text = match data {
        "wallet" => {
            let user_id = i64::try_from(q.from.id.0).unwrap_or(0);
            wallet_balance_text(lookup_balance(&db_pool, user_id)?)
        }
        "buy_followers" => BUY_FOLLOWERS_TEXT.to_string(),
        other => coming_soon_text(other),
    };

    bot.edit_message_text(chat_id, message_id, text).await?;

    Ok(())
}

/// Reads the user's balance, treating an unknown user as an empty wallet.
///
/// Connection and query failures propagate; only a missing row reads as 0.0.
fn lookup_balance(db_pool: &DbPool, user_id: i64) -> ResponseResult<f64> {
    let conn = get_connection(db_pool)
        .map_err(|e| RequestError::from(std::sync::Arc::new(std::io::Error::other(e.to_string()))))?;

    let balance = get_user_balance(&conn, user_id)
        .map_err(|e| RequestError::from(std::sync::Arc::new(std::io::Error::other(e.to_string()))))?;

    Ok(balance.unwrap_or(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wallet_balance_text_formats_two_decimals() {
        assert_eq!(wallet_balance_text(0.0), "Your wallet balance: $0.00");
        assert_eq!(wallet_balance_text(12.5), "Your wallet balance: $12.50");
        assert_eq!(wallet_balance_text(3.456), "Your wallet balance: $3.46");
    }

    #[test]
    fn test_coming_soon_text_title_cases_action_ids() {
        assert_eq!(coming_soon_text("referral"), "Coming soon: Referral");
        assert_eq!(coming_soon_text("hire_mods"), "Coming soon: Hire Mods");
        assert_eq!(
            coming_soon_text("graphics_design"),
            "Coming soon: Graphics Design"
        );
    }

    #[test]
    fn test_buy_followers_text_is_fixed() {
        assert!(BUY_FOLLOWERS_TEXT.starts_with("Buy X Followers Real:"));
        assert!(BUY_FOLLOWERS_TEXT.ends_with("/buy 100 followers"));
    }

    #[test]
    fn test_lookup_balance_defaults_missing_row_to_zero() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("bot.db");
        let pool = crate::storage::create_pool(path.to_str().unwrap()).unwrap();

        assert_eq!(lookup_balance(&pool, 42).unwrap(), 0.0);
    }

    #[test]
    fn test_lookup_balance_propagates_store_errors() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("bot.db");
        let pool = crate::storage::create_pool(path.to_str().unwrap()).unwrap();

        // A broken store must surface as an error, not as an empty wallet
        let conn = get_connection(&pool).unwrap();
        conn.execute("DROP TABLE users", []).unwrap();

        assert!(lookup_balance(&pool, 42).is_err());
    }
}
