use teloxide::prelude::*;
use teloxide::types::InlineKeyboardMarkup;

use crate::telegram::Bot;

/// Greeting shown above the services keyboard.
pub const WELCOME_TEXT: &str = "Welcome to X VisibilityBot! Choose a service:";

/// The services menu: (button label, callback action id), in display order.
///
/// Static configuration enumerated once; `callback_router` understands the
/// action ids. Rendered one button per row.
pub const SERVICES: [(&str, &str); 15] = [
    ("💰 Wallet", "wallet"),
    ("📈 Buy X Followers Real", "buy_followers"),
    ("❤️ Buy X Likes Real", "buy_likes"),
    ("➕ Add X Account", "add_account"),
    ("🔗 Referral", "referral"),
    ("🚀 Boost Volume", "boost_volume"),
    ("🛡️ Hire Mods", "hire_mods"),
    ("⚔️ Hire Raiders", "hire_raiders"),
    ("💻 Hire Dev", "hire_dev"),
    ("🌐 Get a Website", "get_website"),
    ("🎨 Graphics Design", "graphics_design"),
    ("💬 Real Comments", "real_comments"),
    ("📱 Real TG", "real_tg"),
    ("🛒 Orders", "orders"),
    ("📝 Subscribe", "subscribe"),
];

/// Builds the services keyboard, one button per row.
pub fn main_menu_keyboard() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(
        SERVICES
            .iter()
            .map(|(label, action)| vec![crate::telegram::cb(*label, *action)]),
    )
}

/// Sends the services menu with the fixed greeting.
pub async fn show_main_menu(bot: &Bot, chat_id: ChatId) -> ResponseResult<Message> {
    bot.send_message(chat_id, WELCOME_TEXT)
        .reply_markup(main_menu_keyboard())
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    use teloxide::types::InlineKeyboardButtonKind;

    #[test]
    fn test_keyboard_has_one_button_per_service() {
        let keyboard = main_menu_keyboard();

        assert_eq!(keyboard.inline_keyboard.len(), SERVICES.len());
        for row in &keyboard.inline_keyboard {
            assert_eq!(row.len(), 1);
        }
    }

    #[test]
    fn test_keyboard_preserves_order_and_action_ids() {
        let keyboard = main_menu_keyboard();

        for (row, (label, action)) in keyboard.inline_keyboard.iter().zip(SERVICES.iter()) {
            let button = &row[0];
            assert_eq!(button.text, *label);
            match &button.kind {
                InlineKeyboardButtonKind::CallbackData(data) => assert_eq!(data, action),
                other => panic!("expected callback button, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_wallet_is_the_first_service() {
        assert_eq!(SERVICES[0].1, "wallet");
        assert_eq!(SERVICES[1].1, "buy_followers");
    }
}
