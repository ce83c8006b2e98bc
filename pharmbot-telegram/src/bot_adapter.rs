//! Wraps teloxide::Bot and implements [`pharmbot_core::Bot`]. Production code sends replies via Telegram; tests can substitute another Bot impl.

use async_trait::async_trait;
use pharmbot_core::{Bot as CoreBot, BotError, Chat, KeyboardAction, KeyboardSpec, OutboundReply, Result};
use teloxide::prelude::*;
use teloxide::types::{ChatId, KeyboardButton, KeyboardMarkup, KeyboardRemove, ReplyMarkup};

/// Builds Telegram's reply keyboard from a core layout.
pub fn keyboard_markup(spec: &KeyboardSpec) -> KeyboardMarkup {
    let rows: Vec<Vec<KeyboardButton>> = spec
        .rows
        .iter()
        .map(|row| row.iter().map(|label| KeyboardButton::new(label.clone())).collect())
        .collect();

    let mut markup = KeyboardMarkup::new(rows);
    if spec.resize {
        markup = markup.resize_keyboard();
    }
    if spec.one_time {
        markup = markup.one_time_keyboard();
    }
    markup
}

/// Markup to send with a reply; `None` leaves the client's keyboard untouched.
pub fn reply_markup(action: &KeyboardAction) -> Option<ReplyMarkup> {
    match action {
        KeyboardAction::Attach(spec) => Some(ReplyMarkup::Keyboard(keyboard_markup(spec))),
        KeyboardAction::Remove => Some(ReplyMarkup::KeyboardRemove(KeyboardRemove::new())),
        KeyboardAction::None => None,
    }
}

/// Thin wrapper around teloxide::Bot that implements pharmbot-core's Bot trait.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_reply(&self, chat: &Chat, reply: &OutboundReply) -> Result<()> {
        let request = self.bot.send_message(ChatId(chat.id), reply.text.clone());
        let sent = match reply_markup(&reply.keyboard) {
            Some(markup) => request.reply_markup(markup).await,
            None => request.await,
        };
        sent.map_err(|e| BotError::Bot(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(one_time: bool, resize: bool) -> KeyboardSpec {
        KeyboardSpec {
            rows: vec![vec!["🔍 Qidirish".to_string(), "💬 Fikr bildirish".to_string()]],
            one_time,
            resize,
        }
    }

    #[test]
    fn test_keyboard_markup_keeps_layout_and_flags() {
        let markup = keyboard_markup(&spec(false, true));
        assert_eq!(markup.keyboard.len(), 1);
        assert_eq!(markup.keyboard[0].len(), 2);
        assert_eq!(markup.keyboard[0][0].text, "🔍 Qidirish");
        assert!(markup.resize_keyboard);
        assert!(!markup.one_time_keyboard);

        let one_time = keyboard_markup(&spec(true, false));
        assert!(one_time.one_time_keyboard);
        assert!(!one_time.resize_keyboard);
    }

    #[test]
    fn test_reply_markup_per_action() {
        assert!(matches!(
            reply_markup(&KeyboardAction::Attach(spec(false, true))),
            Some(ReplyMarkup::Keyboard(_))
        ));
        assert!(matches!(
            reply_markup(&KeyboardAction::Remove),
            Some(ReplyMarkup::KeyboardRemove(_))
        ));
        assert!(reply_markup(&KeyboardAction::None).is_none());
    }
}
