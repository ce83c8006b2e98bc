//! Adapters from Telegram (teloxide) types to pharmbot_core types.
//! Depends only on teloxide and pharmbot_core type definitions.

use pharmbot_core::{Chat, InboundMessage, ToInboundMessage, User};

/// How a message text relates to bot commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandParse<'a> {
    /// Plain text for the classifier.
    NotACommand,
    /// Command token without `/` or `@username`; arguments dropped.
    Command(&'a str),
    /// `/cmd@other_bot`: meant for a different bot in the same chat.
    OtherBot,
}

/// Splits `/token@username args` into its command token.
///
/// A `@username` suffix must name this bot (compared case-insensitively, as Telegram usernames are);
/// when our username is unknown the suffix is accepted.
pub fn parse_command<'a>(text: &'a str, bot_username: Option<&str>) -> CommandParse<'a> {
    let Some(rest) = text.strip_prefix('/') else {
        return CommandParse::NotACommand;
    };
    let word = rest.split_whitespace().next().unwrap_or("");
    // "/ start" leaves the word after the space; only a word glued to '/' is a command.
    let word = if rest.starts_with(char::is_whitespace) { "" } else { word };

    match word.split_once('@') {
        Some((token, addressee)) => match bot_username {
            Some(me) if !addressee.eq_ignore_ascii_case(me) => CommandParse::OtherBot,
            _ => CommandParse::Command(token),
        },
        None => CommandParse::Command(word),
    }
}

/// Wraps a teloxide User for conversion to core [`User`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> TelegramUserWrapper<'a> {
    pub fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
            last_name: self.0.last_name.clone(),
        }
    }
}

/// Wraps a teloxide Message (and the bot's own username, for `/cmd@name` checks) for conversion to [`InboundMessage`].
pub struct TelegramMessageWrapper<'a> {
    pub message: &'a teloxide::types::Message,
    pub bot_username: Option<&'a str>,
}

impl<'a> TelegramMessageWrapper<'a> {
    pub fn new(message: &'a teloxide::types::Message, bot_username: Option<&'a str>) -> Self {
        Self {
            message,
            bot_username,
        }
    }

    fn user(&self) -> User {
        self.message
            .from
            .as_ref()
            .map(|u| TelegramUserWrapper(u).to_core())
            .unwrap_or_else(|| User {
                id: 0,
                username: None,
                first_name: None,
                last_name: None,
            })
    }
}

impl<'a> ToInboundMessage for TelegramMessageWrapper<'a> {
    fn to_inbound(&self) -> Option<InboundMessage> {
        let text = self.message.text()?;
        let command = match parse_command(text, self.bot_username) {
            CommandParse::NotACommand => None,
            CommandParse::Command(token) => Some(token.to_string()),
            CommandParse::OtherBot => return None,
        };

        Some(InboundMessage {
            id: self.message.id.to_string(),
            user: self.user(),
            chat: Chat {
                id: self.message.chat.id.0,
                chat_type: format!("{:?}", self.message.chat.kind),
            },
            command,
            raw_text: text.to_string(),
            created_at: self.message.date,
        })
    }
}
