//! Core types: user, chat, inbound message, outbound reply, keyboard layout, and Handler trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User identity (id, username, names).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Chat (channel or private) identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    pub chat_type: String,
}

/// One inbound text message as seen by the dispatch core.
///
/// `command` is set when the transport recognised an explicit command addressed to this bot; it holds
/// the bare token (`start`, not `/start@name`). `raw_text` is always the full message text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InboundMessage {
    pub id: String,
    pub user: User,
    pub chat: Chat,
    pub command: Option<String>,
    pub raw_text: String,
    pub created_at: DateTime<Utc>,
}

/// Reply keyboard layout: rows of button labels plus client rendering flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyboardSpec {
    pub rows: Vec<Vec<String>>,
    /// Hide the keyboard after one use.
    pub one_time: bool,
    /// Let the client shrink the keyboard to fit its buttons.
    pub resize: bool,
}

impl KeyboardSpec {
    /// Number of buttons across all rows.
    pub fn button_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }
}

/// What the transport should do with the reply keyboard when sending a reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "keyboard", rename_all = "snake_case")]
pub enum KeyboardAction {
    Attach(KeyboardSpec),
    Remove,
    None,
}

/// Reply instruction handed back to the transport: body text plus keyboard action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundReply {
    pub text: String,
    pub keyboard: KeyboardAction,
}

impl OutboundReply {
    /// Plain text reply without keyboard changes.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            keyboard: KeyboardAction::None,
        }
    }
}

/// Handler result for the chain. `Reply` carries the outbound reply so later handlers can see it in `after()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Pass to next handler.
    Continue,
    /// Stop the chain; nothing is sent.
    Stop,
    /// Skip this handler, try next.
    Ignore,
    /// Stop the chain and send this reply.
    Reply(OutboundReply),
}

/// Converts a transport-specific update into an [`InboundMessage`].
///
/// Returns `None` when the update carries nothing the core should see (non-text content, commands
/// addressed to another bot).
pub trait ToInboundMessage: Send + Sync {
    fn to_inbound(&self) -> Option<InboundMessage>;
}

/// Single handler concept: optional before / handle / after. Chain runs all before → handle until Stop/Reply → all after (reverse).
#[async_trait]
pub trait Handler: Send + Sync {
    /// Runs before the handle phase. Return false to stop the chain.
    async fn before(&self, _message: &InboundMessage) -> crate::error::Result<bool> {
        Ok(true)
    }
    /// Processes the message. Return Stop or Reply to end the handle phase. Default: Continue.
    async fn handle(&self, _message: &InboundMessage) -> crate::error::Result<HandlerResponse> {
        Ok(HandlerResponse::Continue)
    }
    /// Runs after the handle phase (reverse order), with the final response.
    async fn after(
        &self,
        _message: &InboundMessage,
        _response: &HandlerResponse,
    ) -> crate::error::Result<()> {
        Ok(())
    }
}
