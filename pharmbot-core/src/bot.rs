//! Bot abstraction for delivering replies.
//!
//! [`Bot`] is transport-agnostic; pharmbot-telegram implements it via teloxide, tests substitute a recorder.

use crate::error::Result;
use crate::types::{Chat, InboundMessage, OutboundReply};
use async_trait::async_trait;

/// Abstraction for sending replies. Implementations map to a transport (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a reply (text plus keyboard action) to the given chat.
    async fn send_reply(&self, chat: &Chat, reply: &OutboundReply) -> Result<()>;

    /// Sends a reply to the chat the message came from.
    async fn reply_to(&self, message: &InboundMessage, reply: &OutboundReply) -> Result<()> {
        self.send_reply(&message.chat, reply).await
    }
}
