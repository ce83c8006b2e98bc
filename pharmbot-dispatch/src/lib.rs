//! # pharmbot-dispatch
//!
//! The bot's whole decision logic: a fixed [`ReplyCatalog`], a [`CommandRouter`] for registered commands,
//! and a [`FreeTextClassifier`] for everything else. Pure and stateless; the transport feeds
//! [`pharmbot_core::InboundMessage`]s in and sends the returned [`pharmbot_core::OutboundReply`].

pub mod catalog;
pub mod classifier;
pub mod handlers;
pub mod router;

use std::sync::Arc;

use handler_chain::HandlerChain;
use pharmbot_core::{HandlerResponse, InboundMessage, OutboundReply, Result};

pub use catalog::{Intent, ReplyCatalog, ReplyTemplate};
pub use classifier::FreeTextClassifier;
pub use handlers::{CommandHandler, FreeTextHandler, LoggingHandler};
pub use router::{Command, CommandRouter};

/// Builds the routing table: logging → commands → free text.
pub fn build_handler_chain(catalog: Arc<ReplyCatalog>) -> HandlerChain {
    let router = CommandRouter::new(catalog.clone());
    let classifier = FreeTextClassifier::new(catalog);
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(CommandHandler::new(router)))
        .add_handler(Arc::new(FreeTextHandler::new(classifier)))
}

/// Runs one message through the chain; `None` means nothing should be sent.
pub async fn dispatch(chain: &HandlerChain, message: &InboundMessage) -> Result<Option<OutboundReply>> {
    match chain.handle(message).await? {
        HandlerResponse::Reply(reply) => Ok(Some(reply)),
        HandlerResponse::Continue | HandlerResponse::Stop | HandlerResponse::Ignore => Ok(None),
    }
}
