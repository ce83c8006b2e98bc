//! Chain handlers wrapping the router and classifier, plus request logging.

use async_trait::async_trait;
use pharmbot_core::{Handler, HandlerError, HandlerResponse, InboundMessage, Result};
use tracing::{debug, info, instrument};

use crate::classifier::FreeTextClassifier;
use crate::router::CommandRouter;

/// Logs each message in before() and the outcome in after(); always continues.
pub struct LoggingHandler;

#[async_trait]
impl Handler for LoggingHandler {
    #[instrument(skip(self, message))]
    async fn before(&self, message: &InboundMessage) -> Result<bool> {
        info!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            username = %message.user.username.as_deref().unwrap_or("unknown"),
            command = ?message.command,
            "Received message"
        );
        Ok(true)
    }

    #[instrument(skip(self, message, response))]
    async fn after(&self, message: &InboundMessage, response: &HandlerResponse) -> Result<()> {
        match response {
            HandlerResponse::Reply(reply) => info!(
                user_id = message.user.id,
                chat_id = message.chat.id,
                reply_len = reply.text.len(),
                "Reply prepared"
            ),
            other => debug!(
                message_id = %message.id,
                response = ?other,
                "No reply for message"
            ),
        }
        Ok(())
    }
}

/// Answers registered commands; drops unregistered ones; passes plain text on.
pub struct CommandHandler {
    router: CommandRouter,
}

impl CommandHandler {
    pub fn new(router: CommandRouter) -> Self {
        Self { router }
    }
}

#[async_trait]
impl Handler for CommandHandler {
    async fn handle(&self, message: &InboundMessage) -> Result<HandlerResponse> {
        let Some(token) = message.command.as_deref() else {
            return Ok(HandlerResponse::Continue);
        };

        match self.router.route(token) {
            Ok(reply) => Ok(HandlerResponse::Reply(reply)),
            Err(HandlerError::UnsupportedCommand(command)) => {
                debug!(command = %command, "Unregistered command, ignoring");
                Ok(HandlerResponse::Stop)
            }
        }
    }
}

/// Answers any non-command text with the classifier's canned reply.
pub struct FreeTextHandler {
    classifier: FreeTextClassifier,
}

impl FreeTextHandler {
    pub fn new(classifier: FreeTextClassifier) -> Self {
        Self { classifier }
    }
}

#[async_trait]
impl Handler for FreeTextHandler {
    async fn handle(&self, message: &InboundMessage) -> Result<HandlerResponse> {
        if message.command.is_some() {
            return Ok(HandlerResponse::Ignore);
        }
        Ok(HandlerResponse::Reply(
            self.classifier.classify(&message.raw_text),
        ))
    }
}
