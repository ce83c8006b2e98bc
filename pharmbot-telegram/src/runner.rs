//! Polling runner: converts teloxide messages to [`InboundMessage`], dispatches them through the
//! [`HandlerChain`] and sends at most one reply per message.

use std::sync::Arc;

use anyhow::Result;
use handler_chain::HandlerChain;
use pharmbot_core::{Bot as CoreBot, InboundMessage, ToInboundMessage};
use pharmbot_dispatch::Command;
use teloxide::prelude::*;
use teloxide::types::BotCommand;
use tracing::{debug, error, info, instrument, warn};

use super::adapters::TelegramMessageWrapper;
use super::bot_adapter::TelegramBotAdapter;

/// Dispatches one message and sends the reply, if any. Failures are logged and swallowed so one bad
/// update never stops the polling loop.
#[instrument(skip_all, fields(chat_id = message.chat.id, message_id = %message.id))]
pub async fn process_message(chain: &HandlerChain, bot: &dyn CoreBot, message: &InboundMessage) {
    let reply = match pharmbot_dispatch::dispatch(chain, message).await {
        Ok(Some(reply)) => reply,
        Ok(None) => {
            debug!(user_id = message.user.id, "step: no reply");
            return;
        }
        Err(e) => {
            error!(error = %e, user_id = message.user.id, "Handler chain failed");
            return;
        }
    };

    match bot.reply_to(message, &reply).await {
        Ok(()) => info!(
            user_id = message.user.id,
            reply_len = reply.text.len(),
            "step: reply sent"
        ),
        Err(e) => error!(error = %e, user_id = message.user.id, "Failed to send reply"),
    }
}

/// Publishes the registered commands to the client's command menu.
pub async fn register_commands(bot: &teloxide::Bot) -> Result<()> {
    let commands = Command::ALL
        .iter()
        .map(|c| BotCommand::new(c.token(), c.description()));
    bot.set_my_commands(commands).await?;
    Ok(())
}

/// Starts long polling with the given teloxide Bot and HandlerChain.
/// Calls get_me() first so `/cmd@name` can be checked against our username; each update is handled on its own task.
#[instrument(skip(bot, handler_chain))]
pub async fn run_repl(bot: teloxide::Bot, handler_chain: HandlerChain) -> Result<()> {
    let bot_username: Option<Arc<str>> = match bot.get_me().await {
        Ok(me) => me.user.username.as_deref().map(Arc::from),
        Err(e) => {
            warn!(error = %e, "get_me failed; accepting /cmd@any");
            None
        }
    };
    if let Some(username) = &bot_username {
        info!(username = %username, "Bot username set before repl");
    }

    if let Err(e) = register_commands(&bot).await {
        warn!(error = %e, "Failed to register command menu");
    }

    let sender: Arc<dyn CoreBot> = Arc::new(TelegramBotAdapter::new(bot.clone()));
    let chain = handler_chain;

    info!("Bot started, polling for updates");
    teloxide::repl(bot, move |msg: Message| {
        let chain = chain.clone();
        let sender = sender.clone();
        let bot_username = bot_username.clone();

        async move {
            let inbound = TelegramMessageWrapper::new(&msg, bot_username.as_deref()).to_inbound();
            match inbound {
                Some(inbound) => {
                    tokio::spawn(async move {
                        process_message(&chain, sender.as_ref(), &inbound).await;
                    });
                }
                None => debug!(
                    chat_id = msg.chat.id.0,
                    "Ignoring non-text message or command for another bot"
                ),
            }
            respond(())
        }
    })
    .await;

    Ok(())
}
