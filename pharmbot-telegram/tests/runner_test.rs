//! Integration tests for [`pharmbot_telegram::process_message`].
//!
//! Uses a recording [`pharmbot_core::Bot`] in place of Telegram and the real routing table, so every test
//! checks exactly what would have been sent for one inbound message.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use pharmbot_core::{Bot, BotError, Chat, InboundMessage, KeyboardAction, OutboundReply, User};
use pharmbot_dispatch::{build_handler_chain, ReplyCatalog};
use pharmbot_telegram::process_message;

/// Records every reply instead of sending it.
#[derive(Default)]
struct RecordingBot {
    sent: Mutex<Vec<(i64, OutboundReply)>>,
}

impl RecordingBot {
    fn sent(&self) -> Vec<(i64, OutboundReply)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Bot for RecordingBot {
    async fn send_reply(&self, chat: &Chat, reply: &OutboundReply) -> pharmbot_core::Result<()> {
        self.sent.lock().unwrap().push((chat.id, reply.clone()));
        Ok(())
    }
}

/// Fails every send, like a network outage.
struct FailingBot;

#[async_trait]
impl Bot for FailingBot {
    async fn send_reply(&self, _chat: &Chat, _reply: &OutboundReply) -> pharmbot_core::Result<()> {
        Err(BotError::Bot("connection reset".to_string()))
    }
}

fn message(command: Option<&str>, raw_text: &str) -> InboundMessage {
    InboundMessage {
        id: "42".to_string(),
        user: User {
            id: 7,
            username: None,
            first_name: Some("Dilnoza".to_string()),
            last_name: None,
        },
        chat: Chat {
            id: 1001,
            chat_type: "private".to_string(),
        },
        command: command.map(str::to_string),
        raw_text: raw_text.to_string(),
        created_at: Utc::now(),
    }
}

/// **Test: /start sends one reply to the originating chat with the keyboard attached.**
#[tokio::test]
async fn test_start_sends_keyboard_to_chat() {
    let chain = build_handler_chain(Arc::new(ReplyCatalog::new()));
    let bot = RecordingBot::default();

    process_message(&chain, &bot, &message(Some("start"), "/start")).await;

    let sent = bot.sent();
    assert_eq!(sent.len(), 1);
    let (chat_id, reply) = &sent[0];
    assert_eq!(*chat_id, 1001);
    assert!(reply.text.starts_with("Hi! Welcome"));
    assert!(matches!(reply.keyboard, KeyboardAction::Attach(_)));
}

/// **Test: /close removes the keyboard.**
#[tokio::test]
async fn test_close_removes_keyboard() {
    let chain = build_handler_chain(Arc::new(ReplyCatalog::new()));
    let bot = RecordingBot::default();

    process_message(&chain, &bot, &message(Some("close"), "/close")).await;

    let sent = bot.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].1.text, "Ok");
    assert_eq!(sent[0].1.keyboard, KeyboardAction::Remove);
}

/// **Test: An unregistered command is dropped silently.**
#[tokio::test]
async fn test_unregistered_command_sends_nothing() {
    let chain = build_handler_chain(Arc::new(ReplyCatalog::new()));
    let bot = RecordingBot::default();

    process_message(&chain, &bot, &message(Some("foobar"), "/foobar")).await;
    process_message(&chain, &bot, &message(Some("Start"), "/Start")).await;

    assert!(bot.sent().is_empty());
}

/// **Test: Free text gets exactly one classifier reply.**
#[tokio::test]
async fn test_free_text_sends_one_reply() {
    let chain = build_handler_chain(Arc::new(ReplyCatalog::new()));
    let bot = RecordingBot::default();

    process_message(&chain, &bot, &message(None, "Dorixona ochiqmi?")).await;

    let sent = bot.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(
        sent[0].1.text,
        "Of course you can ask! I'll just be culturally silent..."
    );
}

/// **Test: A send failure is logged, not propagated; later messages still go out.**
#[tokio::test]
async fn test_send_failure_does_not_poison_later_messages() {
    let chain = build_handler_chain(Arc::new(ReplyCatalog::new()));

    process_message(&chain, &FailingBot, &message(Some("phone"), "/phone")).await;

    let bot = RecordingBot::default();
    process_message(&chain, &bot, &message(Some("phone"), "/phone")).await;
    assert_eq!(bot.sent()[0].1.text, "Phone: +998 99 405 33 00");
}
