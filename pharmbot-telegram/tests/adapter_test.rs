//! Integration tests for [`pharmbot_telegram::TelegramMessageWrapper`] using Bot API update JSON.

use pharmbot_core::ToInboundMessage;
use pharmbot_telegram::TelegramMessageWrapper;
use teloxide::types::Message;

fn text_message(text: &str) -> Message {
    let json = serde_json::json!({
        "message_id": 42,
        "date": 1_700_000_000,
        "chat": { "id": 1001, "type": "private", "first_name": "Dilnoza" },
        "from": { "id": 7, "is_bot": false, "first_name": "Dilnoza", "username": "dilnoza" },
        "text": text
    });
    serde_json::from_value(json).expect("valid Bot API message")
}

#[test]
fn test_free_text_has_no_command() {
    let msg = text_message("Can I come in?");
    let inbound = TelegramMessageWrapper::new(&msg, Some("pharm_bot"))
        .to_inbound()
        .unwrap();

    assert_eq!(inbound.command, None);
    assert_eq!(inbound.raw_text, "Can I come in?");
    assert_eq!(inbound.chat.id, 1001);
    assert_eq!(inbound.user.id, 7);
    assert_eq!(inbound.user.username.as_deref(), Some("dilnoza"));
    assert_eq!(inbound.id, "42");
}

#[test]
fn test_command_token_is_extracted() {
    let msg = text_message("/work_time@Pharm_Bot today");
    let inbound = TelegramMessageWrapper::new(&msg, Some("pharm_bot"))
        .to_inbound()
        .unwrap();

    assert_eq!(inbound.command.as_deref(), Some("work_time"));
    assert_eq!(inbound.raw_text, "/work_time@Pharm_Bot today");
}

#[test]
fn test_command_for_other_bot_is_skipped() {
    let msg = text_message("/start@another_bot");
    assert!(TelegramMessageWrapper::new(&msg, Some("pharm_bot"))
        .to_inbound()
        .is_none());
}
