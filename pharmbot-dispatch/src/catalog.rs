//! Reply catalog: one fixed reply template per [`Intent`].

use pharmbot_core::{KeyboardAction, KeyboardSpec, OutboundReply};

/// Which canned behaviour to invoke. Closed set; every variant has exactly one template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    Start,
    DismissKeyboard,
    Address,
    Phone,
    Site,
    WorkTime,
    AffirmativeEcho,
    NegativeEcho,
}

const INTENT_COUNT: usize = 8;

impl Intent {
    /// Every intent, in catalog order.
    pub const ALL: [Intent; INTENT_COUNT] = [
        Intent::Start,
        Intent::DismissKeyboard,
        Intent::Address,
        Intent::Phone,
        Intent::Site,
        Intent::WorkTime,
        Intent::AffirmativeEcho,
        Intent::NegativeEcho,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

pub const START_TEXT: &str =
    "Hi! Welcome to join to my channel!\nFor continue follow to use this instructor";
pub const DISMISS_TEXT: &str = "Ok";
pub const ADDRESS_TEXT: &str = "Address: Карши, ул. Жайхун, 31";
pub const PHONE_TEXT: &str = "Phone: +998 99 405 33 00";
pub const SITE_TEXT: &str = "Site: https://yandex.ru/images/search?img_url=https%3A%2F%2Fplay-lh.googleusercontent.com%2FvlFAwOkXvY8AwTdAf_9DqUHaZ11orHiOA9kkNFA1KIbhBxh6ux8pVnVixeMSDM3FklY&lr=10331&pos=3&rpt=simage&source=serp&text=Madina%20pharm%20Qarshi";
pub const WORK_TIME_TEXT: &str = "Work Time: Whole Weekdays from 09:00 a.m to at 18:00 pm";
pub const AFFIRMATIVE_ECHO_TEXT: &str =
    "Of course you can ask! I'll just be culturally silent...";
pub const NEGATIVE_ECHO_TEXT: &str = "Quite possible, who knows?";

/// Labels of the single keyboard row attached to the welcome reply.
pub const START_KEYBOARD_LABELS: [&str; 5] = [
    "🔍 Qidirish",
    "💬 Fikr bildirish",
    "🔄 Tilni o\\`zgartirish",
    "📍Mening joylashuvim: O\\`zbekiston bo\\`yicha",
    "Qanday qo\\`llash mumkin❓",
];

/// Keyboard attached by `/start`: one row, stays visible, resized to fit.
pub fn start_keyboard() -> KeyboardSpec {
    KeyboardSpec {
        rows: vec![START_KEYBOARD_LABELS
            .iter()
            .map(|label| label.to_string())
            .collect()],
        one_time: false,
        resize: true,
    }
}

/// Literal reply body plus keyboard action for one intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyTemplate {
    pub text: &'static str,
    pub keyboard: KeyboardAction,
}

impl ReplyTemplate {
    /// Owned reply ready for the transport.
    pub fn to_reply(&self) -> OutboundReply {
        OutboundReply {
            text: self.text.to_string(),
            keyboard: self.keyboard.clone(),
        }
    }
}

fn build_template(intent: Intent) -> ReplyTemplate {
    let (text, keyboard) = match intent {
        Intent::Start => (START_TEXT, KeyboardAction::Attach(start_keyboard())),
        Intent::DismissKeyboard => (DISMISS_TEXT, KeyboardAction::Remove),
        Intent::Address => (ADDRESS_TEXT, KeyboardAction::None),
        Intent::Phone => (PHONE_TEXT, KeyboardAction::None),
        Intent::Site => (SITE_TEXT, KeyboardAction::None),
        Intent::WorkTime => (WORK_TIME_TEXT, KeyboardAction::None),
        Intent::AffirmativeEcho => (AFFIRMATIVE_ECHO_TEXT, KeyboardAction::None),
        Intent::NegativeEcho => (NEGATIVE_ECHO_TEXT, KeyboardAction::None),
    };
    ReplyTemplate { text, keyboard }
}

/// Immutable intent → template table, built once at startup.
#[derive(Debug, Clone)]
pub struct ReplyCatalog {
    templates: [ReplyTemplate; INTENT_COUNT],
}

impl ReplyCatalog {
    pub fn new() -> Self {
        Self {
            templates: Intent::ALL.map(build_template),
        }
    }

    /// Template for `intent`. Total over [`Intent`].
    pub fn lookup(&self, intent: Intent) -> &ReplyTemplate {
        &self.templates[intent.index()]
    }
}

impl Default for ReplyCatalog {
    fn default() -> Self {
        Self::new()
    }
}
