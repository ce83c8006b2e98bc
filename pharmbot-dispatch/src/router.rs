//! Command router: registered command tokens → catalog replies.

use std::sync::Arc;

use pharmbot_core::{HandlerError, OutboundReply};

use crate::catalog::{Intent, ReplyCatalog};

/// Commands the bot registers. Tokens are matched exactly (case-sensitive, no `/`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Start,
    Close,
    Address,
    Phone,
    Site,
    WorkTime,
}

impl Command {
    pub const ALL: [Command; 6] = [
        Command::Start,
        Command::Close,
        Command::Address,
        Command::Phone,
        Command::Site,
        Command::WorkTime,
    ];

    /// Parses a bare command token (`"start"`, not `"/start"`).
    pub fn parse(token: &str) -> Option<Command> {
        Self::ALL.into_iter().find(|c| c.token() == token)
    }

    pub fn token(self) -> &'static str {
        match self {
            Command::Start => "start",
            Command::Close => "close",
            Command::Address => "address",
            Command::Phone => "phone",
            Command::Site => "site",
            Command::WorkTime => "work_time",
        }
    }

    /// Short text shown in the client's command menu.
    pub fn description(self) -> &'static str {
        match self {
            Command::Start => "Welcome message and menu keyboard",
            Command::Close => "Hide the menu keyboard",
            Command::Address => "Our address",
            Command::Phone => "Contact phone",
            Command::Site => "Where to find us online",
            Command::WorkTime => "Working hours",
        }
    }

    pub fn intent(self) -> Intent {
        match self {
            Command::Start => Intent::Start,
            Command::Close => Intent::DismissKeyboard,
            Command::Address => Intent::Address,
            Command::Phone => Intent::Phone,
            Command::Site => Intent::Site,
            Command::WorkTime => Intent::WorkTime,
        }
    }
}

/// Stateless router over a shared [`ReplyCatalog`].
#[derive(Debug, Clone)]
pub struct CommandRouter {
    catalog: Arc<ReplyCatalog>,
}

impl CommandRouter {
    pub fn new(catalog: Arc<ReplyCatalog>) -> Self {
        Self { catalog }
    }

    /// Reply for a raw command token. Unregistered tokens yield [`HandlerError::UnsupportedCommand`].
    pub fn route(&self, token: &str) -> Result<OutboundReply, HandlerError> {
        Command::parse(token)
            .map(|command| self.route_command(command))
            .ok_or_else(|| HandlerError::UnsupportedCommand(token.to_string()))
    }

    pub fn route_command(&self, command: Command) -> OutboundReply {
        self.catalog.lookup(command.intent()).to_reply()
    }
}
