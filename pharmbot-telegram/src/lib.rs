//! # pharmbot-telegram
//!
//! Telegram transport layer: adapters, [`pharmbot_core::Bot`] implementation with reply keyboards,
//! minimal config, polling runner. Only connectivity and chain execution live here; what to answer is
//! decided by pharmbot-dispatch.

mod adapters;
mod bot_adapter;
mod config;
mod runner;

pub use adapters::{parse_command, CommandParse, TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::{keyboard_markup, reply_markup, TelegramBotAdapter};
pub use config::TelegramConfig;
pub use runner::{process_message, register_commands, run_repl};
