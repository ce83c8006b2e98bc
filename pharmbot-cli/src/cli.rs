//! CLI parser, config loading and the offline `reply` path.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pharmbot_core::{Chat, InboundMessage, KeyboardAction, OutboundReply, User};
use pharmbot_dispatch::{build_handler_chain, dispatch, Command, ReplyCatalog};
use pharmbot_telegram::{parse_command, run_repl, CommandParse, TelegramConfig};
use tracing::info;

#[derive(Parser)]
#[command(name = "pharmbot")]
#[command(about = "Pharmacy info bot for Telegram", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the Telegram bot (config from env; token can override BOT_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
    /// Print the reply the bot would send for TEXT, without connecting to Telegram.
    Reply {
        text: String,
    },
    /// List the registered commands.
    Commands,
}

/// Load TelegramConfig from environment. If `token` is provided it overrides BOT_TOKEN.
pub fn load_config(token: Option<String>) -> Result<TelegramConfig> {
    let config = TelegramConfig::load(token)?;
    config.validate()?;
    Ok(config)
}

/// Init logging, build the routing table, then poll until interrupted.
pub async fn run(config: TelegramConfig) -> Result<()> {
    if let Some(log_file) = config.log_file.as_deref() {
        if let Some(dir) = Path::new(log_file).parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
        }
    }
    pharmbot_core::init_tracing(config.log_file.as_deref())?;

    let bot = config.build_bot()?;
    let chain = build_handler_chain(Arc::new(ReplyCatalog::new()));
    info!(handlers = chain.len(), "Routing table built");

    run_repl(bot, chain).await
}

/// Runs `text` through the same routing table the bot uses. `None` means the bot stays silent.
pub async fn reply_offline(text: &str) -> Result<Option<OutboundReply>> {
    let command = match parse_command(text, None) {
        CommandParse::NotACommand => None,
        CommandParse::Command(token) => Some(token.to_string()),
        CommandParse::OtherBot => return Ok(None),
    };
    let message = InboundMessage {
        id: "cli".to_string(),
        user: User {
            id: 0,
            username: None,
            first_name: None,
            last_name: None,
        },
        chat: Chat {
            id: 0,
            chat_type: "cli".to_string(),
        },
        command,
        raw_text: text.to_string(),
        created_at: chrono::Utc::now(),
    };

    let chain = build_handler_chain(Arc::new(ReplyCatalog::new()));
    Ok(dispatch(&chain, &message).await?)
}

/// Reply text, followed by the keyboard action as JSON when it changes the keyboard.
pub fn render_reply(reply: &OutboundReply) -> Result<String> {
    match reply.keyboard {
        KeyboardAction::None => Ok(reply.text.clone()),
        _ => Ok(format!(
            "{}\n{}",
            reply.text,
            serde_json::to_string_pretty(&reply.keyboard)?
        )),
    }
}

/// `/token - description` lines for every registered command.
pub fn command_list() -> String {
    Command::ALL
        .iter()
        .map(|c| format!("/{} - {}", c.token(), c.description()))
        .collect::<Vec<_>>()
        .join("\n")
}
