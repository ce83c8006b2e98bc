//! pharmbot CLI: run the Telegram bot, preview replies offline, list commands. Config from env and optional CLI args.

use anyhow::Result;
use clap::Parser;
use pharmbot_cli::{command_list, load_config, render_reply, reply_offline, run, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let config = load_config(token)?;
            run(config).await
        }
        Commands::Reply { text } => {
            match reply_offline(&text).await? {
                Some(reply) => println!("{}", render_reply(&reply)?),
                None => println!("(no reply)"),
            }
            Ok(())
        }
        Commands::Commands => {
            println!("{}", command_list());
            Ok(())
        }
    }
}
