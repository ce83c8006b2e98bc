//! # pharmbot-cli
//!
//! CLI foundation: argument parsing, config loading, offline reply preview.

pub mod cli;

pub use cli::{command_list, load_config, render_reply, reply_offline, run, Cli, Commands};
