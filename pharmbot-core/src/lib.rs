//! # pharmbot-core
//!
//! Core types and traits for the bot: [`Bot`], [`Handler`], inbound and outbound message types,
//! keyboard layout, errors, and tracing initialization. Transport-agnostic; used by handler-chain,
//! pharmbot-dispatch and pharmbot-telegram.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::Bot;
pub use error::{BotError, HandlerError, Result};
pub use logger::init_tracing;
pub use types::{
    Chat, Handler, HandlerResponse, InboundMessage, KeyboardAction, KeyboardSpec, OutboundReply,
    ToInboundMessage, User,
};
