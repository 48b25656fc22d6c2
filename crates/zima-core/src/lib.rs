//! Core domain + application logic for the Zima link-collector bot.
//!
//! This crate is intentionally framework-agnostic. Telegram lives behind a
//! port (trait) implemented in the adapter crate; everything in here is a
//! pure in-memory transformation over the chat link store.

pub mod category;
pub mod classify;
pub mod config;
pub mod domain;
pub mod errors;
pub mod extract;
pub mod formatting;
pub mod logging;
pub mod messaging;
pub mod render;
pub mod store;

pub use errors::{Error, Result};
