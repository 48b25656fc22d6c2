//! Telegram update handlers.
//!
//! Every text message goes through the core classifier first. Fixed
//! commands (`/start`, `/help`, `/listlinks`) and unknown bare commands
//! are transport concerns and are routed here, outside the classifier.

use std::sync::Arc;

use teloxide::{prelude::*, types::Message};

use zima_core::classify::{classify, Classified};

use crate::router::AppState;

mod collector;
mod commands;

pub async fn handle_message(msg: Message, state: Arc<AppState>) -> ResponseResult<()> {
    let Some(text) = msg.text() else {
        return Ok(());
    };

    match classify(text) {
        Classified::ListingRequest(category) => {
            commands::send_category_listing(&msg, &state, category).await
        }
        Classified::Submission { category, links } => {
            // Only group conversations feed the collector; links sent in a
            // direct chat are not collected.
            if msg.chat.is_group() || msg.chat.is_supergroup() {
                collector::handle_submission(&msg, &state, category, links).await
            } else {
                Ok(())
            }
        }
        Classified::Ignored => commands::handle_fixed_command(&msg, &state, text).await,
    }
}
