use teloxide::{prelude::*, types::Message};

use zima_core::{
    category::Category,
    domain::ChatId,
    messaging::types::SendOptions,
    render,
};

use crate::router::AppState;

const GREETING: &str = "Hello! I'm Zima Blue.";

const HELP_TEXT: &str = "<b>Commands:</b>\n\
/start - Start the bot\n\
/help - Show this help\n\
/listlinks - List all links\n\
/movies - Movie links\n\
/games - Game links\n\
/apps - App links\n\
/videos - Video links\n\
/websites - Website links\n\
/uncategorized - Uncategorized links";

/// Reply with one category's listing, link previews suppressed.
pub async fn send_category_listing(
    msg: &Message,
    state: &AppState,
    category: Category,
) -> ResponseResult<()> {
    let chat_id = ChatId(msg.chat.id.0);
    let body = {
        let store = state.store.lock().await;
        render::render_category(&store, chat_id, category)
    };

    if let Err(e) = state
        .messenger
        .send_html(chat_id, &body, SendOptions::no_preview())
        .await
    {
        tracing::warn!("failed to send /{category} listing: {e}");
    }
    Ok(())
}

/// Handle the fixed commands the classifier does not know about.
///
/// Bare commands naming no known category get an "Unknown category."
/// notice; anything that is not a bare `/command` at all stays silent.
pub async fn handle_fixed_command(
    msg: &Message,
    state: &AppState,
    text: &str,
) -> ResponseResult<()> {
    let Some(cmd) = bare_command_token(text) else {
        return Ok(());
    };
    let chat_id = ChatId(msg.chat.id.0);

    match cmd.as_str() {
        "start" => {
            send_best_effort(state, chat_id, GREETING, SendOptions::default()).await;
        }
        "help" => {
            send_best_effort(state, chat_id, HELP_TEXT, SendOptions::default()).await;
        }
        "listlinks" => {
            let body = {
                let store = state.store.lock().await;
                render::render_all(&store, chat_id)
            };
            send_best_effort(state, chat_id, &body, SendOptions::no_preview()).await;
        }
        // `/uncategorized` is a known category without a listing command;
        // it stays silent like any other non-command message.
        _ if Category::parse(&cmd).is_some() => {}
        _ => {
            send_best_effort(state, chat_id, render::UNKNOWN_CATEGORY, SendOptions::default())
                .await;
        }
    }
    Ok(())
}

async fn send_best_effort(state: &AppState, chat_id: ChatId, html: &str, opts: SendOptions) {
    if let Err(e) = state.messenger.send_html(chat_id, html, opts).await {
        tracing::warn!("failed to send reply: {e}");
    }
}

/// The lower-cased command name if `text` is exactly `/cmd` or
/// `/cmd@botname`, and `None` otherwise.
fn bare_command_token(text: &str) -> Option<String> {
    let rest = text.trim().strip_prefix('/')?;

    let (cmd, handle) = match rest.split_once('@') {
        Some((cmd, handle)) => (cmd, Some(handle)),
        None => (rest, None),
    };

    if cmd.is_empty() || !cmd.chars().all(is_word_char) {
        return None;
    }
    if let Some(handle) = handle {
        if handle.is_empty() || !handle.chars().all(is_word_char) {
            return None;
        }
    }

    Some(cmd.to_lowercase())
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_command_shapes() {
        assert_eq!(bare_command_token("/listlinks"), Some("listlinks".to_string()));
        assert_eq!(bare_command_token("/Start@ZimaBlueBot"), Some("start".to_string()));
        assert_eq!(bare_command_token("  /help  "), Some("help".to_string()));
    }

    #[test]
    fn help_text_lists_every_category() {
        for cat in zima_core::category::Category::ALL {
            assert!(
                HELP_TEXT.contains(&format!("/{cat} - ")),
                "missing /{cat} in help"
            );
        }
    }

    #[test]
    fn non_bare_text_is_not_a_command() {
        assert_eq!(bare_command_token("/games https://a.com"), None);
        assert_eq!(bare_command_token("/games@"), None);
        assert_eq!(bare_command_token("hello"), None);
        assert_eq!(bare_command_token("/"), None);
    }
}
