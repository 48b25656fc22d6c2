use teloxide::{prelude::*, types::Message};

use zima_core::{
    category::Category,
    domain::{ChatId, MessageId, MessageRef},
    messaging::types::SendOptions,
    render,
    store::SubmitOutcome,
};

use crate::router::AppState;

/// Store a classified submission and perform the matching side effect.
///
/// Mutation and notification are not transactional: a failed delete or
/// reply is logged and absorbed, never rolled back.
pub async fn handle_submission(
    msg: &Message,
    state: &AppState,
    category: Category,
    links: Vec<String>,
) -> ResponseResult<()> {
    let chat_id = ChatId(msg.chat.id.0);

    let outcome = {
        let mut store = state.store.lock().await;
        store.submit(chat_id, category, links)
    };

    match outcome {
        SubmitOutcome::Accepted { added } => {
            tracing::info!(chat = chat_id.0, category = %category, added, "links collected");

            // Best-effort cleanup of the triggering message; the bot may
            // lack delete permission in this group.
            let msg_ref = MessageRef {
                chat_id,
                message_id: MessageId(msg.id.0),
            };
            if let Err(e) = state.messenger.delete_message(msg_ref).await {
                tracing::warn!("failed to delete collected message: {e}");
            }
        }
        SubmitOutcome::AllDuplicate => {
            if let Err(e) = state
                .messenger
                .send_html(chat_id, render::DUPLICATE_NOTICE, SendOptions::default())
                .await
            {
                tracing::warn!("failed to send duplicate notice: {e}");
            }
        }
    }

    Ok(())
}
