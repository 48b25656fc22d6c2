//! Telegram adapter (teloxide).
//!
//! This crate implements the `zima-core` MessagingPort over the Telegram
//! Bot API and wires updates into the classifier/store/renderer core.

use async_trait::async_trait;

use teloxide::{prelude::*, types::ParseMode};

use tokio::time::sleep;

pub mod handlers;
pub mod router;

use zima_core::{
    domain::{ChatId, MessageId, MessageRef},
    errors::Error,
    messaging::{port::MessagingPort, types::SendOptions},
    Result,
};

#[derive(Clone)]
pub struct TelegramMessenger {
    bot: Bot,
}

impl TelegramMessenger {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }

    fn tg_chat(chat_id: ChatId) -> teloxide::types::ChatId {
        teloxide::types::ChatId(chat_id.0)
    }

    fn tg_msg_id(message_id: MessageId) -> teloxide::types::MessageId {
        teloxide::types::MessageId(message_id.0)
    }

    fn map_err(e: teloxide::RequestError) -> Error {
        Error::External(format!("telegram error: {e}"))
    }

    async fn with_retry<T, Fut>(&self, mut op: impl FnMut() -> Fut) -> Result<T>
    where
        Fut: std::future::IntoFuture<Output = std::result::Result<T, teloxide::RequestError>>,
        Fut::IntoFuture: Send,
    {
        const MAX_RETRIES: usize = 1;
        let mut attempts = 0usize;
        loop {
            match op().await {
                Ok(v) => return Ok(v),
                Err(e) => match e {
                    teloxide::RequestError::RetryAfter(d) if attempts < MAX_RETRIES => {
                        attempts += 1;
                        sleep(d).await;
                        continue;
                    }
                    other => return Err(Self::map_err(other)),
                },
            }
        }
    }
}

#[async_trait]
impl MessagingPort for TelegramMessenger {
    async fn send_html(
        &self,
        chat_id: ChatId,
        html: &str,
        opts: SendOptions,
    ) -> Result<MessageRef> {
        let msg = self
            .with_retry(|| {
                self.bot
                    .send_message(Self::tg_chat(chat_id), html.to_string())
                    .parse_mode(ParseMode::Html)
                    .disable_web_page_preview(opts.disable_link_preview)
            })
            .await?;

        Ok(MessageRef {
            chat_id,
            message_id: MessageId(msg.id.0),
        })
    }

    async fn delete_message(&self, msg: MessageRef) -> Result<()> {
        self.with_retry(|| {
            self.bot
                .delete_message(Self::tg_chat(msg.chat_id), Self::tg_msg_id(msg.message_id))
        })
        .await?;
        Ok(())
    }
}
