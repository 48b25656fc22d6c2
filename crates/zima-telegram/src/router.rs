use std::{net::SocketAddr, sync::Arc};

use teloxide::{
    dispatching::Dispatcher, dptree, error_handlers::LoggingErrorHandler, prelude::*,
    update_listeners::webhooks,
};

use tokio::sync::Mutex;

use zima_core::{config::Config, messaging::port::MessagingPort, store::LinkStore};

use crate::handlers;
use crate::TelegramMessenger;

/// Shared application state handed to every update handler.
///
/// The store sits behind one exclusive lock: operations are
/// O(links in one category) and latency-insensitive, so a single mutex is
/// plenty and removes any cross-lock ordering concern.
#[derive(Clone)]
pub struct AppState {
    pub cfg: Arc<Config>,
    pub store: Arc<Mutex<LinkStore>>,
    pub messenger: Arc<dyn MessagingPort>,
}

/// Build the dispatcher and run it until shutdown, either long polling or
/// serving a webhook depending on configuration.
pub async fn run(cfg: Arc<Config>) -> anyhow::Result<()> {
    let bot = Bot::new(cfg.telegram_bot_token.clone());

    if let Ok(me) = bot.get_me().await {
        tracing::info!("zima started: @{}", me.username());
    }

    let messenger: Arc<dyn MessagingPort> = Arc::new(TelegramMessenger::new(bot.clone()));
    let state = Arc::new(AppState {
        cfg: cfg.clone(),
        store: Arc::new(Mutex::new(LinkStore::new())),
        messenger,
    });

    let handler = dptree::entry().branch(Update::filter_message().endpoint(handlers::handle_message));

    let mut dispatcher = Dispatcher::builder(bot.clone(), handler)
        .dependencies(dptree::deps![state])
        .build();

    match cfg.webhook_base_url.as_deref() {
        Some(base) => {
            // The bot token doubles as the URL path so only Telegram can
            // guess the endpoint.
            let addr = SocketAddr::from(([0, 0, 0, 0], cfg.webhook_port));
            let url: url::Url = format!("{base}/{}", cfg.telegram_bot_token)
                .parse()
                .map_err(|e| anyhow::anyhow!("invalid WEBHOOK_URL: {e}"))?;

            tracing::info!("webhook mode, listening on port {}", cfg.webhook_port);
            let listener = webhooks::axum(bot, webhooks::Options::new(addr, url)).await?;
            dispatcher
                .dispatch_with_listener(
                    listener,
                    LoggingErrorHandler::with_custom_text("webhook update listener error"),
                )
                .await;
        }
        None => {
            tracing::info!("long polling mode");
            dispatcher.dispatch().await;
        }
    }

    Ok(())
}
