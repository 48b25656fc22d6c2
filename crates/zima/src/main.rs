use std::sync::Arc;

use zima_core::config::Config;

#[tokio::main]
async fn main() -> Result<(), zima_core::Error> {
    zima_core::logging::init("zima")?;

    let cfg = Arc::new(Config::load()?);

    zima_telegram::router::run(cfg)
        .await
        .map_err(|e| zima_core::Error::External(format!("telegram bot failed: {e}")))?;

    Ok(())
}
