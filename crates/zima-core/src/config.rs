use std::{env, fs, path::Path};

use crate::{errors::Error, Result};

/// Typed configuration for the launcher.
///
/// The core itself consumes none of this; the store is volatile and has
/// no settings. Everything here belongs to the transport layer.
#[derive(Clone, Debug)]
pub struct Config {
    pub telegram_bot_token: String,

    /// Public base URL for webhook deployments. When unset the bot runs
    /// long polling instead.
    pub webhook_base_url: Option<String>,
    pub webhook_port: u16,
}

impl Config {
    pub fn load() -> Result<Self> {
        load_dotenv_if_present(Path::new(".env"));

        let telegram_bot_token = env_str("TELEGRAM_BOT_TOKEN")
            .and_then(non_empty)
            .ok_or_else(|| {
                Error::Config("TELEGRAM_BOT_TOKEN environment variable is required".to_string())
            })?;

        let webhook_base_url = env_str("WEBHOOK_URL")
            .and_then(non_empty)
            .map(|u| u.trim().trim_end_matches('/').to_string());
        let webhook_port = env_u16("PORT").unwrap_or(8080);

        Ok(Self {
            telegram_bot_token,
            webhook_base_url,
            webhook_port,
        })
    }
}

fn env_str(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn env_u16(key: &str) -> Option<u16> {
    env_str(key).and_then(|s| s.trim().parse::<u16>().ok())
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}

fn load_dotenv_if_present(path: &Path) {
    let Ok(contents) = fs::read_to_string(path) else {
        return;
    };

    for raw in contents.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((k, v)) = line.split_once('=') else {
            continue;
        };

        let key = k.trim();
        if key.is_empty() {
            continue;
        }
        if env::var_os(key).is_some() {
            continue; // do not override existing env
        }

        let mut val = v.trim().to_string();
        // Strip optional surrounding quotes.
        if val.len() >= 2
            && ((val.starts_with('"') && val.ends_with('"'))
                || (val.starts_with('\'') && val.ends_with('\'')))
        {
            val = val[1..val.len() - 1].to_string();
        }

        env::set_var(key, val);
    }
}
