use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, anyhow};

use crate::application::services::diff::text_diff::{DEFAULT_DIFF_TIMEOUT, DiffGranularity};

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8787";

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub diff_granularity: DiffGranularity,
    pub diff_timeout: Option<Duration>,
    pub cors_origin: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8787)),
            diff_granularity: DiffGranularity::default(),
            diff_timeout: Some(DEFAULT_DIFF_TIMEOUT),
            cors_origin: None,
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<L>(lookup: L) -> anyhow::Result<Self>
    where
        L: Fn(&str) -> Option<String>,
    {
        let bind_addr = lookup("FILEDIFF_BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .context("FILEDIFF_BIND_ADDR")?;

        let diff_granularity = match lookup("FILEDIFF_DIFF_GRANULARITY") {
            Some(raw) => DiffGranularity::parse(&raw)
                .ok_or_else(|| anyhow!("FILEDIFF_DIFF_GRANULARITY: unknown value {raw:?}"))?,
            None => DiffGranularity::default(),
        };

        let diff_timeout = match lookup("FILEDIFF_DIFF_TIMEOUT_MS") {
            Some(raw) => {
                let ms: u64 = raw.trim().parse().context("FILEDIFF_DIFF_TIMEOUT_MS")?;
                (ms > 0).then(|| Duration::from_millis(ms))
            }
            None => Some(DEFAULT_DIFF_TIMEOUT),
        };

        let cors_origin = lookup("FILEDIFF_CORS_ORIGIN").filter(|v| !v.trim().is_empty());

        Ok(Self {
            bind_addr,
            diff_granularity,
            diff_timeout,
            cors_origin,
        })
    }
}
