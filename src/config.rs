use std::net::SocketAddr;

use anyhow::Context;

pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Text
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub log_format: LogFormat,
}

impl Config {
    /// Reads `PLANNER_LISTEN_ADDR` and `PLANNER_LOG_FORMAT`, after loading a
    /// `.env` file when one is present.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let raw_addr =
            lookup("PLANNER_LISTEN_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());
        let listen_addr: SocketAddr = raw_addr
            .parse()
            .with_context(|| format!("Invalid PLANNER_LISTEN_ADDR '{raw_addr}'"))?;
        let log_format = lookup("PLANNER_LOG_FORMAT")
            .map(|v| LogFormat::parse(&v))
            .unwrap_or(LogFormat::Text);
        Ok(Self {
            listen_addr,
            log_format,
        })
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.listen_addr.set_port(port);
        self
    }
}
