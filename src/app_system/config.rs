use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use super::error::ConfigError;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub server_host: String,
    pub server_port: u16,
    pub push_port: u16,
    pub data_dir: PathBuf,
    /// Request queue capacity of every actor.
    pub channel_buffer: usize,
    /// Also fan out product changes made through the HTTP API.
    pub broadcast_rest_mutations: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_host: "127.0.0.1".to_string(),
            server_port: 8080,
            push_port: 8081,
            data_dir: PathBuf::from("data"),
            channel_buffer: 32,
            broadcast_rest_mutations: false,
        }
    }
}

impl AppConfig {
    /// Loads configuration from the environment, reading `.env` first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        let config = Self::from_lookup(|var: &str| env::var(var).ok())?;
        tracing::info!(?config, "Application configuration loaded");
        Ok(config)
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        Ok(Self {
            server_host: lookup("SERVER_HOST").unwrap_or(defaults.server_host),
            server_port: parse_var(&lookup, "SERVER_PORT", defaults.server_port)?,
            push_port: parse_var(&lookup, "PUSH_PORT", defaults.push_port)?,
            data_dir: lookup("DATA_DIR").map(PathBuf::from).unwrap_or(defaults.data_dir),
            channel_buffer: parse_var(&lookup, "CHANNEL_BUFFER", defaults.channel_buffer)?,
            broadcast_rest_mutations: parse_var(
                &lookup,
                "BROADCAST_REST_MUTATIONS",
                defaults.broadcast_rest_mutations,
            )?,
        })
    }

    pub fn http_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    pub fn push_address(&self) -> String {
        format!("{}:{}", self.server_host, self.push_port)
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, var: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(var) {
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
            var,
            reason: e.to_string(),
        }),
        None => Ok(default),
    }
}
