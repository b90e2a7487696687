//! Environment-driven configuration.
//!
//! All settings come from `SLASHFORGE_*` env vars, loaded once at process
//! start and never rotated at runtime. The public key and application id are
//! the two fixed constants the protocol requires; everything else has a
//! default.

use std::collections::HashMap;
use std::net::SocketAddr;

use anyhow::{bail, Context, Result};

pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_API_BASE: &str = "https://discord.com/api/v10";

/// Fixed, process-wide gateway configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Hex-encoded Ed25519 public key the platform signs requests with.
    pub public_key: String,
    /// Application id used to address follow-up webhook edits.
    pub application_id: String,
    pub listen_addr: SocketAddr,
    /// Base URL of the platform API, without a trailing slash.
    pub api_base: String,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_vars(&std::env::vars().collect())
    }

    /// Build from a provided map (useful for testing).
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self> {
        let public_key = require(vars, "SLASHFORGE_PUBLIC_KEY")?;
        let application_id = require(vars, "SLASHFORGE_APPLICATION_ID")?;

        let listen_addr = vars
            .get("SLASHFORGE_LISTEN_ADDR")
            .map(String::as_str)
            .unwrap_or(DEFAULT_LISTEN_ADDR)
            .parse()
            .context("SLASHFORGE_LISTEN_ADDR is not a valid socket address")?;

        let api_base = vars
            .get("SLASHFORGE_API_BASE")
            .map(String::as_str)
            .unwrap_or(DEFAULT_API_BASE)
            .trim_end_matches('/')
            .to_string();

        let config = Self {
            public_key,
            application_id,
            listen_addr,
            api_base,
        };
        config.validate()?;
        Ok(config)
    }

    /// Startup validation. A bad public key should fail the process here
    /// rather than turn every inbound request into a 401.
    pub fn validate(&self) -> Result<()> {
        if self.public_key.len() != 64 || !self.public_key.chars().all(|c| c.is_ascii_hexdigit()) {
            bail!("SLASHFORGE_PUBLIC_KEY must be 64 hex characters");
        }
        if self.api_base.is_empty() {
            bail!("SLASHFORGE_API_BASE must not be empty");
        }
        Ok(())
    }
}

fn require(vars: &HashMap<String, String>, name: &str) -> Result<String> {
    match vars.get(name) {
        Some(value) if !value.is_empty() => Ok(value.clone()),
        _ => bail!("Missing required env var {name}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn valid_key() -> String {
        "ab".repeat(32)
    }

    #[test]
    fn loads_with_defaults() {
        let config = ServerConfig::from_vars(&vars(&[
            ("SLASHFORGE_PUBLIC_KEY", &valid_key()),
            ("SLASHFORGE_APPLICATION_ID", "1234567890"),
        ]))
        .unwrap();
        assert_eq!(config.listen_addr.to_string(), DEFAULT_LISTEN_ADDR);
        assert_eq!(config.api_base, DEFAULT_API_BASE);
    }

    #[test]
    fn error_on_missing_public_key() {
        let result = ServerConfig::from_vars(&vars(&[("SLASHFORGE_APPLICATION_ID", "1")]));
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("SLASHFORGE_PUBLIC_KEY"));
    }

    #[test]
    fn rejects_short_public_key() {
        let result = ServerConfig::from_vars(&vars(&[
            ("SLASHFORGE_PUBLIC_KEY", "abcd"),
            ("SLASHFORGE_APPLICATION_ID", "1"),
        ]));
        assert!(result.unwrap_err().to_string().contains("64 hex"));
    }

    #[test]
    fn rejects_non_hex_public_key() {
        let key = "zz".repeat(32);
        let result = ServerConfig::from_vars(&vars(&[
            ("SLASHFORGE_PUBLIC_KEY", &key),
            ("SLASHFORGE_APPLICATION_ID", "1"),
        ]));
        assert!(result.is_err());
    }

    #[test]
    fn strips_trailing_slash_from_api_base() {
        let config = ServerConfig::from_vars(&vars(&[
            ("SLASHFORGE_PUBLIC_KEY", &valid_key()),
            ("SLASHFORGE_APPLICATION_ID", "1"),
            ("SLASHFORGE_API_BASE", "https://example.com/api/"),
        ]))
        .unwrap();
        assert_eq!(config.api_base, "https://example.com/api");
    }

    #[test]
    fn rejects_bad_listen_addr() {
        let result = ServerConfig::from_vars(&vars(&[
            ("SLASHFORGE_PUBLIC_KEY", &valid_key()),
            ("SLASHFORGE_APPLICATION_ID", "1"),
            ("SLASHFORGE_LISTEN_ADDR", "not-an-addr"),
        ]));
        assert!(result.is_err());
    }
}
