use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::net::SocketAddr;

// Service configuration sourced from environment variables, with an optional
// YAML override file pointed at by MSGBOARD_CONFIG.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub metrics_bind: SocketAddr,
    pub jwt_secret: String,
    pub token_ttl_secs: u64,
    pub seed_demo_messages: bool,
}

// Matches the original demo's hardcoded application secret; override it via
// MSGBOARD_JWT_SECRET for anything beyond local experimentation.
pub const DEFAULT_JWT_SECRET: &str = "HU6D8bT^uP4UaUK";
pub const DEFAULT_TOKEN_TTL_SECS: u64 = 900;

#[derive(Debug, Deserialize)]
struct AppConfigOverride {
    bind_addr: Option<String>,
    metrics_bind: Option<String>,
    jwt_secret: Option<String>,
    token_ttl_secs: Option<u64>,
    seed_demo_messages: Option<bool>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let bind_addr = std::env::var("MSGBOARD_BIND")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .with_context(|| "parse MSGBOARD_BIND")?;
        let metrics_bind = std::env::var("MSGBOARD_METRICS_BIND")
            .unwrap_or_else(|_| "0.0.0.0:9090".to_string())
            .parse()
            .with_context(|| "parse MSGBOARD_METRICS_BIND")?;
        let jwt_secret =
            std::env::var("MSGBOARD_JWT_SECRET").unwrap_or_else(|_| DEFAULT_JWT_SECRET.to_string());
        let token_ttl_secs = match std::env::var("MSGBOARD_TOKEN_TTL_SECS") {
            Ok(value) => value
                .parse()
                .with_context(|| "parse MSGBOARD_TOKEN_TTL_SECS")?,
            Err(_) => DEFAULT_TOKEN_TTL_SECS,
        };
        let seed_demo_messages = match std::env::var("MSGBOARD_SEED_DEMO") {
            Ok(value) => value
                .parse()
                .with_context(|| "parse MSGBOARD_SEED_DEMO")?,
            Err(_) => true,
        };
        Ok(Self {
            bind_addr,
            metrics_bind,
            jwt_secret,
            token_ttl_secs,
            seed_demo_messages,
        })
    }

    pub fn from_env_or_yaml() -> Result<Self> {
        let mut config = Self::from_env()?;
        if let Ok(path) = std::env::var("MSGBOARD_CONFIG") {
            let contents =
                fs::read_to_string(&path).with_context(|| format!("read MSGBOARD_CONFIG: {path}"))?;
            let override_cfg: AppConfigOverride =
                serde_yaml::from_str(&contents).with_context(|| "parse msgboard config yaml")?;
            if let Some(value) = override_cfg.bind_addr {
                config.bind_addr = value.parse().with_context(|| "parse bind_addr")?;
            }
            if let Some(value) = override_cfg.metrics_bind {
                config.metrics_bind = value.parse().with_context(|| "parse metrics_bind")?;
            }
            if let Some(value) = override_cfg.jwt_secret {
                config.jwt_secret = value;
            }
            if let Some(value) = override_cfg.token_ttl_secs {
                config.token_ttl_secs = value;
            }
            if let Some(value) = override_cfg.seed_demo_messages {
                config.seed_demo_messages = value;
            }
        }
        Ok(config)
    }
}
