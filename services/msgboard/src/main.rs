//! Message-board HTTP service entry point.
//!
//! # Purpose
//! Wires configuration, the message store, credential table, and token
//! service, then starts the API server and the metrics listener.
//!
//! # Notes
//! The `build_state` helper keeps wiring testable and minimizes main setup
//! logic; demo records are seeded here so tests can start from an empty store.
mod api;
mod app;
mod auth;
mod config;
mod model;
mod observability;
mod store;

use app::{AppState, build_router};
use auth::credentials::Authenticator;
use auth::token::TokenService;
use model::MessageDraft;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use store::{MessageStore, memory::InMemoryStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = config::AppConfig::from_env_or_yaml().expect("msgboard config");
    run_with_shutdown(config, async {
        let _ = tokio::signal::ctrl_c().await;
    })
    .await
}

async fn run_with_shutdown<F>(config: config::AppConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let metrics_handle = observability::init_observability();
    let state = build_state(&config).await?;
    let metrics_task = tokio::spawn(observability::serve_metrics(
        metrics_handle,
        config.metrics_bind,
    ));

    let app = build_router(state);

    let addr = config.bind_addr;
    tracing::info!(%addr, "msgboard listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tokio::pin!(shutdown);
    tokio::select! {
        result = axum::serve(listener, app.into_make_service()) => {
            result?;
        }
        _ = &mut shutdown => {}
    }

    metrics_task.abort();
    let _ = metrics_task.await;
    Ok(())
}

async fn build_state(config: &config::AppConfig) -> anyhow::Result<AppState> {
    let store = InMemoryStore::new();
    if config.seed_demo_messages {
        for (name, message) in [("Bob", "Hi Bob!"), ("Carol", "Hi Carol!")] {
            store
                .create_message(MessageDraft {
                    name: name.to_string(),
                    message: message.to_string(),
                })
                .await?;
        }
    }

    Ok(AppState {
        api_version: "v1".to_string(),
        store: Arc::new(store),
        authenticator: Arc::new(Authenticator::with_demo_users()),
        tokens: TokenService::new(
            &config.jwt_secret,
            Duration::from_secs(config.token_ttl_secs),
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn test_config(seed: bool) -> config::AppConfig {
        config::AppConfig {
            bind_addr: "127.0.0.1:0".parse().expect("bind"),
            metrics_bind: "127.0.0.1:0".parse().expect("metrics"),
            jwt_secret: "test-secret".to_string(),
            token_ttl_secs: 900,
            seed_demo_messages: seed,
        }
    }

    #[tokio::test]
    async fn build_state_seeds_demo_messages() {
        let state = build_state(&test_config(true)).await.expect("state");
        let all = state.store.list_messages().await.expect("list");
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, 1);
        assert_eq!(all[0].name, "Bob");
        assert_eq!(all[1].id, 2);
        assert_eq!(all[1].name, "Carol");
    }

    #[tokio::test]
    async fn build_state_can_start_empty() {
        let state = build_state(&test_config(false)).await.expect("state");
        assert!(state.store.list_messages().await.expect("list").is_empty());
        assert_eq!(state.store.backend_name(), "memory");
    }

    #[tokio::test(flavor = "multi_thread")]
    #[serial]
    async fn run_with_shutdown_starts_and_stops() {
        run_with_shutdown(test_config(true), async {
            tokio::time::sleep(std::time::Duration::from_millis(100)).await;
        })
        .await
        .expect("run should stop cleanly");
    }
}
