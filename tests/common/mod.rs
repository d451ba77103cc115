//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use moviedeck::app::App;
use moviedeck::catalog::CatalogState;
use moviedeck::config::{ApiConfig, Config};
use std::net::TcpListener;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;

use mock_backend::MockBackend;

/// Find a port nothing is listening on.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Create a temporary config file with the given TOML content.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

pub fn config_for(base_url: &str) -> Config {
    Config {
        api: ApiConfig {
            base_url: base_url.to_string(),
            timeout_seconds: Some(5),
            connect_timeout_seconds: Some(2),
        },
    }
}

/// App wired to a mock backend.
pub fn app_for(backend: &MockBackend) -> App {
    App::from_config(&config_for(&backend.base_url())).expect("app")
}

/// Wait for all effects to finish, failing the test after a few seconds.
pub async fn settle(app: &App) {
    tokio::time::timeout(Duration::from_secs(5), app.settle())
        .await
        .expect("effects did not settle");
}

/// Poll the store until `predicate` holds.
pub async fn wait_for_state(app: &App, predicate: impl Fn(&CatalogState) -> bool) {
    tokio::time::timeout(Duration::from_secs(5), async {
        while !predicate(&app.state()) {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    })
    .await
    .expect("state condition not reached");
}
