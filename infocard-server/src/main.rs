// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! InfoCard Server
//!
//! Serves digital business cards over HTTP:
//! - Resolved profile JSON for public and owner views
//! - vCard, plain-text summary and QR code exports
//! - Owner sign-in and profile updates

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

use infocard_server::config::ServerConfig;
use infocard_server::create_app_state;
use infocard_server::http::create_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("infocard_server=info".parse()?),
        )
        .init();

    // Load configuration
    let config = ServerConfig::from_env();
    info!("Starting InfoCard Server v{}", env!("CARGO_PKG_VERSION"));
    info!("Storage backend: {:?}", config.storage_backend);
    info!("Default profile: {}", config.default_username);

    let state = create_app_state(&config)?;
    let router = create_router(state);

    let listener = TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.listen_addr))?;
    info!("HTTP server listening on {}", config.listen_addr);

    axum::serve(listener, router).await?;
    Ok(())
}
