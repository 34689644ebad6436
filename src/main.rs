#![recursion_limit = "256"]

mod config;
mod error;
mod routes;

use std::process::ExitCode;

use leptos::prelude::get_configuration;

use crate::config::HostConfig;
use crate::error::HostError;

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "solus_landing=info,tower_http=info".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "solus-landing stopped");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), HostError> {
    let config = HostConfig::from_env()?;
    let conf = get_configuration(None).map_err(|e| HostError::LeptosConfig(e.to_string()))?;

    let app = routes::app(conf.leptos_options);
    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| HostError::Bind { addr, source })?;

    tracing::info!(%addr, "solus-landing listening");
    axum::serve(listener, app).await.map_err(HostError::Serve)
}
