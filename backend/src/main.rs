//! Server entry point: loads settings, picks a document store, and serves
//! the GraphQL endpoint.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

mod server;

use std::io;

use actix_web::web;
#[cfg(feature = "metrics")]
use actix_web_prom::{PrometheusMetrics, PrometheusMetricsBuilder};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use bookgraph::inbound::http::health::HealthState;
use bookgraph::outbound::persistence::{DbPool, PoolConfig, run_migrations};
use bookgraph::settings::ServerSettings;

use server::{ServerConfig, create_server};

#[actix_web::main]
async fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load()
        .map_err(|error| io::Error::other(format!("load settings: {error}")))?;
    let bind_addr = settings
        .bind_addr()
        .map_err(|error| io::Error::other(format!("invalid bind address: {error}")))?;

    let mut config = ServerConfig::new(bind_addr);
    match settings.database_url.as_deref() {
        Some(database_url) => {
            if settings.run_migrations {
                run_migrations(database_url).await.map_err(io::Error::other)?;
            }
            let pool_config =
                PoolConfig::new(database_url).with_max_size(settings.pool_max_size());
            let pool = DbPool::new(pool_config)
                .await
                .map_err(|error| io::Error::other(format!("create database pool: {error}")))?;
            config = config.with_db_pool(pool);
        }
        None => info!("no database configured; documents are kept in memory"),
    }

    #[cfg(feature = "metrics")]
    let config = config.with_metrics(make_metrics());

    let health_state = web::Data::new(HealthState::new());
    info!(%bind_addr, "starting GraphQL server");
    create_server(health_state, config)?.await
}

#[cfg(feature = "metrics")]
fn make_metrics() -> Option<PrometheusMetrics> {
    match PrometheusMetricsBuilder::new("bookgraph")
        .endpoint("/metrics")
        .build()
    {
        Ok(metrics) => Some(metrics),
        Err(error) => {
            warn!(%error, "Prometheus metrics disabled");
            None
        }
    }
}
