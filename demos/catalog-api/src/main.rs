mod error;
mod routes;
mod state;

use std::sync::Arc;

use anyhow::Context;
use axum::routing::get;
use axum::Router;
use baremetrics_sdk::{BaremetricsClient, ClientConfig, ErrorPolicy};
use clap::Parser;
use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

use state::AppState;

/// Serve the product catalog document as a small JSON API.
#[derive(Debug, Parser)]
#[command(name = "catalog-api", version)]
struct Args {
    /// Origin the `baremetrics.json` document is fetched from.
    #[arg(long, env = "BAREMETRICS_API_URL")]
    base_url: Option<String>,

    /// `propagate` or `suppress-and-log`.
    #[arg(long, env = "BAREMETRICS_ON_ERROR", default_value = "propagate")]
    on_error: ErrorPolicy,

    #[arg(long, env = "CATALOG_API_LISTEN", default_value = "0.0.0.0:3000")]
    listen: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let base_url = args
        .base_url
        .unwrap_or_else(|| ClientConfig::default().base_url().to_string());

    let client = BaremetricsClient::builder()
        .config(ClientConfig::new(base_url, args.on_error))
        .build()
        .context("failed to build Baremetrics client")?;
    tracing::info!(%client, "client ready");

    let state = Arc::new(AppState { client });

    let app = Router::new()
        .route("/api/product", get(routes::product::get_product))
        .route("/api/editions", get(routes::editions::list_editions))
        .route("/api/features", get(routes::features::list_features))
        .route("/api/features/{id}", get(routes::features::get_feature))
        .layer(CorsLayer::permissive())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&args.listen)
        .await
        .with_context(|| format!("failed to bind {}", args.listen))?;
    tracing::info!(addr = %args.listen, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn env_of(id: &str) -> Option<String> {
        Args::command()
            .get_arguments()
            .find(|a| a.get_id() == id)
            .and_then(|a| a.get_env())
            .map(|e| e.to_string_lossy().into_owned())
    }

    #[test]
    fn every_option_has_env_fallback() {
        assert_eq!(env_of("base_url").as_deref(), Some("BAREMETRICS_API_URL"));
        assert_eq!(env_of("on_error").as_deref(), Some("BAREMETRICS_ON_ERROR"));
        assert_eq!(env_of("listen").as_deref(), Some("CATALOG_API_LISTEN"));
    }

    #[test]
    fn on_error_parses_policy() {
        let args = Args::try_parse_from(["catalog-api", "--on-error", "suppress-and-log"]).unwrap();
        assert_eq!(args.on_error, ErrorPolicy::SuppressAndLog);
    }
}
