//! HTTP health endpoint.
//!
//! The hosting platform probes `GET /` to decide whether the process is
//! alive; the endpoint is unauthenticated, static, and side-effect free.

use crate::errors::Result;
use axum::{Router, routing::get};
use tracing::{info, instrument};

/// Builds the single-route health router.
pub fn router() -> Router {
    Router::new().route("/", get(health))
}

async fn health() -> &'static str {
    "Bot is running!"
}

/// Binds the health endpoint on `0.0.0.0:{port}` and serves forever.
#[instrument]
pub async fn serve(port: u16) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    info!(%port, "Health endpoint listening");
    axum::serve(listener, router()).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[tokio::test]
    async fn test_health_body() {
        assert_eq!(health().await, "Bot is running!");
    }

    #[tokio::test]
    async fn test_health_endpoint_over_http() {
        // Bind an ephemeral port so tests never collide
        let listener = tokio::net::TcpListener::bind(("127.0.0.1", 0)).await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router()).await.unwrap();
        });

        let response = reqwest::get(format!("http://{addr}/")).await.unwrap();
        assert!(response.status().is_success());
        assert_eq!(response.text().await.unwrap(), "Bot is running!");
    }
}
