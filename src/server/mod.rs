//! HTTP gateway that relays analysis requests to the external analyzer.
//!
//! The gateway is stateless across requests: shared state is the resolved
//! settings and one reqwest client. Analyzer failures never escape raw;
//! every error path produces a structured JSON body with a mapped status.

mod handlers;
mod routes;

pub use routes::create_router;

use std::net::SocketAddr;

use reqwest::Client;

use crate::config::Settings;

/// Shared state for the gateway.
#[derive(Clone)]
pub struct AppState {
    pub settings: Settings,
    pub http: Client,
}

impl AppState {
    /// Build state from resolved settings.
    ///
    /// The outbound client carries the gateway's own timeout, independent
    /// of whatever deadline the caller is using.
    pub fn new(settings: Settings) -> Self {
        let http = Client::builder()
            .timeout(settings.timeout())
            .build()
            .expect("Failed to create HTTP client");
        Self { settings, http }
    }
}

/// Start the gateway server.
pub async fn serve(settings: Settings, host: &str, port: u16) -> anyhow::Result<()> {
    let state = AppState::new(settings);
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    tracing::info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
