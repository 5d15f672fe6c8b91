use std::{env, net::SocketAddr, path::Path, sync::Arc};

use axum::Router;
use common::utils::logging::init_logging_default;
use dotenvy::dotenv;
use tower_http::cors::CorsLayer;
use tracing::info;

use models::Item;
use service::{storage::JsonFileRepository, CrudService, TracingLogger};

use crate::routes::{self, items::AppState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load host/port and data directory from configs or env vars, with sensible
/// fallbacks.
fn load_settings() -> anyhow::Result<(SocketAddr, String)> {
    let (host, port, data_dir) = match configs::AppConfig::load_and_validate() {
        Ok(cfg) => (cfg.server.host, cfg.server.port, cfg.storage.data_dir),
        Err(_) => {
            let host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
            let port = env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(8080);
            let data_dir = env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string());
            (host, port, data_dir)
        }
    };
    Ok((format!("{}:{}", host, port).parse()?, data_dir))
}

/// Build the application state over a JSON-file repository rooted in
/// `data_dir`.
pub async fn build_state(data_dir: &str) -> anyhow::Result<AppState> {
    common::env::ensure_data_dir(data_dir).await?;
    let repo = JsonFileRepository::<Item>::new(Path::new(data_dir).join("items.json"))
        .await
        .map_err(|e| anyhow::anyhow!("cannot open item store: {e}"))?;
    let items = Arc::new(CrudService::new(repo, Arc::new(TracingLogger)));
    Ok(AppState { items })
}

/// Public entry: build the app and run the HTTP server.
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging_default();

    let (addr, data_dir) = load_settings()?;
    let state = build_state(&data_dir).await?;

    let app: Router = routes::build_router(state, build_cors());

    info!(%addr, "starting item api server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
