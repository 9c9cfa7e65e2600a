use std::{future::Future, sync::Arc};

use axum::Router;
use configs::{AppConfig, StoreConfig};
use service::HeroService;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{error, info};

use crate::metrics::set_store_size;
use crate::routes;
use crate::state::AppState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Construct the hero service described by `cfg` and wrap it as handler state.
pub fn build_state(cfg: &StoreConfig) -> anyhow::Result<AppState> {
    let svc = HeroService::bootstrap(cfg.id_start, cfg.page_size, cfg.seed_defaults)?;
    Ok(AppState::new(Arc::new(svc)))
}

/// Router with fresh state for the given config.
pub fn build_app(cfg: &AppConfig) -> anyhow::Result<Router> {
    let state = build_state(&cfg.store)?;
    Ok(routes::build_router(state, build_cors()))
}

/// Resolves on Ctrl+C. If the handler cannot be installed, never resolves.
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "cannot listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!(event = "shutdown_signal", "received Ctrl+C, shutting down");
}

/// Serve `app` on an already bound listener until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}

/// Public entry: build the app from `cfg`, bind and serve until `shutdown` resolves.
pub async fn run<F>(cfg: AppConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let state = build_state(&cfg.store)?;
    set_store_size(state.heroes.len().await);
    let app = routes::build_router(state, build_cors());

    let addr = cfg.server.bind_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!(%addr, "hero server listening");
    serve(listener, app, shutdown).await
}
