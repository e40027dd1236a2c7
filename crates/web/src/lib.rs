pub use crate::common::RouteResult;

use std::{io, net::SocketAddr, sync::Arc};

use axum::{
    extract::FromRef,
    routing::{get, on},
    Router,
};
use common::{route_not_found, METHOD_FILTER_ALL};
use config::WebConfig;
use database::repo::Database;
use log::{error, info};
use tokio::{net::TcpListener, signal};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod api;
pub mod common;
pub mod config;
pub mod middleware;

#[derive(Clone, FromRef)]
pub struct WebState {
    pub database: Arc<dyn Database>,
}

/// The complete application: the banner at `/`, the API below `/api`.
pub fn router(state: WebState) -> Router {
    Router::new()
        .route("/", get(banner))
        .nest_service("/api", api::routes(state))
        .fallback_service(on(METHOD_FILTER_ALL, route_not_found))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

async fn banner() -> &'static str {
    "Site selection API is running."
}

/// Serves until Ctrl+C or SIGTERM is received and all in-flight requests
/// are finished.
pub async fn start_web_server(config: &WebConfig, state: WebState) -> io::Result<()> {
    let address = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(address).await?;
    info!("listening on {}", address);

    axum::serve(listener, router(state).into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("web server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("received Ctrl+C, shutting down"),
            Err(why) => {
                error!("could not listen for Ctrl+C: {}", why);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("received terminate signal, shutting down");
            }
            Err(why) => {
                error!("could not listen for SIGTERM: {}", why);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
