//! Bayport West Directory Server

use std::process;

use salvo::{
    affix_state::inject,
    oapi::{OpenApi, swagger_ui::SwaggerUi},
    prelude::*,
    trailing_slash::remove_slash,
};
use tracing::{error, info, warn};

use bayport_app::{auth::AdminGate, context::AppContext, domain::geometry::GeometryDocument};

use crate::{
    config::ServerConfig,
    observability::{RequestLogging, init_logging},
    router::app_router,
    state::State,
};

mod admin;
mod assets;
mod config;
mod extensions;
mod healthcheck;
mod observability;
mod pages;
mod router;
mod session;
mod shutdown;
mod state;
mod status;
mod units;
mod views;
#[cfg(test)]
mod test_helpers;

/// Bayport West directory server entry point
///
/// # Panics
///
/// Panics if the server fails to bind or serve requests
#[tokio::main]
pub async fn main() {
    // Load configuration from .env and CLI arguments
    let config = ServerConfig::load().unwrap_or_else(|e| {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized yet, must use eprintln for config errors"
        )]
        {
            eprintln!("Configuration error: {e}");
        }

        process::exit(1);
    });

    if let Err(e) = init_logging(&config.logging) {
        #[expect(
            clippy::print_stderr,
            reason = "logging failed to initialize, must use eprintln"
        )]
        {
            eprintln!("Logging error: {e}");
        }

        process::exit(1);
    }

    let geometry = match GeometryDocument::load(&config.site.geometry_path) {
        Ok(geometry) => geometry,
        Err(load_error) => {
            error!(
                path = %config.site.geometry_path.display(),
                "failed to load geometry document: {load_error}"
            );

            process::exit(1);
        }
    };

    let app = match config.backend.backend_config() {
        Some(backend) => match AppContext::from_backend(backend, config.backend.buckets()) {
            Ok(app) => Some(app),
            Err(init_error) => {
                error!("failed to initialize app context: {init_error}");

                process::exit(1);
            }
        },
        None => {
            warn!("BACKEND_URL/BACKEND_ANON_KEY not set, serving geometry only");

            None
        }
    };

    let state = State::new(
        config.site.site_name.clone(),
        geometry,
        AdminGate::new(config.site.admin_email.trim()),
        app,
    )
    .into_shared();

    let addr = config.socket_addr();

    info!("Starting server on {addr}");

    // Bind server
    let listener = TcpListener::new(addr).bind().await;

    let router = Router::new()
        .hoop(CatchPanic::new())
        .hoop(RequestLogging::new(config.logging.slow_request_threshold_ms))
        .hoop(remove_slash())
        .hoop(inject(state))
        .push(app_router());

    let doc = OpenApi::new("Bayport West API", env!("CARGO_PKG_VERSION")).merge_router(&router);

    let router = router
        .push(doc.into_router("/api-doc/openapi.json"))
        .push(SwaggerUi::new("/api-doc/openapi.json").into_router("docs"));

    let server = Server::new(listener);

    let handle = server.handle();

    // Listen for shutdown signal
    tokio::spawn(async move {
        if let Err(error) = shutdown::listen(handle).await {
            error!("failed to listen for shutdown signal: {error}");
        }
    });

    // Start serving requests
    server.serve(router).await;
}
