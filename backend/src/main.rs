//! Brewery backend entry-point: wires the beer REST endpoints, health
//! probes, and (in debug builds) Swagger UI.

use std::sync::Arc;

use actix_web::{HttpServer, web};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use brewery_backend::ApiDoc;
use brewery_backend::inbound::http::health::HealthState;
use brewery_backend::inbound::http::state::HttpState;
use brewery_backend::outbound::InMemoryBeerService;
use brewery_backend::server::build_app;
use brewery_backend::server::config::ServerConfig;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let config = ServerConfig::parse();

    let catalogue = if config.no_seed {
        InMemoryBeerService::new()
    } else {
        InMemoryBeerService::seeded()
    };
    let state = web::Data::new(HttpState::new(Arc::new(catalogue)));
    let health_state = web::Data::new(HealthState::new());
    // Clone for the server factory so the probe state stays reachable here.
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || {
        let app = build_app(state.clone(), server_health_state.clone());
        #[cfg(debug_assertions)]
        let app = app.service(
            SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
        );
        app
    })
    .bind(config.bind_addr)?;

    // Fail liveness on the first interrupt so orchestrators stop routing
    // while actix finishes its graceful shutdown.
    let drain_health_state = health_state.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            drain_health_state.mark_unhealthy();
        }
    });

    info!(bind_addr = %config.bind_addr, seeded = !config.no_seed, "starting server");
    health_state.mark_ready();
    server.run().await
}
