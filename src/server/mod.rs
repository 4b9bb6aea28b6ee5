//! HTTP surface of the mock orchestrator (actix-web).
//!
//! One [`JobRegistry`] is built before the server starts and shared by every
//! worker through `web::Data`.

mod handlers;
mod middleware;
mod routes;

use actix_web::{App, HttpServer, middleware::Logger, web};
use anyhow::Result;
use log::info;

use crate::config::MockConfig;
use crate::registry::JobRegistry;

pub use handlers::{GenerateFeatureRequest, GenerateFeatureResponse};

/// Run the HTTP server until it is shut down (Ctrl-C).
pub async fn run(config: &MockConfig) -> Result<()> {
    let registry = web::Data::new(JobRegistry::new());
    let bind_addr = config.bind_addr();

    info!("Starting mock orchestrator on {bind_addr}");
    info!("Endpoints: POST /generate-feature, GET /status/{{job_id}}");

    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(middleware::cors())
            .app_data(registry.clone())
            .app_data(middleware::json_config())
            .configure(routes::configure_routes)
    })
    .bind(&bind_addr)?;

    if config.workers > 0 {
        server = server.workers(config.workers);
    }

    server.run().await?;

    info!("Server shutdown complete");
    Ok(())
}
