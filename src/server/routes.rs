use actix_web::web;

use super::handlers;

/// Configure the mock's routes:
/// - POST /generate-feature - start a simulated job
/// - GET /status/{job_id} - poll a job's simulated progress
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/generate-feature",
        web::post().to(handlers::generate_feature),
    )
    .route("/status/{job_id}", web::get().to(handlers::get_status));
}
