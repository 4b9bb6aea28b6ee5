use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};

use crate::error::MockError;
use crate::registry::JobRegistry;
use crate::simulator::compute_status;
use crate::state_machine::JobId;

/// Body of `POST /generate-feature`. The description is accepted but not used.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateFeatureRequest {
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateFeatureResponse {
    pub job_id: JobId,
}

/// `POST /generate-feature`
pub async fn generate_feature(
    registry: web::Data<JobRegistry>,
    _payload: web::Json<GenerateFeatureRequest>,
) -> HttpResponse {
    let job_id = registry.create_job();
    HttpResponse::Ok().json(GenerateFeatureResponse { job_id })
}

/// `GET /status/{job_id}`
pub async fn get_status(
    registry: web::Data<JobRegistry>,
    path: web::Path<String>,
) -> Result<HttpResponse, MockError> {
    let job_id = path.into_inner();
    let elapsed = registry.elapsed(&job_id)?;
    Ok(HttpResponse::Ok().json(compute_status(elapsed)))
}
