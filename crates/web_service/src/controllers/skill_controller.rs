use actix_web::{post, web, HttpRequest, HttpResponse};
use serde::Deserialize;
use skill_core::SkillRequest;

use crate::{
    error::AppError, middleware::extract_trace_id, server::AppState, services::SkillService,
};

#[derive(Debug, Deserialize)]
pub struct SkillQuery {
    pub scenario: Option<String>,
}

/// Run every record of the batch through the requested scenario.
///
/// Record-level failures are reported inside the 200 response; only a missing
/// scenario, an empty batch or a misconfigured deployment fail the request.
#[post("/custom_skill")]
pub async fn custom_skill(
    req: HttpRequest,
    app_state: web::Data<AppState>,
    query: web::Query<SkillQuery>,
    body: web::Json<SkillRequest>,
) -> Result<HttpResponse, AppError> {
    let scenario = query
        .scenario
        .as_deref()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::BadRequest("Missing scenario in query".to_string()))?;

    let request = body.into_inner();
    if request.values.is_empty() {
        return Err(AppError::BadRequest(
            "Missing values in request body".to_string(),
        ));
    }

    app_state.client_config.validate()?;

    log::info!(
        "[{}] Processing {} records for scenario '{}'",
        extract_trace_id(&req).unwrap_or_default(),
        request.values.len(),
        scenario
    );

    let service = SkillService::new(
        app_state.chat_client.as_ref(),
        &app_state.client_config,
        &app_state.templates,
    );
    let response = service.process_batch(scenario, &request.values).await;

    Ok(HttpResponse::Ok().json(response))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(custom_skill);
}
