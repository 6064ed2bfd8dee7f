use actix_web::{get, web, HttpResponse};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::{error::AppError, server::AppState};

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: f64,
    pub checks: BTreeMap<&'static str, &'static str>,
}

#[get("/health")]
pub async fn health_check(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    app_state.client_config.validate()?;

    if app_state.templates.is_empty() {
        return Err(AppError::Configuration(
            "No prompt templates loaded".to_string(),
        ));
    }

    let timestamp = chrono::Utc::now().timestamp_micros() as f64 / 1_000_000.0;
    let checks = BTreeMap::from([("environment", "OK"), ("prompts", "OK")]);

    Ok(HttpResponse::Ok().json(HealthResponse {
        status: "Healthy",
        timestamp,
        checks,
    }))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check);
}
