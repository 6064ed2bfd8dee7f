use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use chat_client::{AzureOpenAIClient, ChatClientConfig, ChatCompletionClient};
use log::{error, info, warn};
use skill_core::PromptTemplates;

use crate::config::ServiceConfig;
use crate::controllers::{health_controller, skill_controller};
use crate::error::AppError;
use crate::middleware::TracingMiddleware;

/// Shared, read-only state built once at startup
pub struct AppState {
    pub chat_client: Arc<dyn ChatCompletionClient>,
    pub client_config: ChatClientConfig,
    pub templates: PromptTemplates,
}

impl AppState {
    pub fn new(
        client_config: ChatClientConfig,
        templates: PromptTemplates,
    ) -> Result<Self, String> {
        let chat_client = AzureOpenAIClient::new(client_config.clone())
            .map_err(|e| format!("Failed to build chat client: {e}"))?;
        Ok(Self {
            chat_client: Arc::new(chat_client),
            client_config,
            templates,
        })
    }
}

const DEFAULT_WORKER_COUNT: usize = 4;

pub fn app_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .configure(skill_controller::config)
            .configure(health_controller::config),
    );
}

/// JSON and query extractor settings: body size limit and `{"detail": ...}` errors
pub fn extractor_config(max_request_bytes: usize) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg: &mut web::ServiceConfig| {
        cfg.app_data(
            web::JsonConfig::default()
                .limit(max_request_bytes)
                .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
        )
        .app_data(
            web::QueryConfig::default()
                .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
        );
    }
}

pub fn build_cors(allowed_origins: &[String]) -> Cors {
    let cors = Cors::default()
        .allow_any_method()
        .allow_any_header()
        .max_age(3600);

    if allowed_origins.iter().any(|origin| origin == "*") {
        return cors.allow_any_origin();
    }

    allowed_origins
        .iter()
        .fold(cors.supports_credentials(), |cors, origin| {
            cors.allowed_origin(origin)
        })
}

pub async fn run(
    service_config: ServiceConfig,
    client_config: ChatClientConfig,
    templates: PromptTemplates,
) -> Result<(), String> {
    info!("Starting custom skill service...");

    if let Err(e) = client_config.validate() {
        warn!("Chat client is not configured, requests will fail: {}", e);
    }

    let app_state = web::Data::new(AppState::new(client_config, templates)?);
    let bind_address = service_config.bind_address();
    let allowed_origins = service_config.allowed_origins.clone();
    let max_request_bytes = service_config.max_request_bytes;

    let server = HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(build_cors(&allowed_origins))
            .wrap(TracingMiddleware)
            .configure(extractor_config(max_request_bytes))
            .configure(app_config)
    })
    .workers(DEFAULT_WORKER_COUNT)
    .bind(&bind_address)
    .map_err(|e| format!("Failed to bind server: {e}"))?
    .run();

    info!("Custom skill service listening on http://{bind_address}");

    if let Err(e) = server.await {
        error!("Web server error: {}", e);
        return Err(format!("Web server error: {e}"));
    }

    Ok(())
}
