use actix_cors::Cors;
use actix_web::middleware::Compress;
use actix_web::{error, http::header, web, App, HttpResponse, HttpServer, Responder};
use actix_web_prometheus::PrometheusMetricsBuilder;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

pub mod common;
pub mod compliance;
pub mod config;
pub mod mcp;
pub mod passport;

pub use crate::config::{AppConfig, ConfigError};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub timestamp: String,
}

impl ErrorResponse {
    pub fn new(error_type: &str, message: &str) -> Self {
        Self {
            error: error_type.to_string(),
            message: message.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn not_found(message: &str) -> Self {
        Self::new("NotFound", message)
    }

    pub fn bad_request(message: &str) -> Self {
        Self::new("BadRequest", message)
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    pub status: String,
    pub version: String,
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "Service",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    )
)]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

async fn not_found() -> impl Responder {
    HttpResponse::NotFound().json(ErrorResponse::not_found("Resource not found"))
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::passport::routes::get_form_info,
        crate::passport::routes::calculate_status,
        crate::compliance::routes::get_options,
        crate::compliance::routes::compose_request,
        crate::health
    ),
    components(
        schemas(
            passport::model::PassportStatusRequest,
            passport::model::PassportStatusResponse,
            passport::model::ValidationFailureResponse,
            passport::model::PassportFormInfo,
            passport::model::DateBounds,
            passport::status::StatusReport,
            passport::status::StatusKind,
            passport::stage::Stage,
            passport::validation::ValidationError,
            compliance::model::ComposeRequest,
            compliance::model::ComposeResponse,
            compliance::model::ComplianceOptions,
            compliance::model::CategoryOption,
            compliance::model::Language,
            compliance::model::RequestCategory,
            ErrorResponse,
            HealthResponse,
        )
    ),
    tags(
        (name = "Passport", description = "Passport renewal deadline calculator."),
        (name = "Compliance", description = "Compliance request template generator."),
        (name = "Service", description = "Service health.")
    )
)]
pub struct ApiDoc;

/// JSON extractor settings: malformed bodies become a `400` with an
/// [`ErrorResponse`] instead of actix's plain-text error.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        log::warn!("Rejected request body: {}", message);
        let response = HttpResponse::BadRequest().json(ErrorResponse::bad_request(&message));
        error::InternalError::from_response(err, response).into()
    })
}

/// Register the JSON API, the MCP endpoint and the health check.
///
/// Shared by [`run`] and the endpoint tests.
pub fn configure_app(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(
            web::scope("/api")
                .configure(passport::routes::config)
                .configure(compliance::routes::config),
        )
        .configure(mcp::config)
        .service(web::resource("/health").route(web::get().to(health)));
}

fn build_cors(config: &AppConfig) -> Cors {
    config
        .allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .max_age(3600)
}

pub async fn run() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid configuration: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e));
        }
    };

    // Build the wording table before the first request
    lazy_static::initialize(&compliance::texts::TEXT_BLOCKS);

    let prometheus = PrometheusMetricsBuilder::new("passport_compliance_server")
        .endpoint("/metrics")
        .build()
        .map_err(|e| {
            log::error!("Failed to create Prometheus metrics middleware: {}", e);
            std::io::Error::new(std::io::ErrorKind::Other, e.to_string())
        })?;

    let mcp_state = web::Data::new(mcp::McpState::new(mcp::McpService::new(
        mcp::tools::ToolRegistry::new(),
    )));

    log::info!("Starting server at http://{}:{}", config.host, config.port);

    let app_config = config.clone();
    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(Compress::default())
            .wrap(prometheus.clone())
            .wrap(build_cors(&app_config))
            .app_data(mcp_state.clone())
            .configure(configure_app)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
            .default_service(web::route().to(not_found))
    });

    if let Some(workers) = config.workers {
        server = server.workers(workers);
    }

    server.bind((config.host.as_str(), config.port))?.run().await
}
