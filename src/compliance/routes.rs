use actix_web::{web, HttpResponse, Responder};

use super::model::{
    CategoryOption, ComplianceOptions, ComposeRequest, ComposeResponse, Language, RequestCategory,
};
use super::respond;

/// Available categories and languages
#[utoipa::path(
    get,
    path = "/api/compliance/options",
    tag = "Compliance",
    responses(
        (status = 200, description = "Selectable request options", body = ComplianceOptions)
    )
)]
pub async fn get_options() -> impl Responder {
    let categories = RequestCategory::PRIORITY
        .into_iter()
        .map(|category| CategoryOption {
            code: category.code().to_string(),
            title: category.title().to_string(),
        })
        .collect();

    HttpResponse::Ok().json(ComplianceOptions {
        categories,
        languages: Language::ALL.to_vec(),
        default_categories: vec![RequestCategory::SourceOfFunds],
        default_language: Language::Russian,
    })
}

/// Generate the compliance request text
#[utoipa::path(
    post,
    path = "/api/compliance/compose",
    tag = "Compliance",
    request_body = ComposeRequest,
    responses(
        (status = 200, description = "Composed message or placeholder", body = ComposeResponse),
        (status = 400, description = "Unknown language or category code", body = crate::ErrorResponse)
    )
)]
pub async fn compose_request(item: web::Json<ComposeRequest>) -> impl Responder {
    let request = item.into_inner();
    log::info!(
        "Compliance text requested: language={:?}, categories={:?}",
        request.language,
        request.categories
    );

    let response = respond(&request);
    if response.placeholder {
        log::warn!("Compliance text requested without categories");
    }

    HttpResponse::Ok().json(response)
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/compliance/options").route(web::get().to(get_options)))
        .service(web::resource("/compliance/compose").route(web::post().to(compose_request)));
}
