use actix_web::{web, HttpResponse, Responder};
use chrono::NaiveDate;

use super::calendar::earliest_supported_date;
use super::model::{
    DateBounds, PassportFormInfo, PassportStatusRequest, PassportStatusResponse,
    ValidationFailureResponse,
};
use super::{evaluate, DEFAULT_BIRTH_DATE, DEFAULT_ISSUE_DATE};
use crate::common::local_today;

fn default_date((y, m, d): (i32, u32, u32)) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_else(earliest_supported_date)
}

/// Form metadata for the calculator
#[utoipa::path(
    get,
    path = "/api/passport/form",
    tag = "Passport",
    responses(
        (status = 200, description = "Date bounds, defaults and legal notes", body = PassportFormInfo)
    )
)]
pub async fn get_form_info() -> impl Responder {
    let today = local_today();
    let bounds = || DateBounds {
        min: earliest_supported_date(),
        max: today,
    };

    HttpResponse::Ok().json(PassportFormInfo {
        title: "Калькулятор замены паспорта РФ".to_string(),
        caption: "Рассчитывает даты обязательной замены по порогам 20 и 45 лет и 90-дневному сроку после дня рождения.".to_string(),
        legal_notes: vec![
            "Паспорт гражданина РФ выдаётся в 14 лет и подлежит замене при достижении 20 и 45 лет.".to_string(),
            "На замену обычно предоставляется 90 календарных дней после соответствующего дня рождения.".to_string(),
            "Учитывайте, что локальные правила/исключения (например, замена за рубежом) могут меняться.".to_string(),
        ],
        birth_bounds: bounds(),
        issue_bounds: bounds(),
        default_birth_date: default_date(DEFAULT_BIRTH_DATE),
        default_issue_date: default_date(DEFAULT_ISSUE_DATE),
    })
}

/// Calculate the renewal status
#[utoipa::path(
    post,
    path = "/api/passport/status",
    tag = "Passport",
    request_body = PassportStatusRequest,
    responses(
        (status = 200, description = "Renewal status calculated", body = PassportStatusResponse),
        (status = 422, description = "Dates failed validation", body = ValidationFailureResponse),
        (status = 400, description = "Malformed request body", body = crate::ErrorResponse)
    )
)]
pub async fn calculate_status(item: web::Json<PassportStatusRequest>) -> impl Responder {
    let request = item.into_inner();
    let today = request.today.unwrap_or_else(local_today);

    log::info!(
        "Passport status requested: birth={}, issue={}, today={}",
        request.birth_date,
        request.issue_date,
        today
    );

    match evaluate(request.birth_date, request.issue_date, today) {
        Ok(response) => {
            log::debug!("Passport status: {:?}", response.report.status_kind);
            HttpResponse::Ok().json(response)
        }
        Err(errors) => {
            log::warn!("Passport input rejected with {} error(s)", errors.len());
            HttpResponse::UnprocessableEntity().json(ValidationFailureResponse {
                messages: errors.messages(),
                errors: errors.into_errors(),
            })
        }
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/passport/form").route(web::get().to(get_form_info)))
        .service(web::resource("/passport/status").route(web::post().to(calculate_status)));
}
