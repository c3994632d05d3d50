use super::*;
use crate::passport::model::{PassportStatusRequest, PassportStatusResponse};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_status_request_deserialization_without_today() {
    let json = r#"{
        "birth_date": "1990-01-01",
        "issue_date": "2010-01-01"
    }"#;

    let request: PassportStatusRequest = serde_json::from_str(json).unwrap();
    assert_eq!(request.birth_date, ymd(1990, 1, 1));
    assert_eq!(request.issue_date, ymd(2010, 1, 1));
    assert_eq!(request.today, None);
}

#[test]
fn test_evaluate_twenty_year_passport() {
    let response = evaluate(ymd(1990, 1, 1), ymd(2010, 1, 1), ymd(2024, 6, 1)).unwrap();

    assert_eq!(response.age_years, 34);
    assert_eq!(response.report.stage, Stage::TwentyYearStage);
    assert_eq!(response.report.stage_label, "Обмен в 20 лет");
    assert_eq!(response.report.status_kind, StatusKind::Ok);
    assert_eq!(response.next_change_display.as_deref(), Some("01.01.2035"));
    assert_eq!(response.deadline_display.as_deref(), Some("01.04.2035"));
    assert!(response.message.starts_with("Паспорт действителен."));
}

#[test]
fn test_evaluate_expired_fourteen_year_passport() {
    let response = evaluate(ymd(1970, 1, 1), ymd(1984, 1, 1), ymd(2020, 1, 1)).unwrap();

    assert_eq!(response.report.stage, Stage::FourteenYearStage);
    assert_eq!(response.report.next_change_date, Some(ymd(1990, 1, 1)));
    assert_eq!(response.report.deadline_date, Some(ymd(1990, 4, 1)));
    assert_eq!(response.report.status_kind, StatusKind::Invalid);
    assert_eq!(response.report.days_left, None);
    assert_eq!(response.message, "Паспорт недействителен. Требуется замена.");
}

#[test]
fn test_evaluate_rejects_invalid_input() {
    let errors = evaluate(ymd(2015, 1, 1), ymd(2014, 1, 1), ymd(2024, 6, 1)).unwrap_err();
    // issue before birth, under 14, issue before 14th birthday
    assert_eq!(errors.len(), 3);
}

#[test]
fn test_status_response_round_trips_through_json() {
    let response = evaluate(ymd(1990, 1, 1), ymd(2010, 1, 1), ymd(2024, 6, 1)).unwrap();

    let json = serde_json::to_string(&response).unwrap();
    let parsed: PassportStatusResponse = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.report, response.report);

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["report"]["status_kind"], "ok");
    assert_eq!(value["report"]["next_change_date"], "2035-01-01");
}

#[test]
fn test_summary_lists_dates_only_when_present() {
    let with_dates = evaluate(ymd(1990, 1, 1), ymd(2010, 1, 1), ymd(2024, 6, 1)).unwrap();
    let summary = with_dates.summary();
    assert!(summary.contains("Возраст (полных лет): 34"));
    assert!(summary.contains("Дата обязательной замены: 01.01.2035"));
    assert!(summary.contains("Крайний срок (90 дней после ДР): 01.04.2035"));

    let final_stage = evaluate(ymd(1960, 5, 5), ymd(2005, 6, 1), ymd(2024, 1, 1)).unwrap();
    let summary = final_stage.summary();
    assert!(!summary.contains("Дата обязательной замены"));
    assert!(summary.ends_with("Возрастных замен больше нет."));
}
