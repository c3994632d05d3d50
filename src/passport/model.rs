use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::status::StatusReport;
use super::validation::ValidationError;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct PassportStatusRequest {
    #[schema(example = "1990-01-01")]
    pub birth_date: NaiveDate,
    #[schema(example = "2010-01-01")]
    pub issue_date: NaiveDate,
    /// Reference date; defaults to the server's local date
    #[serde(default)]
    #[schema(example = "2024-06-01")]
    pub today: Option<NaiveDate>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PassportStatusResponse {
    #[schema(example = 34)]
    pub age_years: u32,
    pub report: StatusReport,
    #[schema(example = "Паспорт действителен. До даты замены осталось 3866 дн.")]
    pub message: String,
    #[schema(example = "01.01.2035")]
    pub next_change_display: Option<String>,
    #[schema(example = "01.04.2035")]
    pub deadline_display: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ValidationFailureResponse {
    pub errors: Vec<ValidationError>,
    pub messages: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DateBounds {
    #[schema(example = "1900-01-01")]
    pub min: NaiveDate,
    pub max: NaiveDate,
}

/// Everything the front-end needs to render the calculator form.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PassportFormInfo {
    pub title: String,
    pub caption: String,
    pub legal_notes: Vec<String>,
    pub birth_bounds: DateBounds,
    pub issue_bounds: DateBounds,
    #[schema(example = "1990-01-01")]
    pub default_birth_date: NaiveDate,
    #[schema(example = "2010-01-01")]
    pub default_issue_date: NaiveDate,
}

impl PassportStatusResponse {
    /// Result block as the form prints it, one fact per line.
    pub fn summary(&self) -> String {
        let mut lines = vec![
            format!("Возраст (полных лет): {}", self.age_years),
            format!("Текущий документ получен как: {}", self.report.stage_label),
        ];
        if let (Some(next), Some(deadline)) = (&self.next_change_display, &self.deadline_display) {
            lines.push(format!("Дата обязательной замены: {}", next));
            lines.push(format!("Крайний срок (90 дней после ДР): {}", deadline));
        }
        lines.push(self.message.clone());
        lines.join("\n")
    }
}
