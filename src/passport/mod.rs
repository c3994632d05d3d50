//! Passport renewal calculator.
//!
//! Submodules:
//! - `calendar` - Feb 29 safe year arithmetic, age and day differences
//! - `stage` - issuance stage from birth and issue dates
//! - `status` - next change, grace deadline and status classification
//! - `validation` - input rules, all violations collected
//! - `routes` - HTTP endpoints

pub mod calendar;
pub mod model;
pub mod routes;
pub mod stage;
pub mod status;
pub mod validation;

#[cfg(test)]
mod tests;

use chrono::NaiveDate;

use crate::common::format_ru_date;
use calendar::full_years_between;
use model::PassportStatusResponse;
pub use stage::{current_stage, Stage};
pub use status::{compute_status, StatusKind, StatusReport};
pub use validation::{validate, ValidationError, ValidationErrors};

pub const DEFAULT_BIRTH_DATE: (i32, u32, u32) = (1990, 1, 1);
pub const DEFAULT_ISSUE_DATE: (i32, u32, u32) = (2010, 1, 1);

/// Validate the dates and, when they pass, compute the full response.
pub fn evaluate(
    birth: NaiveDate,
    issue: NaiveDate,
    today: NaiveDate,
) -> Result<PassportStatusResponse, ValidationErrors> {
    validate(birth, issue, today).into_result()?;

    let report = compute_status(birth, issue, today);
    Ok(PassportStatusResponse {
        age_years: full_years_between(birth, today),
        message: report.message(),
        next_change_display: report.next_change_date.map(format_ru_date),
        deadline_display: report.deadline_date.map(format_ru_date),
        report,
    })
}
