//! Input validation for the renewal calculator.
//!
//! Every rule is checked independently so the user sees all problems with
//! the entered dates at once, in a fixed order.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

use super::calendar::{earliest_supported_date, full_years_between, safe_add_years};
use super::stage::FIRST_ISSUE_AGE;
use crate::common::format_ru_date;

pub const FIELD_BIRTH: &str = "birth_date";
pub const FIELD_ISSUE: &str = "issue_date";

/// A single violated rule with a user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ValidationError {
    /// Request field the rule is about
    pub field: String,
    /// Human-readable message in Russian
    pub message: String,
    /// Optional hint on how to fix the input
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Date outside of the picker range.
    pub fn out_of_range(field: &str, label: &str, min: NaiveDate, max: NaiveDate) -> Self {
        Self::new(
            field,
            format!(
                "{} должна быть в диапазоне {}–{}.",
                label,
                format_ru_date(min),
                format_ru_date(max)
            ),
        )
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, " {}", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Ordered collection of violations.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }

    /// Plain messages in rule order.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    /// Numbered list suitable for a single text block.
    pub fn to_text(&self) -> String {
        if self.errors.is_empty() {
            return String::new();
        }

        let mut parts = vec![format!(
            "Проверка не пройдена: найдено ошибок: {}",
            self.errors.len()
        )];
        for (i, error) in self.errors.iter().enumerate() {
            parts.push(format!("{}. {}", i + 1, error));
        }
        parts.join("\n")
    }

    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl std::error::Error for ValidationErrors {}

/// Check birth and issue dates against `today`.
pub fn validate(birth: NaiveDate, issue: NaiveDate, today: NaiveDate) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if birth > today {
        errors.add(ValidationError::new(
            FIELD_BIRTH,
            "Дата рождения не может быть в будущем.",
        ));
    }
    if issue > today {
        errors.add(ValidationError::new(
            FIELD_ISSUE,
            "Дата выдачи паспорта не может быть в будущем.",
        ));
    }
    if issue < birth {
        errors.add(ValidationError::new(
            FIELD_ISSUE,
            "Дата выдачи паспорта не может быть раньше даты рождения.",
        ));
    }

    if full_years_between(birth, today) < FIRST_ISSUE_AGE {
        errors.add(ValidationError::new(
            FIELD_BIRTH,
            "Лицу младше 14 лет паспорт ещё не выдается.",
        ));
    }

    if issue < safe_add_years(birth, FIRST_ISSUE_AGE) {
        errors.add(
            ValidationError::new(
                FIELD_ISSUE,
                "Паспорт не может быть выдан ранее достижения 14 лет.",
            )
            .with_suggestion("Проверьте дату выдачи."),
        );
    }

    let min = earliest_supported_date();
    if !(min <= birth && birth <= today) {
        errors.add(ValidationError::out_of_range(
            FIELD_BIRTH,
            "Дата рождения",
            min,
            today,
        ));
    }
    if !(min <= issue && issue <= today) {
        errors.add(ValidationError::out_of_range(
            FIELD_ISSUE,
            "Дата выдачи",
            min,
            today,
        ));
    }

    errors
}
