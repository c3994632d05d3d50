//! Renewal status of a passport relative to a reference date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::calendar::{days_between, grace_deadline};
use super::stage::{Stage, Thresholds};

/// Classification of the document on the reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum StatusKind {
    /// The grace period after the threshold birthday has passed.
    Invalid,
    /// Threshold birthday reached, still inside the grace period.
    Due,
    /// Threshold birthday still ahead.
    Ok,
    /// No age-based renewals remain.
    #[serde(rename = "no_more")]
    NoMoreChanges,
}

impl StatusKind {
    /// User-facing sentence for this status.
    pub fn message(self, days_left: Option<i64>) -> String {
        let days = days_left.unwrap_or(0);
        match self {
            StatusKind::Invalid => "Паспорт недействителен. Требуется замена.".to_string(),
            StatusKind::Due => {
                format!("Требуется замена. До крайнего срока осталось {days} дн.")
            }
            StatusKind::Ok => {
                format!("Паспорт действителен. До даты замены осталось {days} дн.")
            }
            StatusKind::NoMoreChanges => "Возрастных замен больше нет.".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StatusReport {
    pub stage: Stage,
    #[schema(example = "Обмен в 20 лет")]
    pub stage_label: String,
    #[schema(example = "2035-01-01")]
    pub next_change_date: Option<NaiveDate>,
    #[schema(example = "2035-04-01")]
    pub deadline_date: Option<NaiveDate>,
    pub status_kind: StatusKind,
    #[schema(example = 3866)]
    pub days_left: Option<i64>,
}

impl StatusReport {
    fn no_more_changes(stage: Stage) -> Self {
        Self {
            stage,
            stage_label: stage.label().to_string(),
            next_change_date: None,
            deadline_date: None,
            status_kind: StatusKind::NoMoreChanges,
            days_left: None,
        }
    }

    pub fn message(&self) -> String {
        self.status_kind.message(self.days_left)
    }
}

/// Compute the renewal status. Inputs are expected to have passed
/// [`validate`](super::validation::validate), but any dates yield a report.
pub fn compute_status(birth: NaiveDate, issue: NaiveDate, today: NaiveDate) -> StatusReport {
    let thresholds = Thresholds::for_birth(birth);
    let stage = thresholds.stage_of(issue);

    let next_change = match stage {
        Stage::FortyFiveYearStage => return StatusReport::no_more_changes(stage),
        Stage::TwentyYearStage => Some(thresholds.d45),
        Stage::FourteenYearStage => Some(thresholds.d20),
        // Issue date fits no window: estimate from the current age instead.
        Stage::Unknown => age_based_next_change(&thresholds, today),
    };

    let Some(next_change) = next_change else {
        return StatusReport::no_more_changes(stage);
    };

    let deadline = grace_deadline(next_change);
    let (status_kind, days_left) = if today > deadline {
        (StatusKind::Invalid, None)
    } else if today >= next_change {
        (StatusKind::Due, Some(days_between(today, deadline)))
    } else {
        (StatusKind::Ok, Some(days_between(today, next_change)))
    };

    StatusReport {
        stage,
        stage_label: stage.label().to_string(),
        next_change_date: Some(next_change),
        deadline_date: Some(deadline),
        status_kind,
        days_left,
    }
}

fn age_based_next_change(thresholds: &Thresholds, today: NaiveDate) -> Option<NaiveDate> {
    if today < thresholds.d20 {
        Some(thresholds.d20)
    } else if today < thresholds.d45 {
        Some(thresholds.d45)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_twenty_year_stage_ok() {
        let report = compute_status(ymd(1990, 1, 1), ymd(2010, 1, 1), ymd(2024, 6, 1));
        assert_eq!(report.stage, Stage::TwentyYearStage);
        assert_eq!(report.next_change_date, Some(ymd(2035, 1, 1)));
        assert_eq!(report.deadline_date, Some(ymd(2035, 4, 1)));
        assert_eq!(report.status_kind, StatusKind::Ok);
        assert_eq!(report.days_left, Some(days_between(ymd(2024, 6, 1), ymd(2035, 1, 1))));
    }

    #[test]
    fn test_due_on_threshold_birthday_and_last_grace_day() {
        let birth = ymd(1990, 1, 1);
        let issue = ymd(2004, 3, 1);

        let on_birthday = compute_status(birth, issue, ymd(2010, 1, 1));
        assert_eq!(on_birthday.status_kind, StatusKind::Due);
        assert_eq!(on_birthday.days_left, Some(90));

        let last_day = compute_status(birth, issue, ymd(2010, 4, 1));
        assert_eq!(last_day.status_kind, StatusKind::Due);
        assert_eq!(last_day.days_left, Some(0));

        let day_after = compute_status(birth, issue, ymd(2010, 4, 2));
        assert_eq!(day_after.status_kind, StatusKind::Invalid);
        assert_eq!(day_after.days_left, None);
    }

    #[test]
    fn test_forty_five_stage_has_no_dates() {
        let report = compute_status(ymd(1960, 5, 5), ymd(2005, 6, 1), ymd(2024, 1, 1));
        assert_eq!(report.status_kind, StatusKind::NoMoreChanges);
        assert!(report.next_change_date.is_none());
        assert!(report.deadline_date.is_none());
        assert!(report.days_left.is_none());
    }

    #[test]
    fn test_messages_include_days_left() {
        assert!(StatusKind::Ok.message(Some(12)).contains("12 дн."));
        assert!(StatusKind::Due.message(Some(3)).contains("3 дн."));
        assert_eq!(StatusKind::Invalid.message(None), "Паспорт недействителен. Требуется замена.");
    }

    #[test]
    fn test_status_kind_wire_names() {
        assert_eq!(serde_json::to_value(StatusKind::NoMoreChanges).unwrap(), "no_more");
        assert_eq!(serde_json::to_value(StatusKind::Invalid).unwrap(), "invalid");
    }
}
