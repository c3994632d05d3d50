//! Issuance stage of the current passport.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::calendar::safe_add_years;

pub const FIRST_ISSUE_AGE: u32 = 14;
pub const FIRST_RENEWAL_AGE: u32 = 20;
pub const FINAL_RENEWAL_AGE: u32 = 45;

/// Age threshold at which the current document was issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Unknown,
    FourteenYearStage,
    TwentyYearStage,
    FortyFiveYearStage,
}

impl Stage {
    /// Fixed display label shown to the user.
    pub fn label(self) -> &'static str {
        match self {
            Stage::FourteenYearStage => "Первичное получение в 14 лет",
            Stage::TwentyYearStage => "Обмен в 20 лет",
            Stage::FortyFiveYearStage => "Обмен в 45 лет",
            Stage::Unknown => "Не удалось однозначно определить (проверьте ввод)",
        }
    }
}

/// Threshold birthdays derived from a birth date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    pub d14: NaiveDate,
    pub d20: NaiveDate,
    pub d45: NaiveDate,
}

impl Thresholds {
    pub fn for_birth(birth: NaiveDate) -> Self {
        Self {
            d14: safe_add_years(birth, FIRST_ISSUE_AGE),
            d20: safe_add_years(birth, FIRST_RENEWAL_AGE),
            d45: safe_add_years(birth, FINAL_RENEWAL_AGE),
        }
    }

    /// Stage window that contains `issue`.
    pub fn stage_of(&self, issue: NaiveDate) -> Stage {
        if issue >= self.d45 {
            Stage::FortyFiveYearStage
        } else if issue >= self.d20 {
            Stage::TwentyYearStage
        } else if issue >= self.d14 {
            Stage::FourteenYearStage
        } else {
            Stage::Unknown
        }
    }
}

/// Determine the stage from the issue date alone; `today` plays no part.
pub fn current_stage(birth: NaiveDate, issue: NaiveDate) -> Stage {
    Thresholds::for_birth(birth).stage_of(issue)
}
