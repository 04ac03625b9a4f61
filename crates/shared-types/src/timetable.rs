use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::appeal::{AppealCase, AppealStatus};

// ── Due date outcome ────────────────────────────────────────────────

/// Result of running the timetable rules against an appeal.
///
/// `NotApplicable` and `Undetermined` are different answers: the first
/// means the case is finished and nothing is due, the second means no
/// rule produced a date for the case as it stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum DueDate {
    Due {
        #[serde(rename = "dueDate")]
        due_date: DateTime<Utc>,
    },
    NotApplicable,
    Undetermined,
}

impl DueDate {
    pub fn due(due_date: DateTime<Utc>) -> Self {
        Self::Due { due_date }
    }

    /// The computed date, if there is one.
    pub fn date(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Due { due_date } => Some(*due_date),
            Self::NotApplicable | Self::Undetermined => None,
        }
    }

    pub fn is_not_applicable(&self) -> bool {
        matches!(self, Self::NotApplicable)
    }

    pub fn is_undetermined(&self) -> bool {
        matches!(self, Self::Undetermined)
    }
}

impl From<Option<DateTime<Utc>>> for DueDate {
    fn from(date: Option<DateTime<Utc>>) -> Self {
        date.map_or(Self::Undetermined, Self::due)
    }
}

// ── Due date API ────────────────────────────────────────────────────

/// Request body for computing the next due date of an appeal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CalculateDueDateRequest {
    pub appeal: AppealCase,
    /// Who is asking, e.g. "lpa" or "appellant". Logged only.
    #[serde(default)]
    pub context: Option<String>,
}

/// Response for a computed due date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CalculateDueDateResponse {
    pub reference: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<AppealStatus>,
    pub outcome: DueDate,
}

// ── Bank holidays ───────────────────────────────────────────────────

/// A public holiday on which the Planning Inspectorate does not count
/// working days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct BankHoliday {
    pub date: NaiveDate,
    pub name: String,
}

/// Bank holidays for a single year.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct BankHolidayListResponse {
    pub year: i32,
    pub division: String,
    pub holidays: Vec<BankHoliday>,
}

/// Query parameters for the next-business-day lookup.
#[derive(Debug, Clone, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams))]
#[cfg_attr(feature = "openapi", into_params(parameter_in = Query))]
pub struct NextBusinessDayParams {
    /// Date in `YYYY-MM-DD` form.
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct NextBusinessDayResponse {
    pub date: NaiveDate,
    pub business_day: NaiveDate,
}

// ── GOV.UK feed ─────────────────────────────────────────────────────

/// Top level of `https://www.gov.uk/bank-holidays.json`, keyed by
/// division ("england-and-wales", "scotland", "northern-ireland").
pub type GovUkBankHolidays = HashMap<String, GovUkDivision>;

#[derive(Debug, Clone, Deserialize)]
pub struct GovUkDivision {
    pub division: String,
    pub events: Vec<GovUkEvent>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GovUkEvent {
    pub title: String,
    pub date: NaiveDate,
}
