use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ── Status codes ────────────────────────────────────────────────────

/// Lifecycle status of a planning appeal.
///
/// Status history rows store the snake-case code as a plain string, so
/// parsing goes through [`AppealStatus::parse`] rather than serde: a code
/// this service does not know about is valid input, it just has no
/// timetable rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum AppealStatus {
    Validation,
    ReadyToStart,
    LpaQuestionnaire,
    AssignCaseOfficer,
    IssueDetermination,
    Statements,
    FinalComments,
    AwaitingEvent,
    Event,
    Complete,
    AwaitingTransfer,
    Transferred,
    Withdrawn,
    Closed,
    Invalid,
}

/// Every status code in lifecycle order.
pub const APPEAL_STATUSES: &[AppealStatus] = &[
    AppealStatus::Validation,
    AppealStatus::ReadyToStart,
    AppealStatus::LpaQuestionnaire,
    AppealStatus::AssignCaseOfficer,
    AppealStatus::IssueDetermination,
    AppealStatus::Statements,
    AppealStatus::FinalComments,
    AppealStatus::AwaitingEvent,
    AppealStatus::Event,
    AppealStatus::Complete,
    AppealStatus::AwaitingTransfer,
    AppealStatus::Transferred,
    AppealStatus::Withdrawn,
    AppealStatus::Closed,
    AppealStatus::Invalid,
];

impl AppealStatus {
    /// The persisted status code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::ReadyToStart => "ready_to_start",
            Self::LpaQuestionnaire => "lpa_questionnaire",
            Self::AssignCaseOfficer => "assign_case_officer",
            Self::IssueDetermination => "issue_determination",
            Self::Statements => "statements",
            Self::FinalComments => "final_comments",
            Self::AwaitingEvent => "awaiting_event",
            Self::Event => "event",
            Self::Complete => "complete",
            Self::AwaitingTransfer => "awaiting_transfer",
            Self::Transferred => "transferred",
            Self::Withdrawn => "withdrawn",
            Self::Closed => "closed",
            Self::Invalid => "invalid",
        }
    }

    /// Parse a persisted status code. Returns `None` for unknown codes.
    pub fn parse(code: &str) -> Option<Self> {
        APPEAL_STATUSES.iter().copied().find(|s| s.as_str() == code)
    }
}

impl std::fmt::Display for AppealStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of an appeal's status history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct StatusHistoryEntry {
    pub status: String,
    #[serde(default = "default_valid")]
    pub valid: bool,
    pub created_at: DateTime<Utc>,
}

fn default_valid() -> bool {
    true
}

// ── Procedure & events ──────────────────────────────────────────────

/// How the appeal is being decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum ProcedureKind {
    /// Written representations, decided after a site visit.
    Written,
    Hearing,
    Inquiry,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ProcedureType {
    pub key: ProcedureKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct SiteVisit {
    pub visit_date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Hearing {
    pub hearing_start_time: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
    pub inquiry_start_time: DateTime<Utc>,
}

// ── Timetable overrides ─────────────────────────────────────────────

/// Milestone dates set explicitly on the case. A present field replaces
/// whatever the timetable rules would otherwise compute.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct AppealTimetable {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lpa_questionnaire_due_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue_determination_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lpa_statement_due_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_comments_due_date: Option<DateTime<Utc>>,
}

// ── Appellant case ──────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ValidationOutcome {
    /// "Valid", "Invalid" or "Incomplete".
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct AppellantCase {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appellant_case_validation_outcome: Option<ValidationOutcome>,
}

// ── Appeal case ─────────────────────────────────────────────────────

/// A fully loaded appeal, as handed to the timetable engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct AppealCase {
    pub id: i64,
    pub reference: String,
    pub case_created_date: DateTime<Utc>,
    #[serde(default)]
    pub case_extension_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub status_history: Vec<StatusHistoryEntry>,
    #[serde(default)]
    pub timetable: Option<AppealTimetable>,
    #[serde(default)]
    pub procedure_type: Option<ProcedureType>,
    #[serde(default)]
    pub site_visit: Option<SiteVisit>,
    #[serde(default)]
    pub hearing: Option<Hearing>,
    #[serde(default)]
    pub inquiry: Option<Inquiry>,
    #[serde(default)]
    pub appellant_case: Option<AppellantCase>,
}

impl AppealCase {
    /// A case with no history, overrides or events.
    pub fn new(id: i64, reference: impl Into<String>, case_created_date: DateTime<Utc>) -> Self {
        Self {
            id,
            reference: reference.into(),
            case_created_date,
            case_extension_date: None,
            status_history: Vec::new(),
            timetable: None,
            procedure_type: None,
            site_visit: None,
            hearing: None,
            inquiry: None,
            appellant_case: None,
        }
    }

    /// Append a valid status entry stamped at `at`.
    pub fn with_status(mut self, status: AppealStatus, at: DateTime<Utc>) -> Self {
        self.status_history.push(StatusHistoryEntry {
            status: status.as_str().to_string(),
            valid: true,
            created_at: at,
        });
        self
    }
}
