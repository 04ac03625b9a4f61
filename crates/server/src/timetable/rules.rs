//! Status → due date rule table.
//!
//! Each row names the override the case may carry for that stage and the
//! default used when it does not. Auditing or changing a statutory period
//! is a one-line edit to [`RULES`].

use chrono::{DateTime, Utc};
use shared_types::{AppealCase, AppealStatus};

use super::working_days::DayKind;

/// A stored date that takes precedence over the computed default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverrideField {
    CaseExtensionDate,
    LpaQuestionnaireDueDate,
    IssueDeterminationDate,
    LpaStatementDueDate,
    FinalCommentsDueDate,
}

impl OverrideField {
    /// Field name as it appears on the wire.
    pub fn name(&self) -> &'static str {
        match self {
            Self::CaseExtensionDate => "caseExtensionDate",
            Self::LpaQuestionnaireDueDate => "lpaQuestionnaireDueDate",
            Self::IssueDeterminationDate => "issueDeterminationDate",
            Self::LpaStatementDueDate => "lpaStatementDueDate",
            Self::FinalCommentsDueDate => "finalCommentsDueDate",
        }
    }
}

/// Read an override off the case. The value is returned as stored, with
/// no adjustment for weekends or holidays.
pub fn resolve_override(case: &AppealCase, field: OverrideField) -> Option<DateTime<Utc>> {
    let timetable = case.timetable.as_ref();
    match field {
        OverrideField::CaseExtensionDate => case.case_extension_date,
        OverrideField::LpaQuestionnaireDueDate => {
            timetable.and_then(|t| t.lpa_questionnaire_due_date)
        }
        OverrideField::IssueDeterminationDate => timetable.and_then(|t| t.issue_determination_date),
        OverrideField::LpaStatementDueDate => timetable.and_then(|t| t.lpa_statement_due_date),
        OverrideField::FinalCommentsDueDate => timetable.and_then(|t| t.final_comments_due_date),
    }
}

/// Date a period is counted from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    CaseCreated,
    SiteVisit,
}

impl Anchor {
    pub fn resolve(&self, case: &AppealCase) -> Option<DateTime<Utc>> {
        match self {
            Self::CaseCreated => Some(case.case_created_date),
            Self::SiteVisit => case.site_visit.as_ref().map(|v| v.visit_date),
        }
    }
}

/// A period of `days` counted from `anchor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Offset {
    pub anchor: Anchor,
    pub days: u32,
    pub kind: DayKind,
}

impl Offset {
    pub const fn calendar(days: u32) -> Self {
        Self {
            anchor: Anchor::CaseCreated,
            days,
            kind: DayKind::Calendar,
        }
    }

    pub const fn business(anchor: Anchor, days: u32) -> Self {
        Self {
            anchor,
            days,
            kind: DayKind::Business,
        }
    }
}

/// How the due date is found when no override is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultRule {
    Offset(Offset),
    /// Decision periods run from the site visit when one has been held.
    SiteVisitDependent {
        with_site_visit: Offset,
        without_site_visit: Offset,
    },
    /// The date of the event matching the case's procedure type.
    ScheduledEvent,
    /// Another stored milestone.
    Field(OverrideField),
    /// Terminal stage, nothing further is due.
    NotApplicable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimetableRule {
    pub status: AppealStatus,
    pub override_field: Option<OverrideField>,
    pub default: DefaultRule,
}

pub const RULES: &[TimetableRule] = &[
    TimetableRule {
        status: AppealStatus::ReadyToStart,
        override_field: Some(OverrideField::CaseExtensionDate),
        default: DefaultRule::Offset(Offset::calendar(5)),
    },
    TimetableRule {
        status: AppealStatus::LpaQuestionnaire,
        override_field: Some(OverrideField::LpaQuestionnaireDueDate),
        default: DefaultRule::Offset(Offset::calendar(10)),
    },
    TimetableRule {
        status: AppealStatus::AssignCaseOfficer,
        override_field: None,
        default: DefaultRule::Offset(Offset::calendar(15)),
    },
    TimetableRule {
        status: AppealStatus::IssueDetermination,
        override_field: Some(OverrideField::IssueDeterminationDate),
        default: DefaultRule::SiteVisitDependent {
            with_site_visit: Offset::business(Anchor::SiteVisit, 40),
            without_site_visit: Offset::business(Anchor::CaseCreated, 30),
        },
    },
    TimetableRule {
        status: AppealStatus::Statements,
        override_field: Some(OverrideField::LpaStatementDueDate),
        default: DefaultRule::Offset(Offset::calendar(55)),
    },
    TimetableRule {
        status: AppealStatus::FinalComments,
        override_field: None,
        default: DefaultRule::Offset(Offset::calendar(60)),
    },
    TimetableRule {
        status: AppealStatus::AwaitingEvent,
        override_field: None,
        default: DefaultRule::ScheduledEvent,
    },
    // Falls back to the questionnaire date, not the comments date. Kept
    // as-is pending confirmation from the case team.
    TimetableRule {
        status: AppealStatus::Event,
        override_field: Some(OverrideField::FinalCommentsDueDate),
        default: DefaultRule::Field(OverrideField::LpaQuestionnaireDueDate),
    },
    TimetableRule {
        status: AppealStatus::Complete,
        override_field: None,
        default: DefaultRule::NotApplicable,
    },
];

/// The rule row for a status, if it has one.
pub fn rule_for(status: AppealStatus) -> Option<&'static TimetableRule> {
    RULES.iter().find(|rule| rule.status == status)
}
