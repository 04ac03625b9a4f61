//! Appeal timetable due-date engine
//!
//! Given an appeal as loaded, works out the next statutory due date from
//! its current status. Overrides stored on the case always win. Without
//! one, the status row in [`RULES`](super::rules::RULES) decides between a
//! calendar-day offset, a working-day offset, or a scheduled event.
//!
//! The engine is pure and never fails: a missing anchor or event, an
//! unknown status, or date overflow all come back as
//! [`DueDate::Undetermined`].

use chrono::{DateTime, Utc};
use shared_types::{AppealCase, AppealStatus, DueDate};
use std::sync::LazyLock;

use super::bank_holidays::{BankHolidayCalendar, BusinessCalendar};
use super::events::resolve_event_date;
use super::rules::{resolve_override, rule_for, DefaultRule, Offset};
use super::status::{LatestValidStatus, StatusSelector};
use super::working_days::add_days;

static DEFAULT_ENGINE: LazyLock<DueDateEngine> = LazyLock::new(DueDateEngine::default);

/// Compute the due date with the England and Wales calendar and the
/// latest-valid-status policy. `context` identifies the caller in logs
/// and does not affect the result.
pub fn calculate_due_date(case: &AppealCase, context: Option<&str>) -> DueDate {
    DEFAULT_ENGINE.calculate(case, context)
}

/// The due-date engine with its two collaborators.
#[derive(Debug, Clone)]
pub struct DueDateEngine<C = BankHolidayCalendar, S = LatestValidStatus> {
    calendar: C,
    selector: S,
}

impl Default for DueDateEngine {
    fn default() -> Self {
        Self::new(BankHolidayCalendar::england_and_wales())
    }
}

impl<C: BusinessCalendar> DueDateEngine<C> {
    pub fn new(calendar: C) -> Self {
        Self {
            calendar,
            selector: LatestValidStatus,
        }
    }
}

impl<C: BusinessCalendar, S: StatusSelector> DueDateEngine<C, S> {
    pub fn with_selector(calendar: C, selector: S) -> Self {
        Self { calendar, selector }
    }

    pub fn calendar(&self) -> &C {
        &self.calendar
    }

    /// The status the engine will dispatch on.
    pub fn current_status(&self, case: &AppealCase) -> Option<AppealStatus> {
        self.selector.current_status(&case.status_history)
    }

    pub fn calculate(&self, case: &AppealCase, context: Option<&str>) -> DueDate {
        let Some(status) = self.current_status(case) else {
            tracing::debug!(
                reference = %case.reference,
                context = context.unwrap_or("-"),
                "no recognised current status"
            );
            return DueDate::Undetermined;
        };

        let due = self.calculate_for_status(case, status);
        tracing::debug!(
            reference = %case.reference,
            %status,
            context = context.unwrap_or("-"),
            outcome = ?due,
            "calculated due date"
        );
        due
    }

    /// Evaluate one status row against the case, ignoring its history.
    pub fn calculate_for_status(&self, case: &AppealCase, status: AppealStatus) -> DueDate {
        let Some(rule) = rule_for(status) else {
            return DueDate::Undetermined;
        };

        if let Some(field) = rule.override_field {
            if let Some(date) = resolve_override(case, field) {
                tracing::trace!(
                    reference = %case.reference,
                    field = field.name(),
                    "override applied"
                );
                return DueDate::due(date);
            }
        }

        let due = self.apply_default(case, &rule.default);
        if due.is_undetermined() {
            tracing::warn!(
                reference = %case.reference,
                %status,
                "timetable default could not be resolved"
            );
        }
        due
    }

    fn apply_default(&self, case: &AppealCase, default: &DefaultRule) -> DueDate {
        match default {
            DefaultRule::Offset(offset) => self.apply_offset(case, offset).into(),
            DefaultRule::SiteVisitDependent {
                with_site_visit,
                without_site_visit,
            } => {
                let offset = if case.site_visit.is_some() {
                    with_site_visit
                } else {
                    without_site_visit
                };
                self.apply_offset(case, offset).into()
            }
            DefaultRule::ScheduledEvent => resolve_event_date(case).into(),
            DefaultRule::Field(field) => resolve_override(case, *field).into(),
            DefaultRule::NotApplicable => DueDate::NotApplicable,
        }
    }

    fn apply_offset(&self, case: &AppealCase, offset: &Offset) -> Option<DateTime<Utc>> {
        let start = offset.anchor.resolve(case)?;
        add_days(&self.calendar, offset.kind, start, offset.days)
    }
}
