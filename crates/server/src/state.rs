use shared_types::{AppError, CalendarConfig};
use std::sync::Arc;

use crate::timetable::{BankHolidayCalendar, DueDateEngine};

/// Shared application state passed to Axum handlers via `State`.
///
/// The engine is immutable once built, so handlers read it without
/// locking.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<DueDateEngine>,
}

impl AppState {
    pub fn new(calendar: BankHolidayCalendar) -> Self {
        Self {
            engine: Arc::new(DueDateEngine::new(calendar)),
        }
    }

    /// Build state from the `[calendar]` config section.
    pub fn from_config(config: &CalendarConfig) -> Result<Self, AppError> {
        let calendar = BankHolidayCalendar::from_config(config)?;
        tracing::info!(
            division = calendar.division(),
            source = calendar.source_name(),
            "bank holiday calendar ready"
        );
        Ok(Self::new(calendar))
    }

    pub fn calendar(&self) -> &BankHolidayCalendar {
        self.engine.calendar()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(BankHolidayCalendar::england_and_wales())
    }
}
