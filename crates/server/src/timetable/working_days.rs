//! Calendar-day and business-day offsets.
//!
//! Statutory periods in the appeal timetable are expressed either in
//! calendar days or in working days. Both adders keep the time of day of
//! the start instant and return `None` only when the result would fall
//! outside chrono's representable range.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use super::bank_holidays::BusinessCalendar;

/// How a period is counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayKind {
    /// Every day counts.
    Calendar,
    /// Weekends and holidays are skipped.
    Business,
}

/// Add `days` calendar days. Negative values move backwards.
pub fn add_calendar_days(start: DateTime<Utc>, days: i64) -> Option<DateTime<Utc>> {
    start.checked_add_signed(TimeDelta::try_days(days)?)
}

/// Add `days` business days. The start date itself is never counted, so
/// zero returns `start` unchanged even when it is a weekend.
pub fn add_business_days<C>(calendar: &C, start: DateTime<Utc>, days: u32) -> Option<DateTime<Utc>>
where
    C: BusinessCalendar + ?Sized,
{
    let one_day = TimeDelta::days(1);
    let mut current = start;
    let mut counted = 0;
    while counted < days {
        current = current.checked_add_signed(one_day)?;
        if calendar.is_business_day(current.date_naive()) {
            counted += 1;
        }
    }
    Some(current)
}

/// Add `days` days of the given kind.
pub fn add_days<C>(
    calendar: &C,
    kind: DayKind,
    start: DateTime<Utc>,
    days: u32,
) -> Option<DateTime<Utc>>
where
    C: BusinessCalendar + ?Sized,
{
    match kind {
        DayKind::Calendar => add_calendar_days(start, i64::from(days)),
        DayKind::Business => add_business_days(calendar, start, days),
    }
}
