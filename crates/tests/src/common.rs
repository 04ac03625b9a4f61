use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use server::timetable::BusinessCalendar;
use shared_types::{
    AppealCase, AppealStatus, AppealTimetable, Hearing, Inquiry, ProcedureKind, ProcedureType,
    SiteVisit, StatusHistoryEntry,
};

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Midnight UTC on the given day.
pub fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
}

/// A case created on `created` whose only status is `status`.
pub fn case_in(status: AppealStatus, created: DateTime<Utc>) -> AppealCase {
    AppealCase::new(1, "APP/Q9999/W/23/1000001", created).with_status(status, created)
}

/// A case whose current status is an arbitrary, possibly unknown, code.
pub fn case_with_code(code: &str, created: DateTime<Utc>) -> AppealCase {
    let mut case = AppealCase::new(1, "APP/Q9999/W/23/1000001", created);
    case.status_history.push(StatusHistoryEntry {
        status: code.to_string(),
        valid: true,
        created_at: created,
    });
    case
}

pub fn with_timetable(mut case: AppealCase, timetable: AppealTimetable) -> AppealCase {
    case.timetable = Some(timetable);
    case
}

pub fn with_procedure(mut case: AppealCase, key: ProcedureKind) -> AppealCase {
    case.procedure_type = Some(ProcedureType { key });
    case
}

pub fn with_site_visit(mut case: AppealCase, visit_date: DateTime<Utc>) -> AppealCase {
    case.site_visit = Some(SiteVisit { visit_date });
    case
}

pub fn with_hearing(mut case: AppealCase, hearing_start_time: DateTime<Utc>) -> AppealCase {
    case.hearing = Some(Hearing { hearing_start_time });
    case
}

pub fn with_inquiry(mut case: AppealCase, inquiry_start_time: DateTime<Utc>) -> AppealCase {
    case.inquiry = Some(Inquiry { inquiry_start_time });
    case
}

/// Weekends only; no holidays at all.
pub struct WeekendsOnly;

impl BusinessCalendar for WeekendsOnly {
    fn is_holiday(&self, _date: NaiveDate) -> bool {
        false
    }
}
