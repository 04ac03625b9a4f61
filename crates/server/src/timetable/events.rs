use chrono::{DateTime, Utc};
use shared_types::{AppealCase, ProcedureKind};

/// Date of the event that decides an appeal of the case's procedure type:
/// the site visit for written representations, otherwise the hearing or
/// inquiry start. There is no fallback between event types; a hearing
/// case without a hearing record resolves to `None`.
pub fn resolve_event_date(case: &AppealCase) -> Option<DateTime<Utc>> {
    match case.procedure_type.as_ref()?.key {
        ProcedureKind::Written => case.site_visit.as_ref().map(|v| v.visit_date),
        ProcedureKind::Hearing => case.hearing.as_ref().map(|h| h.hearing_start_time),
        ProcedureKind::Inquiry => case.inquiry.as_ref().map(|i| i.inquiry_start_time),
    }
}
