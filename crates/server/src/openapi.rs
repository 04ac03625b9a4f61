use axum::Router;
use shared_types::{
    AppError, AppErrorKind, AppealCase, AppealStatus, AppealTimetable, AppellantCase,
    BankHoliday, BankHolidayListResponse, CalculateDueDateRequest, CalculateDueDateResponse,
    DueDate, Hearing, Inquiry, NextBusinessDayResponse, ProcedureKind, ProcedureType, SiteVisit,
    StatusHistoryEntry, ValidationOutcome,
};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::health;
use crate::rest;
use crate::state::AppState;
use crate::telemetry;

/// OpenAPI documentation for the API.
#[derive(OpenApi)]
#[openapi(
    paths(
        rest::timetable::calculate_due_date,
        rest::timetable::list_bank_holidays,
        rest::timetable::next_business_day,
        health::health_check,
    ),
    components(schemas(
        AppError,
        AppErrorKind,
        AppealCase,
        AppealStatus,
        AppealTimetable,
        AppellantCase,
        BankHoliday,
        BankHolidayListResponse,
        CalculateDueDateRequest,
        CalculateDueDateResponse,
        DueDate,
        Hearing,
        Inquiry,
        NextBusinessDayResponse,
        ProcedureKind,
        ProcedureType,
        SiteVisit,
        StatusHistoryEntry,
        ValidationOutcome,
        health::HealthResponse,
    )),
    tags(
        (name = "timetable", description = "Appeal timetable due dates and working-day calendar"),
        (name = "health", description = "Health check endpoint")
    ),
    info(
        title = "Appeal Timetable API",
        description = "Statutory due dates for planning appeals",
        version = "1.0.0"
    )
)]
pub struct ApiDoc;

/// Build an Axum router that serves the API docs at `/docs`
/// and the REST API at `/api/*`.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .merge(rest::api_router())
        .route("/health", axum::routing::get(health::health_check))
        .with_state(state)
        .merge(Scalar::with_url("/docs", ApiDoc::openapi()))
        .layer(telemetry::http_trace_layer())
}
