use axum::{
    extract::{Path, Query, State},
    Json,
};
use shared_types::{
    AppError, BankHolidayListResponse, CalculateDueDateRequest, CalculateDueDateResponse,
    NextBusinessDayParams, NextBusinessDayResponse,
};

use crate::state::AppState;
use crate::timetable::BusinessCalendar;

/// Years the bank holiday listing will compute. The computed table follows
/// the pattern in force since 1978.
const MIN_YEAR: i32 = 1978;
const MAX_YEAR: i32 = 2200;

/// POST /api/appeals/due-date
#[utoipa::path(
    post,
    path = "/api/appeals/due-date",
    request_body = CalculateDueDateRequest,
    responses(
        (status = 200, description = "Next due date for the appeal", body = CalculateDueDateResponse),
        (status = 400, description = "Body is not valid JSON"),
        (status = 422, description = "Appeal record is missing required fields")
    ),
    tag = "timetable"
)]
pub async fn calculate_due_date(
    State(state): State<AppState>,
    Json(body): Json<CalculateDueDateRequest>,
) -> Result<Json<CalculateDueDateResponse>, AppError> {
    let engine = &state.engine;
    let status = engine.current_status(&body.appeal);
    let outcome = engine.calculate(&body.appeal, body.context.as_deref());

    Ok(Json(CalculateDueDateResponse {
        reference: body.appeal.reference,
        status,
        outcome,
    }))
}

/// GET /api/bank-holidays/{year}
#[utoipa::path(
    get,
    path = "/api/bank-holidays/{year}",
    params(
        ("year" = i32, Path, description = "Calendar year")
    ),
    responses(
        (status = 200, description = "Bank holidays in the year", body = BankHolidayListResponse),
        (status = 422, description = "Year out of range", body = AppError)
    ),
    tag = "timetable"
)]
pub async fn list_bank_holidays(
    State(state): State<AppState>,
    Path(year): Path<i32>,
) -> Result<Json<BankHolidayListResponse>, AppError> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(AppError::invalid_field(
            "year",
            format!("must be between {MIN_YEAR} and {MAX_YEAR}"),
        ));
    }

    let calendar = state.calendar();
    Ok(Json(BankHolidayListResponse {
        year,
        division: calendar.division().to_string(),
        holidays: calendar.holidays_in(year),
    }))
}

/// GET /api/business-days/next
#[utoipa::path(
    get,
    path = "/api/business-days/next",
    params(NextBusinessDayParams),
    responses(
        (status = 200, description = "First business day on or after the date", body = NextBusinessDayResponse),
        (status = 400, description = "Date out of range", body = AppError)
    ),
    tag = "timetable"
)]
pub async fn next_business_day(
    State(state): State<AppState>,
    Query(params): Query<NextBusinessDayParams>,
) -> Result<Json<NextBusinessDayResponse>, AppError> {
    let business_day = state
        .calendar()
        .next_business_day(params.date)
        .ok_or_else(|| AppError::bad_request("date is out of range"))?;

    Ok(Json(NextBusinessDayResponse {
        date: params.date,
        business_day,
    }))
}
