pub mod timetable;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

/// Build the REST API router.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/api/appeals/due-date", post(timetable::calculate_due_date))
        .route("/api/bank-holidays/{year}", get(timetable::list_bank_holidays))
        .route("/api/business-days/next", get(timetable::next_business_day))
}
