//! Current-status selection tests

use chrono::{DateTime, Utc};
use server::timetable::status::*;
use shared_types::{AppealStatus, StatusHistoryEntry};

use crate::common::at;

fn entry(status: &str, valid: bool, created_at: DateTime<Utc>) -> StatusHistoryEntry {
    StatusHistoryEntry {
        status: status.to_string(),
        valid,
        created_at,
    }
}

#[test]
fn latest_valid_entry_wins() {
    let history = vec![
        entry("ready_to_start", true, at(2023, 1, 1)),
        entry("statements", true, at(2023, 3, 1)),
        entry("lpa_questionnaire", true, at(2023, 2, 1)),
    ];
    assert_eq!(current_status(&history), Some(AppealStatus::Statements));
}

#[test]
fn invalid_entries_are_skipped() {
    let history = vec![
        entry("lpa_questionnaire", true, at(2023, 2, 1)),
        entry("complete", false, at(2023, 4, 1)),
    ];
    assert_eq!(current_status(&history), Some(AppealStatus::LpaQuestionnaire));
}

#[test]
fn tie_goes_to_later_entry() {
    let history = vec![
        entry("event", true, at(2023, 5, 1)),
        entry("complete", true, at(2023, 5, 1)),
    ];
    assert_eq!(current_status(&history), Some(AppealStatus::Complete));
}

#[test]
fn empty_history_has_no_status() {
    assert_eq!(current_status(&[]), None);
}

#[test]
fn all_invalid_history_has_no_status() {
    let history = vec![entry("complete", false, at(2023, 1, 1))];
    assert_eq!(current_entry(&history), None);
    assert_eq!(current_status(&history), None);
}

#[test]
fn unknown_current_code_has_no_status() {
    let history = vec![
        entry("ready_to_start", true, at(2023, 1, 1)),
        entry("unexpected_status", true, at(2023, 2, 1)),
    ];
    assert_eq!(current_entry(&history).unwrap().status, "unexpected_status");
    assert_eq!(LatestValidStatus.current_status(&history), None);
}

#[test]
fn closures_act_as_selectors() {
    let first = |history: &[StatusHistoryEntry]| {
        history.first().and_then(|e| AppealStatus::parse(&e.status))
    };
    let history = vec![
        entry("ready_to_start", true, at(2023, 1, 1)),
        entry("statements", true, at(2023, 3, 1)),
    ];
    assert_eq!(first.current_status(&history), Some(AppealStatus::ReadyToStart));
}
