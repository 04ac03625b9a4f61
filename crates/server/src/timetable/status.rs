//! Current-status selection.
//!
//! An appeal carries its whole status history. Which row counts as
//! current is a policy of its own, kept behind [`StatusSelector`] so the
//! dispatcher never reads history rows directly.

use shared_types::{AppealStatus, StatusHistoryEntry};

pub trait StatusSelector {
    fn current_status(&self, history: &[StatusHistoryEntry]) -> Option<AppealStatus>;
}

impl<F> StatusSelector for F
where
    F: Fn(&[StatusHistoryEntry]) -> Option<AppealStatus>,
{
    fn current_status(&self, history: &[StatusHistoryEntry]) -> Option<AppealStatus> {
        self(history)
    }
}

/// The most recent valid entry is current. When two valid entries share
/// a timestamp the one later in the list wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct LatestValidStatus;

impl StatusSelector for LatestValidStatus {
    fn current_status(&self, history: &[StatusHistoryEntry]) -> Option<AppealStatus> {
        current_entry(history).and_then(|entry| AppealStatus::parse(&entry.status))
    }
}

/// The entry [`LatestValidStatus`] treats as current.
pub fn current_entry(history: &[StatusHistoryEntry]) -> Option<&StatusHistoryEntry> {
    history
        .iter()
        .filter(|entry| entry.valid)
        .max_by_key(|entry| entry.created_at)
}

/// Shorthand for `LatestValidStatus.current_status(history)`.
pub fn current_status(history: &[StatusHistoryEntry]) -> Option<AppealStatus> {
    LatestValidStatus.current_status(history)
}
