pub mod bank_holidays;
pub mod due_date;
pub mod events;
pub mod rules;
pub mod status;
pub mod working_days;

pub use bank_holidays::{BankHolidayCalendar, BusinessCalendar};
pub use due_date::{calculate_due_date, DueDateEngine};
