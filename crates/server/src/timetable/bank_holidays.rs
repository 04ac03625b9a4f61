//! UK bank holiday calendar
//!
//! Working-day periods in the appeal timetable skip weekends and the bank
//! holidays of England and Wales. The built-in table follows the Banking
//! and Financial Dealings Act 1971 pattern (fixed dates with weekend
//! substitution, Easter, and the three Monday holidays) plus the one-off
//! proclamations since 1999. A GOV.UK `bank-holidays.json` snapshot can
//! replace the built-in table when it needs to track a new proclamation.

use chrono::{Datelike, NaiveDate, TimeDelta, Weekday};
use shared_types::{AppError, BankHoliday, CalendarConfig, GovUkBankHolidays, DEFAULT_DIVISION};
use std::collections::{BTreeMap, BTreeSet};
use std::ops::RangeInclusive;

/// Days added by royal proclamation, on top of the usual pattern.
const PROCLAIMED_HOLIDAYS: &[(i32, u32, u32, &str)] = &[
    (1999, 12, 31, "Millennium celebrations"),
    (2002, 6, 3, "Queen’s Golden Jubilee"),
    (2011, 4, 29, "Royal wedding"),
    (2012, 6, 5, "Queen’s Diamond Jubilee"),
    (2022, 6, 3, "Platinum Jubilee bank holiday"),
    (2022, 9, 19, "Bank Holiday for the State Funeral of Queen Elizabeth II"),
    (2023, 5, 8, "Bank holiday for the coronation of King Charles III"),
];

/// Source of a calendar's holiday dates.
#[derive(Debug, Clone, PartialEq)]
enum HolidaySource {
    Computed,
    /// `years` spans the first to last event listed in the feed.
    Feed {
        holidays: BTreeMap<NaiveDate, String>,
        years: Option<RangeInclusive<i32>>,
    },
}

/// Non-working day lookup consumed by the timetable engine.
pub trait BusinessCalendar {
    /// Whether `date` is a public holiday or closure. Weekends are handled
    /// separately by [`BusinessCalendar::is_business_day`].
    fn is_holiday(&self, date: NaiveDate) -> bool;

    fn is_business_day(&self, date: NaiveDate) -> bool {
        !is_weekend(date) && !self.is_holiday(date)
    }

    /// First business day on or after `date`.
    fn next_business_day(&self, date: NaiveDate) -> Option<NaiveDate> {
        let mut current = date;
        while !self.is_business_day(current) {
            current = current.succ_opt()?;
        }
        Some(current)
    }
}

impl<T: BusinessCalendar + ?Sized> BusinessCalendar for &T {
    fn is_holiday(&self, date: NaiveDate) -> bool {
        (**self).is_holiday(date)
    }
}

impl<T: BusinessCalendar + ?Sized> BusinessCalendar for std::sync::Arc<T> {
    fn is_holiday(&self, date: NaiveDate) -> bool {
        (**self).is_holiday(date)
    }
}

/// Bank holidays for one division, plus any local closures.
#[derive(Debug, Clone, PartialEq)]
pub struct BankHolidayCalendar {
    division: String,
    source: HolidaySource,
    closures: BTreeSet<NaiveDate>,
}

impl Default for BankHolidayCalendar {
    fn default() -> Self {
        Self::england_and_wales()
    }
}

impl BankHolidayCalendar {
    /// The built-in England and Wales table.
    pub fn england_and_wales() -> Self {
        Self {
            division: DEFAULT_DIVISION.to_string(),
            source: HolidaySource::Computed,
            closures: BTreeSet::new(),
        }
    }

    /// Build from the GOV.UK bank holidays feed. The feed is authoritative
    /// for the chosen division. For England and Wales, years outside the
    /// feed's range fall back to the built-in table.
    pub fn from_govuk_json(json: &str, division: &str) -> Result<Self, AppError> {
        let feed: GovUkBankHolidays = serde_json::from_str(json)?;
        Self::from_govuk_feed(feed, division)
    }

    pub fn from_govuk_feed(mut feed: GovUkBankHolidays, division: &str) -> Result<Self, AppError> {
        let entry = feed.remove(division).ok_or_else(|| {
            AppError::bad_request(format!("Bank holiday feed has no division {division}"))
        })?;
        let holidays: BTreeMap<NaiveDate, String> = entry
            .events
            .into_iter()
            .map(|event| (event.date, event.title))
            .collect();
        let years = match (holidays.keys().next(), holidays.keys().next_back()) {
            (Some(first), Some(last)) => Some(first.year()..=last.year()),
            _ => None,
        };
        Ok(Self {
            division: entry.division,
            source: HolidaySource::Feed { holidays, years },
            closures: BTreeSet::new(),
        })
    }

    /// Build the calendar described by the `[calendar]` config section.
    pub fn from_config(config: &CalendarConfig) -> Result<Self, AppError> {
        let calendar = match &config.holidays_file {
            Some(path) => {
                let json = std::fs::read_to_string(path).map_err(|e| {
                    AppError::config(format!("Failed to read holidays file {path}: {e}"))
                })?;
                let calendar = Self::from_govuk_json(&json, &config.division)?;
                match calendar.feed_years() {
                    Some(years) => tracing::info!(
                        path = %path,
                        first_year = *years.start(),
                        last_year = *years.end(),
                        "bank holiday feed loaded"
                    ),
                    None => tracing::warn!(path = %path, "bank holiday feed lists no events"),
                }
                calendar
            }
            None if config.division == DEFAULT_DIVISION => Self::england_and_wales(),
            None => {
                return Err(AppError::config(format!(
                    "No built-in bank holidays for {}; set calendar.holidays_file",
                    config.division
                )));
            }
        };
        Ok(calendar.with_closures(config.additional_closures.iter().copied()))
    }

    /// Add local non-working days (office closures and the like).
    pub fn with_closures(mut self, dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        self.closures.extend(dates);
        self
    }

    pub fn division(&self) -> &str {
        &self.division
    }

    /// "computed" or "govuk-feed".
    pub fn source_name(&self) -> &'static str {
        match self.source {
            HolidaySource::Computed => "computed",
            HolidaySource::Feed { .. } => "govuk-feed",
        }
    }

    /// Whether holidays in `year` come from the feed. An England and Wales
    /// feed only answers for the years it lists; outside them the computed
    /// table applies. Other divisions have no computed table to fall back on.
    fn uses_feed(&self, year: i32) -> bool {
        match &self.source {
            HolidaySource::Computed => false,
            HolidaySource::Feed { years, .. } => {
                self.division != DEFAULT_DIVISION
                    || years.as_ref().is_some_and(|y| y.contains(&year))
            }
        }
    }

    /// Years taken from the feed, if one is loaded and lists any events.
    pub fn feed_years(&self) -> Option<RangeInclusive<i32>> {
        match &self.source {
            HolidaySource::Computed => None,
            HolidaySource::Feed { years, .. } => years.clone(),
        }
    }

    /// All non-working weekdays and holidays recorded for `year`, in date order.
    pub fn holidays_in(&self, year: i32) -> Vec<BankHoliday> {
        let mut holidays = match &self.source {
            HolidaySource::Feed { holidays, .. } if self.uses_feed(year) => holidays
                .iter()
                .filter(|(date, _)| date.year() == year)
                .map(|(date, name)| BankHoliday {
                    date: *date,
                    name: name.clone(),
                })
                .collect(),
            _ => get_bank_holidays(year),
        };
        for date in self.closures.iter().filter(|d| d.year() == year) {
            if !holidays.iter().any(|h| h.date == *date) {
                holidays.push(BankHoliday {
                    date: *date,
                    name: "Additional closure".to_string(),
                });
            }
        }
        holidays.sort_by_key(|h| h.date);
        holidays
    }
}

impl BusinessCalendar for BankHolidayCalendar {
    fn is_holiday(&self, date: NaiveDate) -> bool {
        if self.closures.contains(&date) {
            return true;
        }
        match &self.source {
            HolidaySource::Feed { holidays, .. } if self.uses_feed(date.year()) => {
                holidays.contains_key(&date)
            }
            _ => is_bank_holiday(date),
        }
    }
}

/// Check if a date is an England and Wales bank holiday.
pub fn is_bank_holiday(date: NaiveDate) -> bool {
    get_bank_holidays(date.year()).iter().any(|h| h.date == date)
}

/// Check if a date is a weekend.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Easter Sunday by the anonymous Gregorian algorithm.
pub fn easter_sunday(year: i32) -> Option<NaiveDate> {
    let a = year.rem_euclid(19);
    let b = year.div_euclid(100);
    let c = year.rem_euclid(100);
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;
    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
}

fn last_weekday_of_month(year: i32, month: u32, weekday: Weekday) -> Option<NaiveDate> {
    NaiveDate::from_weekday_of_month_opt(year, month, weekday, 5)
        .or_else(|| NaiveDate::from_weekday_of_month_opt(year, month, weekday, 4))
}

/// New Year's Day moves to the following Monday.
fn new_year_substitute(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + TimeDelta::days(2),
        Weekday::Sun => date + TimeDelta::days(1),
        _ => date,
    }
}

/// Christmas and Boxing Day both move two days on when they fall at a
/// weekend, which keeps the pair on consecutive weekdays.
fn christmas_substitute(date: NaiveDate) -> NaiveDate {
    if is_weekend(date) {
        date + TimeDelta::days(2)
    } else {
        date
    }
}

fn early_may(year: i32) -> Option<NaiveDate> {
    match year {
        1995 | 2020 => NaiveDate::from_ymd_opt(year, 5, 8),
        _ => NaiveDate::from_weekday_of_month_opt(year, 5, Weekday::Mon, 1),
    }
}

fn spring(year: i32) -> Option<NaiveDate> {
    match year {
        2002 | 2012 => NaiveDate::from_ymd_opt(year, 6, 4),
        2022 => NaiveDate::from_ymd_opt(year, 6, 2),
        _ => last_weekday_of_month(year, 5, Weekday::Mon),
    }
}

fn push(holidays: &mut Vec<BankHoliday>, date: Option<NaiveDate>, name: &str) {
    if let Some(date) = date {
        holidays.push(BankHoliday {
            date,
            name: name.to_string(),
        });
    }
}

/// Get the England and Wales bank holidays for a year, substitutes applied.
///
/// Follows the pattern in force since 1978, when the early May holiday was
/// added. Earlier years are not modelled.
pub fn get_bank_holidays(year: i32) -> Vec<BankHoliday> {
    let mut holidays = Vec::new();
    let easter = easter_sunday(year);

    push(
        &mut holidays,
        NaiveDate::from_ymd_opt(year, 1, 1).map(new_year_substitute),
        "New Year’s Day",
    );
    push(
        &mut holidays,
        easter.and_then(|d| d.checked_sub_signed(TimeDelta::days(2))),
        "Good Friday",
    );
    push(
        &mut holidays,
        easter.and_then(|d| d.checked_add_signed(TimeDelta::days(1))),
        "Easter Monday",
    );
    push(&mut holidays, early_may(year), "Early May bank holiday");
    push(&mut holidays, spring(year), "Spring bank holiday");
    push(
        &mut holidays,
        last_weekday_of_month(year, 8, Weekday::Mon),
        "Summer bank holiday",
    );
    push(
        &mut holidays,
        NaiveDate::from_ymd_opt(year, 12, 25).map(christmas_substitute),
        "Christmas Day",
    );
    push(
        &mut holidays,
        NaiveDate::from_ymd_opt(year, 12, 26).map(christmas_substitute),
        "Boxing Day",
    );

    for (y, month, day, name) in PROCLAIMED_HOLIDAYS {
        if *y == year {
            push(&mut holidays, NaiveDate::from_ymd_opt(year, *month, *day), name);
        }
    }

    holidays.sort_by_key(|h| h.date);
    holidays
}
