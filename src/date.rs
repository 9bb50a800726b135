//! # Dates
//!
//! Due date parsing, format inference, and urgency classification.
//!
//! A due date is parsed together with a [`DateFormat`] describing exactly how
//! the user spelled it (separator and digit widths), so `3/1/2025` redisplays
//! as `3/1/2025` and `03-01-25` as `03-01-25`.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveTime, TimeZone, Timelike};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Separators a due date may use. A single date must stick to one of them.
const SEPARATORS: [char; 3] = ['/', '-', '.'];

/// Milliseconds per day, for the urgency math.
const DAY_MS: i64 = 86_400_000;

/// Errors from date, time, and format-descriptor parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    /// The input is not a recognizable calendar date.
    #[error("{0} is not a valid date")]
    InvalidDate(String),

    /// The input is not a recognizable clock time.
    #[error("{0} is not a valid time")]
    InvalidTime(String),

    /// The input is not a recognizable format descriptor.
    #[error("{0} is not a valid date format")]
    InvalidFormat(String),
}

// =============================================================================
// Format Descriptor
// =============================================================================

/// How a due date was spelled: which separator and how many digits per field.
///
/// Serialized as the descriptor string itself (e.g. `M/DD/YYYY`), which keeps
/// the task file readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DateFormat {
    separator: char,
    month_width: u8,
    day_width: u8,
    year_width: u8,
}

impl DateFormat {
    /// Renders `date` the way the user originally spelled it.
    pub fn render(&self, date: NaiveDate) -> String {
        let month = render_field(date.month(), self.month_width);
        let day = render_field(date.day(), self.day_width);
        let year = if self.year_width == 2 {
            format!("{:02}", date.year() % 100)
        } else {
            format!("{:04}", date.year())
        };
        format!(
            "{month}{sep}{day}{sep}{year}",
            sep = self.separator
        )
    }
}

fn render_field(value: u32, width: u8) -> String {
    if width == 2 {
        format!("{value:02}")
    } else {
        value.to_string()
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let month = "M".repeat(self.month_width as usize);
        let day = "D".repeat(self.day_width as usize);
        let year = "Y".repeat(self.year_width as usize);
        write!(
            f,
            "{month}{sep}{day}{sep}{year}",
            sep = self.separator
        )
    }
}

impl FromStr for DateFormat {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DateError::InvalidFormat(s.to_string());

        let separator = SEPARATORS
            .into_iter()
            .find(|&sep| s.contains(sep))
            .ok_or_else(invalid)?;

        let fields: Vec<&str> = s.split(separator).collect();
        let &[month, day, year] = fields.as_slice() else {
            return Err(invalid());
        };

        if !is_token(month, 'M', &[1, 2]) || !is_token(day, 'D', &[1, 2]) {
            return Err(invalid());
        }
        if !is_token(year, 'Y', &[2, 4]) {
            return Err(invalid());
        }

        Ok(Self {
            separator,
            month_width: month.len() as u8,
            day_width: day.len() as u8,
            year_width: year.len() as u8,
        })
    }
}

fn is_token(field: &str, letter: char, widths: &[usize]) -> bool {
    widths.contains(&field.len()) && field.chars().all(|c| c == letter)
}

impl TryFrom<String> for DateFormat {
    type Error = DateError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DateFormat> for String {
    fn from(format: DateFormat) -> Self {
        format.to_string()
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Parses a due date like `5/23/2015`, `5-23-15`, or `6.2.2015` and infers
/// the [`DateFormat`] from the spelling.
///
/// The three fields are month, day, year. All fields must use the same
/// separator; mixed separators like `5-23.15` are rejected. Two-digit years
/// resolve to the 2000s. The day must exist in the given month and year, so
/// `2/30/2025` is rejected.
pub fn parse_due_date(input: &str) -> Result<(NaiveDate, DateFormat), DateError> {
    let invalid = || DateError::InvalidDate(input.to_string());
    let trimmed = input.trim();

    let separator = SEPARATORS
        .into_iter()
        .find(|&sep| trimmed.contains(sep))
        .ok_or_else(invalid)?;

    let fields: Vec<&str> = trimmed.split(separator).collect();
    let &[month_str, day_str, year_str] = fields.as_slice() else {
        return Err(invalid());
    };

    let month = parse_field(month_str, &[1, 2]).ok_or_else(invalid)?;
    let day = parse_field(day_str, &[1, 2]).ok_or_else(invalid)?;
    let year = parse_field(year_str, &[2, 4]).ok_or_else(invalid)?;

    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return Err(invalid());
    }

    // Two-digit years are this century.
    let year = if year_str.len() == 2 { 2000 + year } else { year };

    let date = NaiveDate::from_ymd_opt(i32::try_from(year).unwrap_or(0), month, day)
        .ok_or_else(invalid)?;

    let format = DateFormat {
        separator,
        month_width: month_str.len() as u8,
        day_width: day_str.len() as u8,
        year_width: year_str.len() as u8,
    };

    Ok((date, format))
}

fn parse_field(field: &str, widths: &[usize]) -> Option<u32> {
    if !widths.contains(&field.len()) || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

/// Parses a clock time of the form `h:mm AM/PM`.
///
/// The hour runs 1 through 12 without a leading zero, the minutes are always
/// two digits, and the meridiem is case-insensitive with optional surrounding
/// spaces (`7:30PM` and ` 7:30 pm ` both work).
pub fn parse_due_time(input: &str) -> Result<NaiveTime, DateError> {
    let invalid = || DateError::InvalidTime(input.to_string());
    let lowered = input.trim().to_ascii_lowercase();

    let (clock, pm) = if let Some(rest) = lowered.strip_suffix("pm") {
        (rest, true)
    } else if let Some(rest) = lowered.strip_suffix("am") {
        (rest, false)
    } else {
        return Err(invalid());
    };

    let (hour_str, minute_str) = clock.trim_end().split_once(':').ok_or_else(invalid)?;

    let hour: u32 = hour_str.parse().map_err(|_| invalid())?;
    let hour_ok = match hour_str.len() {
        1 => (1..=9).contains(&hour),
        2 => (10..=12).contains(&hour),
        _ => false,
    };
    if !hour_ok {
        return Err(invalid());
    }

    if minute_str.len() != 2 || !minute_str.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let minute: u32 = minute_str.parse().map_err(|_| invalid())?;
    if minute > 59 {
        return Err(invalid());
    }

    let hour24 = match (hour, pm) {
        (12, false) => 0,
        (12, true) => 12,
        (h, true) => h + 12,
        (h, false) => h,
    };

    NaiveTime::from_hms_opt(hour24, minute, 0).ok_or_else(invalid)
}

/// The due time used when none is given: 11:59 PM.
fn default_due_time() -> NaiveTime {
    NaiveTime::from_hms_opt(23, 59, 0).unwrap_or_default()
}

// =============================================================================
// Due Date
// =============================================================================

/// A task's deadline: calendar date, clock time, and the format it was
/// spelled in.
///
/// `explicit_time` records whether the user gave the time themselves; only
/// explicit times are shown when the date is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DueDate {
    date: NaiveDate,
    time: NaiveTime,
    explicit_time: bool,
    format: DateFormat,
}

impl DueDate {
    /// A due date with the default time of 11:59 PM.
    pub fn new(date: NaiveDate, format: DateFormat) -> Self {
        Self {
            date,
            time: default_due_time(),
            explicit_time: false,
            format,
        }
    }

    /// A due date with an explicitly given time.
    pub const fn with_time(date: NaiveDate, format: DateFormat, time: NaiveTime) -> Self {
        Self {
            date,
            time,
            explicit_time: true,
            format,
        }
    }

    /// The calendar date.
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// The clock time, explicit or defaulted.
    pub const fn time(&self) -> NaiveTime {
        self.time
    }

    /// Whether the user gave the time themselves.
    pub const fn has_explicit_time(&self) -> bool {
        self.explicit_time
    }

    /// The deadline as a local-timezone instant.
    pub fn deadline(&self) -> DateTime<Local> {
        let naive = self.date.and_time(self.time);
        // A local time skipped by a DST transition falls back to its UTC
        // reading; deadlines never need sub-hour precision around 11:59 PM.
        naive
            .and_local_timezone(Local)
            .earliest()
            .unwrap_or_else(|| Local.from_utc_datetime(&naive))
    }
}

impl fmt::Display for DueDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format.render(self.date))?;
        if self.explicit_time {
            let (pm, hour) = self.time.hour12();
            let meridiem = if pm { "PM" } else { "AM" };
            write!(f, " {hour}:{:02} {meridiem}", self.time.minute())?;
        }
        Ok(())
    }
}

// =============================================================================
// Urgency
// =============================================================================

/// How pressing a deadline is relative to now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Urgency {
    /// More than a full day away.
    Upcoming,
    /// Within the next day (or exactly on a day boundary).
    DueSoon,
    /// Already past.
    Overdue,
}

/// Classifies `deadline` against `now`.
///
/// The difference is split into whole days and a remainder, both floored, so
/// a deadline 1 second in the past already counts a full negative day and
/// reads as overdue. A deadline landing exactly on a day boundary reads as
/// due, not upcoming.
pub fn urgency(deadline: DateTime<Local>, now: DateTime<Local>) -> Urgency {
    let ms = deadline.signed_duration_since(now).num_milliseconds();
    let days = ms.div_euclid(DAY_MS);
    let remainder = ms.rem_euclid(DAY_MS);

    if days >= 1 && remainder > 0 {
        Urgency::Upcoming
    } else if days >= 0 {
        Urgency::DueSoon
    } else {
        Urgency::Overdue
    }
}
