//! Month arithmetic for the calendar grid.
//!
//! Months are numbered 1..=12. Weekdays are counted from Sunday (0) to
//! Saturday (6), matching the grid's column order.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use crate::error::{ChapterHubError, ChapterHubResult};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Proleptic Gregorian leap-year rule.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Parse YYYY-MM-DD into a calendar date.
pub fn parse_date(s: &str) -> ChapterHubResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| ChapterHubError::InvalidDate(s.to_string()))
}

/// Single-step month navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthStep {
    Previous,
    Next,
}

/// Earliest displayable year.
pub const MIN_YEAR: i32 = 1;
/// Latest displayable year.
pub const MAX_YEAR: i32 = 9999;

/// A (year, month) pair with the month always in 1..=12 and the year in
/// `MIN_YEAR..=MAX_YEAR`, so every day of it is a valid [`NaiveDate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// # Errors
    ///
    /// Returns [`ChapterHubError::InvalidMonth`] if `month` is outside 1..=12
    /// and [`ChapterHubError::InvalidYear`] if `year` is outside
    /// `MIN_YEAR..=MAX_YEAR`.
    pub fn new(year: i32, month: u32) -> ChapterHubResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(ChapterHubError::InvalidMonth { month });
        }
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(ChapterHubError::InvalidYear { year });
        }
        Ok(YearMonth { year, month })
    }

    /// The month containing `date`.
    ///
    /// Returns [`ChapterHubError::InvalidYear`] for dates outside
    /// `MIN_YEAR..=MAX_YEAR`.
    pub fn of(date: NaiveDate) -> ChapterHubResult<Self> {
        Self::new(date.year(), date.month())
    }

    /// Parse YYYY-MM.
    pub fn parse(s: &str) -> ChapterHubResult<Self> {
        let invalid = || ChapterHubError::InvalidDate(format!("{} (expected YYYY-MM)", s));
        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        Self::new(year, month)
    }

    pub fn year(self) -> i32 {
        self.year
    }

    pub fn month(self) -> u32 {
        self.month
    }

    /// The following month, carrying into the next year after December.
    /// Stays put at December of `MAX_YEAR`.
    pub fn next(self) -> Self {
        if self.month == 12 {
            if self.year == MAX_YEAR {
                return self;
            }
            YearMonth {
                year: self.year + 1,
                month: 1,
            }
        } else {
            YearMonth {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// The preceding month, borrowing from the previous year before January.
    /// Stays put at January of `MIN_YEAR`.
    pub fn prev(self) -> Self {
        if self.month == 1 {
            if self.year == MIN_YEAR {
                return self;
            }
            YearMonth {
                year: self.year - 1,
                month: 12,
            }
        } else {
            YearMonth {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    pub fn step(self, step: MonthStep) -> Self {
        match step {
            MonthStep::Previous => self.prev(),
            MonthStep::Next => self.next(),
        }
    }

    pub fn days_in_month(self) -> u32 {
        match self.month {
            2 if is_leap_year(self.year) => 29,
            2 => 28,
            4 | 6 | 9 | 11 => 30,
            _ => 31,
        }
    }

    /// Weekday of day 1, 0 = Sunday .. 6 = Saturday (Sakamoto's method).
    pub fn first_weekday(self) -> u32 {
        const OFFSETS: [i32; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];
        let m = self.month as usize;
        let y = if m < 3 { self.year - 1 } else { self.year };
        let dow = (y + y / 4 - y / 100 + y / 400 + OFFSETS[m - 1] + 1).rem_euclid(7);
        dow as u32
    }

    /// The date for `day` in this month, if it exists.
    pub fn date(self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, day)
    }

    pub fn contains(self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    pub fn month_name(self) -> &'static str {
        MONTH_NAMES[(self.month - 1) as usize]
    }
}

impl fmt::Display for YearMonth {
    /// Renders as e.g. "June 2023".
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.month_name(), self.year)
    }
}
