use core::ops::RangeInclusive;

use chrono::{Datelike, Month, Months, NaiveDate, Weekday};
use num_traits::FromPrimitive;

use crate::{config::REFERENCE_YEAR, error::CalendarError};

/// Zero-based month indices of the regular season, March through September
pub const SEASON_MONTH_INDICES: RangeInclusive<u8> = 2..=8;

/// Walks the days of a [`SeasonMonth`], yielding the 1-based day number and its date
pub struct DaysIter {
    range: RangeInclusive<u8>,
    start: NaiveDate,
}

impl DaysIter {
    fn new(month: &SeasonMonth) -> Self {
        Self {
            range: 1..=month.days_amount(),
            start: month.start,
        }
    }
}

impl Iterator for DaysIter {
    type Item = (u8, NaiveDate);

    fn next(&mut self) -> Option<Self::Item> {
        let day = self.range.next()?;
        let date = self.start.with_day(day as u32)?;
        Some((day, date))
    }
}

/// A regular season month in the reference year
///
/// Can only be constructed through [`SeasonMonth::parse`] or
/// [`SeasonMonth::from_month`], so holding one means the month was validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SeasonMonth {
    month: Month,
    start: NaiveDate,
}

impl SeasonMonth {
    /// Parse an English month name ("April", "apr", " SEPTEMBER ") and check it is in season
    pub fn parse(name: &str) -> Result<Self, CalendarError> {
        let month = name
            .trim()
            .parse::<Month>()
            .map_err(|_| CalendarError::InvalidMonth(name.to_owned()))?;
        Self::from_month(month)
    }

    pub fn from_month(month: Month) -> Result<Self, CalendarError> {
        let index = month.number_from_month() as u8 - 1;
        if !SEASON_MONTH_INDICES.contains(&index) {
            return Err(CalendarError::OffSeasonMonth(month));
        }
        let start = NaiveDate::from_ymd_opt(REFERENCE_YEAR, month.number_from_month(), 1)
            .ok_or_else(|| CalendarError::InvalidMonth(month.name().to_owned()))?;
        Ok(Self { month, start })
    }

    /// Look a month up by its zero-based index in the year
    pub fn from_index(index: u8) -> Result<Self, CalendarError> {
        let month = index
            .checked_add(1)
            .and_then(Month::from_u8)
            .ok_or_else(|| CalendarError::InvalidMonth(index.to_string()))?;
        Self::from_month(month)
    }

    /// All regular season months, in calendar order
    pub fn all() -> impl Iterator<Item = Self> {
        SEASON_MONTH_INDICES.filter_map(|index| Self::from_index(index).ok())
    }

    pub fn month(&self) -> Month {
        self.month
    }

    /// Zero-based position in the year, always within [`SEASON_MONTH_INDICES`]
    pub fn index(&self) -> u8 {
        self.start.month0() as u8
    }

    pub fn name(&self) -> &'static str {
        self.month().name()
    }

    pub fn year(&self) -> i32 {
        self.start.year()
    }

    pub const fn start_date(&self) -> NaiveDate {
        self.start
    }

    /// Get the amount of days in this month
    pub fn days_amount(&self) -> u8 {
        let end = self.start + Months::new(1);
        end.signed_duration_since(self.start).num_days() as u8
    }

    /// Get the day of the week this month starts on
    pub fn start_weekday(&self) -> Weekday {
        self.start.weekday()
    }

    pub fn days_iter(&self) -> DaysIter {
        DaysIter::new(self)
    }

    /// Title printed under the grid, e.g. "April 2025"
    pub fn title(&self) -> String {
        format!("{} {}", self.name(), self.year())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_and_abbreviations() {
        assert_eq!(SeasonMonth::parse("April").unwrap().month(), Month::April);
        assert_eq!(SeasonMonth::parse(" apr ").unwrap().month(), Month::April);
        assert_eq!(SeasonMonth::parse("SEPTEMBER").unwrap().index(), 8);
    }

    #[test]
    fn rejects_unknown_names() {
        for name in ["Fooember", "", "Aprilx", "13"] {
            assert!(matches!(
                SeasonMonth::parse(name),
                Err(CalendarError::InvalidMonth(_))
            ));
        }
    }

    #[test]
    fn rejects_months_outside_the_season() {
        for name in ["January", "February", "October", "November", "December"] {
            assert!(matches!(
                SeasonMonth::parse(name),
                Err(CalendarError::OffSeasonMonth(_))
            ));
        }
    }

    #[test]
    fn days_amount_matches_reference_year() {
        let expected = [31, 30, 31, 30, 31, 31, 30];
        let got: Vec<u8> = SeasonMonth::all().map(|m| m.days_amount()).collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn march_2025_starts_on_saturday() {
        let march = SeasonMonth::from_month(Month::March).unwrap();
        assert_eq!(march.start_weekday(), Weekday::Sat);
    }

    #[test]
    fn days_iter_covers_every_day_once() {
        let april = SeasonMonth::parse("April").unwrap();
        let days: Vec<u8> = april.days_iter().map(|(day, _)| day).collect();
        assert_eq!(days, (1..=30).collect::<Vec<_>>());
    }
}
