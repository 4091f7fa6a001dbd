//! A bunch of utils for working with calendar stuff

pub mod season_month;
pub mod week;

use chrono::{NaiveDate, Weekday};
pub use season_month::{DaysIter, SeasonMonth, SEASON_MONTH_INDICES};
pub use week::{fold_month, FoldedDay, WeekRow, Weeks, DAYS_IN_WEEK, MAX_WEEKS};

/// Key used by the schedule data to identify a day, `YYYY-MM-DD`
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn weekday_initial(val: Weekday) -> char {
    all_weekday_initials()[val.num_days_from_sunday() as usize]
}

/// Weekdays in slot order, the week starts on Sunday
pub const fn all_weekdays() -> [Weekday; DAYS_IN_WEEK] {
    [
        Weekday::Sun,
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
    ]
}

/// Header glyphs; Thursday is `R` so it doesn't clash with Tuesday
pub const fn all_weekday_initials() -> [char; DAYS_IN_WEEK] {
    ['S', 'M', 'T', 'W', 'R', 'F', 'S']
}
