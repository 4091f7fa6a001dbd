//! Folding a month's days into weekday-aligned rows

use chrono::{NaiveDate, Weekday};
use log::{debug, error};

use super::{date_key, SeasonMonth};

pub const DAYS_IN_WEEK: usize = 7;

/// A month never spans more than six rows
pub const MAX_WEEKS: usize = 6;

/// Rows of a folded month, top to bottom
pub type Weeks<T> = heapless::Vec<WeekRow<T>, MAX_WEEKS>;

/// Seven weekday slots, Sunday first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekRow<T> {
    slots: [Option<T>; DAYS_IN_WEEK],
}

impl<T> Default for WeekRow<T> {
    fn default() -> Self {
        Self {
            slots: core::array::from_fn(|_| None),
        }
    }
}

impl<T> WeekRow<T> {
    pub fn get(&self, weekday: usize) -> Option<&T> {
        self.slots.get(weekday)?.as_ref()
    }

    pub fn slots(&self) -> &[Option<T>; DAYS_IN_WEEK] {
        &self.slots
    }

    /// Filled slots with their weekday index
    pub fn days(&self) -> impl Iterator<Item = (usize, &T)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(weekday, slot)| slot.as_ref().map(|day| (weekday, day)))
    }

    pub fn filled(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    pub fn map<U>(&self, mut f: impl FnMut(usize, &T) -> U) -> WeekRow<U> {
        WeekRow {
            slots: core::array::from_fn(|weekday| {
                self.slots[weekday].as_ref().map(|day| f(weekday, day))
            }),
        }
    }

    fn place(&mut self, weekday: usize, item: T) {
        self.slots[weekday] = Some(item);
    }
}

/// One day of a month before it is matched against the schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FoldedDay {
    /// 1-based day of the month
    pub day: u8,
    pub date: NaiveDate,
    pub weekday: Weekday,
}

impl FoldedDay {
    /// Weekday slot, 0 for Sunday through 6 for Saturday
    pub fn slot(&self) -> usize {
        self.weekday.num_days_from_sunday() as usize
    }

    pub fn date_key(&self) -> String {
        date_key(self.date)
    }
}

/// Fold the days of `month` into week rows.
///
/// A row is closed after its Saturday slot is filled or after the last day
/// of the month, whichever comes first, so the final row may be partial.
pub fn fold_month(month: &SeasonMonth) -> Weeks<FoldedDay> {
    let last_day = month.days_amount();
    let mut weeks = Weeks::new();
    let mut week = WeekRow::default();

    for (day, date) in month.days_iter() {
        let folded = FoldedDay {
            day,
            date,
            weekday: chrono::Datelike::weekday(&date),
        };
        let slot = folded.slot();
        week.place(slot, folded);

        if slot == DAYS_IN_WEEK - 1 || day == last_day {
            let _ = weeks.push(core::mem::take(&mut week)).inspect_err(|_e| {
                error!(
                    "Failed to fold {} day {day}, more than {MAX_WEEKS} week rows",
                    month.name()
                )
            });
        }
    }

    debug!(
        "Folded {} {} into {} week rows",
        month.name(),
        month.year(),
        weeks.len()
    );
    weeks
}
