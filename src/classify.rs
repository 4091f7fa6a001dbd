//! Turning folded days into fully resolved cells

use embedded_graphics::{pixelcolor::Rgb888, primitives::Rectangle};
use log::debug;

use crate::{
    calendar_utils::{FoldedDay, WeekRow, Weeks},
    config::Palette,
    layout::PageLayout,
    schedule::{ScheduleEntry, ScheduleIndex},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameKind {
    NoGame,
    Home,
    Away,
}

/// Everything needed to paint one day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell<'s> {
    pub day_number: u8,
    pub date_key: String,
    pub game: Option<&'s ScheduleEntry>,
    pub geometry: Rectangle,
    pub background_color: Rgb888,
    pub text_color: Rgb888,
    pub team_label: Option<String>,
    pub first_pitch_label: Option<String>,
}

impl DayCell<'_> {
    pub fn kind(&self) -> GameKind {
        match self.game {
            None => GameKind::NoGame,
            Some(game) if game.is_home_game => GameKind::Home,
            Some(_) => GameKind::Away,
        }
    }
}

/// Matches days against the schedule and resolves their colors, labels and position
pub struct CellClassifier<'a, 's> {
    schedule: &'s ScheduleIndex,
    layout: &'a PageLayout,
    palette: Palette,
}

impl<'a, 's> CellClassifier<'a, 's> {
    pub fn new(schedule: &'s ScheduleIndex, layout: &'a PageLayout, palette: Palette) -> Self {
        Self {
            schedule,
            layout,
            palette,
        }
    }

    /// Resolve `day`, which sits in row `week` of its month
    pub fn classify(&self, day: &FoldedDay, week: usize) -> DayCell<'s> {
        let date_key = day.date_key();
        let game = self.schedule.lookup(&date_key);

        let (background_color, text_color) = match game {
            Some(game) if game.is_home_game => (self.palette.accent, self.palette.paper),
            _ => (self.palette.paper, self.palette.ink),
        };

        DayCell {
            day_number: day.day,
            geometry: self.layout.cell_geometry(week, day.slot()),
            background_color,
            text_color,
            team_label: game.map(|g| g.team_code.clone()),
            first_pitch_label: game.map(ScheduleEntry::first_pitch_label),
            game,
            date_key,
        }
    }

    pub fn classify_weeks(&self, weeks: &Weeks<FoldedDay>) -> Weeks<DayCell<'s>> {
        let mut cells = Weeks::new();
        for (week_idx, week) in weeks.iter().enumerate() {
            let row: WeekRow<DayCell<'s>> = week.map(|_, day| self.classify(day, week_idx));
            // Same capacity as the input, can't overflow
            let _ = cells.push(row);
        }
        debug!(
            "Classified {} days against {} scheduled games",
            cells.iter().map(WeekRow::filled).sum::<usize>(),
            self.schedule.len()
        );
        cells
    }
}

#[cfg(test)]
mod tests {
    use chrono::Month;

    use super::*;
    use crate::calendar_utils::{fold_month, SeasonMonth};

    fn index() -> ScheduleIndex {
        ScheduleIndex::from_entries([
            ScheduleEntry {
                date_key: "2025-04-01".into(),
                is_home_game: true,
                team_code: "NYY".into(),
                first_pitch_time: "6:40 PM".into(),
            },
            ScheduleEntry {
                date_key: "2025-04-04".into(),
                is_home_game: false,
                team_code: "WSH".into(),
                first_pitch_time: "4:05 PM".into(),
            },
        ])
    }

    fn cells_for(index: &ScheduleIndex) -> Vec<DayCell<'_>> {
        let layout = PageLayout::default();
        let classifier = CellClassifier::new(index, &layout, Palette::DIAMONDBACKS);
        let april = SeasonMonth::from_month(Month::April).unwrap();
        classifier
            .classify_weeks(&fold_month(&april))
            .iter()
            .flat_map(|w| w.days().map(|(_, c)| c.clone()).collect::<Vec<_>>())
            .collect()
    }

    #[test]
    fn home_game_is_accented() {
        let index = index();
        let cells = cells_for(&index);
        let first = &cells[0];
        assert_eq!(first.kind(), GameKind::Home);
        assert_eq!(first.background_color, Palette::DIAMONDBACKS.accent);
        assert_eq!(first.text_color, Palette::DIAMONDBACKS.paper);
        assert_eq!(first.team_label.as_deref(), Some("NYY"));
        assert_eq!(first.first_pitch_label.as_deref(), Some("6:40"));
    }

    #[test]
    fn away_game_keeps_labels_on_white() {
        let index = index();
        let cells = cells_for(&index);
        let away = &cells[3];
        assert_eq!(away.day_number, 4);
        assert_eq!(away.kind(), GameKind::Away);
        assert_eq!(away.background_color, Palette::DIAMONDBACKS.paper);
        assert_eq!(away.text_color, Palette::DIAMONDBACKS.ink);
        assert_eq!(away.team_label.as_deref(), Some("WSH"));
        assert_eq!(away.first_pitch_label.as_deref(), Some("4:05"));
    }

    #[test]
    fn off_day_has_no_labels() {
        let index = index();
        let cells = cells_for(&index);
        let off = &cells[1];
        assert_eq!(off.kind(), GameKind::NoGame);
        assert!(off.team_label.is_none());
        assert!(off.first_pitch_label.is_none());
        assert_eq!(off.background_color, Palette::DIAMONDBACKS.paper);
    }

    #[test]
    fn geometry_follows_week_and_weekday() {
        let index = ScheduleIndex::default();
        let cells = cells_for(&index);
        let layout = PageLayout::default();
        // April 1 2025 is a Tuesday in the first row, April 6 opens the second row
        assert_eq!(cells[0].geometry, layout.cell_geometry(0, 2));
        assert_eq!(cells[5].geometry, layout.cell_geometry(1, 0));
    }
}
