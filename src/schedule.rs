//! Season schedule data and date lookup

use std::{collections::HashMap, io::Read};

use log::{debug, warn};
use serde::Deserialize;

use crate::error::ScheduleError;

/// One game as it appears in the season schedule JSON
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScheduleEntry {
    /// `YYYY-MM-DD`
    #[serde(rename = "date")]
    pub date_key: String,
    #[serde(rename = "homegame")]
    pub is_home_game: bool,
    /// Opponent code, e.g. `SF`
    #[serde(rename = "teamcode")]
    pub team_code: String,
    /// Raw start time, e.g. `6:40 PM`
    #[serde(rename = "firstpitch")]
    pub first_pitch_time: String,
}

impl ScheduleEntry {
    pub fn first_pitch_label(&self) -> String {
        first_pitch_label(&self.first_pitch_time)
    }
}

/// Strip letters (AM/PM and the like) from a raw start time and trim what is left
pub fn first_pitch_label(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_alphabetic())
        .collect::<String>()
        .trim()
        .to_owned()
}

/// Games of a season keyed by date
///
/// Never mutated after construction, so one index can back any number of renders.
#[derive(Debug, Clone, Default)]
pub struct ScheduleIndex {
    games: HashMap<String, ScheduleEntry>,
}

impl ScheduleIndex {
    /// Index `entries` by date key. When a date shows up more than once the
    /// first entry is kept.
    pub fn from_entries(entries: impl IntoIterator<Item = ScheduleEntry>) -> Self {
        let mut games: HashMap<String, ScheduleEntry> = HashMap::new();
        for entry in entries {
            if let Some(kept) = games.get(&entry.date_key) {
                warn!(
                    "Duplicate schedule entry for {}, keeping {} and dropping {}",
                    entry.date_key, kept.team_code, entry.team_code,
                );
                continue;
            }
            games.insert(entry.date_key.clone(), entry);
        }
        debug!("Indexed {} scheduled games", games.len());
        Self { games }
    }

    pub fn from_json_str(json: &str) -> Result<Self, ScheduleError> {
        let entries: Vec<ScheduleEntry> = serde_json::from_str(json)?;
        Ok(Self::from_entries(entries))
    }

    pub fn from_reader(reader: impl Read) -> Result<Self, ScheduleError> {
        let entries: Vec<ScheduleEntry> = serde_json::from_reader(reader)?;
        Ok(Self::from_entries(entries))
    }

    pub fn lookup(&self, date_key: &str) -> Option<&ScheduleEntry> {
        self.games.get(date_key)
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}
