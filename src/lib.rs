//! Large-print Arizona Diamondbacks regular season calendar pages
//!
//! Give it a season month name and a schedule and it folds the month into
//! week rows, marks home and away games, and paints a 11x8.5 inch page at
//! 300 dpi. The page comes back as PNG bytes, a data URL or an `<img>` tag.
//!
//! ```no_run
//! use dbacks_calendar::{CalendarImage, ScheduleIndex};
//!
//! let schedule = ScheduleIndex::from_json_str(r#"[
//!     {"date": "2025-04-01", "homegame": true, "teamcode": "NYY", "firstpitch": "6:40 PM"}
//! ]"#)?;
//! let image = CalendarImage::new("April", &schedule)?;
//! println!("{}", image.as_image_element());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod calendar_image;
pub mod calendar_utils;
pub mod classify;
pub mod config;
pub mod draw;
pub mod error;
pub mod layout;
pub mod schedule;

pub use calendar_image::CalendarImage;
pub use calendar_utils::{fold_month, FoldedDay, SeasonMonth, WeekRow, Weeks};
pub use classify::{CellClassifier, DayCell, GameKind};
pub use config::{PageConstants, Palette, REFERENCE_YEAR};
pub use draw::{DisplayList, PageCanvas, PaintOp, Renderer};
pub use error::{CalendarError, ScheduleError};
pub use layout::PageLayout;
pub use schedule::{first_pitch_label, ScheduleEntry, ScheduleIndex};
