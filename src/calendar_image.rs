//! Validate a month, fold it, classify it, paint it, encode it

use base64::{engine::general_purpose, Engine as _};
use log::info;

use crate::{
    calendar_utils::{fold_month, SeasonMonth, Weeks},
    classify::{CellClassifier, DayCell},
    config::{PageConstants, Palette},
    draw::{DisplayList, PageCanvas, Renderer},
    error::CalendarError,
    layout::PageLayout,
    schedule::ScheduleIndex,
};

/// A finished, encoded calendar page for one season month
///
/// Holding one means the month was valid and the page was fully rendered;
/// failures surface from the constructors before anything is drawn.
#[derive(Debug, Clone)]
pub struct CalendarImage<'s> {
    month: SeasonMonth,
    layout: PageLayout,
    weeks: Weeks<DayCell<'s>>,
    display_list: DisplayList,
    png: Vec<u8>,
}

impl<'s> CalendarImage<'s> {
    /// Render `month` (e.g. "April") with the print page constants and team colors
    pub fn new(month: &str, schedule: &'s ScheduleIndex) -> Result<Self, CalendarError> {
        let month = SeasonMonth::parse(month)?;
        Self::render(month, schedule, &PageConstants::PRINT, Palette::DIAMONDBACKS)
    }

    pub fn render(
        month: SeasonMonth,
        schedule: &'s ScheduleIndex,
        constants: &PageConstants,
        palette: Palette,
    ) -> Result<Self, CalendarError> {
        info!("Rendering calendar for {}", month.title());

        let layout = PageLayout::compute(constants);
        let folded = fold_month(&month);
        let weeks = CellClassifier::new(schedule, &layout, palette).classify_weeks(&folded);
        let display_list = Renderer::new(&layout, palette).render(&weeks, &month.title());

        let mut canvas = PageCanvas::new(layout.page, palette.paper);
        // PageCanvas can't fail to draw
        let _ = display_list.paint(&mut canvas);
        let png = canvas.encode_png()?;

        info!(
            "Rendered {} into {} week rows, {} bytes of png",
            month.title(),
            weeks.len(),
            png.len()
        );

        Ok(Self {
            month,
            layout,
            weeks,
            display_list,
            png,
        })
    }

    pub fn month(&self) -> SeasonMonth {
        self.month
    }

    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    pub fn weeks(&self) -> &Weeks<DayCell<'s>> {
        &self.weeks
    }

    /// Every cell of the month, in day order
    pub fn cells(&self) -> impl Iterator<Item = &DayCell<'s>> {
        self.weeks.iter().flat_map(|week| week.days().map(|(_, cell)| cell))
    }

    pub fn display_list(&self) -> &DisplayList {
        &self.display_list
    }

    pub fn png_bytes(&self) -> &[u8] {
        &self.png
    }

    pub fn as_data_url(&self) -> String {
        format!(
            "data:image/png;base64,{}",
            general_purpose::STANDARD.encode(&self.png)
        )
    }

    pub fn as_image_element(&self) -> String {
        format!("<img src=\"{}\">", self.as_data_url())
    }
}
