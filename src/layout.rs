//! Pixel geometry of the printed page
//!
//! Everything here is derived from [`PageConstants`] alone, so two renders
//! with the same constants always produce the same geometry.

use embedded_graphics::{
    prelude::{Point, Size},
    primitives::Rectangle,
};

use crate::config::PageConstants;

/// Horizontal padding between a cell edge and its text
const CELL_INSET: i32 = 20;
/// Date number baseline below the cell top
const DATE_BASELINE: i32 = 100;
/// First pitch baseline below the cell top
const FIRST_PITCH_BASELINE: i32 = 60;
/// Legend label baseline below the legend box top
const LEGEND_TEXT_BASELINE: i32 = 60;
/// Header rule height above the grid
const HEADER_RULE_RISE: i32 = 50;
/// Weekday initial baseline height above the grid
const HEADER_TEXT_RISE: i32 = 100;

const LEGEND_SIZE: Size = Size::new(200, 80);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLayout {
    pub page: Size,
    pub cell: Size,
    /// Top left corner of the first week's Sunday cell
    pub grid_origin: Point,
    pub stroke_width: u32,
    /// HOME legend box, the AWAY box sits right below it
    pub legend: Rectangle,
    pub title_anchor: Point,
    pub header_rule: (Point, Point),
    pub header_baseline: i32,
    pub disclaimer_anchor: Point,
    pub branding_anchor: Point,
}

impl PageLayout {
    pub fn compute(constants: &PageConstants) -> Self {
        let page = Size::new(constants.width_px(), constants.height_px());
        let cell = Size::new(constants.cell_width, constants.cell_height);
        let (w, h) = (page.width as i32, page.height as i32);
        let (cell_w, cell_h) = (cell.width as i32, cell.height as i32);

        // grid starts two cells in from the left and one cell down from the top
        let grid_origin = Point::new(cell_w * 2, cell_h);

        let legend = Rectangle::new(
            Point::new(w - grid_origin.x - cell_w, h - grid_origin.y - cell_h),
            LEGEND_SIZE,
        );

        let rule_y = grid_origin.y - HEADER_RULE_RISE;
        let header_rule = (
            Point::new(grid_origin.x, rule_y),
            Point::new(grid_origin.x + cell_w * 7, rule_y),
        );

        Self {
            page,
            cell,
            grid_origin,
            stroke_width: constants.stroke_width,
            legend,
            title_anchor: Point::new(grid_origin.x, h - grid_origin.y / 2),
            header_rule,
            header_baseline: grid_origin.y - HEADER_TEXT_RISE,
            disclaimer_anchor: Point::new(w - cell_w * 3, h - grid_origin.y),
            branding_anchor: Point::new(w - cell_w * 3, h - grid_origin.y / 2),
        }
    }

    /// Bounds of the cell in row `week`, column `weekday`
    pub fn cell_geometry(&self, week: usize, weekday: usize) -> Rectangle {
        let offset = Point::new(
            weekday as i32 * self.cell.width as i32,
            week as i32 * self.cell.height as i32,
        );
        Rectangle::new(self.grid_origin + offset, self.cell)
    }

    pub fn page_bounds(&self) -> Rectangle {
        Rectangle::new(Point::zero(), self.page)
    }

    /// The AWAY legend box
    pub fn legend_away(&self) -> Rectangle {
        Rectangle::new(
            self.legend.top_left + Point::new(0, self.legend.size.height as i32),
            self.legend.size,
        )
    }

    pub fn legend_text_anchor(&self, legend_box: &Rectangle) -> Point {
        legend_box.top_left + Point::new(CELL_INSET, LEGEND_TEXT_BASELINE)
    }

    /// Baseline start of the weekday initial above column `weekday`
    pub fn header_anchor(&self, weekday: usize) -> Point {
        Point::new(
            self.grid_origin.x + weekday as i32 * self.cell.width as i32,
            self.header_baseline,
        )
    }

    /// Upper left, left aligned
    pub fn date_anchor(&self, cell: &Rectangle) -> Point {
        cell.top_left + Point::new(CELL_INSET, DATE_BASELINE)
    }

    /// Bottom left, left aligned
    pub fn team_anchor(&self, cell: &Rectangle) -> Point {
        cell.top_left + Point::new(CELL_INSET, cell.size.height as i32 - CELL_INSET)
    }

    /// Upper right, right aligned
    pub fn first_pitch_anchor(&self, cell: &Rectangle) -> Point {
        cell.top_left + Point::new(cell.size.width as i32 - CELL_INSET, FIRST_PITCH_BASELINE)
    }
}

impl Default for PageLayout {
    fn default() -> Self {
        Self::compute(&PageConstants::PRINT)
    }
}
