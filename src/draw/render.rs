//! Turning classified cells into an ordered list of paint operations

use embedded_graphics::{
    pixelcolor::Rgb888,
    prelude::Point,
    primitives::Rectangle,
    text::Alignment,
};
use log::debug;

use super::{DisplayList, FontSpec, PaintOp};
use crate::{
    calendar_utils::{all_weekday_initials, Weeks},
    classify::DayCell,
    config::{Palette, BRANDING, DISCLAIMER},
    layout::PageLayout,
};

/// Builds the display list for one calendar page
///
/// Order matters: the page is primed, then every cell is painted
/// background, border, date, team, first pitch. The title, legend, header
/// rule, weekday initials, disclaimer and branding go on last.
pub struct Renderer<'a> {
    layout: &'a PageLayout,
    palette: Palette,
}

impl<'a> Renderer<'a> {
    pub fn new(layout: &'a PageLayout, palette: Palette) -> Self {
        Self { layout, palette }
    }

    pub fn render(&self, weeks: &Weeks<DayCell<'_>>, title: &str) -> DisplayList {
        let mut list = DisplayList::new();
        list.push(PaintOp::Clear(self.palette.paper));

        for week in weeks {
            for (_, cell) in week.days() {
                self.paint_cell(&mut list, cell);
            }
        }

        self.paint_title(&mut list, title);
        self.paint_legend(&mut list);
        self.paint_weekday_headers(&mut list);
        self.paint_footer(&mut list);

        debug!("Rendered {title} into {} paint operations", list.len());
        list
    }

    fn paint_cell(&self, list: &mut DisplayList, cell: &DayCell<'_>) {
        let area = cell.geometry;
        list.push(PaintOp::FillRect {
            area,
            color: cell.background_color,
        });
        list.push(PaintOp::StrokeRect {
            area,
            color: self.palette.ink,
            width: self.layout.stroke_width,
        });
        list.push(text(
            cell.day_number.to_string(),
            self.layout.date_anchor(&area),
            FontSpec::DATE,
            cell.text_color,
            Alignment::Left,
        ));

        // first pitch only shows up next to a team code
        if let Some(team) = &cell.team_label {
            list.push(text(
                team.clone(),
                self.layout.team_anchor(&area),
                FontSpec::TEAM,
                cell.text_color,
                Alignment::Left,
            ));
            if let Some(first_pitch) = &cell.first_pitch_label {
                list.push(text(
                    first_pitch.clone(),
                    self.layout.first_pitch_anchor(&area),
                    FontSpec::LABEL,
                    cell.text_color,
                    Alignment::Right,
                ));
            }
        }
    }

    fn paint_title(&self, list: &mut DisplayList, title: &str) {
        list.push(text(
            title.to_owned(),
            self.layout.title_anchor,
            FontSpec::TITLE,
            self.palette.ink,
            Alignment::Left,
        ));
    }

    fn paint_legend(&self, list: &mut DisplayList) {
        let home = self.layout.legend;
        let away = self.layout.legend_away();
        self.paint_legend_box(list, home, "HOME", self.palette.accent, self.palette.paper);
        self.paint_legend_box(list, away, "AWAY", self.palette.paper, self.palette.ink);
    }

    fn paint_legend_box(
        &self,
        list: &mut DisplayList,
        area: Rectangle,
        label: &str,
        fill: Rgb888,
        ink: Rgb888,
    ) {
        list.push(PaintOp::FillRect { area, color: fill });
        list.push(PaintOp::StrokeRect {
            area,
            color: self.palette.ink,
            width: self.layout.stroke_width,
        });
        list.push(text(
            label.to_owned(),
            self.layout.legend_text_anchor(&area),
            FontSpec::LABEL,
            ink,
            Alignment::Left,
        ));
    }

    fn paint_weekday_headers(&self, list: &mut DisplayList) {
        let (start, end) = self.layout.header_rule;
        list.push(PaintOp::Line {
            start,
            end,
            color: self.palette.muted,
            width: self.layout.stroke_width,
        });
        for (weekday, initial) in all_weekday_initials().into_iter().enumerate() {
            list.push(text(
                initial.to_string(),
                self.layout.header_anchor(weekday),
                FontSpec::LABEL,
                self.palette.muted,
                Alignment::Left,
            ));
        }
    }

    fn paint_footer(&self, list: &mut DisplayList) {
        list.push(text(
            DISCLAIMER.to_owned(),
            self.layout.disclaimer_anchor,
            FontSpec::LABEL,
            self.palette.ink,
            Alignment::Left,
        ));
        list.push(text(
            BRANDING.to_owned(),
            self.layout.branding_anchor,
            FontSpec::LABEL,
            self.palette.muted,
            Alignment::Left,
        ));
    }
}

fn text(text: String, anchor: Point, font: FontSpec, color: Rgb888, align: Alignment) -> PaintOp {
    PaintOp::Text {
        text,
        anchor,
        font,
        color,
        align,
    }
}
