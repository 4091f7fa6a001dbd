//! Paint operations and the surfaces they are replayed on

pub mod canvas;
pub mod magnify;
pub mod render;
pub mod text_styles;

use embedded_graphics::{
    mono_font::MonoTextStyle,
    pixelcolor::Rgb888,
    prelude::*,
    primitives::{Line, PrimitiveStyle, PrimitiveStyleBuilder, Rectangle, StrokeAlignment},
    text::{Alignment, Baseline, Text, TextStyleBuilder},
};

pub use canvas::PageCanvas;
pub use magnify::Magnified;
pub use render::Renderer;
pub use text_styles::{FontSize, FontSpec};

/// One drawing call against a 2-D surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaintOp {
    /// Fill the whole surface
    Clear(Rgb888),
    FillRect {
        area: Rectangle,
        color: Rgb888,
    },
    /// Outline centered on the rectangle edge
    StrokeRect {
        area: Rectangle,
        color: Rgb888,
        width: u32,
    },
    /// `anchor` is on the alphabetic baseline, at the left or right end of the text
    Text {
        text: String,
        anchor: Point,
        font: FontSpec,
        color: Rgb888,
        align: Alignment,
    },
    Line {
        start: Point,
        end: Point,
        color: Rgb888,
        width: u32,
    },
}

impl PaintOp {
    pub fn paint<D>(&self, display: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        match self {
            Self::Clear(color) => display.clear(*color),
            Self::FillRect { area, color } => display.fill_solid(area, *color),
            Self::StrokeRect { area, color, width } => {
                let style = PrimitiveStyleBuilder::new()
                    .stroke_color(*color)
                    .stroke_width(*width)
                    .stroke_alignment(StrokeAlignment::Center)
                    .build();
                area.into_styled(style).draw(display)
            }
            Self::Text {
                text,
                anchor,
                font,
                color,
                align,
            } => draw_text(display, text, *anchor, font, *color, *align),
            Self::Line {
                start,
                end,
                color,
                width,
            } => Line::new(*start, *end)
                .into_styled(PrimitiveStyle::with_stroke(*color, *width))
                .draw(display),
        }
    }
}

fn draw_text<D>(
    display: &mut D,
    text: &str,
    anchor: Point,
    font: &FontSpec,
    color: Rgb888,
    align: Alignment,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    let character_style = MonoTextStyle::new(font.mono_font(), color);
    let text_style = TextStyleBuilder::new()
        .alignment(align)
        .baseline(Baseline::Alphabetic)
        .build();
    let mut magnified = Magnified::new(display, anchor, font.scale, font.embolden());
    Text::with_text_style(text, Point::zero(), character_style, text_style)
        .draw(&mut magnified)?;
    Ok(())
}

/// Ordered paint operations for one page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayList {
    ops: Vec<PaintOp>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, op: PaintOp) {
        self.ops.push(op);
    }

    pub fn ops(&self) -> &[PaintOp] {
        &self.ops
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Replay every operation, in order, onto `display`
    pub fn paint<D>(&self, display: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        self.ops.iter().try_for_each(|op| op.paint(display))
    }
}

impl IntoIterator for DisplayList {
    type Item = PaintOp;
    type IntoIter = std::vec::IntoIter<PaintOp>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.into_iter()
    }
}
