//! Fixed print constants shared by every render

use embedded_graphics::pixelcolor::Rgb888;

/// Change this value to change the season year the calendar is printed for
///
/// Weekdays, day counts and schedule date keys are all computed against it.
pub const REFERENCE_YEAR: i32 = 2025;

/// Printed below the legend
pub const DISCLAIMER: &str = "* SUBJECT TO CHANGE";

/// Printed in gray under the disclaimer
pub const BRANDING: &str = "MADE BY MOTET PAPER";

/// Physical page and grid dimensions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageConstants {
    /// Page width in inches (landscape)
    pub width_in: f32,
    /// Page height in inches
    pub height_in: f32,
    /// Raster pixels per inch
    pub dpi: u32,
    /// Width of one day cell in pixels
    pub cell_width: u32,
    /// Height of one day cell in pixels
    pub cell_height: u32,
    /// Line width of grid borders, legend borders and the header rule
    pub stroke_width: u32,
}

impl PageConstants {
    /// US letter, landscape, 300 dpi, 1 inch cells
    pub const PRINT: Self = Self {
        width_in: 11.0,
        height_in: 8.5,
        dpi: 300,
        cell_width: 300,
        cell_height: 300,
        stroke_width: 8,
    };

    pub fn width_px(&self) -> u32 {
        (self.width_in * self.dpi as f32).round() as u32
    }

    pub fn height_px(&self) -> u32 {
        (self.height_in * self.dpi as f32).round() as u32
    }
}

impl Default for PageConstants {
    fn default() -> Self {
        Self::PRINT
    }
}

/// Colors used on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Home game background and HOME legend box
    pub accent: Rgb888,
    pub paper: Rgb888,
    pub ink: Rgb888,
    /// Weekday headers, header rule and branding
    pub muted: Rgb888,
}

impl Palette {
    /// Sedona Red on white
    pub const DIAMONDBACKS: Self = Self {
        accent: Rgb888::new(0xA7, 0x19, 0x30),
        paper: Rgb888::new(0xFF, 0xFF, 0xFF),
        ink: Rgb888::new(0x00, 0x00, 0x00),
        muted: Rgb888::new(0x80, 0x80, 0x80),
    };
}

impl Default for Palette {
    fn default() -> Self {
        Self::DIAMONDBACKS
    }
}
