use core::convert::Infallible;

use embedded_graphics::{
    pixelcolor::Rgb888,
    prelude::{Dimensions, DrawTarget, OriginDimensions, Point, RgbColor, Size},
    primitives::{PointsIter, Rectangle},
    Pixel,
};
use png::{BitDepth, ColorType, Compression, Encoder};

const BYTES_PER_PIXEL: usize = 3;

/// In-memory RGB page the calendar is painted on
///
/// Pixels outside the page are silently dropped.
#[derive(Clone, PartialEq, Eq)]
pub struct PageCanvas {
    size: Size,
    pixels: Vec<u8>,
}

impl core::fmt::Debug for PageCanvas {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PageCanvas")
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}

impl PageCanvas {
    pub fn new(size: Size, background: Rgb888) -> Self {
        let mut canvas = Self {
            size,
            pixels: vec![0; size.width as usize * size.height as usize * BYTES_PER_PIXEL],
        };
        let _ = canvas.clear(background);
        canvas
    }

    fn offset(&self, point: Point) -> Option<usize> {
        let (x, y) = (u32::try_from(point.x).ok()?, u32::try_from(point.y).ok()?);
        if x >= self.size.width || y >= self.size.height {
            return None;
        }
        Some((y as usize * self.size.width as usize + x as usize) * BYTES_PER_PIXEL)
    }

    pub fn pixel(&self, point: Point) -> Option<Rgb888> {
        let at = self.offset(point)?;
        let rgb = &self.pixels[at..at + BYTES_PER_PIXEL];
        Some(Rgb888::new(rgb[0], rgb[1], rgb[2]))
    }

    /// Every point currently painted `color`, row by row
    pub fn points_with(&self, color: Rgb888) -> impl Iterator<Item = Point> + '_ {
        self.bounding_box()
            .points()
            .filter(move |&point| self.pixel(point) == Some(color))
    }

    /// Raw 8-bit RGB rows, top to bottom
    pub fn as_rgb_bytes(&self) -> &[u8] {
        &self.pixels
    }

    pub fn encode_png(&self) -> Result<Vec<u8>, png::EncodingError> {
        let mut buf = Vec::new();
        {
            let mut enc = Encoder::new(&mut buf, self.size.width, self.size.height);
            enc.set_color(ColorType::Rgb);
            enc.set_depth(BitDepth::Eight);
            enc.set_compression(Compression::Fast);
            let mut writer = enc.write_header()?;
            writer.write_image_data(&self.pixels)?;
            writer.finish()?;
        }
        Ok(buf)
    }

    fn set(&mut self, at: usize, color: Rgb888) {
        self.pixels[at..at + BYTES_PER_PIXEL].copy_from_slice(&[color.r(), color.g(), color.b()]);
    }
}

impl OriginDimensions for PageCanvas {
    fn size(&self) -> Size {
        self.size
    }
}

impl DrawTarget for PageCanvas {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if let Some(at) = self.offset(point) {
                self.set(at, color);
            }
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let area = area.intersection(&self.bounding_box());
        let Some(bottom_right) = area.bottom_right() else {
            return Ok(());
        };
        for y in area.top_left.y..=bottom_right.y {
            for x in area.top_left.x..=bottom_right.x {
                if let Some(at) = self.offset(Point::new(x, y)) {
                    self.set(at, color);
                }
            }
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        let rgb = [color.r(), color.g(), color.b()];
        for chunk in self.pixels.chunks_exact_mut(BYTES_PER_PIXEL) {
            chunk.copy_from_slice(&rgb);
        }
        Ok(())
    }
}
