use embedded_graphics::{
    prelude::{Dimensions, DrawTarget, Point, Size},
    primitives::Rectangle,
    Pixel,
};

/// Draws every pixel it receives as a `scale` sized block around `origin`
///
/// Lets the small ProFont bitmaps print at page resolution. Coordinates drawn
/// into this target are relative to `origin` and in unscaled units.
pub struct Magnified<'a, D> {
    target: &'a mut D,
    origin: Point,
    scale: u32,
    extra_width: u32,
}

impl<'a, D: DrawTarget> Magnified<'a, D> {
    pub fn new(target: &'a mut D, origin: Point, scale: u32, extra_width: u32) -> Self {
        Self {
            target,
            origin,
            scale: scale.max(1),
            extra_width,
        }
    }
}

impl<D: DrawTarget> Dimensions for Magnified<'_, D> {
    fn bounding_box(&self) -> Rectangle {
        let outer = self.target.bounding_box();
        let scale = self.scale as i32;
        let top_left = outer.top_left - self.origin;
        Rectangle::new(
            Point::new(top_left.x.div_euclid(scale), top_left.y.div_euclid(scale)),
            Size::new(
                outer.size.width / self.scale + 1,
                outer.size.height / self.scale + 1,
            ),
        )
    }
}

impl<D: DrawTarget> DrawTarget for Magnified<'_, D> {
    type Color = D::Color;
    type Error = D::Error;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let block = Size::new(self.scale + self.extra_width, self.scale);
        for Pixel(point, color) in pixels {
            let area = Rectangle::new(self.origin + point * self.scale as i32, block);
            self.target.fill_solid(&area, color)?;
        }
        Ok(())
    }
}
