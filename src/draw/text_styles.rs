use embedded_graphics::mono_font::MonoFont;
use paste::paste;

macro_rules! profont_sizes {
    ([$($size:literal),+]) => {
        paste! {
            /// Point sizes shipped by the `profont` crate
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
            pub enum FontSize {
                $([<Pt $size>],)+
            }

            impl FontSize {
                pub fn mono_font(self) -> &'static MonoFont<'static> {
                    match self {
                        $(Self::[<Pt $size>] => &profont::[<PROFONT_ $size _POINT>],)+
                    }
                }
            }
        }
    };
}

profont_sizes!([7, 9, 10, 12, 14, 18, 24]);

/// A ProFont size blown up by an integer factor to reach print pixel heights
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FontSpec {
    pub size: FontSize,
    pub scale: u32,
    pub bold: bool,
}

impl FontSpec {
    /// Day of month, ~100px
    pub const DATE: Self = Self::new(FontSize::Pt24, 3, false);
    /// Opponent code, ~150px bold
    pub const TEAM: Self = Self::new(FontSize::Pt24, 5, true);
    /// ~40px bold, used for first pitch, legend, headers and footers
    pub const LABEL: Self = Self::new(FontSize::Pt14, 2, true);
    /// Month title, ~200px bold
    pub const TITLE: Self = Self::new(FontSize::Pt24, 7, true);

    pub const fn new(size: FontSize, scale: u32, bold: bool) -> Self {
        Self { size, scale, bold }
    }

    pub fn mono_font(&self) -> &'static MonoFont<'static> {
        self.size.mono_font()
    }

    /// Extra pixels each glyph dot is widened by
    pub const fn embolden(&self) -> u32 {
        if self.bold {
            if self.scale > 2 {
                self.scale / 2
            } else {
                1
            }
        } else {
            0
        }
    }

    /// Rendered glyph cell height in page pixels
    pub fn line_height(&self) -> u32 {
        self.mono_font().character_size.height * self.scale
    }
}
