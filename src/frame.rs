//! Pixel buffer a [`LedMatrix`](crate::LedMatrix) draws into, and the wiring layouts
//! that map it onto an LED strip.

use embedded_graphics::{pixelcolor::Rgb888, prelude::*};
use smart_leds::RGB8;

/// A 2D array of RGB pixels representing a single display frame.
///
/// Frames are stored in row-major order where `frame[row][col]` is the pixel at display
/// coordinates (col, row). They support the full
/// [`embedded-graphics`](https://docs.rs/embedded-graphics) drawing API; pixels drawn
/// outside the frame are clipped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Frame<const ROWS: usize, const COLS: usize>(pub [[RGB8; COLS]; ROWS]);

impl<const ROWS: usize, const COLS: usize> Frame<ROWS, COLS> {
    /// Create a new blank (all black) frame.
    #[must_use]
    pub const fn new() -> Self {
        Self([[RGB8::new(0, 0, 0); COLS]; ROWS])
    }

    /// Turn every pixel off.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// The pixel at (row, col), or `None` outside the frame.
    #[must_use]
    pub fn pixel(&self, row_index: usize, column_index: usize) -> Option<RGB8> {
        self.0.get(row_index)?.get(column_index).copied()
    }

    /// True when no pixel is lit.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0
            .iter()
            .flatten()
            .all(|pixel| *pixel == RGB8::default())
    }
}

impl<const ROWS: usize, const COLS: usize> core::ops::Deref for Frame<ROWS, COLS> {
    type Target = [[RGB8; COLS]; ROWS];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<const ROWS: usize, const COLS: usize> core::ops::DerefMut for Frame<ROWS, COLS> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<const ROWS: usize, const COLS: usize> Default for Frame<ROWS, COLS> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const ROWS: usize, const COLS: usize> OriginDimensions for Frame<ROWS, COLS> {
    fn size(&self) -> Size {
        Size::new(
            u32::try_from(COLS).unwrap_or(u32::MAX),
            u32::try_from(ROWS).unwrap_or(u32::MAX),
        )
    }
}

impl<const ROWS: usize, const COLS: usize> DrawTarget for Frame<ROWS, COLS> {
    type Color = Rgb888;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> core::result::Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(coord, color) in pixels {
            let (Ok(column_index), Ok(row_index)) =
                (usize::try_from(coord.x), usize::try_from(coord.y))
            else {
                continue;
            };
            if let Some(pixel) = self
                .0
                .get_mut(row_index)
                .and_then(|row| row.get_mut(column_index))
            {
                *pixel = RGB8::new(color.r(), color.g(), color.b());
            }
        }
        Ok(())
    }
}

/// How the LEDs of a matrix are chained on the strip.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedLayout {
    /// LED `i` is at row `i / cols`, column `i % cols`.
    #[default]
    RowMajor,
    /// Even columns go top-to-bottom, odd columns bottom-to-top. This matches typical
    /// WS2812 panel wiring.
    SerpentineColumnMajor,
}

impl LedLayout {
    /// The `(row, col)` position of strip LED `led_index` on a `rows` x `cols` matrix.
    #[must_use]
    pub const fn led_position(self, led_index: usize, rows: usize, cols: usize) -> (usize, usize) {
        match self {
            Self::RowMajor => match cols {
                0 => (0, 0),
                _ => (led_index / cols, led_index % cols),
            },
            Self::SerpentineColumnMajor => match rows {
                0 => (0, 0),
                _ => {
                    let column_index = led_index / rows;
                    let offset = led_index % rows;
                    let row_index = if column_index % 2 == 0 {
                        // Even column: top-to-bottom
                        offset
                    } else {
                        // Odd column: bottom-to-top
                        rows - 1 - offset
                    };
                    (row_index, column_index)
                }
            },
        }
    }
}
