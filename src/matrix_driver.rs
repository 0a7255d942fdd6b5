//! The drawing interface an LED matrix exposes to [`TextScroller`](crate::TextScroller).
//!
//! A [`MatrixDriver`] owns the pixel grid. Graphics commands issued between
//! [`begin_draw`](MatrixDriver::begin_draw) and [`end_draw`](MatrixDriver::end_draw)
//! accumulate and are pushed to the hardware when the draw session ends. Text is
//! collected between [`begin_text`](MatrixDriver::begin_text) and
//! [`end_text`](MatrixDriver::end_text); the direction given to `end_text` decides
//! whether it is drawn in place or scrolled.
//!
//! The operations are infallible at this level. A driver that can fail absorbs the
//! failure itself (see [`LedMatrix::take_fault`](crate::LedMatrix::take_fault)).

use embedded_graphics::{
    mono_font::{
        MonoFont,
        ascii::{FONT_4X6, FONT_5X7, FONT_5X8, FONT_6X10},
    },
    pixelcolor::Rgb888,
};
use smart_leds::RGB8;

/// A 24-bit `0xRRGGBB` color, the form matrix graphics APIs take colors in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Color24(u32);

impl Color24 {
    /// All 24 bits on.
    pub const WHITE: Self = Self(0x00FF_FFFF);

    /// Build a color from `0xRRGGBB`. Bits above the low 24 are ignored.
    #[must_use]
    pub const fn new(rgb: u32) -> Self {
        Self(rgb & 0x00FF_FFFF)
    }

    /// The color as `0xRRGGBB`.
    #[must_use]
    pub const fn rgb(self) -> u32 {
        self.0
    }

    /// Convert to RGB8 (smart-leds).
    #[must_use]
    pub const fn to_rgb8(self) -> RGB8 {
        let [_, red, green, blue] = self.0.to_be_bytes();
        RGB8::new(red, green, blue)
    }

    /// Convert to Rgb888 (embedded-graphics).
    #[must_use]
    pub const fn to_rgb888(self) -> Rgb888 {
        let [_, red, green, blue] = self.0.to_be_bytes();
        Rgb888::new(red, green, blue)
    }
}

impl From<u32> for Color24 {
    fn from(rgb: u32) -> Self {
        Self::new(rgb)
    }
}

impl From<RGB8> for Color24 {
    fn from(color: RGB8) -> Self {
        Self(u32::from_be_bytes([0, color.r, color.g, color.b]))
    }
}

/// Monospace bitmap fonts a matrix driver can select.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MatrixFont {
    Font4x6,
    #[default]
    Font5x7,
    Font5x8,
    Font6x10,
}

impl MatrixFont {
    /// Return the `MonoFont` for this variant.
    #[must_use]
    pub const fn to_font(self) -> MonoFont<'static> {
        match self {
            Self::Font4x6 => FONT_4X6,
            Self::Font5x7 => FONT_5X7,
            Self::Font5x8 => FONT_5X8,
            Self::Font6x10 => FONT_6X10,
        }
    }

    /// Horizontal distance in pixels from one glyph to the next.
    #[must_use]
    pub const fn advance(self) -> u32 {
        let font = self.to_font();
        font.character_size.width.saturating_add(font.character_spacing)
    }
}

/// What [`MatrixDriver::end_text`] does with the collected text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScrollDirection {
    /// Draw the text in place at the text origin.
    #[default]
    None,
    /// Move the text one column left per scroll step until it has left the display.
    Left,
}

/// Drawing primitives of an LED matrix.
///
/// Implementations are expected to tolerate [`begin`](Self::begin) being called more
/// than once; each call leaves the driver in the same freshly-initialized state.
pub trait MatrixDriver {
    /// Bring the hardware to a drawable state.
    fn begin(&mut self);

    /// Open a draw session.
    fn begin_draw(&mut self);

    /// Close the draw session and push the accumulated frame to the hardware.
    fn end_draw(&mut self);

    /// Set the stroke (foreground) color for graphics primitives.
    fn stroke(&mut self, color: Color24);

    /// Select the font used by subsequent text.
    fn text_font(&mut self, font: MatrixFont);

    /// Set the scroll pacing in milliseconds per one-column step.
    fn text_scroll_speed(&mut self, speed_ms: u32);

    /// Open a text region with its top-left corner at `(x, y)`.
    fn begin_text(&mut self, x: i32, y: i32, color: Color24);

    /// Append `text` to the open text region.
    fn print(&mut self, text: &str);

    /// Close the text region, drawing or scrolling the collected text.
    fn end_text(&mut self, direction: ScrollDirection);
}

impl<D> MatrixDriver for &mut D
where
    D: MatrixDriver + ?Sized,
{
    fn begin(&mut self) {
        D::begin(self);
    }

    fn begin_draw(&mut self) {
        D::begin_draw(self);
    }

    fn end_draw(&mut self) {
        D::end_draw(self);
    }

    fn stroke(&mut self, color: Color24) {
        D::stroke(self, color);
    }

    fn text_font(&mut self, font: MatrixFont) {
        D::text_font(self, font);
    }

    fn text_scroll_speed(&mut self, speed_ms: u32) {
        D::text_scroll_speed(self, speed_ms);
    }

    fn begin_text(&mut self, x: i32, y: i32, color: Color24) {
        D::begin_text(self, x, y, color);
    }

    fn print(&mut self, text: &str) {
        D::print(self, text);
    }

    fn end_text(&mut self, direction: ScrollDirection) {
        D::end_text(self, direction);
    }
}
