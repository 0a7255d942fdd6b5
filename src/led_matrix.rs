//! A software [`MatrixDriver`] for LED matrices fed through a `smart-leds` writer.
//!
//! [`LedMatrix`] renders text with [`embedded-graphics`](https://docs.rs/embedded-graphics)
//! into a [`Frame`] and pushes each finished frame to a [`SmartLedsWrite`] implementation
//! (for example a WS2812 driver), reordering pixels with a [`LedLayout`].
//!
//! Scrolling blocks: [`end_text`](MatrixDriver::end_text) with [`ScrollDirection::Left`]
//! runs the whole animation before it returns, pacing each one-column step with the
//! scroll speed. For a text `w` pixels wide starting at column `x`, the animation takes
//! `w + x` steps and leaves the display blank. This differs from ArduinoGraphics, whose
//! `endText(SCROLL_LEFT)` leaves the last step on the display; here the final frame
//! pushed by [`end_draw`](MatrixDriver::end_draw) is always dark.
//!
//! The stroke color is stored and reported by [`LedMatrix::stroke_color`]. Text is drawn
//! in the color given to [`begin_text`](MatrixDriver::begin_text).

use embedded_graphics::{
    Drawable,
    mono_font::MonoTextStyle,
    prelude::Point,
    text::{Baseline, Text},
};
use embedded_hal::delay::DelayNs;
use heapless::String;
use smart_leds::{RGB8, SmartLedsWrite};

use crate::{
    Error,
    frame::{Frame, LedLayout},
    matrix_driver::{Color24, MatrixDriver, MatrixFont, ScrollDirection},
    scroll_request::{DEFAULT_SCROLL_SPEED_MS, MAX_TEXT_LEN},
};

/// A `ROWS` x `COLS` LED matrix behind a pixel writer `W`, with `T` pacing the scroll.
pub struct LedMatrix<W, T, const ROWS: usize, const COLS: usize> {
    writer: W,
    delay: T,
    layout: LedLayout,
    frame: Frame<ROWS, COLS>,
    stroke: Color24,
    font: MatrixFont,
    scroll_speed_ms: u32,
    text: String<MAX_TEXT_LEN>,
    text_origin: Point,
    text_color: Color24,
    fault: Option<Error>,
}

impl<W, T, const ROWS: usize, const COLS: usize> LedMatrix<W, T, ROWS, COLS>
where
    W: SmartLedsWrite<Color = RGB8>,
    T: DelayNs,
{
    /// Wrap `writer`. Nothing is written until [`MatrixDriver::begin`].
    #[must_use]
    pub const fn new(writer: W, delay: T, layout: LedLayout) -> Self {
        Self {
            writer,
            delay,
            layout,
            frame: Frame::new(),
            stroke: Color24::WHITE,
            font: MatrixFont::Font5x7,
            scroll_speed_ms: DEFAULT_SCROLL_SPEED_MS,
            text: String::new(),
            text_origin: Point::zero(),
            text_color: Color24::WHITE,
            fault: None,
        }
    }

    /// The frame as last drawn.
    #[must_use]
    pub const fn frame(&self) -> &Frame<ROWS, COLS> {
        &self.frame
    }

    /// The stroke color last set with [`MatrixDriver::stroke`].
    #[must_use]
    pub const fn stroke_color(&self) -> Color24 {
        self.stroke
    }

    #[must_use]
    pub const fn font(&self) -> MatrixFont {
        self.font
    }

    #[must_use]
    pub const fn scroll_speed_ms(&self) -> u32 {
        self.scroll_speed_ms
    }

    /// The writer, e.g. to inspect a test double.
    #[must_use]
    pub const fn writer(&self) -> &W {
        &self.writer
    }

    /// Take the first writer failure recorded since the last call.
    ///
    /// Write failures never interrupt drawing; only the first one is kept and logged.
    pub const fn take_fault(&mut self) -> Option<Error> {
        self.fault.take()
    }

    /// Give back the writer and the delay.
    #[must_use]
    pub fn into_parts(self) -> (W, T) {
        (self.writer, self.delay)
    }

    /// Width in pixels of the buffered text in the current font.
    fn text_width(&self) -> i32 {
        let glyphs = u32::try_from(self.text.chars().count()).unwrap_or(u32::MAX);
        i32::try_from(glyphs.saturating_mul(self.font.advance())).unwrap_or(i32::MAX)
    }

    fn draw_text(&mut self, origin: Point) {
        let font = self.font.to_font();
        let style = MonoTextStyle::new(&font, self.text_color.to_rgb888());
        let Ok(_) =
            Text::with_baseline(&self.text, origin, style, Baseline::Top).draw(&mut self.frame);
    }

    fn push_frame(&mut self) {
        let frame = &self.frame;
        let layout = self.layout;
        let pixels = (0..ROWS.saturating_mul(COLS)).map(|led_index| {
            let (row_index, column_index) = layout.led_position(led_index, ROWS, COLS);
            frame.pixel(row_index, column_index).unwrap_or_default()
        });
        if self.writer.write(pixels).is_err() && self.fault.is_none() {
            warn!("LedMatrix: LED writer rejected a frame");
            self.fault = Some(Error::PixelWrite);
        }
    }

    fn scroll_left(&mut self) {
        let steps = self.text_width().saturating_add(self.text_origin.x);
        debug!(
            "LedMatrix: scrolling {} steps at {} ms/step",
            steps,
            self.scroll_speed_ms
        );
        for step in 0..steps.max(0) {
            self.frame.clear();
            let origin = Point::new(self.text_origin.x.saturating_sub(step), self.text_origin.y);
            self.draw_text(origin);
            self.push_frame();
            if self.scroll_speed_ms > 0 {
                self.delay.delay_ms(self.scroll_speed_ms);
            }
        }
        self.frame.clear();
    }
}

impl<W, T, const ROWS: usize, const COLS: usize> MatrixDriver for LedMatrix<W, T, ROWS, COLS>
where
    W: SmartLedsWrite<Color = RGB8>,
    T: DelayNs,
{
    fn begin(&mut self) {
        self.frame.clear();
        self.stroke = Color24::WHITE;
        self.font = MatrixFont::Font5x7;
        self.scroll_speed_ms = DEFAULT_SCROLL_SPEED_MS;
        self.text.clear();
        self.text_origin = Point::zero();
        self.text_color = Color24::WHITE;
        self.push_frame();
        info!("LedMatrix: initialized {}x{} matrix", COLS, ROWS);
    }

    fn begin_draw(&mut self) {
        trace!("LedMatrix: begin_draw");
    }

    fn end_draw(&mut self) {
        self.push_frame();
        trace!("LedMatrix: end_draw");
    }

    fn stroke(&mut self, color: Color24) {
        self.stroke = color;
    }

    fn text_font(&mut self, font: MatrixFont) {
        self.font = font;
    }

    fn text_scroll_speed(&mut self, speed_ms: u32) {
        self.scroll_speed_ms = speed_ms;
    }

    fn begin_text(&mut self, x: i32, y: i32, color: Color24) {
        self.text.clear();
        self.text_origin = Point::new(x, y);
        self.text_color = color;
    }

    fn print(&mut self, text: &str) {
        for ch in text.chars() {
            if self.text.push(ch).is_err() {
                warn!("LedMatrix: text truncated at {} bytes", MAX_TEXT_LEN);
                break;
            }
        }
    }

    fn end_text(&mut self, direction: ScrollDirection) {
        match direction {
            ScrollDirection::None => self.draw_text(self.text_origin),
            ScrollDirection::Left => self.scroll_left(),
        }
        self.text.clear();
    }
}
