//! A fixed-style, left-scrolling text line on an LED matrix.
//!
//! [`TextScroller`] binds one visual style (white 5x7 font, text origin at column 0,
//! row 1) to one operation: scroll a string leftward, then pause. Each call is a
//! self-contained draw session; the scroller holds no state between calls other than
//! whether [`init`](TextScroller::init) has run.
//!
//! ```
//! use embedded_hal::delay::DelayNs;
//! use wifi_news::{Color24, MatrixDriver, MatrixFont, ScrollDirection, TextScroller};
//!
//! struct NoDelay;
//!
//! impl DelayNs for NoDelay {
//!     fn delay_ns(&mut self, _ns: u32) {}
//! }
//!
//! #[derive(Default)]
//! struct Printed(String);
//!
//! impl MatrixDriver for Printed {
//!     fn begin(&mut self) {}
//!     fn begin_draw(&mut self) {}
//!     fn end_draw(&mut self) {}
//!     fn stroke(&mut self, _color: Color24) {}
//!     fn text_font(&mut self, _font: MatrixFont) {}
//!     fn text_scroll_speed(&mut self, _speed_ms: u32) {}
//!     fn begin_text(&mut self, _x: i32, _y: i32, _color: Color24) {}
//!     fn print(&mut self, text: &str) {
//!         self.0.push_str(text);
//!     }
//!     fn end_text(&mut self, _direction: ScrollDirection) {}
//! }
//!
//! let mut scroller = TextScroller::new(Printed::default(), NoDelay);
//! scroller.init();
//! scroller.scroll(" HELLO ", 500, 50);
//! assert_eq!(scroller.driver().0, " HELLO ");
//! ```

use embedded_hal::delay::DelayNs;

use crate::{
    matrix_driver::{Color24, MatrixDriver, MatrixFont, ScrollDirection},
    scroll_request::{DEFAULT_PAUSE_AFTER_MS, DEFAULT_SCROLL_SPEED_MS, ScrollRequest},
    session::{DrawSession, TextRegion},
};

/// Top-left corner (x, y) of the scrolled text.
pub const TEXT_ORIGIN: (i32, i32) = (0, 1);

/// Stroke and text color of the scrolled text.
pub const TEXT_COLOR: Color24 = Color24::WHITE;

/// Font of the scrolled text.
pub const TEXT_FONT: MatrixFont = MatrixFont::Font5x7;

/// Scrolls text across a [`MatrixDriver`] it exclusively owns.
///
/// `delay` supplies the blocking pause after each scroll.
pub struct TextScroller<D, T> {
    driver: D,
    delay: T,
    initialized: bool,
}

impl<D, T> TextScroller<D, T>
where
    D: MatrixDriver,
    T: DelayNs,
{
    /// Take ownership of `driver`. The hardware is not touched until [`Self::init`].
    #[must_use]
    pub const fn new(driver: D, delay: T) -> Self {
        Self {
            driver,
            delay,
            initialized: false,
        }
    }

    /// Bring the matrix to a drawable state. Calling this again re-initializes the
    /// driver, which is harmless.
    pub fn init(&mut self) {
        self.driver.begin();
        if self.initialized {
            debug!("TextScroller::init: re-initialized matrix");
        } else {
            info!("TextScroller::init: matrix ready");
        }
        self.initialized = true;
    }

    /// Scroll `text` leftward across the matrix, then block for `pause_after_ms`.
    ///
    /// `scroll_speed_ms` is handed to the driver unchanged; zero asks it to scroll as
    /// fast as it can. A `pause_after_ms` of zero returns as soon as the draw session
    /// closes.
    pub fn scroll(&mut self, text: &str, scroll_speed_ms: u32, pause_after_ms: u32) {
        if !self.initialized {
            warn!("TextScroller::scroll: called before init");
        }
        debug!(
            "TextScroller::scroll: {} bytes at {} ms/step, pause {} ms",
            text.len(),
            scroll_speed_ms,
            pause_after_ms
        );

        {
            let mut draw = DrawSession::begin(&mut self.driver);
            draw.stroke(TEXT_COLOR);
            draw.text_font(TEXT_FONT);
            draw.text_scroll_speed(scroll_speed_ms);

            let mut region =
                TextRegion::begin(&mut *draw, TEXT_ORIGIN, TEXT_COLOR, ScrollDirection::Left);
            region.print(text);
        }

        if pause_after_ms > 0 {
            self.delay.delay_ms(pause_after_ms);
        }
    }

    /// [`Self::scroll`] with 500 ms per step and a 50 ms pause.
    pub fn scroll_with_defaults(&mut self, text: &str) {
        self.scroll(text, DEFAULT_SCROLL_SPEED_MS, DEFAULT_PAUSE_AFTER_MS);
    }

    /// [`Self::scroll`] the text of `request` with its speed and pause.
    pub fn show(&mut self, request: &ScrollRequest) {
        self.scroll(
            request.text(),
            request.scroll_speed_ms(),
            request.pause_after_ms(),
        );
    }

    /// True once [`Self::init`] has run.
    #[must_use]
    pub const fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// The owned driver.
    #[must_use]
    pub const fn driver(&self) -> &D {
        &self.driver
    }

    /// Give back the driver and the delay.
    #[must_use]
    pub fn into_parts(self) -> (D, T) {
        (self.driver, self.delay)
    }
}
