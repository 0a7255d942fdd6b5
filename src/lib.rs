//! Scrolling text for small LED matrix displays.
//!
//! [`TextScroller`] scrolls one line of white 5x7 text leftward across any
//! [`MatrixDriver`], then pauses. [`LedMatrix`] is a ready-made driver that renders with
//! `embedded-graphics` and writes frames to a `smart-leds` LED writer. [`secrets`] holds
//! the WiFi and weather-API credentials injected by `build.rs`.
#![no_std]

#[macro_use]
mod fmt;

mod error;
pub mod frame;
pub mod led_matrix;
pub mod matrix_driver;
pub mod scroll_request;
pub mod secrets;
pub mod session;
pub mod text_scroller;

// Re-export commonly used items
pub use error::{Error, Result};
pub use frame::{Frame, LedLayout};
pub use led_matrix::LedMatrix;
pub use matrix_driver::{Color24, MatrixDriver, MatrixFont, ScrollDirection};
pub use scroll_request::{
    DEFAULT_PAUSE_AFTER_MS, DEFAULT_SCROLL_SPEED_MS, MAX_TEXT_LEN, ScrollRequest,
};
pub use session::{DrawSession, TextRegion};
pub use text_scroller::{TEXT_COLOR, TEXT_FONT, TEXT_ORIGIN, TextScroller};
