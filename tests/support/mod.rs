//! Test doubles shared by the host integration tests.
#![allow(dead_code, reason = "each test binary uses a different subset")]

use std::convert::Infallible;
use std::time::{Duration, Instant};

use embedded_hal::delay::DelayNs;
use smart_leds::{RGB8, SmartLedsWrite};
use wifi_news::{Color24, MatrixDriver, MatrixFont, ScrollDirection};

/// One recorded `MatrixDriver` call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Op {
    Begin,
    BeginDraw,
    Stroke(Color24),
    TextFont(MatrixFont),
    TextScrollSpeed(u32),
    BeginText(i32, i32, Color24),
    Print(String),
    EndText(ScrollDirection),
    EndDraw,
}

/// Records every call it receives, plus when the last draw session ended.
#[derive(Debug, Default)]
pub struct RecordingDriver {
    pub ops: Vec<Op>,
    pub end_draw_at: Option<Instant>,
    pub panic_on_print: bool,
}

impl RecordingDriver {
    pub fn count(&self, op: &Op) -> usize {
        self.ops.iter().filter(|recorded| *recorded == op).count()
    }
}

impl MatrixDriver for RecordingDriver {
    fn begin(&mut self) {
        self.ops.push(Op::Begin);
    }

    fn begin_draw(&mut self) {
        self.ops.push(Op::BeginDraw);
    }

    fn end_draw(&mut self) {
        self.ops.push(Op::EndDraw);
        self.end_draw_at = Some(Instant::now());
    }

    fn stroke(&mut self, color: Color24) {
        self.ops.push(Op::Stroke(color));
    }

    fn text_font(&mut self, font: MatrixFont) {
        self.ops.push(Op::TextFont(font));
    }

    fn text_scroll_speed(&mut self, speed_ms: u32) {
        self.ops.push(Op::TextScrollSpeed(speed_ms));
    }

    fn begin_text(&mut self, x: i32, y: i32, color: Color24) {
        self.ops.push(Op::BeginText(x, y, color));
    }

    fn print(&mut self, text: &str) {
        assert!(!self.panic_on_print, "matrix fault while printing");
        self.ops.push(Op::Print(text.to_owned()));
    }

    fn end_text(&mut self, direction: ScrollDirection) {
        self.ops.push(Op::EndText(direction));
    }
}

/// Records requested delays without sleeping.
#[derive(Debug, Default)]
pub struct RecordingDelay {
    pub delays_ms: Vec<u32>,
}

impl DelayNs for RecordingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.delays_ms.push(ns / 1_000_000);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.delays_ms.push(ms);
    }
}

/// Sleeps the calling thread.
#[derive(Debug, Default)]
pub struct StdDelay;

impl DelayNs for StdDelay {
    fn delay_ns(&mut self, ns: u32) {
        std::thread::sleep(Duration::from_nanos(u64::from(ns)));
    }

    fn delay_ms(&mut self, ms: u32) {
        std::thread::sleep(Duration::from_millis(u64::from(ms)));
    }
}

/// Keeps every frame written to it, in strip order.
#[derive(Debug, Default)]
pub struct RecordingWriter {
    pub frames: Vec<Vec<RGB8>>,
}

impl SmartLedsWrite for RecordingWriter {
    type Error = Infallible;
    type Color = RGB8;

    fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
    where
        T: IntoIterator<Item = I>,
        I: Into<Self::Color>,
    {
        self.frames
            .push(iterator.into_iter().map(Into::into).collect());
        Ok(())
    }
}

/// Rejects every frame.
#[derive(Debug, Default)]
pub struct FailingWriter {
    pub attempts: usize,
}

impl SmartLedsWrite for FailingWriter {
    type Error = ();
    type Color = RGB8;

    fn write<T, I>(&mut self, _iterator: T) -> Result<(), Self::Error>
    where
        T: IntoIterator<Item = I>,
        I: Into<Self::Color>,
    {
        self.attempts += 1;
        Err(())
    }
}
