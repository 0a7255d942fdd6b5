//! Scroll a message across a 12x8 matrix drawn in the terminal.
//!
//! Run with: `cargo run --example console_scroll -- "72F SUNNY" --speed 60`

use std::convert::Infallible;
use std::io::{self, Write as _};
use std::time::Duration;

use clap::Parser;
use embedded_hal::delay::DelayNs;
use smart_leds::{RGB8, SmartLedsWrite};
use wifi_news::{LedLayout, LedMatrix, ScrollRequest, TextScroller};

const ROWS: usize = 8;
const COLS: usize = 12;

#[derive(Parser)]
#[command(name = "console_scroll")]
#[command(about = "Scroll text across a terminal LED matrix", long_about = None)]
struct Cli {
    /// Text to scroll
    #[arg(default_value = " HELLO FROM WIFI-NEWS ")]
    text: String,
    /// Milliseconds per one-column scroll step
    #[arg(long, default_value_t = 80)]
    speed: u32,
    /// Milliseconds to wait after the text has scrolled off
    #[arg(long, default_value_t = 50)]
    pause: u32,
    /// Number of times to scroll the text
    #[arg(long, default_value_t = 1)]
    repeat: u32,
}

/// Draws each frame it receives as rows of `#` and `.`, in row-major order.
struct ConsoleMatrix;

impl SmartLedsWrite for ConsoleMatrix {
    type Error = Infallible;
    type Color = RGB8;

    fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
    where
        T: IntoIterator<Item = I>,
        I: Into<Self::Color>,
    {
        let pixels: Vec<RGB8> = iterator.into_iter().map(Into::into).collect();
        let mut out = String::from("\x1b[H");
        for row in pixels.chunks(COLS) {
            for pixel in row {
                out.push(if *pixel == RGB8::default() { '.' } else { '#' });
            }
            out.push('\n');
        }
        let mut stdout = io::stdout().lock();
        let _ = stdout.write_all(out.as_bytes());
        let _ = stdout.flush();
        Ok(())
    }
}

struct SleepDelay;

impl DelayNs for SleepDelay {
    fn delay_ns(&mut self, ns: u32) {
        std::thread::sleep(Duration::from_nanos(u64::from(ns)));
    }
}

fn main() -> Result<(), wifi_news::Error> {
    let cli = Cli::parse();
    let request = ScrollRequest::new(&cli.text)?
        .with_scroll_speed(cli.speed)
        .with_pause_after(cli.pause);

    print!("\x1b[2J");
    let matrix: LedMatrix<_, _, ROWS, COLS> =
        LedMatrix::new(ConsoleMatrix, SleepDelay, LedLayout::RowMajor);
    let mut scroller = TextScroller::new(matrix, SleepDelay);
    scroller.init();
    for _ in 0..cli.repeat {
        scroller.show(&request);
    }
    Ok(())
}
