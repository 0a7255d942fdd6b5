use heapless::String;

use crate::{Error, Result};

/// Capacity in bytes of a scroll text buffer.
pub const MAX_TEXT_LEN: usize = 128;

/// Default pacing, in milliseconds per one-column scroll step.
pub const DEFAULT_SCROLL_SPEED_MS: u32 = 500;

/// Default pause after the animation finishes, in milliseconds.
pub const DEFAULT_PAUSE_AFTER_MS: u32 = 50;

/// One line of text to scroll, with its pacing.
///
/// ```
/// use wifi_news::ScrollRequest;
///
/// let request = ScrollRequest::new(" 72F SUNNY ")?.with_scroll_speed(250);
/// assert_eq!(request.text(), " 72F SUNNY ");
/// assert_eq!(request.scroll_speed_ms(), 250);
/// assert_eq!(request.pause_after_ms(), 50);
/// # Ok::<(), wifi_news::Error>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrollRequest {
    text: String<MAX_TEXT_LEN>,
    scroll_speed_ms: u32,
    pause_after_ms: u32,
}

impl ScrollRequest {
    /// Create a request with the default speed and pause.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TextTooLong`] if `text` is longer than [`MAX_TEXT_LEN`] bytes.
    pub fn new(text: &str) -> Result<Self> {
        let text = String::try_from(text).map_err(|()| Error::TextTooLong { max: MAX_TEXT_LEN })?;
        Ok(Self {
            text,
            scroll_speed_ms: DEFAULT_SCROLL_SPEED_MS,
            pause_after_ms: DEFAULT_PAUSE_AFTER_MS,
        })
    }

    /// Replace the scroll speed. Zero scrolls as fast as the driver permits.
    #[must_use]
    pub fn with_scroll_speed(mut self, scroll_speed_ms: u32) -> Self {
        self.scroll_speed_ms = scroll_speed_ms;
        self
    }

    /// Replace the post-scroll pause. Zero means no pause.
    #[must_use]
    pub fn with_pause_after(mut self, pause_after_ms: u32) -> Self {
        self.pause_after_ms = pause_after_ms;
        self
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub const fn scroll_speed_ms(&self) -> u32 {
        self.scroll_speed_ms
    }

    #[must_use]
    pub const fn pause_after_ms(&self) -> u32 {
        self.pause_after_ms
    }
}
