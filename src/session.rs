//! Scope guards for the paired calls of a [`MatrixDriver`].
//!
//! A [`DrawSession`] calls `begin_draw` when created and `end_draw` when dropped. A
//! [`TextRegion`] does the same for `begin_text` / `end_text`. Nesting a region inside a
//! session guarantees the driver is never left mid-draw, whichever way the scope is exited.

use core::ops::{Deref, DerefMut};

use crate::matrix_driver::{Color24, MatrixDriver, ScrollDirection};

/// An open draw session. Derefs to the driver for issuing graphics commands.
pub struct DrawSession<'a, D: MatrixDriver + ?Sized> {
    driver: &'a mut D,
}

impl<'a, D: MatrixDriver + ?Sized> DrawSession<'a, D> {
    /// Open a draw session on `driver`.
    pub fn begin(driver: &'a mut D) -> Self {
        trace!("DrawSession: begin");
        driver.begin_draw();
        Self { driver }
    }
}

impl<D: MatrixDriver + ?Sized> Deref for DrawSession<'_, D> {
    type Target = D;

    fn deref(&self) -> &Self::Target {
        self.driver
    }
}

impl<D: MatrixDriver + ?Sized> DerefMut for DrawSession<'_, D> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.driver
    }
}

impl<D: MatrixDriver + ?Sized> Drop for DrawSession<'_, D> {
    fn drop(&mut self) {
        self.driver.end_draw();
        trace!("DrawSession: end");
    }
}

/// An open text region. Closing it hands the collected text to the driver with the
/// scroll direction chosen when the region was opened.
pub struct TextRegion<'a, D: MatrixDriver + ?Sized> {
    driver: &'a mut D,
    direction: ScrollDirection,
}

impl<'a, D: MatrixDriver + ?Sized> TextRegion<'a, D> {
    /// Open a text region anchored at `origin` (x, y).
    pub fn begin(
        driver: &'a mut D,
        origin: (i32, i32),
        color: Color24,
        direction: ScrollDirection,
    ) -> Self {
        let (x, y) = origin;
        driver.begin_text(x, y, color);
        Self { driver, direction }
    }

    /// Append `text` to the region.
    pub fn print(&mut self, text: &str) {
        self.driver.print(text);
    }
}

impl<D: MatrixDriver + ?Sized> Drop for TextRegion<'_, D> {
    fn drop(&mut self) {
        self.driver.end_text(self.direction);
    }
}
