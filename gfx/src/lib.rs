//! Indexed-color span graphics.
//!
//! This module is deliberately architecture-independent to allow for testing on
//! the host. Everything here draws into a plain byte buffer, one palette index
//! per pixel, so the same code serves the browser and native hosts.

#![cfg_attr(not(any(test, feature = "std")), no_std)]

use core::mem::swap;
use core::ops::Range;

/// Representation of a pixel in memory: an index into a 16-entry palette.
pub type Color = u8;

/// Number of palette entries a `Color` may refer to.
pub const PALETTE_SIZE: usize = 16;

/// Something we can paint horizontal spans into.
///
/// Coordinates are signed because callers routinely compute spans that hang
/// off either side of the screen; implementations clip.
pub trait Surface {
    fn width(&self) -> usize;
    fn height(&self) -> usize;

    /// Fills the `w` by `h` rectangle with its top-left corner at `(x, y)`.
    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color);

    /// Draws the span from `x1` to `x2` on row `y`, including both endpoints.
    /// The endpoints may be given in either order.
    fn draw_hspan(&mut self, x1: i32, y: i32, x2: i32, color: Color);
}

/// Clips the half-open interval `start..end` to `0..limit`.
///
/// Returns `None` if nothing is left.
fn clip(start: i32, end: i32, limit: usize) -> Option<Range<usize>> {
    let limit = limit as i64;
    let start = i64::from(start).max(0);
    let end = i64::from(end).min(limit);
    if start < end {
        Some(start as usize..end as usize)
    } else {
        None
    }
}

/// A `Surface` stored row-major in any byte buffer.
#[derive(Clone, Debug)]
pub struct Framebuffer<B> {
    buf: B,
    width: usize,
    height: usize,
}

impl<B> Framebuffer<B>
where
    B: AsRef<[u8]>,
{
    /// Wraps `buf` as a `width` by `height` framebuffer.
    ///
    /// # Panics
    ///
    /// If `buf` is too small to hold that many pixels.
    pub fn new(buf: B, width: usize, height: usize) -> Self {
        // Force overflow checking.
        let needed = width.checked_mul(height).unwrap();
        assert!(
            buf.as_ref().len() >= needed,
            "framebuffer of {}x{} needs {} bytes, got {}",
            width,
            height,
            needed,
            buf.as_ref().len(),
        );
        Framebuffer { buf, width, height }
    }

    pub fn pixels(&self) -> &[u8] {
        &self.buf.as_ref()[..self.width * self.height]
    }

    /// Borrows row `y`.
    ///
    /// # Panics
    ///
    /// If `y` is off the bottom of the buffer.
    pub fn row(&self, y: usize) -> &[u8] {
        assert!(y < self.height);
        &self.pixels()[y * self.width..(y + 1) * self.width]
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Color> {
        if x < self.width && y < self.height {
            Some(self.buf.as_ref()[y * self.width + x])
        } else {
            None
        }
    }
}

impl<B> Framebuffer<B>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    pub fn clear(&mut self, color: Color) {
        let len = self.width * self.height;
        for p in &mut self.buf.as_mut()[..len] {
            *p = color;
        }
    }
}

impl<B> Surface for Framebuffer<B>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) {
        debug_assert!((color as usize) < PALETTE_SIZE);
        let xs = match clip(x, x.saturating_add(w), self.width) {
            Some(r) => r,
            None => return,
        };
        let ys = match clip(y, y.saturating_add(h), self.height) {
            Some(r) => r,
            None => return,
        };
        let width = self.width;
        let buf = self.buf.as_mut();
        for row in ys {
            let offset = row * width;
            for p in &mut buf[offset + xs.start..offset + xs.end] {
                *p = color;
            }
        }
    }

    fn draw_hspan(&mut self, mut x1: i32, y: i32, mut x2: i32, color: Color) {
        debug_assert!((color as usize) < PALETTE_SIZE);
        if y < 0 || y as usize >= self.height {
            return;
        }
        if x1 > x2 {
            swap(&mut x1, &mut x2);
        }
        let xs = match clip(x1, x2.saturating_add(1), self.width) {
            Some(r) => r,
            None => return,
        };
        let offset = y as usize * self.width;
        for p in &mut self.buf.as_mut()[offset + xs.start..offset + xs.end] {
            *p = color;
        }
    }
}
