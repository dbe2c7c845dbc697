//! Click and drag locations on a scroll bar.
//!
//! A scroll bar is modeled as a track of `extent` pixels along its axis with a
//! square arrow button at each end. The arrow size is the bar's thickness, its
//! extent across the axis.
//!
//! ```text
//! |<-arrow->|<----------- track ----------->|<-arrow->|
//! +---------+-------------------------------+---------+
//! |    <    |          [ thumb ]            |    >    |
//! +---------+-------------------------------+---------+
//! ```

#![allow(clippy::cast_possible_truncation)]

use super::{Axis, Point, Size};

/// Pixels between an arrow button's center and a block (page) click.
pub const BLOCK_OFFSET: i32 = 4;

/// A snapshot of a scroll bar's geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollBarGeometry {
    pub axis: Axis,
    pub size: Size,
}

impl ScrollBarGeometry {
    #[must_use]
    pub const fn new(axis: Axis, size: Size) -> Self { Self { axis, size } }

    /// Length of the bar along its axis.
    #[must_use]
    pub const fn extent(&self) -> i32 { self.axis.extent(self.size) }

    /// Size of each arrow button.
    #[must_use]
    pub const fn arrow(&self) -> i32 { self.axis.cross_extent(self.size) }

    /// Center of the thumb when it sits at `fraction` of the track.
    ///
    /// `fraction` is clamped to `[0, 1]`: `0` is right after the near arrow,
    /// `1` right before the far arrow.
    #[must_use]
    pub fn thumb_location(&self, fraction: f64) -> Point {
        let arrow = self.arrow();
        let track = f64::from(self.extent() - 2 * arrow);
        let fraction = if fraction.is_nan() { 0.0 } else { fraction.clamp(0.0, 1.0) };
        let primary = arrow + (fraction * track) as i32;
        self.axis.point(primary, arrow / 2)
    }

    /// Center of the thumb when the bar's model holds `value` within
    /// `[minimum, maximum]`.
    ///
    /// An empty range (`maximum == minimum`) puts the thumb at the start.
    #[must_use]
    pub fn thumb_location_for_value(&self, value: i32, minimum: i32, maximum: i32) -> Point {
        let range = f64::from(maximum) - f64::from(minimum);
        let fraction = if range <= 0.0 { 0.0 } else { (f64::from(value) - f64::from(minimum)) / range };
        self.thumb_location(fraction)
    }

    /// Where to click to scroll one unit toward the start (the near arrow).
    #[must_use]
    pub const fn unit_location_to_scroll_up(&self) -> Point {
        let half = self.arrow() / 2;
        Point::new(half, half)
    }

    /// Where to click to scroll one unit toward the end (the far arrow).
    #[must_use]
    pub const fn unit_location_to_scroll_down(&self) -> Point {
        let half = self.arrow() / 2;
        self.axis.point(self.extent() - half, half)
    }

    /// Where to click to scroll one block toward the start.
    #[must_use]
    pub const fn block_location_to_scroll_up(&self) -> Point {
        self.block_location(self.unit_location_to_scroll_up(), BLOCK_OFFSET)
    }

    /// Where to click to scroll one block toward the end.
    #[must_use]
    pub const fn block_location_to_scroll_down(&self) -> Point {
        self.block_location(self.unit_location_to_scroll_down(), -BLOCK_OFFSET)
    }

    /// `unit_location` moved by `offset` pixels along the bar's axis.
    #[must_use]
    pub const fn block_location(&self, unit_location: Point, offset: i32) -> Point {
        self.axis.offset(unit_location, offset)
    }
}
