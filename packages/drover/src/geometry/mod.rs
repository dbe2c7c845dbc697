//! Pure geometry and index calculators.
//!
//! Drivers snapshot a component's geometry on the owner thread and hand the
//! values to these functions, which do no I/O and never touch live toolkit
//! state.
//!
//! Orientation is never a separate type. Each calculator family is a single
//! algorithm parameterized by an [`Axis`], which selects the primary extent and
//! the leading/trailing insets along that axis.

pub mod bounds;
mod scroll_bar;
mod split_pane;

pub use bounds::BoundsError;
pub use scroll_bar::{BLOCK_OFFSET, ScrollBarGeometry};
pub use split_pane::{DividerRange, Pane, SplitPaneGeometry};

/// A location in component coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self { Self { x, y } }
}

/// Width and height of a component.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    #[must_use]
    pub const fn new(width: i32, height: i32) -> Self { Self { width, height } }
}

/// Border widths of a container.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Insets {
    pub top: i32,
    pub left: i32,
    pub bottom: i32,
    pub right: i32,
}

impl Insets {
    #[must_use]
    pub const fn new(top: i32, left: i32, bottom: i32, right: i32) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// The same inset on every side.
    #[must_use]
    pub const fn uniform(inset: i32) -> Self { Self::new(inset, inset, inset, inset) }
}

/// The axis a scroll bar scrolls along, or a split pane divides along.
///
/// `Horizontal` means the primary coordinate is `x` (width, left/right insets);
/// `Vertical` means it is `y` (height, top/bottom insets).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// The other axis.
    #[must_use]
    pub const fn perpendicular(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }

    /// Extent of `size` along this axis.
    #[must_use]
    pub const fn extent(self, size: Size) -> i32 {
        match self {
            Self::Horizontal => size.width,
            Self::Vertical => size.height,
        }
    }

    /// Extent of `size` along the perpendicular axis.
    #[must_use]
    pub const fn cross_extent(self, size: Size) -> i32 { self.perpendicular().extent(size) }

    /// Inset at the start of this axis (left or top).
    #[must_use]
    pub const fn leading_inset(self, insets: Insets) -> i32 {
        match self {
            Self::Horizontal => insets.left,
            Self::Vertical => insets.top,
        }
    }

    /// Inset at the end of this axis (right or bottom).
    #[must_use]
    pub const fn trailing_inset(self, insets: Insets) -> i32 {
        match self {
            Self::Horizontal => insets.right,
            Self::Vertical => insets.bottom,
        }
    }

    /// Builds a point from a coordinate along this axis and one across it.
    #[must_use]
    pub const fn point(self, primary: i32, cross: i32) -> Point {
        match self {
            Self::Horizontal => Point::new(primary, cross),
            Self::Vertical => Point::new(cross, primary),
        }
    }

    /// Moves `point` by `delta` along this axis.
    #[must_use]
    pub const fn offset(self, point: Point, delta: i32) -> Point {
        match self {
            Self::Horizontal => Point::new(point.x + delta, point.y),
            Self::Vertical => Point::new(point.x, point.y + delta),
        }
    }
}
