//! Divider range and drag path of a split pane.
//!
//! Example (horizontal split, divider moves along `x`):
//! ```text
//! +-----------+--+-----------------+
//! |  leading  |##|    trailing     |
//! +-----------+--+-----------------+
//! ^ inset     ^ divider location
//! ```

use super::{Axis, Insets, Point, Size};

/// One of the two panes on either side of the divider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pane {
    pub visible: bool,
    pub minimum_size: Size,
}

impl Pane {
    /// A visible pane.
    #[must_use]
    pub const fn visible(minimum_size: Size) -> Self {
        Self {
            visible: true,
            minimum_size,
        }
    }

    /// A pane that exists but is not shown.
    #[must_use]
    pub const fn hidden(minimum_size: Size) -> Self {
        Self {
            visible: false,
            minimum_size,
        }
    }
}

/// Valid divider locations, inclusive on both ends.
///
/// `minimum <= maximum` always holds. A degenerate container has the single
/// location `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DividerRange {
    pub minimum: i32,
    pub maximum: i32,
}

impl DividerRange {
    /// Returns `true` if the container leaves no room to drag the divider.
    #[must_use]
    pub const fn is_degenerate(&self) -> bool { self.minimum == 0 && self.maximum == 0 }

    /// Returns `true` if `location` is within the range.
    #[must_use]
    pub const fn contains(&self, location: i32) -> bool { location >= self.minimum && location <= self.maximum }
}

/// A snapshot of a split pane's geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitPaneGeometry {
    /// Axis the divider moves along.
    pub axis: Axis,
    pub size: Size,
    pub insets: Insets,
    pub divider_size: i32,
    /// Left or top pane, if any.
    pub leading: Option<Pane>,
    /// Right or bottom pane, if any.
    pub trailing: Option<Pane>,
}

impl SplitPaneGeometry {
    /// Range the divider may be moved within.
    #[must_use]
    pub fn divider_range(&self) -> DividerRange {
        let minimum = match self.leading {
            Some(pane) if pane.visible => {
                self.axis.extent(pane.minimum_size).saturating_add(self.axis.leading_inset(self.insets))
            }
            _ => 0,
        };

        // -1 marks "dragging disallowed", which always collapses below.
        let maximum = match (self.leading, self.trailing) {
            (Some(_), Some(trailing)) => {
                let trailing_minimum = if trailing.visible {
                    self.axis.extent(trailing.minimum_size)
                } else {
                    0
                };
                let available = self
                    .axis
                    .extent(self.size)
                    .saturating_sub(self.divider_size)
                    .saturating_sub(self.axis.trailing_inset(self.insets))
                    .saturating_sub(trailing_minimum);
                available.max(0)
            }
            _ => -1,
        };

        if maximum < minimum {
            return DividerRange { minimum: 0, maximum: 0 };
        }
        DividerRange { minimum, maximum }
    }

    /// Clamps `desired` into [`SplitPaneGeometry::divider_range`].
    #[must_use]
    pub fn clamp_divider_location(&self, desired: i32) -> i32 {
        let range = self.divider_range();
        desired.max(range.minimum).min(range.maximum)
    }

    /// Press and release points for dragging the divider from `current` to
    /// `target`, both halfway across the pane.
    #[must_use]
    pub const fn divider_drag_path(&self, current: i32, target: i32) -> (Point, Point) {
        let cross = self.axis.cross_extent(self.size) / 2;
        (self.axis.point(current, cross), self.axis.point(target, cross))
    }
}
