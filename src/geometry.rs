//! Core geometry types: Offset, Size, Region, Spacing, Axis, Constraints.
//!
//! All values are in terminal cells. `Axis` and `Constraints` carry the
//! size-constraint handshake between a widget and whoever lays it out.

use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Offset
// ---------------------------------------------------------------------------

/// A 2D displacement or position in terminal cells.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Offset {
    pub x: i32,
    pub y: i32,
}

impl Offset {
    /// Create a new offset.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Offset {
    type Output = Offset;
    #[inline]
    fn add(self, rhs: Offset) -> Offset {
        Offset { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl Sub for Offset {
    type Output = Offset;
    #[inline]
    fn sub(self, rhs: Offset) -> Offset {
        Offset { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

// ---------------------------------------------------------------------------
// Size
// ---------------------------------------------------------------------------

/// A 2D size in terminal cells (width x height).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    /// A zero-sized size.
    pub const ZERO: Size = Size { width: 0, height: 0 };

    /// Create a new size.
    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Whether either dimension is zero or negative.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Convert to a [`Region`] positioned at the origin.
    #[inline]
    pub const fn to_region(self) -> Region {
        Region { x: 0, y: 0, width: self.width, height: self.height }
    }
}

impl Sub for Size {
    type Output = Size;
    #[inline]
    fn sub(self, rhs: Size) -> Size {
        Size { width: self.width - rhs.width, height: self.height - rhs.height }
    }
}

// ---------------------------------------------------------------------------
// Region
// ---------------------------------------------------------------------------

/// A rectangle in terminal cells defined by position and size.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Region {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Region {
    /// An empty region at the origin.
    pub const EMPTY: Region = Region { x: 0, y: 0, width: 0, height: 0 };

    /// Create a new region.
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// The right edge (exclusive): `x + width`.
    #[inline]
    pub const fn right(self) -> i32 {
        self.x + self.width
    }

    /// The bottom edge (exclusive): `y + height`.
    #[inline]
    pub const fn bottom(self) -> i32 {
        self.y + self.height
    }

    /// The top-left corner as an [`Offset`].
    #[inline]
    pub const fn offset(self) -> Offset {
        Offset { x: self.x, y: self.y }
    }

    /// The dimensions as a [`Size`].
    #[inline]
    pub const fn size(self) -> Size {
        Size { width: self.width, height: self.height }
    }

    /// Whether the point (x, y) lies inside this region.
    #[inline]
    pub const fn contains(self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Whether `offset` lies inside this region.
    #[inline]
    pub const fn contains_offset(self, offset: Offset) -> bool {
        self.contains(offset.x, offset.y)
    }

    /// Compute the intersection of two regions.
    ///
    /// Returns [`Region::EMPTY`] if the regions do not overlap.
    #[inline]
    pub const fn intersection(self, other: Region) -> Region {
        let x1 = if self.x > other.x { self.x } else { other.x };
        let y1 = if self.y > other.y { self.y } else { other.y };

        let sr = self.right();
        let or = other.right();
        let x2 = if sr < or { sr } else { or };

        let sb = self.bottom();
        let ob = other.bottom();
        let y2 = if sb < ob { sb } else { ob };

        let w = x2 - x1;
        let h = y2 - y1;

        if w <= 0 || h <= 0 {
            Region::EMPTY
        } else {
            Region { x: x1, y: y1, width: w, height: h }
        }
    }

    /// Translate the region by an [`Offset`].
    #[inline]
    pub const fn translate(self, offset: Offset) -> Region {
        Region { x: self.x + offset.x, y: self.y + offset.y, width: self.width, height: self.height }
    }

    /// Contract the region inward by the given [`Spacing`].
    ///
    /// Width and height are clamped to zero to avoid negative dimensions.
    #[inline]
    pub const fn shrink(self, margin: Spacing) -> Region {
        let w = self.width - margin.left - margin.right;
        let h = self.height - margin.top - margin.bottom;
        Region {
            x: self.x + margin.left,
            y: self.y + margin.top,
            width: if w > 0 { w } else { 0 },
            height: if h > 0 { h } else { 0 },
        }
    }

    /// Split vertically at `offset` cells from the left edge.
    ///
    /// Returns `(left, right)`. The offset is clamped to `[0, width]`.
    #[inline]
    pub const fn split_vertical(self, offset: i32) -> (Region, Region) {
        let clamped = if offset < 0 {
            0
        } else if offset > self.width {
            self.width
        } else {
            offset
        };
        let left = Region { x: self.x, y: self.y, width: clamped, height: self.height };
        let right = Region {
            x: self.x + clamped,
            y: self.y,
            width: self.width - clamped,
            height: self.height,
        };
        (left, right)
    }

    /// Split horizontally at `offset` cells from the top edge.
    ///
    /// Returns `(top, bottom)`. The offset is clamped to `[0, height]`.
    #[inline]
    pub const fn split_horizontal(self, offset: i32) -> (Region, Region) {
        let clamped = if offset < 0 {
            0
        } else if offset > self.height {
            self.height
        } else {
            offset
        };
        let top = Region { x: self.x, y: self.y, width: self.width, height: clamped };
        let bottom = Region {
            x: self.x,
            y: self.y + clamped,
            width: self.width,
            height: self.height - clamped,
        };
        (top, bottom)
    }
}

// ---------------------------------------------------------------------------
// Spacing
// ---------------------------------------------------------------------------

/// Spacing around the four sides of a rectangle, used as widget inset.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Spacing {
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub left: i32,
}

impl Spacing {
    /// Zero spacing on all sides.
    pub const ZERO: Spacing = Spacing { top: 0, right: 0, bottom: 0, left: 0 };

    /// Create spacing with explicit values for each side.
    #[inline]
    pub const fn new(top: i32, right: i32, bottom: i32, left: i32) -> Self {
        Self { top, right, bottom, left }
    }

    /// All four sides set to the same value.
    #[inline]
    pub const fn all(value: i32) -> Self {
        Self { top: value, right: value, bottom: value, left: value }
    }

    /// Symmetric spacing: `vertical` for top/bottom, `horizontal` for left/right.
    #[inline]
    pub const fn symmetric(vertical: i32, horizontal: i32) -> Self {
        Self { top: vertical, right: horizontal, bottom: vertical, left: horizontal }
    }

    /// Total horizontal extent: `left + right`.
    #[inline]
    pub const fn width(self) -> i32 {
        self.left + self.right
    }

    /// Total vertical extent: `top + bottom`.
    #[inline]
    pub const fn height(self) -> i32 {
        self.top + self.bottom
    }
}

// ---------------------------------------------------------------------------
// Axis
// ---------------------------------------------------------------------------

/// The dimension along which a widget stacks or sizes its children.
///
/// The "main" coordinate runs along the axis; the "cross" coordinate is the
/// other one.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    #[default]
    Horizontal,
    Vertical,
}

impl Axis {
    /// Extent of `size` along the axis.
    #[inline]
    pub const fn main(self, size: Size) -> i32 {
        match self {
            Axis::Horizontal => size.width,
            Axis::Vertical => size.height,
        }
    }

    /// Extent of `size` across the axis.
    #[inline]
    pub const fn cross(self, size: Size) -> i32 {
        match self {
            Axis::Horizontal => size.height,
            Axis::Vertical => size.width,
        }
    }

    /// Coordinate of `offset` along the axis.
    #[inline]
    pub const fn main_coord(self, offset: Offset) -> i32 {
        match self {
            Axis::Horizontal => offset.x,
            Axis::Vertical => offset.y,
        }
    }

    /// Build a [`Size`] from main and cross extents.
    #[inline]
    pub const fn pack(self, main: i32, cross: i32) -> Size {
        match self {
            Axis::Horizontal => Size { width: main, height: cross },
            Axis::Vertical => Size { width: cross, height: main },
        }
    }

    /// Build a [`Region`] spanning `[start, start + len)` along the axis and
    /// `[cross_start, cross_start + cross_len)` across it.
    #[inline]
    pub const fn span(self, start: i32, len: i32, cross_start: i32, cross_len: i32) -> Region {
        match self {
            Axis::Horizontal => Region { x: start, y: cross_start, width: len, height: cross_len },
            Axis::Vertical => Region { x: cross_start, y: start, width: cross_len, height: len },
        }
    }

    /// Split `region` at `offset` along the axis, returning `(leading, trailing)`.
    #[inline]
    pub const fn split(self, region: Region, offset: i32) -> (Region, Region) {
        match self {
            Axis::Horizontal => region.split_vertical(offset),
            Axis::Vertical => region.split_horizontal(offset),
        }
    }
}

// ---------------------------------------------------------------------------
// Constraints
// ---------------------------------------------------------------------------

/// Minimum and maximum size a widget may occupy during one layout pass.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Constraints {
    pub min: Size,
    pub max: Size,
}

impl Constraints {
    /// Constraints that allow exactly `size`.
    #[inline]
    pub const fn tight(size: Size) -> Self {
        Self { min: size, max: size }
    }

    /// Constraints that allow anything from zero up to `size`.
    #[inline]
    pub const fn loose(size: Size) -> Self {
        Self { min: Size::ZERO, max: size }
    }

    /// Clamp `size` into `[min, max]` on both axes.
    #[inline]
    pub fn constrain(self, size: Size) -> Size {
        Size {
            width: size.width.min(self.max.width).max(self.min.width),
            height: size.height.min(self.max.height).max(self.min.height),
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
