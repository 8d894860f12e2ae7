//! ResizeChain: boundary arithmetic for N panes separated by N-1 handles.
//!
//! The chain is fully described by one trailing boundary per region, measured
//! along a single [`Axis`] from the container's leading edge. The last boundary
//! is pinned to the container length; the leading edge (0) is implicit. Every
//! region keeps at least `min_region_length` cells, which drags and resizes
//! enforce by clamping.
//!
//! Neighbours are addressed by index into the owned boundary vector, so a
//! propagation walk is just a loop over `index - 1, index - 2, ...` or
//! `index + 1, index + 2, ...`.

use crate::error::{Result, WidgetError};
use crate::geometry::{Axis, Region, Size};

/// Fraction of the container length used as the minimum region length when
/// the caller does not set one. Always capped at `length / region_count`.
pub const DEFAULT_MIN_FRACTION: f64 = 0.1;

// ---------------------------------------------------------------------------
// ResizeChain
// ---------------------------------------------------------------------------

/// Ordered chain of resizable regions along one axis.
///
/// Created uninitialized; [`initialize`](Self::initialize) must run once with
/// the container size and each region's natural length before boundaries mean
/// anything. Drags before that are ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeChain {
    axis: Axis,
    total_length: i32,
    min_override: Option<i32>,
    min_region_length: i32,
    /// `min_region_length / total_length` at initialization, used to rescale.
    min_fraction: f64,
    boundaries: Vec<i32>,
    ratios: Vec<f64>,
    initialized: bool,
}

impl ResizeChain {
    /// Create a chain of `region_count` regions.
    ///
    /// `min_region_length` overrides the default minimum; non-positive values
    /// count as unset. A single region is valid and simply fills the container.
    pub fn new(axis: Axis, region_count: usize, min_region_length: Option<i32>) -> Result<Self> {
        if region_count == 0 {
            return Err(WidgetError::InvalidConfiguration(
                "resize chain needs at least one region".into(),
            ));
        }
        Ok(Self {
            axis,
            total_length: 0,
            min_override: min_region_length.filter(|m| *m > 0),
            min_region_length: 0,
            min_fraction: 0.0,
            boundaries: vec![0; region_count],
            ratios: vec![0.0; region_count],
            initialized: false,
        })
    }

    // ── Accessors ────────────────────────────────────────────────────

    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Number of regions.
    pub fn len(&self) -> usize {
        self.boundaries.len()
    }

    /// Always false: construction rejects empty chains.
    pub fn is_empty(&self) -> bool {
        self.boundaries.is_empty()
    }

    /// Number of draggable handles (`len() - 1`).
    pub fn handle_count(&self) -> usize {
        self.boundaries.len() - 1
    }

    pub fn total_length(&self) -> i32 {
        self.total_length
    }

    pub fn min_region_length(&self) -> i32 {
        self.min_region_length
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Trailing boundary of region `index`, if it exists.
    pub fn boundary(&self, index: usize) -> Option<i32> {
        self.boundaries.get(index).copied()
    }

    /// All trailing boundaries, the last one equal to the total length.
    pub fn boundaries(&self) -> &[i32] {
        &self.boundaries
    }

    /// Boundary of region `index` as a fraction of the total length.
    pub fn ratio(&self, index: usize) -> Option<f64> {
        self.ratios.get(index).copied()
    }

    /// Length of region `index` along the axis.
    pub fn region_length(&self, index: usize) -> Option<i32> {
        let end = self.boundary(index)?;
        Some(end - self.leading_edge(index))
    }

    fn leading_edge(&self, index: usize) -> i32 {
        if index == 0 {
            0
        } else {
            self.boundaries[index - 1]
        }
    }

    // ── Setup ────────────────────────────────────────────────────────

    /// One-time setup from the container size and each region's natural length.
    ///
    /// Boundaries are placed by cumulative share of the natural lengths (an
    /// equal split when they are all zero), then clamped so that every region
    /// respects the minimum length. Missing natural lengths count as zero.
    /// Subsequent calls do nothing.
    pub fn initialize(&mut self, container: Size, natural: &[i32]) {
        if self.initialized {
            return;
        }
        let count = self.boundaries.len();
        let total = self.axis.main(container).max(0);
        self.total_length = total;
        self.min_region_length = effective_min(self.min_override, total, count);
        self.min_fraction = if total > 0 {
            self.min_region_length as f64 / total as f64
        } else {
            0.0
        };

        let weights: Vec<f64> = (0..count)
            .map(|i| natural.get(i).copied().unwrap_or(0).max(0) as f64)
            .collect();
        let sum: f64 = weights.iter().sum();

        let mut cumulative = 0.0;
        for (i, weight) in weights.iter().enumerate() {
            cumulative += if sum > 0.0 { weight / sum } else { 1.0 / count as f64 };
            self.ratios[i] = cumulative.min(1.0);
            self.boundaries[i] = (self.ratios[i] * total as f64).round() as i32;
        }
        self.ratios[count - 1] = 1.0;

        self.enforce_min_gaps();
        self.sync_ratios(0, count - 1);
        self.initialized = true;

        tracing::debug!(
            total,
            min = self.min_region_length,
            boundaries = ?self.boundaries,
            "resize chain initialized"
        );
    }

    // ── Container resize ─────────────────────────────────────────────

    /// Re-derive boundaries for a new container size.
    ///
    /// Boundaries are recomputed from the stored ratios, so repeated resizes
    /// keep proportions rather than absolute positions. The minimum length is
    /// rescaled by the same factor. Returns whether anything changed; a size
    /// whose projection equals the current length is a no-op.
    pub fn resize(&mut self, container: Size) -> bool {
        if !self.initialized {
            return false;
        }
        let total = self.axis.main(container).max(0);
        if total == self.total_length {
            return false;
        }

        tracing::debug!(from = self.total_length, to = total, "resize chain rescaled");

        let count = self.boundaries.len();
        // A fraction that rounds to zero cells still means "at least one".
        let requested = if self.min_fraction > 0.0 {
            Some(((self.min_fraction * total as f64).round() as i32).max(1))
        } else {
            self.min_override
        };
        self.total_length = total;
        self.min_region_length = effective_min(requested, total, count);

        for (boundary, ratio) in self.boundaries.iter_mut().zip(&self.ratios) {
            *boundary = (ratio * total as f64).round() as i32;
        }
        self.enforce_min_gaps();
        true
    }

    // ── Dragging ─────────────────────────────────────────────────────

    /// Move the handle trailing region `index` by `delta` cells.
    ///
    /// Moving toward the start pushes predecessors that would end up closer
    /// than the minimum length; the walk stops at the first predecessor with
    /// room to spare. Moving toward the end pushes successors the same way.
    /// The container edges never move, so the dragged boundary is clamped to
    /// leave `min_region_length` for every region between it and the edge.
    ///
    /// Returns whether the dragged boundary moved. Errors only when `index`
    /// does not name a region. The last region's trailing edge is the
    /// container edge, so dragging it does nothing.
    pub fn drag(&mut self, index: usize, delta: i32) -> Result<bool> {
        let count = self.boundaries.len();
        if index >= count {
            return Err(WidgetError::IndexOutOfRange { index, len: count });
        }
        if !self.initialized || delta == 0 || index == count - 1 {
            return Ok(false);
        }

        let min = self.min_region_length;
        let before = self.boundaries[index];
        let wanted = before.saturating_add(delta);

        let (first, last) = if delta < 0 {
            let floor = (index as i32 + 1) * min;
            self.boundaries[index] = wanted.max(floor);
            let mut first = index;
            for j in (0..index).rev() {
                let ceiling = self.boundaries[j + 1] - min;
                if self.boundaries[j] <= ceiling {
                    break;
                }
                self.boundaries[j] = ceiling;
                first = j;
            }
            (first, index)
        } else {
            let ceiling = self.total_length - (count - 1 - index) as i32 * min;
            self.boundaries[index] = wanted.min(ceiling);
            let mut last = index;
            for j in index + 1..count - 1 {
                let floor = self.boundaries[j - 1] + min;
                if self.boundaries[j] >= floor {
                    break;
                }
                self.boundaries[j] = floor;
                last = j;
            }
            (index, last)
        };

        if self.boundaries[index] != wanted {
            tracing::trace!(index, wanted, got = self.boundaries[index], "drag clamped");
        }
        self.sync_ratios(first, last);
        Ok(self.boundaries[index] != before)
    }

    // ── Geometry ─────────────────────────────────────────────────────

    /// Rectangle occupied by region `index`: from its predecessor's boundary
    /// to its own along the axis, and `[0, cross)` across it.
    pub fn region_bounds(&self, index: usize, cross: i32) -> Result<Region> {
        let count = self.boundaries.len();
        if index >= count {
            return Err(WidgetError::IndexOutOfRange { index, len: count });
        }
        let start = self.leading_edge(index);
        Ok(self.axis.span(start, self.boundaries[index] - start, 0, cross))
    }

    // ── Internals ────────────────────────────────────────────────────

    /// Clamp boundaries so that every region has at least the minimum length
    /// and the last boundary sits on the container edge.
    fn enforce_min_gaps(&mut self) {
        let count = self.boundaries.len();
        let min = self.min_region_length;
        self.boundaries[count - 1] = self.total_length;

        let mut prev = 0;
        for boundary in &mut self.boundaries[..count - 1] {
            *boundary = (*boundary).max(prev + min);
            prev = *boundary;
        }
        let mut next = self.total_length;
        for boundary in self.boundaries[..count - 1].iter_mut().rev() {
            *boundary = (*boundary).min(next - min);
            next = *boundary;
        }
    }

    fn sync_ratios(&mut self, first: usize, last: usize) {
        if self.total_length <= 0 {
            return;
        }
        let total = self.total_length as f64;
        for i in first..=last {
            self.ratios[i] = self.boundaries[i] as f64 / total;
        }
    }
}

/// Minimum region length for `total` cells split into `count` regions.
///
/// Never larger than `total / count` so the constraint stays satisfiable, and
/// at least 1 whenever there is a cell per region.
fn effective_min(requested: Option<i32>, total: i32, count: usize) -> i32 {
    let count = count as i32;
    let allowed = total / count;
    let wanted = match requested {
        Some(m) if m > 0 => m,
        _ => (total as f64 * DEFAULT_MIN_FRACTION) as i32,
    };
    let min = wanted.min(allowed);
    if total >= count {
        min.max(1)
    } else {
        min.max(0)
    }
}

// ===========================================================================
// Tests
// ===========================================================================
