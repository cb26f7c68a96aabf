// Copyright 2025 the Stackboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Primitive geometry types and helpers.

use core::cmp::Ordering;

/// Axis-aligned bounding box in 2D.
///
/// Edges are inclusive: a point lying exactly on `max_x` is inside the box.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Aabb2D<T> {
    /// Minimum x (left)
    pub min_x: T,
    /// Minimum y (top)
    pub min_y: T,
    /// Maximum x (right)
    pub max_x: T,
    /// Maximum y (bottom)
    pub max_y: T,
}

impl<T> Aabb2D<T> {
    /// Create a new AABB from min/max corners.
    pub const fn new(min_x: T, min_y: T, max_x: T, max_y: T) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }
}

impl<T: Copy + PartialOrd> Aabb2D<T> {
    /// Whether `other` lies entirely within this AABB, edges included.
    ///
    /// Returns `false` if any coordinate is incomparable (NaN).
    pub fn contains_aabb(&self, other: &Self) -> bool {
        le(self.min_x, other.min_x)
            && le(self.min_y, other.min_y)
            && le(other.max_x, self.max_x)
            && le(other.max_y, self.max_y)
    }

    /// Return true if the AABB is empty or inverted (no area). Assumes no NaN.
    pub fn is_empty(&self) -> bool {
        lt(self.max_x, self.min_x) || lt(self.max_y, self.min_y)
    }

    /// Return true unless the AABB has strictly positive extent on both axes.
    ///
    /// Unlike [`is_empty`](Self::is_empty), a zero-width or zero-height box is degenerate.
    pub fn is_degenerate(&self) -> bool {
        !(lt(self.min_x, self.max_x) && lt(self.min_y, self.max_y))
    }
}

impl Aabb2D<f64> {
    /// Create an AABB from a center point and full extents in f64.
    ///
    /// Half extents are computed in floating point, so odd integer sizes keep their `.5` edges.
    pub fn from_center_size(cx: f64, cy: f64, w: f64, h: f64) -> Self {
        let hw = w / 2.0;
        let hh = h / 2.0;
        Self {
            min_x: cx - hw,
            min_y: cy - hh,
            max_x: cx + hw,
            max_y: cy + hh,
        }
    }
}

pub(crate) fn le<T: PartialOrd>(a: T, b: T) -> bool {
    a.partial_cmp(&b)
        .map(|o| o != Ordering::Greater)
        .unwrap_or(false)
}

pub(crate) fn lt<T: PartialOrd>(a: T, b: T) -> bool {
    a.partial_cmp(&b)
        .map(|o| o == Ordering::Less)
        .unwrap_or(false)
}
