// Copyright 2025 the Stackboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public record types: widget identifiers, stored widgets, write inputs, and viewports.

use core::fmt;

use kurbo::{Point, Rect, Size};
use serde::{Deserialize, Serialize};
use stackboard_index::Aabb2D;
use time::OffsetDateTime;

/// Identifier of a widget.
///
/// Assigned by the store on create and never reused, even after the widget is deleted.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WidgetId(pub u64);

impl WidgetId {
    /// The raw numeric value.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A stored widget.
///
/// The rectangle is centered on `(x, y)` and spans `width` × `height`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Widget {
    /// Store-assigned identifier.
    pub id: WidgetId,
    /// Center x.
    pub x: i32,
    /// Center y.
    pub y: i32,
    /// Stacking order, unique among live widgets. Higher is on top.
    pub z_index: i32,
    /// Full width, positive.
    pub width: u32,
    /// Full height, positive.
    pub height: u32,
    /// Time of the last create or update of this widget.
    ///
    /// Being shifted by another widget's write changes `z_index` but not this stamp.
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl Widget {
    /// Bounds of the widget in plane coordinates.
    ///
    /// Half extents are exact in `f64` for every `i32` center and `u32` size.
    pub fn bounds(&self) -> Rect {
        Rect::from_center_size(
            Point::new(f64::from(self.x), f64::from(self.y)),
            Size::new(f64::from(self.width), f64::from(self.height)),
        )
    }
}

/// Input of [`Store::create`](crate::Store::create).
///
/// There is no id field: ids are always assigned by the store.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewWidget {
    /// Center x.
    pub x: i32,
    /// Center y.
    pub y: i32,
    /// Requested stacking order. `None` puts the widget on top.
    #[serde(default)]
    pub z_index: Option<i32>,
    /// Full width, must be positive.
    pub width: u32,
    /// Full height, must be positive.
    pub height: u32,
}

/// Input of [`Store::update`](crate::Store::update).
///
/// Every field replaces the stored value; there is no partial update.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetUpdate {
    /// Widget to replace.
    pub id: WidgetId,
    /// Center x.
    pub x: i32,
    /// Center y.
    pub y: i32,
    /// New stacking order. `None` moves the widget on top of the others.
    #[serde(default)]
    pub z_index: Option<i32>,
    /// Full width, must be positive.
    pub width: u32,
    /// Full height, must be positive.
    pub height: u32,
}

impl WidgetUpdate {
    /// An update that rewrites `widget` with its current values.
    pub fn from_widget(widget: &Widget) -> Self {
        Self {
            id: widget.id,
            x: widget.x,
            y: widget.y,
            z_index: Some(widget.z_index),
            width: widget.width,
            height: widget.height,
        }
    }
}

/// Query rectangle spanning `(x0, y0)`–`(x1, y1)`.
///
/// Valid only when `x1 > x0` and `y1 > y0`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Viewport {
    /// Left edge.
    pub x0: i32,
    /// Top edge.
    pub y0: i32,
    /// Right edge.
    pub x1: i32,
    /// Bottom edge.
    pub y1: i32,
}

impl Viewport {
    /// Create a viewport from two corners. No validation is done here.
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// True when the viewport has positive width and height.
    pub fn is_valid(&self) -> bool {
        !self.to_aabb().is_degenerate()
    }

    /// The viewport as a Kurbo rectangle.
    pub fn to_rect(self) -> Rect {
        Rect::new(
            f64::from(self.x0),
            f64::from(self.y0),
            f64::from(self.x1),
            f64::from(self.y1),
        )
    }

    pub(crate) fn to_aabb(self) -> Aabb2D<f64> {
        rect_to_aabb(self.to_rect())
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})-({}, {})", self.x0, self.y0, self.x1, self.y1)
    }
}

pub(crate) fn rect_to_aabb(r: Rect) -> Aabb2D<f64> {
    Aabb2D::new(r.x0, r.y0, r.x1, r.y1)
}
