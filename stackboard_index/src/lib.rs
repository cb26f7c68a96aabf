// Copyright 2025 the Stackboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stackboard Index: an ordered, unique z-order index with viewport containment tests.
//!
//! Stackboard Index is the building block underneath a widget store.
//!
//! - [`ZOrder`] maps each occupied z-index to one payload and iterates bottom to top.
//! - Placing a payload at an occupied z-index shifts the contiguous run above it by one
//!   ([`ZOrder::place`], or [`ZOrder::plan_shift`] + [`ZOrder::apply_shift`] when the caller
//!   needs to check other preconditions in between).
//! - [`spatial::contains`] and [`spatial::contained_in`] keep only boxes lying fully inside a
//!   viewport, in whatever order they are fed.
//!
//! It is generic over the payload and does not depend on any geometry crate.
//! Higher layers compute an [`Aabb2D`] per record and feed it here.
//!
//! # Example
//!
//! ```rust
//! use stackboard_index::{Aabb2D, ZOrder, spatial};
//!
//! let mut order: ZOrder<u32> = ZOrder::new();
//! order.place(0, 1).unwrap();
//! order.place(1, 2).unwrap();
//!
//! // Dropping a third payload at the bottom pushes the others up.
//! let moved = order.place(0, 3).unwrap();
//! assert_eq!(moved.len(), 2);
//! assert_eq!(order.values().collect::<Vec<_>>(), [3, 1, 2]);
//!
//! // Keep what fits inside a viewport, bottom to top.
//! let boxes = [Aabb2D::new(0, 0, 4, 4), Aabb2D::new(8, 8, 12, 12), Aabb2D::new(1, 1, 2, 2)];
//! let viewport = Aabb2D::new(0, 0, 10, 10);
//! let hits: Vec<_> = spatial::contained_in(
//!     viewport,
//!     order.values().map(|p| (boxes[p as usize - 1], p)),
//!     10,
//! )
//! .collect();
//! assert_eq!(hits, [3, 1]);
//! ```
//!
//! ### Integer range
//!
//! Z-indices are `i32`. Shifting a run that already reaches `i32::MAX`, or asking for the slot
//! above an index whose top is `i32::MAX`, fails with [`ZOrderError::Overflow`] and leaves the
//! index untouched.

#![no_std]

extern crate alloc;

pub mod error;
pub mod spatial;
pub mod types;
pub mod zorder;

pub use error::ZOrderError;
pub use types::Aabb2D;
pub use zorder::{Shift, ShiftPlan, ZOrder};
