// Copyright 2025 the Stackboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewport containment filtering.
//!
//! These are pure functions: they inspect boxes handed to them and keep no state.
//! Ordering is whatever the input iterator yields, so feeding them
//! [`ZOrder::iter`](crate::ZOrder::iter)-ordered items keeps results in stacking order.

use crate::types::Aabb2D;

/// True if `inner` lies fully within `viewport`, edges included.
///
/// A box touching the viewport edge counts as contained; a box that crosses any edge does not.
#[inline]
pub fn contains<T: Copy + PartialOrd>(viewport: &Aabb2D<T>, inner: &Aabb2D<T>) -> bool {
    viewport.contains_aabb(inner)
}

/// Keep the payloads whose box is contained in `viewport`, stopping after `limit` matches.
///
/// `limit` bounds matched results, not scanned candidates: the input may be walked to the end.
pub fn contained_in<T, P, I>(viewport: Aabb2D<T>, items: I, limit: usize) -> impl Iterator<Item = P>
where
    T: Copy + PartialOrd,
    I: IntoIterator<Item = (Aabb2D<T>, P)>,
{
    items
        .into_iter()
        .filter(move |(aabb, _)| contains(&viewport, aabb))
        .map(|(_, payload)| payload)
        .take(limit)
}
