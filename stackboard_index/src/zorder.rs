// Copyright 2025 the Stackboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered, unique z-index map and the collision shift that keeps it unique.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use core::fmt::Debug;
use core::ops::Bound;

use crate::error::ZOrderError;

/// One entry moved by a collision shift.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Shift<P> {
    /// The payload that moved.
    pub payload: P,
    /// Z-index the payload occupied before the shift.
    pub from: i32,
    /// Z-index the payload occupies now (`from + 1`).
    pub to: i32,
}

/// A contiguous occupied run `start..=end` that has to move up by one to free `start`.
///
/// Produced by [`ZOrder::plan_shift`]. Planning never mutates, so callers can verify
/// every other precondition of a write before calling [`ZOrder::apply_shift`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ShiftPlan {
    start: i32,
    end: i32,
}

impl ShiftPlan {
    /// Lowest z-index in the run; free once the plan is applied.
    pub const fn start(&self) -> i32 {
        self.start
    }

    /// Highest z-index in the run; it moves to `end + 1`.
    pub const fn end(&self) -> i32 {
        self.end
    }

    /// Number of entries the plan moves.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "A run never holds more entries than the index, which fits in usize."
    )]
    pub const fn len(&self) -> usize {
        (self.end as i64 - self.start as i64 + 1) as usize
    }

    /// Plans always move at least one entry.
    pub const fn is_empty(&self) -> bool {
        false
    }
}

/// Ordered map from z-index to payload, unique on both sides by construction of its callers.
///
/// Ascending iteration yields payloads bottom to top. Gaps are allowed and skipped.
///
/// ## Collisions
///
/// Placing a payload at an occupied z-index shifts the contiguous run starting there up by one.
/// The run ends at the first free z-index; entries above that gap never move, which keeps the
/// cost proportional to the run instead of the whole index.
///
/// ```
/// use stackboard_index::ZOrder;
///
/// let mut order = ZOrder::new();
/// order.place(0, 'a').unwrap();
/// order.place(1, 'b').unwrap();
/// order.place(5, 'c').unwrap();
///
/// let moved = order.place(0, 'd').unwrap();
/// assert_eq!(moved.len(), 2);
/// assert_eq!(order.iter().collect::<Vec<_>>(), [(0, 'd'), (1, 'a'), (2, 'b'), (5, 'c')]);
/// ```
#[derive(Clone)]
pub struct ZOrder<P> {
    slots: BTreeMap<i32, P>,
}

impl<P> Default for ZOrder<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> Debug for ZOrder<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ZOrder")
            .field("len", &self.slots.len())
            .field("min_z", &self.slots.first_key_value().map(|(z, _)| *z))
            .field("max_z", &self.slots.last_key_value().map(|(z, _)| *z))
            .finish_non_exhaustive()
    }
}

impl<P> ZOrder<P> {
    /// Create an empty index.
    pub const fn new() -> Self {
        Self {
            slots: BTreeMap::new(),
        }
    }

    /// Number of occupied z-indices.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True if no z-index is occupied.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Whether `z` is occupied.
    pub fn contains(&self, z: i32) -> bool {
        self.slots.contains_key(&z)
    }

    /// Lowest occupied z-index.
    pub fn min_z(&self) -> Option<i32> {
        self.slots.first_key_value().map(|(z, _)| *z)
    }

    /// Highest occupied z-index.
    pub fn max_z(&self) -> Option<i32> {
        self.slots.last_key_value().map(|(z, _)| *z)
    }

    /// Smallest occupied z-index strictly greater than `z`.
    pub fn next_after(&self, z: i32) -> Option<i32> {
        self.slots
            .range((Bound::Excluded(z), Bound::Unbounded))
            .next()
            .map(|(k, _)| *k)
    }

    /// The z-index just above the current top, or `0` for an empty index.
    pub fn next_top(&self) -> Result<i32, ZOrderError> {
        match self.max_z() {
            None => Ok(0),
            Some(top) => top.checked_add(1).ok_or(ZOrderError::Overflow { z: top }),
        }
    }

    /// Remove the entry at `z`, returning its payload.
    pub fn remove(&mut self, z: i32) -> Option<P> {
        self.slots.remove(&z)
    }

    /// Last z-index of the contiguous occupied run starting at `z`, if `z` is occupied.
    pub fn run_end(&self, z: i32) -> Option<i32> {
        if !self.contains(z) {
            return None;
        }
        let mut end = z;
        while let Some(next) = self.next_after(end) {
            if end.checked_add(1) != Some(next) {
                break;
            }
            end = next;
        }
        Some(end)
    }

    /// Work out which run must move to free `z`, without touching the index.
    ///
    /// Returns `Ok(None)` when `z` is already free, and an overflow error when the run
    /// reaches `i32::MAX` and has nowhere to go.
    pub fn plan_shift(&self, z: i32) -> Result<Option<ShiftPlan>, ZOrderError> {
        let Some(end) = self.run_end(z) else {
            return Ok(None);
        };
        if end == i32::MAX {
            return Err(ZOrderError::Overflow { z: end });
        }
        Ok(Some(ShiftPlan { start: z, end }))
    }
}

impl<P: Copy> ZOrder<P> {
    /// Payload at `z`.
    pub fn get(&self, z: i32) -> Option<P> {
        self.slots.get(&z).copied()
    }

    /// Put `payload` at `z` without any collision handling, returning what was there.
    pub fn insert(&mut self, z: i32, payload: P) -> Option<P> {
        self.slots.insert(z, payload)
    }

    /// Payloads in ascending z order.
    pub fn values(&self) -> impl DoubleEndedIterator<Item = P> + '_ {
        self.slots.values().copied()
    }

    /// `(z, payload)` pairs in ascending z order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (i32, P)> + '_ {
        self.slots.iter().map(|(z, p)| (*z, *p))
    }

    /// Move every entry of `plan` up by one, highest first.
    ///
    /// `plan` must come from [`plan_shift`](Self::plan_shift) on this index with no
    /// mutation in between.
    pub fn apply_shift(&mut self, plan: ShiftPlan) -> Vec<Shift<P>> {
        let mut moved = Vec::with_capacity(plan.len());
        for from in (plan.start..=plan.end).rev() {
            let payload = self.slots.remove(&from);
            debug_assert!(payload.is_some(), "stale shift plan: {from} is free");
            let Some(payload) = payload else {
                continue;
            };
            // `end < i32::MAX` was checked when planning.
            let to = from + 1;
            let displaced = self.slots.insert(to, payload);
            debug_assert!(displaced.is_none(), "shift overwrote z-index {to}");
            moved.push(Shift { payload, from, to });
        }
        moved
    }

    /// Free `z` by shifting its run up by one. No-op if `z` is already free.
    pub fn shift_up(&mut self, z: i32) -> Result<Vec<Shift<P>>, ZOrderError> {
        Ok(match self.plan_shift(z)? {
            Some(plan) => self.apply_shift(plan),
            None => Vec::new(),
        })
    }
}

impl<P: Copy + PartialEq> ZOrder<P> {
    /// Put `payload` at `z`, shifting any different occupant (and its run) up first.
    ///
    /// Returns the entries that moved. Placing a payload where it already sits moves nothing.
    pub fn place(&mut self, z: i32, payload: P) -> Result<Vec<Shift<P>>, ZOrderError> {
        if self.get(z) == Some(payload) {
            return Ok(Vec::new());
        }
        let moved = self.shift_up(z)?;
        self.slots.insert(z, payload);
        Ok(moved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;

    fn order_of(entries: &[(i32, u32)]) -> ZOrder<u32> {
        let mut order = ZOrder::new();
        for &(z, p) in entries {
            order.insert(z, p);
        }
        order
    }

    #[test]
    fn next_top_starts_at_zero() {
        let mut order = ZOrder::new();
        assert_eq!(order.next_top(), Ok(0));
        order.insert(-7, 1_u32);
        assert_eq!(order.next_top(), Ok(-6));
        order.insert(i32::MAX, 2);
        assert_eq!(order.next_top(), Err(ZOrderError::Overflow { z: i32::MAX }));
    }

    #[test]
    fn run_stops_at_first_gap() {
        let order = order_of(&[(0, 1), (1, 2), (2, 3), (4, 4), (5, 5)]);
        assert_eq!(order.run_end(0), Some(2));
        assert_eq!(order.run_end(1), Some(2));
        assert_eq!(order.run_end(4), Some(5));
        assert_eq!(order.run_end(3), None);
    }

    #[test]
    fn run_end_reaches_max_without_wrapping() {
        let mut order = ZOrder::new();
        for z in [i32::MAX - 2, i32::MAX - 1, i32::MAX, i32::MIN] {
            order.insert(z, z);
        }
        assert_eq!(order.run_end(i32::MAX - 2), Some(i32::MAX));
        assert_eq!(order.run_end(i32::MIN), Some(i32::MIN));
        assert!(order.plan_shift(i32::MAX - 2).is_err());
    }

    #[test]
    fn shift_moves_run_and_leaves_rest() {
        let mut order = order_of(&[(0, 1), (1, 2), (2, 3), (4, 4), (5, 5)]);
        let moved = order.shift_up(0).unwrap();
        assert_eq!(
            moved,
            vec![
                Shift {
                    payload: 3,
                    from: 2,
                    to: 3
                },
                Shift {
                    payload: 2,
                    from: 1,
                    to: 2
                },
                Shift {
                    payload: 1,
                    from: 0,
                    to: 1
                },
            ],
            "highest entry moves first"
        );
        assert!(!order.contains(0));
        let all: Vec<_> = order.iter().collect();
        assert_eq!(all, vec![(1, 1), (2, 2), (3, 3), (4, 4), (5, 5)]);
    }

    #[test]
    fn shift_on_free_slot_is_noop() {
        let mut order = order_of(&[(0, 1), (2, 2)]);
        assert!(order.shift_up(1).unwrap().is_empty());
        assert_eq!(order.len(), 2);
    }

    #[test]
    fn shift_into_max_overflows_without_mutating() {
        let mut order = order_of(&[(i32::MAX - 1, 1), (i32::MAX, 2)]);
        assert_eq!(
            order.shift_up(i32::MAX - 1),
            Err(ZOrderError::Overflow { z: i32::MAX })
        );
        assert_eq!(order.get(i32::MAX - 1), Some(1));
        assert_eq!(order.get(i32::MAX), Some(2));
    }

    #[test]
    fn run_across_negative_indices() {
        let mut order = order_of(&[(-2, 1), (-1, 2), (0, 3), (1, 4)]);
        let plan = order.plan_shift(-2).unwrap().unwrap();
        assert_eq!((plan.start(), plan.end(), plan.len()), (-2, 1, 4));
        order.place(-2, 9).unwrap();
        let vals: Vec<_> = order.values().collect();
        assert_eq!(vals, vec![9, 1, 2, 3, 4]);
        assert_eq!(order.min_z(), Some(-2));
        assert_eq!(order.max_z(), Some(2));
    }

    #[test]
    fn place_same_payload_is_noop() {
        let mut order = order_of(&[(0, 1), (1, 2)]);
        assert!(order.place(0, 1).unwrap().is_empty());
        assert_eq!(order.get(1), Some(2));
    }

    #[test]
    fn next_after_skips_gaps() {
        let order = order_of(&[(0, 1), (3, 2)]);
        assert_eq!(order.next_after(0), Some(3));
        assert_eq!(order.next_after(3), None);
        assert_eq!(order.next_after(i32::MIN), Some(0));
        assert_eq!(order.next_after(i32::MAX), None);
    }

    #[test]
    fn values_restart_per_call() {
        let order = order_of(&[(2, 20), (1, 10)]);
        let first: Vec<_> = order.values().collect();
        let second: Vec<_> = order.values().collect();
        assert_eq!(first, vec![10, 20]);
        assert_eq!(first, second);
    }
}
