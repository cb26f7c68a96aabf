// Copyright 2025 the Stackboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Widget identifier allocation.

use core::fmt::Debug;
use core::sync::atomic::{AtomicU64, Ordering};

use crate::types::WidgetId;

/// Source of fresh widget identifiers.
///
/// Implementations must never hand out the same identifier twice.
/// Returning `None` means the space is exhausted; the store reports that as an error.
pub trait IdAllocator: Debug + Send + Sync {
    /// Allocate the next identifier.
    fn next_id(&self) -> Option<WidgetId>;
}

/// Monotonic counter starting at a chosen value.
#[derive(Debug, Default)]
pub struct SequentialIds {
    next: AtomicU64,
}

impl SequentialIds {
    /// A counter whose first identifier is `0`.
    pub const fn new() -> Self {
        Self::starting_at(0)
    }

    /// A counter whose first identifier is `first`.
    pub const fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }
}

impl IdAllocator for SequentialIds {
    fn next_id(&self) -> Option<WidgetId> {
        // `u64::MAX` is kept as the exhausted marker so the counter never wraps.
        self.next
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |n| n.checked_add(1))
            .ok()
            .map(WidgetId)
    }
}
