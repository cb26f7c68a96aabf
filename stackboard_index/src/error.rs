// Copyright 2025 the Stackboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by the z-order index.

/// Failure to place an entry in a [`ZOrder`](crate::ZOrder).
///
/// The index is never modified when one of these is returned.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ZOrderError {
    /// Placing or shifting would need a z-index above `i32::MAX`.
    #[error("z-index overflow: no slot above {z}")]
    Overflow {
        /// The highest z-index that would have had to move up.
        z: i32,
    },
}
