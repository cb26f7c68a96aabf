// Copyright 2025 the Stackboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors returned by the store.

use stackboard_index::ZOrderError;

use crate::types::{Viewport, WidgetId};

/// Convenience alias for store results.
pub type Result<T, E = StoreError> = core::result::Result<T, E>;

/// Coarse classification of a [`StoreError`], for mapping onto a response status.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The identifier has no live widget.
    NotFound,
    /// The caller passed something the store cannot act on.
    InvalidInput,
}

/// Failure of a store operation.
///
/// A failed operation never leaves a partial write behind.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No live widget has this identifier.
    #[error("widget {id} not found")]
    NotFound {
        /// Identifier that was looked up.
        id: WidgetId,
    },
    /// The viewport has no area.
    #[error("invalid viewport {viewport}: x1 must exceed x0 and y1 must exceed y0")]
    InvalidViewport {
        /// The rejected viewport.
        viewport: Viewport,
    },
    /// A result limit of zero was requested.
    #[error("limit must be positive")]
    ZeroLimit,
    /// A result limit outside the configured range was requested.
    #[error("limit {limit} is outside 1..={max}")]
    LimitOutOfRange {
        /// The rejected limit.
        limit: usize,
        /// Configured upper bound.
        max: usize,
    },
    /// A widget with zero width or height was submitted.
    #[error("width and height must be positive (got {width}x{height})")]
    ZeroSize {
        /// Submitted width.
        width: u32,
        /// Submitted height.
        height: u32,
    },
    /// The z-index range is exhausted.
    #[error(transparent)]
    ZIndexOverflow(#[from] ZOrderError),
    /// The id allocator has no identifiers left.
    #[error("widget identifiers exhausted")]
    IdsExhausted,
    /// A configuration document could not be parsed.
    #[error("invalid store configuration: {0}")]
    Config(#[from] toml::de::Error),
    /// A configuration document parsed but holds inconsistent limits.
    #[error("invalid store configuration: {0}")]
    ConfigLimits(&'static str),
}

impl StoreError {
    /// The coarse kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::InvalidViewport { .. }
            | Self::ZeroLimit
            | Self::LimitOutOfRange { .. }
            | Self::ZeroSize { .. }
            | Self::ZIndexOverflow(_)
            | Self::IdsExhausted
            | Self::Config(_)
            | Self::ConfigLimits(_) => ErrorKind::InvalidInput,
        }
    }

    /// True for [`ErrorKind::NotFound`].
    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }
}
