// Copyright 2025 the Stackboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! List requests as they arrive from a request layer.

use serde::{Deserialize, Serialize};

use crate::types::Viewport;

/// A bounded list query, optionally restricted to a viewport.
///
/// Served by [`Store::list`](crate::Store::list), which applies the
/// [`StoreConfig`](crate::StoreConfig) limits.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListRequest {
    /// Maximum number of widgets to return. `None` uses the configured default.
    #[serde(default)]
    pub limit: Option<usize>,
    /// Only return widgets fully inside this viewport.
    #[serde(default)]
    pub viewport: Option<Viewport>,
}

impl ListRequest {
    /// Request at most `limit` widgets in stacking order.
    pub const fn with_limit(limit: usize) -> Self {
        Self {
            limit: Some(limit),
            viewport: None,
        }
    }

    /// Restrict the request to `viewport`.
    #[must_use]
    pub const fn within(mut self, viewport: Viewport) -> Self {
        self.viewport = Some(viewport);
        self
    }

    /// Build a request from loose query parameters.
    ///
    /// The viewport filter only applies when all four corners are present; a partial set of
    /// corners is ignored and the request lists by limit alone.
    pub fn from_params(
        limit: Option<usize>,
        x0: Option<i32>,
        y0: Option<i32>,
        x1: Option<i32>,
        y1: Option<i32>,
    ) -> Self {
        let viewport = match (x0, y0, x1, y1) {
            (Some(x0), Some(y0), Some(x1), Some(y1)) => Some(Viewport::new(x0, y0, x1, y1)),
            _ => None,
        };
        Self { limit, viewport }
    }
}
