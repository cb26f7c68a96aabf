// Copyright 2025 the Stackboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canonical widget records keyed by identifier.

use std::collections::HashMap;

use crate::types::{Widget, WidgetId};

/// Keyed record storage.
///
/// This is a plain map with no validation: keeping it consistent with the z-order index is
/// the job of [`Store`](crate::Store), which owns both behind one lock.
#[derive(Clone, Debug, Default)]
pub struct RecordTable {
    records: HashMap<WidgetId, Widget>,
}

impl RecordTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if there are no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record for `id`.
    pub fn get(&self, id: WidgetId) -> Option<&Widget> {
        self.records.get(&id)
    }

    /// Mutable record for `id`.
    pub fn get_mut(&mut self, id: WidgetId) -> Option<&mut Widget> {
        self.records.get_mut(&id)
    }

    /// Whether `id` has a record.
    pub fn contains(&self, id: WidgetId) -> bool {
        self.records.contains_key(&id)
    }

    /// Store `widget` under its own id, returning the record it replaced.
    pub fn put(&mut self, widget: Widget) -> Option<Widget> {
        self.records.insert(widget.id, widget)
    }

    /// Remove and return the record for `id`.
    pub fn remove(&mut self, id: WidgetId) -> Option<Widget> {
        self.records.remove(&id)
    }
}
