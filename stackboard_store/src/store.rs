// Copyright 2025 the Stackboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The widget store: record table and z-order index behind one lock.

use parking_lot::RwLock;
use stackboard_index::{ShiftPlan, ZOrder, ZOrderError, spatial};
use time::OffsetDateTime;
use tracing::{debug, info};

use crate::clock::{Clock, SystemClock};
use crate::config::StoreConfig;
use crate::error::{Result, StoreError};
use crate::ids::{IdAllocator, SequentialIds};
use crate::query::ListRequest;
use crate::table::RecordTable;
use crate::types::{NewWidget, Viewport, Widget, WidgetId, WidgetUpdate, rect_to_aabb};

/// Everything a write has to keep consistent. Only ever touched under [`Store::state`].
#[derive(Debug, Default)]
struct State {
    table: RecordTable,
    order: ZOrder<WidgetId>,
}

impl State {
    /// Apply a planned shift to both structures. Returns the number of widgets moved.
    fn apply_shift(&mut self, plan: Option<ShiftPlan>) -> usize {
        let Some(plan) = plan else {
            return 0;
        };
        let moved = self.order.apply_shift(plan);
        for shift in &moved {
            let record = self.table.get_mut(shift.payload);
            debug_assert!(record.is_some(), "index entry without record");
            if let Some(widget) = record {
                widget.z_index = shift.to;
            }
        }
        debug!(
            start = plan.start(),
            end = plan.end(),
            moved = moved.len(),
            "shifted z-order run"
        );
        moved.len()
    }

    fn insert(&mut self, widget: Widget) {
        let displaced = self.order.insert(widget.z_index, widget.id);
        debug_assert!(displaced.is_none(), "z-index {} was occupied", widget.z_index);
        self.table.put(widget);
    }
}

/// Pick the z-index for a write and plan the shift that frees it, without mutating anything.
fn plan_placement(
    order: &ZOrder<WidgetId>,
    requested: Option<i32>,
) -> Result<(i32, Option<ShiftPlan>), ZOrderError> {
    let z = match requested {
        Some(z) => z,
        None => order.next_top()?,
    };
    Ok((z, order.plan_shift(z)?))
}

fn check_size(width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(StoreError::ZeroSize { width, height });
    }
    Ok(())
}

/// Thread-safe in-memory widget store.
///
/// Every live widget occupies exactly one z-index and every occupied z-index belongs to exactly
/// one live widget. Writes hold an exclusive lock for their whole duration (id allocation,
/// collision shift and insertion included); reads share the lock, so they never observe a
/// half-applied write.
///
/// Share it between threads with an `Arc`.
///
/// ```
/// use stackboard_store::{NewWidget, Store, Viewport};
///
/// let store = Store::new();
/// let a = store.create(NewWidget { x: 0, y: 0, width: 10, height: 10, z_index: None }).unwrap();
/// let b = store.create(NewWidget { x: 50, y: 50, width: 10, height: 10, z_index: Some(0) }).unwrap();
///
/// // `b` took z-index 0, pushing `a` up.
/// let ids: Vec<_> = store.find_with_limit(10).unwrap().iter().map(|w| w.id).collect();
/// assert_eq!(ids, [b.id, a.id]);
///
/// let visible = store.find_with_rectangle(Viewport::new(-5, -5, 5, 5), 10).unwrap();
/// assert_eq!(visible.len(), 1);
/// assert_eq!(visible[0].id, a.id);
/// ```
#[derive(Debug)]
pub struct Store {
    state: RwLock<State>,
    ids: Box<dyn IdAllocator>,
    clock: Box<dyn Clock>,
    config: StoreConfig,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    /// Create an empty store with default limits, ids counting from `0`, and wall-clock stamps.
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    /// Create an empty store with the given limits.
    pub fn with_config(config: StoreConfig) -> Self {
        Self::with_parts(config, SequentialIds::new(), SystemClock)
    }

    /// Create an empty store with explicit id allocation and time source.
    pub fn with_parts(
        config: StoreConfig,
        ids: impl IdAllocator + 'static,
        clock: impl Clock + 'static,
    ) -> Self {
        Self {
            state: RwLock::new(State::default()),
            ids: Box::new(ids),
            clock: Box::new(clock),
            config,
        }
    }

    /// Limits used by [`list`](Self::list).
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Number of live widgets.
    pub fn len(&self) -> usize {
        self.state.read().table.len()
    }

    /// True if there are no live widgets.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Create a widget and return it as stored.
    ///
    /// Without a requested z-index the widget goes on top (`0` in an empty store). A requested
    /// z-index that is taken pushes the contiguous run starting there up by one.
    pub fn create(&self, new: NewWidget) -> Result<Widget> {
        check_size(new.width, new.height)?;
        let mut state = self.state.write();
        let (z_index, plan) = plan_placement(&state.order, new.z_index)?;
        let id = self.ids.next_id().ok_or(StoreError::IdsExhausted)?;
        let updated_at = self.now();
        let shifted = state.apply_shift(plan);
        let widget = Widget {
            id,
            x: new.x,
            y: new.y,
            z_index,
            width: new.width,
            height: new.height,
            updated_at,
        };
        state.insert(widget.clone());
        drop(state);
        info!(%id, z_index, shifted, "created widget");
        Ok(widget)
    }

    /// Replace every field of an existing widget and return it as stored.
    ///
    /// The widget's old z-index is released first, so moving onto a slot it already holds never
    /// shifts anything. Without a requested z-index the widget goes on top of the others.
    pub fn update(&self, update: WidgetUpdate) -> Result<Widget> {
        check_size(update.width, update.height)?;
        let id = update.id;
        let mut state = self.state.write();
        let Some(old_z) = state.table.get(id).map(|w| w.z_index) else {
            return Err(StoreError::NotFound { id });
        };
        state.order.remove(old_z);
        let (z_index, plan) = match plan_placement(&state.order, update.z_index) {
            Ok(placement) => placement,
            Err(err) => {
                state.order.insert(old_z, id);
                return Err(err.into());
            }
        };
        let updated_at = self.now();
        let shifted = state.apply_shift(plan);
        let widget = Widget {
            id,
            x: update.x,
            y: update.y,
            z_index,
            width: update.width,
            height: update.height,
            updated_at,
        };
        state.insert(widget.clone());
        drop(state);
        info!(%id, old_z, z_index, shifted, "updated widget");
        Ok(widget)
    }

    /// Delete a widget. Its z-index becomes a gap; nothing else moves.
    pub fn delete(&self, id: WidgetId) -> Result<()> {
        let mut state = self.state.write();
        let Some(z_index) = state.table.get(id).map(|w| w.z_index) else {
            return Err(StoreError::NotFound { id });
        };
        let removed = state.order.remove(z_index);
        debug_assert_eq!(removed, Some(id), "index out of sync for {id}");
        state.table.remove(id);
        drop(state);
        info!(%id, z_index, "deleted widget");
        Ok(())
    }

    /// The widget with this identifier.
    pub fn find_by_id(&self, id: WidgetId) -> Result<Widget> {
        self.state
            .read()
            .table
            .get(id)
            .cloned()
            .ok_or(StoreError::NotFound { id })
    }

    /// Up to `limit` widgets in ascending z-index order.
    pub fn find_with_limit(&self, limit: usize) -> Result<Vec<Widget>> {
        if limit == 0 {
            return Err(StoreError::ZeroLimit);
        }
        let state = self.state.read();
        let found: Vec<Widget> = state
            .order
            .values()
            .take(limit)
            .filter_map(|id| state.table.get(id).cloned())
            .collect();
        debug!(limit, found = found.len(), "listed widgets");
        Ok(found)
    }

    /// Up to `limit` widgets lying fully inside `viewport`, in ascending z-index order.
    ///
    /// `limit` bounds the matches, not the widgets examined.
    pub fn find_with_rectangle(&self, viewport: Viewport, limit: usize) -> Result<Vec<Widget>> {
        let query = viewport.to_aabb();
        if query.is_degenerate() {
            return Err(StoreError::InvalidViewport { viewport });
        }
        if limit == 0 {
            return Err(StoreError::ZeroLimit);
        }
        let state = self.state.read();
        let candidates = state
            .order
            .values()
            .filter_map(|id| state.table.get(id))
            .map(|w| (rect_to_aabb(w.bounds()), w));
        let found: Vec<Widget> = spatial::contained_in(query, candidates, limit)
            .cloned()
            .collect();
        debug!(%viewport, limit, found = found.len(), "listed widgets in viewport");
        Ok(found)
    }

    /// Serve a list request, applying the configured default and maximum limit.
    pub fn list(&self, request: &ListRequest) -> Result<Vec<Widget>> {
        let limit = self.config.resolve_limit(request.limit)?;
        match request.viewport {
            Some(viewport) => self.find_with_rectangle(viewport, limit),
            None => self.find_with_limit(limit),
        }
    }

    fn now(&self) -> OffsetDateTime {
        self.clock.now()
    }
}
