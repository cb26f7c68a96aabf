// Copyright 2025 the Stackboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stackboard Store: a thread-safe, in-memory store of stacked rectangular widgets.
//!
//! Widgets live on an unbounded integer plane. Each has a center, a size, and a z-index that is
//! unique among live widgets; a lower z-index renders beneath a higher one.
//!
//! - [`Store::create`] assigns an identifier and places the widget on top, or at a requested
//!   z-index, pushing the contiguous run of widgets already there up by one.
//! - [`Store::update`] replaces every field of a widget, including its z-index.
//! - [`Store::delete`] removes a widget and leaves a gap in the stacking order.
//! - [`Store::find_by_id`], [`Store::find_with_limit`], and [`Store::find_with_rectangle`]
//!   read widgets back, the latter two bottom to top.
//! - [`Store::list`] serves a [`ListRequest`] with the limits from a [`StoreConfig`].
//!
//! Failures are [`StoreError`]s; [`StoreError::kind`] tells "not found" apart from bad input.
//! A failed call never leaves a partial write behind.
//!
//! ## Layers
//!
//! The ordering and collision logic lives in [`stackboard_index`], which is `no_std` and knows
//! nothing about widgets. This crate adds the record table, identifier allocation, timestamps,
//! configuration, and the lock that makes every write atomic.
//!
//! ## Injected parts
//!
//! Identifier allocation ([`IdAllocator`]) and time ([`Clock`]) are passed in at construction
//! with [`Store::with_parts`], so tests can pin both.
//!
//! ## Logging
//!
//! Writes emit `tracing` events at `INFO`; shifts and queries emit `DEBUG` events. Install a
//! subscriber to see them.
//!
//! # Example
//!
//! ```rust
//! use stackboard_store::{NewWidget, Store, WidgetUpdate};
//!
//! let store = Store::new();
//! let w1 = store.create(NewWidget { x: 0, y: 0, width: 4, height: 4, z_index: None }).unwrap();
//! let w2 = store.create(NewWidget { x: 8, y: 0, width: 4, height: 4, z_index: None }).unwrap();
//! assert_eq!((w1.z_index, w2.z_index), (0, 1));
//!
//! // Bring w2 to the bottom; w1 is shifted up.
//! let mut update = WidgetUpdate::from_widget(&w2);
//! update.z_index = Some(0);
//! store.update(update).unwrap();
//! assert_eq!(store.find_by_id(w1.id).unwrap().z_index, 1);
//!
//! store.delete(w1.id).unwrap();
//! assert!(store.find_by_id(w1.id).unwrap_err().is_not_found());
//! ```

pub mod clock;
pub mod config;
pub mod error;
pub mod ids;
pub mod query;
pub mod store;
pub mod table;
pub mod types;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::StoreConfig;
pub use error::{ErrorKind, Result, StoreError};
pub use ids::{IdAllocator, SequentialIds};
pub use query::ListRequest;
pub use store::Store;
pub use table::RecordTable;
pub use types::{NewWidget, Viewport, Widget, WidgetId, WidgetUpdate};
