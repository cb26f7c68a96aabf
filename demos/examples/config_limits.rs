// Copyright 2025 the Stackboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loading store limits from TOML and serving list requests against them.
//!
//! Run:
//! - `cargo run -p stackboard_demos --example config_limits`

use stackboard_store::{ListRequest, NewWidget, Store, StoreConfig};
use tracing_subscriber::EnvFilter;

const CONFIG: &str = r#"
default_limit = 3
max_limit = 5
"#;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = StoreConfig::from_toml_str(CONFIG).unwrap();
    let store = Store::with_config(config);
    for i in 0..8 {
        store
            .create(NewWidget {
                x: i * 10,
                y: 0,
                z_index: None,
                width: 4,
                height: 4,
            })
            .unwrap();
    }

    let requests = [
        ListRequest::default(),
        ListRequest::with_limit(5),
        ListRequest::with_limit(6),
        ListRequest::from_params(Some(5), Some(-5), Some(-5), Some(25), Some(5)),
    ];
    for request in requests {
        match store.list(&request) {
            Ok(widgets) => {
                let ids: Vec<_> = widgets.iter().map(|w| w.id.get()).collect();
                println!("{request:?} -> {ids:?}");
            }
            Err(err) => println!("{request:?} -> {:?}: {err}", err.kind()),
        }
    }
}
