// Copyright 2025 the Stackboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Store configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Result, StoreError};

/// Limits applied to list queries arriving through [`Store::list`](crate::Store::list).
///
/// The direct finders ([`Store::find_with_limit`](crate::Store::find_with_limit) and
/// [`Store::find_with_rectangle`](crate::Store::find_with_rectangle)) accept any positive limit.
///
/// ```
/// use stackboard_store::StoreConfig;
///
/// let config = StoreConfig::from_toml_str("max_limit = 50").unwrap();
/// assert_eq!(config.default_limit, 10);
/// assert_eq!(config.max_limit, 50);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
    /// Limit used when a list request names none.
    pub default_limit: usize,
    /// Largest limit a list request may ask for.
    pub max_limit: usize,
}

impl StoreConfig {
    /// Default for [`default_limit`](Self::default_limit).
    pub const DEFAULT_LIMIT: usize = 10;
    /// Default for [`max_limit`](Self::max_limit).
    pub const MAX_LIMIT: usize = 500;

    /// Parse and validate a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the limits are usable.
    pub fn validate(&self) -> Result<()> {
        if self.default_limit == 0 {
            return Err(StoreError::ConfigLimits("default_limit must be positive"));
        }
        if self.default_limit > self.max_limit {
            return Err(StoreError::ConfigLimits(
                "default_limit must not exceed max_limit",
            ));
        }
        Ok(())
    }

    /// The limit to use for a request: `requested`, or the default when absent.
    pub fn resolve_limit(&self, requested: Option<usize>) -> Result<usize> {
        match requested {
            None => Ok(self.default_limit),
            Some(0) => Err(StoreError::ZeroLimit),
            Some(limit) if limit > self.max_limit => Err(StoreError::LimitOutOfRange {
                limit,
                max: self.max_limit,
            }),
            Some(limit) => Ok(limit),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            default_limit: Self::DEFAULT_LIMIT,
            max_limit: Self::MAX_LIMIT,
        }
    }
}
