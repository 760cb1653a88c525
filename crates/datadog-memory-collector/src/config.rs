// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use crate::error::ConfigError;
use std::env;

/// Configuration for the memory metrics collector
#[derive(Debug, Clone, PartialEq)]
pub struct CollectorConfig {
    /// Interval in seconds between collections (the caller owns the schedule)
    pub collection_interval_secs: u64,
    /// Whether to emit per-pool gauges in addition to the aggregate areas
    pub per_pool_metrics: bool,
    /// Tags attached to every emitted gauge sample
    pub extra_tags: Vec<(String, String)>,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            collection_interval_secs: 10,
            per_pool_metrics: true,
            extra_tags: Vec::new(),
        }
    }
}

impl CollectorConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let collection_interval_secs = env::var("DD_MEMORY_COLLECTION_INTERVAL_SECS")
            .ok()
            .and_then(|val| val.parse::<u64>().ok())
            .unwrap_or(10);
        let per_pool_metrics = env::var("DD_MEMORY_PER_POOL_METRICS")
            .map(|val| val.to_lowercase() != "false")
            .unwrap_or(true);
        let extra_tags = match env::var("DD_MEMORY_EXTRA_TAGS") {
            Ok(val) => parse_tags(&val)?,
            Err(_) => Vec::new(),
        };

        let config = Self {
            collection_interval_secs,
            per_pool_metrics,
            extra_tags,
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.collection_interval_secs == 0 {
            return Err(ConfigError::InvalidInterval(self.collection_interval_secs));
        }
        for (key, value) in &self.extra_tags {
            if key.is_empty() || value.is_empty() {
                return Err(ConfigError::InvalidTag(format!("{key}:{value}")));
            }
        }
        Ok(())
    }
}

/// Parses a `key:value,key:value` tag list. Empty input yields no tags;
/// entries without a colon or with an empty side are rejected.
fn parse_tags(raw: &str) -> Result<Vec<(String, String)>, ConfigError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    let mut tags = Vec::new();
    for entry in trimmed.split(',') {
        let (key, value) = entry
            .split_once(':')
            .ok_or_else(|| ConfigError::InvalidTag(entry.to_string()))?;
        if key.is_empty() || value.is_empty() {
            return Err(ConfigError::InvalidTag(entry.to_string()));
        }
        tags.push((key.to_string(), value.to_string()));
    }
    Ok(tags)
}
