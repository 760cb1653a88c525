// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Gauge-sample collection over the runtime's memory pools.
//!
//! The collector walks the supplied pools plus the two aggregate areas on
//! each call and produces named gauge samples. It owns no schedule: the
//! surrounding framework invokes [`MemoryMetricsCollector::collect`] on its
//! own polling cadence and ships the samples however it likes.

use crate::config::CollectorConfig;
use crate::constants::{
    AREA_HEAP, AREA_NONHEAP, HEAP_USAGE_PERCENT_METRIC, POOL_COMMITTED_METRIC, POOL_MAX_METRIC,
    POOL_USED_METRIC, TOTAL_COMMITTED_METRIC, TOTAL_MAX_METRIC, TOTAL_USED_METRIC,
};
use crate::pool::{is_old_gen_pool, is_young_gen_pool};
use crate::runtime::{MemoryManager, MemoryPool, PoolKind};
use crate::usage::{heap_usage_percent, total_area_usage_value, usage_value};
use serde::Serialize;
use tracing::debug;

/// One named gauge reading with its tags, ready for submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GaugeSample {
    pub name: &'static str,
    pub value: f64,
    pub tags: Vec<(String, String)>,
}

/// Collects runtime memory gauges from a [`MemoryManager`] handle.
pub struct MemoryMetricsCollector<M> {
    manager: M,
    config: CollectorConfig,
}

impl<M: MemoryManager> MemoryMetricsCollector<M> {
    /// Creates a new MemoryMetricsCollector
    ///
    /// # Arguments
    ///
    /// * `manager` - The runtime's global memory-manager handle
    /// * `config` - Collector configuration
    pub fn new(manager: M, config: CollectorConfig) -> Self {
        Self { manager, config }
    }

    /// Collects one round of gauge samples from the supplied pools and the
    /// aggregate areas. Readings with no data this interval are skipped.
    pub fn collect<P: MemoryPool>(&self, pools: &[P]) -> Vec<GaugeSample> {
        let mut samples = Vec::new();

        if self.config.per_pool_metrics {
            for pool in pools {
                self.collect_pool(pool, &mut samples);
            }
        }

        for area in [AREA_HEAP, AREA_NONHEAP] {
            let mut tags = self.config.extra_tags.clone();
            tags.push(("area".to_string(), area.to_string()));
            push_sample(
                &mut samples,
                TOTAL_USED_METRIC,
                total_area_usage_value(&self.manager, |u| u.used, area),
                tags.clone(),
            );
            push_sample(
                &mut samples,
                TOTAL_COMMITTED_METRIC,
                total_area_usage_value(&self.manager, |u| u.committed, area),
                tags.clone(),
            );
            push_sample(
                &mut samples,
                TOTAL_MAX_METRIC,
                total_area_usage_value(&self.manager, |u| u.max, area),
                tags,
            );
        }

        let mut tags = self.config.extra_tags.clone();
        tags.push(("area".to_string(), AREA_HEAP.to_string()));
        push_sample(
            &mut samples,
            HEAP_USAGE_PERCENT_METRIC,
            heap_usage_percent(&self.manager),
            tags,
        );

        samples
    }

    fn collect_pool<P: MemoryPool>(&self, pool: &P, samples: &mut Vec<GaugeSample>) {
        let area = match pool.kind() {
            PoolKind::Heap => AREA_HEAP,
            PoolKind::NonHeap => AREA_NONHEAP,
        };

        let mut tags = self.config.extra_tags.clone();
        tags.push(("pool".to_string(), pool.name().to_string()));
        tags.push(("area".to_string(), area.to_string()));
        if is_young_gen_pool(pool.name()) {
            tags.push(("generation".to_string(), "young".to_string()));
        } else if is_old_gen_pool(pool.name()) {
            tags.push(("generation".to_string(), "old".to_string()));
        }

        push_sample(
            samples,
            POOL_USED_METRIC,
            usage_value(pool, |u| u.used),
            tags.clone(),
        );
        push_sample(
            samples,
            POOL_COMMITTED_METRIC,
            usage_value(pool, |u| u.committed),
            tags.clone(),
        );
        push_sample(samples, POOL_MAX_METRIC, usage_value(pool, |u| u.max), tags);
    }
}

fn push_sample(
    samples: &mut Vec<GaugeSample>,
    name: &'static str,
    value: f64,
    tags: Vec<(String, String)>,
) {
    if value.is_nan() {
        debug!("Skipping {name} - no memory usage data for this interval");
        return;
    }
    samples.push(GaugeSample { name, value, tags });
}
