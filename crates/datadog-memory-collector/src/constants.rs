// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Metric names and aggregate-area labels for runtime memory gauges.
//!
//! All gauges use the `runtime.memory.*` prefix. Per-pool gauges carry
//! `pool`, `area`, and (where the name classifies) `generation` tags;
//! aggregate gauges carry only `area`.

/// Label for the garbage-collected heap aggregate area.
pub const AREA_HEAP: &str = "heap";

/// Label for the non-heap (code, metadata) aggregate area.
pub const AREA_NONHEAP: &str = "nonheap";

// Per-pool gauges

/// Bytes currently used by one memory pool. Gauge, bytes.
pub const POOL_USED_METRIC: &str = "runtime.memory.used";

/// Bytes committed by the operating system for one memory pool. Gauge, bytes.
pub const POOL_COMMITTED_METRIC: &str = "runtime.memory.committed";

/// Maximum bytes one memory pool may grow to, `-1` when undefined. Gauge, bytes.
pub const POOL_MAX_METRIC: &str = "runtime.memory.max";

// Aggregate-area gauges

/// Bytes currently used across an aggregate area. Gauge, bytes.
pub const TOTAL_USED_METRIC: &str = "runtime.memory.total.used";

/// Bytes committed across an aggregate area. Gauge, bytes.
pub const TOTAL_COMMITTED_METRIC: &str = "runtime.memory.total.committed";

/// Maximum bytes across an aggregate area, `-1` when undefined. Gauge, bytes.
pub const TOTAL_MAX_METRIC: &str = "runtime.memory.total.max";

/// Heap used as a percentage of heap max. Gauge, percent.
pub const HEAP_USAGE_PERCENT_METRIC: &str = "runtime.memory.heap.usage_percent";
