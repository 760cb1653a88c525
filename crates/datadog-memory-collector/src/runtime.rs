// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Introspection seam over the managed runtime's memory-management API.
//!
//! The host-runtime binding implements [`MemoryPool`] and [`MemoryManager`];
//! everything else in this crate only reads through these traits. Snapshot
//! queries go through [`pool_usage`] / [`area_usage`], which normalize the
//! binding's failure modes into the absent-snapshot case.

use crate::constants::{AREA_HEAP, AREA_NONHEAP};
use std::panic::{self, AssertUnwindSafe};
use tracing::debug;

/// Point-in-time usage reading for a memory pool or aggregate area, in bytes.
///
/// A snapshot is either fully present or entirely absent; there is no partial
/// snapshot. `max` may be `-1`, meaning the runtime places no defined upper
/// bound on the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryUsage {
    pub used: i64,
    pub committed: i64,
    pub max: i64,
}

/// Whether a pool belongs to the garbage-collected heap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolKind {
    Heap,
    NonHeap,
}

/// One named memory pool tracked by the runtime.
///
/// The runtime owns the pool descriptors; names are stable for the process
/// lifetime. This crate never mutates them.
pub trait MemoryPool {
    fn name(&self) -> &str;

    fn kind(&self) -> PoolKind;

    /// Current usage snapshot, or `None` when the runtime has no data.
    ///
    /// Some runtime bindings raise an internal error here instead of
    /// returning `None` under certain configuration flags. Callers in this
    /// crate always query through [`pool_usage`], which traps that.
    fn usage(&self) -> Option<MemoryUsage>;
}

/// The runtime's global memory-manager handle, exposing the two fixed
/// aggregate areas.
pub trait MemoryManager {
    fn heap_usage(&self) -> Option<MemoryUsage>;

    fn nonheap_usage(&self) -> Option<MemoryUsage>;
}

/// Queries a pool's current usage, coercing a panic raised inside the
/// runtime binding into the absent-snapshot case.
pub fn pool_usage<P: MemoryPool + ?Sized>(pool: &P) -> Option<MemoryUsage> {
    guarded(pool.name(), || pool.usage())
}

/// Queries an aggregate area's current usage by label.
///
/// Labels other than [`AREA_HEAP`] and [`AREA_NONHEAP`] read as absent.
pub fn area_usage<M: MemoryManager + ?Sized>(manager: &M, area: &str) -> Option<MemoryUsage> {
    guarded(area, || match area {
        AREA_HEAP => manager.heap_usage(),
        AREA_NONHEAP => manager.nonheap_usage(),
        _ => None,
    })
}

/// Runs a snapshot query, mapping a panic to `None`. The runtime contract
/// says these queries return `None` when no snapshot is available, so a
/// panic here is a runtime defect, not ours to propagate.
fn guarded<F>(source: &str, query: F) -> Option<MemoryUsage>
where
    F: FnOnce() -> Option<MemoryUsage>,
{
    match panic::catch_unwind(AssertUnwindSafe(query)) {
        Ok(usage) => usage,
        Err(_) => {
            debug!("Memory usage query for {source} raised an internal runtime error, treating as unavailable");
            None
        }
    }
}
