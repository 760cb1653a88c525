// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Pool classification by the runtime's naming conventions.
//!
//! Generational collectors name their pools with stable suffixes
//! (`"G1 Eden Space"`, `"PS Old Gen"`, `"Tenured Gen"`), so generation
//! membership is a pure suffix check on the pool name. The checks are exact
//! and case-sensitive, matching the runtime's own labels.

use crate::runtime::{MemoryPool, PoolKind};

const YOUNG_GEN_SUFFIX: &str = "Eden Space";
const OLD_GEN_SUFFIXES: [&str; 2] = ["Old Gen", "Tenured Gen"];

/// Collection-event cause label the runtime uses for cycles that ran
/// concurrently, without a recorded pause cause.
const CONCURRENT_PHASE_CAUSE: &str = "No GC";

/// Whether the pool belongs to the garbage-collected heap.
pub fn is_heap<P: MemoryPool + ?Sized>(pool: &P) -> bool {
    pool.kind() == PoolKind::Heap
}

/// Whether the pool name designates a young-generation (eden) pool.
pub fn is_young_gen_pool(name: &str) -> bool {
    name.ends_with(YOUNG_GEN_SUFFIX)
}

/// Whether the pool name designates an old-generation (tenured) pool.
pub fn is_old_gen_pool(name: &str) -> bool {
    OLD_GEN_SUFFIXES.iter().any(|suffix| name.ends_with(suffix))
}

/// Finds the old-generation heap pool: the first heap pool, in the supplied
/// order, whose name classifies as old-gen. First match wins; there is no
/// further disambiguation.
pub fn find_old_gen_pool<P: MemoryPool>(pools: &[P]) -> Option<&P> {
    pools
        .iter()
        .filter(|pool| is_heap(*pool))
        .find(|pool| is_old_gen_pool(pool.name()))
}

/// Whether a collection-event cause label marks a concurrent phase.
pub fn is_concurrent_phase(cause: &str) -> bool {
    cause == CONCURRENT_PHASE_CAUSE
}
