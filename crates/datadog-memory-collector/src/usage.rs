// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Usage-value readers for gauge callbacks.
//!
//! Every reader here returns either a usable `f64` or `NaN`; an absent
//! snapshot, a trapped runtime defect, and an unrecognized area label all
//! read as `NaN`, which callers treat as "no data for this interval". The
//! field to report (`used`, `committed`, `max`) is selected by a
//! caller-supplied extractor so the same reader serves all three.

use crate::constants::AREA_HEAP;
use crate::runtime::{self, MemoryManager, MemoryPool, MemoryUsage};

/// Reads one field of a pool's current usage snapshot.
pub fn usage_value<P, F>(pool: &P, extractor: F) -> f64
where
    P: MemoryPool + ?Sized,
    F: Fn(&MemoryUsage) -> i64,
{
    match runtime::pool_usage(pool) {
        Some(usage) => extractor(&usage) as f64,
        None => f64::NAN,
    }
}

/// Reads one field of an aggregate area's current usage snapshot.
///
/// `area` is one of the labels in [`crate::constants`]; anything else reads
/// as `NaN`.
pub fn total_area_usage_value<M, F>(manager: &M, extractor: F, area: &str) -> f64
where
    M: MemoryManager + ?Sized,
    F: Fn(&MemoryUsage) -> i64,
{
    match runtime::area_usage(manager, area) {
        Some(usage) => extractor(&usage) as f64,
        None => f64::NAN,
    }
}

/// Heap used as a percentage of heap max.
///
/// Plain `f64` division: a heap with `max == -1` (undefined) or `0` yields
/// whatever IEEE 754 yields, not an error.
pub fn heap_usage_percent<M: MemoryManager + ?Sized>(manager: &M) -> f64 {
    match runtime::area_usage(manager, AREA_HEAP) {
        Some(usage) => (usage.used as f64 / usage.max as f64) * 100.0,
        None => f64::NAN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::PoolKind;

    struct StubPool {
        usage: Option<MemoryUsage>,
        panics: bool,
    }

    impl MemoryPool for StubPool {
        fn name(&self) -> &str {
            "G1 Old Gen"
        }

        fn kind(&self) -> PoolKind {
            PoolKind::Heap
        }

        fn usage(&self) -> Option<MemoryUsage> {
            if self.panics {
                panic!("simulated runtime internal error");
            }
            self.usage
        }
    }

    struct StubManager {
        heap: Option<MemoryUsage>,
        nonheap: Option<MemoryUsage>,
    }

    impl MemoryManager for StubManager {
        fn heap_usage(&self) -> Option<MemoryUsage> {
            self.heap
        }

        fn nonheap_usage(&self) -> Option<MemoryUsage> {
            self.nonheap
        }
    }

    const USAGE: MemoryUsage = MemoryUsage {
        used: 50,
        committed: 100,
        max: 200,
    };

    #[test]
    fn test_usage_value_extracts_requested_field() {
        let pool = StubPool {
            usage: Some(USAGE),
            panics: false,
        };
        assert_eq!(usage_value(&pool, |u| u.used), 50.0);
        assert_eq!(usage_value(&pool, |u| u.committed), 100.0);
        assert_eq!(usage_value(&pool, |u| u.max), 200.0);
    }

    #[test]
    fn test_usage_value_absent_snapshot_is_nan() {
        let pool = StubPool {
            usage: None,
            panics: false,
        };
        assert!(usage_value(&pool, |u| u.used).is_nan());
    }

    #[test]
    fn test_usage_value_runtime_defect_is_nan() {
        let pool = StubPool {
            usage: Some(USAGE),
            panics: true,
        };
        assert!(usage_value(&pool, |u| u.used).is_nan());
    }

    #[test]
    fn test_total_area_usage_value_by_area() {
        let manager = StubManager {
            heap: Some(USAGE),
            nonheap: Some(MemoryUsage {
                used: 7,
                committed: 8,
                max: -1,
            }),
        };
        assert_eq!(total_area_usage_value(&manager, |u| u.used, "heap"), 50.0);
        assert_eq!(
            total_area_usage_value(&manager, |u| u.used, "nonheap"),
            7.0
        );
        assert_eq!(
            total_area_usage_value(&manager, |u| u.max, "nonheap"),
            -1.0
        );
    }

    #[test]
    fn test_total_area_usage_value_unrecognized_area_is_nan() {
        let manager = StubManager {
            heap: Some(USAGE),
            nonheap: Some(USAGE),
        };
        assert!(total_area_usage_value(&manager, |u| u.used, "bogus").is_nan());
        assert!(total_area_usage_value(&manager, |u| u.max, "bogus").is_nan());
    }

    #[test]
    fn test_heap_usage_percent() {
        let manager = StubManager {
            heap: Some(USAGE),
            nonheap: None,
        };
        assert_eq!(heap_usage_percent(&manager), 25.0);
    }

    #[test]
    fn test_heap_usage_percent_absent_is_nan() {
        let manager = StubManager {
            heap: None,
            nonheap: Some(USAGE),
        };
        assert!(heap_usage_percent(&manager).is_nan());
    }

    #[test]
    fn test_heap_usage_percent_undefined_max_follows_ieee_division() {
        let manager = StubManager {
            heap: Some(MemoryUsage {
                used: 50,
                committed: 100,
                max: -1,
            }),
            nonheap: None,
        };
        assert_eq!(heap_usage_percent(&manager), -5000.0);
    }

    #[test]
    fn test_heap_usage_percent_zero_max_is_infinite() {
        let manager = StubManager {
            heap: Some(MemoryUsage {
                used: 50,
                committed: 100,
                max: 0,
            }),
            nonheap: None,
        };
        assert_eq!(heap_usage_percent(&manager), f64::INFINITY);
    }
}
