// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Memory-pool statistics for managed runtimes.
//!
//! This crate reads memory usage from a managed runtime's built-in
//! introspection API (exposed to it through the [`runtime::MemoryPool`] and
//! [`runtime::MemoryManager`] traits), classifies pools as young- or
//! old-generation by the runtime's naming conventions, and produces gauge
//! samples suitable for submission on a polling cadence.
//!
//! Usage queries never fail from the caller's point of view: a pool with no
//! current snapshot, a defect-class error raised inside the runtime binding,
//! and an unrecognized aggregate-area label all read as `NaN`, meaning "no
//! data for this interval".

pub mod collector;
pub mod config;
pub mod constants;
pub mod error;
pub mod pool;
pub mod runtime;
pub mod usage;

pub use collector::{GaugeSample, MemoryMetricsCollector};
pub use config::CollectorConfig;
pub use error::ConfigError;
pub use runtime::{MemoryManager, MemoryPool, MemoryUsage, PoolKind};
