// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

/// Errors that can occur when building collector configuration.
///
/// Usage readers never error: every query returns a usable `f64` or `NaN`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Collection interval must be at least 1 second, got {0}")]
    InvalidInterval(u64),

    #[error("Invalid tag entry: {0}")]
    InvalidTag(String),
}
