// Copyright (c) 2025 - Cowboy AI, Inc.
//! Engine Configuration

use std::env::VarError;
use std::fmt;
use std::str::FromStr;

use crate::errors::{ActivityError, ActivityResult};

/// Environment variable selecting the [`RefreshPolicy`]
pub const REFRESH_POLICY_ENV: &str = "ACTIVITY_REFRESH_POLICY";

/// What a refresh does when a participant no longer resolves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RefreshPolicy {
    /// Fail the refresh with `DanglingReference`
    #[default]
    Propagate,
    /// Keep the participant's previous snapshot and continue
    KeepStale,
}

impl fmt::Display for RefreshPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RefreshPolicy::Propagate => write!(f, "propagate"),
            RefreshPolicy::KeepStale => write!(f, "keep_stale"),
        }
    }
}

impl FromStr for RefreshPolicy {
    type Err = ActivityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "propagate" => Ok(RefreshPolicy::Propagate),
            "keep_stale" | "keep-stale" => Ok(RefreshPolicy::KeepStale),
            other => Err(ActivityError::Configuration(format!(
                "unknown refresh policy `{}` (expected `propagate` or `keep_stale`)",
                other
            ))),
        }
    }
}

/// Configuration for [`ActivityEngine`](crate::engine::ActivityEngine)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineConfig {
    /// Behaviour when a refresh meets a dangling reference
    pub refresh_policy: RefreshPolicy,
}

impl EngineConfig {
    /// Load configuration from environment variables
    ///
    /// Unset variables fall back to the defaults. A variable that is set but
    /// unparseable, including one that is not valid unicode, is a
    /// `Configuration` error.
    pub fn from_env() -> ActivityResult<Self> {
        let refresh_policy = refresh_policy_from(std::env::var(REFRESH_POLICY_ENV))?;
        Ok(Self { refresh_policy })
    }

    pub fn with_refresh_policy(mut self, refresh_policy: RefreshPolicy) -> Self {
        self.refresh_policy = refresh_policy;
        self
    }
}

fn refresh_policy_from(value: Result<String, VarError>) -> ActivityResult<RefreshPolicy> {
    match value {
        Ok(value) => value.parse(),
        Err(VarError::NotPresent) => Ok(RefreshPolicy::default()),
        Err(VarError::NotUnicode(raw)) => Err(ActivityError::Configuration(format!(
            "{} is not valid unicode: {:?}",
            REFRESH_POLICY_ENV, raw
        ))),
    }
}
