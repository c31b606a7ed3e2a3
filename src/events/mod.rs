// Copyright (c) 2025 - Cowboy AI, Inc.
//! Activity Events
//!
//! This module defines the publish input and the immutable activity record it
//! is turned into.
//!
//! # Event Flow
//!
//! ```text
//! ActivityData ──construct──> Activity ──append──> ActivityStore
//!  (raw input)   (validate)   (what happened)      (persist)
//!                                  │
//!                               refresh ── re-snapshot cached fields
//! ```
//!
//! # Module Organization
//!
//! - [`data`] - Raw, untyped publish input
//! - [`activity`] - The denormalized activity record and its participants

pub mod activity;
pub mod data;

pub use activity::{Activity, ParticipantSnapshot, ACTIVITY_EVENT_VERSION};
pub use data::{ActivityData, ActivityValue};
