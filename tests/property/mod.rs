// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests Module
//!
//! Generated definitions and inputs exercising construction and refresh.

mod construction;
