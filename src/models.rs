// ABOUTME: Re-exports the domain models from liftlog-core
// ABOUTME: Exercises, workout records, templates, and derived statistics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use liftlog_core::models::*;
