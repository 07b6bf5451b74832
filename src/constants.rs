// ABOUTME: Re-exports application constants from liftlog-core
// ABOUTME: Calorie model coefficients, query limits, and network defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use liftlog_core::constants::*;
