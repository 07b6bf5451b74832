// ABOUTME: Re-exports the unified error types from liftlog-core
// ABOUTME: Keeps crate::errors import paths stable for routes and the store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use liftlog_core::errors::*;
