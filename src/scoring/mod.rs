// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how lines get their numbers, and how the numbers get
//! turned into an order.
//!
//! `core` holds the TF-IDF arithmetic. `ranking` sorts scored lines and
//! settles ties, which is the only place float comparison gets subtle.

mod core;
pub mod ranking;

pub use core::*;
