// ABOUTME: Domain service layer for profile linking business logic
// ABOUTME: Protocol-agnostic operations reusable from any routing layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Seatlink Contributors

//! Domain service layer
//!
//! Protocol-agnostic business logic. An external routing layer maps these
//! operations onto its transport of choice; nothing in here depends on HTTP.

/// Profile linking lifecycle: link, unlink, list linked clients
pub mod linking;

/// Unique PIN allocation with a bounded retry budget
pub mod pin;

pub use linking::LinkingService;
