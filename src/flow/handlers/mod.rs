// SPDX-License-Identifier: GPL-3.0-only

//! Event handler modules
//!
//! This module organizes event handlers by functional domain,
//! keeping related functionality together for easier maintenance.

pub mod capture;
pub mod permissions;
pub mod review;
pub mod ui;
