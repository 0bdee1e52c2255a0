// SPDX-License-Identifier: MPL-2.0

//! Capture flow module
//!
//! This module contains the flow state machine, event handling, screen
//! projection, and the async driver that runs the machine against the
//! backend traits.
//!
//! # Architecture
//!
//! - `state`: Flow state types (FlowModel, FlowState, Event, Effect)
//! - `update`: Event dispatch
//! - `handlers`: Transition handlers organized by functional domain
//! - `view`: Screen projection for front ends
//! - `controller`: Async driver interpreting effects against backends
//!
//! # Main Types
//!
//! - `FlowModel`: Pure state machine, `apply(Event) -> Vec<Effect>`
//! - `CaptureFlow`: Async driver with run-to-completion event feeding
//! - `Screen`: What a front end should render for the current state

mod controller;
mod handlers;
mod state;
mod update;
mod view;

// Re-export public API
pub use controller::CaptureFlow;
pub use state::{Effect, Event, FlowModel, FlowState};
pub use view::Screen;
