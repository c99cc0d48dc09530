//! Adapter utilities for the `loop-carousel` crate.
//!
//! The `loop-carousel` crate is UI-agnostic and focuses on the track and timing state machine.
//! This crate provides small, framework-neutral helpers commonly needed by adapters:
//!
//! - A unified input event type (mouse and touch as one pointer stream) and a dispatcher
//! - A virtual-time timer queue implementing `loop_carousel::Scheduler`
//! - A simulated surface that samples constant-rate transitions, for tests and headless demos
//! - A `Controller` that owns a carousel and advances it against a clock
//!
//! This crate is intentionally framework-agnostic (no DOM/egui bindings).
#![forbid(unsafe_code)]

mod controller;
mod input;
mod sim;
mod timers;
mod tween;

#[cfg(test)]
mod tests;

pub use controller::{Controller, VirtualClock};
pub use input::{InputEvent, dispatch, parse_key};
pub use sim::{AppliedTransform, SimHost, SimSurface};
pub use timers::TimerQueue;
pub use tween::Tween;
