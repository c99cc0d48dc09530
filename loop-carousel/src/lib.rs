//! A headless infinite-loop carousel engine.
//!
//! For adapter-level utilities (input dispatch, virtual-time timers, a simulated surface), see
//! the `loop-carousel-adapter` crate.
//!
//! The carousel fakes an endlessly repeating row of items with a finite track: the real items
//! are wrapped by up to two boundary clones on each side. Motion toward a clone is a normal
//! animated transition; shortly before it finishes, the engine teleports the track to the real
//! twin of that clone with animation disabled (a *silent jump*), so the loop never shows a seam.
//!
//! It is UI-agnostic. A TUI/GUI/DOM layer is expected to provide (see [`Host`]):
//! - a surface that can translate the track, with or without a constant-rate transition
//! - on-demand measurement of one item and of the viewport
//! - a delay-based scheduler, and calls to [`LoopCarousel::fire`] when a timer elapses
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod carousel;
mod host;
mod options;
mod state;
mod track;
mod types;


pub use carousel::LoopCarousel;
pub use host::{Host, Measure, Scheduler, Surface, Task, TimerHandle};
pub use options::{CarouselOptions, OptionsError};
pub use state::CarouselState;
pub use track::{MAX_CLONES, Track, TrackItem, centering_offset};
pub use types::{Direction, Key, Motion, Phase, PlaybackState};
