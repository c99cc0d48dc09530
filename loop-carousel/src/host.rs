use crate::{Direction, Motion};

/// Opaque reference to a scheduled callback, minted by the [`Scheduler`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimerHandle(u64);

impl TimerHandle {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// The deferred work a carousel can ask its scheduler for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Task {
    AutoplayTick,
    SilentJump(Direction),
}

/// The rendered track.
pub trait Surface {
    /// Returns `false` when the render targets are missing; the carousel then stays inert.
    fn is_attached(&self) -> bool {
        true
    }

    /// Sets how the next `translate` is presented.
    fn set_motion(&mut self, motion: Motion);

    /// Applies a horizontal translation to the whole track.
    fn translate(&mut self, offset: f32);

    /// Forces a synchronous re-render of everything applied so far.
    fn flush(&mut self);

    fn set_item_active(&mut self, track_index: usize, active: bool);

    fn set_indicator_active(&mut self, index: usize, active: bool);

    /// Toggles any "grabbing" presentation while a drag is in progress.
    fn set_dragging(&mut self, _dragging: bool) {}
}

/// Rendered sizes, queried on demand and never cached by the carousel.
pub trait Measure {
    fn item_width(&self) -> f32;
    fn viewport_width(&self) -> f32;
}

/// A delay-based scheduler.
///
/// When a timer elapses the host must call [`crate::LoopCarousel::fire`] with its handle.
/// Cancelled handles must never be fired; firing one anyway is harmless.
pub trait Scheduler {
    fn schedule(&mut self, task: Task, delay_ms: u64) -> TimerHandle;
    fn cancel(&mut self, handle: TimerHandle);
}

/// Everything a [`crate::LoopCarousel`] needs from its environment.
pub trait Host: Surface + Measure + Scheduler {}

impl<T: Surface + Measure + Scheduler> Host for T {}
