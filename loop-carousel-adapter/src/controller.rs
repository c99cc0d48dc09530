use loop_carousel::{CarouselOptions, Host, LoopCarousel, OptionsError, TimerHandle};

use crate::{InputEvent, dispatch};

/// A host whose timers run on a clock the caller advances.
pub trait VirtualClock {
    fn set_now(&mut self, now_ms: u64);

    /// Removes and returns the earliest timer due at or before `until_ms`, with its due time.
    fn pop_due(&mut self, until_ms: u64) -> Option<(u64, TimerHandle)>;
}

/// A framework-neutral driver that owns a [`LoopCarousel`] and delivers its timers.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `handle` when UI events occur
/// - `advance_to(now_ms)` each frame/timer tick, which fires every timer that came due, in
///   order, with the clock set to each timer's due time
#[derive(Debug)]
pub struct Controller<H> {
    carousel: LoopCarousel<H>,
    now_ms: u64,
}

impl<H: Host + VirtualClock> Controller<H> {
    pub fn new(options: CarouselOptions, host: H) -> Result<Self, OptionsError> {
        Ok(Self {
            carousel: LoopCarousel::new(options, host)?,
            now_ms: 0,
        })
    }

    pub fn from_carousel(carousel: LoopCarousel<H>) -> Self {
        Self {
            carousel,
            now_ms: 0,
        }
    }

    pub fn carousel(&self) -> &LoopCarousel<H> {
        &self.carousel
    }

    pub fn carousel_mut(&mut self) -> &mut LoopCarousel<H> {
        &mut self.carousel
    }

    pub fn into_carousel(self) -> LoopCarousel<H> {
        self.carousel
    }

    pub fn host(&self) -> &H {
        self.carousel.host()
    }

    pub fn host_mut(&mut self) -> &mut H {
        self.carousel.host_mut()
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Advances the clock to `now_ms`, firing due timers.
    ///
    /// Timers scheduled by a fired timer are fired too if they come due before `now_ms`.
    /// Returns the number of timers that changed carousel state.
    pub fn advance_to(&mut self, now_ms: u64) -> usize {
        let now_ms = now_ms.max(self.now_ms);
        let mut fired = 0usize;
        while let Some((due_ms, handle)) = self.carousel.host_mut().pop_due(now_ms) {
            self.now_ms = due_ms.max(self.now_ms);
            self.carousel.host_mut().set_now(self.now_ms);
            if self.carousel.fire(handle) {
                fired += 1;
            }
        }
        self.now_ms = now_ms;
        self.carousel.host_mut().set_now(now_ms);
        #[cfg(feature = "tracing")]
        tracing::trace!(target: "loop_carousel_adapter", now_ms, fired, "advance_to");
        fired
    }

    pub fn advance_by(&mut self, delta_ms: u64) -> usize {
        self.advance_to(self.now_ms.saturating_add(delta_ms))
    }

    /// Delivers a UI event at the current time.
    pub fn handle(&mut self, event: InputEvent) -> bool {
        dispatch(&mut self.carousel, event)
    }
}
