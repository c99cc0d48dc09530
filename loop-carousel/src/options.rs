/// Rejected [`CarouselOptions`].
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum OptionsError {
    #[error("transition duration must be greater than zero")]
    ZeroTransitionDuration,
    #[error("drag threshold must be a positive, finite distance (got {0})")]
    InvalidDragThreshold(f32),
    #[error("{name} must be within (0, 1] (got {value})")]
    FractionOutOfRange { name: &'static str, value: f32 },
}

/// Configuration for [`crate::LoopCarousel`], fixed for the lifetime of an instance.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarouselOptions {
    /// Number of real items.
    pub count: usize,
    pub autoplay: bool,
    /// Duration of one animated transition. Must be non-zero.
    pub transition_duration_ms: u64,
    /// Pause autoplay while the pointer hovers the carousel.
    pub pause_on_hover: bool,
    /// Minimum horizontal travel for a drag to count as a swipe.
    pub drag_threshold: f32,
    /// Fraction of `transition_duration_ms` between autoplay ticks.
    ///
    /// Values below 1 start the next move before the current one visually ends.
    pub autoplay_overlap: f32,
    /// Fraction of `transition_duration_ms` after which a wrap teleports off its clone.
    pub jump_fraction: f32,
    /// Lower bound for the silent jump delay.
    pub min_jump_delay_ms: u64,
    /// Delay between construction and the first autoplay tick.
    pub autoplay_start_delay_ms: u64,
}

impl CarouselOptions {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            autoplay: true,
            transition_duration_ms: 1000,
            pause_on_hover: true,
            drag_threshold: 50.0,
            autoplay_overlap: 0.92,
            jump_fraction: 0.85,
            min_jump_delay_ms: 50,
            autoplay_start_delay_ms: 1000,
        }
    }

    pub fn with_autoplay(mut self, autoplay: bool) -> Self {
        self.autoplay = autoplay;
        self
    }

    pub fn with_transition_duration_ms(mut self, duration_ms: u64) -> Self {
        self.transition_duration_ms = duration_ms;
        self
    }

    pub fn with_pause_on_hover(mut self, pause_on_hover: bool) -> Self {
        self.pause_on_hover = pause_on_hover;
        self
    }

    pub fn with_drag_threshold(mut self, drag_threshold: f32) -> Self {
        self.drag_threshold = drag_threshold;
        self
    }

    pub fn with_timing_fractions(mut self, autoplay_overlap: f32, jump_fraction: f32) -> Self {
        self.autoplay_overlap = autoplay_overlap;
        self.jump_fraction = jump_fraction;
        self
    }

    pub fn with_min_jump_delay_ms(mut self, delay_ms: u64) -> Self {
        self.min_jump_delay_ms = delay_ms;
        self
    }

    pub fn with_autoplay_start_delay_ms(mut self, delay_ms: u64) -> Self {
        self.autoplay_start_delay_ms = delay_ms;
        self
    }

    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.transition_duration_ms == 0 {
            return Err(OptionsError::ZeroTransitionDuration);
        }
        if !(self.drag_threshold.is_finite() && self.drag_threshold > 0.0) {
            return Err(OptionsError::InvalidDragThreshold(self.drag_threshold));
        }
        check_fraction("autoplay_overlap", self.autoplay_overlap)?;
        check_fraction("jump_fraction", self.jump_fraction)?;
        Ok(())
    }

    /// Delay between two autoplay ticks.
    pub fn autoplay_delay_ms(&self) -> u64 {
        scale_ms(self.transition_duration_ms, self.autoplay_overlap)
    }

    /// Delay between starting a wrap and its silent jump.
    pub fn silent_jump_delay_ms(&self) -> u64 {
        scale_ms(self.transition_duration_ms, self.jump_fraction).max(self.min_jump_delay_ms)
    }

    pub fn transition_motion(&self) -> crate::Motion {
        crate::Motion::Linear {
            duration_ms: self.transition_duration_ms,
        }
    }
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self::new(0)
    }
}

fn check_fraction(name: &'static str, value: f32) -> Result<(), OptionsError> {
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(OptionsError::FractionOutOfRange { name, value })
    }
}

// Rounded to the nearest millisecond; `f64::round` is not available without `std`.
fn scale_ms(ms: u64, fraction: f32) -> u64 {
    (ms as f64 * fraction as f64 + 0.5) as u64
}
