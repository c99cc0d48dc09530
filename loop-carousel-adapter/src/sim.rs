use loop_carousel::{Measure, Motion, Scheduler, Surface, Task, TimerHandle};

use crate::{TimerQueue, Tween, VirtualClock};

/// One transform as the surface received it.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AppliedTransform {
    pub at_ms: u64,
    pub offset: f32,
    pub motion: Motion,
}

/// A headless track surface.
///
/// It behaves like a CSS `transform` with a `linear` transition: an animated transform starts
/// from the currently *rendered* offset, and a new transform retargets any transition in flight.
#[derive(Clone, Debug)]
pub struct SimSurface {
    pub item_width: f32,
    pub viewport_width: f32,
    pub attached: bool,
    now_ms: u64,
    motion: Motion,
    offset: f32,
    transition: Option<Tween>,
    active: Vec<bool>,
    indicators: Vec<bool>,
    dragging: bool,
    flushes: usize,
    history: Vec<AppliedTransform>,
}

impl SimSurface {
    pub fn new(item_width: f32, viewport_width: f32) -> Self {
        Self {
            item_width,
            viewport_width,
            attached: true,
            now_ms: 0,
            motion: Motion::Instant,
            offset: 0.0,
            transition: None,
            active: Vec::new(),
            indicators: Vec::new(),
            dragging: false,
            flushes: 0,
            history: Vec::new(),
        }
    }

    pub fn set_now(&mut self, now_ms: u64) {
        self.now_ms = self.now_ms.max(now_ms);
        if self.transition.is_some_and(|t| t.is_done(self.now_ms)) {
            self.transition = None;
        }
    }

    /// Final offset of the last transform.
    pub fn target_offset(&self) -> f32 {
        self.offset
    }

    /// Offset rendered at `now_ms`.
    pub fn rendered_offset(&self, now_ms: u64) -> f32 {
        match self.transition {
            Some(t) => t.sample(now_ms),
            None => self.offset,
        }
    }

    pub fn current_offset(&self) -> f32 {
        self.rendered_offset(self.now_ms)
    }

    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    pub fn motion(&self) -> Motion {
        self.motion
    }

    pub fn is_item_active(&self, track_index: usize) -> bool {
        self.active.get(track_index).copied().unwrap_or(false)
    }

    pub fn active_items(&self) -> Vec<usize> {
        flagged(&self.active)
    }

    pub fn active_indicators(&self) -> Vec<usize> {
        flagged(&self.indicators)
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn flushes(&self) -> usize {
        self.flushes
    }

    pub fn history(&self) -> &[AppliedTransform] {
        &self.history
    }

    /// Fractional track slot centered at `now_ms`, derived from the rendered offset.
    pub fn centered_slot(&self, now_ms: u64) -> f32 {
        let center = (self.viewport_width - self.item_width) / 2.0;
        (center - self.rendered_offset(now_ms)) / self.item_width
    }
}

fn flagged(flags: &[bool]) -> Vec<usize> {
    flags
        .iter()
        .enumerate()
        .filter_map(|(i, &on)| on.then_some(i))
        .collect()
}

fn set_flag(flags: &mut Vec<bool>, index: usize, on: bool) {
    if flags.len() <= index {
        flags.resize(index + 1, false);
    }
    flags[index] = on;
}

impl Surface for SimSurface {
    fn is_attached(&self) -> bool {
        self.attached
    }

    fn set_motion(&mut self, motion: Motion) {
        self.motion = motion;
    }

    fn translate(&mut self, offset: f32) {
        let now_ms = self.now_ms;
        self.history.push(AppliedTransform {
            at_ms: now_ms,
            offset,
            motion: self.motion,
        });
        match self.motion {
            Motion::Instant => self.transition = None,
            Motion::Linear { duration_ms } => {
                let from = self.rendered_offset(now_ms);
                self.transition = Some(Tween::new(from, offset, now_ms, duration_ms));
            }
        }
        self.offset = offset;
    }

    fn flush(&mut self) {
        self.flushes += 1;
    }

    fn set_item_active(&mut self, track_index: usize, active: bool) {
        set_flag(&mut self.active, track_index, active);
    }

    fn set_indicator_active(&mut self, index: usize, active: bool) {
        set_flag(&mut self.indicators, index, active);
    }

    fn set_dragging(&mut self, dragging: bool) {
        self.dragging = dragging;
    }
}

impl Measure for SimSurface {
    fn item_width(&self) -> f32 {
        self.item_width
    }

    fn viewport_width(&self) -> f32 {
        self.viewport_width
    }
}

/// A complete simulated [`loop_carousel::Host`]: a [`SimSurface`] plus a [`TimerQueue`] on
/// one virtual clock.
#[derive(Clone, Debug)]
pub struct SimHost {
    pub surface: SimSurface,
    pub timers: TimerQueue,
}

impl SimHost {
    pub fn new(item_width: f32, viewport_width: f32) -> Self {
        Self {
            surface: SimSurface::new(item_width, viewport_width),
            timers: TimerQueue::new(),
        }
    }
}

impl Surface for SimHost {
    fn is_attached(&self) -> bool {
        self.surface.is_attached()
    }

    fn set_motion(&mut self, motion: Motion) {
        self.surface.set_motion(motion);
    }

    fn translate(&mut self, offset: f32) {
        self.surface.translate(offset);
    }

    fn flush(&mut self) {
        self.surface.flush();
    }

    fn set_item_active(&mut self, track_index: usize, active: bool) {
        self.surface.set_item_active(track_index, active);
    }

    fn set_indicator_active(&mut self, index: usize, active: bool) {
        self.surface.set_indicator_active(index, active);
    }

    fn set_dragging(&mut self, dragging: bool) {
        self.surface.set_dragging(dragging);
    }
}

impl Measure for SimHost {
    fn item_width(&self) -> f32 {
        self.surface.item_width
    }

    fn viewport_width(&self) -> f32 {
        self.surface.viewport_width
    }
}

impl Scheduler for SimHost {
    fn schedule(&mut self, task: Task, delay_ms: u64) -> TimerHandle {
        self.timers.schedule(task, delay_ms)
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.timers.cancel(handle);
    }
}

impl VirtualClock for SimHost {
    fn set_now(&mut self, now_ms: u64) {
        self.timers.set_now(now_ms);
        self.surface.set_now(now_ms);
    }

    fn pop_due(&mut self, until_ms: u64) -> Option<(u64, TimerHandle)> {
        self.timers
            .pop_due(until_ms)
            .map(|(due, handle, _)| (due, handle))
    }
}
