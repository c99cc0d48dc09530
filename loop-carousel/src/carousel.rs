use crate::{
    CarouselOptions, CarouselState, Direction, Host, Key, Motion, OptionsError, Phase,
    PlaybackState, Task, TimerHandle, Track, centering_offset,
};

#[derive(Clone, Copy, Debug, PartialEq)]
struct DragGesture {
    start_x: f32,
    current_x: f32,
    /// Playback state to restore when the gesture ends.
    resume: PlaybackState,
}

/// A headless infinite-loop carousel.
///
/// This type owns its [`Host`] and drives it directly:
/// - every position change re-measures the host and applies a centering transform
/// - autoplay ticks and silent jumps are scheduled through the host's scheduler
/// - the host calls [`Self::fire`] when a timer elapses, and forwards input events
///
/// At most one autoplay tick and one silent jump are outstanding at any time. Every call that
/// schedules one cancels the previous instance of the same kind first, and [`Self::fire`]
/// ignores handles it no longer holds.
///
/// Instances built with zero items, or over a detached surface, are inert: every command is
/// a no-op and nothing is ever scheduled.
#[derive(Debug)]
pub struct LoopCarousel<H> {
    options: CarouselOptions,
    host: H,
    track: Track,
    enabled: bool,
    destroyed: bool,
    phase: Phase,
    playback: PlaybackState,
    transition_blocked: bool,
    drag: Option<DragGesture>,
    pending_tick: Option<TimerHandle>,
    pending_jump: Option<(TimerHandle, Direction)>,
}

impl<H: Host> LoopCarousel<H> {
    /// Builds the track and places the carousel on item 0 without animation.
    ///
    /// With `options.autoplay`, playback starts in [`PlaybackState::Playing`] and the first
    /// tick runs after `options.autoplay_start_delay_ms`.
    pub fn new(options: CarouselOptions, host: H) -> Result<Self, OptionsError> {
        if let Err(err) = options.validate() {
            cwarn!(error = ?err, "LoopCarousel::new: invalid options");
            return Err(err);
        }

        let attached = host.is_attached();
        let enabled = attached && options.count > 0;
        if !attached {
            cwarn!("LoopCarousel::new: surface not attached; carousel is inert");
        }

        let track = Track::new(if enabled { options.count } else { 0 });
        cdebug!(
            count = options.count,
            track_len = track.len(),
            enabled,
            autoplay = options.autoplay,
            "LoopCarousel::new"
        );

        let mut c = Self {
            options,
            host,
            track,
            enabled,
            destroyed: false,
            phase: Phase::Real { index: 0 },
            playback: PlaybackState::Stopped,
            transition_blocked: false,
            drag: None,
            pending_tick: None,
            pending_jump: None,
        };

        if c.enabled {
            c.place(0, false);
            if c.options.autoplay {
                c.playback = PlaybackState::Playing;
                c.schedule_tick(c.options.autoplay_start_delay_ms);
            }
        }
        Ok(c)
    }

    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    pub fn track(&self) -> &Track {
        &self.track
    }

    pub fn total_slides(&self) -> usize {
        self.track.real_count()
    }

    /// `false` for inert instances and after [`Self::destroy`].
    pub fn is_enabled(&self) -> bool {
        self.enabled && !self.destroyed
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn playback(&self) -> PlaybackState {
        self.playback
    }

    pub fn is_playing(&self) -> bool {
        self.playback == PlaybackState::Playing
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Signed position: `-1` and `total_slides()` while wrapping, otherwise a real index.
    pub fn current_index(&self) -> isize {
        match self.phase {
            Phase::Real { index } => index as isize,
            Phase::AwaitingSilentJump {
                direction: Direction::Forward,
                ..
            } => self.track.real_count() as isize,
            Phase::AwaitingSilentJump {
                direction: Direction::Backward,
                ..
            } => -1,
        }
    }

    /// The current position folded into `0..total_slides()`.
    pub fn normalized_index(&self) -> usize {
        match self.phase {
            Phase::Real { index } => index,
            Phase::AwaitingSilentJump { target, .. } => target,
        }
    }

    /// Track slot the carousel is centered on (or moving toward).
    pub fn track_index(&self) -> usize {
        self.track
            .track_index(self.current_index())
            .unwrap_or_default()
    }

    /// Whether track slot `track_index` renders as the active item.
    pub fn is_active(&self, track_index: usize) -> bool {
        self.enabled
            && self
                .track
                .get(track_index)
                .is_some_and(|item| item.original_index == self.normalized_index())
    }

    /// Centering offset for a track slot, measured now.
    pub fn offset_for(&self, track_index: usize) -> f32 {
        centering_offset(
            track_index,
            self.host.item_width(),
            self.host.viewport_width(),
        )
    }

    pub fn state(&self) -> CarouselState {
        CarouselState {
            current_index: self.current_index(),
            total_slides: self.total_slides(),
            is_playing: self.is_playing(),
        }
    }

    pub fn pending_tick(&self) -> Option<TimerHandle> {
        self.pending_tick
    }

    pub fn pending_jump(&self) -> Option<TimerHandle> {
        self.pending_jump.map(|(handle, _)| handle)
    }

    pub fn transition_blocked(&self) -> bool {
        self.transition_blocked
    }

    /// Blocks `prev`, drag starts and keyboard navigation. `next` ignores the block so that
    /// autoplay keeps moving.
    pub fn set_transition_blocked(&mut self, blocked: bool) {
        self.transition_blocked = blocked;
    }

    /// Centers real item `index`, animated or not.
    ///
    /// Returns `false` (and does nothing) when `index` is not a real item index.
    pub fn go_to(&mut self, index: usize, animate: bool) -> bool {
        if !self.is_enabled() {
            return false;
        }
        if index >= self.track.real_count() {
            cdebug!(
                index,
                count = self.track.real_count(),
                "go_to: index out of range"
            );
            return false;
        }
        self.place(index, animate);
        true
    }

    /// Animated [`Self::go_to`].
    pub fn go_to_slide(&mut self, index: usize) -> bool {
        self.go_to(index, true)
    }

    pub fn next(&mut self) -> bool {
        if !self.is_enabled() {
            return false;
        }
        self.step(Direction::Forward);
        true
    }

    /// Honors [`Self::set_transition_blocked`], unlike [`Self::next`].
    pub fn prev(&mut self) -> bool {
        if !self.is_enabled() || self.transition_blocked {
            return false;
        }
        self.step(Direction::Backward);
        true
    }

    /// Re-centers the current slot without motion (e.g. after the viewport was resized).
    ///
    /// A wrap in progress stays in progress: the pending silent jump is kept.
    pub fn resize(&mut self) {
        if !self.is_enabled() {
            return;
        }
        let slot = self.track_index();
        ctrace!(slot, "resize");
        self.apply_offset(slot, false);
        self.refresh_active();
    }

    /// Starts autoplay: advances immediately, then keeps ticking.
    pub fn start(&mut self) {
        if !self.is_enabled() || !self.options.autoplay || self.drag.is_some() {
            return;
        }
        cdebug!("autoplay start");
        self.cancel_timers();
        self.playback = PlaybackState::Playing;
        self.step(Direction::Forward);
        self.schedule_next_autoplay();
    }

    /// Stops autoplay and cancels any pending tick or silent jump.
    pub fn stop(&mut self) {
        if !self.is_enabled() {
            return;
        }
        cdebug!("autoplay stop");
        self.cancel_timers();
        match &mut self.drag {
            Some(drag) => drag.resume = PlaybackState::Stopped,
            None => self.playback = PlaybackState::Stopped,
        }
    }

    /// Suspends a playing carousel. See [`Self::resume`].
    pub fn pause(&mut self) {
        if !self.is_enabled() {
            return;
        }
        if let Some(drag) = &mut self.drag {
            if drag.resume == PlaybackState::Playing {
                drag.resume = PlaybackState::Paused;
            }
            return;
        }
        if self.playback == PlaybackState::Playing {
            cdebug!("autoplay pause");
            self.cancel_timers();
            self.playback = PlaybackState::Paused;
        }
    }

    /// Restarts a paused carousel through [`Self::start`].
    pub fn resume(&mut self) {
        if !self.is_enabled() {
            return;
        }
        if let Some(drag) = &mut self.drag {
            if drag.resume == PlaybackState::Paused {
                drag.resume = PlaybackState::Playing;
            }
            return;
        }
        if self.playback == PlaybackState::Paused {
            self.start();
        }
    }

    /// Pushes the next autoplay tick a full interval away, without advancing now.
    pub fn restart_autoplay_timer(&mut self) {
        if !self.is_enabled() {
            return;
        }
        self.schedule_next_autoplay();
    }

    pub fn hover_enter(&mut self) {
        if self.options.pause_on_hover {
            self.pause();
        }
    }

    pub fn hover_leave(&mut self) {
        if self.options.pause_on_hover {
            self.resume();
        }
    }

    pub fn visibility_changed(&mut self, hidden: bool) {
        if hidden {
            self.pause();
        } else {
            self.resume();
        }
    }

    /// Begins a drag gesture at pointer coordinate `x`, suspending autoplay.
    ///
    /// A silent jump already pending for the current wrap still fires during the gesture.
    /// Returns `false` when transitions are blocked or a drag is already in progress.
    pub fn drag_start(&mut self, x: f32) -> bool {
        if !self.is_enabled() || self.transition_blocked || self.drag.is_some() {
            return false;
        }
        ctrace!(x, "drag_start");
        self.cancel_tick();
        self.drag = Some(DragGesture {
            start_x: x,
            current_x: x,
            resume: self.playback,
        });
        self.playback = PlaybackState::Dragging;
        self.host.set_dragging(true);
        true
    }

    /// Records the pointer coordinate; the track does not follow the pointer.
    pub fn drag_move(&mut self, x: f32) {
        if let Some(drag) = &mut self.drag {
            drag.current_x = x;
        }
    }

    /// Ends the gesture, navigating when the pointer travelled more than the drag threshold.
    ///
    /// Playback resumes by scheduling the next tick; a short drag never advances the track.
    /// Returns `true` if the gesture navigated.
    pub fn drag_end(&mut self) -> bool {
        let Some(drag) = self.drag.take() else {
            return false;
        };
        self.host.set_dragging(false);
        self.playback = drag.resume;

        let delta = drag.start_x - drag.current_x;
        let distance = if delta < 0.0 { -delta } else { delta };
        ctrace!(delta, "drag_end");

        let navigated = distance > self.options.drag_threshold
            && if delta > 0.0 { self.next() } else { self.prev() };
        self.schedule_next_autoplay();

        // `stop` during the gesture cancels the jump; never leave the track parked on a clone.
        if let Phase::AwaitingSilentJump { direction, .. } = self.phase {
            if self.pending_jump.is_none() {
                self.schedule_jump(direction);
            }
        }
        navigated
    }

    /// `ArrowLeft`/`ArrowRight` navigation. Returns `true` if the key was handled.
    pub fn key_down(&mut self, key: Key) -> bool {
        if !self.is_enabled() || self.transition_blocked {
            return false;
        }
        match key {
            Key::ArrowLeft => {
                self.prev();
            }
            Key::ArrowRight => {
                self.next();
            }
            Key::Other => return false,
        }
        self.restart_autoplay_timer();
        true
    }

    /// Indicator dot `index` was clicked.
    pub fn indicator_click(&mut self, index: usize) -> bool {
        if !self.go_to_slide(index) {
            return false;
        }
        self.restart_autoplay_timer();
        true
    }

    /// Runs the deferred work behind `handle`.
    ///
    /// Handles that are no longer outstanding (cancelled, replaced, already fired, or fired
    /// after [`Self::destroy`]) are ignored. Returns `true` if any state changed.
    pub fn fire(&mut self, handle: TimerHandle) -> bool {
        if !self.is_enabled() {
            return false;
        }
        if self.pending_tick == Some(handle) {
            self.pending_tick = None;
            return self.autoplay_tick();
        }
        match self.pending_jump {
            Some((pending, direction)) if pending == handle => {
                self.pending_jump = None;
                self.silent_jump(direction)
            }
            _ => false,
        }
    }

    /// Cancels all pending timers. Afterwards every method is a no-op.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        cdebug!("destroy");
        self.cancel_timers();
        if self.drag.take().is_some() {
            self.host.set_dragging(false);
        }
        self.playback = PlaybackState::Stopped;
        self.destroyed = true;
    }

    fn step(&mut self, direction: Direction) {
        let count = self.track.real_count() as isize;
        let target = match direction {
            Direction::Forward => self.current_index() + 1,
            Direction::Backward => self.current_index() - 1,
        };
        if (0..count).contains(&target) {
            self.place(target as usize, true);
        } else {
            self.begin_wrap(direction);
        }
    }

    fn place(&mut self, index: usize, animate: bool) {
        self.cancel_jump();
        self.phase = Phase::Real { index };
        ctrace!(index, animate, "place");
        self.apply_offset(index + self.track.clones_before(), animate);
        self.refresh_active();
    }

    fn begin_wrap(&mut self, direction: Direction) {
        let (slot, target) = match direction {
            Direction::Forward => (self.track.trailing_clone_of_first(), 0),
            Direction::Backward => (
                self.track.leading_clone_of_last(),
                self.track.real_count() - 1,
            ),
        };
        // Re-wrapping toward the same clone keeps the outstanding jump, so repeated input
        // faster than the jump delay cannot postpone it.
        let rewrap = self.phase == Phase::AwaitingSilentJump { direction, target }
            && self.pending_jump.is_some_and(|(_, pending)| pending == direction);
        ctrace!(?direction, slot, target, rewrap, "begin_wrap");
        self.phase = Phase::AwaitingSilentJump { direction, target };
        self.apply_offset(slot, true);
        self.refresh_active();
        if !rewrap {
            self.schedule_jump(direction);
        }
    }

    fn silent_jump(&mut self, direction: Direction) -> bool {
        let Phase::AwaitingSilentJump {
            direction: wrapping,
            target,
        } = self.phase
        else {
            return false;
        };
        if wrapping != direction {
            return false;
        }

        ctrace!(?direction, target, "silent_jump");
        self.cancel_tick();
        self.phase = Phase::Real { index: target };
        self.apply_offset(target + self.track.clones_before(), false);
        self.refresh_active();

        if self.playback == PlaybackState::Playing {
            self.step(Direction::Forward);
            self.schedule_next_autoplay();
        }
        true
    }

    fn autoplay_tick(&mut self) -> bool {
        if self.playback != PlaybackState::Playing {
            return false;
        }
        self.step(Direction::Forward);
        self.schedule_next_autoplay();
        true
    }

    fn apply_offset(&mut self, track_index: usize, animate: bool) {
        let offset = self.offset_for(track_index);
        if animate {
            self.host.set_motion(self.options.transition_motion());
            self.host.translate(offset);
        } else {
            self.host.set_motion(Motion::Instant);
            self.host.translate(offset);
            self.host.flush();
            self.host.set_motion(self.options.transition_motion());
        }
    }

    fn refresh_active(&mut self) {
        let active = self.normalized_index();
        for (slot, item) in self.track.items().iter().enumerate() {
            self.host
                .set_item_active(slot, item.original_index == active);
        }
        for dot in 0..self.track.real_count() {
            self.host.set_indicator_active(dot, dot == active);
        }
    }

    fn schedule_next_autoplay(&mut self) {
        if self.playback != PlaybackState::Playing {
            return;
        }
        self.schedule_tick(self.options.autoplay_delay_ms());
    }

    fn schedule_tick(&mut self, delay_ms: u64) {
        self.cancel_tick();
        self.pending_tick = Some(self.host.schedule(Task::AutoplayTick, delay_ms));
    }

    fn schedule_jump(&mut self, direction: Direction) {
        self.cancel_jump();
        let delay_ms = self.options.silent_jump_delay_ms();
        let handle = self.host.schedule(Task::SilentJump(direction), delay_ms);
        self.pending_jump = Some((handle, direction));
    }

    fn cancel_tick(&mut self) {
        if let Some(handle) = self.pending_tick.take() {
            self.host.cancel(handle);
        }
    }

    fn cancel_jump(&mut self) {
        if let Some((handle, _)) = self.pending_jump.take() {
            self.host.cancel(handle);
        }
    }

    fn cancel_timers(&mut self) {
        self.cancel_tick();
        self.cancel_jump();
    }
}
