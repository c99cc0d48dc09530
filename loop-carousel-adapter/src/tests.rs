use crate::*;

use loop_carousel::{CarouselOptions, Direction, Key, Motion, PlaybackState, Scheduler, Task};

fn controller(options: CarouselOptions) -> Controller<SimHost> {
    Controller::new(options, SimHost::new(100.0, 300.0)).unwrap()
}

#[test]
fn timer_queue_orders_by_due_time_then_schedule_order() {
    let mut q = TimerQueue::new();
    let a = q.schedule(Task::AutoplayTick, 100);
    let b = q.schedule(Task::SilentJump(Direction::Forward), 50);
    let c = q.schedule(Task::AutoplayTick, 100);
    assert_eq!(q.len(), 3);
    assert_eq!(q.next_due_ms(), Some(50));
    assert_eq!(q.due_ms(c), Some(100));

    assert_eq!(q.pop_due(49), None);
    assert_eq!(
        q.pop_due(100),
        Some((50, b, Task::SilentJump(Direction::Forward)))
    );
    assert_eq!(q.pop_due(100), Some((100, a, Task::AutoplayTick)));
    q.cancel(c);
    assert_eq!(q.pop_due(u64::MAX), None);
    assert!(q.is_empty());
}

#[test]
fn timer_queue_clock_is_monotonic() {
    let mut q = TimerQueue::new();
    q.set_now(500);
    q.set_now(200);
    assert_eq!(q.now_ms(), 500);
    let h = q.schedule(Task::AutoplayTick, 10);
    assert_eq!(q.due_ms(h), Some(510));
    assert_eq!(q.count(|t| *t == Task::AutoplayTick), 1);
}

#[test]
fn tween_is_linear_and_clamped() {
    let t = Tween::new(0.0, -300.0, 100, 1000);
    assert_eq!(t.sample(0), 0.0);
    assert_eq!(t.sample(600), -150.0);
    assert_eq!(t.sample(5000), -300.0);
    assert!(t.is_done(1100));
    assert!(!t.is_done(1099));
    assert_eq!(Tween::new(0.0, 1.0, 0, 0).duration_ms, 1);
}

#[test]
fn parse_key_maps_arrow_names() {
    assert_eq!(parse_key("ArrowLeft"), Key::ArrowLeft);
    assert_eq!(parse_key("ArrowRight"), Key::ArrowRight);
    assert_eq!(parse_key("Enter"), Key::Other);
}

#[test]
fn autoplay_timeline_overlaps_ticks_and_jumps_early() {
    let mut c = controller(CarouselOptions::new(3));

    c.advance_to(999);
    assert_eq!(c.carousel().current_index(), 0);
    assert_eq!(c.advance_to(1000), 1);
    assert_eq!(c.carousel().current_index(), 1);

    c.advance_to(1920);
    assert_eq!(c.carousel().current_index(), 2);

    // Past the last item: moving toward the trailing clone of item 0.
    c.advance_to(2840);
    assert_eq!(c.carousel().current_index(), 3);
    assert_eq!(c.carousel().track_index(), 5);
    c.advance_to(3689);
    assert_eq!(c.carousel().current_index(), 3);

    // The jump fires at 85% and autoplay continues at once.
    assert_eq!(c.advance_to(3690), 1);
    assert_eq!(c.carousel().current_index(), 1);
    let tail = &c.host().surface.history()[c.host().surface.history().len() - 2..];
    assert_eq!(
        tail,
        [
            AppliedTransform {
                at_ms: 3690,
                offset: -100.0,
                motion: Motion::Instant,
            },
            AppliedTransform {
                at_ms: 3690,
                offset: -200.0,
                motion: Motion::Linear { duration_ms: 1000 },
            },
        ]
    );

    // The tick that was due at 3760 was replaced.
    assert_eq!(c.host().timers.next_due_ms(), Some(4610));
    c.advance_to(4609);
    assert_eq!(c.carousel().current_index(), 1);
    c.advance_to(4610);
    assert_eq!(c.carousel().current_index(), 2);
    assert_eq!(c.host().surface.active_indicators(), [2]);
}

#[test]
fn rendered_track_never_moves_backwards_during_autoplay() {
    let count = 4usize;
    let mut c = controller(CarouselOptions::new(count));
    let clones = c.carousel().track().clones_before() as f32;
    let n = count as f32;

    let mut prev = c.host().surface.centered_slot(0) - clones;
    let mut travelled = 0.0f32;
    for t in (10..=20_000u64).step_by(10) {
        c.advance_to(t);
        let pos = c.host().surface.centered_slot(t) - clones;
        let mut delta = pos - prev;
        if delta > n / 2.0 {
            delta -= n;
        } else if delta < -n / 2.0 {
            delta += n;
        }
        assert!(delta >= -1e-3, "t={t} delta={delta}");
        travelled += delta;
        prev = pos;
    }
    // ~19s of autoplay at one item per 920ms.
    assert!(travelled > 15.0, "travelled={travelled}");
    assert_eq!(c.host().timers.count(|t| *t == Task::AutoplayTick), 1);
    assert!(c.host().timers.len() <= 2);
}

/// Runs `c` in 1ms steps until `until_ms`, counting how often the highlighted item comes
/// back to item 0 and how many silent jumps the surface received.
fn run_loops(c: &mut Controller<SimHost>, until_ms: u64) -> (usize, usize) {
    let jumps_before = silent_jumps(c);
    let mut returns = 0usize;
    let mut last = c.carousel().normalized_index();
    for t in c.now_ms() + 1..=until_ms {
        c.advance_to(t);
        let now = c.carousel().normalized_index();
        if now == 0 && last != 0 {
            returns += 1;
        }
        last = now;
    }
    (returns, silent_jumps(c) - jumps_before)
}

fn silent_jumps(c: &Controller<SimHost>) -> usize {
    c.host()
        .surface
        .history()
        .iter()
        .filter(|t| t.at_ms > 0 && t.motion == Motion::Instant)
        .count()
}

#[test]
fn short_transitions_keep_looping() {
    // Ticks every 46ms, while the jump waits the 50ms floor.
    let mut c = controller(CarouselOptions::new(3).with_transition_duration_ms(50));
    assert_eq!(c.carousel().options().autoplay_delay_ms(), 46);
    assert_eq!(c.carousel().options().silent_jump_delay_ms(), 50);

    let (returns, jumps) = run_loops(&mut c, 4_000);
    assert!(returns >= 15, "returns={returns}");
    assert!(jumps >= 15, "jumps={jumps}");
    assert!(c.host().timers.len() <= 2);
}

#[test]
fn overlap_shorter_than_jump_fraction_keeps_looping() {
    let mut c = controller(CarouselOptions::new(3).with_timing_fractions(0.5, 0.85));
    assert!(
        c.carousel().options().autoplay_delay_ms() < c.carousel().options().silent_jump_delay_ms()
    );

    let (returns, jumps) = run_loops(&mut c, 20_000);
    assert!(returns >= 8, "returns={returns}");
    assert!(jumps >= 8, "jumps={jumps}");
}

#[test]
fn held_arrow_key_still_loops() {
    let mut c = controller(CarouselOptions::new(3).with_autoplay(false));
    let mut seen = Vec::new();
    for t in (0..3_000u64).step_by(33) {
        c.advance_to(t);
        seen.push(c.carousel().current_index());
        c.handle(InputEvent::KeyDown(Key::ArrowRight));
        seen.push(c.carousel().current_index());
    }
    seen.dedup();
    assert!(seen.contains(&0), "seen={seen:?}");
    assert!(silent_jumps(&c) >= 3);
}

#[test]
fn swipe_navigates_and_only_schedules_the_next_tick() {
    let mut c = controller(CarouselOptions::new(5));
    c.advance_to(500);

    assert!(c.handle(InputEvent::PointerDown { x: 300.0 }));
    assert!(c.host().surface.is_dragging());
    assert_eq!(c.carousel().playback(), PlaybackState::Dragging);
    assert!(c.host().timers.is_empty());

    assert!(c.handle(InputEvent::PointerMove { x: 200.0 }));
    assert!(c.handle(InputEvent::PointerUp));
    assert!(!c.host().surface.is_dragging());
    assert_eq!(c.carousel().current_index(), 1);
    assert_eq!(c.host().timers.next_due_ms(), Some(1420));

    c.advance_to(1420);
    assert_eq!(c.carousel().current_index(), 2);
}

#[test]
fn pointer_leave_ends_a_drag() {
    let mut c = controller(CarouselOptions::new(5).with_autoplay(false));
    assert!(!c.handle(InputEvent::PointerMove { x: 10.0 }));
    assert!(!c.handle(InputEvent::PointerLeave));

    c.handle(InputEvent::PointerDown { x: 0.0 });
    c.handle(InputEvent::PointerMove { x: 80.0 });
    assert!(c.handle(InputEvent::PointerLeave));
    assert!(!c.carousel().is_dragging());
    // Pointer moved right: previous item, through the leading clone.
    assert_eq!(c.carousel().current_index(), -1);
    c.advance_by(850);
    assert_eq!(c.carousel().current_index(), 4);
}

#[test]
fn keyboard_wraps_backward_with_silent_jump() {
    let mut c = controller(CarouselOptions::new(3).with_autoplay(false));
    assert!(c.handle(InputEvent::KeyDown(parse_key("ArrowLeft"))));
    assert_eq!(c.carousel().current_index(), -1);
    assert_eq!(c.host().surface.active_items(), [1, 4]);

    c.advance_by(849);
    assert_eq!(c.carousel().current_index(), -1);
    c.advance_by(1);
    assert_eq!(c.carousel().current_index(), 2);
    assert!(!c.host().surface.is_animating());

    assert!(!c.handle(InputEvent::KeyDown(parse_key("Enter"))));
    assert!(c.handle(InputEvent::KeyDown(Key::ArrowRight)));
    assert_eq!(c.carousel().current_index(), 3);
}

#[test]
fn hidden_page_holds_autoplay_until_visible() {
    let mut c = controller(CarouselOptions::new(3));
    c.handle(InputEvent::VisibilityChange { hidden: true });
    assert_eq!(c.advance_to(10_000), 0);
    assert_eq!(c.carousel().current_index(), 0);
    assert!(c.host().timers.is_empty());

    c.handle(InputEvent::VisibilityChange { hidden: false });
    assert_eq!(c.carousel().current_index(), 1);
    assert_eq!(c.host().timers.next_due_ms(), Some(10_920));
}

#[test]
fn hover_pauses_autoplay() {
    let mut c = controller(CarouselOptions::new(3));
    c.handle(InputEvent::HoverEnter);
    assert_eq!(c.carousel().playback(), PlaybackState::Paused);
    assert_eq!(c.advance_to(5_000), 0);
    c.handle(InputEvent::HoverLeave);
    assert_eq!(c.carousel().playback(), PlaybackState::Playing);
    assert_eq!(c.carousel().current_index(), 1);
}

#[test]
fn resize_recenters_instantly() {
    let mut c = controller(CarouselOptions::new(3).with_autoplay(false));
    c.host_mut().surface.viewport_width = 500.0;
    let flushes = c.host().surface.flushes();
    assert!(c.handle(InputEvent::Resize));
    assert_eq!(c.host().surface.target_offset(), 0.0);
    assert!(!c.host().surface.is_animating());
    assert_eq!(c.host().surface.flushes(), flushes + 1);
    assert_eq!(
        c.host().surface.motion(),
        Motion::Linear { duration_ms: 1000 }
    );
}

#[test]
fn indicator_click_moves_to_slide() {
    let mut c = controller(CarouselOptions::new(4));
    assert!(c.handle(InputEvent::IndicatorClick(2)));
    assert_eq!(c.carousel().current_index(), 2);
    assert_eq!(c.host().surface.active_indicators(), [2]);
    assert!(c.host().surface.is_animating());
    assert!(!c.handle(InputEvent::IndicatorClick(4)));
    assert_eq!(c.host().timers.next_due_ms(), Some(920));
}

#[test]
fn destroyed_controller_stays_silent() {
    let mut c = controller(CarouselOptions::new(3));
    c.advance_to(2840);
    assert_eq!(c.carousel().current_index(), 3);
    assert_eq!(c.host().timers.len(), 2);

    c.carousel_mut().destroy();
    assert!(c.host().timers.is_empty());
    let history = c.host().surface.history().len();
    assert_eq!(c.advance_to(100_000), 0);
    assert!(!c.handle(InputEvent::KeyDown(Key::ArrowRight)));
    assert!(!c.handle(InputEvent::Resize));
    assert_eq!(c.carousel().current_index(), 3);
    assert_eq!(c.host().surface.history().len(), history);
}

#[test]
fn empty_carousel_ignores_everything() {
    let mut c = controller(CarouselOptions::new(0));
    assert!(!c.handle(InputEvent::PointerDown { x: 0.0 }));
    assert!(!c.handle(InputEvent::HoverEnter));
    assert_eq!(c.advance_to(60_000), 0);
    assert!(c.host().surface.history().is_empty());
    assert_eq!(c.carousel().state().total_slides, 0);
}

#[test]
fn detached_surface_builds_an_inert_carousel() {
    let mut host = SimHost::new(100.0, 300.0);
    host.surface.attached = false;
    let mut c = Controller::new(CarouselOptions::new(3), host).unwrap();
    assert!(!c.carousel().is_enabled());
    assert_eq!(c.advance_to(10_000), 0);
    assert!(c.host().timers.is_empty());
}
