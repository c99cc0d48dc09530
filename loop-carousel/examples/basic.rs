use loop_carousel::{
    CarouselOptions, LoopCarousel, Measure, Motion, Scheduler, Surface, Task, TimerHandle,
};

// A host that prints what a UI layer would do and keeps its timers in a Vec.
#[derive(Default)]
struct PrintHost {
    next_id: u64,
    timers: Vec<(TimerHandle, Task, u64)>,
}

impl Surface for PrintHost {
    fn set_motion(&mut self, motion: Motion) {
        println!("  motion    {motion:?}");
    }

    fn translate(&mut self, offset: f32) {
        println!("  translate {offset}");
    }

    fn flush(&mut self) {
        println!("  flush");
    }

    fn set_item_active(&mut self, _track_index: usize, _active: bool) {}

    fn set_indicator_active(&mut self, index: usize, active: bool) {
        if active {
            println!("  indicator {index}");
        }
    }
}

impl Measure for PrintHost {
    fn item_width(&self) -> f32 {
        320.0
    }

    fn viewport_width(&self) -> f32 {
        1024.0
    }
}

impl Scheduler for PrintHost {
    fn schedule(&mut self, task: Task, delay_ms: u64) -> TimerHandle {
        self.next_id += 1;
        let handle = TimerHandle::new(self.next_id);
        println!("  schedule  {task:?} in {delay_ms}ms");
        self.timers.push((handle, task, delay_ms));
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.timers.retain(|(h, _, _)| *h != handle);
    }
}

fn main() {
    let options = CarouselOptions::new(3).with_autoplay(false);
    let mut c = LoopCarousel::new(options, PrintHost::default()).expect("valid options");
    println!("track: {:?}", c.track().items());

    for _ in 0..3 {
        println!("next:");
        c.next();
    }
    println!("state: {:?}", c.state());

    // A real host would fire this from its event loop after the delay.
    if let Some(jump) = c.pending_jump() {
        println!("fire silent jump:");
        c.host_mut().timers.retain(|(h, _, _)| *h != jump);
        c.fire(jump);
    }
    println!("state: {:?}", c.state());
}
