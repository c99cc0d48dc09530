use loop_carousel::CarouselOptions;
use loop_carousel_adapter::{Controller, InputEvent, SimHost, parse_key};

fn main() {
    // Example: a controller driving autoplay in virtual time, interrupted by user input.
    //
    // An adapter would:
    // - forward UI events through `handle`
    // - call `advance_to(now_ms)` from a frame loop / timer
    // - read the surface state (or its own DOM) to render
    let options = CarouselOptions::new(4).with_transition_duration_ms(600);
    let mut c = Controller::new(options, SimHost::new(320.0, 1024.0)).expect("valid options");

    let mut now_ms = 0u64;
    while now_ms < 6_000 {
        now_ms += 16;
        c.advance_to(now_ms);

        match now_ms {
            2_000 => {
                c.handle(InputEvent::PointerDown { x: 200.0 });
                c.handle(InputEvent::PointerMove { x: 320.0 });
                c.handle(InputEvent::PointerUp);
                println!("t={now_ms} swipe right");
            }
            4_000 => {
                c.handle(InputEvent::KeyDown(parse_key("ArrowRight")));
                println!("t={now_ms} ArrowRight");
            }
            _ => {}
        }

        if now_ms % 160 == 0 {
            let surface = &c.host().surface;
            println!(
                "t={now_ms} index={} slot={:.2} active={:?}",
                c.carousel().current_index(),
                surface.centered_slot(now_ms),
                surface.active_indicators()
            );
        }
    }

    c.carousel_mut().destroy();
    println!("destroyed: state={:?}", c.carousel().state());
}
