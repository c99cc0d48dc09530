use loop_carousel::{Host, Key, LoopCarousel};

/// A UI event, already reduced to what the carousel cares about.
///
/// Mouse and touch share the `Pointer*` variants: adapters pass the page x coordinate of the
/// mouse, or of the first touch point.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InputEvent {
    PointerDown { x: f32 },
    PointerMove { x: f32 },
    PointerUp,
    /// The pointer left the track; ends a drag in progress.
    PointerLeave,
    KeyDown(Key),
    /// The pointer entered the carousel container.
    HoverEnter,
    HoverLeave,
    VisibilityChange { hidden: bool },
    /// The viewport was resized; the host already reports the new sizes.
    Resize,
    IndicatorClick(usize),
}

/// Maps a DOM-style key name (`KeyboardEvent.key`) to a [`Key`].
pub fn parse_key(name: &str) -> Key {
    match name {
        "ArrowLeft" => Key::ArrowLeft,
        "ArrowRight" => Key::ArrowRight,
        _ => Key::Other,
    }
}

/// Routes one event to the matching carousel operation.
///
/// Returns `true` if the carousel acted on the event.
pub fn dispatch<H: Host>(carousel: &mut LoopCarousel<H>, event: InputEvent) -> bool {
    #[cfg(feature = "tracing")]
    tracing::trace!(target: "loop_carousel_adapter", ?event, "dispatch");

    if !carousel.is_enabled() {
        return false;
    }
    match event {
        InputEvent::PointerDown { x } => carousel.drag_start(x),
        InputEvent::PointerMove { x } => {
            if !carousel.is_dragging() {
                return false;
            }
            carousel.drag_move(x);
            true
        }
        InputEvent::PointerUp | InputEvent::PointerLeave => {
            if !carousel.is_dragging() {
                return false;
            }
            carousel.drag_end();
            true
        }
        InputEvent::KeyDown(key) => carousel.key_down(key),
        InputEvent::HoverEnter => {
            carousel.hover_enter();
            true
        }
        InputEvent::HoverLeave => {
            carousel.hover_leave();
            true
        }
        InputEvent::VisibilityChange { hidden } => {
            carousel.visibility_changed(hidden);
            true
        }
        InputEvent::Resize => {
            carousel.resize();
            true
        }
        InputEvent::IndicatorClick(index) => carousel.indicator_click(index),
    }
}
