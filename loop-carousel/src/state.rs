/// A read-only snapshot for external callers (indicator widgets, instrumentation).
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarouselState {
    /// Signed position; `-1` and `total_slides` are the transient clone positions.
    pub current_index: isize,
    pub total_slides: usize,
    pub is_playing: bool,
}
