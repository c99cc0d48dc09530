#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Forward,
    Backward,
}

/// Governs whether the autoplay scheduler is active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlaybackState {
    #[default]
    Stopped,
    Playing,
    /// Suspended by hover or page visibility; `resume` restarts playback.
    Paused,
    /// A drag gesture is in progress. The state before the drag is restored when it ends.
    Dragging,
}

/// How a surface should move the track to the next transform it receives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Motion {
    /// Transition disabled: the transform applies immediately.
    Instant,
    /// Constant-rate transition over `duration_ms`.
    Linear { duration_ms: u64 },
}

/// Position state of the track.
///
/// `AwaitingSilentJump` covers the whole window between starting an animated move toward a
/// boundary clone and the teleport to the clone's real twin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// Resting at, or animating toward, the real item `index`.
    Real { index: usize },
    /// Animating toward a boundary clone; the pending silent jump lands on `target`.
    AwaitingSilentJump { direction: Direction, target: usize },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Other,
}
