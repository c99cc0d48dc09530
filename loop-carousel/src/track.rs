use alloc::vec::Vec;

/// Maximum number of boundary clones placed on each side of the real items.
pub const MAX_CLONES: usize = 2;

/// One rendered slot of the track.
///
/// Clones reference the real item they duplicate through `original_index`; an adapter renders
/// every record with the asset of `items[original_index]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackItem {
    pub original_index: usize,
    pub is_clone: bool,
}

/// The fixed sequence of records used for positioning:
/// `[last k clones] [real items] [first k clones]` with `k = min(MAX_CLONES, real_count)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Track {
    items: Vec<TrackItem>,
    real_count: usize,
    clones_before: usize,
}

impl Track {
    pub fn new(real_count: usize) -> Self {
        let clones_before = real_count.min(MAX_CLONES);
        let mut items = Vec::with_capacity(real_count + 2 * clones_before);

        let clone = |original_index| TrackItem {
            original_index,
            is_clone: true,
        };
        items.extend((real_count - clones_before..real_count).map(clone));
        items.extend((0..real_count).map(|original_index| TrackItem {
            original_index,
            is_clone: false,
        }));
        items.extend((0..clones_before).map(clone));

        Self {
            items,
            real_count,
            clones_before,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn real_count(&self) -> usize {
        self.real_count
    }

    pub fn clones_before(&self) -> usize {
        self.clones_before
    }

    pub fn get(&self, track_index: usize) -> Option<TrackItem> {
        self.items.get(track_index).copied()
    }

    pub fn items(&self) -> &[TrackItem] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = TrackItem> + '_ {
        self.items.iter().copied()
    }

    /// Maps a signed carousel position (`-1..=real_count`) to a track slot.
    pub fn track_index(&self, position: isize) -> Option<usize> {
        let slot = position.checked_add(self.clones_before as isize)?;
        usize::try_from(slot).ok().filter(|&slot| slot < self.items.len())
    }

    /// Track slot of the trailing clone of item 0 (target of a forward wrap).
    pub fn trailing_clone_of_first(&self) -> usize {
        self.real_count + self.clones_before
    }

    /// Track slot of the leading clone of the last item (target of a backward wrap).
    pub fn leading_clone_of_last(&self) -> usize {
        self.clones_before.saturating_sub(1)
    }

    /// Pairs each record with the caller's real item it renders.
    ///
    /// Records whose `original_index` is out of bounds for `items` are skipped.
    pub fn resolve<'a, T>(
        &'a self,
        items: &'a [T],
    ) -> impl Iterator<Item = (TrackItem, &'a T)> + 'a {
        self.items
            .iter()
            .filter_map(move |record| items.get(record.original_index).map(|it| (*record, it)))
    }
}

/// Translation that centers track slot `track_index` inside the viewport.
pub fn centering_offset(track_index: usize, item_width: f32, viewport_width: f32) -> f32 {
    -(track_index as f32 * item_width) + (viewport_width - item_width) / 2.0
}
