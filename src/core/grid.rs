use super::constants::{
    FIRST_BATCH_ROWS, GRID_COLUMNS_DESKTOP, GRID_COLUMNS_MOBILE, GRID_MOBILE_BREAKPOINT,
};

/// Kind of background tile media.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// `"video"` maps to `Video`; any other type string renders as an image.
    pub fn from_type(type_str: &str) -> Self {
        if type_str == "video" {
            Self::Video
        } else {
            Self::Image
        }
    }
}

/// One externally supplied media descriptor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MediaItem {
    pub kind: MediaKind,
    pub url: String,
}

/// Column count for a viewport width: the mobile count at or below the
/// breakpoint, the desktop count above it.
pub fn column_count(viewport_width: f32) -> usize {
    if viewport_width <= GRID_MOBILE_BREAKPOINT {
        GRID_COLUMNS_MOBILE
    } else {
        GRID_COLUMNS_DESKTOP
    }
}

/// Round-robin distribution: item `i` goes to column `i % columns`. Returns
/// the item indices assigned to each column.
pub fn column_assignments(item_count: usize, columns: usize) -> Vec<Vec<usize>> {
    if columns == 0 {
        return Vec::new();
    }
    let mut assigned = vec![Vec::new(); columns];
    for i in 0..item_count {
        assigned[i % columns].push(i);
    }
    assigned
}

/// A column's rendered order: its assigned items repeated twice, so the
/// strip can scroll in a seamless loop.
pub fn tile_sequence(assigned: &[usize]) -> Vec<usize> {
    let mut seq = Vec::with_capacity(assigned.len() * 2);
    seq.extend_from_slice(assigned);
    seq.extend_from_slice(assigned);
    seq
}

/// How many media elements gate the page reveal.
pub fn first_batch_size(columns: usize, media_elements: usize) -> usize {
    (columns * FIRST_BATCH_ROWS).min(media_elements)
}
