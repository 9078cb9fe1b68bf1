use alloc::string::String;

/// An axis-aligned rectangle in the host's content coordinate space (y grows downwards).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn min_y(&self) -> f64 {
        self.y
    }

    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    pub fn with_y(mut self, y: f64) -> Self {
        self.y = y;
        self
    }

    pub fn with_height(mut self, height: f64) -> Self {
        self.height = height;
        self
    }
}

/// Position of an item in the host's sectioned list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndexPath {
    pub section: usize,
    pub row: usize,
}

impl IndexPath {
    pub const fn new(section: usize, row: usize) -> Self {
        Self { section, row }
    }

    /// `true` for the first row of a section.
    pub fn is_leading_row(&self) -> bool {
        self.row == 0
    }
}

/// Geometry of one host item for a single layout pass.
///
/// The host owns these records (typically one `Vec` rebuilt per pass). The engine only reads
/// them and reports changes as [`ItemUpdate`]s; see [`crate::apply_updates`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemGeometry {
    pub path: IndexPath,
    pub identifier: String,
    /// The rectangle produced by the host's ordinary layout. Never modified by the engine.
    pub original_rect: Rect,
    /// The rectangle currently applied to the item. Starts equal to `original_rect`.
    pub rect: Rect,
    pub z_index: i32,
}

impl ItemGeometry {
    pub fn new(path: IndexPath, identifier: impl Into<String>, original_rect: Rect) -> Self {
        Self {
            path,
            identifier: identifier.into(),
            original_rect,
            rect: original_rect,
            z_index: 0,
        }
    }

    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Restores `rect` to `original_rect`.
    pub fn reset_rect(&mut self) {
        self.rect = self.original_rect;
    }
}

/// A rectangle change produced by a recompute pass.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemUpdate {
    /// Index of the item in the host's item slice.
    pub index: usize,
    pub path: IndexPath,
    pub old_rect: Rect,
    pub new_rect: Rect,
}

/// Outcome of a non-empty recompute pass.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PassSummary {
    /// Total vertical scrollable extent the host should apply.
    pub content_height: f64,
    /// Index into the participating list of the item in the spotlight.
    pub spotlight_index: usize,
    /// Whether the stretchy last item mode was in effect for this pass.
    pub stretchy_applied: bool,
    pub participants: usize,
    /// Number of [`ItemUpdate`]s emitted.
    pub updated: usize,
}
