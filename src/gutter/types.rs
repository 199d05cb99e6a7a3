use serde::{Deserialize, Serialize};
use std::fmt;

/// 1-based line numbers belonging to one change category.
pub type LineSet = Vec<usize>;

/// Marker categories, also used as the stable keys for clear/draw calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MarkerKind {
    DeletedTop,
    DeletedBottom,
    Inserted,
    Modified,
}

impl MarkerKind {
    /// Every category, in the order a refresh draws them.
    pub const ALL: [MarkerKind; 4] = [
        MarkerKind::DeletedTop,
        MarkerKind::DeletedBottom,
        MarkerKind::Inserted,
        MarkerKind::Modified,
    ];

    pub fn key(self) -> &'static str {
        match self {
            MarkerKind::DeletedTop => "deleted-top",
            MarkerKind::DeletedBottom => "deleted-bottom",
            MarkerKind::Inserted => "inserted",
            MarkerKind::Modified => "modified",
        }
    }
}

impl fmt::Display for MarkerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Zero-width position at the start of a line.
///
/// Stored as a 0-based row, the way editor text points are addressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MarkerPosition {
    row: usize,
}

impl MarkerPosition {
    /// Position at the start of 1-based `line`. Line 0 clamps to the first row.
    pub fn line_start(line: usize) -> Self {
        Self {
            row: line.saturating_sub(1),
        }
    }

    pub fn row(self) -> usize {
        self.row
    }

    /// Column is always 0: markers anchor to the start of the line.
    pub fn column(self) -> usize {
        0
    }

    /// 1-based line number this position sits on.
    pub fn line(self) -> usize {
        self.row + 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerPlacement {
    pub position: MarkerPosition,
    pub kind: MarkerKind,
}

/// Output of one translation: one position list per category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Placements {
    pub inserted: Vec<MarkerPosition>,
    pub modified: Vec<MarkerPosition>,
    pub deleted_top: Vec<MarkerPosition>,
    pub deleted_bottom: Vec<MarkerPosition>,
}

impl Placements {
    pub fn positions(&self, kind: MarkerKind) -> &[MarkerPosition] {
        match kind {
            MarkerKind::DeletedTop => &self.deleted_top,
            MarkerKind::DeletedBottom => &self.deleted_bottom,
            MarkerKind::Inserted => &self.inserted,
            MarkerKind::Modified => &self.modified,
        }
    }

    pub fn is_empty(&self) -> bool {
        MarkerKind::ALL
            .iter()
            .all(|kind| self.positions(*kind).is_empty())
    }

    /// Flattened (position, category) pairs in draw order.
    pub fn iter(&self) -> impl Iterator<Item = MarkerPlacement> + '_ {
        MarkerKind::ALL.into_iter().flat_map(move |kind| {
            self.positions(kind)
                .iter()
                .map(move |&position| MarkerPlacement { position, kind })
        })
    }
}
