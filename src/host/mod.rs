//! Seams to the host editor and the diff engine.
//!
//! The translator never touches an editor API; everything host-specific sits
//! behind the three traits here.

mod memory;
mod refresh;

pub use memory::{MemoryWorkspace, RecordingSurface, StaticDiff, SurfaceCall};
pub use refresh::{GutterCommand, Refresh, RefreshSummary};

use crate::config::MarkerStyle;
use crate::error::BoxError;
use crate::gutter::{LineSet, MarkerKind, MarkerPosition};
use serde::{Deserialize, Serialize};

/// Identity of the document currently shown in the active view.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Document {
    pub name: String,
}

impl Document {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Line sets for one document, as produced by the diff engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffLines {
    #[serde(default)]
    pub inserted: LineSet,
    #[serde(default)]
    pub modified: LineSet,
    #[serde(default)]
    pub deleted: LineSet,
}

pub trait Workspace {
    /// The document in the active view, if there is one. Focus changes can
    /// leave the host without one for a moment.
    fn active_document(&self) -> Option<Document>;
}

pub trait DiffSource {
    fn diff(&mut self, document: &Document) -> Result<DiffLines, BoxError>;
}

pub trait MarkerSurface {
    /// Remove every marker previously drawn for `kinds`. Must be idempotent.
    fn clear_markers(&mut self, kinds: &[MarkerKind]) -> Result<(), BoxError>;

    fn draw_markers(
        &mut self,
        kind: MarkerKind,
        positions: &[MarkerPosition],
        style: &MarkerStyle,
    ) -> Result<(), BoxError>;
}
