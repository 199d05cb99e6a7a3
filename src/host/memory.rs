//! Plain-data collaborators: used by the stdio front end and by tests.

use super::{DiffLines, DiffSource, Document, MarkerSurface, Workspace};
use crate::config::MarkerStyle;
use crate::error::BoxError;
use crate::gutter::{MarkerKind, MarkerPosition};
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct MemoryWorkspace {
    pub active: Option<Document>,
}

impl MemoryWorkspace {
    pub fn with_active(name: impl Into<String>) -> Self {
        Self {
            active: Some(Document::new(name)),
        }
    }
}

impl Workspace for MemoryWorkspace {
    fn active_document(&self) -> Option<Document> {
        self.active.clone()
    }
}

/// Diff source that answers with precomputed line sets for every document.
#[derive(Debug, Clone, Default)]
pub struct StaticDiff {
    pub lines: DiffLines,
    pub calls: usize,
}

impl StaticDiff {
    pub fn new(lines: DiffLines) -> Self {
        Self { lines, calls: 0 }
    }
}

impl DiffSource for StaticDiff {
    fn diff(&mut self, _document: &Document) -> Result<DiffLines, BoxError> {
        self.calls += 1;
        Ok(self.lines.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceCall {
    Clear(Vec<MarkerKind>),
    Draw {
        kind: MarkerKind,
        lines: Vec<usize>,
        style: MarkerStyle,
    },
}

/// Surface that records every call and tracks what is currently shown.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub calls: Vec<SurfaceCall>,
    shown: HashMap<MarkerKind, Vec<usize>>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines currently carrying a marker of `kind`.
    pub fn shown(&self, kind: MarkerKind) -> &[usize] {
        self.shown.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl MarkerSurface for RecordingSurface {
    fn clear_markers(&mut self, kinds: &[MarkerKind]) -> Result<(), BoxError> {
        for kind in kinds {
            self.shown.remove(kind);
        }
        self.calls.push(SurfaceCall::Clear(kinds.to_vec()));
        Ok(())
    }

    fn draw_markers(
        &mut self,
        kind: MarkerKind,
        positions: &[MarkerPosition],
        style: &MarkerStyle,
    ) -> Result<(), BoxError> {
        let lines: Vec<usize> = positions.iter().map(|p| p.line()).collect();
        self.shown.insert(kind, lines.clone());
        self.calls.push(SurfaceCall::Draw {
            kind,
            lines,
            style: style.clone(),
        });
        Ok(())
    }
}
