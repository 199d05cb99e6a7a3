use super::{DiffSource, Document, MarkerSurface, Workspace};
use crate::config::GutterConfig;
use crate::error::{GutterError, Result};
use crate::gutter::{compute_placements, MarkerKind, Placements};

/// Outcome of one trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Refresh {
    /// No active document; nothing was cleared or drawn.
    Skipped,
    Drawn(RefreshSummary),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshSummary {
    pub document: Document,
    pub placements: Placements,
}

impl RefreshSummary {
    pub fn count(&self, kind: MarkerKind) -> usize {
        self.placements.positions(kind).len()
    }
}

/// The marker refresh run on save or focus change.
#[derive(Debug, Clone, Default)]
pub struct GutterCommand {
    config: GutterConfig,
}

impl GutterCommand {
    pub fn new(config: GutterConfig) -> Self {
        Self { config }
    }

    /// Clear old markers, diff the active document and draw the new markers.
    ///
    /// A missing active document is not an error: the host delivers another
    /// trigger once focus settles, so this one is skipped.
    pub fn run<W, D, S>(&self, workspace: &W, diff: &mut D, surface: &mut S) -> Result<Refresh>
    where
        W: Workspace + ?Sized,
        D: DiffSource + ?Sized,
        S: MarkerSurface + ?Sized,
    {
        let Some(document) = workspace.active_document() else {
            tracing::debug!("no active document, skipping gutter refresh");
            return Ok(Refresh::Skipped);
        };

        surface
            .clear_markers(&MarkerKind::ALL)
            .map_err(|source| GutterError::Render {
                category: "all".to_string(),
                source,
            })?;

        let lines = diff.diff(&document).map_err(|source| GutterError::Diff {
            document: document.name.clone(),
            source,
        })?;
        tracing::debug!(
            document = %document.name,
            inserted = lines.inserted.len(),
            modified = lines.modified.len(),
            deleted = lines.deleted.len(),
            "diff computed"
        );

        let placements = compute_placements(&lines.inserted, &lines.modified, &lines.deleted);

        for kind in MarkerKind::ALL {
            surface
                .draw_markers(kind, placements.positions(kind), self.config.style(kind))
                .map_err(|source| GutterError::Render {
                    category: kind.key().to_string(),
                    source,
                })?;
        }

        tracing::info!(
            document = %document.name,
            deleted_top = placements.deleted_top.len(),
            deleted_bottom = placements.deleted_bottom.len(),
            inserted = placements.inserted.len(),
            modified = placements.modified.len(),
            "gutter markers drawn"
        );

        Ok(Refresh::Drawn(RefreshSummary {
            document,
            placements,
        }))
    }
}
