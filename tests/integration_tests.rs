use std::fs;

use vcs_gutter::error::BoxError;
use vcs_gutter::gutter::{MarkerKind, MarkerPosition};
use vcs_gutter::host::{
    DiffLines, DiffSource, Document, MarkerSurface, MemoryWorkspace, RecordingSurface, StaticDiff,
    SurfaceCall,
};
use vcs_gutter::{GutterCommand, GutterConfig, GutterError, MarkerStyle, Refresh};

fn lines(inserted: &[usize], modified: &[usize], deleted: &[usize]) -> DiffLines {
    DiffLines {
        inserted: inserted.to_vec(),
        modified: modified.to_vec(),
        deleted: deleted.to_vec(),
    }
}

struct FailingDiff;

impl DiffSource for FailingDiff {
    fn diff(&mut self, _document: &Document) -> Result<DiffLines, BoxError> {
        Err("not a git repository".into())
    }
}

/// Surface that records like `RecordingSurface` but rejects one category.
struct FailingSurface {
    fail_on: MarkerKind,
    inner: RecordingSurface,
}

impl MarkerSurface for FailingSurface {
    fn clear_markers(&mut self, kinds: &[MarkerKind]) -> Result<(), BoxError> {
        self.inner.clear_markers(kinds)
    }

    fn draw_markers(
        &mut self,
        kind: MarkerKind,
        positions: &[MarkerPosition],
        style: &MarkerStyle,
    ) -> Result<(), BoxError> {
        if kind == self.fail_on {
            return Err("region limit reached".into());
        }
        self.inner.draw_markers(kind, positions, style)
    }
}

#[cfg(test)]
mod refresh_tests {
    use super::*;

    #[test]
    fn test_no_active_document_is_a_silent_skip() {
        let workspace = MemoryWorkspace::default();
        let mut diff = StaticDiff::new(lines(&[1], &[2], &[3]));
        let mut surface = RecordingSurface::new();

        let outcome = GutterCommand::default()
            .run(&workspace, &mut diff, &mut surface)
            .expect("skip is not an error");

        assert_eq!(outcome, Refresh::Skipped);
        assert!(surface.calls.is_empty(), "nothing should be cleared or drawn");
        assert_eq!(diff.calls, 0, "diff should not run without a document");
    }

    #[test]
    fn test_clears_before_drawing_in_fixed_order() {
        let workspace = MemoryWorkspace::with_active("main.rs");
        let mut diff = StaticDiff::new(lines(&[2], &[9], &[5]));
        let mut surface = RecordingSurface::new();

        GutterCommand::default()
            .run(&workspace, &mut diff, &mut surface)
            .unwrap();

        assert_eq!(surface.calls.len(), 5);
        assert_eq!(surface.calls[0], SurfaceCall::Clear(MarkerKind::ALL.to_vec()));

        let drawn: Vec<MarkerKind> = surface.calls[1..]
            .iter()
            .map(|call| match call {
                SurfaceCall::Draw { kind, .. } => *kind,
                other => panic!("expected draw, got {:?}", other),
            })
            .collect();
        assert_eq!(
            drawn,
            vec![
                MarkerKind::DeletedTop,
                MarkerKind::DeletedBottom,
                MarkerKind::Inserted,
                MarkerKind::Modified,
            ]
        );
    }

    #[test]
    fn test_deleted_block_draws_two_glyph_rows() {
        let workspace = MemoryWorkspace::with_active("main.rs");
        let mut diff = StaticDiff::new(lines(&[], &[], &[5, 6, 7]));
        let mut surface = RecordingSurface::new();

        let outcome = GutterCommand::default()
            .run(&workspace, &mut diff, &mut surface)
            .unwrap();

        assert_eq!(surface.shown(MarkerKind::DeletedTop), &[5, 6, 7]);
        assert_eq!(surface.shown(MarkerKind::DeletedBottom), &[4, 5, 6]);
        assert!(surface.shown(MarkerKind::Inserted).is_empty());

        match outcome {
            Refresh::Drawn(summary) => {
                assert_eq!(summary.document, Document::new("main.rs"));
                assert_eq!(summary.count(MarkerKind::DeletedTop), 3);
                assert_eq!(summary.count(MarkerKind::DeletedBottom), 3);
            }
            Refresh::Skipped => panic!("refresh should have drawn"),
        }
    }

    #[test]
    fn test_second_refresh_replaces_previous_markers() {
        let workspace = MemoryWorkspace::with_active("main.rs");
        let mut surface = RecordingSurface::new();
        let command = GutterCommand::default();

        let mut first = StaticDiff::new(lines(&[1, 2], &[4], &[]));
        command.run(&workspace, &mut first, &mut surface).unwrap();
        assert_eq!(surface.shown(MarkerKind::Inserted), &[1, 2]);

        let mut second = StaticDiff::new(lines(&[], &[], &[1]));
        command.run(&workspace, &mut second, &mut surface).unwrap();
        assert!(surface.shown(MarkerKind::Inserted).is_empty());
        assert!(surface.shown(MarkerKind::Modified).is_empty());
        assert_eq!(surface.shown(MarkerKind::DeletedTop), &[1]);
        assert!(surface.shown(MarkerKind::DeletedBottom).is_empty());
    }

    #[test]
    fn test_overlapping_categories_are_all_drawn() {
        let workspace = MemoryWorkspace::with_active("lib.rs");
        let mut diff = StaticDiff::new(lines(&[3], &[3], &[3]));
        let mut surface = RecordingSurface::new();

        GutterCommand::default()
            .run(&workspace, &mut diff, &mut surface)
            .unwrap();

        assert_eq!(surface.shown(MarkerKind::Inserted), &[3]);
        assert_eq!(surface.shown(MarkerKind::Modified), &[3]);
        assert_eq!(surface.shown(MarkerKind::DeletedTop), &[3]);
        assert_eq!(surface.shown(MarkerKind::DeletedBottom), &[2]);
    }

    #[test]
    fn test_diff_failure_leaves_markers_cleared() {
        let workspace = MemoryWorkspace::with_active("notes.txt");
        let mut surface = RecordingSurface::new();

        let err = GutterCommand::default()
            .run(&workspace, &mut FailingDiff, &mut surface)
            .unwrap_err();

        assert!(matches!(err, GutterError::Diff { ref document, .. } if document == "notes.txt"));
        assert_eq!(surface.calls, vec![SurfaceCall::Clear(MarkerKind::ALL.to_vec())]);
    }

    #[test]
    fn test_render_failure_stops_remaining_draws() {
        let workspace = MemoryWorkspace::with_active("main.rs");
        let mut diff = StaticDiff::new(lines(&[2], &[9], &[5]));
        let mut surface = FailingSurface {
            fail_on: MarkerKind::DeletedBottom,
            inner: RecordingSurface::new(),
        };

        let err = GutterCommand::default()
            .run(&workspace, &mut diff, &mut surface)
            .unwrap_err();

        match err {
            GutterError::Render { ref category, .. } => assert_eq!(category, "deleted-bottom"),
            ref other => panic!("expected render error, got {:?}", other),
        }

        let drawn: Vec<MarkerKind> = surface
            .inner
            .calls
            .iter()
            .filter_map(|call| match call {
                SurfaceCall::Draw { kind, .. } => Some(*kind),
                SurfaceCall::Clear(_) => None,
            })
            .collect();
        assert_eq!(drawn, vec![MarkerKind::DeletedTop]);
        assert!(surface.inner.shown(MarkerKind::Inserted).is_empty());
        assert!(surface.inner.shown(MarkerKind::Modified).is_empty());
    }

    #[test]
    fn test_configured_styles_reach_the_surface() {
        let mut config = GutterConfig::default();
        config.modified = MarkerStyle::new("diff.changed", "dot");

        let workspace = MemoryWorkspace::with_active("main.rs");
        let mut diff = StaticDiff::new(lines(&[], &[8], &[]));
        let mut surface = RecordingSurface::new();

        GutterCommand::new(config)
            .run(&workspace, &mut diff, &mut surface)
            .unwrap();

        let style = surface
            .calls
            .iter()
            .find_map(|call| match call {
                SurfaceCall::Draw {
                    kind: MarkerKind::Modified,
                    style,
                    ..
                } => Some(style.clone()),
                _ => None,
            })
            .expect("modified markers drawn");
        assert_eq!(style, MarkerStyle::new("diff.changed", "dot"));
    }
}

#[cfg(test)]
mod config_tests {
    use super::*;

    #[test]
    fn test_load_config_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gutter.json");
        fs::write(
            &path,
            r#"{"deleted-top": {"scope": "markup.deleted", "icon": "arrow_up"}}"#,
        )
        .unwrap();

        let config = GutterConfig::load(&path).unwrap();
        assert_eq!(config.deleted_top.icon.as_deref(), Some("arrow_up"));
        assert_eq!(config.inserted, GutterConfig::default().inserted);
    }

    #[test]
    fn test_missing_config_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");

        let err = GutterConfig::load(&path).unwrap_err();
        assert!(matches!(err, GutterError::ConfigRead { .. }));
        assert!(err.to_string().contains("absent.json"));
    }

    #[test]
    fn test_invalid_config_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        let err = GutterConfig::load(&path).unwrap_err();
        assert!(matches!(err, GutterError::ConfigParse { .. }));
    }
}
