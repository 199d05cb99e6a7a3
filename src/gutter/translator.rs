use super::types::{LineSet, MarkerPosition, Placements};

/// Map each line directly to a zero-width position at its start.
pub fn lines_to_positions(lines: &[usize]) -> Vec<MarkerPosition> {
    lines.iter().map(|&line| MarkerPosition::line_start(line)).collect()
}

/// Lines that get a deleted-bottom marker: every deleted line shifted up by
/// one, skipping anything that would land above line 1.
pub fn deleted_bottom_lines(deleted: &[usize]) -> LineSet {
    deleted
        .iter()
        .filter(|&&line| line > 1)
        .map(|&line| line - 1)
        .collect()
}

/// Translate the three line sets from a diff into marker placements.
///
/// Nothing is merged or deduplicated across categories; a line present in
/// several sets gets a placement in each.
pub fn compute_placements(inserted: &[usize], modified: &[usize], deleted: &[usize]) -> Placements {
    Placements {
        inserted: lines_to_positions(inserted),
        modified: lines_to_positions(modified),
        deleted_top: lines_to_positions(deleted),
        deleted_bottom: lines_to_positions(&deleted_bottom_lines(deleted)),
    }
}
