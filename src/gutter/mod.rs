mod translator;
mod types;

pub use translator::{compute_placements, deleted_bottom_lines, lines_to_positions};
pub use types::{LineSet, MarkerKind, MarkerPlacement, MarkerPosition, Placements};
