use crate::config::MarkerStyle;
use crate::gutter::MarkerKind;
use crate::host::DiffLines;
use serde::{Deserialize, Serialize};

/// One refresh trigger, one JSON object per input line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshRequest {
    /// Active document; absent or null means the host has no active view.
    #[serde(default)]
    pub document: Option<String>,
    #[serde(flatten)]
    pub lines: DiffLines,
}

/// A rendering call, written as one JSON object per output line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum HostCall {
    Clear {
        categories: Vec<MarkerKind>,
    },
    Draw {
        category: MarkerKind,
        lines: Vec<usize>,
        style: MarkerStyle,
    },
}
