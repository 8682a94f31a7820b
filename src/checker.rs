use crate::canonical::{canonicalize, CanonicalKey, EdgeSet};
use crate::geometry::{Grid, Segment};
use crate::shapes::ShapeDefinition;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub correct: bool,
    /// Expected unit edges the drawing does not cover.
    pub missing: Vec<CanonicalKey>,
    /// Drawn unit edges that are not part of the mirror image.
    pub extra: Vec<CanonicalKey>,
    pub expected_count: usize,
}

impl Verdict {
    /// Share of expected edges that were drawn, ignoring extras.
    pub fn score(&self) -> f64 {
        if self.expected_count == 0 {
            return if self.extra.is_empty() { 1.0 } else { 0.0 };
        }
        let hit = self.expected_count - self.missing.len();
        hit as f64 / self.expected_count as f64
    }
}

/// Compares two canonical edge sets exactly.
pub fn check_keys(user: &EdgeSet, expected: &EdgeSet) -> Verdict {
    let missing = expected.difference(user);
    let extra = user.difference(expected);
    Verdict {
        correct: missing.is_empty() && extra.is_empty(),
        missing,
        extra,
        expected_count: expected.len(),
    }
}

pub fn check_segments(user: &[Segment], expected: &[Segment], axis_col: i32) -> Verdict {
    check_keys(
        &canonicalize(user, axis_col),
        &canonicalize(expected, axis_col),
    )
}

/// Decides whether `user` is exactly the mirror image of `shape`'s given half.
pub fn check(user: &[Segment], shape: &ShapeDefinition, grid: &Grid) -> Verdict {
    let expected = shape.expected_segments(grid);
    check_segments(user, &expected, grid.center_col())
}
