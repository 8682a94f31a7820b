use crate::geometry::{GridPoint, Segment};
use serde::{Deserialize, Serialize};
use std::collections::btree_set;
use std::collections::BTreeSet;
use std::fmt;
use tracing::trace;

/// Direction-independent identity of a single unit edge: the endpoint with
/// the smaller composite always comes first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CanonicalKey {
    pub a: GridPoint,
    pub b: GridPoint,
}

impl CanonicalKey {
    pub fn new(p: GridPoint, q: GridPoint) -> Self {
        if p > q {
            Self { a: q, b: p }
        } else {
            Self { a: p, b: q }
        }
    }

    pub fn as_segment(&self) -> Segment {
        Segment::new(self.a, self.b)
    }
}

impl fmt::Display for CanonicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.a, self.b)
    }
}

/// The set of unit edges a drawing covers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeSet {
    keys: BTreeSet<CanonicalKey>,
}

impl EdgeSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: CanonicalKey) -> bool {
        self.keys.insert(key)
    }

    pub fn contains(&self, key: &CanonicalKey) -> bool {
        self.keys.contains(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn iter(&self) -> btree_set::Iter<'_, CanonicalKey> {
        self.keys.iter()
    }

    /// Keys in `self` but not in `other`, in ascending order.
    pub fn difference(&self, other: &EdgeSet) -> Vec<CanonicalKey> {
        self.keys.difference(&other.keys).copied().collect()
    }
}

impl FromIterator<CanonicalKey> for EdgeSet {
    fn from_iter<I: IntoIterator<Item = CanonicalKey>>(iter: I) -> Self {
        Self {
            keys: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a EdgeSet {
    type Item = &'a CanonicalKey;
    type IntoIter = btree_set::Iter<'a, CanonicalKey>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.iter()
    }
}

/// Breaks one segment into its unit steps. Diagonals and vertical runs along
/// the axis column yield nothing.
pub fn unit_steps(seg: &Segment, axis_col: i32) -> Vec<CanonicalKey> {
    if seg.is_horizontal() {
        let row = seg.r1;
        let (lo, hi) = (seg.c1.min(seg.c2), seg.c1.max(seg.c2));
        (lo..hi)
            .map(|c| CanonicalKey::new(GridPoint::new(c, row), GridPoint::new(c + 1, row)))
            .collect()
    } else if seg.is_vertical() {
        // The axis itself can never be drawn over.
        if seg.c1 == axis_col {
            return Vec::new();
        }
        let col = seg.c1;
        let (lo, hi) = (seg.r1.min(seg.r2), seg.r1.max(seg.r2));
        (lo..hi)
            .map(|r| CanonicalKey::new(GridPoint::new(col, r), GridPoint::new(col, r + 1)))
            .collect()
    } else {
        trace!("dropping diagonal segment {}", seg);
        Vec::new()
    }
}

/// Every unit edge covered by `segments`, however they were chunked or oriented.
pub fn canonicalize(segments: &[Segment], axis_col: i32) -> EdgeSet {
    segments
        .iter()
        .flat_map(|seg| unit_steps(seg, axis_col))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_is_direction_independent() {
        let p = GridPoint::new(6, 3);
        let q = GridPoint::new(6, 4);
        assert_eq!(CanonicalKey::new(p, q), CanonicalKey::new(q, p));
        assert_eq!(CanonicalKey::new(q, p).a, p);
    }

    #[test]
    fn key_displays_like_coordinates() {
        let key = CanonicalKey::new(GridPoint::new(8, 3), GridPoint::new(8, 2));
        assert_eq!(key.to_string(), "8,2-8,3");
    }

    #[test]
    fn zero_length_segment_covers_nothing() {
        let seg = Segment::new(GridPoint::new(7, 7), GridPoint::new(7, 7));
        assert!(unit_steps(&seg, 5).is_empty());
    }

    #[test]
    fn horizontal_run_leaving_axis_is_kept() {
        let seg = Segment::new(GridPoint::new(5, 2), GridPoint::new(8, 2));
        assert_eq!(unit_steps(&seg, 5).len(), 3);
    }
}
