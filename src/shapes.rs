use crate::error::{MgResult, MirrorGridError};
use crate::geometry::{Grid, GridPoint, Segment};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};
use tracing::debug;

/// The given half of a figure: a polyline that starts and ends on the axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeDefinition {
    pub name: String,
    pub points: Vec<GridPoint>,
}

impl ShapeDefinition {
    pub fn new(name: impl Into<String>, points: Vec<GridPoint>) -> Self {
        Self {
            name: name.into(),
            points,
        }
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> MgResult<Vec<Self>> {
        let content = fs::read_to_string(path)?;
        let shapes: Vec<ShapeDefinition> = serde_json::from_str(&content)?;
        Ok(shapes)
    }

    pub fn left_segments(&self) -> Vec<Segment> {
        self.points
            .windows(2)
            .map(|pair| Segment::new(pair[0], pair[1]))
            .collect()
    }

    /// The answer: every given segment with its columns mirrored, rows kept.
    pub fn expected_segments(&self, grid: &Grid) -> Vec<Segment> {
        self.left_segments()
            .iter()
            .map(|seg| grid.mirror_segment(seg))
            .collect()
    }

    pub fn validate(&self, grid: &Grid) -> MgResult<()> {
        let fail = |reason: String| Err(MirrorGridError::invalid_shape(&self.name, reason));

        let (first, last) = match (self.points.first(), self.points.last()) {
            (Some(f), Some(l)) if self.points.len() >= 2 => (*f, *l),
            _ => return fail("needs at least two points".to_string()),
        };
        if let Some(p) = self.points.iter().find(|p| !grid.contains(**p)) {
            return fail(format!("point {} is outside the grid", p));
        }
        if let Some(p) = self.points.iter().find(|p| p.col > grid.center_col()) {
            return fail(format!("point {} is right of the axis", p));
        }
        if !grid.is_axis(first.col) || !grid.is_axis(last.col) {
            return fail(format!(
                "path must start and end on axis column {} (starts at {}, ends at {})",
                grid.center_col(),
                first,
                last
            ));
        }
        if let Some(seg) = self.left_segments().iter().find(|s| s.unit_len().is_none()) {
            return fail(format!("segment {} is not axis-aligned", seg));
        }
        if let Some(p) = self
            .expected_segments(grid)
            .iter()
            .flat_map(|s| [s.start(), s.end()])
            .find(|p| !grid.contains(*p))
        {
            return fail(format!("mirrored point {} falls outside the grid", p));
        }
        debug!("shape '{}' validated ({} points)", self.name, self.points.len());
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum KnownShape {
    Rectangle,
    Steps,
    ThickT,
    Pedestal,
    Spool,
    SteppedPyramid,
    NotchedRectangle,
    CastleWall,
    Key,
    PixelStep,
}

impl KnownShape {
    // Authored for the stock 11x10 grid with the axis on column 5.
    pub fn path(&self) -> &'static [(i32, i32)] {
        match self {
            Self::Rectangle => &[(5, 2), (2, 2), (2, 8), (5, 8)],
            Self::Steps => &[
                (5, 2),
                (4, 2),
                (4, 4),
                (3, 4),
                (3, 6),
                (2, 6),
                (2, 8),
                (5, 8),
            ],
            Self::ThickT => &[(5, 2), (1, 2), (1, 4), (4, 4), (4, 8), (5, 8)],
            Self::Pedestal => &[(5, 2), (4, 2), (4, 6), (1, 6), (1, 8), (5, 8)],
            Self::Spool => &[
                (5, 2),
                (1, 2),
                (1, 4),
                (3, 4),
                (3, 6),
                (1, 6),
                (1, 8),
                (5, 8),
            ],
            Self::SteppedPyramid => &[
                (5, 1),
                (4, 1),
                (4, 3),
                (3, 3),
                (3, 5),
                (2, 5),
                (2, 9),
                (5, 9),
            ],
            Self::NotchedRectangle => &[
                (5, 2),
                (2, 2),
                (2, 4),
                (3, 4),
                (3, 6),
                (2, 6),
                (2, 8),
                (5, 8),
            ],
            Self::CastleWall => &[
                (5, 8),
                (1, 8),
                (1, 4),
                (2, 4),
                (2, 5),
                (3, 5),
                (3, 4),
                (4, 4),
                (4, 5),
                (5, 5),
            ],
            Self::Key => &[
                (5, 3),
                (2, 3),
                (2, 4),
                (3, 4),
                (3, 5),
                (2, 5),
                (2, 7),
                (5, 7),
            ],
            Self::PixelStep => &[
                (5, 2),
                (3, 2),
                (3, 3),
                (2, 3),
                (2, 6),
                (4, 6),
                (4, 7),
                (5, 7),
            ],
        }
    }

    pub fn definition(&self) -> ShapeDefinition {
        ShapeDefinition::new(
            self.to_string(),
            self.path().iter().map(|&p| GridPoint::from(p)).collect(),
        )
    }
}

/// The authored shapes in question order.
pub fn all_shapes() -> Vec<ShapeDefinition> {
    KnownShape::iter().map(|s| s.definition()).collect()
}

pub fn find_shape(name: &str) -> MgResult<ShapeDefinition> {
    name.parse::<KnownShape>()
        .map(|s| s.definition())
        .map_err(|_| {
            let known: Vec<String> = KnownShape::iter().map(|s| s.to_string()).collect();
            MirrorGridError::UnknownShape {
                name: name.to_string(),
                origin: "authored shapes".to_string(),
                known: known.join(", "),
            }
        })
}
