use crate::config::GridConfig;
use crate::error::MgResult;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Multiplier folding `(row, col)` into one ordering value. Columns stay
/// well below it on any authored grid.
pub const COMPOSITE_SCALE: i64 = 100;

/// A lattice node. Ordered row-major, the same order as [`GridPoint::composite`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPoint {
    pub col: i32,
    pub row: i32,
}

impl GridPoint {
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    pub fn composite(&self) -> i64 {
        self.row as i64 * COMPOSITE_SCALE + self.col as i64
    }
}

impl Ord for GridPoint {
    fn cmp(&self, other: &Self) -> Ordering {
        self.composite()
            .cmp(&other.composite())
            .then_with(|| (self.row, self.col).cmp(&(other.row, other.col)))
    }
}

impl PartialOrd for GridPoint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for GridPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.col, self.row)
    }
}

impl From<(i32, i32)> for GridPoint {
    fn from(v: (i32, i32)) -> Self {
        GridPoint { col: v.0, row: v.1 }
    }
}

/// Canvas-space position in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for PixelPoint {
    fn from(v: (f64, f64)) -> Self {
        PixelPoint { x: v.0, y: v.1 }
    }
}

/// On-screen placement of the canvas, as reported by the host page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClientRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// A straight line between two lattice nodes. Only horizontal and vertical
/// segments carry meaning; anything else is dropped during canonicalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Segment {
    pub c1: i32,
    pub r1: i32,
    pub c2: i32,
    pub r2: i32,
}

impl Segment {
    pub fn new(from: GridPoint, to: GridPoint) -> Self {
        Self {
            c1: from.col,
            r1: from.row,
            c2: to.col,
            r2: to.row,
        }
    }

    pub fn start(&self) -> GridPoint {
        GridPoint::new(self.c1, self.r1)
    }

    pub fn end(&self) -> GridPoint {
        GridPoint::new(self.c2, self.r2)
    }

    pub fn is_horizontal(&self) -> bool {
        self.r1 == self.r2
    }

    pub fn is_vertical(&self) -> bool {
        self.c1 == self.c2
    }

    /// Number of lattice steps covered, or `None` for a diagonal.
    pub fn unit_len(&self) -> Option<u32> {
        if self.is_horizontal() {
            Some(self.c1.abs_diff(self.c2))
        } else if self.is_vertical() {
            Some(self.r1.abs_diff(self.r2))
        } else {
            None
        }
    }

    pub fn reversed(&self) -> Self {
        Segment::new(self.end(), self.start())
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})-({},{})", self.c1, self.r1, self.c2, self.r2)
    }
}

/// The drawing lattice: pixel/lattice conversion and the mirror axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    config: GridConfig,
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            config: GridConfig::default(),
        }
    }
}

impl Grid {
    pub fn new(config: GridConfig) -> MgResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn cols(&self) -> i32 {
        self.config.cols
    }

    pub fn rows(&self) -> i32 {
        self.config.rows
    }

    pub fn center_col(&self) -> i32 {
        self.config.center_col
    }

    pub fn canvas_width(&self) -> f64 {
        self.config.cols as f64 * self.config.cell_size
    }

    pub fn canvas_height(&self) -> f64 {
        self.config.rows as f64 * self.config.cell_size
    }

    pub fn to_pixel(&self, point: GridPoint) -> PixelPoint {
        let cell = self.config.cell_size;
        PixelPoint {
            x: point.col as f64 * cell + cell / 2.0,
            y: point.row as f64 * cell + cell / 2.0,
        }
    }

    /// Snaps a canvas position to the nearest node, or `None` when that node
    /// is off the grid or further than the touch radius.
    pub fn from_pixel(&self, pos: PixelPoint) -> Option<GridPoint> {
        if !pos.x.is_finite() || !pos.y.is_finite() {
            return None;
        }
        let cell = self.config.cell_size;
        // Round half up, so the canvas edge at x = 0 still reaches column 0.
        let col = ((pos.x - cell / 2.0) / cell + 0.5).floor();
        let row = ((pos.y - cell / 2.0) / cell + 0.5).floor();

        if col < 0.0 || col >= self.config.cols as f64 || row < 0.0 || row >= self.config.rows as f64
        {
            return None;
        }
        let point = GridPoint::new(col as i32, row as i32);

        let center = self.to_pixel(point);
        let dist = ((pos.x - center.x).powi(2) + (pos.y - center.y).powi(2)).sqrt();
        if dist > self.config.touch_radius {
            return None;
        }
        Some(point)
    }

    /// Maps a viewport pointer position into canvas space when the canvas is
    /// displayed scaled inside `rect`.
    pub fn canvas_point(&self, client_x: f64, client_y: f64, rect: ClientRect) -> PixelPoint {
        let scale_x = if rect.width > 0.0 {
            self.canvas_width() / rect.width
        } else {
            1.0
        };
        let scale_y = if rect.height > 0.0 {
            self.canvas_height() / rect.height
        } else {
            1.0
        };
        PixelPoint {
            x: (client_x - rect.left) * scale_x,
            y: (client_y - rect.top) * scale_y,
        }
    }

    pub fn mirror_column(&self, col: i32) -> i32 {
        self.config
            .center_col
            .saturating_mul(2)
            .saturating_sub(col)
    }

    pub fn mirror_point(&self, point: GridPoint) -> GridPoint {
        GridPoint::new(self.mirror_column(point.col), point.row)
    }

    pub fn mirror_segment(&self, seg: &Segment) -> Segment {
        Segment::new(self.mirror_point(seg.start()), self.mirror_point(seg.end()))
    }

    pub fn is_axis(&self, col: i32) -> bool {
        col == self.config.center_col
    }

    pub fn contains(&self, point: GridPoint) -> bool {
        (0..self.config.cols).contains(&point.col) && (0..self.config.rows).contains(&point.row)
    }

    /// Nodes the user may draw through: the axis column and everything right of it.
    pub fn is_drawable(&self, point: GridPoint) -> bool {
        self.contains(point) && point.col >= self.config.center_col
    }

    /// Every node, row by row.
    pub fn nodes(&self) -> impl Iterator<Item = GridPoint> + '_ {
        (0..self.config.rows)
            .flat_map(move |row| (0..self.config.cols).map(move |col| GridPoint::new(col, row)))
    }
}
