#![allow(dead_code)]

use mirrorgrid::geometry::{Grid, GridPoint, PixelPoint, Segment};
use mirrorgrid::recorder::{DrawingSession, PointerEvent};

pub fn seg(c1: i32, r1: i32, c2: i32, r2: i32) -> Segment {
    Segment { c1, r1, c2, r2 }
}

/// Pixel centre of a lattice node on the stock grid.
pub fn px(col: i32, row: i32) -> PixelPoint {
    Grid::default().to_pixel(GridPoint::new(col, row))
}

/// Builder for pointer traces, so tests read like a drag.
pub struct Drag {
    events: Vec<PointerEvent>,
}

impl Drag {
    pub fn from(col: i32, row: i32) -> Self {
        Self {
            events: vec![PointerEvent::down(px(col, row))],
        }
    }

    pub fn to(mut self, col: i32, row: i32) -> Self {
        self.events.push(PointerEvent::moved(px(col, row)));
        self
    }

    pub fn to_pixel(mut self, x: f64, y: f64) -> Self {
        self.events.push(PointerEvent::moved(PixelPoint::new(x, y)));
        self
    }

    pub fn release(mut self) -> Vec<PointerEvent> {
        self.events.push(PointerEvent::Up);
        self.events
    }

    pub fn held(self) -> Vec<PointerEvent> {
        self.events
    }
}

pub fn replay(drawing: &mut DrawingSession, events: &[PointerEvent]) {
    let grid = Grid::default();
    for event in events {
        drawing.handle(*event, &grid);
    }
}

/// The three outer edges of the mirrored rectangle, as a user would draw them.
pub fn rectangle_answer() -> Vec<Segment> {
    vec![seg(5, 2, 8, 2), seg(8, 2, 8, 8), seg(8, 8, 5, 8)]
}
