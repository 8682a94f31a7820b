use crate::checker::{check, Verdict};
use crate::geometry::{Grid, GridPoint, PixelPoint, Segment};
use crate::shapes::ShapeDefinition;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// A pointer event in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PointerEvent {
    Down { x: f64, y: f64 },
    Move { x: f64, y: f64 },
    Up,
    Leave,
}

impl PointerEvent {
    pub fn down(pos: PixelPoint) -> Self {
        Self::Down { x: pos.x, y: pos.y }
    }

    pub fn moved(pos: PixelPoint) -> Self {
        Self::Move { x: pos.x, y: pos.y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        /// Node the next segment starts from.
        anchor: GridPoint,
        /// Raw pointer position, for the rubber band only.
        pointer: PixelPoint,
    },
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    pub fn anchor(&self) -> Option<GridPoint> {
        match self {
            Self::Dragging { anchor, .. } => Some(*anchor),
            Self::Idle => None,
        }
    }
}

/// One transition of the Idle/Dragging machine. Returns the next state and
/// the segment committed by this event, if any.
pub fn step(state: DragState, event: PointerEvent, grid: &Grid) -> (DragState, Option<Segment>) {
    let snap = |pos: PixelPoint| grid.from_pixel(pos).filter(|p| grid.is_drawable(*p));

    match (state, event) {
        (_, PointerEvent::Down { x, y }) => {
            let pos = PixelPoint::new(x, y);
            match snap(pos) {
                Some(anchor) => (
                    DragState::Dragging {
                        anchor,
                        pointer: pos,
                    },
                    None,
                ),
                None => (state, None),
            }
        }
        (DragState::Dragging { anchor, .. }, PointerEvent::Move { x, y }) => {
            let pos = PixelPoint::new(x, y);
            match snap(pos) {
                Some(node) if node != anchor => (
                    DragState::Dragging {
                        anchor: node,
                        pointer: pos,
                    },
                    Some(Segment::new(anchor, node)),
                ),
                _ => (
                    DragState::Dragging {
                        anchor,
                        pointer: pos,
                    },
                    None,
                ),
            }
        }
        (DragState::Idle, PointerEvent::Move { .. }) => (DragState::Idle, None),
        (_, PointerEvent::Up | PointerEvent::Leave) => (DragState::Idle, None),
    }
}

/// The user's in-progress answer to one question.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawingSession {
    strokes: Vec<Segment>,
    drag: DragState,
    submitted: bool,
}

impl DrawingSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strokes(&self) -> &[Segment] {
        &self.strokes
    }

    pub fn drag(&self) -> DragState {
        self.drag
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Applies a pointer event. After submit only the release is honoured,
    /// so a drag in progress still ends.
    pub fn handle(&mut self, event: PointerEvent, grid: &Grid) -> Option<Segment> {
        if self.submitted {
            if matches!(event, PointerEvent::Up | PointerEvent::Leave) {
                self.drag = DragState::Idle;
            }
            return None;
        }
        let (next, committed) = step(self.drag, event, grid);
        self.drag = next;
        if let Some(seg) = committed {
            trace!("stroke committed: {}", seg);
            self.strokes.push(seg);
        }
        committed
    }

    pub fn undo(&mut self) -> Option<Segment> {
        if self.submitted {
            return None;
        }
        self.strokes.pop()
    }

    pub fn clear(&mut self) -> usize {
        if self.submitted {
            return 0;
        }
        let dropped = self.strokes.len();
        self.strokes.clear();
        dropped
    }

    pub fn can_submit(&self) -> bool {
        !self.submitted && !self.strokes.is_empty()
    }

    /// Checks the drawing and locks it. `None` if there is nothing to submit.
    pub fn submit(&mut self, shape: &ShapeDefinition, grid: &Grid) -> Option<Verdict> {
        if !self.can_submit() {
            return None;
        }
        self.submitted = true;
        self.drag = DragState::Idle;
        let verdict = check(&self.strokes, shape, grid);
        debug!(
            "submitted {} strokes for '{}': correct={} missing={} extra={}",
            self.strokes.len(),
            shape.name,
            verdict.correct,
            verdict.missing.len(),
            verdict.extra.len()
        );
        Some(verdict)
    }

    /// Rubber band from the anchor node to the raw pointer while dragging.
    pub fn preview(&self, grid: &Grid) -> Option<(PixelPoint, PixelPoint)> {
        match self.drag {
            DragState::Dragging { anchor, pointer } => Some((grid.to_pixel(anchor), pointer)),
            DragState::Idle => None,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(grid: &Grid, col: i32, row: i32) -> PixelPoint {
        grid.to_pixel(GridPoint::new(col, row))
    }

    #[test]
    fn move_while_idle_is_ignored() {
        let grid = Grid::default();
        let (state, seg) = step(DragState::Idle, PointerEvent::moved(at(&grid, 7, 2)), &grid);
        assert_eq!(state, DragState::Idle);
        assert!(seg.is_none());
    }

    #[test]
    fn down_on_given_half_does_not_start_drag() {
        let grid = Grid::default();
        let (state, _) = step(DragState::Idle, PointerEvent::down(at(&grid, 4, 2)), &grid);
        assert!(!state.is_dragging());
    }

    #[test]
    fn release_after_submit_still_ends_drag() {
        let grid = Grid::default();
        let shape = crate::shapes::KnownShape::Rectangle.definition();
        let mut drawing = DrawingSession::new();
        drawing.handle(PointerEvent::down(at(&grid, 5, 2)), &grid);
        drawing.handle(PointerEvent::moved(at(&grid, 6, 2)), &grid);
        assert!(drawing.drag().is_dragging());
        assert!(drawing.submit(&shape, &grid).is_some());
        assert!(!drawing.drag().is_dragging());

        drawing.handle(PointerEvent::down(at(&grid, 6, 2)), &grid);
        assert!(!drawing.drag().is_dragging());
        drawing.handle(PointerEvent::Up, &grid);
        assert_eq!(drawing.drag(), DragState::Idle);
    }
}
