use crate::geometry::{Grid, GridPoint, PixelPoint};
use crate::recorder::PointerEvent;
use crate::shapes::ShapeDefinition;

/// Pointer trace settings for a synthetic drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceParams {
    /// Max pixel offset applied to each on-node sample. Clamped so samples
    /// always stay inside the touch radius.
    pub jitter: f64,
    /// Emit an off-node sample between every pair of nodes.
    pub wander: bool,
}

impl Default for TraceParams {
    fn default() -> Self {
        Self {
            jitter: 4.0,
            wander: true,
        }
    }
}

/// The mirrored polyline a correct answer traces, starting on the axis.
pub fn answer_path(shape: &ShapeDefinition, grid: &Grid) -> Vec<GridPoint> {
    shape.points.iter().map(|p| grid.mirror_point(*p)).collect()
}

/// Builds one continuous drag through `path`, visiting every intermediate
/// node of each leg the way a finger sliding across the dots would.
pub fn drag_trace(
    path: &[GridPoint],
    grid: &Grid,
    params: TraceParams,
    rng: &mut fastrand::Rng,
) -> Vec<PointerEvent> {
    let mut events = Vec::new();
    let Some(&first) = path.first() else {
        return events;
    };
    let max_jitter = (grid.config().touch_radius / std::f64::consts::SQRT_2 - 0.5)
        .max(0.0)
        .min(params.jitter.max(0.0));
    let sample = |p: GridPoint, rng: &mut fastrand::Rng| {
        let base = grid.to_pixel(p);
        PixelPoint::new(
            base.x + (rng.f64() * 2.0 - 1.0) * max_jitter,
            base.y + (rng.f64() * 2.0 - 1.0) * max_jitter,
        )
    };

    events.push(PointerEvent::down(sample(first, rng)));
    let mut at = first;
    for &target in &path[1..] {
        while at != target {
            let next = GridPoint::new(
                at.col + (target.col - at.col).signum(),
                at.row + (target.row - at.row).signum(),
            );
            if params.wander {
                events.push(PointerEvent::moved(off_node(grid, at, next)));
            }
            events.push(PointerEvent::moved(sample(next, rng)));
            at = next;
        }
    }
    events.push(PointerEvent::Up);
    events
}

// Halfway between two nodes, pushed sideways so it is out of snap range of both.
fn off_node(grid: &Grid, a: GridPoint, b: GridPoint) -> PixelPoint {
    let pa = grid.to_pixel(a);
    let pb = grid.to_pixel(b);
    let cell = grid.config().cell_size;
    let (dx, dy) = (pb.x - pa.x, pb.y - pa.y);
    let len = (dx * dx + dy * dy).sqrt().max(f64::EPSILON);
    PixelPoint::new(
        (pa.x + pb.x) / 2.0 - dy / len * cell * 0.35,
        (pa.y + pb.y) / 2.0 + dx / len * cell * 0.35,
    )
}
