use crate::reports;
use clap::Args;
use mirrorgrid::canonical::canonicalize;
use mirrorgrid::config::GridConfig;
use mirrorgrid::error::{MgResult, MirrorGridError};
use mirrorgrid::geometry::{ClientRect, Grid};
use mirrorgrid::recorder::{DrawingSession, PointerEvent};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Args, Debug, Clone)]
pub struct ReplayArgs {
    #[command(flatten)]
    pub grid: GridConfig,

    #[arg(short, long)]
    pub shape: String,

    #[arg(long)]
    pub shapes_file: Option<PathBuf>,

    /// JSON pointer log: either a bare event list or `{ "rect": .., "events": [..] }`.
    #[arg(long)]
    pub events: PathBuf,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

/// Events recorded against a scaled canvas carry its client rect.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PointerLog {
    Scaled {
        rect: ClientRect,
        events: Vec<PointerEvent>,
    },
    Canvas(Vec<PointerEvent>),
}

impl PointerLog {
    fn into_canvas_events(self, grid: &Grid) -> Vec<PointerEvent> {
        match self {
            Self::Canvas(events) => events,
            Self::Scaled { rect, events } => events
                .into_iter()
                .map(|e| match e {
                    PointerEvent::Down { x, y } => PointerEvent::down(grid.canvas_point(x, y, rect)),
                    PointerEvent::Move { x, y } => {
                        PointerEvent::moved(grid.canvas_point(x, y, rect))
                    }
                    other => other,
                })
                .collect(),
        }
    }
}

pub fn run(args: ReplayArgs, grid: &Grid) -> MgResult<bool> {
    let shape = super::resolve_shape(&args.shape, args.shapes_file.as_deref(), grid)?;

    info!("🎞️  Replaying pointer log: {}", args.events.display());
    let content = fs::read_to_string(&args.events)?;
    let log: PointerLog = serde_json::from_str(&content)?;
    let events = log.into_canvas_events(grid);

    let mut drawing = DrawingSession::new();
    for event in events {
        if let Some(seg) = drawing.handle(event, grid) {
            debug!("segment {}", seg);
        }
    }
    // Leave any unfinished drag behind before scoring.
    drawing.handle(PointerEvent::Leave, grid);

    let strokes = drawing.strokes().to_vec();
    let verdict = drawing.submit(&shape, grid).ok_or_else(|| {
        MirrorGridError::Drawing(format!(
            "pointer log {} produced no strokes",
            args.events.display()
        ))
    })?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&verdict)?);
    } else {
        let drawn = canonicalize(&strokes, grid.center_col());
        reports::grid::print_diff(
            &shape.name,
            grid,
            &shape.left_segments(),
            &drawn,
            &verdict.missing,
            &verdict.extra,
        );
        reports::print_verdict(&shape, strokes.len(), &verdict);
    }
    Ok(verdict.correct)
}
