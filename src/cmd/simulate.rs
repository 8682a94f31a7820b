use crate::reports;
use clap::Args;
use mirrorgrid::config::{AttemptConfig, GridConfig};
use mirrorgrid::error::MgResult;
use mirrorgrid::geometry::Grid;
use mirrorgrid::session::{Advance, QuizSession};
use mirrorgrid::shapes::all_shapes;
use mirrorgrid::simulate::{answer_path, drag_trace, TraceParams};
use tracing::{info, warn};

#[derive(Args, Debug, Clone)]
pub struct SimulateArgs {
    #[command(flatten)]
    pub grid: GridConfig,

    /// Only simulate shapes whose name contains this text.
    #[arg(short, long)]
    pub shape: Option<String>,

    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Max pixel jitter around each node.
    #[arg(long, default_value_t = 4.0)]
    pub jitter: f64,

    /// Stop each drag one leg short, so every answer is incomplete.
    #[arg(long, default_value_t = false)]
    pub drop_last: bool,
}

/// Plays a full quiz session with synthetic drags; returns the number of
/// correct answers.
pub fn run(args: SimulateArgs, grid: &Grid) -> MgResult<usize> {
    let shapes: Vec<_> = all_shapes()
        .into_iter()
        .filter(|s| super::matches_filter(&s.name, args.shape.as_deref()))
        .collect();
    for shape in &shapes {
        shape.validate(grid)?;
    }

    let mut rng = fastrand::Rng::with_seed(args.seed);
    let params = TraceParams {
        jitter: args.jitter,
        wander: true,
    };
    let mut session = QuizSession::new(grid.clone(), shapes, AttemptConfig::default());
    let mut correct = 0;

    while let Some(shape) = session.current_shape().cloned() {
        let mut path = answer_path(&shape, grid);
        if args.drop_last {
            path.pop();
        }
        let events = drag_trace(&path, grid, params, &mut rng);
        info!("{}: {} pointer events", session.progress_label(), events.len());
        for event in events {
            session.pointer(event);
        }
        session.tick(1 + rng.u64(0..5));

        if let Some(sub) = session.submit() {
            reports::print_verdict(&shape, session.drawing().strokes().len(), &sub.verdict);
            if sub.verdict.correct {
                correct += 1;
            }
        }
        match session.advance() {
            Advance::Next(_) => {}
            Advance::Finished => break,
            Advance::Pending => {
                warn!("⚠️  {} produced no strokes; stopping early.", shape.name);
                break;
            }
        }
    }

    println!(
        "\n🏁 {} / {} correct in {}s simulated",
        correct,
        session.total(),
        session.elapsed_secs()
    );
    Ok(correct)
}
