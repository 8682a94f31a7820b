use crate::reports;
use clap::Args;
use mirrorgrid::attempts::AttemptLog;
use mirrorgrid::canonical::canonicalize;
use mirrorgrid::checker::check;
use mirrorgrid::config::{AttemptConfig, GridConfig};
use mirrorgrid::error::{MgResult, MirrorGridError};
use mirrorgrid::geometry::{Grid, Segment};
use mirrorgrid::session::{AttemptRecord, Feedback};
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    #[command(flatten)]
    pub grid: GridConfig,

    #[command(flatten)]
    pub attempt: AttemptConfig,

    #[arg(short, long)]
    pub shape: String,

    #[arg(long)]
    pub shapes_file: Option<PathBuf>,

    /// JSON list of `{c1,r1,c2,r2}` segments drawn by the user.
    #[arg(long)]
    pub strokes: PathBuf,

    /// Seconds spent on the drawing, recorded with the attempt.
    #[arg(long, default_value_t = 0)]
    pub elapsed: u64,

    /// Append the attempt to this CSV log.
    #[arg(long)]
    pub log: Option<PathBuf>,

    /// Print the verdict as JSON instead of tables.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: CheckArgs, grid: &Grid) -> MgResult<bool> {
    let shape = super::resolve_shape(&args.shape, args.shapes_file.as_deref(), grid)?;

    info!("✏️  Loading strokes: {}", args.strokes.display());
    let content = fs::read_to_string(&args.strokes)?;
    let strokes: Vec<Segment> = serde_json::from_str(&content)?;
    if let Some(seg) = strokes
        .iter()
        .find(|s| !grid.contains(s.start()) || !grid.contains(s.end()))
    {
        return Err(MirrorGridError::Drawing(format!(
            "stroke {} in {} leaves the {}x{} grid",
            seg,
            args.strokes.display(),
            grid.cols(),
            grid.rows()
        )));
    }

    let verdict = check(&strokes, &shape, grid);

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

    if let Some(path) = &args.log {
        let record = AttemptRecord {
            user_id: args.attempt.user_id,
            session_id: args.attempt.session_id.clone(),
            skill_id: args.attempt.skill_id,
            difficulty_level: args.attempt.difficulty.clone(),
            question_text: args.attempt.question_text.clone(),
            is_correct: verdict.correct,
            time_spent_seconds: args.elapsed,
        };
        AttemptLog::open(path)?.append(&record)?;
    }

    info!("{}", Feedback::from_verdict(&verdict));
    Ok(verdict.correct)
}
