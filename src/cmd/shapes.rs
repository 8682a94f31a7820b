use crate::reports;
use clap::Args;
use mirrorgrid::canonical::canonicalize;
use mirrorgrid::config::GridConfig;
use mirrorgrid::error::MgResult;
use mirrorgrid::geometry::Grid;
use mirrorgrid::shapes::{all_shapes, ShapeDefinition};
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct ShapesArgs {
    #[command(flatten)]
    pub grid: GridConfig,

    /// Only show shapes whose name contains this text.
    #[arg(short, long)]
    pub shape: Option<String>,

    /// JSON list of custom shapes to show instead of the authored set.
    #[arg(long)]
    pub shapes_file: Option<PathBuf>,

    /// Print the table only, without lattice drawings.
    #[arg(long, default_value_t = false)]
    pub summary: bool,
}

pub fn run(args: ShapesArgs, grid: &Grid) -> MgResult<()> {
    let shapes = match &args.shapes_file {
        Some(path) => ShapeDefinition::load_from_file(path)?,
        None => all_shapes(),
    };

    let mut selected = Vec::new();
    for shape in shapes {
        if !super::matches_filter(&shape.name, args.shape.as_deref()) {
            continue;
        }
        shape.validate(grid)?;
        selected.push(shape);
    }

    println!("\n🪞 === SYMMETRY SHAPES === 🪞");
    if !args.summary {
        for shape in &selected {
            let expected = canonicalize(&shape.expected_segments(grid), grid.center_col());
            reports::grid::print_shape(&shape.name, grid, &shape.left_segments(), &expected);
        }
    }
    reports::print_shape_table(&selected, grid);
    Ok(())
}
