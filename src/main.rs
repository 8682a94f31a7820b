use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use mirrorgrid::config::GridConfig;
use mirrorgrid::geometry::Grid;
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON grid config; explicit grid flags still win over it.
    #[arg(global = true, long)]
    grid_config: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Shapes(cmd::shapes::ShapesArgs),
    Check(cmd::check::CheckArgs),
    Replay(cmd::replay::ReplayArgs),
    Simulate(cmd::simulate::SimulateArgs),
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    // Logs go to stderr so `--json` output stays machine-readable.
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    info!("🚀 Initializing MirrorGrid...");

    let (cli_grid, sub_name) = match &cli.command {
        Commands::Shapes(args) => (&args.grid, "shapes"),
        Commands::Check(args) => (&args.grid, "check"),
        Commands::Replay(args) => (&args.grid, "replay"),
        Commands::Simulate(args) => (&args.grid, "simulate"),
    };

    let grid_config = match &cli.grid_config {
        Some(path) => {
            let mut file_config = GridConfig::load_from_file(path).unwrap_or_else(|e| {
                error!("❌ {}", e);
                process::exit(1);
            });
            if let Some(sub_matches) = matches.subcommand_matches(sub_name) {
                file_config.merge_from_cli(cli_grid, sub_matches);
            }
            file_config
        }
        None => cli_grid.clone(),
    };

    let grid = Grid::new(grid_config).unwrap_or_else(|e| {
        error!("❌ {}", e);
        process::exit(1);
    });
    info!(
        "📐 Grid {}x{} (axis column {})",
        grid.cols(),
        grid.rows(),
        grid.center_col()
    );

    let outcome = match cli.command {
        Commands::Shapes(args) => cmd::shapes::run(args, &grid).map(|_| true),
        Commands::Check(args) => cmd::check::run(args, &grid),
        Commands::Replay(args) => cmd::replay::run(args, &grid),
        Commands::Simulate(args) => cmd::simulate::run(args, &grid).map(|_| true),
    };

    match outcome {
        Ok(true) => {}
        Ok(false) => process::exit(2),
        Err(e) => {
            error!("❌ {}", e);
            process::exit(1);
        }
    }
}
