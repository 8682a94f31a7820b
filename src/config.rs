use crate::error::{MgResult, MirrorGridError};
use crate::geometry::COMPOSITE_SCALE;
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Lattice constants shared by the grid model, the recorder and the renderer.
#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    #[arg(long, default_value_t = 11)]
    pub cols: i32,
    #[arg(long, default_value_t = 10)]
    pub rows: i32,
    /// Pixel pitch between neighbouring nodes.
    #[arg(long, default_value_t = 36.0)]
    pub cell_size: f64,
    /// Max pixel distance from a node for the pointer to snap to it.
    #[arg(long, default_value_t = 18.0)]
    pub touch_radius: f64,
    /// Column of the mirror axis.
    #[arg(long, default_value_t = 5)]
    pub center_col: i32,
    // Rendering only
    #[arg(long, default_value_t = 5.0)]
    pub dot_radius: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cols: 11,
            rows: 10,
            cell_size: 36.0,
            touch_radius: 18.0,
            center_col: 5,
            dot_radius: 5.0,
        }
    }
}

impl GridConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> MgResult<Self> {
        let path = path.as_ref();
        info!("📐 Loading grid config: {}", path.display());
        let content = fs::read_to_string(path)?;
        // Validated by `Grid::new` once CLI overrides are merged in.
        let config: GridConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Overrides fields the user passed explicitly on the command line,
    /// leaving file-provided values in place for everything else.
    pub fn merge_from_cli(&mut self, cli: &GridConfig, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$field = cli.$field;
                }
            };
        }

        update_if_present!(cols, "cols");
        update_if_present!(rows, "rows");
        update_if_present!(cell_size, "cell_size");
        update_if_present!(touch_radius, "touch_radius");
        update_if_present!(center_col, "center_col");
        update_if_present!(dot_radius, "dot_radius");
    }

    pub fn validate(&self) -> MgResult<()> {
        if self.cols <= 0 || self.rows <= 0 {
            return Err(MirrorGridError::Config(format!(
                "grid must have at least one column and row (got {}x{})",
                self.cols, self.rows
            )));
        }
        // Node ordering packs `row * COMPOSITE_SCALE + col`, so columns must stay below it.
        if i64::from(self.cols) > COMPOSITE_SCALE || i64::from(self.rows) > COMPOSITE_SCALE {
            return Err(MirrorGridError::Config(format!(
                "grid is limited to {} columns and rows (got {}x{})",
                COMPOSITE_SCALE,
                self.cols,
                self.rows
            )));
        }
        if self.center_col < 0 || self.center_col >= self.cols {
            return Err(MirrorGridError::Config(format!(
                "center_col {} is outside 0..{}",
                self.center_col, self.cols
            )));
        }
        if !self.cell_size.is_finite() || self.cell_size <= 0.0 {
            return Err(MirrorGridError::Config(format!(
                "cell_size must be a positive number (got {})",
                self.cell_size
            )));
        }
        if !self.touch_radius.is_finite() || self.touch_radius < 0.0 {
            return Err(MirrorGridError::Config(format!(
                "touch_radius must be non-negative (got {})",
                self.touch_radius
            )));
        }
        if 2 * i64::from(self.center_col) + 1 != i64::from(self.cols) {
            warn!(
                "⚠️  Axis column {} is not centred on a {}-column grid; some mirrored columns fall outside the lattice.",
                self.center_col, self.cols
            );
        }
        Ok(())
    }
}

/// Metadata attached to every recorded attempt.
#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttemptConfig {
    #[arg(long, default_value_t = 9007)]
    pub skill_id: u32,
    #[arg(long, default_value = "Medium")]
    pub difficulty: String,
    #[arg(long, default_value = "Draw Symmetry")]
    pub question_text: String,
    #[arg(long)]
    pub user_id: Option<u64>,
    #[arg(long)]
    pub session_id: Option<String>,
}

impl Default for AttemptConfig {
    fn default() -> Self {
        Self {
            skill_id: 9007,
            difficulty: "Medium".to_string(),
            question_text: "Draw Symmetry".to_string(),
            user_id: None,
            session_id: None,
        }
    }
}
