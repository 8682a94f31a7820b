pub mod check;
pub mod replay;
pub mod shapes;
pub mod simulate;

use mirrorgrid::error::{MgResult, MirrorGridError};
use mirrorgrid::geometry::Grid;
use mirrorgrid::shapes::{find_shape, ShapeDefinition};
use std::path::Path;
use tracing::debug;

/// Case-insensitive substring match used by the `--shape` filters.
pub fn matches_filter(name: &str, filter: Option<&str>) -> bool {
    filter.map_or(true, |f| name.to_lowercase().contains(&f.to_lowercase()))
}

/// Resolves `name` against a custom shape file when given, else the authored set.
pub fn resolve_shape(
    name: &str,
    shapes_file: Option<&Path>,
    grid: &Grid,
) -> MgResult<ShapeDefinition> {
    let shape = match shapes_file {
        Some(path) => {
            let shapes = ShapeDefinition::load_from_file(path)?;
            let known = shapes
                .iter()
                .map(|s| s.name.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            shapes
                .into_iter()
                .find(|s| s.name == name)
                .ok_or_else(|| MirrorGridError::UnknownShape {
                    name: name.to_string(),
                    origin: path.display().to_string(),
                    known,
                })?
        }
        None => find_shape(name)?,
    };
    shape.validate(grid)?;
    debug!("resolved shape '{}'", shape.name);
    Ok(shape)
}
