use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::data::builtins::{builtin_names, builtin_points};
use crate::data::dataset::Dataset;
use crate::foundation::core::{Bounds, Point};
use crate::foundation::error::{MorphError, MorphResult};

/// Where a start shape comes from: an embedded built-in or a point file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DataSource {
    /// One of the embedded start shapes (e.g. `dino`).
    Builtin(String),
    /// A JSON point file on disk: an array of `[x, y]` pairs.
    File(PathBuf),
}

impl DataSource {
    /// Classify a CLI argument: an existing path loads as a file, anything
    /// else is treated as a built-in name.
    pub fn resolve(arg: &str) -> Self {
        let path = Path::new(arg);
        if path.exists() {
            Self::File(path.to_path_buf())
        } else {
            Self::Builtin(arg.to_string())
        }
    }
}

/// Loads start shapes into bounded [`Dataset`] values.
pub struct DataLoader;

impl DataLoader {
    /// Load a data source, applying explicit bounds when given and deriving
    /// padded bounds from the data otherwise.
    pub fn load(
        source: &DataSource,
        x_bounds: Option<(f64, f64)>,
        y_bounds: Option<(f64, f64)>,
    ) -> MorphResult<Dataset> {
        let (name, points) = match source {
            DataSource::Builtin(name) => {
                let points = builtin_points(name).ok_or_else(|| {
                    MorphError::dataset(format!(
                        "unknown start shape '{name}' (available: {})",
                        builtin_names().join(", ")
                    ))
                })?;
                (name.clone(), points)
            }
            DataSource::File(path) => (dataset_name_from_path(path), read_point_file(path)?),
        };

        if points.len() < 2 {
            return Err(MorphError::dataset(format!(
                "start shape '{name}' needs at least 2 points, has {}",
                points.len()
            )));
        }

        let bounds = match (x_bounds, y_bounds) {
            (Some((xmin, xmax)), Some((ymin, ymax))) => Bounds::new(xmin, xmax, ymin, ymax)?,
            (None, None) => Bounds::around(&points)?,
            // The CLI always supplies both or neither; direct API callers get
            // the missing axis derived from the data.
            (Some((xmin, xmax)), None) => {
                let derived = Bounds::around(&points)?;
                Bounds::new(xmin, xmax, derived.ymin, derived.ymax)?
            }
            (None, Some((ymin, ymax))) => {
                let derived = Bounds::around(&points)?;
                Bounds::new(derived.xmin, derived.xmax, ymin, ymax)?
            }
        };

        Dataset::new(name, points, bounds)
    }
}

fn dataset_name_from_path(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "points".to_string())
}

fn read_point_file(path: &Path) -> MorphResult<Vec<Point>> {
    let f = File::open(path).with_context(|| format!("open point file '{}'", path.display()))?;
    let r = BufReader::new(f);
    let pairs: Vec<[f64; 2]> = serde_json::from_reader(r)
        .map_err(|e| MorphError::serde(format!("parse point file '{}': {e}", path.display())))?;
    Ok(pairs.iter().map(|&[x, y]| Point::new(x, y)).collect())
}

#[cfg(test)]
#[path = "../../tests/unit/data/loader.rs"]
mod tests;
