use std::env;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::debug;

use crate::error::{Error, Result};

/// Default filename of the border list inside a data directory.
pub const BORDERS_FILENAME: &str = "borders.txt";
/// Default filename of the capital distance table inside a data directory.
pub const CAPDIST_FILENAME: &str = "capdist.csv";
/// Default filename of the state identifier table inside a data directory.
pub const STATE_NAMES_FILENAME: &str = "state_name.tsv";

/// Environment variable consulted when no data directory is given explicitly.
pub const DATA_DIR_ENV: &str = "ROADTRIP_DATA_DIR";

/// Locations of the three reference inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetPaths {
    pub borders: PathBuf,
    pub capital_distances: PathBuf,
    pub state_names: PathBuf,
}

impl DatasetPaths {
    /// Paths for the default filenames inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            borders: dir.join(BORDERS_FILENAME),
            capital_distances: dir.join(CAPDIST_FILENAME),
            state_names: dir.join(STATE_NAMES_FILENAME),
        }
    }

    /// Fail with [`Error::DatasetNotFound`] for the first missing file.
    pub fn verify(&self) -> Result<()> {
        for path in [&self.borders, &self.capital_distances, &self.state_names] {
            if !path.is_file() {
                return Err(Error::DatasetNotFound { path: path.clone() });
            }
        }
        Ok(())
    }
}

/// Per-file overrides taking precedence over the resolved data directory.
#[derive(Debug, Clone, Default)]
pub struct DatasetOverrides {
    pub borders: Option<PathBuf>,
    pub capital_distances: Option<PathBuf>,
    pub state_names: Option<PathBuf>,
}

/// Resolve the platform-specific default data directory.
pub fn default_data_dir() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("com", "roadtrip", "roadtrip").ok_or(Error::ProjectDirsUnavailable)?;
    Ok(dirs.data_dir().to_path_buf())
}

/// Resolve and verify the three input paths.
///
/// The resolution order is:
/// 1. Per-file `overrides`.
/// 2. Explicit `data_dir` argument when provided.
/// 3. `ROADTRIP_DATA_DIR` environment variable.
/// 4. Platform-specific project data directory.
pub fn resolve_dataset(
    data_dir: Option<&Path>,
    overrides: &DatasetOverrides,
) -> Result<DatasetPaths> {
    let all_overridden = overrides.borders.is_some()
        && overrides.capital_distances.is_some()
        && overrides.state_names.is_some();

    let base = if all_overridden {
        // Every file is explicit, so the directory is never consulted.
        DatasetPaths::in_dir(Path::new("."))
    } else {
        DatasetPaths::in_dir(&resolve_data_dir(data_dir)?)
    };

    let paths = DatasetPaths {
        borders: overrides.borders.clone().unwrap_or(base.borders),
        capital_distances: overrides
            .capital_distances
            .clone()
            .unwrap_or(base.capital_distances),
        state_names: overrides.state_names.clone().unwrap_or(base.state_names),
    };

    debug!(
        borders = %paths.borders.display(),
        capital_distances = %paths.capital_distances.display(),
        state_names = %paths.state_names.display(),
        "resolved dataset paths"
    );
    paths.verify()?;
    Ok(paths)
}

fn resolve_data_dir(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir.to_path_buf());
    }

    if let Some(env_dir) = env::var_os(DATA_DIR_ENV) {
        return Ok(PathBuf::from(env_dir));
    }

    default_data_dir()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn populate(dir: &Path) {
        for name in [BORDERS_FILENAME, CAPDIST_FILENAME, STATE_NAMES_FILENAME] {
            fs::write(dir.join(name), "").expect("write input file");
        }
    }

    #[test]
    fn explicit_directory_uses_default_filenames() {
        let temp = tempfile::tempdir().expect("temp dir");
        populate(temp.path());

        let paths = resolve_dataset(Some(temp.path()), &DatasetOverrides::default())
            .expect("paths resolve");
        assert_eq!(paths, DatasetPaths::in_dir(temp.path()));
    }

    #[test]
    fn overrides_replace_individual_files() {
        let temp = tempfile::tempdir().expect("temp dir");
        populate(temp.path());
        let custom = temp.path().join("custom_borders.txt");
        fs::write(&custom, "").expect("write override");

        let overrides = DatasetOverrides {
            borders: Some(custom.clone()),
            ..DatasetOverrides::default()
        };
        let paths = resolve_dataset(Some(temp.path()), &overrides).expect("paths resolve");
        assert_eq!(paths.borders, custom);
        assert_eq!(paths.state_names, temp.path().join(STATE_NAMES_FILENAME));
    }

    #[test]
    fn missing_file_is_reported() {
        let temp = tempfile::tempdir().expect("temp dir");
        fs::write(temp.path().join(BORDERS_FILENAME), "").expect("write borders");

        let err = resolve_dataset(Some(temp.path()), &DatasetOverrides::default())
            .expect_err("capdist missing");
        match err {
            Error::DatasetNotFound { path } => {
                assert_eq!(path, temp.path().join(CAPDIST_FILENAME))
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
