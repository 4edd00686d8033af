//! Loading the initial infra snapshot.
//!
//! Datasets are JSON documents. They come either from a file on disk or from
//! the set bundled into the binary under `resources/datasets`.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use include_dir::{include_dir, Dir};
use tracing::debug;

use crate::errors::{DatasetError, DatasetResult};
use crate::model::Infra;

static BUNDLED_DATASETS: Dir<'_> = include_dir!("../resources/datasets");

/// Name of the bundled dataset served when nothing else is configured.
pub const DEFAULT_DATASET: &str = "default";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    File(PathBuf),
    Bundled(String),
}

impl DatasetSource {
    /// Interpret a user-supplied value: an existing file or anything ending
    /// in `.json` is a path, everything else names a bundled dataset.
    pub fn parse(value: &str) -> Self {
        let path = Path::new(value);
        let is_json = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        if is_json || path.is_file() {
            DatasetSource::File(path.to_path_buf())
        } else {
            DatasetSource::Bundled(value.to_string())
        }
    }
}

impl Default for DatasetSource {
    fn default() -> Self {
        DatasetSource::Bundled(DEFAULT_DATASET.to_string())
    }
}

impl fmt::Display for DatasetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetSource::File(path) => write!(f, "{}", path.display()),
            DatasetSource::Bundled(name) => write!(f, "bundled:{}", name),
        }
    }
}

pub fn load_infra(source: &DatasetSource) -> DatasetResult<Infra> {
    match source {
        DatasetSource::File(path) => load_file(path),
        DatasetSource::Bundled(name) => load_bundled(name),
    }
}

pub fn load_file(path: &Path) -> DatasetResult<Infra> {
    debug!("Reading dataset file {}", path.display());
    let bytes = fs::read(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_infra(&path.display().to_string(), &bytes)
}

pub fn load_bundled(name: &str) -> DatasetResult<Infra> {
    let file = BUNDLED_DATASETS
        .get_file(format!("{}.json", name))
        .ok_or_else(|| DatasetError::UnknownBundled(name.to_string()))?;
    parse_infra(name, file.contents())
}

pub fn parse_infra(source_name: &str, bytes: &[u8]) -> DatasetResult<Infra> {
    serde_json::from_slice(bytes).map_err(|source| DatasetError::Parse {
        source_name: source_name.to_string(),
        source,
    })
}

/// Names of every bundled dataset, sorted.
pub fn list_bundled_datasets() -> Vec<String> {
    let mut names: Vec<String> = BUNDLED_DATASETS
        .files()
        .iter()
        .filter(|file| {
            file.path()
                .extension()
                .map(|ext| ext == "json")
                .unwrap_or(false)
        })
        .filter_map(|file| {
            file.path()
                .file_stem()
                .map(|stem| stem.to_string_lossy().to_string())
        })
        .collect();
    names.sort();
    names
}
