use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tenancy::model::Infra;

pub fn fixtures_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("resources")
        .join("test-fixtures")
}

pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

pub fn load_fixture(relative_path: &str) -> io::Result<Vec<u8>> {
    fs::read(fixture_path(relative_path))
}

pub fn load_fixture_json<T: DeserializeOwned>(relative_path: &str) -> io::Result<T> {
    let bytes = load_fixture(relative_path)?;
    serde_json::from_slice(&bytes).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

pub fn load_infra_fixture(relative_path: &str) -> io::Result<Infra> {
    load_fixture_json(relative_path)
}
