use std::path::PathBuf;

use tempfile::TempDir;
use trellis_core::{Fixture, Store, StoreBuilder};

/// Helper function to write a fixture into a temporary directory
pub fn write_fixture(fixture: &Fixture) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("fixture.json");
    let json = serde_json::to_string_pretty(fixture).expect("Failed to serialize fixture");
    std::fs::write(&path, json).expect("Failed to write fixture");
    (temp_dir, path)
}

/// Helper function to create a store seeded with the sample data
pub fn create_sample_store() -> Store {
    StoreBuilder::new()
        .with_sample_data()
        .build()
        .expect("Failed to build store")
}
