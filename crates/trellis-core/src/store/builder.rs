//! Builder for creating and seeding Store instances.

use std::path::{Path, PathBuf};

use log::{debug, info};

use super::{AppState, Store};
use crate::{error::Result, fixture::Fixture};

/// Where the bootstrap data comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Seed {
    /// The fixture file in the XDG config directory if it exists, otherwise
    /// the built-in sample data
    Default,
    /// The built-in sample data
    Sample,
    /// A JSON fixture file
    File(PathBuf),
    /// Reference data only
    Empty,
}

/// Builder for creating and configuring Store instances.
#[derive(Debug, Clone)]
pub struct StoreBuilder {
    seed: Seed,
}

impl StoreBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self { seed: Seed::Default }
    }

    /// Seeds the store from a JSON fixture file.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_CONFIG_HOME/trellis/fixture.json` when that file exists, or the
    /// built-in sample data otherwise.
    pub fn with_fixture_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.seed = Seed::File(path.as_ref().to_path_buf());
        }
        self
    }

    /// Seeds the store with the built-in sample data, ignoring any fixture
    /// file.
    pub fn with_sample_data(mut self) -> Self {
        self.seed = Seed::Sample;
        self
    }

    /// Starts from reference data only.
    pub fn empty(mut self) -> Self {
        self.seed = Seed::Empty;
        self
    }

    /// Builds the seeded store.
    ///
    /// # Errors
    ///
    /// Returns `TrellisError::FileSystem` if an explicit fixture file cannot
    /// be read and `TrellisError::Serialization` if it is not a valid fixture.
    pub fn build(self) -> Result<Store> {
        let mut store = Store::new(AppState::default());

        let fixture = match self.seed {
            Seed::Empty => None,
            Seed::Sample => Some(Fixture::sample()),
            Seed::File(path) => Some(Fixture::from_path(&path)?),
            Seed::Default => match Self::default_fixture_path() {
                Some(path) => Some(Fixture::from_path(&path)?),
                None => Some(Fixture::sample()),
            },
        };

        if let Some(fixture) = fixture {
            fixture.load_into(&mut store);
        } else {
            info!("Starting with an empty store");
        }

        Ok(store)
    }

    /// Returns the fixture file from the XDG config directories, if one
    /// exists.
    pub fn default_fixture_path() -> Option<PathBuf> {
        let path = xdg::BaseDirectories::with_prefix("trellis").find_config_file("fixture.json");
        if let Some(path) = &path {
            debug!("Found fixture at {}", path.display());
        }
        path
    }
}

impl Default for StoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}
