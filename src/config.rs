use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::generators::Generator;

/// Settings for one maze build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MazeConfig {
    pub generator: Generator,
    pub rows: u16,
    pub columns: u16,
    /// Seed used when `deterministic` is set.
    pub random_seed: u64,
    /// When false, `random_seed` is ignored and every build is different.
    pub deterministic: bool,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            generator: Generator::PureRecursive,
            rows: 5,
            columns: 5,
            random_seed: 12345,
            deterministic: true,
        }
    }
}

impl MazeConfig {
    /// The seed to build with, or `None` for a non-reproducible build.
    pub fn seed(&self) -> Option<u64> {
        self.deterministic.then_some(self.random_seed)
    }

    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let file = std::fs::File::open(path)?;
        let config = serde_json::from_reader(std::io::BufReader::new(file))?;
        Ok(config)
    }
}
