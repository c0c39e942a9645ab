use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::location::PlayLocation;
use crate::paths::WorkDir;

/// The JSON file next to the videos recording the last watched one.
pub struct Sidecar {
    path: PathBuf,
    workdir: WorkDir,
}

impl Sidecar {
    pub fn new(workdir: &WorkDir, name: &str) -> Self {
        Self {
            path: workdir.root().join(name),
            workdir: workdir.clone(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `Ok(None)` when the file does not exist yet.
    pub fn load(&self) -> Result<Option<PlayLocation>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read {}", self.path.display()))?;
        let mut location: PlayLocation = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse {}", self.path.display()))?;
        // Older files may hold absolute or backslash-separated paths.
        location.path = self.workdir.to_relative(&location.path);
        Ok(Some(location))
    }

    pub fn save(&self, location: &PlayLocation) -> Result<()> {
        let stored = PlayLocation::new(self.workdir.to_relative(&location.path), location.time);

        let mut buf = Vec::new();
        let mut serializer =
            Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        stored
            .serialize(&mut serializer)
            .context("failed to serialize play location")?;

        fs::write(&self.path, buf)
            .with_context(|| format!("failed to write {}", self.path.display()))
    }
}
