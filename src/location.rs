use std::fmt;

use serde::{Deserialize, Serialize};

/// A file and the offset (in whole seconds) to resume it from.
///
/// `time == 0` means the file was watched to the end, or was never started.
/// The derived ordering compares `path` first and `time` second.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayLocation {
    pub path: String,
    pub time: u64,
}

impl PlayLocation {
    pub fn new(path: impl Into<String>, time: u64) -> Self {
        Self {
            path: path.into(),
            time,
        }
    }

    pub fn start_of(path: impl Into<String>) -> Self {
        Self::new(path, 0)
    }

    pub fn is_finished(&self) -> bool {
        self.time == 0
    }
}

impl fmt::Display for PlayLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.path, self.time)
    }
}
