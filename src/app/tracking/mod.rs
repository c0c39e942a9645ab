mod history;
mod playback;
mod process;

pub(crate) use history::*;
pub(crate) use playback::*;

use crate::location::PlayLocation;

/// What was read from VLC's recents, newest first, with absolute paths.
#[derive(Debug, Default)]
pub(crate) struct PlayerHistory {
    pub(crate) entries: Vec<PlayLocation>,
    pub(crate) warnings: Vec<String>,
}

#[derive(Debug, Clone)]
pub(crate) struct PlaybackOutcome {
    pub(crate) success: bool,
    pub(crate) recorded: Option<PlayLocation>,
    pub(crate) save_failure: Option<String>,
}
