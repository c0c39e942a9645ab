use std::path::{Path, PathBuf};
use std::process::{Command as ProcessCommand, Stdio};

use anyhow::{Context, Result};

use super::history::{most_recent_in, read_player_history};
use super::process::wait_for_player;
use super::PlaybackOutcome;
use crate::config::Preference;
use crate::location::PlayLocation;
use crate::paths::{WorkDir, to_host};
use crate::sidecar::Sidecar;

pub(crate) fn emit_warnings(warnings: &[String]) {
    for warning in warnings {
        log::warn!("{warning}");
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Player {
    binary: PathBuf,
    fullscreen: bool,
}

impl Player {
    pub(crate) fn new(binary: impl Into<PathBuf>, fullscreen: bool) -> Self {
        Self {
            binary: binary.into(),
            fullscreen,
        }
    }

    pub(crate) fn args(&self, location: &PlayLocation) -> Vec<String> {
        let mut args = vec![
            format!("--start-time={}.0", location.time),
            to_host(&location.path),
        ];
        if self.fullscreen {
            args.push("--fullscreen".to_string());
        }
        args
    }

    pub(crate) fn command(&self, location: &PlayLocation, workdir: &WorkDir) -> ProcessCommand {
        let mut cmd = ProcessCommand::new(&self.binary);
        cmd.args(self.args(location))
            .current_dir(workdir.root())
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        cmd
    }

    /// Blocks until the player exits. Its exit status is reported, never treated as an error.
    pub(crate) fn play(&self, location: &PlayLocation, workdir: &WorkDir) -> Result<bool> {
        log::debug!("{} {}", self.binary.display(), self.args(location).join(" "));
        let status = wait_for_player(self.command(location, workdir))
            .with_context(|| format!("failed to launch {}", self.binary.display()))?;
        if !status.success() {
            log::debug!("player exited with status: {status}");
        }
        Ok(status.success())
    }
}

/// Plays `location`, then stores whatever VLC now remembers for this directory
/// in the sidecar.
///
/// Only a failed launch is an `Err`; a failed sidecar write after a normal
/// playback is reported through `PlaybackOutcome::save_failure`.
pub(crate) fn play_and_record(
    player: &Player,
    location: &PlayLocation,
    workdir: &WorkDir,
    history_path: &Path,
    sidecar: &Sidecar,
    preference: Preference,
) -> Result<PlaybackOutcome> {
    let success = player.play(location, workdir)?;

    log::debug!("updating {}", sidecar.path().display());
    let history = read_player_history(history_path);
    emit_warnings(&history.warnings);
    let recorded = most_recent_in(workdir, &history.entries, preference);
    let save_failure = match &recorded {
        Some(recent) => match sidecar.save(recent) {
            Ok(()) => {
                log::debug!("{} updated to {recent}", sidecar.path().display());
                None
            }
            Err(err) => Some(format!("{err:#}")),
        },
        None => {
            log::error!("could not read the recently played video from VLC history");
            None
        }
    };

    Ok(PlaybackOutcome {
        success,
        recorded,
        save_failure,
    })
}
