pub(crate) mod library;
mod selection;
mod tracking;


use std::path::Path;

use anyhow::{Result, bail};

use crate::cli::Cli;
use crate::config::Settings;
use crate::location::PlayLocation;
use crate::paths::WorkDir;
use crate::sidecar::Sidecar;

use self::library::list_videos;
use self::selection::{Selection, reconcile, select};
use self::tracking::{
    Player, emit_warnings, most_recent_in, play_and_record, read_player_history,
};

pub fn run(cli: Cli) -> Result<()> {
    let settings = cli.settings();
    let workdir = WorkDir::current()?;
    let sidecar = Sidecar::new(&workdir, &settings.sidecar_name);

    let selection = choose_video(&workdir, &sidecar, &cli.history, &settings);
    let Some(location) = selection.location() else {
        println!("There are no videos to play in this directory");
        return Ok(());
    };

    let player = Player::new(&cli.player, settings.fullscreen);
    let outcome = match play_and_record(
        &player,
        location,
        &workdir,
        &cli.history,
        &sidecar,
        settings.preference,
    ) {
        Ok(outcome) => outcome,
        Err(err) => {
            println!("Player launch failed: {err:#}");
            println!("History not updated.");
            return Ok(());
        }
    };

    if let Some(detail) = outcome.save_failure {
        bail!(
            "playback finished but {} was not updated: {detail}",
            sidecar.path().display()
        );
    }
    if let Some(recorded) = outcome.recorded {
        log::debug!("recorded {recorded} (player exit ok: {})", outcome.success);
    }
    Ok(())
}

fn recently_played(
    workdir: &WorkDir,
    sidecar: &Sidecar,
    history_path: &Path,
    settings: &Settings,
) -> Option<PlayLocation> {
    let from_sidecar = match sidecar.load() {
        Ok(Some(location)) => {
            log::debug!("most recent video in {}: {location}", sidecar.path().display());
            Some(location)
        }
        Ok(None) => {
            log::debug!("no local history file ({}) found", sidecar.path().display());
            None
        }
        Err(err) => {
            log::warn!("ignoring local history: {err:#}");
            None
        }
    };

    let history = read_player_history(history_path);
    emit_warnings(&history.warnings);
    let from_player = most_recent_in(workdir, &history.entries, settings.preference);

    let recent = reconcile(from_sidecar, from_player, settings.preference);
    if let Some(recent) = &recent {
        log::debug!("most recent video: {recent}");
    }
    recent
}

pub(crate) fn choose_video(
    workdir: &WorkDir,
    sidecar: &Sidecar,
    history_path: &Path,
    settings: &Settings,
) -> Selection {
    let recent = recently_played(workdir, sidecar, history_path, settings);
    let videos = list_videos(workdir.root(), &settings.extensions);
    log::debug!("found {} video(s) in {}", videos.len(), workdir.root().display());

    let selection = select(&videos, recent.as_ref());
    match &selection {
        Selection::Nothing => log::debug!("no videos in this directory"),
        Selection::Next {
            missing: Some(missing),
            ..
        } => log::warn!("{missing} is no longer in this directory; treating it as the first video"),
        Selection::Resume(location) if !workdir.join(&location.path).is_file() => {
            log::warn!("resuming {} which no longer exists", location.path)
        }
        _ => {}
    }
    if let Some(location) = selection.location() {
        log::debug!("video to play: {location}");
    }
    selection
}
