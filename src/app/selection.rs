use crate::config::Preference;
use crate::location::PlayLocation;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Selection {
    /// No videos in the directory.
    Nothing,
    /// Nothing played yet: the first video from the start.
    First(PlayLocation),
    /// The recent video was left unfinished.
    Resume(PlayLocation),
    /// The recent video was finished; `missing` is set when it is no longer
    /// among the listed videos and the series restarted from index 0.
    Next {
        location: PlayLocation,
        missing: Option<String>,
    },
}

impl Selection {
    pub(crate) fn location(&self) -> Option<&PlayLocation> {
        match self {
            Selection::Nothing => None,
            Selection::First(location) | Selection::Resume(location) => Some(location),
            Selection::Next { location, .. } => Some(location),
        }
    }
}

/// Merges the sidecar entry with the one found in VLC's history.
pub(crate) fn reconcile(
    sidecar: Option<PlayLocation>,
    player: Option<PlayLocation>,
    preference: Preference,
) -> Option<PlayLocation> {
    let (sidecar, player) = match (sidecar, player) {
        (Some(sidecar), Some(player)) => (sidecar, player),
        (sidecar, player) => return sidecar.or(player),
    };
    Some(match preference {
        Preference::Latest => sidecar.max(player),
        Preference::Sidecar => sidecar,
        Preference::Player => player,
    })
}

/// Resume an unfinished video, otherwise advance to the next one, wrapping
/// around after the last.
pub(crate) fn select(videos: &[String], recent: Option<&PlayLocation>) -> Selection {
    let Some(first) = videos.first() else {
        return Selection::Nothing;
    };
    let Some(recent) = recent else {
        return Selection::First(PlayLocation::start_of(first.as_str()));
    };
    if !recent.is_finished() {
        return Selection::Resume(recent.clone());
    }

    let found = videos.iter().position(|video| *video == recent.path);
    let index = found.unwrap_or(0);
    Selection::Next {
        location: PlayLocation::start_of(videos[(index + 1) % videos.len()].as_str()),
        missing: found.is_none().then(|| recent.path.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(len: usize) -> Vec<String> {
        (1..=len).map(|n| format!("ep{n:02}.mp4")).collect()
    }

    #[test]
    fn finished_video_advances_cyclically() {
        for len in 1..=5 {
            let videos = series(len);
            for (i, video) in videos.iter().enumerate() {
                let selection = select(&videos, Some(&PlayLocation::start_of(video.as_str())));
                assert_eq!(
                    selection,
                    Selection::Next {
                        location: PlayLocation::start_of(videos[(i + 1) % len].as_str()),
                        missing: None,
                    }
                );
            }
        }
    }

    #[test]
    fn unfinished_video_resumes_in_place() {
        let videos = series(3);
        let recent = PlayLocation::new("ep02.mp4", 145);
        assert_eq!(
            select(&videos, Some(&recent)),
            Selection::Resume(recent.clone())
        );
    }

    #[test]
    fn empty_list_has_nothing_to_play() {
        assert_eq!(select(&[], None), Selection::Nothing);
        assert_eq!(
            select(&[], Some(&PlayLocation::new("ep1.mp4", 30))),
            Selection::Nothing
        );
        assert_eq!(select(&[], Some(&PlayLocation::start_of("ep1.mp4"))), Selection::Nothing);
    }

    #[test]
    fn no_history_starts_at_first_video() {
        assert_eq!(
            select(&series(3), None),
            Selection::First(PlayLocation::start_of("ep01.mp4"))
        );
    }

    #[test]
    fn unknown_finished_video_falls_back_to_index_zero_and_is_flagged() {
        let selection = select(&series(3), Some(&PlayLocation::start_of("renamed.mp4")));
        assert_eq!(
            selection,
            Selection::Next {
                location: PlayLocation::start_of("ep02.mp4"),
                missing: Some("renamed.mp4".to_string()),
            }
        );
    }

    #[test]
    fn reconcile_without_entries_is_none() {
        for preference in [Preference::Latest, Preference::Sidecar, Preference::Player] {
            assert_eq!(reconcile(None, None, preference), None);
        }
    }

    #[test]
    fn reconcile_with_itself_is_identity() {
        let location = PlayLocation::new("ep2.mp4", 145);
        for preference in [Preference::Latest, Preference::Sidecar, Preference::Player] {
            assert_eq!(
                reconcile(Some(location.clone()), Some(location.clone()), preference),
                Some(location.clone())
            );
        }
    }

    #[test]
    fn reconcile_uses_the_only_available_entry() {
        let location = PlayLocation::new("ep2.mp4", 0);
        assert_eq!(
            reconcile(Some(location.clone()), None, Preference::Player),
            Some(location.clone())
        );
        assert_eq!(
            reconcile(None, Some(location.clone()), Preference::Sidecar),
            Some(location)
        );
    }

    #[test]
    fn latest_prefers_later_path_then_later_time() {
        let sidecar = PlayLocation::new("ep3.mp4", 0);
        let player = PlayLocation::new("ep2.mp4", 600);
        assert_eq!(
            reconcile(Some(sidecar.clone()), Some(player.clone()), Preference::Latest),
            Some(sidecar)
        );

        let sidecar = PlayLocation::new("ep2.mp4", 10);
        assert_eq!(
            reconcile(Some(sidecar), Some(player.clone()), Preference::Latest),
            Some(player)
        );
    }

    #[test]
    fn fixed_preferences_pick_their_source() {
        let sidecar = PlayLocation::new("ep1.mp4", 0);
        let player = PlayLocation::new("ep4.mp4", 12);
        assert_eq!(
            reconcile(Some(sidecar.clone()), Some(player.clone()), Preference::Sidecar),
            Some(sidecar.clone())
        );
        assert_eq!(
            reconcile(Some(sidecar), Some(player.clone()), Preference::Player),
            Some(player)
        );
    }
}
