use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use percent_encoding::percent_decode_str;

use super::PlayerHistory;
use crate::app::library::is_sample;
use crate::config::Preference;
use crate::location::PlayLocation;
use crate::paths::{WorkDir, file_uri_prefix};

pub(crate) const RECENTS_SECTION: &str = "RecentsMRL";

pub(crate) fn read_player_history(path: &Path) -> PlayerHistory {
    if !path.exists() {
        log::debug!("no VLC history file found at {}", path.display());
        return PlayerHistory::default();
    }

    let raw = match fs::read(path) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(err) => {
            return PlayerHistory {
                entries: Vec::new(),
                warnings: vec![format!(
                    "failed to read VLC history at {}: {}",
                    path.display(),
                    err
                )],
            };
        }
    };

    match parse_recents(&raw) {
        Ok(entries) => {
            log::debug!("found {} item(s) in VLC history", entries.len());
            PlayerHistory {
                entries,
                warnings: Vec::new(),
            }
        }
        Err(err) => PlayerHistory {
            entries: Vec::new(),
            warnings: vec![format!(
                "history cannot be read from {}: {err:#}",
                path.display()
            )],
        },
    }
}

/// Parses the `[RecentsMRL]` section: `list` holds file URIs, `times` the
/// matching resume offsets in milliseconds.
pub(crate) fn parse_recents(raw: &str) -> Result<Vec<PlayLocation>> {
    let section = parse_ini_section(raw, RECENTS_SECTION)
        .ok_or_else(|| anyhow!("missing [{RECENTS_SECTION}] section"))?;
    let list = section
        .get("list")
        .ok_or_else(|| anyhow!("missing `list` key"))?;
    let times = section
        .get("times")
        .ok_or_else(|| anyhow!("missing `times` key"))?;

    let times = split_list(times)
        .map(|raw| parse_millis(raw).with_context(|| format!("invalid time `{raw}`")))
        .collect::<Result<Vec<_>>>()?;

    Ok(split_list(list)
        .map(decode_file_uri)
        .zip(times)
        .map(|(path, time)| PlayLocation::new(path, time))
        .collect())
}

/// Key/value pairs of one INI section. Keys are lowercased; later duplicates win.
pub(crate) fn parse_ini_section(raw: &str, section: &str) -> Option<HashMap<String, String>> {
    let mut values = None::<HashMap<String, String>>;
    let mut in_section = false;

    for line in raw.trim_start_matches('\u{feff}').lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with(';') {
            continue;
        }

        if let Some(name) = trimmed
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
        {
            in_section = name.trim() == section;
            if in_section {
                values.get_or_insert_with(HashMap::new);
            }
            continue;
        }

        if !in_section {
            continue;
        }
        let Some(split_at) = trimmed.find(['=', ':']) else {
            continue;
        };
        let (key, value) = trimmed.split_at(split_at);
        if let Some(map) = values.as_mut() {
            map.insert(key.trim().to_lowercase(), value[1..].trim().to_string());
        }
    }
    values
}

/// Qt writes an emptied list as `@Invalid()`.
const QT_EMPTY_LIST: &str = "@Invalid()";

fn split_list(value: &str) -> impl Iterator<Item = &str> {
    let value = match value.trim() {
        QT_EMPTY_LIST => "",
        trimmed => trimmed,
    };
    value
        .trim_end_matches(',')
        .split(", ")
        .map(str::trim)
        .filter(|item| !item.is_empty())
}

fn parse_millis(raw: &str) -> Result<u64> {
    let millis: i64 = raw.parse()?;
    Ok(u64::try_from(millis).unwrap_or(0) / 1000)
}

/// `file:///home/me/My%20Show/ep1.mkv` -> `/home/me/My Show/ep1.mkv`
pub(crate) fn decode_file_uri(uri: &str) -> String {
    let path = uri.strip_prefix(file_uri_prefix()).unwrap_or(uri);
    percent_decode_str(path).decode_utf8_lossy().into_owned()
}

/// Picks the entry of `entries` that belongs to `workdir`, rewritten relative to it.
pub(crate) fn most_recent_in(
    workdir: &WorkDir,
    entries: &[PlayLocation],
    preference: Preference,
) -> Option<PlayLocation> {
    let mut candidates = entries.iter().filter_map(|entry| {
        let path = workdir.relative(&entry.path)?;
        (!is_sample(&path)).then(|| PlayLocation::new(path, entry.time))
    });

    let chosen = match preference {
        Preference::Latest => candidates.max(),
        Preference::Sidecar | Preference::Player => candidates.next(),
    };
    match &chosen {
        Some(location) => log::debug!("most recent video in VLC history: {location}"),
        None => log::debug!("no matching video found in VLC history"),
    }
    chosen
}
