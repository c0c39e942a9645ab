use std::ffi::OsStr;
use std::fs;
use std::path::Path;

/// Lists the videos below `root` as `/`-separated relative paths in
/// lexicographic order. Samples are left out unless nothing else is there.
pub(crate) fn list_videos(root: &Path, extensions: &[String]) -> Vec<String> {
    let mut videos = Vec::new();
    collect_videos(root, None, extensions, &mut videos);
    videos.sort();

    let without_samples: Vec<String> = videos
        .iter()
        .filter(|video| !is_sample(video))
        .cloned()
        .collect();
    if without_samples.is_empty() {
        videos
    } else {
        without_samples
    }
}

fn collect_videos(
    dir: &Path,
    prefix: Option<&str>,
    extensions: &[String],
    out: &mut Vec<String>,
) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            log::debug!("skipping unreadable directory {}: {err}", dir.display());
            return;
        }
    };

    for entry in entries.flatten() {
        let Ok(file_type) = entry.file_type() else {
            continue;
        };
        let name = match entry.file_name().into_string() {
            Ok(name) => name,
            Err(raw) => {
                log::debug!("skipping non UTF-8 name {raw:?} in {}", dir.display());
                continue;
            }
        };
        let relative = match prefix {
            Some(prefix) => format!("{prefix}/{name}"),
            None => name,
        };

        if file_type.is_dir() {
            collect_videos(&entry.path(), Some(&relative), extensions, out);
        } else if (file_type.is_file() || (file_type.is_symlink() && entry.path().is_file()))
            && has_video_extension(&relative, extensions)
        {
            out.push(relative);
        }
    }
}

pub(crate) fn has_video_extension(path: &str, extensions: &[String]) -> bool {
    Path::new(path)
        .extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| extensions.iter().any(|known| known.eq_ignore_ascii_case(ext)))
}

pub(crate) fn is_sample(path: &str) -> bool {
    path.to_lowercase().contains("sample")
}
