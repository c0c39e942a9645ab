use clap::ValueEnum;

pub const DEFAULT_SIDECAR_NAME: &str = "recently_played.json";
pub const DEFAULT_EXTENSIONS: [&str; 4] = ["mp4", "mkv", "avi", "webm"];

/// How the local history and VLC's recents are combined into one "most recent" entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Preference {
    /// Whichever entry is further along the series: later path, then later time.
    #[default]
    Latest,
    /// The local history file wins when it has an entry.
    Sidecar,
    /// VLC's history wins when it has an entry.
    Player,
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub extensions: Vec<String>,
    pub sidecar_name: String,
    pub preference: Preference,
    pub fullscreen: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            extensions: DEFAULT_EXTENSIONS.iter().map(|ext| ext.to_string()).collect(),
            sidecar_name: DEFAULT_SIDECAR_NAME.to_string(),
            preference: Preference::default(),
            fullscreen: true,
        }
    }
}

impl Settings {
    pub fn with_extensions<S: AsRef<str>>(mut self, extensions: &[S]) -> Self {
        self.extensions = extensions
            .iter()
            .map(|ext| ext.as_ref().trim().trim_start_matches('.').to_ascii_lowercase())
            .filter(|ext| !ext.is_empty())
            .collect();
        self
    }
}
