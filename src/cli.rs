use std::path::PathBuf;

use clap::Parser;

use crate::config::{DEFAULT_SIDECAR_NAME, Preference, Settings};

#[derive(Debug, Parser)]
#[command(
    name = "continue-show",
    version,
    about = "Continue the video series in the current directory where you left off"
)]
pub struct Cli {
    /// Path of the VLC binary
    pub player: PathBuf,
    /// Path of VLC's recents file (vlc-qt-interface.ini)
    pub history: PathBuf,
    /// Verbose log
    #[arg(short, long)]
    pub verbose: bool,
    /// File name of the local history kept in the working directory
    #[arg(long, value_name = "NAME", default_value = DEFAULT_SIDECAR_NAME)]
    pub sidecar: String,
    /// Video extensions to look for (comma separated)
    #[arg(long = "ext", value_name = "EXT", value_delimiter = ',')]
    pub extensions: Vec<String>,
    /// Which history wins when both know a recently played video
    #[arg(long, value_enum, default_value_t = Preference::Latest)]
    pub prefer: Preference,
    /// Do not pass --fullscreen to the player
    #[arg(long)]
    pub windowed: bool,
}

impl Cli {
    pub fn settings(&self) -> Settings {
        let mut settings = Settings {
            sidecar_name: self.sidecar.clone(),
            preference: self.prefer,
            fullscreen: !self.windowed,
            ..Settings::default()
        };
        if !self.extensions.is_empty() {
            settings = settings.with_extensions(&self.extensions);
        }
        settings
    }
}
