use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use serde::Deserialize;

use crate::constants::*;
use crate::error::{PresentError, PresentResult};

#[derive(Parser, Debug, Default)]
#[command(name = "present", version, about = "Click the present to open it, then click through the photos")]
pub struct Cli {
    /// TOML file with photos, music, width, height and volume.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Photo to show, in order. Repeat to build the catalog.
    #[arg(long = "photo")]
    pub photos: Vec<PathBuf>,

    /// Background music file, looped.
    #[arg(long, conflicts_with = "no_music")]
    pub music: Option<PathBuf>,

    /// Do not play any music.
    #[arg(long)]
    pub no_music: bool,

    /// Window width in pixels.
    #[arg(long)]
    pub width: Option<i32>,

    /// Window height in pixels.
    #[arg(long)]
    pub height: Option<i32>,

    /// Music volume between 0.0 and 1.0.
    #[arg(long)]
    pub volume: Option<f32>,
}

// --- Optional TOML file; every key may be omitted ---
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub photos: Option<Vec<PathBuf>>,
    pub music: Option<PathBuf>,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub volume: Option<f32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayGeometry {
    pub width: i32,
    pub height: i32,
}

impl DisplayGeometry {
    pub fn new(width: i32, height: i32) -> PresentResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(PresentError::config(format!(
                "window size must be positive, got {}x{}",
                width, height
            )));
        }
        Ok(Self { width, height })
    }

    // Reference pixels -> window pixels
    pub fn scale(&self) -> f32 {
        let sx = self.width as f32 / REFERENCE_WIDTH as f32;
        let sy = self.height as f32 / REFERENCE_HEIGHT as f32;
        sx.min(sy)
    }
}

impl Default for DisplayGeometry {
    fn default() -> Self {
        Self {
            width: REFERENCE_WIDTH,
            height: REFERENCE_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub photos: Vec<PathBuf>,
    pub music: Option<PathBuf>,
    pub geometry: DisplayGeometry,
    pub volume: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            photos: DEFAULT_PHOTOS.iter().map(PathBuf::from).collect(),
            music: Some(PathBuf::from(DEFAULT_MUSIC)),
            geometry: DisplayGeometry::default(),
            volume: DEFAULT_VOLUME,
        }
    }
}

impl Config {
    // Defaults, then the TOML file, then command line flags
    pub fn resolve(cli: &Cli) -> PresentResult<Self> {
        let file = match &cli.config {
            Some(path) => load_from_path(path)?,
            None => FileConfig::default(),
        };
        Self::layered(file, cli)
    }

    fn layered(file: FileConfig, cli: &Cli) -> PresentResult<Self> {
        let defaults = Config::default();

        let photos = if !cli.photos.is_empty() {
            cli.photos.clone()
        } else {
            file.photos.unwrap_or(defaults.photos)
        };

        let music = if cli.no_music {
            None
        } else {
            cli.music.clone().or(file.music).or(defaults.music)
        };

        let width = cli.width.or(file.width).unwrap_or(defaults.geometry.width);
        let height = cli.height.or(file.height).unwrap_or(defaults.geometry.height);
        let geometry = DisplayGeometry::new(width, height)?;

        let volume = cli.volume.or(file.volume).unwrap_or(defaults.volume);
        if !(0.0..=1.0).contains(&volume) {
            return Err(PresentError::config(format!(
                "volume must be between 0.0 and 1.0, got {}",
                volume
            )));
        }

        Ok(Self {
            photos,
            music,
            geometry,
            volume,
        })
    }
}

pub fn load_from_path(path: &Path) -> PresentResult<FileConfig> {
    let content = fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| PresentError::config(format!("{}: {}", path.display(), e)))
}
