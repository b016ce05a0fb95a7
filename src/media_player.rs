use std::path::Path;
use raylib::prelude::*;
use tracing::{info, warn};

use crate::error::{PresentError, PresentResult};

/// Looping background music. Silent when the track or the audio device is
/// unavailable; every method is safe to call either way.
pub struct MediaPlayer<'aud> {
    music: Option<Music<'aud>>,
}

impl<'aud> MediaPlayer<'aud> {
    pub fn silent() -> Self {
        Self { music: None }
    }

    /// Starts looped playback of `track` at `volume`. Never fails: problems
    /// are logged and the player stays silent.
    pub fn start(device: Option<&'aud RaylibAudio>, track: Option<&Path>, volume: f32) -> Self {
        match Self::try_start(device, track, volume) {
            Ok(player) => player,
            Err(e) => {
                warn!("Could not play music: {}", e);
                Self::silent()
            }
        }
    }

    fn try_start(device: Option<&'aud RaylibAudio>, track: Option<&Path>, volume: f32) -> PresentResult<Self> {
        let Some(track) = track else {
            info!("No music configured");
            return Ok(Self::silent());
        };
        if !track.is_file() {
            return Err(PresentError::AssetMissing(track.to_path_buf()));
        }
        let device = device.ok_or_else(|| PresentError::PlaybackInit("audio device unavailable".into()))?;
        let filename = track
            .to_str()
            .ok_or_else(|| PresentError::PlaybackInit(format!("non UTF-8 path {:?}", track)))?;

        // Raylib music streams loop by default
        let music = device
            .new_music(filename)
            .map_err(|e| PresentError::PlaybackInit(e.to_string()))?;
        music.set_volume(volume);
        music.play_stream();
        info!("Playing {:?} at {:.0}% volume", track, volume * 100.0);

        Ok(Self { music: Some(music) })
    }

    pub fn is_playing(&self) -> bool {
        self.music.as_ref().is_some_and(|music| music.is_stream_playing())
    }

    /// Refills the stream buffers; call once per frame.
    pub fn update(&self) {
        if let Some(music) = &self.music {
            music.update_stream();
        }
    }

    /// Stops playback and releases the stream.
    pub fn stop(self) {
        if let Some(music) = self.music {
            music.stop_stream();
            info!("Music stopped");
        }
    }
}
