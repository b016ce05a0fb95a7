use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::Context as _;
use clap::Parser;
use raylib::prelude::*;
use signal_hook::consts::{SIGINT, SIGTERM};
use tracing::{debug, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod config;
mod constants;
mod error;
mod input;
mod media_player;
mod scene;
mod state;
mod texture_loader;

use crate::config::{Cli, Config, DisplayGeometry};
use crate::constants::*;
use crate::media_player::MediaPlayer;
use crate::scene::Scene;
use crate::state::PresentationState;
use crate::texture_loader::{load_photo, Photo};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("present=info")))
        .init();

    let cli = Cli::parse();
    let config = Config::resolve(&cli).context("Failed to load configuration")?;

    info!("Starting Interactive Christmas Present App...");
    info!("Instructions: Click on the present to open it!");
    info!("Then click to view each photo");
    if config.photos.is_empty() {
        warn!("No photos configured, the present will stay closed");
    }

    // Ctrl+C and SIGTERM end the loop instead of killing the process
    let interrupted = Arc::new(AtomicBool::new(false));
    for signal in [SIGINT, SIGTERM] {
        signal_hook::flag::register(signal, Arc::clone(&interrupted))
            .with_context(|| format!("Failed to register handler for signal {}", signal))?;
    }

    let geometry = config.geometry;
    let (mut rl, thread) = raylib::init()
        .size(geometry.width, geometry.height)
        .title(WINDOW_TITLE)
        .vsync()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);
    center_window(&mut rl, &geometry);

    let audio = match RaylibAudio::init_audio_device() {
        Ok(audio) => Some(audio),
        Err(e) => {
            warn!("Audio device unavailable: {:?}", e);
            None
        }
    };
    let player = MediaPlayer::start(audio.as_ref(), config.music.as_deref(), config.volume);
    if !player.is_playing() {
        info!("Continuing without music");
    }

    run(&mut rl, &thread, &config, &player, &interrupted);

    if interrupted.load(Ordering::Relaxed) {
        info!("Interrupted");
    }
    info!("Closing app...");
    player.stop();
    drop(audio);

    Ok(())
}

// --- Event loop: one event, one transition, one redraw ---
fn run(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    config: &Config,
    player: &MediaPlayer,
    interrupted: &AtomicBool,
) {
    let photo_count = config.photos.len();
    let mut state = PresentationState::default();
    let mut photo: Option<Photo> = None;
    let mut scene = Scene::compose(state, photo_count, &config.geometry, None);

    while !rl.window_should_close() && !interrupted.load(Ordering::Relaxed) {
        player.update();

        for event in input::poll(rl) {
            let outcome = input::dispatch(state, event, photo_count);
            if let Some(cursor) = outcome.cursor {
                input::apply_cursor(rl, cursor);
            }
            if outcome.redraw {
                state = outcome.state;
                debug!(opened = state.opened(), index = ?state.photo_index(), "Click");
                photo = resolve_photo(rl, thread, config, state);
                scene = Scene::compose(state, photo_count, &config.geometry, photo.as_ref().map(Photo::size));
            }
        }

        let mut d = rl.begin_drawing(thread);
        scene::paint(&mut d, &scene, photo.as_ref());
    }
}

fn resolve_photo(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    config: &Config,
    state: PresentationState,
) -> Option<Photo> {
    let path = config.photos.get(state.photo_index()?)?;
    match load_photo(rl, thread, path, &config.geometry) {
        Ok(Some(photo)) => Some(photo),
        Ok(None) => {
            warn!("Photo {:?} not found, showing captions only", path);
            None
        }
        Err(e) => {
            warn!("Could not load photo: {}", e);
            None
        }
    }
}

fn center_window(rl: &mut RaylibHandle, geometry: &DisplayGeometry) {
    let monitor = get_current_monitor();
    let screen = (get_monitor_width(monitor), get_monitor_height(monitor));
    let (x, y) = centered_position(screen, geometry);
    rl.set_window_position(x, y);
}

fn centered_position(screen: (i32, i32), geometry: &DisplayGeometry) -> (i32, i32) {
    ((screen.0 - geometry.width) / 2, (screen.1 - geometry.height) / 2)
}
