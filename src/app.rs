// src/app.rs
//
// nannou wiring: window callbacks feed the stimulus queue, `update` runs one
// animation tick and sleeps, `view` shows the surface texture.

use std::sync::OnceLock;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use nannou::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::animation::{AnimationLoop, LoopControl};
use crate::config::Config;
use crate::controllers::{Stimulus, StimulusQueue};
use crate::error::InitError;
use crate::logging::init_logging;
use crate::render::NannouSurface;

// nannou's model function cannot capture, so the config is parked here.
static CONFIG: OnceLock<Config> = OnceLock::new();

struct Model {
    animation: AnimationLoop<NannouSurface, StdRng>,
    stimuli: StimulusQueue,
    tick_interval: Duration,
}

/// Runs the screensaver until Quit or the exit key.
pub fn run(config: Config) {
    init_logging(config.log_level);
    if CONFIG.set(config).is_err() {
        log::warn!("app already configured, ignoring new config");
    }
    nannou::app(model).update(update).run();
}

fn model(app: &App) -> Model {
    let config = CONFIG.get().cloned().unwrap_or_default();
    match build_model(app, &config) {
        Ok(model) => model,
        Err(e) => fatal(e),
    }
}

fn build_model(app: &App, config: &Config) -> Result<Model, InitError> {
    let window_id = app
        .new_window()
        .title(&config.window.title)
        .size(config.window.width, config.window.height)
        .resizable(true)
        .view(view)
        .key_released(key_released)
        .resized(resized)
        .closed(closed)
        .build()
        .map_err(|e| InitError::Window(format!("{:?}", e)))?;

    let window = app
        .window(window_id)
        .ok_or_else(|| InitError::Window("window closed during startup".to_string()))?;

    let surface = NannouSurface::new(
        &window,
        config.window.width,
        config.window.height,
        config.window.texture_samples,
    )?;

    if config.window.fullscreen {
        window.set_fullscreen(true);
    }

    let seed = seed_from_clock();
    log::info!(
        "starting {}x{} with {}x{} grid, seed {}",
        config.window.width,
        config.window.height,
        config.profile.grid_columns,
        config.profile.grid_rows,
        seed
    );

    Ok(Model {
        animation: AnimationLoop::new(config, surface, StdRng::seed_from_u64(seed)),
        stimuli: StimulusQueue::new(),
        tick_interval: config.tick_interval,
    })
}

fn update(app: &App, model: &mut Model, _update: Update) {
    let stimulus = model.stimuli.poll();
    if model.animation.tick(stimulus) == LoopControl::Exit {
        log::info!("exiting with {} live shapes", model.animation.len());
        app.quit();
        return;
    }
    std::thread::sleep(model.tick_interval);
}

fn view(_app: &App, model: &Model, frame: Frame) {
    model.animation.canvas().view(&frame);
}

fn key_released(_app: &App, model: &mut Model, key: Key) {
    model.stimuli.push(Stimulus::KeyRelease(key));
}

fn resized(_app: &App, model: &mut Model, size: Vec2) {
    model.stimuli.push(Stimulus::Resize {
        width: size.x.max(0.0).round() as u32,
        height: size.y.max(0.0).round() as u32,
    });
}

fn closed(_app: &App, model: &mut Model) {
    model.stimuli.push(Stimulus::Quit);
}

fn seed_from_clock() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

fn fatal(err: InitError) -> ! {
    log::error!("{}", err);
    std::process::exit(1);
}
