// src/config/config_types.rs
//
// Config types for the app

use std::time::Duration;

use log::LevelFilter;
use nannou::prelude::Key;

/// The knobs that differ between the classic and coarse screensavers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub grid_columns: u32,
    pub grid_rows: u32,
    pub randomize_initial_alpha: bool, // translucent shapes when set
    pub step_only_when_drawn: bool,    // fade advances only inside the draw
}

impl Profile {
    /// 16 x 9 grid of opaque shapes.
    pub fn classic() -> Self {
        Self {
            grid_columns: 16,
            grid_rows: 9,
            randomize_initial_alpha: false,
            step_only_when_drawn: false,
        }
    }

    /// 4 x 2 grid of translucent shapes.
    pub fn coarse() -> Self {
        Self {
            grid_columns: 4,
            grid_rows: 2,
            randomize_initial_alpha: true,
            step_only_when_drawn: true,
        }
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self::classic()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub fullscreen: bool,
    pub texture_samples: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Distraction".to_string(),
            width: 1920,
            height: 1080,
            fullscreen: true,
            texture_samples: 4,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub profile: Profile,
    pub window: WindowConfig,
    pub exit_key: Key,
    pub tick_interval: Duration, // sleep after every tick
    pub log_level: LevelFilter,  // used when RUST_LOG is unset
}

impl Config {
    pub fn classic() -> Self {
        Self::with_profile(Profile::classic())
    }

    pub fn coarse() -> Self {
        Self::with_profile(Profile::coarse())
    }

    pub fn with_profile(profile: Profile) -> Self {
        Self {
            profile,
            window: WindowConfig::default(),
            exit_key: Key::Escape,
            tick_interval: Duration::from_millis(25),
            log_level: LevelFilter::Info,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::classic()
    }
}
