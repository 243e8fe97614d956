// src/effects/color_fade.rs
//
// Per-shape fade: the color starts white and halves its distance to the
// target every step until no channel can move any further.

use rand::Rng;

use crate::models::Color;

/// Lowest alpha handed out when initial alpha is randomized.
pub const MIN_RANDOM_ALPHA: u8 = 128;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorFade {
    target: Color,
    current: Color,
    finished: bool,
}

impl ColorFade {
    pub fn new(target: Color, initial_alpha: u8) -> Self {
        Self {
            target,
            current: Color::rgba(255, 255, 255, initial_alpha),
            finished: false,
        }
    }

    /// A fade toward a uniformly random opaque color.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, initial_alpha: u8) -> Self {
        let target = Color::rgb(rng.gen(), rng.gen(), rng.gen());
        Self::new(target, initial_alpha)
    }

    /// Picks the starting alpha: opaque, or uniform in `[MIN_RANDOM_ALPHA, 255]`.
    pub fn initial_alpha<R: Rng + ?Sized>(rng: &mut R, randomize: bool) -> u8 {
        if randomize {
            rng.gen_range(MIN_RANDOM_ALPHA..=u8::MAX)
        } else {
            u8::MAX
        }
    }

    /// Advances every channel halfway toward the target, or marks the fade
    /// finished once no channel has a halvable gap left.
    pub fn step(&mut self) {
        if self.finished {
            return;
        }

        let gaps = self.current.saturating_gap(&self.target);
        if gaps.iter().all(|gap| gap / 2 == 0) {
            self.finished = true;
            return;
        }

        let mut channels = self.current.channels();
        for (channel, gap) in channels.iter_mut().zip(gaps) {
            // gap is zero wherever current <= target
            *channel -= gap / 2;
        }
        self.current = Color::from_channels(channels);
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn current(&self) -> Color {
        self.current
    }

    pub fn target(&self) -> Color {
        self.target
    }
}
