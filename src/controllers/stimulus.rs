// src/controllers/stimulus.rs
//
// Window events the animation reacts to. Callbacks queue them as they
// arrive; the update step takes at most one per tick.

use std::collections::VecDeque;

use nannou::prelude::Key;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stimulus {
    Quit,
    Resize { width: u32, height: u32 },
    KeyRelease(Key),
}

#[derive(Debug, Default)]
pub struct StimulusQueue {
    queue: VecDeque<Stimulus>,
}

impl StimulusQueue {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }

    pub fn push(&mut self, stimulus: Stimulus) {
        self.queue.push_back(stimulus);
    }

    /// Oldest pending stimulus, if any.
    pub fn poll(&mut self) -> Option<Stimulus> {
        self.queue.pop_front()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
