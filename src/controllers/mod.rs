pub mod stimulus;

pub use stimulus::{Stimulus, StimulusQueue};
