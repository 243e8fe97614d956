// src/bin/coarse.rs
// Large translucent shapes on a 4x2 grid
use distraction::{app, config::Config};

fn main() {
    app::run(Config::coarse());
}
