// src/main.rs
use distraction::{app, config::Config};

fn main() {
    app::run(Config::classic());
}
