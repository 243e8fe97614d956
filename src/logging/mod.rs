// src/logging/mod.rs
//
// Logger setup for the binaries

mod init;

pub use init::init_logging;
