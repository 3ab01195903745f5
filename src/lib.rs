// src/lib.rs

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod emotes;
pub mod error;
pub mod log;
pub mod specs;

pub mod download;
pub mod file;
pub mod pool;
pub mod progress;
pub mod runner;
pub mod sticker;

pub use error::{Error, Result};
