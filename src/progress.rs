// src/progress.rs
use std::fmt;

use crate::emotes::Emote;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Download,
    Convert,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stage::Download => "download",
            Stage::Convert => "convert",
        })
    }
}

/// What happened to one emote in one stage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Written,
    /// Target already on disk and `replace` was off.
    Skipped,
    /// Logged, partial output removed; the next run will try again.
    Failed(String),
}

/// Lightweight progress reporting for the pipeline.
/// All calls happen on the thread that called `runner::run`.
pub trait Progress {
    /// Called when a stage starts, with the number of emotes it will process.
    fn begin(&mut self, _stage: Stage, _total: usize) {}

    /// Called once per emote as its job finishes (completion order, not input order).
    fn item_done(&mut self, _stage: Stage, _emote: &Emote, _outcome: &Outcome) {}

    /// Called after the last stage.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
