// src/cli.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser};
use tracing::{debug, info, warn};

use crate::config::consts::{CONCURRENT_DOWNLOADS, DOWNLOADS_DIR, GALLERY_URL};
use crate::config::options::{GallerySource, Options, OutputLayout, ScrapeOptions, Workers, available_cpus};
use crate::core::net::Client;
use crate::emotes::Emote;
use crate::error::Result;
use crate::progress::{Outcome, Progress, Stage};
use crate::runner;

/// Download Paimon's Paintings emotes from the Genshin Impact wiki and turn them into WhatsApp stickers.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Download and convert again even when the files already exist
    #[arg(long)]
    pub replace: bool,

    /// Read the gallery from a saved HTML file instead of fetching it
    #[arg(long, value_name = "FILE", conflicts_with = "url")]
    pub local: Option<PathBuf>,

    /// Gallery page to scrape
    #[arg(long, default_value = GALLERY_URL)]
    pub url: String,

    /// Output root; raw images go to <OUT>/raw, stickers to <OUT>/whatsapp
    #[arg(short, long, value_name = "DIR", default_value = DOWNLOADS_DIR)]
    pub out: PathBuf,

    /// Stop after downloading; skip sticker conversion
    #[arg(long)]
    pub download_only: bool,

    /// Also pick up set preview images that carry no gallery caption
    #[arg(long)]
    pub include_previews: bool,

    #[arg(long, value_name = "N", default_value_t = CONCURRENT_DOWNLOADS)]
    pub download_workers: usize,

    /// Defaults to the number of available CPUs
    #[arg(long, value_name = "N")]
    pub convert_workers: Option<usize>,

    /// More output (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn into_options(self) -> Options {
        let source = match self.local {
            Some(path) => GallerySource::Local(path),
            None => GallerySource::Remote(self.url),
        };
        Options {
            source,
            layout: OutputLayout::new(self.out),
            replace: self.replace,
            convert: !self.download_only,
            workers: Workers {
                downloads: self.download_workers.max(1),
                conversions: self.convert_workers.unwrap_or_else(available_cpus).max(1),
            },
            scrape: ScrapeOptions { gallery_only: !self.include_previews },
            ..Options::default()
        }
    }
}

/// Per-stage "[n/total]" lines on the debug level.
#[derive(Default)]
struct LogProgress {
    total: usize,
    done: usize,
}

impl Progress for LogProgress {
    fn begin(&mut self, stage: Stage, total: usize) {
        self.total = total;
        self.done = 0;
        info!("Starting {stage} stage ({total} emotes)");
    }

    fn item_done(&mut self, stage: Stage, emote: &Emote, outcome: &Outcome) {
        self.done += 1;
        match outcome {
            Outcome::Failed(_) => warn!("[{}/{}] {stage} failed: {emote}", self.done, self.total),
            _ => debug!("[{}/{}] {stage} {outcome:?}: {emote}", self.done, self.total),
        }
    }

    fn finish(&mut self) {
        info!("Done");
    }
}

pub fn run(args: Args) -> Result<()> {
    let opts = args.into_options();
    debug!("{opts:?}");

    let client = Client::new(&opts.net)?;
    let mut progress = LogProgress::default();
    runner::run(&opts, &client, Some(&mut progress))
}
