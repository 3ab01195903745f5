// src/runner.rs
use std::collections::HashSet;

use tracing::{info, warn};

use crate::{
    config::options::{OutputLayout, Options, StickerOptions},
    core::net::HttpGet,
    download::download_emote,
    emotes::Emote,
    file::ensure_set_dirs,
    pool::run_bounded,
    progress::{NullProgress, Progress, Stage},
    specs::gallery::{self, EmoteSets},
    sticker::convert_emote,
    error::Result,
};

/// One conversion job: the emote and whether it supplies its set's tray icon.
struct ConvertJob<'a> {
    emote: &'a Emote,
    tray: bool,
}

/// Top-level pipeline: fetch → parse → download all → convert all.
///
/// Only fetch/parse and directory creation are fatal. Per-emote failures are
/// logged and reported through `progress`; they do not change the result.
pub fn run(
    opts: &Options,
    client: &dyn HttpGet,
    progress: Option<&mut dyn Progress>,
) -> Result<()> {
    let mut null = NullProgress;
    let progress = progress.unwrap_or(&mut null);

    let doc = gallery::fetch(client, &opts.source)?;
    let sets = gallery::parse(&doc, &opts.scrape)?;
    drop(doc);
    info!("Found {} emote sets", sets.len());

    for id in sets.keys() {
        ensure_set_dirs(&opts.layout, *id)?;
    }

    let emotes: Vec<&Emote> = sets.values().flat_map(|s| s.emotes()).collect();
    download_all(opts, client, &emotes, progress);

    // Downloads are fully drained at this point; conversions only ever see finished files.
    if opts.convert {
        convert_all(opts, &sets, progress);
    }

    progress.finish();
    Ok(())
}

fn download_all(opts: &Options, client: &dyn HttpGet, emotes: &[&Emote], progress: &mut dyn Progress) {
    progress.begin(Stage::Download, emotes.len());
    run_bounded(
        emotes,
        opts.workers.downloads,
        |emote| download_emote(client, emote, &opts.layout, &opts.net, opts.replace),
        |emote, outcome| progress.item_done(Stage::Download, emote, &outcome),
    );
}

fn convert_all(opts: &Options, sets: &EmoteSets, progress: &mut dyn Progress) {
    let jobs = convert_jobs(sets, &opts.layout, &opts.sticker);

    progress.begin(Stage::Convert, jobs.len());
    run_bounded(
        &jobs,
        opts.workers.conversions,
        |job| convert_emote(job.emote, &opts.layout, &opts.sticker, job.tray, opts.replace),
        |job, outcome| progress.item_done(Stage::Convert, job.emote, &outcome),
    );
}

/// One job per emote, in set order. Emotes whose names differ only by image
/// extension would share a sticker file; the tray emote keeps it, otherwise
/// the first one does.
fn convert_jobs<'a>(sets: &'a EmoteSets, layout: &OutputLayout, sticker: &StickerOptions) -> Vec<ConvertJob<'a>> {
    let mut targets = HashSet::new();
    let mut jobs = Vec::new();
    for set in sets.values() {
        let (tray, rest): (Vec<&Emote>, Vec<&Emote>) = set.emotes().partition(|e| set.is_tray(e));
        for emote in tray.into_iter().chain(rest) {
            let target = layout.sticker_path(emote, sticker);
            if !targets.insert(target) {
                warn!("Not converting '{emote}'; another emote already owns its sticker name");
                continue;
            }
            jobs.push(ConvertJob { emote, tray: set.is_tray(emote) });
        }
    }
    jobs
}
