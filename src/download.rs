// src/download.rs
use std::{path::Path, thread};

use tracing::{error, info};

use crate::config::options::{NetOptions, OutputLayout};
use crate::core::net::HttpGet;
use crate::emotes::Emote;
use crate::error::Result;
use crate::file::{remove_partial, write_bytes};
use crate::progress::Outcome;

/// Make sure the original-quality image for `emote` is on disk.
///
/// Existing files are kept unless `replace` is set. Errors are logged and
/// reported as [`Outcome::Failed`]; they never stop the other downloads.
pub fn download_emote(
    client: &dyn HttpGet,
    emote: &Emote,
    layout: &OutputLayout,
    net: &NetOptions,
    replace: bool,
) -> Outcome {
    let path = layout.raw_path(emote);
    if !replace && path.exists() {
        info!("Skipping '{emote}'; already downloaded");
        return Outcome::Skipped;
    }

    info!("Downloading '{emote}'...");
    let result = fetch_to(client, emote.download_url(), &path);

    if !net.request_pause.is_zero() {
        thread::sleep(net.request_pause); // be polite
    }

    match result {
        Ok(()) => {
            info!("Downloaded '{emote}'");
            Outcome::Written
        }
        Err(e) => {
            error!("Unable to download '{emote}': {e}");
            Outcome::Failed(e.to_string())
        }
    }
}

fn fetch_to(client: &dyn HttpGet, url: &str, path: &Path) -> Result<()> {
    // Body first: a failed request leaves any earlier copy alone.
    let body = client.get_bytes(url)?;
    write_bytes(path, &body).inspect_err(|_| remove_partial(path))
}
