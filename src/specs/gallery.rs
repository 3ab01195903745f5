// src/specs/gallery.rs
//
// Chat/Gallery page.
//
// Set headings look like
//     <span class="mw-headline" id="Set_3"> ... <img data-image-key="Icon_Emoji_Paimon%27s_Paintings_3_..."> </span>
// where the inner <img> (no `data-caption`) is the set's preview.
//
// Gallery entries are <img> tags with
//     data-src="https://static.wikia.nocookie.net/.../revision/latest/scale-to-width-down/120?cb=..."
//     data-image-key="Icon_Emoji_Paimon%27s_Paintings_3_Amber_1.png"
//     data-caption="..."
// The set id is the first number after the `Paintings_` prefix.

use std::collections::BTreeMap;
use std::fs;

use scraper::{ElementRef, Html};
use tracing::{debug, info, trace, warn};

use crate::config::consts::{EMOTE_KEY_PREFIX, HEADLINE_CLASS, SECURE_SCHEME, SET_HEADING_PREFIX};
use crate::config::options::{GallerySource, ScrapeOptions};
use crate::core::html::{attr, attr_starts_with, find_all_in, find_first, has_attr, has_class, is_tag};
use crate::core::net::HttpGet;
use crate::core::sanitize::{id_after_prefix, original_quality_url, set_id_from_key};
use crate::emotes::EmoteSet;
use crate::error::{Error, Result};

pub type EmoteSets = BTreeMap<u32, EmoteSet>;

/* ---------- fetch ---------- */

/// Retrieve and parse the gallery page. Any failure here ends the run.
pub fn fetch(client: &dyn HttpGet, source: &GallerySource) -> Result<Html> {
    let text = match source {
        GallerySource::Remote(url) => {
            info!("Fetching gallery page {url}");
            let body = client.get_bytes(url)?;
            String::from_utf8_lossy(&body).into_owned()
        }
        GallerySource::Local(path) => {
            info!("Reading gallery page from {}", path.display());
            fs::read_to_string(path).map_err(|e| Error::io(path, e))?
        }
    };
    Ok(Html::parse_document(&text))
}

/* ---------- predicates ---------- */

pub fn is_set_heading(el: &ElementRef<'_>) -> bool {
    is_tag(el, "span")
        && has_class(el, HEADLINE_CLASS)
        && attr_starts_with(el, "id", SET_HEADING_PREFIX)
}

pub fn is_emote_img(el: &ElementRef<'_>) -> bool {
    is_tag(el, "img")
        && attr_starts_with(el, "data-src", SECURE_SCHEME)
        && attr_starts_with(el, "data-image-key", EMOTE_KEY_PREFIX)
}

pub fn is_preview_img(el: &ElementRef<'_>) -> bool {
    is_emote_img(el) && !has_attr(el, "data-caption")
}

pub fn is_gallery_img(el: &ElementRef<'_>) -> bool {
    is_emote_img(el) && has_attr(el, "data-caption")
}

/* ---------- parse ---------- */

/// Build every emote set on the page.
///
/// Headings are read first so that each gallery image can be matched to its
/// set; an image naming a set without a heading is an error.
pub fn parse(doc: &Html, opts: &ScrapeOptions) -> Result<EmoteSets> {
    let mut sets = collect_sets(doc);

    let wanted: fn(&ElementRef<'_>) -> bool = if opts.gallery_only { is_gallery_img } else { is_emote_img };

    for img in find_all_in(doc, wanted) {
        // Both attributes are guaranteed by the predicate.
        let (Some(key), Some(src)) = (attr(&img, "data-image-key"), attr(&img, "data-src")) else {
            continue;
        };

        let set_id = set_id_from_key(key, EMOTE_KEY_PREFIX)
            .ok_or_else(|| Error::MalformedKey(key.to_string()))?;
        let set = sets
            .get_mut(&set_id)
            .ok_or_else(|| Error::UnknownSet { set_id, key: key.to_string() })?;

        if !set.add(key, &original_quality_url(src)) {
            trace!("Duplicate image key {key}; keeping the first");
        }
    }

    for set in sets.values() {
        debug!("Set {}: {} emotes, preview {:?}", set.id(), set.len(), set.preview_key());
    }
    Ok(sets)
}

fn collect_sets(doc: &Html) -> EmoteSets {
    let mut sets = EmoteSets::new();

    for heading in find_all_in(doc, is_set_heading) {
        let Some(raw_id) = attr(&heading, "id") else { continue };
        let Some(set_id) = id_after_prefix(raw_id, SET_HEADING_PREFIX) else {
            warn!("Ignoring heading {raw_id:?}: no numeric set id");
            continue;
        };
        if sets.contains_key(&set_id) {
            continue;
        }

        let preview_key = find_first(heading, is_preview_img)
            .and_then(|img| attr(&img, "data-image-key"))
            .map(str::to_string);
        if preview_key.is_none() {
            warn!("Set {set_id} has no preview image; it will get no tray icon");
        }
        sets.insert(set_id, EmoteSet::new(set_id, preview_key));
    }
    sets
}
