// src/emotes.rs
use std::collections::BTreeMap;
use std::fmt;

use crate::core::sanitize::decode_key;

/// One chat emote found on the gallery page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Emote {
    key: String,
    set_id: u32,
    download_url: String,
    filename: String,
}

impl Emote {
    fn new(key: &str, set_id: u32, download_url: &str) -> Self {
        Self {
            key: key.to_string(),
            set_id,
            download_url: download_url.to_string(),
            filename: decode_key(key),
        }
    }

    /// URL-encoded `data-image-key`, unique within its set.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn set_id(&self) -> u32 {
        self.set_id
    }

    pub fn download_url(&self) -> &str {
        &self.download_url
    }

    /// Decoded key, safe to use as a single path component.
    pub fn filename(&self) -> &str {
        &self.filename
    }
}

impl fmt::Display for Emote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.filename)
    }
}

/// A numbered "Set N" group of emotes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmoteSet {
    id: u32,
    preview_key: Option<String>,
    emotes: BTreeMap<String, Emote>,
}

impl EmoteSet {
    pub fn new(id: u32, preview_key: Option<String>) -> Self {
        Self { id, preview_key, emotes: BTreeMap::new() }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    /// Key of the emote whose picture heads the set; it becomes the tray icon.
    pub fn preview_key(&self) -> Option<&str> {
        self.preview_key.as_deref()
    }

    /// Adds an emote owned by this set. Returns `false` (and keeps the
    /// existing entry) when the key is already present.
    pub fn add(&mut self, key: &str, download_url: &str) -> bool {
        if self.emotes.contains_key(key) {
            return false;
        }
        self.emotes
            .insert(key.to_string(), Emote::new(key, self.id, download_url));
        true
    }

    pub fn get(&self, key: &str) -> Option<&Emote> {
        self.emotes.get(key)
    }

    pub fn emotes(&self) -> impl Iterator<Item = &Emote> {
        self.emotes.values()
    }

    pub fn len(&self) -> usize {
        self.emotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.emotes.is_empty()
    }

    pub fn is_tray(&self, emote: &Emote) -> bool {
        self.preview_key() == Some(emote.key())
    }
}
