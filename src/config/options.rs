// src/config/options.rs
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::consts::*;
use crate::emotes::Emote;

/// Where the gallery markup comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GallerySource {
    Remote(String),
    /// Saved copy of the page, read instead of fetching.
    Local(PathBuf),
}

impl Default for GallerySource {
    fn default() -> Self {
        Self::Remote(GALLERY_URL.to_string())
    }
}

/// Everything one run needs, resolved up front and handed down explicitly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    pub source: GallerySource,
    pub layout: OutputLayout,
    /// Redo work even when the target file already exists.
    pub replace: bool,
    /// Run the sticker stage after downloading.
    pub convert: bool,
    pub workers: Workers,
    pub scrape: ScrapeOptions,
    pub sticker: StickerOptions,
    pub net: NetOptions,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            source: GallerySource::default(),
            layout: OutputLayout::default(),
            replace: false,
            convert: true,
            workers: Workers::default(),
            scrape: ScrapeOptions::default(),
            sticker: StickerOptions::default(),
            net: NetOptions::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Workers {
    pub downloads: usize,
    pub conversions: usize,
}

impl Default for Workers {
    fn default() -> Self {
        Self {
            downloads: CONCURRENT_DOWNLOADS,
            conversions: available_cpus(),
        }
    }
}

pub fn available_cpus() -> usize {
    std::thread::available_parallelism().map_or(1, |n| n.get())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    /// Only count images carrying `data-caption`, i.e. gallery entries
    /// rather than the preview icons next to each set heading.
    pub gallery_only: bool,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self { gallery_only: true }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StickerOptions {
    pub size: u32,
    pub extension: String,
    pub tray_size: u32,
    pub tray_file: String,
}

impl Default for StickerOptions {
    fn default() -> Self {
        Self {
            size: STICKER_SIZE,
            extension: s(STICKER_EXT),
            tray_size: TRAY_SIZE,
            tray_file: s(TRAY_FILE),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NetOptions {
    pub user_agent: String,
    pub timeout: Duration,
    /// Pause after each real download.
    pub request_pause: Duration,
}

impl Default for NetOptions {
    fn default() -> Self {
        Self {
            user_agent: s(USER_AGENT),
            timeout: Duration::from_secs(HTTP_TIMEOUT_SECS),
            request_pause: Duration::from_millis(REQUEST_PAUSE_MS),
        }
    }
}

/// Deterministic on-disk layout:
///
/// ```text
/// <root>/raw/<set-id>/<filename>
/// <root>/whatsapp/<set-id>/<filename>.webp
/// <root>/whatsapp/<set-id>/tray.png
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputLayout {
    root: PathBuf,
    raw_subdir: String,
    stickers_subdir: String,
}

impl Default for OutputLayout {
    fn default() -> Self {
        Self::new(DOWNLOADS_DIR)
    }
}

impl OutputLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            raw_subdir: s(RAW_SUBDIR),
            stickers_subdir: s(STICKERS_SUBDIR),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn raw_dir(&self, set_id: u32) -> PathBuf {
        self.root.join(&self.raw_subdir).join(set_id.to_string())
    }

    pub fn sticker_dir(&self, set_id: u32) -> PathBuf {
        self.root.join(&self.stickers_subdir).join(set_id.to_string())
    }

    pub fn raw_path(&self, emote: &Emote) -> PathBuf {
        self.raw_dir(emote.set_id()).join(emote.filename())
    }

    /// Same filename as the raw image with the sticker extension. Only a known
    /// image extension is replaced; dots elsewhere in the name are kept.
    pub fn sticker_path(&self, emote: &Emote, sticker: &StickerOptions) -> PathBuf {
        let name = emote.filename();
        let stem = match name.rsplit_once('.') {
            Some((stem, ext)) if IMAGE_EXTENSIONS.iter().any(|k| ext.eq_ignore_ascii_case(k)) => stem,
            _ => name,
        };
        self.sticker_dir(emote.set_id())
            .join(format!("{stem}.{}", sticker.extension))
    }

    pub fn tray_path(&self, set_id: u32, sticker: &StickerOptions) -> PathBuf {
        self.sticker_dir(set_id).join(&sticker.tray_file)
    }
}

fn s(v: &str) -> String {
    String::from(v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emotes::EmoteSet;

    fn bar() -> Emote {
        let mut set = EmoteSet::new(3, None);
        set.add("Icon_Emoji_Paimon%27s_Paintings_3_Bar.png", "https://x/revision/latest?format=original");
        set.emotes().next().unwrap().clone()
    }

    #[test]
    fn layout_paths_follow_set_and_filename() {
        let layout = OutputLayout::new("out");
        let sticker = StickerOptions::default();
        let e = bar();

        assert_eq!(
            layout.raw_path(&e),
            Path::new("out").join("raw").join("3").join("Icon_Emoji_Paimon's_Paintings_3_Bar.png")
        );
        assert_eq!(
            layout.sticker_path(&e, &sticker),
            Path::new("out").join("whatsapp").join("3").join("Icon_Emoji_Paimon's_Paintings_3_Bar.webp")
        );
        assert_eq!(
            layout.tray_path(3, &sticker),
            Path::new("out").join("whatsapp").join("3").join("tray.png")
        );
    }

    fn emote_in_3(key: &str) -> Emote {
        let mut set = EmoteSet::new(3, None);
        set.add(key, "https://x/revision/latest?format=original");
        set.emotes().next().unwrap().clone()
    }

    #[test]
    fn dotted_names_keep_everything_but_the_image_extension() {
        let layout = OutputLayout::new("out");
        let sticker = StickerOptions::default();
        let name = |key: &str| {
            let p = layout.sticker_path(&emote_in_3(key), &sticker);
            p.file_name().unwrap().to_string_lossy().into_owned()
        };

        assert_eq!(name("Icon_Emoji_Paimon%27s_Paintings_3_Mr._Bar"), "Icon_Emoji_Paimon's_Paintings_3_Mr._Bar.webp");
        assert_eq!(name("Icon_Emoji_Paimon%27s_Paintings_3_Mr._Baz"), "Icon_Emoji_Paimon's_Paintings_3_Mr._Baz.webp");
        assert_eq!(name("Icon_Emoji_Paimon%27s_Paintings_3_Bar"), "Icon_Emoji_Paimon's_Paintings_3_Bar.webp");
        assert_eq!(name("Icon_Emoji_Paimon%27s_Paintings_3_Qiqi.GIF"), "Icon_Emoji_Paimon's_Paintings_3_Qiqi.webp");
        assert_eq!(name("Icon_Emoji_Paimon%27s_Paintings_3_v1.5.png"), "Icon_Emoji_Paimon's_Paintings_3_v1.5.webp");
    }

    #[test]
    fn defaults_match_constants() {
        let o = Options::default();
        assert_eq!(o.source, GallerySource::Remote(GALLERY_URL.into()));
        assert_eq!(o.layout.root(), Path::new(DOWNLOADS_DIR));
        assert_eq!(o.workers.downloads, CONCURRENT_DOWNLOADS);
        assert!(o.workers.conversions >= 1);
        assert!(o.convert && !o.replace && o.scrape.gallery_only);
        assert_eq!(o.sticker.size, 512);
        assert_eq!(o.sticker.tray_size, 96);
    }
}
