// src/config/consts.rs

// Source page
pub const GALLERY_URL: &str = "https://genshin-impact.fandom.com/wiki/Chat/Gallery#Emojis";

// Page markers
pub const HEADLINE_CLASS: &str = "mw-headline";
pub const SET_HEADING_PREFIX: &str = "Set_";
pub const EMOTE_KEY_PREFIX: &str = "Icon_Emoji_Paimon%27s_Paintings_";
pub const SECURE_SCHEME: &str = "https";

// Fandom image URLs
pub const REVISION_MARKER: &str = "/revision";
pub const ORIGINAL_QUALITY_SUFFIX: &str = "/revision/latest?format=original";

// Output layout
pub const DOWNLOADS_DIR: &str = "downloads";
pub const RAW_SUBDIR: &str = "raw";
pub const STICKERS_SUBDIR: &str = "whatsapp";

// Stickers (WhatsApp: 512px WebP stickers, 96px PNG tray)
pub const STICKER_SIZE: u32 = 512;
pub const STICKER_EXT: &str = "webp";
/// Raw-file extensions replaced when naming a sticker.
pub const IMAGE_EXTENSIONS: [&str; 5] = ["png", "gif", "jpg", "jpeg", "webp"];
pub const TRAY_SIZE: u32 = 96;
pub const TRAY_FILE: &str = "tray.png";

// Concurrency
pub const CONCURRENT_DOWNLOADS: usize = 4;
pub const REQUEST_PAUSE_MS: u64 = 75; // be polite

// Net
pub const HTTP_TIMEOUT_SECS: u64 = 30;
pub const USER_AGENT: &str = concat!("genshin_stickers/", env!("CARGO_PKG_VERSION"));
