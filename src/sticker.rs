// src/sticker.rs
//
// Raw emote → WhatsApp sticker (square WebP) and, once per set, tray icon (small square PNG).

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use image::{
    DynamicImage, ExtendedColorType, GenericImageView, ImageEncoder, ImageReader, Rgba, RgbaImage,
    codecs::{
        png::{CompressionType, FilterType as PngFilter, PngEncoder},
        webp::WebPEncoder,
    },
    imageops::{self, FilterType},
};
use tracing::{error, info};

use crate::config::options::{OutputLayout, StickerOptions};
use crate::emotes::Emote;
use crate::error::{Error, Result};
use crate::file::remove_partial;
use crate::progress::Outcome;

/// Convert the downloaded image for `emote` into a sticker, plus the set's
/// tray icon when `tray` is set.
///
/// Skips when every required output exists and `replace` is off. On failure
/// only the output that was being written is removed; a finished sticker
/// survives a failed tray.
pub fn convert_emote(
    emote: &Emote,
    layout: &OutputLayout,
    opts: &StickerOptions,
    tray: bool,
    replace: bool,
) -> Outcome {
    let raw = layout.raw_path(emote);
    let sticker = layout.sticker_path(emote, opts);
    let tray_path = tray.then(|| layout.tray_path(emote.set_id(), opts));

    if !replace && sticker.exists() && tray_path.as_ref().is_none_or(|p| p.exists()) {
        info!("Skipping '{emote}'; sticker already exists");
        return Outcome::Skipped;
    }

    info!("Converting '{emote}'...");
    match write_outputs(&raw, &sticker, tray_path.as_deref(), opts) {
        Ok(()) => {
            info!("Converted '{emote}'{}", if tray { " (with tray icon)" } else { "" });
            Outcome::Written
        }
        Err(e) => {
            error!("Unable to convert '{emote}': {e}");
            Outcome::Failed(e.to_string())
        }
    }
}

fn write_outputs(
    raw: &Path,
    sticker: &Path,
    tray: Option<&Path>,
    opts: &StickerOptions,
) -> Result<()> {
    let img = open_image(raw)?;
    let padded = pad_to_square(&img, opts.size).ok_or_else(|| Error::EmptyImage(raw.to_path_buf()))?;

    save_webp(&padded, sticker)?;

    if let Some(tray) = tray {
        let small = imageops::resize(&padded, opts.tray_size, opts.tray_size, FilterType::Lanczos3);
        save_png(&small, tray)?;
    }
    Ok(())
}

fn open_image(path: &Path) -> Result<DynamicImage> {
    // Raw files keep the wiki's name, which is not always a reliable extension.
    ImageReader::open(path)
        .map_err(|e| Error::io(path, e))?
        .with_guessed_format()
        .map_err(|e| Error::io(path, e))?
        .decode()
        .map_err(|e| Error::image(path, e))
}

/// Fit `img` inside a `size`×`size` transparent canvas, keeping its aspect
/// ratio and centring it. `None` for an image with no pixels.
pub fn pad_to_square(img: &DynamicImage, size: u32) -> Option<RgbaImage> {
    let (w, h) = img.dimensions();
    if w == 0 || h == 0 || size == 0 {
        return None;
    }

    let scale = f64::min(f64::from(size) / f64::from(w), f64::from(size) / f64::from(h));
    let fit = |v: u32| ((f64::from(v) * scale).round() as u32).clamp(1, size);
    let (nw, nh) = (fit(w), fit(h));

    let resized = imageops::resize(&img.to_rgba8(), nw, nh, FilterType::Lanczos3);
    let mut canvas = RgbaImage::from_pixel(size, size, Rgba([0, 0, 0, 0]));
    imageops::overlay(
        &mut canvas,
        &resized,
        i64::from((size - nw) / 2),
        i64::from((size - nh) / 2),
    );
    Some(canvas)
}

fn save_webp(img: &RgbaImage, path: &Path) -> Result<()> {
    save_with(path, |w| {
        WebPEncoder::new_lossless(w).write_image(img.as_raw(), img.width(), img.height(), ExtendedColorType::Rgba8)
    })
}

fn save_png(img: &RgbaImage, path: &Path) -> Result<()> {
    save_with(path, |w| {
        PngEncoder::new_with_quality(w, CompressionType::Best, PngFilter::Adaptive)
            .write_image(img.as_raw(), img.width(), img.height(), ExtendedColorType::Rgba8)
    })
}

fn save_with<F>(path: &Path, encode: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> image::ImageResult<()>,
{
    // A failed create leaves any previous file alone; anything after it is partial.
    let file = File::create(path).map_err(|e| Error::io(path, e))?;
    let mut out = BufWriter::new(file);
    let written = encode(&mut out)
        .map_err(|e| Error::image(path, e))
        .and_then(|()| out.flush().map_err(|e| Error::io(path, e)));
    drop(out);
    written.inspect_err(|_| remove_partial(path))
}
