//! Disk helpers for the tools: RGBA loading, map dumps and JSON output.
//!
//! - `load_rgba_image`: decode a PNG/JPEG into an owned RGBA buffer.
//! - `save_map_png`: write an `ImageF32` in `[0, 1]` to a grayscale PNG.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{ImageF32, ImageView};
use image::{GrayImage, Luma};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Owned RGBA buffer decoded from disk.
#[derive(Clone, Debug)]
pub struct OwnedRgba {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl OwnedRgba {
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Self {
        Self {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Raw interleaved bytes, as handed to `Scissors::set_data`.
    pub fn bytes(&self) -> &[u8] {
        &self.data
    }
}

/// Load an image from disk and expand it to 8-bit RGBA.
pub fn load_rgba_image(path: &Path) -> Result<OwnedRgba, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_rgba8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    Ok(OwnedRgba::new(width, height, img.into_raw()))
}

/// Save a unit-range float map to a grayscale PNG, clamping to [0, 255].
pub fn save_map_png(map: &ImageF32, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let mut out = GrayImage::new(map.w as u32, map.h as u32);
    for (y, row) in map.rows().enumerate() {
        for (x, &px) in row.iter().enumerate() {
            let v = (px * 255.0).clamp(0.0, 255.0);
            out.put_pixel(x as u32, y as u32, Luma([v as u8]));
        }
    }
    out.save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
