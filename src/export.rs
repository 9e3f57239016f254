//! PNG and ICO encoding.

use std::fs;
use std::io::{self, Cursor};
use std::path::Path;

use ico::{IconDir, IconDirEntry, IconImage, ResourceType};
use image::imageops::{self, FilterType};
use image::{ImageFormat, RgbaImage};

use crate::error::IconError;
use crate::targets::Format;

/// Encode `image` as PNG.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, image::ImageError> {
    let mut buf = Cursor::new(Vec::new());
    image.write_to(&mut buf, ImageFormat::Png)?;
    Ok(buf.into_inner())
}

/// Encode `image` as an ICO with one entry per size, resampled as needed.
pub fn encode_ico(image: &RgbaImage, sizes: &[u32]) -> io::Result<Vec<u8>> {
    let mut dir = IconDir::new(ResourceType::Icon);

    for &size in sizes {
        let layer = if image.dimensions() == (size, size) {
            image.clone()
        } else {
            imageops::resize(image, size, size, FilterType::Lanczos3)
        };
        let entry = IconDirEntry::encode(&IconImage::from_rgba_data(size, size, layer.into_raw()))?;
        dir.add_entry(entry);
    }

    let mut buf = Vec::new();
    dir.write(&mut buf)?;
    Ok(buf)
}

/// Encode `image` in `format`. `path` is only used for error reporting.
pub fn encode(image: &RgbaImage, format: Format, path: &Path) -> Result<Vec<u8>, IconError> {
    let encoded = match format {
        Format::Png => encode_png(image).map_err(|e| e.to_string()),
        Format::Ico { sizes } => encode_ico(image, sizes).map_err(|e| e.to_string()),
    };
    encoded.map_err(|reason| IconError::Encode {
        path: path.to_path_buf(),
        reason,
    })
}

/// Write `data` to `path`, replacing any existing file.
pub fn write_file(path: &Path, data: &[u8]) -> Result<(), IconError> {
    fs::write(path, data).map_err(|source| IconError::Write {
        path: path.to_path_buf(),
        source,
    })
}
