use std::fs;
use std::path::{Path, PathBuf};

use crate::error::IconError;
use crate::export::{encode, write_file};
use crate::icon::{Variant, draw_icon};
use crate::render::{FontBook, FontChoice};
use crate::targets::ALL_TARGETS;
use crate::utils::hash::hash_bytes;

/// A file written by [`run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: PathBuf,
    /// Edge length of the rendered canvas
    pub size: u32,
    pub sha256: String,
}

pub struct GenerateResult {
    pub files: Vec<GeneratedFile>,
    /// Every distinct font that drew a label, in first-use order
    pub fonts: Vec<FontChoice>,
}

/// Render every target for `variant` into `output_dir`.
/// The directory is created if missing; existing files are overwritten.
pub fn run(output_dir: &Path, variant: Variant, book: &FontBook) -> Result<GenerateResult, IconError> {
    fs::create_dir_all(output_dir).map_err(|source| IconError::OutputDir {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let style = variant.style();
    let choice = book.resolve();
    let mut fonts = Vec::new();
    let mut files = Vec::with_capacity(ALL_TARGETS.len());

    for target in ALL_TARGETS {
        let icon = draw_icon(book, &choice, style, target.size, target.with_label)?;
        if let Some(used) = icon.font {
            record_font(&mut fonts, used);
        }

        let path = output_dir.join(target.file);
        let data = encode(&icon.image, target.format, &path)?;
        write_file(&path, &data)?;

        files.push(GeneratedFile {
            path,
            size: target.size,
            sha256: hash_bytes(&data),
        });
    }

    Ok(GenerateResult { files, fonts })
}

fn record_font(fonts: &mut Vec<FontChoice>, used: FontChoice) {
    if !fonts.contains(&used) {
        fonts.push(used);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::PRIMARY;
    use crate::utils::hash::hash_file;
    use std::fs::File;
    use tempfile::tempdir;

    #[test]
    fn writes_five_non_empty_files_without_fonts() {
        let output_dir = tempdir().unwrap();

        let result = run(output_dir.path(), Variant::Primary, &FontBook::empty()).unwrap();

        assert_eq!(result.files.len(), 5);
        assert_eq!(result.fonts, vec![FontChoice::Builtin]);
        for name in [
            "pwa-192x192.png",
            "pwa-512x512.png",
            "pwa-maskable.png",
            "apple-touch-icon.png",
            "favicon.ico",
        ] {
            let len = fs::metadata(output_dir.path().join(name)).unwrap().len();
            assert!(len > 0, "{} is empty", name);
        }
    }

    #[test]
    fn mixed_fonts_are_all_reported() {
        let mut fonts = Vec::new();
        let system = FontChoice::System("DejaVu Sans".to_string());

        record_font(&mut fonts, system.clone());
        record_font(&mut fonts, FontChoice::Builtin);
        record_font(&mut fonts, system.clone());

        assert_eq!(fonts, vec![system, FontChoice::Builtin]);
    }

    #[test]
    fn creates_missing_output_dir() {
        let root = tempdir().unwrap();
        let output_dir = root.path().join("client").join("public");

        run(&output_dir, Variant::Primary, &FontBook::empty()).unwrap();

        assert!(output_dir.join("favicon.ico").exists());
    }

    #[test]
    fn png_dimensions_match_targets() {
        let output_dir = tempdir().unwrap();

        run(output_dir.path(), Variant::Alternate, &FontBook::empty()).unwrap();

        for (name, size) in [
            ("pwa-192x192.png", 192),
            ("pwa-512x512.png", 512),
            ("pwa-maskable.png", 1024),
            ("apple-touch-icon.png", 180),
        ] {
            let dims = image::image_dimensions(output_dir.path().join(name)).unwrap();
            assert_eq!(dims, (size, size), "{}", name);
        }
    }

    #[test]
    fn favicon_has_16_and_32_entries() {
        let output_dir = tempdir().unwrap();

        run(output_dir.path(), Variant::Primary, &FontBook::empty()).unwrap();

        let file = File::open(output_dir.path().join("favicon.ico")).unwrap();
        let dir = ico::IconDir::read(file).unwrap();
        let sizes: Vec<u32> = dir.entries().iter().map(|e| e.width()).collect();
        assert_eq!(sizes, vec![16, 32]);
    }

    #[test]
    fn rerun_is_byte_identical() {
        let first = tempdir().unwrap();
        let second = tempdir().unwrap();
        let book = FontBook::empty();

        let a = run(first.path(), Variant::Primary, &book).unwrap();
        let b = run(second.path(), Variant::Primary, &book).unwrap();

        for (fa, fb) in a.files.iter().zip(&b.files) {
            assert_eq!(fa.sha256, fb.sha256);
            assert_eq!(hash_file(&fa.path).unwrap(), fa.sha256);
        }
    }

    #[test]
    fn overwrites_existing_files() {
        let output_dir = tempdir().unwrap();
        let touch = output_dir.path().join("apple-touch-icon.png");
        fs::write(&touch, b"stale").unwrap();

        run(output_dir.path(), Variant::Primary, &FontBook::empty()).unwrap();

        assert_ne!(fs::read(&touch).unwrap(), b"stale");
    }

    #[test]
    fn touch_icon_is_flat_swatch() {
        let output_dir = tempdir().unwrap();

        run(output_dir.path(), Variant::Primary, &FontBook::empty()).unwrap();

        let touch = image::open(output_dir.path().join("apple-touch-icon.png"))
            .unwrap()
            .to_rgba8();
        assert!(touch.pixels().all(|p| p.0 == PRIMARY.background));
    }

    #[test]
    fn sampled_background_matches_constant() {
        let output_dir = tempdir().unwrap();

        run(output_dir.path(), Variant::Primary, &FontBook::system()).unwrap();

        let icon = image::open(output_dir.path().join("pwa-512x512.png"))
            .unwrap()
            .to_rgba8();
        assert_eq!(icon.get_pixel(2, 2).0, PRIMARY.background);
    }

    #[test]
    fn unwritable_output_dir_fails() {
        let root = tempdir().unwrap();
        let blocker = root.path().join("blocker");
        fs::write(&blocker, b"not a dir").unwrap();

        let result = run(&blocker.join("public"), Variant::Primary, &FontBook::empty());

        assert!(matches!(result, Err(IconError::OutputDir { .. })));
    }
}
