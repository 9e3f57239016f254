//! The fixed set of files written by `generate`.

/// Directory written to when none is given
pub const DEFAULT_OUTPUT_DIR: &str = "public";

/// Encoding of an output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Png,
    /// Multi-resolution icon holding one square entry per size
    Ico { sizes: &'static [u32] },
}

/// One generated file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconTarget {
    /// File name inside the output directory
    pub file: &'static str,
    /// Edge length of the rendered canvas
    pub size: u32,
    pub format: Format,
    /// Draw the label, or only the background and accent
    pub with_label: bool,
    /// Listed in the web manifest `icons` array
    pub in_manifest: bool,
    /// Web manifest `purpose`, when not the default
    pub purpose: Option<&'static str>,
}

pub const PWA_192: IconTarget = IconTarget {
    file: "pwa-192x192.png",
    size: 192,
    format: Format::Png,
    with_label: true,
    in_manifest: true,
    purpose: None,
};

pub const PWA_512: IconTarget = IconTarget {
    file: "pwa-512x512.png",
    size: 512,
    format: Format::Png,
    with_label: true,
    in_manifest: true,
    purpose: None,
};

pub const PWA_MASKABLE: IconTarget = IconTarget {
    file: "pwa-maskable.png",
    size: 1024,
    format: Format::Png,
    with_label: true,
    in_manifest: true,
    purpose: Some("any maskable"),
};

pub const APPLE_TOUCH: IconTarget = IconTarget {
    file: "apple-touch-icon.png",
    size: 180,
    format: Format::Png,
    with_label: false,
    in_manifest: false,
    purpose: None,
};

pub const FAVICON: IconTarget = IconTarget {
    file: "favicon.ico",
    size: 32,
    format: Format::Ico { sizes: &[16, 32] },
    with_label: true,
    in_manifest: false,
    purpose: None,
};

/// All targets, in write order.
pub const ALL_TARGETS: &[IconTarget] = &[PWA_192, PWA_512, PWA_MASKABLE, APPLE_TOUCH, FAVICON];
