use serde::{Deserialize, Serialize};

use crate::icon::Variant;
use crate::render::hex;
use crate::targets::{ALL_TARGETS, Format};

/// One entry of the web app manifest `icons` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestIcon {
    pub src: String,
    pub sizes: String,
    #[serde(rename = "type")]
    pub mime: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
}

/// Manifest fields owned by the icon set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestIcons {
    pub theme_color: String,
    pub icons: Vec<ManifestIcon>,
}

pub fn build(variant: Variant) -> ManifestIcons {
    let icons = ALL_TARGETS
        .iter()
        .filter(|t| t.in_manifest)
        .map(|t| ManifestIcon {
            src: t.file.to_string(),
            sizes: format!("{}x{}", t.size, t.size),
            mime: match t.format {
                Format::Png => "image/png",
                Format::Ico { .. } => "image/x-icon",
            }
            .to_string(),
            purpose: t.purpose.map(|p| p.to_string()),
        })
        .collect();

    ManifestIcons {
        theme_color: hex(variant.style().background),
        icons,
    }
}

/// Pretty-printed JSON for `variant`.
pub fn run(variant: Variant) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&build(variant))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_three_pwa_icons() {
        let manifest = build(Variant::Primary);

        let srcs: Vec<&str> = manifest.icons.iter().map(|i| i.src.as_str()).collect();
        assert_eq!(srcs, vec!["pwa-192x192.png", "pwa-512x512.png", "pwa-maskable.png"]);
    }

    #[test]
    fn maskable_has_purpose() {
        let manifest = build(Variant::Primary);

        let maskable = manifest.icons.iter().find(|i| i.sizes == "1024x1024").unwrap();
        assert_eq!(maskable.purpose.as_deref(), Some("any maskable"));
        assert!(manifest.icons[0].purpose.is_none());
    }

    #[test]
    fn json_uses_type_key_and_skips_missing_purpose() {
        let json = run(Variant::Primary).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["icons"][0]["type"], "image/png");
        assert!(value["icons"][0].get("purpose").is_none());
        assert_eq!(value["theme_color"], "#22c55e");
    }

    #[test]
    fn round_trips_through_json() {
        let manifest = build(Variant::Alternate);
        let json = serde_json::to_string(&manifest).unwrap();

        let parsed: ManifestIcons = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, manifest);
    }
}
