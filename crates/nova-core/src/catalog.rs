//! Fixed product catalog: features and technical specifications.
//!
//! Values are rebuilt on every call; changing them is a code change.

use crate::model::{Feature, Spec};

const FEATURES: [(&str, &str, &str); 6] = [
    (
        "🎵",
        "Hi-Res Audio",
        "Experience studio-quality sound with high-resolution audio support",
    ),
    (
        "🔇",
        "Active Noise Cancellation",
        "Block out the world with advanced ANC technology",
    ),
    (
        "⚡",
        "40H Battery Life",
        "All-day listening with up to 40 hours of playtime",
    ),
    (
        "🎤",
        "Crystal Clear Calls",
        "AI-powered noise reduction for perfect call quality",
    ),
    (
        "☁️",
        "Cloud Comfort",
        "Premium memory foam cushions for all-day comfort",
    ),
    (
        "🌈",
        "Spatial Audio",
        "Immersive 3D audio with head tracking technology",
    ),
];

const SPECS: [(&str, &[&str]); 4] = [
    (
        "Audio",
        &[
            "Frequency Response: 20Hz - 20kHz",
            "Impedance: 32 Ohm",
            "Driver Size: 40mm",
            "THD: <0.1%",
        ],
    ),
    (
        "Battery",
        &[
            "Playtime: 40 hours (ANC off)",
            "Playtime: 30 hours (ANC on)",
            "Charging: USB-C Fast Charge",
            "Charge Time: 2 hours (full)",
            "Quick Charge: 10 min = 5 hours",
        ],
    ),
    (
        "Connectivity",
        &[
            "Bluetooth 5.3",
            "Range: 10 meters",
            "Multipoint Connection",
            "Codecs: AAC, SBC, aptX HD",
        ],
    ),
    (
        "Physical",
        &[
            "Weight: 250g",
            "Foldable Design",
            "Colors: Black, Silver, Rose Gold",
            "Materials: Aluminum, Leather",
        ],
    ),
];

/// Product features, in display order.
pub fn features() -> Vec<Feature> {
    FEATURES
        .iter()
        .map(|(icon, title, description)| Feature {
            icon: icon.to_string(),
            title: title.to_string(),
            description: description.to_string(),
        })
        .collect()
}

/// Technical specifications grouped by category, in display order.
pub fn specs() -> Vec<Spec> {
    SPECS
        .iter()
        .map(|(category, items)| Spec {
            category: category.to_string(),
            items: items.iter().map(|item| item.to_string()).collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn features_are_deterministic() {
        assert_eq!(features(), features());
    }

    #[test]
    fn specs_are_deterministic() {
        assert_eq!(specs(), specs());
    }

    #[test]
    fn features_in_display_order() {
        let titles: Vec<_> = features().into_iter().map(|f| f.title).collect();
        assert_eq!(
            titles,
            [
                "Hi-Res Audio",
                "Active Noise Cancellation",
                "40H Battery Life",
                "Crystal Clear Calls",
                "Cloud Comfort",
                "Spatial Audio",
            ]
        );
    }

    #[test]
    fn specs_categories_and_item_counts() {
        let specs = specs();
        let summary: Vec<_> = specs
            .iter()
            .map(|s| (s.category.as_str(), s.items.len()))
            .collect();
        assert_eq!(
            summary,
            [("Audio", 4), ("Battery", 5), ("Connectivity", 4), ("Physical", 4)]
        );
    }

    #[test]
    fn no_empty_catalog_text() {
        for feature in features() {
            assert!(!feature.icon.is_empty());
            assert!(!feature.title.is_empty());
            assert!(!feature.description.is_empty());
        }
        for spec in specs() {
            assert!(spec.items.iter().all(|item| !item.is_empty()));
        }
    }
}
