//! Built-in option tables generated from `catalog/*.toml` at build time.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::{AiModelOption, BuildingOption, PaletteOption, RoomOption, StyleOption};

include!(concat!(env!("OUT_DIR"), "/catalog_generated.rs"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Names of the option tables exposed by the catalog.
pub enum OptionTable {
    /// Interior room types.
    RoomTypes,
    /// Exterior building types.
    BuildingTypes,
    /// Interior design styles.
    InteriorStyles,
    /// Exterior architecture styles.
    ExteriorStyles,
    /// Color palettes.
    ColorPalettes,
    /// Image-generation models.
    AiModels,
}

impl OptionTable {
    /// Every table in catalog order.
    pub const ALL: [OptionTable; 6] = [
        Self::RoomTypes,
        Self::BuildingTypes,
        Self::InteriorStyles,
        Self::ExteriorStyles,
        Self::ColorPalettes,
        Self::AiModels,
    ];

    /// Stable token used in JSON exports and diagnostics.
    pub const fn token(self) -> &'static str {
        match self {
            Self::RoomTypes => "room-types",
            Self::BuildingTypes => "building-types",
            Self::InteriorStyles => "interior-styles",
            Self::ExteriorStyles => "exterior-styles",
            Self::ColorPalettes => "color-palettes",
            Self::AiModels => "ai-models",
        }
    }

    /// Resolves a table token.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|table| table.token() == token)
    }

    /// Number of records in the table.
    pub fn len(self) -> usize {
        let catalog = catalog();
        match self {
            Self::RoomTypes => catalog.room_types.len(),
            Self::BuildingTypes => catalog.building_types.len(),
            Self::InteriorStyles => catalog.interior_styles.len(),
            Self::ExteriorStyles => catalog.exterior_styles.len(),
            Self::ColorPalettes => catalog.color_palettes.len(),
            Self::AiModels => catalog.ai_models.len(),
        }
    }

    /// Whether the table has no records.
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Display for OptionTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Catalog {
    room_types: Vec<RoomOption>,
    building_types: Vec<BuildingOption>,
    interior_styles: Vec<StyleOption>,
    exterior_styles: Vec<StyleOption>,
    color_palettes: Vec<PaletteOption>,
    ai_models: Vec<AiModelOption>,
}

fn catalog() -> &'static Catalog {
    static CATALOG: OnceLock<Catalog> = OnceLock::new();
    CATALOG.get_or_init(|| {
        serde_json::from_str(CATALOG_JSON).expect("generated option catalog should parse")
    })
}

/// Returns the generated catalog JSON payload.
pub fn catalog_json() -> &'static str {
    CATALOG_JSON
}

/// Room types in display order.
pub fn room_types() -> &'static [RoomOption] {
    &catalog().room_types
}

/// Building types in display order.
pub fn building_types() -> &'static [BuildingOption] {
    &catalog().building_types
}

/// Interior styles in display order, ending with the custom sentinel.
pub fn interior_styles() -> &'static [StyleOption] {
    &catalog().interior_styles
}

/// Exterior styles in display order, ending with the custom sentinel.
pub fn exterior_styles() -> &'static [StyleOption] {
    &catalog().exterior_styles
}

/// Color palettes in display order, led by the surprise-me sentinel.
pub fn color_palettes() -> &'static [PaletteOption] {
    &catalog().color_palettes
}

/// Image-generation models in display order.
pub fn ai_models() -> &'static [AiModelOption] {
    &catalog().ai_models
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::CatalogEntry;

    #[test]
    fn tables_keep_manifest_order() {
        let rooms: Vec<&str> = room_types().iter().take(3).map(|r| r.label()).collect();
        assert_eq!(rooms, vec!["Living Room", "Bedroom", "Kitchen"]);
        assert_eq!(color_palettes()[0].prompt_value, "surprise-me");
        assert!(interior_styles().last().expect("styles").is_custom());
        assert!(exterior_styles().last().expect("styles").is_custom());
    }

    #[test]
    fn table_tokens_round_trip() {
        for table in OptionTable::ALL {
            assert_eq!(OptionTable::from_token(table.token()), Some(table));
            assert!(!table.is_empty(), "{table} is empty");
        }
        assert_eq!(OptionTable::from_token("furniture"), None);
    }

    #[test]
    fn generated_json_is_exposed_verbatim() {
        let value: serde_json::Value = serde_json::from_str(catalog_json()).expect("json");
        let rooms = value["roomTypes"].as_array().expect("roomTypes array");
        assert_eq!(rooms.len(), OptionTable::RoomTypes.len());
        assert_eq!(value["colorPalettes"][0].get("colors"), None);
        assert_eq!(value["aiModels"][0]["id"], "adirik/interior-design");
    }
}
