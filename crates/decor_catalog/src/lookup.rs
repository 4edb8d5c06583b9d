//! Key-based lookup over the option tables.
//!
//! Lookups never assume the key exists: user-entered custom text is not a table key, so a miss
//! is reported as [`LookupError::NotFound`]. Style and palette resolution additionally branch on
//! the `custom` and `surprise-me` sentinels instead of handing the sentinel record back as an
//! ordinary hit.

use serde::{Deserialize, Serialize};

use crate::{
    ai_models, building_types, color_palettes, exterior_styles, interior_styles, room_types,
    AiModelOption, BuildingOption, CatalogEntry, LookupError, OptionTable, PaletteOption,
    RoomOption, StyleOption,
};

/// Returns the record in `table` whose key equals `key`.
pub fn find_option<'a, T: CatalogEntry>(table: &'a [T], key: &str) -> Option<&'a T> {
    table.iter().find(|entry| entry.key() == key)
}

fn find_in<T: CatalogEntry>(
    table: OptionTable,
    entries: &'static [T],
    key: &str,
) -> Result<&'static T, LookupError> {
    find_option(entries, key).ok_or_else(|| LookupError::NotFound {
        table,
        key: key.to_string(),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Record returned by table-name lookup.
pub enum CatalogRecord<'a> {
    /// Room type.
    Room(&'a RoomOption),
    /// Building type.
    Building(&'a BuildingOption),
    /// Interior or exterior style.
    Style(&'a StyleOption),
    /// Color palette.
    Palette(&'a PaletteOption),
    /// Generation model.
    Model(&'a AiModelOption),
}

impl CatalogRecord<'_> {
    /// Label of the wrapped record.
    pub fn label(&self) -> &str {
        match self {
            Self::Room(entry) | Self::Building(entry) => entry.label(),
            Self::Style(entry) => entry.label(),
            Self::Palette(entry) => entry.label(),
            Self::Model(entry) => entry.label(),
        }
    }

    /// Selection key of the wrapped record.
    pub fn key(&self) -> &str {
        match self {
            Self::Room(entry) | Self::Building(entry) => entry.key(),
            Self::Style(entry) => entry.key(),
            Self::Palette(entry) => entry.key(),
            Self::Model(entry) => entry.key(),
        }
    }
}

/// Looks up `key` in the table named by `table`.
///
/// # Errors
///
/// Returns [`LookupError::NotFound`] when the table has no record with that key.
pub fn lookup(table: OptionTable, key: &str) -> Result<CatalogRecord<'static>, LookupError> {
    match table {
        OptionTable::RoomTypes => find_in(table, room_types(), key).map(CatalogRecord::Room),
        OptionTable::BuildingTypes => {
            find_in(table, building_types(), key).map(CatalogRecord::Building)
        }
        OptionTable::InteriorStyles => {
            find_in(table, interior_styles(), key).map(CatalogRecord::Style)
        }
        OptionTable::ExteriorStyles => {
            find_in(table, exterior_styles(), key).map(CatalogRecord::Style)
        }
        OptionTable::ColorPalettes => {
            find_in(table, color_palettes(), key).map(CatalogRecord::Palette)
        }
        OptionTable::AiModels => find_in(table, ai_models(), key).map(CatalogRecord::Model),
    }
}

/// Looks up `key` in the table named by the token `table` (for example `"room-types"`).
///
/// # Errors
///
/// Returns [`LookupError::UnknownTable`] for an unrecognized table token and
/// [`LookupError::NotFound`] for a missing key.
pub fn lookup_by_name(table: &str, key: &str) -> Result<CatalogRecord<'static>, LookupError> {
    let table =
        OptionTable::from_token(table).ok_or_else(|| LookupError::UnknownTable(table.into()))?;
    lookup(table, key)
}

/// Returns the room type whose prompt is `key`.
///
/// # Errors
///
/// Returns [`LookupError::NotFound`] for an unknown key.
pub fn room_type(key: &str) -> Result<&'static RoomOption, LookupError> {
    find_in(OptionTable::RoomTypes, room_types(), key)
}

/// Returns the building type whose prompt is `key`.
///
/// # Errors
///
/// Returns [`LookupError::NotFound`] for an unknown key.
pub fn building_type(key: &str) -> Result<&'static BuildingOption, LookupError> {
    find_in(OptionTable::BuildingTypes, building_types(), key)
}

/// Returns the generation model with identifier `id`.
///
/// # Errors
///
/// Returns [`LookupError::NotFound`] for an unknown identifier.
pub fn ai_model(id: &str) -> Result<&'static AiModelOption, LookupError> {
    find_in(OptionTable::AiModels, ai_models(), id)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Which style table a selection draws from.
pub enum StyleContext {
    /// Interior redesign of a room.
    Interior,
    /// Exterior redesign of a building.
    Exterior,
}

impl StyleContext {
    /// Table backing this context.
    pub const fn table(self) -> OptionTable {
        match self {
            Self::Interior => OptionTable::InteriorStyles,
            Self::Exterior => OptionTable::ExteriorStyles,
        }
    }

    /// Style records for this context.
    pub fn styles(self) -> &'static [StyleOption] {
        match self {
            Self::Interior => interior_styles(),
            Self::Exterior => exterior_styles(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Outcome of resolving a style key.
pub enum StyleSelection<'a> {
    /// A canned style whose prompt fragment can be used directly.
    Preset(&'a StyleOption),
    /// The `custom` sentinel: collect free-form text from the user.
    FreeText,
}

/// Resolves a style key, branching on the `custom` sentinel.
///
/// # Errors
///
/// Returns [`LookupError::NotFound`] when the context's table has no such key.
pub fn resolve_style(
    context: StyleContext,
    key: &str,
) -> Result<StyleSelection<'static>, LookupError> {
    let style = find_in(context.table(), context.styles(), key)?;
    if style.is_custom() {
        Ok(StyleSelection::FreeText)
    } else {
        Ok(StyleSelection::Preset(style))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Outcome of resolving a palette key.
pub enum PaletteSelection<'a> {
    /// A named palette with swatches.
    Swatches(&'a PaletteOption),
    /// The `surprise-me` sentinel: pick a palette at random downstream.
    SurpriseMe,
}

/// Resolves a palette key, branching on the `surprise-me` sentinel.
///
/// # Errors
///
/// Returns [`LookupError::NotFound`] when no palette has that key.
pub fn resolve_palette(key: &str) -> Result<PaletteSelection<'static>, LookupError> {
    let palette = find_in(OptionTable::ColorPalettes, color_palettes(), key)?;
    if palette.is_surprise_me() {
        Ok(PaletteSelection::SurpriseMe)
    } else {
        Ok(PaletteSelection::Swatches(palette))
    }
}

/// Picks the named palette a `surprise-me` selection resolves to.
///
/// `seed` indexes the palettes that carry swatches, in table order, wrapping around. Returns
/// `None` only when the table has no named palettes.
pub fn draw_palette(seed: u64) -> Option<&'static PaletteOption> {
    let mut named = color_palettes()
        .iter()
        .filter(|palette| !palette.is_surprise_me());
    let count = named.clone().count() as u64;
    if count == 0 {
        return None;
    }
    named.nth((seed % count) as usize)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn kitchen_resolves_with_icon() {
        let kitchen = room_type("kitchen").expect("kitchen");
        assert!(kitchen.label.contains("Kitchen"));
        assert_eq!(kitchen.icon(), Some(decor_icons::IconName::CookingPot));
    }

    #[test]
    fn unknown_room_is_not_found() {
        assert_eq!(
            room_type("nonexistent-room"),
            Err(LookupError::NotFound {
                table: OptionTable::RoomTypes,
                key: "nonexistent-room".to_string(),
            })
        );
    }

    #[test]
    fn custom_style_branches_to_free_text() {
        assert_eq!(
            resolve_style(StyleContext::Interior, "custom"),
            Ok(StyleSelection::FreeText)
        );
        assert_eq!(
            resolve_style(StyleContext::Exterior, "custom"),
            Ok(StyleSelection::FreeText)
        );
    }

    #[test]
    fn free_text_is_not_a_style_key() {
        let err = resolve_style(StyleContext::Interior, "cozy reading nook with velvet")
            .expect_err("free text is not a key");
        assert!(matches!(
            err,
            LookupError::NotFound {
                table: OptionTable::InteriorStyles,
                ..
            }
        ));
    }

    #[test]
    fn preset_style_returns_record() {
        let key = &interior_styles()[0].prompt;
        match resolve_style(StyleContext::Interior, key).expect("first style") {
            StyleSelection::Preset(style) => assert_eq!(style.label, "Modern"),
            StyleSelection::FreeText => panic!("expected preset"),
        }
    }

    #[test]
    fn surprise_me_has_no_colors_and_branches() {
        let record = find_option(color_palettes(), "surprise-me").expect("sentinel record");
        assert_eq!(record.colors, None);
        assert_eq!(resolve_palette("surprise-me"), Ok(PaletteSelection::SurpriseMe));
    }

    #[test]
    fn named_palette_returns_swatches() {
        let key = &color_palettes()[1].prompt_value;
        match resolve_palette(key).expect("palette") {
            PaletteSelection::Swatches(palette) => assert!(!palette.swatches().is_empty()),
            PaletteSelection::SurpriseMe => panic!("expected swatches"),
        }
    }

    #[test]
    fn lookup_by_table_name() {
        let record = lookup_by_name("building-types", "villa").expect("villa");
        assert_eq!(record.label(), "Villa");
        assert_eq!(record.key(), "villa");
        assert_eq!(
            lookup_by_name("furniture", "villa"),
            Err(LookupError::UnknownTable("furniture".to_string()))
        );
    }

    #[test]
    fn model_lookup_uses_identifier() {
        let model = ai_model("stability-ai/sdxl").expect("sdxl");
        assert_eq!(model.name, "Stable Diffusion XL");
        assert!(ai_model("Stable Diffusion XL").is_err());
    }

    #[test]
    fn every_record_round_trips_to_itself() {
        for table in OptionTable::ALL {
            let keys: Vec<&str> = match table {
                OptionTable::RoomTypes => room_types().iter().map(|e| e.key()).collect(),
                OptionTable::BuildingTypes => building_types().iter().map(|e| e.key()).collect(),
                OptionTable::InteriorStyles => interior_styles().iter().map(|e| e.key()).collect(),
                OptionTable::ExteriorStyles => exterior_styles().iter().map(|e| e.key()).collect(),
                OptionTable::ColorPalettes => color_palettes().iter().map(|e| e.key()).collect(),
                OptionTable::AiModels => ai_models().iter().map(|e| e.key()).collect(),
            };
            for key in keys {
                let first = lookup(table, key).expect("present key");
                let again = lookup(table, first.key()).expect("round trip");
                assert_eq!(first, again);
                assert_eq!(first.key(), key);
            }
        }
    }

    #[test]
    fn round_trip_returns_identical_reference() {
        for room in room_types() {
            let found = room_type(&room.prompt).expect("room");
            assert!(std::ptr::eq(found, room));
        }
        for palette in color_palettes() {
            let found = find_option(color_palettes(), &palette.prompt_value).expect("palette");
            assert!(std::ptr::eq(found, palette));
        }
    }

    #[test]
    fn drawn_palette_is_never_the_sentinel() {
        let named = color_palettes().len() as u64 - 1;
        for seed in 0..named * 2 {
            let palette = draw_palette(seed).expect("named palette");
            assert!(!palette.is_surprise_me());
            assert!(!palette.swatches().is_empty());
        }
        assert_eq!(draw_palette(0), Some(&color_palettes()[1]));
        assert_eq!(draw_palette(named), draw_palette(0));
    }
}
