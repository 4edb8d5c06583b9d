//! Integrity checks for option tables.
//!
//! `build.rs` rejects malformed manifests before the crate compiles; these checks re-verify the
//! parsed tables and are reusable for tables assembled elsewhere.

use std::collections::HashSet;

use crate::{
    ai_models, building_types, color_palettes, exterior_styles, interior_styles, room_types,
    CatalogEntry, CatalogError, OptionTable, PaletteOption, CUSTOM_STYLE_PROMPT,
    SURPRISE_ME_PALETTE,
};

fn allows_sentinel(table: OptionTable, key: &str) -> bool {
    match key {
        CUSTOM_STYLE_PROMPT => matches!(
            table,
            OptionTable::InteriorStyles | OptionTable::ExteriorStyles
        ),
        SURPRISE_ME_PALETTE => table == OptionTable::ColorPalettes,
        _ => true,
    }
}

/// Checks label and key integrity for one table.
///
/// # Errors
///
/// Returns the first violation: blank or duplicate labels, blank or duplicate keys, a sentinel
/// outside its table.
pub fn validate_table<T: CatalogEntry>(
    table: OptionTable,
    entries: &[T],
) -> Result<(), CatalogError> {
    let mut labels = HashSet::new();
    let mut keys = HashSet::new();

    for (index, entry) in entries.iter().enumerate() {
        let label = entry.label();
        if label.trim().is_empty() {
            return Err(CatalogError::EmptyLabel { table, index });
        }
        if !labels.insert(label) {
            return Err(CatalogError::DuplicateLabel {
                table,
                label: label.to_string(),
            });
        }

        let key = entry.key();
        if !allows_sentinel(table, key) {
            return Err(CatalogError::MisplacedSentinel {
                table,
                key: key.to_string(),
            });
        }
        if !entry.is_sentinel() && key.trim().is_empty() {
            return Err(CatalogError::EmptyKey {
                table,
                label: label.to_string(),
            });
        }
        if !keys.insert(key) {
            return Err(CatalogError::DuplicateKey {
                table,
                key: key.to_string(),
            });
        }
    }

    Ok(())
}

/// Checks palette-specific rules on top of [`validate_table`].
///
/// # Errors
///
/// Returns [`CatalogError::InvalidSwatches`] when a named palette has no colors or the
/// surprise-me palette declares some. Swatch syntax is already enforced by [`crate::HexColor`].
pub fn validate_palettes(palettes: &[PaletteOption]) -> Result<(), CatalogError> {
    validate_table(OptionTable::ColorPalettes, palettes)?;
    for palette in palettes {
        let colors = palette.colors.as_deref();
        let swatches_ok = match colors {
            Some(colors) => !palette.is_surprise_me() && !colors.is_empty(),
            None => palette.is_surprise_me(),
        };
        if !swatches_ok {
            return Err(CatalogError::InvalidSwatches {
                table: OptionTable::ColorPalettes,
                label: palette.name.clone(),
            });
        }
    }
    Ok(())
}

/// Validates every built-in table.
///
/// # Errors
///
/// Returns the first violation found, in [`OptionTable::ALL`] order.
pub fn validate_catalog() -> Result<(), CatalogError> {
    validate_table(OptionTable::RoomTypes, room_types())?;
    validate_table(OptionTable::BuildingTypes, building_types())?;
    validate_table(OptionTable::InteriorStyles, interior_styles())?;
    validate_table(OptionTable::ExteriorStyles, exterior_styles())?;
    validate_palettes(color_palettes())?;
    validate_table(OptionTable::AiModels, ai_models())
}

#[cfg(test)]
mod tests {
    use decor_icons::IconName;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{AiModelOption, HexColor, SpaceOption, StyleOption};

    fn space(label: &str, prompt: &str) -> SpaceOption {
        SpaceOption {
            label: label.to_string(),
            prompt: prompt.to_string(),
            icon: IconName::House,
        }
    }

    fn palette(name: &str, value: &str, colors: Option<&[&str]>) -> PaletteOption {
        PaletteOption {
            name: name.to_string(),
            prompt_value: value.to_string(),
            colors: colors.map(|colors| {
                colors
                    .iter()
                    .map(|c| HexColor::parse(*c).expect("test color"))
                    .collect()
            }),
        }
    }

    #[test]
    fn builtin_catalog_is_valid() {
        assert_eq!(validate_catalog(), Ok(()));
    }

    #[test]
    fn duplicate_labels_are_rejected() {
        let rooms = [space("Kitchen", "kitchen"), space("Kitchen", "galley kitchen")];
        assert_eq!(
            validate_table(OptionTable::RoomTypes, &rooms),
            Err(CatalogError::DuplicateLabel {
                table: OptionTable::RoomTypes,
                label: "Kitchen".to_string(),
            })
        );
    }

    #[test]
    fn duplicate_keys_are_rejected() {
        let rooms = [space("Kitchen", "kitchen"), space("Galley", "kitchen")];
        assert_eq!(
            validate_table(OptionTable::RoomTypes, &rooms),
            Err(CatalogError::DuplicateKey {
                table: OptionTable::RoomTypes,
                key: "kitchen".to_string(),
            })
        );
    }

    #[test]
    fn blank_label_and_key_are_rejected() {
        assert_eq!(
            validate_table(OptionTable::BuildingTypes, &[space(" ", "villa")]),
            Err(CatalogError::EmptyLabel {
                table: OptionTable::BuildingTypes,
                index: 0,
            })
        );
        let models = [AiModelOption {
            name: "Blank".to_string(),
            id: String::new(),
        }];
        assert_eq!(
            validate_table(OptionTable::AiModels, &models),
            Err(CatalogError::EmptyKey {
                table: OptionTable::AiModels,
                label: "Blank".to_string(),
            })
        );
    }

    #[test]
    fn custom_sentinel_only_in_style_tables() {
        assert_eq!(
            validate_table(OptionTable::RoomTypes, &[space("Custom", "custom")]),
            Err(CatalogError::MisplacedSentinel {
                table: OptionTable::RoomTypes,
                key: "custom".to_string(),
            })
        );
        let styles = [StyleOption {
            label: "Custom".to_string(),
            prompt: "custom".to_string(),
            icon: IconName::Pencil,
        }];
        assert_eq!(validate_table(OptionTable::ExteriorStyles, &styles), Ok(()));
    }

    #[test]
    fn palette_swatch_rules() {
        let ok = [
            palette("Surprise Me", "surprise-me", None),
            palette("Mono", "black and white", Some(&["#000", "#FFFFFF"])),
        ];
        assert_eq!(validate_palettes(&ok), Ok(()));

        let empty = [palette("Empty", "nothing", Some(&[]))];
        assert_eq!(
            validate_palettes(&empty),
            Err(CatalogError::InvalidSwatches {
                table: OptionTable::ColorPalettes,
                label: "Empty".to_string(),
            })
        );

        let colored_sentinel = [palette("Surprise Me", "surprise-me", Some(&["#fff"]))];
        assert!(matches!(
            validate_palettes(&colored_sentinel),
            Err(CatalogError::InvalidSwatches { .. })
        ));
    }
}
