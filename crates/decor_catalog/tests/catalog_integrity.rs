use std::collections::HashSet;

use decor_catalog::{
    ai_models, building_types, color_palettes, exterior_styles, interior_styles, lookup,
    room_types, CatalogEntry, CatalogRecord, LookupError, OptionTable, PaletteSelection,
    StyleContext, StyleSelection,
};

fn assert_unique_labels_and_keys<T: CatalogEntry>(name: &str, entries: &[T]) {
    let mut labels = HashSet::new();
    let mut keys = HashSet::new();
    for entry in entries {
        assert!(!entry.label().trim().is_empty(), "{name}: blank label");
        assert!(labels.insert(entry.label()), "{name}: dup label {}", entry.label());
        if !entry.is_sentinel() {
            assert!(!entry.key().trim().is_empty(), "{name}: blank key");
        }
        assert!(keys.insert(entry.key()), "{name}: dup key {}", entry.key());
    }
}

#[test]
fn labels_and_keys_are_unique_per_table() {
    assert_unique_labels_and_keys("rooms", room_types());
    assert_unique_labels_and_keys("buildings", building_types());
    assert_unique_labels_and_keys("interior", interior_styles());
    assert_unique_labels_and_keys("exterior", exterior_styles());
    assert_unique_labels_and_keys("palettes", color_palettes());
    assert_unique_labels_and_keys("models", ai_models());
}

#[test]
fn palette_colors_are_hex() {
    for palette in color_palettes() {
        for color in palette.swatches() {
            let digits = color.as_str().strip_prefix('#').expect("leading #");
            assert!(matches!(digits.len(), 3 | 6), "{color}");
            assert!(digits.chars().all(|c| c.is_ascii_hexdigit()), "{color}");
        }
    }
}

#[test]
fn non_sentinel_records_carry_a_visual() {
    for option in room_types().iter().chain(building_types()) {
        assert!(option.icon().is_some(), "{}", option.label);
    }
    for style in interior_styles().iter().chain(exterior_styles()) {
        assert!(style.icon().is_some(), "{}", style.label);
    }
    for palette in color_palettes().iter().filter(|p| !p.is_sentinel()) {
        assert!(!palette.swatches().is_empty(), "{}", palette.name);
    }
}

#[test]
fn room_prompts_are_short_noun_phrases() {
    for room in room_types() {
        assert_eq!(room.prompt, room.prompt.to_lowercase(), "{}", room.label);
        assert!(room.prompt.split_whitespace().count() <= 3, "{}", room.label);
    }
}

#[test]
fn shared_style_vocabulary_matches_across_contexts() {
    for label in ["Mediterranean", "Gothic", "Ski Chalet"] {
        let interior = interior_styles().iter().find(|s| s.label == label);
        let exterior = exterior_styles().iter().find(|s| s.label == label);
        let (interior, exterior) = (interior.expect(label), exterior.expect(label));
        assert_eq!(interior.prompt, exterior.prompt);
    }
}

#[test]
fn catalog_lookup_scenarios() {
    match lookup(OptionTable::RoomTypes, "kitchen").expect("kitchen") {
        CatalogRecord::Room(room) => {
            assert!(room.label.contains("Kitchen"));
            assert!(room.icon().is_some());
        }
        other => panic!("unexpected record {other:?}"),
    }

    assert_eq!(
        decor_catalog::resolve_style(StyleContext::Interior, "custom"),
        Ok(StyleSelection::FreeText)
    );

    assert_eq!(
        decor_catalog::resolve_palette("surprise-me"),
        Ok(PaletteSelection::SurpriseMe)
    );
    match lookup(OptionTable::ColorPalettes, "surprise-me").expect("sentinel") {
        CatalogRecord::Palette(palette) => assert!(palette.colors.is_none()),
        other => panic!("unexpected record {other:?}"),
    }

    assert!(matches!(
        lookup(OptionTable::RoomTypes, "nonexistent-room"),
        Err(LookupError::NotFound { .. })
    ));
}

#[test]
fn tables_are_shared_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| room_types().as_ptr() as usize))
        .collect();
    let addrs: HashSet<usize> = handles
        .into_iter()
        .map(|handle| handle.join().expect("reader thread"))
        .collect();
    assert_eq!(addrs.len(), 1);
}
