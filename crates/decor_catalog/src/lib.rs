//! Static option catalog for the decor selection UI.
//!
//! Each table pairs a human-facing label and icon with the machine-facing string forwarded to
//! the image-generation service: room and building types, interior and exterior styles, color
//! palettes, and generation models. Tables are authored as TOML under `catalog/`, validated by
//! the build script, and exposed here as immutable process-wide slices in display order.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod error;
mod hex;
mod lookup;
mod model;
mod tables;
mod validate;

pub use error::{CatalogError, LookupError};
pub use lookup::{
    ai_model, building_type, draw_palette, find_option, lookup, lookup_by_name, resolve_palette,
    resolve_style, room_type, CatalogRecord, PaletteSelection, StyleContext, StyleSelection,
};
pub use model::{
    AiModelOption, BuildingOption, CatalogEntry, HexColor, PaletteOption, RoomOption,
    SpaceOption, StyleOption, CUSTOM_STYLE_PROMPT, SURPRISE_ME_PALETTE,
};
pub use tables::{
    ai_models, building_types, catalog_json, color_palettes, exterior_styles, interior_styles,
    room_types, OptionTable,
};
pub use validate::{validate_catalog, validate_palettes, validate_table};
