//! Leptos option pickers over the decor catalog.
//!
//! Primitives render catalog tables as selectable cards in table order; [`DesignPicker`] wires
//! them to [`reduce_selection`], which validates every key against the catalog and routes the
//! `custom` and `surprise-me` sentinels to free-text entry and palette randomization.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod picker;
mod primitives;
mod selection;

pub use picker::DesignPicker;
pub use primitives::{
    CustomStyleField, ModelPicker, OptionCard, OptionGrid, PaletteCard, PaletteGrid,
    PaletteSwatches,
};
pub use selection::{
    reduce_selection, DesignMode, DesignSelection, PaletteChoice, SelectionAction,
    SelectionEffect, SelectionError, StyleChoice,
};

/// Convenience imports for hosts embedding the picker.
pub mod prelude {
    pub use crate::{
        reduce_selection, CustomStyleField, DesignMode, DesignPicker, DesignSelection,
        ModelPicker, OptionCard, OptionGrid, PaletteCard, PaletteChoice, PaletteGrid,
        PaletteSwatches, SelectionAction, SelectionEffect, SelectionError, StyleChoice,
    };
    pub use decor_icons::{Icon, IconName, IconSize};
}
