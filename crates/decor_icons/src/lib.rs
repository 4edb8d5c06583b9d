//! Icon catalog for the decor selection UI.
//!
//! Option records reference icons by [`IconName`]; the crate renders them either through the
//! Leptos [`Icon`] component or as static markup with [`render_svg`].

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod icon;

pub use icon::{render_svg, Icon, IconAttrs, IconName, IconSize};
