//! Selection state for the decor picker and the reducer that validates every change.
//!
//! The reducer is the only place that turns raw keys coming from the UI into catalog choices.
//! Sentinel keys never become ordinary selections: `custom` switches the style into free-text
//! mode and `surprise-me` stays unresolved until a drawn palette is recorded through
//! [`SelectionAction::ResolveSurprisePalette`].

use decor_catalog::{
    ai_model, building_type, color_palettes, find_option, resolve_palette, resolve_style,
    room_type, HexColor, LookupError, PaletteSelection, StyleContext, StyleSelection,
    CUSTOM_STYLE_PROMPT, SURPRISE_ME_PALETTE,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Whether the user is redesigning a room or a building.
pub enum DesignMode {
    /// Room interior; spaces come from the room-type table.
    #[default]
    Interior,
    /// Building exterior; spaces come from the building-type table.
    Exterior,
}

impl DesignMode {
    /// Stable token used for CSS hooks.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Interior => "interior",
            Self::Exterior => "exterior",
        }
    }

    /// Tab label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Interior => "Interior",
            Self::Exterior => "Exterior",
        }
    }

    /// Style table used in this mode.
    pub const fn style_context(self) -> StyleContext {
        match self {
            Self::Interior => StyleContext::Interior,
            Self::Exterior => StyleContext::Exterior,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
/// Chosen design style.
pub enum StyleChoice {
    /// Canned style identified by its prompt key.
    Preset {
        /// Prompt key of the style record.
        key: String,
    },
    /// Free-form style text entered by the user; empty until submitted.
    Custom {
        /// Submitted description.
        text: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
/// Chosen color palette.
pub enum PaletteChoice {
    /// Named palette identified by its prompt value.
    Named {
        /// Prompt value of the palette record.
        key: String,
    },
    /// Randomized palette; `drawn` holds the prompt value once a palette has been picked.
    SurpriseMe {
        /// Prompt value of the drawn palette.
        #[serde(default)]
        drawn: Option<String>,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Everything the user has picked so far.
pub struct DesignSelection {
    /// Interior or exterior flow.
    pub mode: DesignMode,
    /// Room or building prompt key, depending on `mode`.
    pub space: Option<String>,
    /// Style choice.
    pub style: Option<StyleChoice>,
    /// Palette choice.
    pub palette: Option<PaletteChoice>,
    /// Generation model identifier.
    pub model: Option<String>,
}

impl DesignSelection {
    /// Whether the style is in free-text mode.
    pub fn is_custom_style(&self) -> bool {
        matches!(self.style, Some(StyleChoice::Custom { .. }))
    }

    /// Key of the highlighted style card; `custom` while in free-text mode.
    pub fn style_key(&self) -> Option<&str> {
        match self.style.as_ref()? {
            StyleChoice::Preset { key } => Some(key),
            StyleChoice::Custom { .. } => Some(CUSTOM_STYLE_PROMPT),
        }
    }

    /// Key of the highlighted palette card.
    pub fn palette_key(&self) -> Option<&str> {
        match self.palette.as_ref()? {
            PaletteChoice::Named { key } => Some(key),
            PaletteChoice::SurpriseMe { .. } => Some(SURPRISE_ME_PALETTE),
        }
    }

    /// Room or building noun phrase.
    pub fn space_prompt(&self) -> Option<&str> {
        self.space.as_deref()
    }

    /// Style fragment to forward: the preset prompt, or submitted custom text.
    pub fn style_fragment(&self) -> Option<&str> {
        match self.style.as_ref()? {
            StyleChoice::Preset { key } => Some(key),
            StyleChoice::Custom { text } if !text.is_empty() => Some(text),
            StyleChoice::Custom { .. } => None,
        }
    }

    /// Palette value to forward. A surprise-me choice yields `None` until a palette is drawn.
    pub fn palette_value(&self) -> Option<&str> {
        match self.palette.as_ref()? {
            PaletteChoice::Named { key } => Some(key),
            PaletteChoice::SurpriseMe { drawn } => drawn.as_deref(),
        }
    }

    /// Whether surprise-me is selected and still waiting for a drawn palette.
    pub fn awaits_palette_draw(&self) -> bool {
        matches!(self.palette, Some(PaletteChoice::SurpriseMe { drawn: None }))
    }

    /// Swatches of the named or drawn palette.
    pub fn palette_colors(&self) -> &'static [HexColor] {
        self.palette_value()
            .and_then(|key| find_option(color_palettes(), key))
            .map(|palette| palette.swatches())
            .unwrap_or(&[])
    }

    /// Generation model identifier.
    pub fn model_id(&self) -> Option<&str> {
        self.model.as_deref()
    }

    /// Whether every field needed for a generation request is filled in.
    pub fn is_complete(&self) -> bool {
        self.space.is_some()
            && self.style_fragment().is_some()
            && self.palette_value().is_some()
            && self.model.is_some()
    }

    /// Replays every field through [`reduce_selection`] on an empty selection in the same mode.
    ///
    /// Fields whose keys no longer resolve are dropped and reported. Sentinel keys stored as
    /// ordinary choices come back as their sentinel branch.
    pub fn revalidated(&self) -> (Self, Vec<SelectionError>) {
        let mut actions = Vec::new();
        if let Some(space) = &self.space {
            actions.push(vec![SelectionAction::SelectSpace(space.clone())]);
        }
        match &self.style {
            Some(StyleChoice::Preset { key }) => {
                actions.push(vec![SelectionAction::SelectStyle(key.clone())]);
            }
            Some(StyleChoice::Custom { text }) => {
                let mut steps = vec![SelectionAction::SelectStyle(CUSTOM_STYLE_PROMPT.into())];
                if !text.trim().is_empty() {
                    steps.push(SelectionAction::SetCustomStyleText(text.clone()));
                }
                actions.push(steps);
            }
            None => {}
        }
        match &self.palette {
            Some(PaletteChoice::Named { key }) => {
                actions.push(vec![SelectionAction::SelectPalette(key.clone())]);
            }
            Some(PaletteChoice::SurpriseMe { drawn }) => {
                let mut steps = vec![SelectionAction::SelectPalette(SURPRISE_ME_PALETTE.into())];
                if let Some(drawn) = drawn {
                    steps.push(SelectionAction::ResolveSurprisePalette(drawn.clone()));
                }
                actions.push(steps);
            }
            None => {}
        }
        if let Some(model) = &self.model {
            actions.push(vec![SelectionAction::SelectModel(model.clone())]);
        }

        let mut selection = Self {
            mode: self.mode,
            ..Self::default()
        };
        let mut errors = Vec::new();
        for steps in actions {
            for action in steps {
                if let Err(err) = reduce_selection(&mut selection, action) {
                    errors.push(err);
                    break;
                }
            }
        }
        (selection, errors)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// User intents dispatched by the picker.
pub enum SelectionAction {
    /// Switch between interior and exterior flows.
    SetMode(DesignMode),
    /// Pick a room (interior) or building (exterior) by prompt key.
    SelectSpace(String),
    /// Pick a style by prompt key, including the `custom` sentinel.
    SelectStyle(String),
    /// Submit free-form style text.
    SetCustomStyleText(String),
    /// Pick a palette by prompt value, including the `surprise-me` sentinel.
    SelectPalette(String),
    /// Record the named palette drawn for a pending surprise-me choice.
    ResolveSurprisePalette(String),
    /// Pick a generation model by identifier.
    SelectModel(String),
    /// Reset everything except the mode.
    Clear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Follow-up work the host should perform after a selection change.
pub enum SelectionEffect {
    /// Show the free-text style input.
    OpenCustomStyleInput,
    /// Hide the free-text style input.
    CloseCustomStyleInput,
    /// Draw a named palette and dispatch [`SelectionAction::ResolveSurprisePalette`].
    RandomizePalette,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Rejected selection actions.
pub enum SelectionError {
    /// The key is not present in the relevant table.
    #[error(transparent)]
    Lookup(#[from] LookupError),
    /// Submitted custom text was blank.
    #[error("custom style text is empty")]
    EmptyCustomText,
    /// Custom text was submitted without choosing the custom style first.
    #[error("custom style input is not active")]
    CustomStyleInactive,
    /// A drawn palette was submitted while surprise-me was not selected.
    #[error("surprise-me palette is not selected")]
    SurprisePaletteInactive,
    /// The drawn palette was the `surprise-me` sentinel itself.
    #[error("`surprise-me` cannot be drawn as a palette")]
    SentinelPaletteDrawn,
}

/// Applies a [`SelectionAction`] and collects the effects the host should run.
///
/// # Errors
///
/// Returns [`SelectionError::Lookup`] for keys missing from the catalog, the custom-text
/// errors when free text is blank or not expected, and the surprise-me errors when a drawn
/// palette arrives out of turn or is the sentinel. `selection` is unchanged on error.
pub fn reduce_selection(
    selection: &mut DesignSelection,
    action: SelectionAction,
) -> Result<Vec<SelectionEffect>, SelectionError> {
    let mut effects = Vec::new();
    match action {
        SelectionAction::SetMode(mode) => {
            if mode != selection.mode {
                if selection.is_custom_style() {
                    effects.push(SelectionEffect::CloseCustomStyleInput);
                }
                selection.mode = mode;
                selection.space = None;
                selection.style = None;
            }
        }
        SelectionAction::SelectSpace(key) => {
            let prompt = match selection.mode {
                DesignMode::Interior => &room_type(&key)?.prompt,
                DesignMode::Exterior => &building_type(&key)?.prompt,
            };
            selection.space = Some(prompt.clone());
        }
        SelectionAction::SelectStyle(key) => {
            match resolve_style(selection.mode.style_context(), &key)? {
                StyleSelection::Preset(style) => {
                    if selection.is_custom_style() {
                        effects.push(SelectionEffect::CloseCustomStyleInput);
                    }
                    selection.style = Some(StyleChoice::Preset {
                        key: style.prompt.clone(),
                    });
                }
                StyleSelection::FreeText => {
                    if !selection.is_custom_style() {
                        selection.style = Some(StyleChoice::Custom {
                            text: String::new(),
                        });
                        effects.push(SelectionEffect::OpenCustomStyleInput);
                    }
                }
            }
        }
        SelectionAction::SetCustomStyleText(text) => {
            if !selection.is_custom_style() {
                return Err(SelectionError::CustomStyleInactive);
            }
            let text = text.trim();
            if text.is_empty() {
                return Err(SelectionError::EmptyCustomText);
            }
            selection.style = Some(StyleChoice::Custom {
                text: text.to_string(),
            });
        }
        SelectionAction::SelectPalette(key) => match resolve_palette(&key)? {
            PaletteSelection::Swatches(palette) => {
                selection.palette = Some(PaletteChoice::Named {
                    key: palette.prompt_value.clone(),
                });
            }
            PaletteSelection::SurpriseMe => {
                selection.palette = Some(PaletteChoice::SurpriseMe { drawn: None });
                effects.push(SelectionEffect::RandomizePalette);
            }
        },
        SelectionAction::ResolveSurprisePalette(key) => {
            if !matches!(selection.palette, Some(PaletteChoice::SurpriseMe { .. })) {
                return Err(SelectionError::SurprisePaletteInactive);
            }
            match resolve_palette(&key)? {
                PaletteSelection::Swatches(palette) => {
                    selection.palette = Some(PaletteChoice::SurpriseMe {
                        drawn: Some(palette.prompt_value.clone()),
                    });
                }
                PaletteSelection::SurpriseMe => return Err(SelectionError::SentinelPaletteDrawn),
            }
        }
        SelectionAction::SelectModel(id) => {
            selection.model = Some(ai_model(&id)?.id.clone());
        }
        SelectionAction::Clear => {
            if selection.is_custom_style() {
                effects.push(SelectionEffect::CloseCustomStyleInput);
            }
            *selection = DesignSelection {
                mode: selection.mode,
                ..DesignSelection::default()
            };
        }
    }
    Ok(effects)
}
