//! Record types shared by every option table.

use decor_icons::IconName;
use serde::{Deserialize, Serialize};

use crate::hex::is_hex_color;
use crate::CatalogError;

/// Style key that asks the consuming UI for free-form text.
pub const CUSTOM_STYLE_PROMPT: &str = "custom";

/// Palette key that asks the consuming UI for a randomized palette.
pub const SURPRISE_ME_PALETTE: &str = "surprise-me";

/// Common view over catalog records used by lookup, validation, and list rendering.
pub trait CatalogEntry {
    /// Human-facing label.
    fn label(&self) -> &str;

    /// Machine-facing selection key (`prompt`, `promptValue`, or `id`).
    fn key(&self) -> &str;

    /// Icon shown next to the label, when the record has one.
    fn icon(&self) -> Option<IconName> {
        None
    }

    /// Whether the key is a sentinel that redirects the consuming flow.
    fn is_sentinel(&self) -> bool {
        false
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Selectable interior or exterior design style.
pub struct StyleOption {
    /// Display label.
    pub label: String,
    /// Prompt fragment, or [`CUSTOM_STYLE_PROMPT`].
    pub prompt: String,
    /// Card icon.
    pub icon: IconName,
}

impl StyleOption {
    /// Returns `true` for the free-text sentinel record.
    pub fn is_custom(&self) -> bool {
        self.prompt == CUSTOM_STYLE_PROMPT
    }
}

impl CatalogEntry for StyleOption {
    fn label(&self) -> &str {
        &self.label
    }

    fn key(&self) -> &str {
        &self.prompt
    }

    fn icon(&self) -> Option<IconName> {
        Some(self.icon)
    }

    fn is_sentinel(&self) -> bool {
        self.is_custom()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Selectable room or building type. `prompt` is a short noun phrase such as `"kitchen"`.
pub struct SpaceOption {
    /// Display label.
    pub label: String,
    /// Noun phrase forwarded to the generator.
    pub prompt: String,
    /// Card icon.
    pub icon: IconName,
}

/// Room type record.
pub type RoomOption = SpaceOption;

/// Building type record.
pub type BuildingOption = SpaceOption;

impl CatalogEntry for SpaceOption {
    fn label(&self) -> &str {
        &self.label
    }

    fn key(&self) -> &str {
        &self.prompt
    }

    fn icon(&self) -> Option<IconName> {
        Some(self.icon)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Selectable color palette.
pub struct PaletteOption {
    /// Display name.
    pub name: String,
    /// Palette description forwarded to the generator, or [`SURPRISE_ME_PALETTE`].
    pub prompt_value: String,
    /// Ordered swatches; absent on the surprise-me record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<HexColor>>,
}

impl PaletteOption {
    /// Returns `true` for the randomized-palette sentinel record.
    pub fn is_surprise_me(&self) -> bool {
        self.prompt_value == SURPRISE_ME_PALETTE
    }

    /// Swatches in display order; empty for the surprise-me record.
    pub fn swatches(&self) -> &[HexColor] {
        self.colors.as_deref().unwrap_or(&[])
    }
}

impl CatalogEntry for PaletteOption {
    fn label(&self) -> &str {
        &self.name
    }

    fn key(&self) -> &str {
        &self.prompt_value
    }

    fn is_sentinel(&self) -> bool {
        self.is_surprise_me()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Selectable image-generation backend.
pub struct AiModelOption {
    /// Display name.
    pub name: String,
    /// Identifier passed verbatim to the generation API.
    pub id: String,
}

impl CatalogEntry for AiModelOption {
    fn label(&self) -> &str {
        &self.name
    }

    fn key(&self) -> &str {
        &self.id
    }
}

/// Validated `#RGB` / `#RRGGBB` color string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(String);

impl HexColor {
    /// Returns a color when `raw` is `#` followed by 3 or 6 hex digits.
    pub fn parse(raw: impl Into<String>) -> Result<Self, CatalogError> {
        let raw = raw.into();
        if is_hex_color(&raw) {
            Ok(Self(raw))
        } else {
            Err(CatalogError::InvalidColor(raw))
        }
    }

    /// Returns the color exactly as authored.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Expands the color into 8-bit channels.
    pub fn rgb(&self) -> (u8, u8, u8) {
        let digits = &self.0[1..];
        let channel = |index: usize, width: usize| {
            let part = &digits[index * width..(index + 1) * width];
            let value = u8::from_str_radix(part, 16).unwrap_or(0);
            if width == 1 {
                value * 17
            } else {
                value
            }
        };
        let width = if digits.len() == 3 { 1 } else { 2 };
        (channel(0, width), channel(1, width), channel(2, width))
    }

    /// Whether dark foreground text reads better on this swatch (Rec. 709 luma).
    pub fn is_light(&self) -> bool {
        let (r, g, b) = self.rgb();
        let luma = 0.2126 * f32::from(r) + 0.7152 * f32::from(g) + 0.0722 * f32::from(b);
        luma >= 140.0
    }
}

impl TryFrom<String> for HexColor {
    type Error = CatalogError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<HexColor> for String {
    fn from(value: HexColor) -> Self {
        value.0
    }
}

impl std::fmt::Display for HexColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn hex_color_accepts_short_and_long_forms() {
        assert!(HexColor::parse("#fff").is_ok());
        assert!(HexColor::parse("#1B4F72").is_ok());
        for bad in ["fff", "#ffff", "#12345g", "", "#", "#1234567"] {
            assert_eq!(
                HexColor::parse(bad),
                Err(CatalogError::InvalidColor(bad.to_string()))
            );
        }
    }

    #[test]
    fn short_form_expands_channels() {
        let white = HexColor::parse("#FFF").expect("white");
        let teal = HexColor::parse("#0a8").expect("teal");
        assert_eq!(white.rgb(), (255, 255, 255));
        assert_eq!(teal.rgb(), (0, 170, 136));
        assert_eq!(
            HexColor::parse("#1B4F72").expect("navy").rgb(),
            (0x1B, 0x4F, 0x72)
        );
    }

    #[test]
    fn light_swatches_are_detected() {
        assert!(HexColor::parse("#F5F0E6").expect("cream").is_light());
        assert!(!HexColor::parse("#14213D").expect("navy").is_light());
        assert!(!HexColor::parse("#000").expect("black").is_light());
    }

    #[test]
    fn palette_serializes_with_prompt_value_field() {
        let palette = PaletteOption {
            name: "Surprise Me".to_string(),
            prompt_value: SURPRISE_ME_PALETTE.to_string(),
            colors: None,
        };
        let json = serde_json::to_value(&palette).expect("serialize palette");
        assert_eq!(
            json,
            serde_json::json!({ "name": "Surprise Me", "promptValue": "surprise-me" })
        );
        assert!(palette.is_surprise_me());
        assert!(palette.swatches().is_empty());
    }

    #[test]
    fn invalid_swatch_fails_deserialization() {
        let raw = r##"{ "name": "Bad", "promptValue": "bad", "colors": ["#zzz"] }"##;
        assert!(serde_json::from_str::<PaletteOption>(raw).is_err());
    }

    #[test]
    fn records_without_icon_fail_deserialization() {
        let raw = r#"{ "label": "Attic", "prompt": "attic" }"#;
        assert!(serde_json::from_str::<SpaceOption>(raw).is_err());
        assert!(serde_json::from_str::<StyleOption>(raw).is_err());

        let with_icon = r#"{ "label": "Attic", "prompt": "attic", "icon": "house" }"#;
        let attic = serde_json::from_str::<SpaceOption>(with_icon).expect("attic");
        assert_eq!(attic.icon(), Some(IconName::House));
    }
}
