//! Line-icon catalog shared by every option table.
//!
//! Each [`IconName`] owns one fixed drawing on a 24px grid. Callers only choose presentation
//! (size, stroke, color, class hook, accessible label) through [`IconAttrs`]; the geometry
//! never changes.

use leptos::*;
use serde::{Deserialize, Serialize};

const VIEW_BOX: &str = "0 0 24 24";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Semantic icon identifiers referenced by catalog records.
pub enum IconName {
    /// Living-room sofa.
    Sofa,
    /// Bedroom bed.
    Bed,
    /// Kitchen cooking pot.
    CookingPot,
    /// Bathtub.
    Bath,
    /// Dining table with chairs.
    DiningTable,
    /// Office desk with monitor.
    Desk,
    /// Stacked toy blocks.
    Blocks,
    /// Clothes hanger.
    Hanger,
    /// Front-loading washing machine.
    WashingMachine,
    /// Entry door.
    Door,
    /// Dumbbell.
    Dumbbell,
    /// Staircase.
    Stairs,
    /// Game controller.
    Gamepad,
    /// Detached house.
    House,
    /// Apartment block.
    Apartment,
    /// Villa with portico.
    Villa,
    /// Cottage with chimney.
    Cottage,
    /// Row of townhouses.
    Townhouse,
    /// Office tower.
    OfficeTower,
    /// Log cabin.
    Cabin,
    /// Gambrel-roof barn.
    Barn,
    /// House above waves.
    BeachHouse,
    /// Sawtooth-roof warehouse.
    Warehouse,
    /// Armchair.
    Armchair,
    /// Plain square outline.
    Square,
    /// Pine tree.
    Pine,
    /// Factory with chimneys.
    Factory,
    /// Feather.
    Feather,
    /// Arc floor lamp.
    Lamp,
    /// Water waves.
    Wave,
    /// Torii gate.
    Torii,
    /// Sunburst fan.
    Sunburst,
    /// Sun.
    Sun,
    /// Pointed gothic arch.
    GothicArch,
    /// Snow-capped mountain.
    Mountain,
    /// Palm tree.
    Palm,
    /// Cut log end grain.
    Wood,
    /// Pencil.
    Pencil,
    /// Isometric cube.
    Cube,
    /// Classical columns.
    Columns,
    /// Hammer.
    Hammer,
    /// House with turret.
    Turret,
    /// Half-timbered facade.
    Timber,
    /// Shuffle arrows.
    Shuffle,
    /// Checkmark.
    Checkmark,
}

impl IconName {
    /// Every icon in declaration order.
    pub const ALL: [IconName; 45] = [
        Self::Sofa,
        Self::Bed,
        Self::CookingPot,
        Self::Bath,
        Self::DiningTable,
        Self::Desk,
        Self::Blocks,
        Self::Hanger,
        Self::WashingMachine,
        Self::Door,
        Self::Dumbbell,
        Self::Stairs,
        Self::Gamepad,
        Self::House,
        Self::Apartment,
        Self::Villa,
        Self::Cottage,
        Self::Townhouse,
        Self::OfficeTower,
        Self::Cabin,
        Self::Barn,
        Self::BeachHouse,
        Self::Warehouse,
        Self::Armchair,
        Self::Square,
        Self::Pine,
        Self::Factory,
        Self::Feather,
        Self::Lamp,
        Self::Wave,
        Self::Torii,
        Self::Sunburst,
        Self::Sun,
        Self::GothicArch,
        Self::Mountain,
        Self::Palm,
        Self::Wood,
        Self::Pencil,
        Self::Cube,
        Self::Columns,
        Self::Hammer,
        Self::Turret,
        Self::Timber,
        Self::Shuffle,
        Self::Checkmark,
    ];

    /// Stable token used in catalog manifests, CSS hooks, and debugging.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Sofa => "sofa",
            Self::Bed => "bed",
            Self::CookingPot => "cooking-pot",
            Self::Bath => "bath",
            Self::DiningTable => "dining-table",
            Self::Desk => "desk",
            Self::Blocks => "blocks",
            Self::Hanger => "hanger",
            Self::WashingMachine => "washing-machine",
            Self::Door => "door",
            Self::Dumbbell => "dumbbell",
            Self::Stairs => "stairs",
            Self::Gamepad => "gamepad",
            Self::House => "house",
            Self::Apartment => "apartment",
            Self::Villa => "villa",
            Self::Cottage => "cottage",
            Self::Townhouse => "townhouse",
            Self::OfficeTower => "office-tower",
            Self::Cabin => "cabin",
            Self::Barn => "barn",
            Self::BeachHouse => "beach-house",
            Self::Warehouse => "warehouse",
            Self::Armchair => "armchair",
            Self::Square => "square",
            Self::Pine => "pine",
            Self::Factory => "factory",
            Self::Feather => "feather",
            Self::Lamp => "lamp",
            Self::Wave => "wave",
            Self::Torii => "torii",
            Self::Sunburst => "sunburst",
            Self::Sun => "sun",
            Self::GothicArch => "gothic-arch",
            Self::Mountain => "mountain",
            Self::Palm => "palm",
            Self::Wood => "wood",
            Self::Pencil => "pencil",
            Self::Cube => "cube",
            Self::Columns => "columns",
            Self::Hammer => "hammer",
            Self::Turret => "turret",
            Self::Timber => "timber",
            Self::Shuffle => "shuffle",
            Self::Checkmark => "checkmark",
        }
    }

    /// Resolves a manifest token back to its icon.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|icon| icon.token() == token)
    }

    /// Raw SVG body markup for the icon, drawn for a `0 0 24 24` stroke canvas.
    pub const fn svg_body(self) -> &'static str {
        match self {
            Self::Sofa => {
                r#"<path d="M4 11V8a2 2 0 0 1 2-2h12a2 2 0 0 1 2 2v3"/><path d="M2 13a2 2 0 0 1 4 0v2h12v-2a2 2 0 0 1 4 0v4a1 1 0 0 1-1 1H3a1 1 0 0 1-1-1v-4Z"/><path d="M5 18v2M19 18v2"/>"#
            }
            Self::Bed => {
                r#"<path d="M3 5v15M3 16h18M21 20v-7a3 3 0 0 0-3-3h-8v6"/><circle cx="6.5" cy="11.5" r="1.5"/>"#
            }
            Self::CookingPot => {
                r#"<path d="M2 11h20"/><path d="M4 11v6a3 3 0 0 0 3 3h10a3 3 0 0 0 3-3v-6"/><path d="M9 8a3 3 0 0 1 6 0"/><path d="M12 5V3"/>"#
            }
            Self::Bath => {
                r#"<path d="M3 12h18v3a4 4 0 0 1-4 4H7a4 4 0 0 1-4-4v-3Z"/><path d="M6 12V5a2 2 0 0 1 3.5-1.3"/><path d="M7 19l-1 2M17 19l1 2"/>"#
            }
            Self::DiningTable => {
                r#"<path d="M3 9h18M6 9v10M18 9v10"/><path d="M9 13h6"/><path d="M10 9V5M14 9V5"/>"#
            }
            Self::Desk => {
                r#"<rect x="6" y="3" width="12" height="8" rx="1"/><path d="M12 11v3M2 14h20M4 14v7M20 14v7"/><path d="M14 17h4"/>"#
            }
            Self::Blocks => {
                r#"<rect x="3" y="13" width="8" height="8" rx="1"/><rect x="13" y="13" width="8" height="8" rx="1"/><rect x="8" y="3" width="8" height="8" rx="1"/>"#
            }
            Self::Hanger => {
                r#"<path d="M12 7a2 2 0 1 0-2-2"/><path d="M12 7v2L2.6 15.3A1.5 1.5 0 0 0 3.5 18h17a1.5 1.5 0 0 0 .9-2.7L12 9"/>"#
            }
            Self::WashingMachine => {
                r#"<rect x="4" y="2" width="16" height="20" rx="2"/><path d="M4 7h16M8 4.5h1M12 4.5h1"/><circle cx="12" cy="14" r="4"/>"#
            }
            Self::Door => {
                r#"<path d="M5 21V4a1 1 0 0 1 1-1h12a1 1 0 0 1 1 1v17"/><path d="M2 21h20"/><circle cx="15" cy="12" r="0.8"/>"#
            }
            Self::Dumbbell => {
                r#"<path d="M7 8v8M17 8v8M4 10v4M20 10v4"/><path d="M7 12h10"/><path d="M2 12h2M20 12h2"/>"#
            }
            Self::Stairs => {
                r#"<path d="M2 21h6v-5h5v-5h5V6h4"/><path d="M2 21h20"/>"#
            }
            Self::Gamepad => {
                r#"<path d="M6 8h12a4 4 0 0 1 4 4.5l-.6 4a2.5 2.5 0 0 1-4.4 1.2L15 16H9l-2 1.7a2.5 2.5 0 0 1-4.4-1.2l-.6-4A4 4 0 0 1 6 8Z"/><path d="M6 12h4M8 10v4"/><circle cx="16" cy="11" r="0.8"/><circle cx="18" cy="13" r="0.8"/>"#
            }
            Self::House => {
                r#"<path d="M3 10.5 12 3l9 7.5"/><path d="M5 9v12h14V9"/><path d="M10 21v-6h4v6"/>"#
            }
            Self::Apartment => {
                r#"<rect x="4" y="2" width="16" height="20" rx="1"/><path d="M8 6h2M14 6h2M8 10h2M14 10h2M8 14h2M14 14h2"/><path d="M10 22v-4h4v4"/>"#
            }
            Self::Villa => {
                r#"<path d="M2 9 12 4l10 5"/><path d="M3 9h18M3 21h18"/><path d="M6 9v12M10 9v12M14 9v12M18 9v12"/>"#
            }
            Self::Cottage => {
                r#"<path d="M3 11 12 4l9 7"/><path d="M5 9.5V21h14V9.5"/><path d="M16 6.5V3h2v5"/><path d="M9 21v-5h3v5"/><rect x="14" y="13" width="3" height="3"/>"#
            }
            Self::Townhouse => {
                r#"<path d="M2 21V9l4-4 4 4v12"/><path d="M10 21V9l4-4 4 4v12"/><path d="M18 21V11l2-2 2 2v10"/><path d="M1 21h22M5 21v-3h2v3M13 21v-3h2v3"/>"#
            }
            Self::OfficeTower => {
                r#"<path d="M6 22V4l8-2v20"/><path d="M14 8h4v14"/><path d="M9 7h2M9 11h2M9 15h2M9 19h2"/><path d="M3 22h18"/>"#
            }
            Self::Cabin => {
                r#"<path d="M2 12 12 4l10 8"/><path d="M5 10v11h14V10"/><path d="M5 13h14M5 16h14M5 19h14"/><path d="M10 21v-5h4v5"/>"#
            }
            Self::Barn => {
                r#"<path d="M3 21V10l3-5h12l3 5v11"/><path d="M3 10h18"/><path d="M8 21v-7h8v7"/><path d="m8 14 8 7M16 14l-8 7"/>"#
            }
            Self::BeachHouse => {
                r#"<path d="M5 10 12 4l7 6"/><path d="M7 8.5V15h10V8.5"/><path d="M11 15v-3h2v3"/><path d="M2 19c2 0 2-1.5 4-1.5s2 1.5 4 1.5 2-1.5 4-1.5 2 1.5 4 1.5 2-1.5 4-1.5"/>"#
            }
            Self::Warehouse => {
                r#"<path d="M2 21V10l5-4v4l5-4v4l5-4v4l5-4v15"/><path d="M1 21h22"/><path d="M8 21v-6h8v6M8 18h8"/>"#
            }
            Self::Armchair => {
                r#"<path d="M6 11V7a3 3 0 0 1 3-3h6a3 3 0 0 1 3 3v4"/><path d="M3 13a2 2 0 0 1 4 0v2h10v-2a2 2 0 0 1 4 0v5H3v-5Z"/><path d="M5 18v2M19 18v2"/>"#
            }
            Self::Square => r#"<rect x="4" y="4" width="16" height="16" rx="1"/>"#,
            Self::Pine => {
                r#"<path d="M12 2 7 9h3l-4 6h4l-5 5h14l-5-5h4l-4-6h3l-5-7Z"/><path d="M12 20v2"/>"#
            }
            Self::Factory => {
                r#"<path d="M2 21V11l6-4v4l6-4v4l6-4v14H2Z"/><path d="M17 7V3h3v4"/><path d="M6 17h2M11 17h2M16 17h2"/>"#
            }
            Self::Feather => {
                r#"<path d="M20.2 3.8a6 6 0 0 0-8.5 0L5 10.5V19h8.5l6.7-6.7a6 6 0 0 0 0-8.5Z"/><path d="M16 8 2 22M17.5 15H9"/>"#
            }
            Self::Lamp => {
                r#"<path d="M6 21h8M10 21V9a6 6 0 0 1 11-3"/><path d="M17 6a4 4 0 0 0 4 4 4 4 0 0 0 1-3.9"/>"#
            }
            Self::Wave => {
                r#"<path d="M2 7c2 0 2-2 4-2s2 2 4 2 2-2 4-2 2 2 4 2 2-2 4-2"/><path d="M2 13c2 0 2-2 4-2s2 2 4 2 2-2 4-2 2 2 4 2 2-2 4-2"/><path d="M2 19c2 0 2-2 4-2s2 2 4 2 2-2 4-2 2 2 4 2 2-2 4-2"/>"#
            }
            Self::Torii => {
                r#"<path d="M2 5c3 1 17 1 20 0"/><path d="M4 9h16"/><path d="M6 5.8V21M18 5.8V21M12 6v3"/>"#
            }
            Self::Sunburst => {
                r#"<path d="M2 20h20"/><path d="M12 20 12 6M12 20 5 9M12 20 19 9M12 20 3 15M12 20l9-5"/><path d="M7 20a5 5 0 0 1 10 0"/>"#
            }
            Self::Sun => {
                r#"<circle cx="12" cy="12" r="4"/><path d="M12 2v2M12 20v2M4.9 4.9l1.4 1.4M17.7 17.7l1.4 1.4M2 12h2M20 12h2M4.9 19.1l1.4-1.4M17.7 6.3l1.4-1.4"/>"#
            }
            Self::GothicArch => {
                r#"<path d="M5 22V11c0-4 3-7 7-9 4 2 7 5 7 9v11"/><path d="M9 22v-9c0-2 1.3-3.6 3-4.6 1.7 1 3 2.6 3 4.6v9"/><path d="M3 22h18"/>"#
            }
            Self::Mountain => {
                r#"<path d="m2 20 7.5-13L14 14l2.5-4L22 20H2Z"/><path d="m7.2 11 2.3-1.5L11.8 11"/>"#
            }
            Self::Palm => {
                r#"<path d="M12 10c-.5 4-.5 8 1 12"/><path d="M12 10C10 6 6 5 3 7c3 0 6 1 9 3Z"/><path d="M12 10c2-4 6-5 9-3-3 0-6 1-9 3Z"/><path d="M12 10c-1-3-1-6 1-8 0 3 0 5-1 8Z"/><path d="M8 22h9"/>"#
            }
            Self::Wood => {
                r#"<ellipse cx="12" cy="12" rx="9" ry="9"/><ellipse cx="12" cy="12" rx="5.5" ry="5.5"/><circle cx="12" cy="12" r="2"/><path d="M12 3v3"/>"#
            }
            Self::Pencil => {
                r#"<path d="M17 3a2.8 2.8 0 0 1 4 4L7.5 20.5 2 22l1.5-5.5L17 3Z"/><path d="m15 5 4 4"/>"#
            }
            Self::Cube => {
                r#"<path d="M21 16V8a2 2 0 0 0-1-1.7l-7-4a2 2 0 0 0-2 0l-7 4A2 2 0 0 0 3 8v8a2 2 0 0 0 1 1.7l7 4a2 2 0 0 0 2 0l7-4a2 2 0 0 0 1-1.7Z"/><path d="M3.3 7 12 12l8.7-5M12 22V12"/>"#
            }
            Self::Columns => {
                r#"<path d="M2 8 12 3l10 5H2Z"/><path d="M5 8v11M9.5 8v11M14.5 8v11M19 8v11"/><path d="M3 19h18v2H3z"/>"#
            }
            Self::Hammer => {
                r#"<path d="m15 12-8.4 8.4a2 2 0 0 1-2.9-2.9L12 9"/><path d="m17.6 15 4.4-4.4-1.5-1.5-1.7.5-2.8-2.8.3-1.6A4.6 4.6 0 0 0 13.1 4L11 5.9l6.6 6.6"/>"#
            }
            Self::Turret => {
                r#"<path d="M2 22V12l6-5 6 5"/><path d="M14 22V8l3-5 3 5v14"/><path d="M1 22h22M6 22v-4h4v4"/><path d="M16 11h2"/>"#
            }
            Self::Timber => {
                r#"<path d="M3 10 12 3l9 7"/><rect x="5" y="10" width="14" height="11"/><path d="M12 10v11M5 15.5h14M5 10l7 5.5M19 10l-7 5.5"/>"#
            }
            Self::Shuffle => {
                r#"<path d="M2 18h3.5a4 4 0 0 0 3.3-1.8l6.4-8.4A4 4 0 0 1 18.5 6H22"/><path d="m18 2 4 4-4 4"/><path d="M2 6h3.5a4 4 0 0 1 3 1.4"/><path d="M22 18h-3.5a4 4 0 0 1-3-1.4"/><path d="m18 14 4 4-4 4"/>"#
            }
            Self::Checkmark => r#"<path d="M20 6 9 17l-5-5"/>"#,
        }
    }
}

impl std::fmt::Display for IconName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
/// Standardized icon sizes.
pub enum IconSize {
    /// 16px icon for dense lists.
    Sm,
    /// 24px icon for option chips.
    #[default]
    Md,
    /// 32px icon for option cards.
    Lg,
    /// 48px icon for hero selections.
    Xl,
}

impl IconSize {
    /// Pixel size for the icon.
    pub const fn px(self) -> u16 {
        match self {
            Self::Sm => 16,
            Self::Md => 24,
            Self::Lg => 32,
            Self::Xl => 48,
        }
    }

    /// Stable size token used for CSS hooks and debugging.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Presentation attributes passed through to the rendered `<svg>` root.
pub struct IconAttrs {
    /// Rendered box size.
    pub size: IconSize,
    /// Stroke width in viewBox units.
    pub stroke_width: f32,
    /// Stroke paint.
    pub stroke: String,
    /// Fill paint.
    pub fill: String,
    /// Extra class names appended after `ui-icon`.
    pub class: Option<String>,
    /// Accessible label; icons without one are decorative.
    pub aria_label: Option<String>,
}

impl Default for IconAttrs {
    fn default() -> Self {
        Self {
            size: IconSize::default(),
            stroke_width: 1.5,
            stroke: "currentColor".to_string(),
            fill: "none".to_string(),
            class: None,
            aria_label: None,
        }
    }
}

impl IconAttrs {
    /// Returns attrs with the given size.
    pub fn with_size(mut self, size: IconSize) -> Self {
        self.size = size;
        self
    }

    /// Returns attrs with the given stroke width.
    pub fn with_stroke_width(mut self, stroke_width: f32) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    /// Returns attrs with the given stroke paint.
    pub fn with_stroke(mut self, stroke: impl Into<String>) -> Self {
        self.stroke = stroke.into();
        self
    }

    /// Returns attrs with the given fill paint.
    pub fn with_fill(mut self, fill: impl Into<String>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Returns attrs with an extra class hook.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Returns attrs exposing the icon to assistive technology under `label`.
    pub fn with_aria_label(mut self, label: impl Into<String>) -> Self {
        self.aria_label = Some(label.into());
        self
    }

    fn class_attr(&self) -> String {
        match self.class.as_deref() {
            Some(extra) if !extra.trim().is_empty() => format!("ui-icon {}", extra.trim()),
            _ => "ui-icon".to_string(),
        }
    }

    fn stroke_width_attr(&self) -> String {
        let width = if self.stroke_width.is_finite() && self.stroke_width > 0.0 {
            self.stroke_width
        } else {
            1.5
        };
        format!("{width}")
    }

    fn aria_label_attr(&self) -> Option<&str> {
        self.aria_label
            .as_deref()
            .map(str::trim)
            .filter(|label| !label.is_empty())
    }
}

/// Renders an icon as standalone SVG markup.
pub fn render_svg(icon: IconName, attrs: &IconAttrs) -> String {
    let px = attrs.size.px();
    let mut out = format!(
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{view_box}" width="{px}" height="{px}""#,
            r#" fill="{fill}" stroke="{stroke}" stroke-width="{stroke_width}""#,
            r#" stroke-linecap="round" stroke-linejoin="round" class="{class}""#,
            r#" data-icon="{token}" data-size="{size}" focusable="false""#,
        ),
        view_box = VIEW_BOX,
        px = px,
        fill = escape_attr(&attrs.fill),
        stroke = escape_attr(&attrs.stroke),
        stroke_width = attrs.stroke_width_attr(),
        class = escape_attr(&attrs.class_attr()),
        token = icon.token(),
        size = attrs.size.token(),
    );
    match attrs.aria_label_attr() {
        Some(label) => {
            out.push_str(r#" role="img" aria-label=""#);
            out.push_str(&escape_attr(label));
            out.push('"');
        }
        None => out.push_str(r#" aria-hidden="true""#),
    }
    out.push('>');
    out.push_str(icon.svg_body());
    out.push_str("</svg>");
    out
}

fn escape_attr(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[component]
/// Renders a catalog icon as inline SVG.
pub fn Icon(
    /// Semantic icon identifier.
    icon: IconName,
    /// Standardized icon size token.
    #[prop(default = IconSize::Md)]
    size: IconSize,
    /// Stroke width in viewBox units.
    #[prop(default = 1.5)]
    stroke_width: f32,
    /// Stroke paint; defaults to `currentColor`.
    #[prop(optional, into)]
    stroke: Option<String>,
    /// Fill paint; defaults to `none`.
    #[prop(optional, into)]
    fill: Option<String>,
    /// Extra class hook.
    #[prop(optional, into)]
    class: Option<String>,
    /// Accessible label. Omit for decorative icons.
    #[prop(optional, into)]
    aria_label: Option<String>,
) -> impl IntoView {
    let mut attrs = IconAttrs::default()
        .with_size(size)
        .with_stroke_width(stroke_width);
    if let Some(stroke) = stroke {
        attrs = attrs.with_stroke(stroke);
    }
    if let Some(fill) = fill {
        attrs = attrs.with_fill(fill);
    }
    attrs.class = class;
    attrs.aria_label = aria_label;

    let size_px = attrs.size.px().to_string();
    let label = attrs.aria_label_attr().map(str::to_string);
    let role = label.as_ref().map(|_| "img");
    let aria_hidden = if label.is_none() { Some("true") } else { None };

    view! {
        <svg
            class=attrs.class_attr()
            data-icon=icon.token()
            data-size=attrs.size.token()
            xmlns="http://www.w3.org/2000/svg"
            viewBox=VIEW_BOX
            width=size_px.clone()
            height=size_px
            fill=attrs.fill.clone()
            stroke=attrs.stroke.clone()
            stroke-width=attrs.stroke_width_attr()
            stroke-linecap="round"
            stroke-linejoin="round"
            focusable="false"
            role=role
            aria-label=label
            aria-hidden=aria_hidden
            inner_html=icon.svg_body()
        />
    }
}
