//! Option-card primitives for rendering catalog tables.

use decor_catalog::{AiModelOption, CatalogEntry, HexColor, PaletteOption};
use decor_icons::{Icon, IconName, IconSize};
use leptos::*;

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

pub(crate) fn swatch_tone(color: &HexColor) -> &'static str {
    if color.is_light() {
        "light"
    } else {
        "dark"
    }
}

pub(crate) fn swatch_style(color: &HexColor) -> String {
    format!("background-color: {color}")
}

#[component]
/// Selectable card showing one catalog record.
pub fn OptionCard(
    /// Card label.
    #[prop(into)]
    label: String,
    /// Card icon, when the record has one.
    #[prop(default = None)]
    icon: Option<IconName>,
    /// Whether the card is the current selection.
    #[prop(optional, into)]
    selected: MaybeSignal<bool>,
    #[prop(optional)] layout_class: Option<&'static str>,
    /// Fired when the card is activated.
    on_select: Callback<()>,
) -> impl IntoView {
    let selected = Signal::derive(move || selected.get());

    view! {
        <button
            type="button"
            class=merge_layout_class("ui-option-card", layout_class)
            data-ui-primitive="true"
            data-ui-kind="option-card"
            data-ui-selected=move || bool_token(selected.get())
            aria-pressed=move || bool_token(selected.get())
            on:click=move |_| on_select.call(())
        >
            {icon.map(|icon| view! { <Icon icon=icon size=IconSize::Lg class="ui-option-card__icon"/> })}
            <span class="ui-option-card__label">{label}</span>
            <Show when=move || selected.get()>
                <Icon icon=IconName::Checkmark size=IconSize::Sm class="ui-option-card__check"/>
            </Show>
        </button>
    }
}

#[component]
/// Grid of [`OptionCard`]s for a room, building, or style table, in table order.
pub fn OptionGrid<T>(
    /// Records to render.
    entries: &'static [T],
    /// Key of the selected record.
    #[prop(into)]
    selected: Signal<Option<String>>,
    /// Fired with the activated record's key.
    on_select: Callback<String>,
    /// Accessible name of the group.
    #[prop(optional, into)]
    aria_label: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView
where
    T: CatalogEntry + 'static,
{
    let cards = entries
        .iter()
        .map(|entry| {
            let key = entry.key().to_string();
            let is_selected = {
                let key = key.clone();
                Signal::derive(move || {
                    selected.with(|current| current.as_deref() == Some(key.as_str()))
                })
            };
            view! {
                <OptionCard
                    label=entry.label().to_string()
                    icon=entry.icon()
                    selected=is_selected
                    on_select=Callback::new(move |_| on_select.call(key.clone()))
                />
            }
        })
        .collect_view();

    view! {
        <div
            class=merge_layout_class("ui-option-grid", layout_class)
            role="group"
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="option-grid"
        >
            {cards}
        </div>
    }
}

#[component]
/// Ordered swatch strip for a palette.
pub fn PaletteSwatches(
    /// Swatches in display order.
    colors: &'static [HexColor],
) -> impl IntoView {
    view! {
        <span class="ui-palette-swatches" data-ui-kind="palette-swatches" aria-hidden="true">
            {colors
                .iter()
                .map(|color| {
                    view! {
                        <span
                            class="ui-palette-swatch"
                            data-ui-tone=swatch_tone(color)
                            style=swatch_style(color)
                            title=color.to_string()
                        ></span>
                    }
                })
                .collect_view()}
        </span>
    }
}

#[component]
/// Selectable palette card; the surprise-me record shows a shuffle glyph instead of swatches.
pub fn PaletteCard(
    palette: &'static PaletteOption,
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    on_select: Callback<()>,
) -> impl IntoView {
    let selected = Signal::derive(move || selected.get());
    let preview = if palette.is_surprise_me() {
        view! { <Icon icon=IconName::Shuffle size=IconSize::Lg class="ui-palette-card__shuffle"/> }
            .into_view()
    } else {
        view! { <PaletteSwatches colors=palette.swatches()/> }.into_view()
    };

    view! {
        <button
            type="button"
            class="ui-palette-card"
            data-ui-primitive="true"
            data-ui-kind="palette-card"
            data-ui-sentinel=bool_token(palette.is_surprise_me())
            data-ui-selected=move || bool_token(selected.get())
            aria-pressed=move || bool_token(selected.get())
            on:click=move |_| on_select.call(())
        >
            {preview}
            <span class="ui-palette-card__label">{palette.name.clone()}</span>
        </button>
    }
}

#[component]
/// Palette cards in table order.
pub fn PaletteGrid(
    palettes: &'static [PaletteOption],
    #[prop(into)] selected: Signal<Option<String>>,
    /// Fired with the activated palette's prompt value.
    on_select: Callback<String>,
) -> impl IntoView {
    let cards = palettes
        .iter()
        .map(|palette| {
            let key = palette.prompt_value.clone();
            let is_selected = {
                let key = key.clone();
                Signal::derive(move || {
                    selected.with(|current| current.as_deref() == Some(key.as_str()))
                })
            };
            view! {
                <PaletteCard
                    palette=palette
                    selected=is_selected
                    on_select=Callback::new(move |_| on_select.call(key.clone()))
                />
            }
        })
        .collect_view();

    view! {
        <div
            class="ui-palette-grid"
            role="group"
            aria-label="Color palette"
            data-ui-primitive="true"
            data-ui-kind="palette-grid"
        >
            {cards}
        </div>
    }
}

#[component]
/// Drop-down of generation models.
pub fn ModelPicker(
    models: &'static [AiModelOption],
    #[prop(into)] selected: Signal<Option<String>>,
    /// Fired with the chosen model id.
    on_select: Callback<String>,
) -> impl IntoView {
    view! {
        <select
            class="ui-field"
            aria-label="Generation model"
            data-ui-primitive="true"
            data-ui-kind="select"
            prop:value=move || selected.get().unwrap_or_default()
            on:change=move |ev| {
                let id = event_target_value(&ev);
                if !id.is_empty() {
                    on_select.call(id);
                }
            }
        >
            <option value="" disabled=true>
                "Choose a model"
            </option>
            {models
                .iter()
                .map(|model| view! { <option value=model.id.clone()>{model.name.clone()}</option> })
                .collect_view()}
        </select>
    }
}

#[component]
/// Free-text style input shown after the custom style card is picked.
pub fn CustomStyleField(
    /// Draft text.
    value: RwSignal<String>,
    /// Fired with the draft when the user confirms.
    on_submit: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="ui-custom-style" data-ui-primitive="true" data-ui-kind="custom-style">
            <textarea
                class="ui-field"
                aria-label="Describe your style"
                placeholder="Describe the style you have in mind"
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            ></textarea>
            <button
                type="button"
                class="ui-button"
                disabled=move || value.with(|text| text.trim().is_empty())
                on:click=move |_| on_submit.call(value.get_untracked())
            >
                "Use this style"
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn layout_class_is_appended_when_present() {
        assert_eq!(merge_layout_class("ui-option-card", None), "ui-option-card");
        assert_eq!(merge_layout_class("ui-option-card", Some("")), "ui-option-card");
        assert_eq!(
            merge_layout_class("ui-option-card", Some("room-card")),
            "ui-option-card room-card"
        );
    }

    #[test]
    fn swatch_helpers_reflect_color() {
        let cream = HexColor::parse("#F5F0E6").expect("cream");
        let navy = HexColor::parse("#14213D").expect("navy");
        assert_eq!(swatch_tone(&cream), "light");
        assert_eq!(swatch_tone(&navy), "dark");
        assert_eq!(swatch_style(&navy), "background-color: #14213D");
    }

    #[test]
    fn bool_tokens() {
        assert_eq!(bool_token(true), "true");
        assert_eq!(bool_token(false), "false");
    }
}
