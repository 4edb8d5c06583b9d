//! Composed picker wiring catalog tables to the selection reducer.

#[cfg(not(target_arch = "wasm32"))]
use std::time::{SystemTime, UNIX_EPOCH};

use decor_catalog::{ai_models, building_types, color_palettes, draw_palette, room_types};
use leptos::*;
use serde_json::Value;

use crate::primitives::{bool_token, CustomStyleField, ModelPicker, OptionGrid, PaletteGrid};
use crate::selection::{
    reduce_selection, DesignMode, DesignSelection, SelectionAction, SelectionEffect, StyleChoice,
};

fn restore_selection(restored_state: Option<Value>) -> DesignSelection {
    let Some(raw) = restored_state else {
        return DesignSelection::default();
    };
    let stored = match serde_json::from_value::<DesignSelection>(raw) {
        Ok(selection) => selection,
        Err(err) => {
            leptos::logging::warn!("design selection restore failed: {err}");
            return DesignSelection::default();
        }
    };
    let (selection, errors) = stored.revalidated();
    for err in errors {
        leptos::logging::warn!("design selection restore dropped a field: {err}");
    }
    selection
}

fn random_seed() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        (js_sys::Math::random() * u32::MAX as f64) as u64
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .subsec_nanos() as u64
    }
}

fn draw_surprise_palette(selection: &mut DesignSelection, seed: u64) {
    let Some(palette) = draw_palette(seed) else {
        leptos::logging::warn!("no named palette available for surprise-me");
        return;
    };
    let action = SelectionAction::ResolveSurprisePalette(palette.prompt_value.clone());
    if let Err(err) = reduce_selection(selection, action) {
        leptos::logging::warn!("surprise-me palette draw rejected: {err}");
    }
}

fn custom_draft(selection: &DesignSelection) -> String {
    match &selection.style {
        Some(StyleChoice::Custom { text }) => text.clone(),
        _ => String::new(),
    }
}

#[component]
/// Full room/building, style, palette, and model picker.
pub fn DesignPicker(
    /// Previously persisted [`DesignSelection`] payload.
    #[prop(optional)]
    restored_state: Option<Value>,
    /// Fired with the new selection after every accepted change.
    #[prop(optional)]
    on_change: Option<Callback<DesignSelection>>,
    /// Seed source for surprise-me draws; the platform random source when unset.
    #[prop(optional)]
    palette_seed: Option<Callback<(), u64>>,
) -> impl IntoView {
    let next_seed = move || match palette_seed {
        Some(palette_seed) => palette_seed.call(()),
        None => random_seed(),
    };
    let mut initial = restore_selection(restored_state);
    if initial.awaits_palette_draw() {
        draw_surprise_palette(&mut initial, next_seed());
    }
    let draft = create_rw_signal(custom_draft(&initial));
    let selection = create_rw_signal(initial);

    let dispatch = move |action: SelectionAction| {
        let mut next = selection.get_untracked();
        match reduce_selection(&mut next, action) {
            Ok(effects) => {
                for effect in &effects {
                    match effect {
                        SelectionEffect::OpenCustomStyleInput => draft.set(String::new()),
                        SelectionEffect::CloseCustomStyleInput => {}
                        SelectionEffect::RandomizePalette => {
                            draw_surprise_palette(&mut next, next_seed());
                        }
                    }
                }
                selection.set(next.clone());
                if let Some(on_change) = on_change {
                    on_change.call(next);
                }
            }
            Err(err) => leptos::logging::warn!("design selection rejected: {err}"),
        }
    };

    let mode = Signal::derive(move || selection.with(|s| s.mode));
    let space_key = Signal::derive(move || selection.with(|s| s.space.clone()));
    let style_key = Signal::derive(move || selection.with(|s| s.style_key().map(str::to_string)));
    let palette_key =
        Signal::derive(move || selection.with(|s| s.palette_key().map(str::to_string)));
    let model_key = Signal::derive(move || selection.with(|s| s.model.clone()));
    let custom_open = Signal::derive(move || selection.with(DesignSelection::is_custom_style));
    let complete = Signal::derive(move || selection.with(DesignSelection::is_complete));

    let select_space = Callback::new(move |key: String| dispatch(SelectionAction::SelectSpace(key)));
    let select_style = Callback::new(move |key: String| dispatch(SelectionAction::SelectStyle(key)));
    let select_palette =
        Callback::new(move |key: String| dispatch(SelectionAction::SelectPalette(key)));
    let select_model = Callback::new(move |id: String| dispatch(SelectionAction::SelectModel(id)));
    let submit_custom =
        Callback::new(move |text: String| dispatch(SelectionAction::SetCustomStyleText(text)));

    let mode_tab = move |tab: DesignMode| {
        view! {
            <button
                type="button"
                class="ui-tab"
                role="tab"
                aria-selected=move || bool_token(mode.get() == tab)
                on:click=move |_| dispatch(SelectionAction::SetMode(tab))
            >
                {tab.label()}
            </button>
        }
    };

    view! {
        <div
            class="ui-design-picker"
            data-ui-primitive="true"
            data-ui-kind="design-picker"
            data-ui-mode=move || mode.get().token()
            data-ui-complete=move || bool_token(complete.get())
        >
            <div class="ui-design-picker__modes" role="tablist">
                {mode_tab(DesignMode::Interior)}
                {mode_tab(DesignMode::Exterior)}
            </div>
            {move || match mode.get() {
                DesignMode::Interior => {
                    view! {
                        <OptionGrid
                            entries=room_types()
                            selected=space_key
                            on_select=select_space
                            aria_label="Room type"
                        />
                    }
                        .into_view()
                }
                DesignMode::Exterior => {
                    view! {
                        <OptionGrid
                            entries=building_types()
                            selected=space_key
                            on_select=select_space
                            aria_label="Building type"
                        />
                    }
                        .into_view()
                }
            }}
            {move || {
                let styles = mode.get().style_context().styles();
                view! {
                    <OptionGrid
                        entries=styles
                        selected=style_key
                        on_select=select_style
                        aria_label="Design style"
                    />
                }
            }}
            <Show when=move || custom_open.get()>
                <CustomStyleField value=draft on_submit=submit_custom/>
            </Show>
            <PaletteGrid palettes=color_palettes() selected=palette_key on_select=select_palette/>
            <ModelPicker models=ai_models() selected=model_key on_select=select_model/>
            <button
                type="button"
                class="ui-button"
                data-ui-variant="quiet"
                on:click=move |_| dispatch(SelectionAction::Clear)
            >
                "Start over"
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::selection::PaletteChoice;

    #[test]
    fn restores_persisted_selection() {
        let restored = restore_selection(Some(json!({
            "mode": "exterior",
            "space": "villa",
            "style": { "kind": "custom", "text": "whitewashed cliffside" },
            "palette": { "kind": "surprise-me" },
            "model": null
        })));

        assert_eq!(restored.mode, DesignMode::Exterior);
        assert_eq!(restored.space_prompt(), Some("villa"));
        assert_eq!(restored.palette, Some(PaletteChoice::SurpriseMe { drawn: None }));
        assert_eq!(custom_draft(&restored), "whitewashed cliffside");
    }

    #[test]
    fn restored_unknown_keys_are_dropped() {
        let restored = restore_selection(Some(json!({
            "mode": "interior",
            "space": "nonexistent-room",
            "style": { "kind": "preset", "key": "not-a-style" },
            "palette": { "kind": "named", "key": "not-a-palette" },
            "model": "gpt-paint"
        })));

        assert_eq!(restored, DesignSelection::default());
        assert!(!restored.is_complete());
    }

    #[test]
    fn restored_building_in_interior_mode_is_dropped() {
        let restored = restore_selection(Some(json!({
            "mode": "interior",
            "space": "villa",
            "style": null,
            "palette": null,
            "model": "stability-ai/sdxl"
        })));

        assert_eq!(restored.space, None);
        assert_eq!(restored.model_id(), Some("stability-ai/sdxl"));
    }

    #[test]
    fn surprise_draw_records_a_named_palette() {
        let mut selection = DesignSelection::default();
        reduce_selection(
            &mut selection,
            SelectionAction::SelectPalette("surprise-me".into()),
        )
        .expect("surprise-me");

        draw_surprise_palette(&mut selection, 0);

        let expected = &color_palettes()[1];
        assert_eq!(selection.palette_key(), Some("surprise-me"));
        assert_eq!(selection.palette_value(), Some(expected.prompt_value.as_str()));
        assert!(!selection.awaits_palette_draw());
    }

    #[test]
    fn surprise_draw_without_pending_choice_leaves_selection_alone() {
        let mut selection = DesignSelection::default();
        draw_surprise_palette(&mut selection, 3);
        assert_eq!(selection, DesignSelection::default());
    }

    #[test]
    fn malformed_state_falls_back_to_default() {
        assert_eq!(
            restore_selection(Some(json!({ "mode": "underwater" }))),
            DesignSelection::default()
        );
        assert_eq!(restore_selection(None), DesignSelection::default());
    }
}
