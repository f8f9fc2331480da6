use super::{FilterBarState, FilterControl, FilterControlKind};
use crate::shared::icons::icon;
use crate::shared::notifications::use_toasts;
use contracts::shared::markup;
use leptos::prelude::*;

/// Filter bar with "Apply" and "Clear" actions.
///
/// Inputs are bound to `state`; "Clear" resets every control in the bar.
#[component]
pub fn FilterBar(
    /// Controls of this bar
    state: RwSignal<FilterBarState>,
) -> impl IntoView {
    let toasts = use_toasts();
    let is_expanded = RwSignal::new(true);

    let active_count = move || state.with(|s| s.active_count());
    let control_count = state.with_untracked(|s| s.controls.len());

    let on_apply = move |_| {
        state.with_untracked(|s| {
            s.apply(&toasts);
        });
    };
    let on_clear = move |_| state.update(|s| s.clear());

    view! {
        <div class=markup::CLASS_FILTERS_BAR>
            <div
                class="filters-bar__header"
                on:click=move |_| is_expanded.update(|e| *e = !*e)
            >
                {icon("filter")}
                <span class="filters-bar__title">"Filters"</span>
                {move || {
                    let count = active_count();
                    (count > 0).then(|| view! { <span class="badge badge--primary">{count}</span> })
                }}
            </div>
            <div class=move || {
                if is_expanded.get() {
                    "filters-bar__body filters-bar__body--expanded"
                } else {
                    "filters-bar__body filters-bar__body--collapsed"
                }
            }>
                {(0..control_count)
                    .map(|idx| view! { <FilterControlInput state=state idx=idx /> })
                    .collect_view()}
                <button class="btn-secondary" on:click=on_apply>"Apply Filters"</button>
                <button class="btn-link" on:click=on_clear>"Clear All"</button>
            </div>
        </div>
    }
}

#[component]
fn FilterControlInput(state: RwSignal<FilterBarState>, idx: usize) -> impl IntoView {
    let Some(control) = state.with_untracked(|s| s.controls.get(idx).cloned()) else {
        return view! { <></> }.into_any();
    };
    let FilterControl { name, label, kind } = control;
    let input_id = format!("filter-{name}");

    match kind {
        FilterControlKind::Text { .. } => {
            let value = move || match state.with(|s| s.controls[idx].kind.clone()) {
                FilterControlKind::Text { value } => value,
                FilterControlKind::Select { .. } => String::new(),
            };
            view! {
                <div class="form__group">
                    <label class="form__label" for=input_id.clone()>{label}</label>
                    <input
                        id=input_id
                        class="form__input"
                        type="text"
                        prop:value=value
                        on:input=move |ev| {
                            let text = event_target_value(&ev);
                            if let Some(Err(e)) = state.try_update(|s| s.set_text(&name, &text)) {
                                log::warn!("{e}");
                            }
                        }
                    />
                </div>
            }
            .into_any()
        }
        FilterControlKind::Select { options, .. } => {
            let selected = move || match state.with(|s| s.controls[idx].kind.clone()) {
                FilterControlKind::Select { selected, .. } => selected.to_string(),
                FilterControlKind::Text { .. } => "0".to_string(),
            };
            view! {
                <div class="form__group">
                    <label class="form__label" for=input_id.clone()>{label}</label>
                    <select
                        id=input_id
                        class="form__select"
                        prop:value=selected
                        on:change=move |ev| {
                            let Ok(index) = event_target_value(&ev).parse::<usize>() else {
                                return;
                            };
                            if let Some(Err(e)) = state.try_update(|s| s.select_index(&name, index)) {
                                log::warn!("{e}");
                            }
                        }
                    >
                        {options
                            .into_iter()
                            .enumerate()
                            .map(|(i, option)| view! { <option value=i.to_string()>{option}</option> })
                            .collect_view()}
                    </select>
                </div>
            }
            .into_any()
        }
    }
}
