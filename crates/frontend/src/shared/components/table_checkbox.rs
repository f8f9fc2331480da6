use crate::shared::controls::RowSelection;
use leptos::prelude::*;

/// Ячейка таблицы с чекбоксом строки
///
/// Рендерит <td> с чекбоксом, привязанным к `RowSelection` по `row_id`.
/// Клик на чекбокс не вызывает клик на строку (stop_propagation).
#[component]
pub fn TableCheckbox(
    selection: RwSignal<RowSelection>,
    #[prop(into)] row_id: String,
) -> impl IntoView {
    let id_for_checked = row_id.clone();

    view! {
        <td
            class="table__cell table__cell--checkbox"
            on:click=|e| e.stop_propagation()
        >
            <input
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || selection.with(|s| s.is_checked(&id_for_checked))
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    if let Some(Err(e)) = selection.try_update(|s| s.set_row(&row_id, checked)) {
                        log::warn!("{e}");
                    }
                }
            />
        </td>
    }
}
