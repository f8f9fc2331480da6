pub mod state;

use self::state::{create_filters, create_selection, COLUMNS};
use crate::shared::components::badge::ClassBadge;
use crate::shared::components::table_checkbox::TableCheckbox;
use crate::shared::controls::{RowSelection, SelectAllCheckbox};
use crate::shared::data::sample::sample_calls;
use crate::shared::filters::FilterBar;
use crate::shared::icons::icon;
use crate::shared::notifications::use_toasts;
use crate::shared::page::{PageCategory, PageFrame};
use crate::shared::stubs::invoke_stub;
use crate::shared::transcript::{use_transcript_viewer, TranscriptViewer};
use contracts::shared::actions::StubAction;
use contracts::shared::markup;
use contracts::shared::transcript::{CallRow, RowSource};
use leptos::prelude::*;
use thaw::*;

/// Evaluated calls with filters, row selection and transcript access.
#[component]
pub fn CallRegisterList() -> impl IntoView {
    let toasts = use_toasts();
    let viewer = use_transcript_viewer();

    let rows = sample_calls();
    let filters = create_filters(&rows);
    let selection = create_selection(&rows);

    let export_report = move |_| {
        invoke_stub(
            &toasts,
            StubAction::ExportReport {
                format: "PDF".to_string(),
            },
        );
    };

    let selected_label = move || {
        let n = selection.with(|s| s.checked_count());
        if n == 0 {
            String::new()
        } else {
            format!("{n} selected")
        }
    };

    view! {
        <PageFrame
            entity="p100_call_register"
            category=PageCategory::List
            title="Call Evaluations"
            actions=move || view! {
                <Button appearance=ButtonAppearance::Secondary on_click=export_report>
                    {icon("download")}
                    " Export"
                </Button>
            }
        >
            <FilterBar state=filters />

            <div class="table-wrapper">
                <span class="table__selection-info">{selected_label}</span>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th class="table__header-cell table__header-cell--checkbox">
                                <SelectAllCheckbox selection=selection />
                            </th>
                            {COLUMNS
                                .iter()
                                .map(|field| view! { <th class="table__header-cell">{field.label()}</th> })
                                .collect_view()}
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {rows
                            .into_iter()
                            .map(|row| view! { <CallRowView row=row selection=selection viewer=viewer /> })
                            .collect_view()}
                    </tbody>
                </table>
            </div>
        </PageFrame>
    }
}

#[component]
fn CallRowView(
    row: CallRow,
    selection: RwSignal<RowSelection>,
    viewer: TranscriptViewer,
) -> impl IntoView {
    let call_id = row.id.clone();

    view! {
        <tr class="table__row">
            <TableCheckbox selection=selection row_id=call_id.clone() />
            {COLUMNS
                .iter()
                .map(|field| {
                    let content = match row.cell(*field) {
                        Some(cell) => match cell.class {
                            Some(class) => view! { <ClassBadge class=class text=cell.text /> }.into_any(),
                            None => cell.text.into_any(),
                        },
                        None => ().into_any(),
                    };
                    view! {
                        <td class="table__cell" data-field=field.attr_value()>
                            {content}
                        </td>
                    }
                })
                .collect_view()}
            <td class="table__cell table__cell--actions">
                <button
                    class=markup::CLASS_VIEW_TRANSCRIPT
                    data-call=call_id
                    title="View transcript"
                    on:click=move |ev| viewer.view_from_event(&ev)
                >
                    {icon("eye")}
                </button>
            </td>
        </tr>
    }
}
