use crate::shared::data::sample::evaluation_forms;
use crate::shared::form_designer::{FormDesigner, FormSection};
use crate::shared::icons::icon;
use crate::shared::notifications::{use_toasts, ToastService};
use crate::shared::page::{PageCategory, PageFrame};
use contracts::shared::markup;
use leptos::prelude::*;
use thaw::*;

/// Evaluation form list on the left, the active form's sections on the right.
#[component]
pub fn EvaluationFormDesigner() -> impl IntoView {
    let toasts = use_toasts();
    let designer = RwSignal::new(FormDesigner::new(evaluation_forms()));

    let create_new_form = move |_| {
        designer.with_untracked(|d| {
            d.create_new_form(&toasts);
        });
    };

    let items = designer.with_untracked(|d| d.items.clone());

    view! {
        <PageFrame
            entity="a100_evaluation_form"
            category=PageCategory::Designer
            title="Evaluation Forms"
            actions=move || view! {
                <Button appearance=ButtonAppearance::Primary on_click=create_new_form>
                    {icon("plus")}
                    " Create New Form"
                </Button>
            }
        >
            <div class="form-designer">
                <ul class="form-designer__list">
                    {items
                        .into_iter()
                        .map(|item| {
                            let id = item.id.clone();
                            let id_for_click = item.id.clone();
                            let field_count: usize = item.sections.iter().map(|s| s.fields.len()).sum();
                            view! {
                                <li
                                    class=markup::CLASS_FORM_ITEM
                                    class:active=move || designer.with(|d| d.is_active(&id))
                                    on:click=move |_| {
                                        if let Some(Err(e)) = designer.try_update(|d| d.select(&id_for_click)) {
                                            log::warn!("{e}");
                                        }
                                    }
                                >
                                    <span class="form-item__name">{item.name}</span>
                                    <span class="form-item__meta">{format!("{field_count} fields")}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>

                <div class="form-designer__editor">
                    {move || match designer.with(|d| d.active_item().cloned()) {
                        None => view! {
                            <p class="form-designer__hint">"Select a form to edit its sections."</p>
                        }
                        .into_any(),
                        Some(item) => view! {
                            <form on:submit=move |ev| {
                                ev.prevent_default();
                                designer.with_untracked(|d| {
                                    d.submit(&toasts);
                                });
                            }>
                                <h2 class="form-designer__title">{item.name}</h2>
                                {item
                                    .sections
                                    .into_iter()
                                    .map(|section| view! {
                                        <SectionEditor section=section designer=designer toasts=toasts />
                                    })
                                    .collect_view()}
                                <div class="form-designer__footer">
                                    <button
                                        type="button"
                                        class="btn-secondary"
                                        on:click=move |_| {
                                            designer.with_untracked(|d| {
                                                d.add_section(&toasts);
                                            });
                                        }
                                    >
                                        {icon("plus")}
                                        " Add Section"
                                    </button>
                                    <button type="submit" class="btn-primary">"Save Form"</button>
                                </div>
                            </form>
                        }
                        .into_any(),
                    }}
                </div>
            </div>
        </PageFrame>
    }
}

#[component]
fn SectionEditor(
    section: FormSection,
    designer: RwSignal<FormDesigner>,
    toasts: ToastService,
) -> impl IntoView {
    let title = section.title.clone();

    view! {
        <fieldset class="form-section">
            <legend>{section.title}</legend>
            {section
                .fields
                .into_iter()
                .map(|field| {
                    let field_id = field.id.clone();
                    view! {
                        <div class="form-field">
                            <span class="form-field__label">{field.label}</span>
                            <span class="form-field__kind">{field.kind}</span>
                            <button
                                type="button"
                                class="btn-link"
                                title="Edit field"
                                on:click=move |_| {
                                    designer.with_untracked(|d| {
                                        d.edit_field(&field_id, &toasts);
                                    });
                                }
                            >
                                {icon("edit")}
                            </button>
                        </div>
                    }
                })
                .collect_view()}
            <button
                type="button"
                class="btn-link"
                on:click=move |_| {
                    designer.with_untracked(|d| {
                        d.add_field(&title, &toasts);
                    });
                }
            >
                {icon("plus")}
                " Add Field"
            </button>
        </fieldset>
    }
}
