use super::use_transcript_viewer;
use crate::layout::modal_service::Modal;
use crate::shared::notifications::use_toasts;
use crate::shared::stubs::invoke_stub;
use contracts::shared::actions::StubAction;
use contracts::shared::markup;
use contracts::shared::transcript::TranscriptField;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

/// Transcript modal. Its field elements carry the fixed target ids the
/// viewer writes into.
#[component]
pub fn TranscriptModal() -> impl IntoView {
    let viewer = use_transcript_viewer();
    let toasts = use_toasts();
    let targets = viewer.targets();

    let create_plan = move |_| {
        let form_data = targets.with_untracked(|t| {
            serde_json::json!({
                "call_id": t.text(markup::TARGET_CALL_ID),
                "agent": t.text(markup::TARGET_AGENT),
                "score": t.text(markup::TARGET_SCORE),
            })
        });
        invoke_stub(&toasts, StubAction::CreateTrainingPlan { form_data });
    };

    let plain_fields = [
        TranscriptField::CallId,
        TranscriptField::Timestamp,
        TranscriptField::Agent,
        TranscriptField::Customer,
        TranscriptField::Duration,
    ];

    view! {
        <Modal id=markup::TRANSCRIPT_MODAL_ID title="Call Transcript">
            <dl class="transcript-meta">
                {plain_fields
                    .into_iter()
                    .map(|field| {
                        let target = field.target_id();
                        view! {
                            <div class="transcript-meta__item">
                                <dt>{field.label()}</dt>
                                <dd id=target>{move || targets.with(|t| t.text(target).to_string())}</dd>
                            </div>
                        }
                    })
                    .collect_view()}
                <div class="transcript-meta__item">
                    <dt>{TranscriptField::Score.label()}</dt>
                    <dd>
                        <span
                            id=markup::TARGET_SCORE
                            class=move || targets.with(|t| t.score_class.clone())
                        >
                            {move || targets.with(|t| t.text(markup::TARGET_SCORE).to_string())}
                        </span>
                    </dd>
                </div>
                <div class="transcript-meta__item">
                    <dt>{TranscriptField::Sentiment.label()}</dt>
                    <dd>
                        <span
                            id=markup::TARGET_SENTIMENT
                            class=move || targets.with(|t| t.sentiment_class.clone())
                        >
                            {move || targets.with(|t| t.text(markup::TARGET_SENTIMENT).to_string())}
                        </span>
                    </dd>
                </div>
            </dl>
            <div class="transcript-body">
                <p class="transcript-body__placeholder">
                    "Transcript text is not available in this prototype."
                </p>
            </div>
            <div class="modal-footer">
                <Button appearance=ButtonAppearance::Primary on_click=create_plan>
                    "Create Training Plan"
                </Button>
            </div>
        </Modal>
    }
}
