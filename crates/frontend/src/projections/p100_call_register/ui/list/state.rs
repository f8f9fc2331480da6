use crate::shared::controls::RowSelection;
use crate::shared::filters::{FilterBarState, FilterControl};
use contracts::shared::transcript::{CallRow, RowSource, TranscriptField};
use leptos::prelude::*;
use std::collections::BTreeSet;

/// Column order of the call table. Independent of the order the transcript
/// viewer reads fields in.
pub const COLUMNS: [TranscriptField; 7] = [
    TranscriptField::CallId,
    TranscriptField::Agent,
    TranscriptField::Customer,
    TranscriptField::Timestamp,
    TranscriptField::Duration,
    TranscriptField::Score,
    TranscriptField::Sentiment,
];

/// Filter controls for the call list: free-text search, agent, sentiment.
pub fn call_filters(rows: &[CallRow]) -> FilterBarState {
    let agents: BTreeSet<String> = rows
        .iter()
        .filter_map(|r| r.cell(TranscriptField::Agent))
        .map(|c| c.text)
        .collect();

    let mut agent_options = vec!["All agents"];
    agent_options.extend(agents.iter().map(String::as_str));

    FilterBarState::new(vec![
        FilterControl::text("search", "Search"),
        FilterControl::select("agent", "Agent", &agent_options),
        FilterControl::select(
            "sentiment",
            "Sentiment",
            &["All", "Positive", "Neutral", "Negative"],
        ),
    ])
}

pub fn create_filters(rows: &[CallRow]) -> RwSignal<FilterBarState> {
    RwSignal::new(call_filters(rows))
}

pub fn create_selection(rows: &[CallRow]) -> RwSignal<RowSelection> {
    RwSignal::new(RowSelection::new(rows.iter().map(|r| r.id.clone())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::sample::sample_calls;
    use crate::shared::filters::FilterControlKind;

    #[test]
    fn test_agent_options_are_distinct_and_sorted() {
        let filters = call_filters(&sample_calls());
        let agent = filters
            .controls
            .iter()
            .find(|c| c.name == "agent")
            .unwrap();
        match &agent.kind {
            FilterControlKind::Select { options, selected } => {
                assert_eq!(
                    options,
                    &vec!["All agents", "Jane Cooper", "Lena Fischer", "Omar Haddad"]
                );
                assert_eq!(*selected, 0);
            }
            other => panic!("unexpected control {other:?}"),
        }
        assert_eq!(filters.active_count(), 0);
    }

    #[test]
    fn test_columns_cover_every_transcript_field() {
        for field in TranscriptField::ALL {
            assert!(COLUMNS.contains(&field), "{field:?} has no column");
        }
    }
}
