//! Markup contract shared by the page views and the controllers that read them.
//!
//! Class hooks and element ids used in views live here, as do the attribute
//! names that code reads back from the DOM. Attributes that are only ever
//! written (`data-tab`, `data-panel`, `data-param`) are spelled in the views,
//! since `view!` takes attribute names as literals.

/// Attribute on a table cell naming the transcript field it holds.
pub const ATTR_FIELD: &str = "data-field";

/// Attribute on a "view transcript" button identifying its row.
pub const ATTR_CALL: &str = "data-call";

pub const CLASS_TAB_BUTTON: &str = "tab-btn";
pub const CLASS_TAB_CONTENT: &str = "tab-content";

pub const CLASS_MODAL: &str = "modal";
pub const CLASS_MODAL_CONTENT: &str = "modal-content";
pub const CLASS_MODAL_CLOSE: &str = "modal-close";

pub const CLASS_SCORE_BADGE: &str = "score-badge";
pub const CLASS_SENTIMENT_BADGE: &str = "sentiment-badge";
pub const CLASS_VIEW_TRANSCRIPT: &str = "view-transcript";

pub const CLASS_FILTERS_BAR: &str = "filters-bar";
pub const CLASS_TOGGLE_SWITCH: &str = "toggle-switch";
pub const CLASS_RANGE_SLIDER: &str = "range-slider";
pub const CLASS_RANGE_VALUE: &str = "range-value";
pub const CLASS_FORM_ITEM: &str = "form-item";

/// Id of the transcript modal.
pub const TRANSCRIPT_MODAL_ID: &str = "transcriptModal";

pub const TARGET_CALL_ID: &str = "modalCallId";
pub const TARGET_DATE_TIME: &str = "modalDateTime";
pub const TARGET_AGENT: &str = "modalAgent";
pub const TARGET_CUSTOMER: &str = "modalCustomer";
pub const TARGET_DURATION: &str = "modalDuration";
pub const TARGET_SCORE: &str = "modalScore";
pub const TARGET_SENTIMENT: &str = "modalSentiment";

/// Id of the select-all checkbox governing the calls table.
pub const SELECT_ALL_ID: &str = "selectAll";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_back_attributes_are_data_attributes() {
        for attr in [ATTR_FIELD, ATTR_CALL] {
            assert!(attr.starts_with("data-"), "{attr}");
        }
    }

    #[test]
    fn test_transcript_targets_are_distinct() {
        let mut ids = vec![
            TRANSCRIPT_MODAL_ID,
            TARGET_CALL_ID,
            TARGET_DATE_TIME,
            TARGET_AGENT,
            TARGET_CUSTOMER,
            TARGET_DURATION,
            TARGET_SCORE,
            TARGET_SENTIMENT,
        ];
        let len = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), len);
    }
}
