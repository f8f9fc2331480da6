//! Live table row as a `RowSource`.

use contracts::shared::error::UiError;
use contracts::shared::markup;
use contracts::shared::transcript::{CellValue, RowSource, TranscriptField};
use wasm_bindgen::JsCast;
use web_sys::Element;

pub struct DomRow {
    row: Element,
    label: String,
}

impl DomRow {
    /// Row enclosing the event target. The row label is the clicked
    /// button's `data-call`, falling back to the row's own `data-call`.
    pub fn from_event(ev: &leptos::ev::MouseEvent) -> Result<Self, UiError> {
        let target = ev
            .target()
            .and_then(|t| t.dyn_into::<Element>().ok())
            .ok_or_else(|| UiError::missing("event target"))?;
        let row = target
            .closest("tr")
            .ok()
            .flatten()
            .ok_or_else(|| UiError::missing("table row around view-transcript button"))?;

        let label = target
            .closest(&format!("[{}]", markup::ATTR_CALL))
            .ok()
            .flatten()
            .and_then(|el| el.get_attribute(markup::ATTR_CALL))
            .unwrap_or_else(|| "unnamed row".to_string());

        Ok(Self { row, label })
    }

    fn field_cell(&self, field: TranscriptField) -> Option<Element> {
        self.row.query_selector(&field_selector(field)).ok().flatten()
    }
}

/// Selector of the cell holding `field` inside a row.
pub fn field_selector(field: TranscriptField) -> String {
    format!("[{}='{}']", markup::ATTR_FIELD, field.attr_value())
}

/// Value of a cell that should hold a badge. Without its badge element the
/// cell keeps only its text, which the record reader rejects as malformed.
pub fn badge_cell(cell_text: String, badge: Option<(String, String)>) -> CellValue {
    match badge {
        Some((text, class)) => CellValue::badge(text, class),
        None => CellValue::text(cell_text),
    }
}

fn text_of(el: &Element) -> String {
    el.text_content().unwrap_or_default().trim().to_string()
}

impl RowSource for DomRow {
    fn row_label(&self) -> String {
        self.label.clone()
    }

    fn cell(&self, field: TranscriptField) -> Option<CellValue> {
        let cell = self.field_cell(field)?;
        match field.badge_class() {
            Some(badge_class) => {
                let badge = cell
                    .query_selector(&format!(".{badge_class}"))
                    .ok()
                    .flatten()
                    .map(|badge| (text_of(&badge), badge.class_name()));
                Some(badge_cell(text_of(&cell), badge))
            }
            None => Some(CellValue::text(text_of(&cell))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::error::UiError;
    use contracts::shared::transcript::{CallRow, TranscriptRecord};

    #[test]
    fn test_field_selector() {
        assert_eq!(field_selector(TranscriptField::Score), "[data-field='score']");
        assert_eq!(field_selector(TranscriptField::CallId), "[data-field='call-id']");
    }

    #[test]
    fn test_badge_cell_keeps_badge_class() {
        let cell = badge_cell(
            "92".to_string(),
            Some(("92".to_string(), "score-badge score-high".to_string())),
        );
        assert_eq!(cell, CellValue::badge("92", "score-badge score-high"));
    }

    #[test]
    fn test_cell_without_badge_reads_as_malformed() {
        let cell = badge_cell("Pending".to_string(), None);
        assert_eq!(cell, CellValue::text("Pending"));

        let mut row = CallRow::new("C-105")
            .with_cell(TranscriptField::CallId, "C-105")
            .with_cell(TranscriptField::Timestamp, "2024-01-03 17:02")
            .with_cell(TranscriptField::Agent, "Lena Fischer")
            .with_cell(TranscriptField::Customer, "Stark Industries")
            .with_cell(TranscriptField::Duration, "4:51")
            .with_badge(TranscriptField::Score, "81", "score-badge score-medium");
        row.cells.insert(TranscriptField::Sentiment, cell);

        let err = TranscriptRecord::read_from(&row).unwrap_err();
        assert!(matches!(err, UiError::MalformedRecord { .. }));
    }
}
