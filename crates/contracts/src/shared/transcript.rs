//! Call transcript record and the row abstraction it is read from.
//!
//! Rows are looked up by named field (`data-field`) rather than by column
//! position, so the calls table can reorder its columns freely.

use crate::shared::error::UiError;
use crate::shared::markup;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TranscriptField {
    CallId,
    Timestamp,
    Agent,
    Customer,
    Duration,
    Score,
    Sentiment,
}

impl TranscriptField {
    pub const ALL: [TranscriptField; 7] = [
        TranscriptField::CallId,
        TranscriptField::Timestamp,
        TranscriptField::Agent,
        TranscriptField::Customer,
        TranscriptField::Duration,
        TranscriptField::Score,
        TranscriptField::Sentiment,
    ];

    /// Value of the `data-field` attribute on the cell holding this field.
    pub fn attr_value(&self) -> &'static str {
        match self {
            TranscriptField::CallId => "call-id",
            TranscriptField::Timestamp => "timestamp",
            TranscriptField::Agent => "agent",
            TranscriptField::Customer => "customer",
            TranscriptField::Duration => "duration",
            TranscriptField::Score => "score",
            TranscriptField::Sentiment => "sentiment",
        }
    }

    /// Badge element class inside the cell, for fields rendered as badges.
    pub fn badge_class(&self) -> Option<&'static str> {
        match self {
            TranscriptField::Score => Some(markup::CLASS_SCORE_BADGE),
            TranscriptField::Sentiment => Some(markup::CLASS_SENTIMENT_BADGE),
            _ => None,
        }
    }

    /// Id of the transcript modal element that displays this field.
    pub fn target_id(&self) -> &'static str {
        match self {
            TranscriptField::CallId => markup::TARGET_CALL_ID,
            TranscriptField::Timestamp => markup::TARGET_DATE_TIME,
            TranscriptField::Agent => markup::TARGET_AGENT,
            TranscriptField::Customer => markup::TARGET_CUSTOMER,
            TranscriptField::Duration => markup::TARGET_DURATION,
            TranscriptField::Score => markup::TARGET_SCORE,
            TranscriptField::Sentiment => markup::TARGET_SENTIMENT,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TranscriptField::CallId => "Call ID",
            TranscriptField::Timestamp => "Date & Time",
            TranscriptField::Agent => "Agent",
            TranscriptField::Customer => "Customer",
            TranscriptField::Duration => "Duration",
            TranscriptField::Score => "Score",
            TranscriptField::Sentiment => "Sentiment",
        }
    }
}

/// Content of one cell: its text and, for badge cells, the badge class list.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CellValue {
    pub text: String,
    pub class: Option<String>,
}

impl CellValue {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            class: None,
        }
    }

    pub fn badge(text: impl Into<String>, class: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            class: Some(class.into()),
        }
    }
}

/// Anything a transcript record can be read from: a live table row in the
/// browser, or an in-memory row.
pub trait RowSource {
    /// Human readable row identity used in logs and errors.
    fn row_label(&self) -> String;

    /// Cell for `field`. For badge fields the returned class must be the
    /// badge's class list; `None` for the class means the badge is missing.
    fn cell(&self, field: TranscriptField) -> Option<CellValue>;
}

/// In-memory table row keyed by field.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CallRow {
    pub id: String,
    pub cells: BTreeMap<TranscriptField, CellValue>,
}

impl CallRow {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            cells: BTreeMap::new(),
        }
    }

    pub fn with_cell(mut self, field: TranscriptField, text: impl Into<String>) -> Self {
        self.cells.insert(field, CellValue::text(text));
        self
    }

    pub fn with_badge(
        mut self,
        field: TranscriptField,
        text: impl Into<String>,
        class: impl Into<String>,
    ) -> Self {
        self.cells.insert(field, CellValue::badge(text, class));
        self
    }

    pub fn from_record(record: &TranscriptRecord) -> Self {
        Self::new(record.call_id.clone())
            .with_cell(TranscriptField::CallId, record.call_id.clone())
            .with_cell(TranscriptField::Timestamp, record.timestamp.clone())
            .with_cell(TranscriptField::Agent, record.agent.clone())
            .with_cell(TranscriptField::Customer, record.customer.clone())
            .with_cell(TranscriptField::Duration, record.duration.clone())
            .with_badge(
                TranscriptField::Score,
                record.score.clone(),
                record.score_class.clone(),
            )
            .with_badge(
                TranscriptField::Sentiment,
                record.sentiment.clone(),
                record.sentiment_class.clone(),
            )
    }
}

impl RowSource for CallRow {
    fn row_label(&self) -> String {
        self.id.clone()
    }

    fn cell(&self, field: TranscriptField) -> Option<CellValue> {
        self.cells.get(&field).cloned()
    }
}

/// One call as shown in the transcript modal.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TranscriptRecord {
    pub call_id: String,
    pub timestamp: String,
    pub agent: String,
    pub customer: String,
    pub duration: String,
    pub score: String,
    pub sentiment: String,
    pub score_class: String,
    pub sentiment_class: String,
}

impl TranscriptRecord {
    /// Reads all seven fields from `row`.
    ///
    /// Fails with `MalformedRecord` on the first missing cell, or on a badge
    /// field whose badge element is absent.
    pub fn read_from<R: RowSource + ?Sized>(row: &R) -> Result<Self, UiError> {
        let read = |field: TranscriptField| -> Result<CellValue, UiError> {
            let cell = row.cell(field).ok_or_else(|| UiError::MalformedRecord {
                row: row.row_label(),
                field: field.attr_value().to_string(),
            })?;
            if let Some(badge) = field.badge_class() {
                if cell.class.is_none() {
                    return Err(UiError::MalformedRecord {
                        row: row.row_label(),
                        field: format!("{} .{}", field.attr_value(), badge),
                    });
                }
            }
            Ok(cell)
        };

        let call_id = read(TranscriptField::CallId)?.text;
        let timestamp = read(TranscriptField::Timestamp)?.text;
        let agent = read(TranscriptField::Agent)?.text;
        let customer = read(TranscriptField::Customer)?.text;
        let duration = read(TranscriptField::Duration)?.text;
        let score = read(TranscriptField::Score)?;
        let sentiment = read(TranscriptField::Sentiment)?;

        Ok(Self {
            call_id,
            timestamp,
            agent,
            customer,
            duration,
            score: score.text,
            sentiment: sentiment.text,
            score_class: score.class.unwrap_or_default(),
            sentiment_class: sentiment.class.unwrap_or_default(),
        })
    }

    pub fn field(&self, field: TranscriptField) -> &str {
        match field {
            TranscriptField::CallId => &self.call_id,
            TranscriptField::Timestamp => &self.timestamp,
            TranscriptField::Agent => &self.agent,
            TranscriptField::Customer => &self.customer,
            TranscriptField::Duration => &self.duration,
            TranscriptField::Score => &self.score,
            TranscriptField::Sentiment => &self.sentiment,
        }
    }

    pub fn score_value(&self) -> Option<u8> {
        self.score.trim().parse().ok()
    }

    pub fn duration_secs(&self) -> Option<u32> {
        parse_duration(&self.duration)
    }

    pub fn started_at(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(self.timestamp.trim(), "%Y-%m-%d %H:%M").ok()
    }
}

/// Parses `m:ss` or `h:mm:ss` into seconds.
pub fn parse_duration(s: &str) -> Option<u32> {
    let parts = s
        .trim()
        .split(':')
        .map(|p| p.parse::<u32>().ok())
        .collect::<Option<Vec<_>>>()?;
    match parts.as_slice() {
        [m, s] if *s < 60 => m.checked_mul(60)?.checked_add(*s),
        [h, m, s] if *m < 60 && *s < 60 => h.checked_mul(3600)?.checked_add(m * 60 + s),
        _ => None,
    }
}

/// Formats seconds as `m:ss`.
pub fn format_duration(secs: u32) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// Badge class list for a numeric score.
pub fn score_badge_class(score: u8) -> String {
    let band = match score {
        90..=u8::MAX => "score-high",
        75..=89 => "score-medium",
        _ => "score-low",
    };
    format!("{} {}", markup::CLASS_SCORE_BADGE, band)
}

/// Badge class list for a sentiment label.
pub fn sentiment_badge_class(sentiment: &str) -> String {
    let tone = match sentiment.to_ascii_lowercase().as_str() {
        "positive" => "sentiment-positive",
        "negative" => "sentiment-negative",
        _ => "sentiment-neutral",
    };
    format!("{} {}", markup::CLASS_SENTIMENT_BADGE, tone)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn acme_row() -> CallRow {
        CallRow::new("C-100")
            .with_cell(TranscriptField::CallId, "C-100")
            .with_cell(TranscriptField::Timestamp, "2024-01-01 10:00")
            .with_cell(TranscriptField::Agent, "Jane")
            .with_cell(TranscriptField::Customer, "Acme")
            .with_cell(TranscriptField::Duration, "5:30")
            .with_badge(TranscriptField::Score, "92", "score-badge score-high")
            .with_badge(
                TranscriptField::Sentiment,
                "Positive",
                "sentiment-badge sentiment-positive",
            )
    }

    #[test]
    fn test_read_well_formed_row() {
        let record = TranscriptRecord::read_from(&acme_row()).unwrap();
        assert_eq!(record.call_id, "C-100");
        assert_eq!(record.timestamp, "2024-01-01 10:00");
        assert_eq!(record.agent, "Jane");
        assert_eq!(record.customer, "Acme");
        assert_eq!(record.duration, "5:30");
        assert_eq!(record.score, "92");
        assert_eq!(record.sentiment, "Positive");
        assert_eq!(record.score_class, "score-badge score-high");
        assert_eq!(record.sentiment_class, "sentiment-badge sentiment-positive");
    }

    #[test]
    fn test_missing_cell_is_malformed() {
        let mut row = acme_row();
        row.cells.remove(&TranscriptField::Customer);
        let err = TranscriptRecord::read_from(&row).unwrap_err();
        assert_eq!(
            err,
            UiError::MalformedRecord {
                row: "C-100".to_string(),
                field: "customer".to_string(),
            }
        );
    }

    #[test]
    fn test_missing_badge_is_malformed() {
        let row = acme_row().with_cell(TranscriptField::Score, "92");
        let err = TranscriptRecord::read_from(&row).unwrap_err();
        assert!(matches!(err, UiError::MalformedRecord { field, .. } if field == "score .score-badge"));
    }

    #[test]
    fn test_round_trip_through_row() {
        let record = TranscriptRecord::read_from(&acme_row()).unwrap();
        assert_eq!(CallRow::from_record(&record), acme_row());
    }

    #[test]
    fn test_parsed_values() {
        let record = TranscriptRecord::read_from(&acme_row()).unwrap();
        assert_eq!(record.score_value(), Some(92));
        assert_eq!(record.duration_secs(), Some(330));
        let started = record.started_at().unwrap();
        assert_eq!(started.format("%d.%m.%Y %H:%M").to_string(), "01.01.2024 10:00");
    }

    #[test]
    fn test_parse_duration() {
        assert_eq!(parse_duration("5:30"), Some(330));
        assert_eq!(parse_duration("1:02:03"), Some(3723));
        assert_eq!(parse_duration("5:75"), None);
        assert_eq!(parse_duration("abc"), None);
        assert_eq!(format_duration(330), "5:30");
        assert_eq!(format_duration(65), "1:05");
    }

    #[test]
    fn test_parse_duration_rejects_overflow() {
        assert_eq!(parse_duration("80000000:00"), None);
        assert_eq!(parse_duration("2000000:00:00"), None);
        assert_eq!(parse_duration("71582788:15"), Some(u32::MAX));
    }

    #[test]
    fn test_badge_classes() {
        assert_eq!(score_badge_class(92), "score-badge score-high");
        assert_eq!(score_badge_class(80), "score-badge score-medium");
        assert_eq!(score_badge_class(40), "score-badge score-low");
        assert_eq!(
            sentiment_badge_class("Negative"),
            "sentiment-badge sentiment-negative"
        );
        assert_eq!(sentiment_badge_class("Mixed"), "sentiment-badge sentiment-neutral");
    }
}
