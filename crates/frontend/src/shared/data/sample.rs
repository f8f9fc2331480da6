use crate::shared::form_designer::{FormField, FormItem, FormSection};
use contracts::shared::transcript::{
    score_badge_class, sentiment_badge_class, CallRow, TranscriptField, TranscriptRecord,
};

fn call(
    id: &str,
    timestamp: &str,
    agent: &str,
    customer: &str,
    duration: &str,
    score: u8,
    sentiment: &str,
) -> TranscriptRecord {
    TranscriptRecord {
        call_id: id.to_string(),
        timestamp: timestamp.to_string(),
        agent: agent.to_string(),
        customer: customer.to_string(),
        duration: duration.to_string(),
        score: score.to_string(),
        sentiment: sentiment.to_string(),
        score_class: score_badge_class(score),
        sentiment_class: sentiment_badge_class(sentiment),
    }
}

pub fn sample_calls() -> Vec<CallRow> {
    let mut rows: Vec<CallRow> = [
        call("C-100", "2024-01-01 10:00", "Jane Cooper", "Acme Corp", "5:30", 92, "Positive"),
        call("C-101", "2024-01-01 11:15", "Omar Haddad", "Globex", "12:04", 78, "Neutral"),
        call("C-102", "2024-01-02 09:42", "Lena Fischer", "Initech", "3:18", 64, "Negative"),
        call("C-103", "2024-01-02 14:05", "Jane Cooper", "Umbrella", "8:47", 88, "Positive"),
        call("C-104", "2024-01-03 16:30", "Omar Haddad", "Hooli", "6:12", 95, "Positive"),
    ]
    .iter()
    .map(CallRow::from_record)
    .collect();

    // Sentiment analysis has not run for this call yet, so its row has no
    // sentiment badge.
    rows.push(
        CallRow::new("C-105")
            .with_cell(TranscriptField::CallId, "C-105")
            .with_cell(TranscriptField::Timestamp, "2024-01-03 17:02")
            .with_cell(TranscriptField::Agent, "Lena Fischer")
            .with_cell(TranscriptField::Customer, "Stark Industries")
            .with_cell(TranscriptField::Duration, "4:51")
            .with_badge(TranscriptField::Score, "81", score_badge_class(81))
            .with_cell(TranscriptField::Sentiment, "Pending"),
    );
    rows
}

/// Records of the rows that are complete enough to read.
pub fn sample_records() -> Vec<TranscriptRecord> {
    sample_calls()
        .iter()
        .filter_map(|row| TranscriptRecord::read_from(row).ok())
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualityParameter {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub current: u8,
    pub target: u8,
}

pub fn quality_parameters() -> Vec<QualityParameter> {
    vec![
        QualityParameter {
            key: "greeting",
            name: "Greeting & Introduction",
            description: "Agent greets the customer and states name and company",
            current: 94,
            target: 95,
        },
        QualityParameter {
            key: "empathy",
            name: "Empathy",
            description: "Agent acknowledges the customer's situation",
            current: 71,
            target: 85,
        },
        QualityParameter {
            key: "resolution",
            name: "First Call Resolution",
            description: "Issue resolved without follow-up",
            current: 68,
            target: 80,
        },
        QualityParameter {
            key: "compliance",
            name: "Compliance Disclosure",
            description: "Mandatory disclosures read verbatim",
            current: 99,
            target: 100,
        },
    ]
}

fn field(id: &str, label: &str, kind: &str) -> FormField {
    FormField {
        id: id.to_string(),
        label: label.to_string(),
        kind: kind.to_string(),
    }
}

pub fn evaluation_forms() -> Vec<FormItem> {
    vec![
        FormItem {
            id: "inbound-support".to_string(),
            name: "Inbound Support".to_string(),
            sections: vec![
                FormSection {
                    title: "Opening".to_string(),
                    fields: vec![
                        field("greeting", "Greeting used", "Yes / No"),
                        field("verification", "Customer verified", "Yes / No"),
                    ],
                },
                FormSection {
                    title: "Resolution".to_string(),
                    fields: vec![
                        field("resolved", "Issue resolved", "Scale 1-5"),
                        field("next-steps", "Next steps explained", "Yes / No"),
                    ],
                },
            ],
        },
        FormItem {
            id: "collections".to_string(),
            name: "Collections".to_string(),
            sections: vec![FormSection {
                title: "Compliance".to_string(),
                fields: vec![
                    field("mini-miranda", "Disclosure read", "Yes / No"),
                    field("payment-plan", "Payment plan offered", "Yes / No"),
                ],
            }],
        },
        FormItem {
            id: "outbound-sales".to_string(),
            name: "Outbound Sales".to_string(),
            sections: vec![FormSection {
                title: "Pitch".to_string(),
                fields: vec![field("value-prop", "Value proposition stated", "Scale 1-5")],
            }],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_sample_row_is_incomplete() {
        assert_eq!(sample_calls().len(), 6);
        assert_eq!(sample_records().len(), 5);
    }
}
