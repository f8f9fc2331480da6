//! Headline numbers of the overview dashboard, computed from call records.

use chrono::NaiveDateTime;
use contracts::shared::transcript::{format_duration, TranscriptRecord};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct QualityStats {
    pub total_calls: usize,
    pub avg_score: Option<f64>,
    pub avg_duration_secs: Option<u32>,
    pub latest_call: Option<NaiveDateTime>,
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
}

impl QualityStats {
    /// Records with an unreadable score, duration or timestamp still count
    /// towards `total_calls` but are left out of the matching average.
    pub fn from_records(records: &[TranscriptRecord]) -> Self {
        let scores: Vec<u8> = records.iter().filter_map(|r| r.score_value()).collect();
        let durations: Vec<u32> = records.iter().filter_map(|r| r.duration_secs()).collect();

        let avg_score = (!scores.is_empty())
            .then(|| scores.iter().map(|s| *s as f64).sum::<f64>() / scores.len() as f64);
        let avg_duration_secs = (!durations.is_empty()).then(|| {
            let total: u64 = durations.iter().map(|d| u64::from(*d)).sum();
            // Mean of u32 values always fits in u32.
            (total / durations.len() as u64) as u32
        });

        let mut stats = Self {
            total_calls: records.len(),
            avg_score,
            avg_duration_secs,
            latest_call: records.iter().filter_map(|r| r.started_at()).max(),
            ..Default::default()
        };

        for record in records {
            match record.sentiment.to_lowercase().as_str() {
                "positive" => stats.positive += 1,
                "neutral" => stats.neutral += 1,
                "negative" => stats.negative += 1,
                other => log::debug!("sentiment '{other}' not counted"),
            }
        }
        stats
    }

    pub fn avg_score_display(&self) -> Option<String> {
        self.avg_score.map(|s| format!("{s:.1}"))
    }

    pub fn avg_duration_display(&self) -> Option<String> {
        self.avg_duration_secs.map(format_duration)
    }

    pub fn latest_call_display(&self) -> Option<String> {
        self.latest_call
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
    }

    /// Share of positive calls, percent.
    pub fn positive_share(&self) -> Option<u8> {
        let rated = self.positive + self.neutral + self.negative;
        (rated > 0).then(|| ((self.positive * 100) as f64 / rated as f64).round() as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::sample::sample_records;

    #[test]
    fn test_stats_from_sample_records() {
        let stats = QualityStats::from_records(&sample_records());
        assert_eq!(stats.total_calls, 5);
        // (92 + 78 + 64 + 88 + 95) / 5
        assert_eq!(stats.avg_score_display().as_deref(), Some("83.4"));
        assert_eq!(stats.avg_duration_display().as_deref(), Some("7:10"));
        assert_eq!(stats.positive, 3);
        assert_eq!(stats.neutral, 1);
        assert_eq!(stats.negative, 1);
        assert_eq!(stats.positive_share(), Some(60));
        assert_eq!(
            stats.latest_call_display().as_deref(),
            Some("2024-01-03 16:30")
        );
    }

    #[test]
    fn test_long_durations_do_not_overflow_average() {
        let mut records = sample_records();
        for record in &mut records {
            record.duration = "71582788:15".to_string();
        }
        let stats = QualityStats::from_records(&records);
        assert_eq!(stats.avg_duration_secs, Some(u32::MAX));
    }

    #[test]
    fn test_empty_records_have_no_averages() {
        let stats = QualityStats::from_records(&[]);
        assert_eq!(stats.total_calls, 0);
        assert!(stats.avg_score_display().is_none());
        assert!(stats.avg_duration_display().is_none());
        assert!(stats.positive_share().is_none());
    }
}
