pub mod d100_quality_overview;

pub use d100_quality_overview::ui::QualityOverviewDashboard;
