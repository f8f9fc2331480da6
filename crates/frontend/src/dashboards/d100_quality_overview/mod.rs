pub mod stats;
pub mod ui;

pub use ui::QualityOverviewDashboard;
