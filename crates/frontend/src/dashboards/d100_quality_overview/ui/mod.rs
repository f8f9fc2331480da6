pub mod dashboard;

pub use dashboard::QualityOverviewDashboard;
