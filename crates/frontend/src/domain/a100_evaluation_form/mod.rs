pub mod ui;

pub use ui::designer::EvaluationFormDesigner;
