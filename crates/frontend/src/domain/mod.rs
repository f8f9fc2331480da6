pub mod a100_evaluation_form;
pub mod a101_quality_parameter;
