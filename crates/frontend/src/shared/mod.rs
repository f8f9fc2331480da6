pub mod components;
pub mod config;
pub mod controls;
pub mod data;
pub mod filters;
pub mod form_designer;
pub mod icons;
pub mod navigation;
pub mod notifications;
pub mod page;
pub mod stubs;
pub mod transcript;
