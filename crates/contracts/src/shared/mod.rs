pub mod actions;
pub mod error;
pub mod markup;
pub mod notification;
pub mod transcript;
