// src/gui/mod.rs
pub mod app;
pub mod components;
pub mod images;

pub use app::run;
