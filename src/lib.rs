// src/lib.rs
#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod export;
pub mod filter;
pub mod gui;
pub mod images;
pub mod phone;
pub mod query;
pub mod store;

#[cfg(feature = "cli")]
pub mod cli;

pub use filter::filter_data;
pub use images::resolve_image;
pub use query::extract_filters;
