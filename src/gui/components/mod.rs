// src/gui/components/mod.rs
use eframe::egui::Color32;

pub mod data_table;
pub mod export_bar;
pub mod result_cards;
pub mod results;
pub mod search_bar;

pub const CYAN: Color32 = Color32::from_rgb(0x00, 0xFF, 0xFF);
pub const RED: Color32 = Color32::from_rgb(0xFF, 0x44, 0x44);
pub const GREEN: Color32 = Color32::from_rgb(0x3C, 0xC8, 0x64);
pub const AMBER: Color32 = Color32::from_rgb(0xF0, 0xD2, 0x3C);
pub const CARD_FILL: Color32 = Color32::from_rgb(0x1E, 0x1E, 0x1E);
