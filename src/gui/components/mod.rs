// src/gui/components/mod.rs
pub mod export_bar;
pub mod flights_table;
pub mod login_panel;
pub mod month_chart;
pub mod summary_cards;
pub mod tabs;
