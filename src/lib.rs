pub mod config;
pub mod navigation;
pub mod reply;
pub mod state;
pub mod types;
pub mod ui;
pub mod views;
