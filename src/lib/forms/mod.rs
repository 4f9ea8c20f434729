//! Glue between the timetable web forms and the remote scheduling API.
pub mod api_client;
pub mod console_ui;
pub mod controller;
pub mod helpers;
pub mod models;
pub mod run_tool;
pub mod ui_surface;
