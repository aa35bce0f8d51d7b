pub mod clipboard;
pub mod config;
pub mod logging;
pub mod quote;
pub mod share;
pub mod ui;
