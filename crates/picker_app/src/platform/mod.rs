mod app;
mod config;
mod effects;
mod logging;
mod timers;
mod ui;

pub use app::run_app;
