//! Abacus Desktop Application
//!
//! A calculator that opens a private gallery and notes once the passcode is
//! entered.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod components;
mod services;
mod state;
mod theme;
mod views;

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use tracing_subscriber::EnvFilter;

/// Window title; the app presents itself as a plain calculator
const WINDOW_TITLE: &str = "Calculator";

fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("abacus=debug")),
        )
        .init();

    tracing::info!("Starting Abacus...");

    let window = WindowBuilder::new()
        .with_title(WINDOW_TITLE)
        .with_inner_size(LogicalSize::new(420.0, 760.0))
        .with_min_inner_size(LogicalSize::new(340.0, 560.0));
    let config = Config::new().with_window(window);

    dioxus::LaunchBuilder::new()
        .with_cfg(config)
        .launch(app::App);
}
