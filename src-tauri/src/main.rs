// Prevents additional console window on Windows in release
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod commands;
mod state;

use std::path::PathBuf;
use std::sync::Mutex;

use engine::clock::SystemClock;
use engine::layout_runner::LayoutRunner;
use engine::persistence;
use engine::settings::LifeSettings;
use engine::timeline::LifeTimeline;
use engine::view::ViewState;

use state::AppState;

const SETTINGS_FILE: &str = "lifeweeks-settings.json";

fn main() {
    let settings_path = PathBuf::from(SETTINGS_FILE);
    let settings = match persistence::load_settings(&settings_path) {
        Ok(Some(settings)) => settings,
        Ok(None) => LifeSettings::default(),
        Err(e) => {
            eprintln!("Failed to load settings, falling back to defaults: {}", e);
            LifeSettings::default()
        }
    };

    let app_state = AppState {
        timeline: Mutex::new(LifeTimeline::new(settings)),
        layout_runner: Mutex::new(LayoutRunner::new()),
        view: Mutex::new(ViewState::Main),
        settings_path,
        clock: SystemClock,
    };

    tauri::Builder::default()
        .manage(app_state)
        .invoke_handler(tauri::generate_handler![
            // Settings
            commands::settings::get_settings,
            commands::settings::update_settings,
            // Timeline
            commands::timeline::get_timeline_stats,
            // Grid
            commands::grid::request_layout,
            commands::grid::get_grid,
            commands::grid::get_layout_metrics,
            commands::grid::get_tooltip_position,
            commands::grid::get_week_label,
            // View
            commands::view::get_view_state,
            commands::view::apply_view_action,
            // Memory & App
            commands::app::get_memory_usage,
            commands::app::exit_app,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
