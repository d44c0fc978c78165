use tauri::{AppHandle, State};

use engine::clock::Clock;
use engine::persistence;
use engine::settings::LifeSettings;

use crate::state::{timeline_stats, AppState, TimelineStats};

#[tauri::command]
pub fn get_settings(state: State<AppState>) -> LifeSettings {
    state.timeline.lock().unwrap().settings().clone()
}

/// Apply an edit from the settings form.
///
/// The expectancy fields are clamped to the editing bounds, the record is
/// persisted, and only then is the in-memory timeline updated - a failed
/// save leaves it untouched.
#[tauri::command]
pub fn update_settings(
    app: AppHandle,
    state: State<AppState>,
    settings: LifeSettings,
) -> Result<TimelineStats, String> {
    let clamped = settings.clamped();

    persistence::save_settings(&state.settings_path, &clamped).map_err(|e| e.to_string())?;

    let now = state.clock.now();
    let stats = {
        let mut timeline = state.timeline.lock().unwrap();
        timeline.set_settings(clamped);
        timeline_stats(&timeline, now)
    };

    // The grid is stale now; queue a recompute
    crate::commands::grid::submit_current_layout(&app, &state);

    Ok(stats)
}
