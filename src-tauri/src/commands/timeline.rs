use tauri::State;

use engine::clock::Clock;

use crate::state::{timeline_stats, AppState, TimelineStats};

#[tauri::command]
pub fn get_timeline_stats(state: State<AppState>) -> TimelineStats {
    let timeline = state.timeline.lock().unwrap();
    timeline_stats(&timeline, state.clock.now())
}
