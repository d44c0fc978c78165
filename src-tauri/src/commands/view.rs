use tauri::State;

use engine::view::{ViewAction, ViewState};

use crate::state::AppState;

#[tauri::command]
pub fn get_view_state(state: State<AppState>) -> ViewState {
    *state.view.lock().unwrap()
}

#[tauri::command]
pub fn apply_view_action(state: State<AppState>, action: ViewAction) -> ViewState {
    let mut view = state.view.lock().unwrap();
    *view = view.apply(action);
    *view
}
