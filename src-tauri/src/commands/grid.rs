use tauri::{AppHandle, Emitter, State};

use engine::clock::Clock;
use engine::grid::{self, LayoutMetrics, TooltipPosition};
use engine::label::{self, WeekLabel};

use crate::state::{AppState, GridData, LayoutEvent};

/// Submit the timeline's current inputs to the layout runner; emits
/// `layout-ready` when the computed grid is published.
pub fn submit_current_layout(app: &AppHandle, state: &State<AppState>) {
    let (total_weeks, weeks_lived) = {
        let timeline = state.timeline.lock().unwrap();
        (
            timeline.total_weeks(),
            timeline.weeks_lived_as_of(state.clock.now()),
        )
    };

    let app = app.clone();
    let runner = state.layout_runner.lock().unwrap();
    runner.submit(total_weeks, weeks_lived, grid::BLOCKS_PER_ROW, move |layout| {
        let event = LayoutEvent {
            generation: layout.generation,
            total_weeks: layout.total_weeks,
            weeks_lived: layout.weeks_lived,
            row_count: layout.rows.len(),
        };
        let _ = app.emit("layout-ready", &event);
    });
}

/// Kick off an off-thread layout recompute for the current inputs.
#[tauri::command]
pub fn request_layout(app: AppHandle, state: State<AppState>) {
    submit_current_layout(&app, &state);
}

/// Latest published grid. When the published grid no longer matches the
/// timeline's inputs (or nothing is published yet), a recompute is queued
/// and the stale grid, if any, is returned in the meantime.
#[tauri::command]
pub fn get_grid(app: AppHandle, state: State<AppState>) -> Option<GridData> {
    let (total_weeks, weeks_lived) = {
        let timeline = state.timeline.lock().unwrap();
        (
            timeline.total_weeks(),
            timeline.weeks_lived_as_of(state.clock.now()),
        )
    };

    let current = {
        let runner = state.layout_runner.lock().unwrap();
        runner.is_current(total_weeks, weeks_lived)
    };
    if !current {
        submit_current_layout(&app, &state);
    }

    let runner = state.layout_runner.lock().unwrap();
    runner.latest().map(|layout| GridData {
        generation: layout.generation,
        total_weeks: layout.total_weeks,
        weeks_lived: layout.weeks_lived,
        rows: layout.rows,
    })
}

#[tauri::command]
pub fn get_layout_metrics() -> LayoutMetrics {
    LayoutMetrics::default()
}

#[tauri::command]
pub fn get_tooltip_position(
    row_index: usize,
    col_index: usize,
    metrics: Option<LayoutMetrics>,
) -> TooltipPosition {
    grid::tooltip_position(row_index, col_index, &metrics.unwrap_or_default())
}

#[tauri::command]
pub fn get_week_label(state: State<AppState>, week_index: i64) -> WeekLabel {
    let timeline = state.timeline.lock().unwrap();
    label::week_label(week_index, timeline.settings().birth_date)
}
