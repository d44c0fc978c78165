use std::path::PathBuf;
use std::sync::Mutex;

use chrono::{DateTime, Local};
use serde::Serialize;

use engine::clock::SystemClock;
use engine::grid::BlockRow;
use engine::layout_runner::LayoutRunner;
use engine::timeline::LifeTimeline;
use engine::view::ViewState;

/// Global application state managed by Tauri
pub struct AppState {
    pub timeline: Mutex<LifeTimeline>,
    pub layout_runner: Mutex<LayoutRunner>,
    pub view: Mutex<ViewState>,
    pub settings_path: PathBuf,
    pub clock: SystemClock,
}

// -- Serializable types returned by commands --

#[derive(Serialize, Clone)]
pub struct TimelineStats {
    pub total_weeks: i64,
    pub weeks_lived: i64,
    pub weeks_remaining: i64,
    pub percent_lived: f64,
    pub has_outlived: bool,
}

#[derive(Serialize, Clone)]
pub struct GridData {
    pub generation: u64,
    pub total_weeks: i64,
    pub weeks_lived: i64,
    pub rows: Vec<BlockRow>,
}

/// Payload of the `layout-ready` event; the frontend follows up with
/// `get_grid` for the rows.
#[derive(Serialize, Clone)]
pub struct LayoutEvent {
    pub generation: u64,
    pub total_weeks: i64,
    pub weeks_lived: i64,
    pub row_count: usize,
}

/// Snapshot all derived counts at one instant.
pub fn timeline_stats(timeline: &LifeTimeline, now: DateTime<Local>) -> TimelineStats {
    TimelineStats {
        total_weeks: timeline.total_weeks(),
        weeks_lived: timeline.weeks_lived_as_of(now),
        weeks_remaining: timeline.weeks_remaining(now),
        percent_lived: timeline.percent_lived(now),
        has_outlived: timeline.has_outlived(now),
    }
}
