//! LifeWeeks Engine Benchmark
//!
//! Standalone benchmark for grid layout at large week counts.

use chrono::{Local, NaiveDate};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use engine::grid;
use engine::settings::LifeSettings;
use engine::timeline::LifeTimeline;

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("LifeWeeks engine benchmark starting...");

    // Worst-case horizon the settings editor allows
    let birth = NaiveDate::default();
    let timeline = LifeTimeline::new(LifeSettings::new(birth, 120, 12, 4));
    let now = Local::now();

    let total = timeline.total_weeks();
    let lived = timeline.weeks_lived_as_of(now);
    info!("Total weeks: {}, weeks lived: {}", total, lived);

    info!("Running layout benchmark (1000 iterations)...");
    let start = std::time::Instant::now();
    let mut rows = Vec::new();
    for _ in 0..1000 {
        rows = grid::layout_rows(total, lived, grid::BLOCKS_PER_ROW);
    }
    let elapsed = start.elapsed();

    info!(
        "Benchmark complete: {:?} total, {:?} per layout, {} rows",
        elapsed,
        elapsed / 1000,
        rows.len()
    );

    Ok(())
}
