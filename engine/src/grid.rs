//! Week-grid layout - partitions the life span into rows of week blocks.
//!
//! Rows render newest-first: row 0 holds the highest week indices (the end
//! of the expectancy horizon) and the bottom row holds the week of birth, so
//! the grid reads top-to-bottom as remaining time down to earliest lived
//! time. Layout is pure and allocation-only, safe to run off the interactive
//! thread.

use serde::{Deserialize, Serialize};

/// Weeks per grid row; one row per year of life at the default.
pub const BLOCKS_PER_ROW: usize = 52;

// ============================================================================
// Blocks and rows
// ============================================================================

/// One week of the life span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekBlock {
    /// 0-based; week 0 is the week of birth.
    pub week_index: i64,
    /// `week_index < weeks_lived`.
    pub is_past: bool,
    /// Marks the literal last week of the expectancy horizon.
    pub is_terminal: bool,
}

/// One display row; blocks run left to right in ascending week order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockRow {
    /// Display order; row 0 renders topmost.
    pub row_index: usize,
    pub blocks: Vec<WeekBlock>,
}

/// Partition week indices `[0, total_weeks)` into display rows.
///
/// Chunks of `blocks_per_row` consecutive indices are emitted in reverse
/// chunk order, so the partial chunk (when `total_weeks` is not a multiple
/// of the row width) renders at the top and week 0 lands in the bottom row.
pub fn layout_rows(total_weeks: i64, weeks_lived: i64, blocks_per_row: usize) -> Vec<BlockRow> {
    if total_weeks <= 0 || blocks_per_row == 0 {
        return Vec::new();
    }

    let width = blocks_per_row as i64;
    let row_count = (total_weeks - 1) / width + 1;

    let mut rows = Vec::with_capacity(row_count as usize);
    for display_row in 0..row_count {
        let chunk = row_count - 1 - display_row;
        let start = chunk * width;
        let end = start.saturating_add(width).min(total_weeks);

        let blocks = (start..end)
            .map(|week_index| WeekBlock {
                week_index,
                is_past: week_index < weeks_lived,
                is_terminal: week_index == total_weeks - 1,
            })
            .collect();

        rows.push(BlockRow {
            row_index: display_row as usize,
            blocks,
        });
    }

    rows
}

// ============================================================================
// Tooltip geometry
// ============================================================================

/// Geometry inputs for tooltip placement. Defaults match the 400pt popover.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LayoutMetrics {
    pub block_size: f64,
    pub block_spacing: f64,
    /// Vertical space above the grid (title, statistics, percentage text).
    pub header_height: f64,
    pub container_width: f64,
    pub tooltip_width: f64,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            block_size: 6.0,
            block_spacing: 1.0,
            header_height: 110.0,
            container_width: 400.0,
            tooltip_width: 120.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipPosition {
    pub x: f64,
    pub y: f64,
}

/// Tooltip anchor for the block at `(row_index, col_index)`.
///
/// Prefers the spot just right of and slightly above the block; flips to the
/// left side (clamped at 0) when the tooltip would run past the container's
/// right edge. Vertical overflow is not handled.
pub fn tooltip_position(
    row_index: usize,
    col_index: usize,
    metrics: &LayoutMetrics,
) -> TooltipPosition {
    let step = metrics.block_size + metrics.block_spacing;
    let block_x = col_index as f64 * step;
    let block_y = metrics.header_height + row_index as f64 * step;

    let right_x = block_x + metrics.block_size + 10.0;
    let y = block_y - 10.0;

    if right_x + metrics.tooltip_width > metrics.container_width {
        let left_x = block_x - metrics.tooltip_width - 10.0;
        TooltipPosition {
            x: left_x.max(0.0),
            y,
        }
    } else {
        TooltipPosition { x: right_x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_count_is_ceiling() {
        assert_eq!(layout_rows(0, 0, 52).len(), 0);
        assert_eq!(layout_rows(52, 0, 52).len(), 1);
        assert_eq!(layout_rows(53, 0, 52).len(), 2);
        assert_eq!(layout_rows(3913, 0, 52).len(), 76);
    }

    #[test]
    fn test_rows_cover_every_week_exactly_once() {
        let rows = layout_rows(110, 40, 52);

        // Reversing display order yields ascending chunks over [0, 110)
        let indices: Vec<i64> = rows
            .iter()
            .rev()
            .flat_map(|row| row.blocks.iter().map(|b| b.week_index))
            .collect();
        assert_eq!(indices, (0..110).collect::<Vec<_>>());
    }

    #[test]
    fn test_partial_chunk_renders_first() {
        let rows = layout_rows(110, 0, 52);
        assert_eq!(rows.len(), 3);

        // Top row holds the 6 newest weeks, bottom row starts at birth
        assert_eq!(rows[0].row_index, 0);
        assert_eq!(rows[0].blocks.len(), 6);
        assert_eq!(rows[0].blocks[0].week_index, 104);
        assert_eq!(rows[2].blocks[0].week_index, 0);
        assert_eq!(rows[2].blocks.len(), 52);
    }

    #[test]
    fn test_past_flag_tracks_weeks_lived() {
        let rows = layout_rows(110, 40, 52);
        for row in &rows {
            for block in &row.blocks {
                assert_eq!(block.is_past, block.week_index < 40);
            }
        }
    }

    #[test]
    fn test_exactly_one_terminal_block() {
        let rows = layout_rows(110, 200, 52);
        let terminals: Vec<_> = rows
            .iter()
            .flat_map(|row| row.blocks.iter())
            .filter(|b| b.is_terminal)
            .collect();

        assert_eq!(terminals.len(), 1);
        assert_eq!(terminals[0].week_index, 109);
    }

    #[test]
    fn test_layout_survives_outlived_horizon() {
        // weeks_lived beyond the horizon: everything is past, nothing panics
        let rows = layout_rows(52, 400, 52);
        assert!(rows.iter().flat_map(|r| r.blocks.iter()).all(|b| b.is_past));
    }

    #[test]
    fn test_zero_row_width_yields_no_rows() {
        assert!(layout_rows(100, 0, 0).is_empty());
    }

    #[test]
    fn test_tooltip_prefers_right_side() {
        let metrics = LayoutMetrics::default();
        let pos = tooltip_position(2, 3, &metrics);

        // block at (21, 124): right placement is blockX + 6 + 10
        assert_eq!(pos.x, 3.0 * 7.0 + 6.0 + 10.0);
        assert_eq!(pos.y, 110.0 + 2.0 * 7.0 - 10.0);
    }

    #[test]
    fn test_tooltip_flips_left_near_right_edge() {
        let metrics = LayoutMetrics::default();
        let pos = tooltip_position(0, 51, &metrics);

        let block_x = 51.0 * 7.0;
        assert!(block_x + 6.0 + 10.0 + metrics.tooltip_width > metrics.container_width);
        assert_eq!(pos.x, block_x - metrics.tooltip_width - 10.0);
    }

    #[test]
    fn test_tooltip_x_never_negative() {
        // Narrow container forces the left placement below zero; it clamps
        let metrics = LayoutMetrics {
            container_width: 60.0,
            ..LayoutMetrics::default()
        };
        for col in 0..52 {
            assert!(tooltip_position(0, col, &metrics).x >= 0.0);
        }
    }
}
