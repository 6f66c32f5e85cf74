//! Scoring module - line clear points and level/speed progression
//!
//! Uses the tiered table: single/double/triple/tetris award
//! 100/300/500/800 points, multiplied by the current level. Hard drops add
//! 2 points per row descended. Soft drops score nothing.

use crate::types::{
    BASE_DROP_MS, DROP_INTERVAL_MIN_MS, DROP_INTERVAL_STEP_MS, HARD_DROP_POINTS_PER_ROW,
    LINES_PER_LEVEL, LINE_SCORES,
};

/// Points for clearing `lines` rows at once at the given level (1-based)
pub fn line_clear_points(lines: usize, level: u32) -> u32 {
    if lines == 0 || lines >= LINE_SCORES.len() {
        return 0;
    }
    LINE_SCORES[lines] * level
}

/// Points for a hard drop that descended `rows` rows
pub fn hard_drop_points(rows: u32) -> u32 {
    rows * HARD_DROP_POINTS_PER_ROW
}

/// The level that a total line count calls for (1-based).
///
/// Callers advance by at most one level per clear event even when the total
/// crosses several thresholds at once.
pub fn target_level(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL + 1
}

/// Gravity interval for a level: 1000ms at level 1, 100ms faster per level,
/// floored at 100ms.
pub fn drop_interval_ms(level: u32) -> u32 {
    let step = level.saturating_sub(1).saturating_mul(DROP_INTERVAL_STEP_MS);
    BASE_DROP_MS.saturating_sub(step).max(DROP_INTERVAL_MIN_MS)
}
