//=========================================================================
// Grid Shifter
//=========================================================================
//
// Pure shifting of tile rows and tile grids by whole cells.
//
// Architecture:
//   row  → shift_row_left / shift_row_right  → new row  (same length)
//   grid → shift_grid_up  / shift_grid_down  → new grid (same row count)
//
// Shifts are lossy, not rotations: cells pushed past an edge are dropped
// and vacated cells take the fill value. Scrolling is simulated by moving
// tile content opposite to the player instead of moving a camera, so
// draw-time tile math stays origin-relative.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::{TileIndex, TileRow};

//=== Row Shifts ==========================================================

/// Moves every cell `n` slots towards index 0.
///
/// `result[i] = row[i + n]` for `i < len - n`; the trailing `n` cells are
/// `fill`. When `n >= len` the whole row is `fill`.
///
/// The world scrolls this way when the player walks right.
pub fn shift_row_right(row: &[TileIndex], n: usize, fill: TileIndex) -> TileRow {
    let len = row.len();
    if n >= len {
        return vec![fill; len];
    }

    let mut shifted = Vec::with_capacity(len);
    shifted.extend_from_slice(&row[n..]);
    shifted.resize(len, fill);
    shifted
}

/// Moves every cell `n` slots away from index 0.
///
/// `result[i] = row[i - n]` for `i >= n`; the leading `n` cells are
/// `fill`. When `n >= len` the whole row is `fill`.
pub fn shift_row_left(row: &[TileIndex], n: usize, fill: TileIndex) -> TileRow {
    let len = row.len();
    if n >= len {
        return vec![fill; len];
    }

    let mut shifted = vec![fill; n];
    shifted.extend_from_slice(&row[..len - n]);
    shifted
}

//=== Grid Shifts =========================================================

/// Moves every row `n` slots towards the top.
///
/// Rows `n..` move up; `n` fill rows are appended at the bottom. When
/// `n >= rows` every row is a fill row. Fill rows are as wide as the
/// first original row. An empty grid stays empty.
pub fn shift_grid_up(grid: &[TileRow], n: usize, fill: TileIndex) -> Vec<TileRow> {
    let Some(width) = grid.first().map(Vec::len) else {
        return Vec::new();
    };
    let rows = grid.len();
    if n >= rows {
        return vec![vec![fill; width]; rows];
    }

    let mut shifted = Vec::with_capacity(rows);
    shifted.extend(grid[n..].iter().cloned());
    shifted.resize(rows, vec![fill; width]);
    shifted
}

/// Moves every row `n` slots towards the bottom.
///
/// `n` fill rows are inserted at the top and the last `n` rows are
/// dropped. Overflow and empty-grid rules match [`shift_grid_up`].
pub fn shift_grid_down(grid: &[TileRow], n: usize, fill: TileIndex) -> Vec<TileRow> {
    let Some(width) = grid.first().map(Vec::len) else {
        return Vec::new();
    };
    let rows = grid.len();
    if n >= rows {
        return vec![vec![fill; width]; rows];
    }

    let mut shifted = vec![vec![fill; width]; n];
    shifted.extend(grid[..rows - n].iter().cloned());
    shifted
}

//=========================================================================
// Unit Tests
//=========================================================================
