//=========================================================================
// Tile Grids
//=========================================================================
//
// Tile index grids and the pure operations on them.
//
// Components:
// - `shift`: lossy row/grid shifting used for background scrolling
// - `layer`: validated layer stacks, duplication, comparison, dumps
//
//=========================================================================

//=== Module Declarations =================================================

pub mod layer;
pub mod shift;

//=== Public API ==========================================================

pub use layer::{dump_grid, dump_row, grids_equal, rows_equal, LayerError, LayerStack};
pub use shift::{shift_grid_down, shift_grid_up, shift_row_left, shift_row_right};

/// Identifies one cell of the tile sheet.
pub type TileIndex = u32;

/// One row of tile indices.
pub type TileRow = Vec<TileIndex>;

/// One visual plane: rows of tile indices, all of equal length.
pub type TileLayer = Vec<TileRow>;
