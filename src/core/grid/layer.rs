//=========================================================================
// Layer Store
//=========================================================================
//
// Rectangular tile layers stacked bottom-to-top.
//
// A `LayerStack` is only constructed from rectangular layers, so every
// consumer (shifter, renderer) can rely on equal row lengths.
//
// Frame lifecycle: canonical stack → duplicate() → shifted draft → drawn
// → dropped at frame end.
//
//=========================================================================

//=== Standard Library ====================================================

use std::fmt::{self, Write as _};

//=== Internal Dependencies ===============================================

use super::{TileIndex, TileLayer, TileRow};

//=== LayerError ==========================================================

/// Rejection reasons for malformed layer data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayerError {
    /// A row's length differs from the first row of the same layer.
    Ragged {
        layer: usize,
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A layer has no rows at all.
    EmptyLayer { layer: usize },
}

impl fmt::Display for LayerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ragged { layer, row, expected, found } => write!(
                f,
                "layer {} is not rectangular: row {} has {} tiles, expected {}",
                layer, row, found, expected
            ),
            Self::EmptyLayer { layer } => write!(f, "layer {} has no rows", layer),
        }
    }
}

impl std::error::Error for LayerError {}

//=== LayerStack ==========================================================

/// Ordered tile layers, index 0 drawn first.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LayerStack {
    layers: Vec<TileLayer>,
}

impl LayerStack {
    //--- Construction -----------------------------------------------------

    /// Builds a stack, rejecting empty or ragged layers.
    pub fn new(layers: Vec<TileLayer>) -> Result<Self, LayerError> {
        for (index, layer) in layers.iter().enumerate() {
            validate_layer(index, layer)?;
        }
        Ok(Self { layers })
    }

    /// Returns a fully independent copy; no row storage is shared.
    ///
    /// The renderer mutates the copy freely while the canonical stack
    /// stays untouched.
    pub fn duplicate(&self) -> Self {
        let layers = self
            .layers
            .iter()
            .map(|layer| layer.iter().map(|row| row.to_vec()).collect())
            .collect();
        Self { layers }
    }

    //--- Access -----------------------------------------------------------

    pub fn layers(&self) -> &[TileLayer] {
        &self.layers
    }

    /// Mutable access to the layers.
    ///
    /// Callers must keep every layer rectangular.
    pub fn layers_mut(&mut self) -> &mut [TileLayer] {
        &mut self.layers
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Row-major flattening of one layer into tile indices.
    pub fn flatten(layer: &[TileRow]) -> impl Iterator<Item = TileIndex> + '_ {
        layer.iter().flat_map(|row| row.iter().copied())
    }
}

//=== Validation ==========================================================

/// Checks that `layer` has at least one row and that all rows match the
/// first row's length.
pub fn validate_layer(index: usize, layer: &[TileRow]) -> Result<(), LayerError> {
    let Some(first) = layer.first() else {
        return Err(LayerError::EmptyLayer { layer: index });
    };

    let expected = first.len();
    match layer.iter().position(|row| row.len() != expected) {
        Some(row) => Err(LayerError::Ragged {
            layer: index,
            row,
            expected,
            found: layer[row].len(),
        }),
        None => Ok(()),
    }
}

//=== Comparison & Debug Output ===========================================

/// Element-wise row equality (lengths must match).
pub fn rows_equal(a: &[TileIndex], b: &[TileIndex]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x == y)
}

/// Row-by-row grid equality (row counts must match).
pub fn grids_equal(a: &[TileRow], b: &[TileRow]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| rows_equal(x, y))
}

/// Comma-separated tile indices, e.g. `1,2,3`.
pub fn dump_row(row: &[TileIndex]) -> String {
    let mut out = String::with_capacity(row.len() * 4);
    for (i, tile) in row.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        let _ = write!(out, "{}", tile);
    }
    out
}

/// One [`dump_row`] line per row, each terminated by `\n`.
pub fn dump_grid(grid: &[TileRow]) -> String {
    grid.iter().fold(String::new(), |mut out, row| {
        out.push_str(&dump_row(row));
        out.push('\n');
        out
    })
}

//=========================================================================
// Unit Tests
//=========================================================================
