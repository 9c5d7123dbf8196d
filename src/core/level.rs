//=========================================================================
// Level
//=========================================================================
//
// The world and textbox layer stacks the game starts with.
//
// Layers are validated on construction, so a malformed level is rejected
// at load time instead of producing undefined shifts or draws.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::grid::{LayerError, LayerStack, TileLayer};

//=== Level ===============================================================

/// Validated world and textbox layer stacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level {
    world: LayerStack,
    textbox: LayerStack,
}

impl Level {
    /// Validates and wraps the two stacks.
    pub fn new(world: Vec<TileLayer>, textbox: Vec<TileLayer>) -> Result<Self, LayerError> {
        Ok(Self {
            world: LayerStack::new(world)?,
            textbox: LayerStack::new(textbox)?,
        })
    }

    /// Grass field with a small house and a path leading south.
    pub fn builtin() -> Result<Self, LayerError> {
        Self::new(vec![grass_layer(), house_layer()], vec![textbox_layer()])
    }

    /// Splits the level into `(world, textbox)` stacks.
    pub fn into_stacks(self) -> (LayerStack, LayerStack) {
        (self.world, self.textbox)
    }

    pub fn world(&self) -> &LayerStack {
        &self.world
    }

    pub fn textbox(&self) -> &LayerStack {
        &self.textbox
    }
}

//=== Built-in Layers =====================================================

fn grass_layer() -> TileLayer {
    vec![
        vec![243, 243, 243, 243, 243, 243, 243, 243, 243, 243, 243, 243, 243, 243, 243],
        vec![243, 243, 243, 243, 243, 243, 243, 243, 243, 243, 243, 243, 243, 243, 243],
        vec![243, 243, 243, 243, 243, 243, 243, 243, 243, 243, 243, 243, 243, 243, 243],
        vec![243, 218, 243, 243, 243, 243, 243, 243, 243, 243, 243, 218, 243, 244, 243],
        vec![243, 243, 243, 243, 243, 243, 243, 243, 243, 243, 243, 243, 243, 243, 243],

        vec![243, 243, 243, 243, 243, 243, 243, 243, 243, 243, 243, 243, 243, 243, 243],
        vec![243, 243, 243, 243, 243, 243, 243, 243, 243, 243, 243, 243, 243, 243, 243],
        vec![243, 243, 244, 243, 243, 243, 243, 243, 243, 243, 243, 243, 243, 243, 243],
        vec![243, 243, 243, 243, 243, 243, 243, 243, 243, 219, 243, 243, 243, 219, 243],
        vec![243, 243, 243, 243, 243, 243, 243, 243, 243, 243, 243, 243, 243, 243, 243],

        vec![243, 243, 243, 243, 243, 243, 243, 243, 243, 243, 243, 243, 243, 243, 243],
        vec![243, 243, 243, 243, 243, 243, 243, 243, 243, 243, 243, 243, 243, 243, 243],
        vec![243, 243, 243, 243, 243, 243, 243, 243, 243, 243, 243, 243, 243, 243, 243],
        vec![243, 218, 243, 243, 243, 243, 243, 243, 243, 243, 243, 244, 243, 243, 243],
        vec![243, 243, 243, 243, 243, 243, 243, 243, 243, 243, 243, 243, 243, 243, 243],
    ]
}

fn house_layer() -> TileLayer {
    vec![
        vec![0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        vec![0, 0, 0, 0, 0, 26, 27, 28, 29, 30, 31, 0, 0, 0, 0],
        vec![0, 0, 0, 0, 0, 51, 52, 53, 54, 55, 56, 0, 0, 0, 0],
        vec![0, 0, 0, 0, 0, 76, 77, 78, 79, 80, 81, 0, 0, 0, 0],
        vec![0, 0, 0, 0, 0, 101, 102, 103, 104, 105, 106, 0, 0, 0, 0],

        vec![0, 0, 0, 0, 0, 126, 127, 128, 129, 130, 131, 0, 0, 0, 0],
        vec![0, 0, 0, 0, 0, 303, 303, 245, 242, 303, 303, 0, 0, 0, 0],
        vec![0, 0, 0, 0, 0, 0, 0, 245, 242, 0, 0, 0, 0, 0, 0],
        vec![0, 0, 0, 0, 0, 0, 0, 245, 242, 0, 0, 0, 0, 0, 0],
        vec![0, 0, 0, 0, 0, 0, 0, 245, 242, 0, 0, 0, 0, 0, 0],

        vec![0, 0, 0, 0, 0, 0, 0, 245, 242, 0, 0, 0, 0, 0, 0],
        vec![0, 0, 0, 0, 0, 0, 0, 245, 242, 0, 0, 0, 0, 0, 0],
        vec![0, 0, 0, 0, 0, 0, 0, 245, 242, 0, 0, 0, 0, 0, 0],
        vec![0, 0, 0, 0, 0, 0, 0, 245, 242, 0, 0, 0, 0, 0, 0],
        vec![0, 0, 0, 0, 0, 0, 0, 245, 242, 0, 0, 0, 0, 0, 0],
    ]
}

fn textbox_layer() -> TileLayer {
    vec![vec![400; 15]; 5]
}

//=========================================================================
// Unit Tests
//=========================================================================
