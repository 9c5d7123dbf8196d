//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use tilewalk::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Engine
pub use crate::engine::{Engine, EngineBuilder, EngineError};

// Configuration and level data
pub use crate::core::config::{
    AssetPaths, BoundaryPolicy, ConfigError, GameConfig, ZeroShiftPolicy,
};
pub use crate::core::grid::{LayerError, LayerStack, TileIndex, TileLayer, TileRow};
pub use crate::core::level::Level;

// Input
pub use crate::core::input::{Action, Direction, KeyBindings, KeyCode, Modifiers};

// Simulation and drawing
pub use crate::core::render::{Canvas, DrawCall, Rect, RenderLoop, Sprite};
pub use crate::core::state::{GameState, Position};
pub use crate::core::update::UpdateLoop;
pub use crate::core::TickControl;
