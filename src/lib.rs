//=========================================================================
// tilewalk — Library Root
//
// A tile-scrolling game loop: layered tile backgrounds scroll beneath an
// animated player sprite that stays anchored at the screen center.
//
// Responsibilities:
// - Expose the engine facade (`EngineBuilder`, `Engine`)
// - Expose the platform-independent core (grid shifting, layers, game
//   state, update and render loops) for reuse and testing
// - Keep windowing and the pixel surface (`platform`) private
//
// Typical usage:
// ```no_run
// use tilewalk::EngineBuilder;
//
// fn main() -> Result<(), tilewalk::EngineError> {
//     EngineBuilder::new().build().run()
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds everything that does not touch winit or the GPU surface.
// `assets` decodes the sprite sheets the renderer draws from.
//
pub mod assets;
pub mod core;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` owns the window, the pixel surface and the fixed-timestep
// schedule. `engine` wires everything together.
//
mod engine;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use engine::{Engine, EngineBuilder, EngineError};
pub use platform::PlatformError;
