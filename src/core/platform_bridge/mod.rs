//=========================================================================
// Platform Bridge
//=========================================================================
//
// Bridges the platform layer (winit) with the core game loop.
//
// The platform pushes events into a channel as they arrive; the core
// drains it at the tick boundary. Core code never touches winit types.
//
// Components:
// - `interface`: Event types crossing the bridge
// - `event_collector`: Core-side draining into per-tick batches
//
//=========================================================================

//=== Module Declarations =================================================

pub(crate) mod event_collector;
pub(crate) mod interface;

//=== Internal API ========================================================

pub(crate) use event_collector::EventCollector;
pub use event_collector::TickControl;
pub(crate) use interface::PlatformEvent;
