//=========================================================================
// Platform Bridge Interface
//=========================================================================
//
// Messages the platform layer queues for the core game loop.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::input::InputEvent;

//=== PlatformEvent =======================================================

/// Events sent from the platform layer to the core loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PlatformEvent {
    /// Keyboard events buffered during one frame, in arrival order.
    Inputs(Vec<InputEvent>),

    /// Window close requested by user or OS.
    WindowClosed,
}
