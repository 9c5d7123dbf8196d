//=========================================================================
// Input Buffer
//
// Per-frame store of key events between the winit callbacks and the
// redraw that flushes them to the core.
//
// Notes:
// Consecutive identical events are collapsed. The buffer keeps its
// allocation across frames.
//=========================================================================

//=== Internal Modules ====================================================
use crate::core::input::InputEvent;

//=== InputBuffer =========================================================
pub(crate) struct InputBuffer {
    events: Vec<InputEvent>,
}

impl InputBuffer {
    pub fn new() -> Self {
        const BASE_CAPACITY: usize = 64;

        Self {
            events: Vec::with_capacity(BASE_CAPACITY),
        }
    }

    //--- push() -----------------------------------------------------------
    //
    // Appends an event in arrival order, ignoring an exact repeat of the
    // previous one.
    //
    pub fn push(&mut self, event: InputEvent) {
        if self.events.last() != Some(&event) {
            self.events.push(event);
        }
    }

    //--- drain() ----------------------------------------------------------
    //
    // Hands the frame's events out, or `None` when nothing arrived so
    // empty batches never reach the channel.
    //
    pub fn drain(&mut self) -> Option<Vec<InputEvent>> {
        if self.events.is_empty() {
            return None;
        }
        Some(self.events.drain(..).collect())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
