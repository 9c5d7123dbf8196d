//=========================================================================
// Input System
//
// High-level interface for keyboard input within the game loop.
//
// Responsibilities:
// - Digest the batches of `InputEvent`s collected for one tick
// - Keep held keys in press order across ticks
// - Capture the tick's `InputSnapshot` and resolve it through bindings
//
// Notes:
// This system is owned and updated by the core orchestrator. It never
// sees winit types; the platform layer converts them first.
//
//=========================================================================

//=== Submodules ==========================================================

pub mod action;
pub mod bindings;
pub mod event;
pub mod snapshot;
pub mod state_tracker;

//=== Public API ==========================================================

pub use action::{Action, Direction};
pub use bindings::KeyBindings;
pub use event::{InputEvent, KeyCode, Modifiers};
pub use snapshot::InputSnapshot;
pub use state_tracker::PressOrderTracker;

//=== External Crates =====================================================

use log::debug;

//=== InputSystem =========================================================

/// Owns the press-order tracker and the key bindings.
#[derive(Debug, Default)]
pub struct InputSystem {
    tracker: PressOrderTracker,
    bindings: KeyBindings,
}

impl InputSystem {
    //--- Construction -----------------------------------------------------

    pub fn new(bindings: KeyBindings) -> Self {
        Self {
            tracker: PressOrderTracker::new(),
            bindings,
        }
    }

    //--- process_frame() -------------------------------------------------
    //
    // Consumes every batch collected this tick and returns the snapshot
    // the update loop works from.
    //
    pub fn process_frame(&mut self, batches: &[Vec<InputEvent>]) -> InputSnapshot {
        self.tracker.clear();
        for batch in batches {
            self.tracker.process_events(batch);
        }

        let snapshot = self.tracker.snapshot();
        if !snapshot.pressed().is_empty() {
            debug!(target: "core::input", "Held keys: {:?}", snapshot.held());
        }
        snapshot
    }

    //--- Query Methods ----------------------------------------------------

    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    pub fn bindings_mut(&mut self) -> &mut KeyBindings {
        &mut self.bindings
    }

    pub fn tracker(&self) -> &PressOrderTracker {
        &self.tracker
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
