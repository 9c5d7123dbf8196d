//=========================================================================
// Press Order Tracker
//=========================================================================
//
// Tracks which keys are held and the order in which they went down.
//
// Architecture:
//   InputEvent → process_events() → held (Vec, press order) → snapshot()
//
// Tick lifecycle: clear() → process_events() → snapshot()
//
// The held list is the contract for direction resolution: the last entry
// is the most recently pressed key that is still held.
//
//=========================================================================

//=== Standard Library ====================================================

use std::collections::HashSet;

//=== Internal Dependencies ===============================================

use super::event::{InputEvent, KeyCode, Modifiers};
use super::snapshot::InputSnapshot;

//=== PressOrderTracker ===================================================

/// Persistent held-key state plus per-tick press/release edges.
#[derive(Debug, Default)]
pub struct PressOrderTracker {
    //--- Persistent State (survives tick boundary) -----------------------
    held: Vec<KeyCode>,
    modifiers: Modifiers,

    //--- Tick Deltas (reset each tick via clear()) -----------------------
    pressed_this_tick: Vec<KeyCode>,
    released_this_tick: HashSet<KeyCode>,
}

impl PressOrderTracker {
    pub fn new() -> Self {
        Self::default()
    }

    //--- Tick Processing --------------------------------------------------

    /// Clears per-tick edges; held keys are kept.
    pub(crate) fn clear(&mut self) {
        self.pressed_this_tick.clear();
        self.released_this_tick.clear();
    }

    /// Applies events in arrival order.
    pub(crate) fn process_events(&mut self, events: &[InputEvent]) {
        for event in events {
            self.process_event(event);
        }
    }

    /// Copies the current held keys and this tick's presses.
    pub(crate) fn snapshot(&self) -> InputSnapshot {
        InputSnapshot::new(self.held.clone(), self.pressed_this_tick.clone())
    }

    //--- Internal Helpers -------------------------------------------------

    fn process_event(&mut self, event: &InputEvent) {
        match event {
            InputEvent::KeyDown { key, modifiers } => {
                self.modifiers = *modifiers;
                // A key already held is a repeat, not a new press.
                if !self.held.contains(key) {
                    self.held.push(*key);
                    self.pressed_this_tick.push(*key);
                }
            }

            InputEvent::KeyUp { key, modifiers } => {
                self.modifiers = *modifiers;
                if let Some(index) = self.held.iter().position(|k| k == key) {
                    self.held.remove(index);
                    self.released_this_tick.insert(*key);
                }
            }

            InputEvent::Unidentified => {}
        }
    }

    //=====================================================================
    // Query API
    //=====================================================================

    /// Returns `true` while `key` is held.
    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.held.contains(&key)
    }

    /// Returns `true` if `key` went down during this tick.
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.pressed_this_tick.contains(&key)
    }

    /// Returns `true` if `key` went up during this tick.
    pub fn is_key_released(&self, key: KeyCode) -> bool {
        self.released_this_tick.contains(&key)
    }

    /// Held keys, oldest press first.
    pub fn held(&self) -> &[KeyCode] {
        &self.held
    }

    /// Most recently pressed key that is still held.
    pub fn latest(&self) -> Option<KeyCode> {
        self.held.last().copied()
    }

    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
