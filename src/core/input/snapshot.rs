//=========================================================================
// Input Snapshot
//=========================================================================
//
// Keys held at one tick, captured once and consumed by the update loop.
//
//=========================================================================

use super::event::KeyCode;

/// Keys held this tick in press order (most recent last), plus the keys
/// that went down during the tick.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InputSnapshot {
    held: Vec<KeyCode>,
    pressed: Vec<KeyCode>,
}

impl InputSnapshot {
    pub fn new(held: Vec<KeyCode>, pressed: Vec<KeyCode>) -> Self {
        Self { held, pressed }
    }

    /// Snapshot of keys that are held without any new press edge.
    pub fn held_only(held: Vec<KeyCode>) -> Self {
        Self::new(held, Vec::new())
    }

    pub fn held(&self) -> &[KeyCode] {
        &self.held
    }

    pub fn pressed(&self) -> &[KeyCode] {
        &self.pressed
    }

    /// Most recently pressed key that is still held.
    pub fn latest(&self) -> Option<KeyCode> {
        self.held.last().copied()
    }

    pub fn was_pressed(&self, key: KeyCode) -> bool {
        self.pressed.contains(&key)
    }

    pub fn is_empty(&self) -> bool {
        self.held.is_empty() && self.pressed.is_empty()
    }

    /// Drops all keys, keeping allocations.
    pub fn clear(&mut self) {
        self.held.clear();
        self.pressed.clear();
    }
}
