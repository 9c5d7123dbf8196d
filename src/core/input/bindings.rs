//=========================================================================
// Key Bindings
//=========================================================================
//
// Maps physical keys to game actions.
//
// Architecture:
//   KeyCode → HashMap → Action
//
// Direction policy: only the most recently pressed key that is still held
// is considered. If that key is bound to a move action it sets the
// direction for the tick; otherwise the player does not move, even when
// other held keys are movement keys.
//
//=========================================================================

//=== Standard Library ====================================================

use std::collections::HashMap;

//=== Internal Dependencies ===============================================

use super::{
    action::{Action, Direction},
    event::KeyCode,
    snapshot::InputSnapshot,
};

//=== KeyBindings =========================================================

/// Key → action table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBindings {
    keys: HashMap<KeyCode, Action>,
}

impl KeyBindings {
    /// Creates an empty table.
    pub fn empty() -> Self {
        Self { keys: HashMap::new() }
    }

    //--- Binding API ------------------------------------------------------

    /// Binds `key` to `action`, replacing any previous binding of `key`.
    pub fn bind_key(&mut self, key: KeyCode, action: Action) {
        self.keys.insert(key, action);
    }

    /// Removes the binding of `key`, if any.
    pub fn unbind_key(&mut self, key: KeyCode) {
        self.keys.remove(&key);
    }

    /// Removes every key bound to `action`.
    pub fn unbind_action(&mut self, action: Action) {
        self.keys.retain(|_, bound| *bound != action);
    }

    //--- Mapping ----------------------------------------------------------

    pub fn map_key(&self, key: KeyCode) -> Option<Action> {
        self.keys.get(&key).copied()
    }

    /// Direction of this tick, decided by the latest held key only.
    pub fn resolve_direction(&self, snapshot: &InputSnapshot) -> Option<Direction> {
        match self.map_key(snapshot.latest()?)? {
            Action::Move(direction) => Some(direction),
            _ => None,
        }
    }

    /// Returns `true` if a key bound to `action` went down this tick.
    pub fn was_triggered(&self, snapshot: &InputSnapshot, action: Action) -> bool {
        snapshot
            .pressed()
            .iter()
            .any(|key| self.map_key(*key) == Some(action))
    }
}

impl Default for KeyBindings {
    /// Arrows and WASD move, Space toggles the textbox, Escape quits.
    fn default() -> Self {
        let mut bindings = Self::empty();

        bindings.bind_key(KeyCode::ArrowUp, Action::Move(Direction::Up));
        bindings.bind_key(KeyCode::ArrowDown, Action::Move(Direction::Down));
        bindings.bind_key(KeyCode::ArrowLeft, Action::Move(Direction::Left));
        bindings.bind_key(KeyCode::ArrowRight, Action::Move(Direction::Right));

        bindings.bind_key(KeyCode::KeyW, Action::Move(Direction::Up));
        bindings.bind_key(KeyCode::KeyS, Action::Move(Direction::Down));
        bindings.bind_key(KeyCode::KeyA, Action::Move(Direction::Left));
        bindings.bind_key(KeyCode::KeyD, Action::Move(Direction::Right));

        bindings.bind_key(KeyCode::Space, Action::ToggleTextbox);
        bindings.bind_key(KeyCode::Escape, Action::Quit);

        bindings
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
