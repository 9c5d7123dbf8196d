//=========================================================================
// Actions & Directions
//=========================================================================
//
// Game commands produced from key bindings.
//
//=========================================================================

//=== Direction ===========================================================

/// Cardinal movement direction.
///
/// Screen coordinates: X grows to the right, Y grows downwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Per-axis step of `amount` units; exactly one axis is non-zero.
    pub fn step(self, amount: i64) -> (i64, i64) {
        match self {
            Self::Up => (0, -amount),
            Self::Down => (0, amount),
            Self::Left => (-amount, 0),
            Self::Right => (amount, 0),
        }
    }
}

//=== Action ==============================================================

/// High-level command bound to a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Walk one step per tick while the key is the latest held.
    Move(Direction),

    /// Show or hide the textbox overlay (on press).
    ToggleTextbox,

    /// Leave the game loop (on press).
    Quit,
}

//=========================================================================
// Unit Tests
//=========================================================================
