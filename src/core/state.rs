//=========================================================================
// Game State
//=========================================================================
//
// Everything one tick reads and writes: frame counter, player position,
// the tick's input snapshot, the canonical layer stacks and the textbox
// flag.
//
// Created once at startup, mutated in place by the update loop, read by
// the render loop.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::config::{BoundaryPolicy, GameConfig};
use crate::core::grid::LayerStack;
use crate::core::input::InputSnapshot;
use crate::core::level::Level;

//=== Position ============================================================

/// Player location in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Moves by whole units with fixed-point granularity.
    ///
    /// Each axis is truncated toward zero to an integer before the step is
    /// added, so any fractional part is dropped on the first move.
    pub fn advance(&mut self, dx: i64, dy: i64) {
        self.x = (self.x as i64).saturating_add(dx) as f64;
        self.y = (self.y as i64).saturating_add(dy) as f64;
    }

    /// Applies a boundary policy in place.
    ///
    /// An inverted or NaN range never panics; [`GameConfig::validate`]
    /// rejects such ranges before the game starts.
    pub fn constrain(&mut self, policy: BoundaryPolicy) {
        if let BoundaryPolicy::Clamp { min_x, min_y, max_x, max_y } = policy {
            self.x = self.x.max(min_x).min(max_x);
            self.y = self.y.max(min_y).min(max_y);
        }
    }
}

//=== GameState ===========================================================

/// Mutable state of the running game.
#[derive(Debug, Clone)]
pub struct GameState {
    frame_count: u64,
    player: Position,
    input: InputSnapshot,
    world: LayerStack,
    textbox: LayerStack,
    textbox_visible: bool,
}

impl GameState {
    //--- Construction -----------------------------------------------------

    /// Starts with the player at the screen center and frame 0.
    pub fn new(level: Level, config: &GameConfig) -> Self {
        let (x, y) = config.screen_center();
        let (world, textbox) = level.into_stacks();

        Self {
            frame_count: 0,
            player: Position::new(x, y),
            input: InputSnapshot::default(),
            world,
            textbox,
            textbox_visible: config.textbox_visible,
        }
    }

    //--- Tick Mutation ----------------------------------------------------

    pub(crate) fn begin_tick(&mut self, snapshot: InputSnapshot) {
        self.input = snapshot;
        self.frame_count = self.frame_count.wrapping_add(1);
    }

    pub(crate) fn player_mut(&mut self) -> &mut Position {
        &mut self.player
    }

    /// Drops the tick's input once it has been consumed.
    pub(crate) fn clear_input(&mut self) {
        self.input.clear();
    }

    //--- Textbox ----------------------------------------------------------

    pub fn set_textbox_visible(&mut self, visible: bool) {
        self.textbox_visible = visible;
    }

    pub fn toggle_textbox(&mut self) {
        self.textbox_visible = !self.textbox_visible;
    }

    //--- Accessors --------------------------------------------------------

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn player(&self) -> Position {
        self.player
    }

    pub fn input(&self) -> &InputSnapshot {
        &self.input
    }

    pub fn world(&self) -> &LayerStack {
        &self.world
    }

    pub fn textbox(&self) -> &LayerStack {
        &self.textbox
    }

    pub fn textbox_visible(&self) -> bool {
        self.textbox_visible
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::KeyCode;

    fn state() -> GameState {
        GameState::new(Level::builtin().unwrap(), &GameConfig::default())
    }

    //=====================================================================
    // Position Tests
    //=====================================================================

    #[test]
    fn advance_adds_whole_steps() {
        let mut position = Position::new(120.0, 120.0);
        position.advance(-1, 0);
        assert_eq!(position, Position::new(119.0, 120.0));
    }

    #[test]
    fn advance_truncates_toward_zero_before_adding() {
        let mut position = Position::new(10.75, -3.25);
        position.advance(1, 0);
        assert_eq!(position, Position::new(11.0, -3.0));
    }

    #[test]
    fn advance_drops_negative_fractions_toward_zero() {
        let mut position = Position::new(-0.5, -2.5);
        position.advance(0, 0);
        assert_eq!(position, Position::new(0.0, -2.0));
    }

    #[test]
    fn fractional_clamp_then_step_truncates() {
        let mut position = Position::new(-10.0, 0.0);
        position.constrain(BoundaryPolicy::Clamp {
            min_x: -4.5,
            min_y: 0.0,
            max_x: 240.0,
            max_y: 240.0,
        });
        assert_eq!(position.x, -4.5);

        position.advance(-1, 0);
        assert_eq!(position, Position::new(-5.0, 0.0));
    }

    #[test]
    fn advance_allows_negative_positions() {
        let mut position = Position::new(0.0, 0.0);
        position.advance(-1, -1);
        assert_eq!(position, Position::new(-1.0, -1.0));
    }

    #[test]
    fn unbounded_policy_is_noop() {
        let mut position = Position::new(-500.0, 9000.0);
        position.constrain(BoundaryPolicy::Unbounded);
        assert_eq!(position, Position::new(-500.0, 9000.0));
    }

    #[test]
    fn clamp_policy_limits_both_axes() {
        let mut position = Position::new(-5.0, 300.0);
        position.constrain(BoundaryPolicy::Clamp {
            min_x: 0.0,
            min_y: 0.0,
            max_x: 240.0,
            max_y: 240.0,
        });
        assert_eq!(position, Position::new(0.0, 240.0));
    }

    //=====================================================================
    // GameState Tests
    //=====================================================================

    #[test]
    fn starts_centered_at_frame_zero() {
        let state = state();
        assert_eq!(state.player(), Position::new(120.0, 120.0));
        assert_eq!(state.frame_count(), 0);
        assert!(state.input().is_empty());
        assert!(state.textbox_visible());
    }

    #[test]
    fn begin_tick_stores_snapshot_and_counts() {
        let mut state = state();
        state.begin_tick(InputSnapshot::held_only(vec![KeyCode::ArrowUp]));

        assert_eq!(state.frame_count(), 1);
        assert_eq!(state.input().latest(), Some(KeyCode::ArrowUp));

        state.clear_input();
        assert!(state.input().is_empty());
    }

    #[test]
    fn textbox_flag_is_settable() {
        let mut state = state();

        state.set_textbox_visible(false);
        assert!(!state.textbox_visible());

        state.toggle_textbox();
        assert!(state.textbox_visible());
    }
}
