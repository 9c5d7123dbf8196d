//=========================================================================
// Update Loop
//=========================================================================
//
// Advances the game state by exactly one tick.
//
// Each tick:
//  1. Stores the captured input snapshot and increments the frame counter
//  2. Handles press-edge actions (textbox toggle, quit)
//  3. Resolves the latest held key into a single-axis step
//  4. Moves the player with integer accumulation
//  5. Applies the boundary policy (unbounded by default)
//
//=========================================================================

//=== External Crates =====================================================

use log::{info, trace};

//=== Internal Dependencies ===============================================

use crate::core::config::{BoundaryPolicy, GameConfig};
use crate::core::input::{Action, InputSnapshot, KeyBindings};
use crate::core::platform_bridge::TickControl;
use crate::core::state::GameState;

//=== UpdateLoop ==========================================================

/// Per-tick movement rules.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UpdateLoop {
    step: i64,
    boundary: BoundaryPolicy,
}

impl UpdateLoop {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            step: config.movement_step,
            boundary: config.boundary,
        }
    }

    /// Runs one tick against `state`.
    ///
    /// Returns [`TickControl::Exit`] when the quit action was pressed.
    pub fn tick(
        &self,
        state: &mut GameState,
        snapshot: InputSnapshot,
        bindings: &KeyBindings,
    ) -> TickControl {
        state.begin_tick(snapshot);

        if bindings.was_triggered(state.input(), Action::Quit) {
            info!(target: "core", "Quit requested at frame {}", state.frame_count());
            return TickControl::Exit;
        }

        if bindings.was_triggered(state.input(), Action::ToggleTextbox) {
            state.toggle_textbox();
            info!(target: "core", "Textbox visible: {}", state.textbox_visible());
        }

        let direction = bindings.resolve_direction(state.input());
        let (dx, dy) = direction.map_or((0, 0), |d| d.step(self.step));

        let player = state.player_mut();
        player.advance(dx, dy);
        player.constrain(self.boundary);

        trace!(
            target: "core",
            "Tick {}: direction {:?} → player ({}, {})",
            state.frame_count(),
            direction,
            state.player().x,
            state.player().y
        );

        TickControl::Continue
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::KeyCode;
    use crate::core::level::Level;
    use crate::core::state::Position;

    fn setup(config: &GameConfig) -> (UpdateLoop, GameState, KeyBindings) {
        (
            UpdateLoop::new(config),
            GameState::new(Level::builtin().unwrap(), config),
            KeyBindings::default(),
        )
    }

    fn held(keys: &[KeyCode]) -> InputSnapshot {
        InputSnapshot::held_only(keys.to_vec())
    }

    //=====================================================================
    // Movement Tests
    //=====================================================================

    #[test]
    fn idle_tick_only_counts_frames() {
        let config = GameConfig::default();
        let (update, mut state, bindings) = setup(&config);

        let control = update.tick(&mut state, InputSnapshot::default(), &bindings);

        assert_eq!(control, TickControl::Continue);
        assert_eq!(state.frame_count(), 1);
        assert_eq!(state.player(), Position::new(120.0, 120.0));
    }

    #[test]
    fn each_direction_moves_one_unit() {
        let config = GameConfig::default();
        let cases = [
            (KeyCode::ArrowLeft, Position::new(119.0, 120.0)),
            (KeyCode::ArrowRight, Position::new(121.0, 120.0)),
            (KeyCode::ArrowUp, Position::new(120.0, 119.0)),
            (KeyCode::ArrowDown, Position::new(120.0, 121.0)),
        ];

        for (key, expected) in cases {
            let (update, mut state, bindings) = setup(&config);
            update.tick(&mut state, held(&[key]), &bindings);
            assert_eq!(state.player(), expected, "{:?}", key);
        }
    }

    #[test]
    fn last_pressed_key_wins_over_held_keys() {
        let config = GameConfig::default();
        let (update, mut state, bindings) = setup(&config);

        update.tick(&mut state, held(&[KeyCode::ArrowUp, KeyCode::ArrowLeft]), &bindings);

        assert_eq!(state.player().x, 119.0, "Only X changes");
        assert_eq!(state.player().y, 120.0, "Y is unchanged");
    }

    #[test]
    fn movement_accumulates_over_ticks() {
        let config = GameConfig::default();
        let (update, mut state, bindings) = setup(&config);

        for _ in 0..5 {
            update.tick(&mut state, held(&[KeyCode::KeyD]), &bindings);
        }

        assert_eq!(state.frame_count(), 5);
        assert_eq!(state.player(), Position::new(125.0, 120.0));
    }

    #[test]
    fn custom_step_size() {
        let config = GameConfig { movement_step: 4, ..GameConfig::default() };
        let (update, mut state, bindings) = setup(&config);

        update.tick(&mut state, held(&[KeyCode::ArrowDown]), &bindings);

        assert_eq!(state.player(), Position::new(120.0, 124.0));
    }

    #[test]
    fn position_is_unbounded_by_default() {
        let config = GameConfig::default();
        let (update, mut state, bindings) = setup(&config);

        for _ in 0..200 {
            update.tick(&mut state, held(&[KeyCode::ArrowLeft]), &bindings);
        }

        assert_eq!(state.player().x, -80.0);
    }

    #[test]
    fn clamp_boundary_is_applied() {
        let config = GameConfig {
            boundary: BoundaryPolicy::Clamp { min_x: 118.0, min_y: 0.0, max_x: 240.0, max_y: 240.0 },
            ..GameConfig::default()
        };
        let (update, mut state, bindings) = setup(&config);

        for _ in 0..5 {
            update.tick(&mut state, held(&[KeyCode::ArrowLeft]), &bindings);
        }

        assert_eq!(state.player().x, 118.0);
    }

    //=====================================================================
    // Action Tests
    //=====================================================================

    #[test]
    fn toggle_textbox_on_press_edge_only() {
        let config = GameConfig::default();
        let (update, mut state, bindings) = setup(&config);
        assert!(state.textbox_visible());

        let press = InputSnapshot::new(vec![KeyCode::Space], vec![KeyCode::Space]);
        update.tick(&mut state, press, &bindings);
        assert!(!state.textbox_visible());

        update.tick(&mut state, held(&[KeyCode::Space]), &bindings);
        assert!(!state.textbox_visible(), "Holding Space must not toggle again");
    }

    #[test]
    fn quit_press_exits() {
        let config = GameConfig::default();
        let (update, mut state, bindings) = setup(&config);

        let press = InputSnapshot::new(vec![KeyCode::Escape], vec![KeyCode::Escape]);

        assert_eq!(update.tick(&mut state, press, &bindings), TickControl::Exit);
    }
}
