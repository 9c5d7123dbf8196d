//=========================================================================
// Core Game Loop
//=========================================================================
//
// Platform-independent half of the game: grid scrolling, layer storage,
// per-tick simulation and draw-call generation.
//
// Responsibilities:
// - Drain platform events at the tick boundary
// - Turn raw key events into an input snapshot
// - Run exactly one update followed by one render per tick
//
// Architecture:
//   EventCollector → InputSystem → UpdateLoop → RenderLoop → Canvas
//
// Notes:
// Everything here runs on the platform thread, driven by the host's
// fixed-timestep redraw schedule. Core code never touches winit or the
// pixel surface directly; drawing goes through the `Canvas` trait.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod config;
pub mod grid;
pub mod input;
pub mod level;
pub(crate) mod platform_bridge;
pub mod render;
pub mod state;
pub mod tps;
pub mod update;

//=== Standard Library Imports ============================================

use std::time::Instant;

//=== External Crates =====================================================

use crossbeam_channel::Receiver;
use log::info;

//=== Internal Modules ====================================================

use config::GameConfig;
use input::{InputSystem, KeyBindings};
use level::Level;
use platform_bridge::{EventCollector, PlatformEvent};
use render::{Canvas, RenderLoop};
use state::GameState;
use tps::TpsCounter;
use update::UpdateLoop;

pub use platform_bridge::TickControl;

//=== GameLoop ============================================================

/// Owns every core system and advances them one tick at a time.
pub(crate) struct GameLoop {
    collector: EventCollector,
    input: InputSystem,
    state: GameState,
    update: UpdateLoop,
    render: RenderLoop,
    tps: TpsCounter,
}

impl GameLoop {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new(
        receiver: Receiver<PlatformEvent>,
        level: Level,
        config: GameConfig,
        bindings: KeyBindings,
    ) -> Self {
        Self {
            collector: EventCollector::new(receiver),
            input: InputSystem::new(bindings),
            state: GameState::new(level, &config),
            update: UpdateLoop::new(&config),
            render: RenderLoop::new(config),
            tps: TpsCounter::new(),
        }
    }

    //--- advance() --------------------------------------------------------
    //
    // One fixed tick:
    //  1. Drains queued platform events
    //  2. Builds the input snapshot
    //  3. Runs the update loop
    //  4. Renders into `canvas`
    //
    // Rendering is skipped once the tick asks to exit.
    //
    pub(crate) fn advance<C: Canvas>(&mut self, canvas: &mut C, now: Instant) -> TickControl {
        if self.collector.collect_frame() == TickControl::Exit {
            info!(target: "core", "Platform closed; stopping at frame {}", self.state.frame_count());
            return TickControl::Exit;
        }

        let snapshot = self.input.process_frame(self.collector.batches());

        if self.update.tick(&mut self.state, snapshot, self.input.bindings()) == TickControl::Exit {
            return TickControl::Exit;
        }

        self.tps.record(now);
        self.render.render(&mut self.state, canvas, self.tps.current());

        TickControl::Continue
    }

    pub(crate) fn state(&self) -> &GameState {
        &self.state
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::{InputEvent, KeyCode, Modifiers};
    use crate::core::render::DrawCall;
    use crossbeam_channel::{unbounded, Sender};

    #[derive(Default)]
    struct CountingCanvas {
        frames: usize,
        draws: usize,
        overlay: Option<String>,
    }

    impl Canvas for CountingCanvas {
        fn clear(&mut self) {
            self.frames += 1;
        }

        fn draw(&mut self, _call: DrawCall) {
            self.draws += 1;
        }

        fn debug_print(&mut self, text: &str) {
            self.overlay = Some(text.to_owned());
        }
    }

    fn game() -> (Sender<PlatformEvent>, GameLoop) {
        let (tx, rx) = unbounded();
        let game = GameLoop::new(
            rx,
            Level::builtin().unwrap(),
            GameConfig::default(),
            KeyBindings::default(),
        );
        (tx, game)
    }

    fn down(key: KeyCode) -> InputEvent {
        InputEvent::KeyDown { key, modifiers: Modifiers::NONE }
    }

    fn up(key: KeyCode) -> InputEvent {
        InputEvent::KeyUp { key, modifiers: Modifiers::NONE }
    }

    //=====================================================================
    // Tick Sequencing
    //=====================================================================

    #[test]
    fn idle_tick_renders_one_frame() {
        let (_tx, mut game) = game();
        let mut canvas = CountingCanvas::default();

        assert_eq!(game.advance(&mut canvas, Instant::now()), TickControl::Continue);

        assert_eq!(canvas.frames, 1);
        // 2 world layers × 225 tiles + player + textbox
        assert_eq!(canvas.draws, 2 * 225 + 2);
        assert_eq!(canvas.overlay.as_deref(), Some("TPS: 0.00"));
        assert_eq!(game.state().frame_count(), 1);
    }

    #[test]
    fn held_key_moves_player_every_tick() {
        let (tx, mut game) = game();
        let mut canvas = CountingCanvas::default();

        tx.send(PlatformEvent::Inputs(vec![down(KeyCode::ArrowRight)])).unwrap();
        game.advance(&mut canvas, Instant::now());
        assert_eq!(game.state().player().x, 121.0);

        game.advance(&mut canvas, Instant::now());
        assert_eq!(game.state().player().x, 122.0, "Held key keeps moving without new events");

        tx.send(PlatformEvent::Inputs(vec![up(KeyCode::ArrowRight)])).unwrap();
        game.advance(&mut canvas, Instant::now());
        assert_eq!(game.state().player().x, 122.0);
        assert_eq!(game.state().player().y, 120.0);
    }

    #[test]
    fn input_is_cleared_after_render() {
        let (tx, mut game) = game();
        let mut canvas = CountingCanvas::default();

        tx.send(PlatformEvent::Inputs(vec![down(KeyCode::KeyW)])).unwrap();
        game.advance(&mut canvas, Instant::now());

        assert!(game.state().input().is_empty());
        assert_eq!(game.state().player().y, 119.0);
    }

    //=====================================================================
    // Exit Paths
    //=====================================================================

    #[test]
    fn escape_exits_without_rendering() {
        let (tx, mut game) = game();
        let mut canvas = CountingCanvas::default();

        tx.send(PlatformEvent::Inputs(vec![down(KeyCode::Escape)])).unwrap();

        assert_eq!(game.advance(&mut canvas, Instant::now()), TickControl::Exit);
        assert_eq!(canvas.frames, 0);
    }

    #[test]
    fn window_close_exits() {
        let (tx, mut game) = game();
        let mut canvas = CountingCanvas::default();

        tx.send(PlatformEvent::WindowClosed).unwrap();

        assert_eq!(game.advance(&mut canvas, Instant::now()), TickControl::Exit);
        assert_eq!(game.state().frame_count(), 0);
    }

    #[test]
    fn space_hides_textbox() {
        let (tx, mut game) = game();
        let mut canvas = CountingCanvas::default();

        tx.send(PlatformEvent::Inputs(vec![down(KeyCode::Space)])).unwrap();
        game.advance(&mut canvas, Instant::now());

        assert!(!game.state().textbox_visible());
        assert_eq!(canvas.draws, 2 * 225 + 1);
    }
}
