//=========================================================================
// Render Loop
//=========================================================================
//
// Turns the game state into draw calls once per tick.
//
// Architecture:
//   GameState ──duplicate()──> draft layers ──scroll_layers()──> shifted
//        │                                                          │
//        └──> player frame, textbox flag          tile draw calls <─┘
//                              ↓
//                        Canvas (backend)
//
// The player never moves on screen: it is drawn at the screen center and
// the world is shifted underneath it by the player's displacement from
// that anchor. The canonical layers are never mutated; every frame works
// on its own duplicate which is dropped when the frame ends.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::trace;

//=== Internal Dependencies ===============================================

use crate::core::config::{GameConfig, ZeroShiftPolicy};
use crate::core::grid::{
    shift_grid_down, shift_grid_up, shift_row_left, shift_row_right, LayerStack, TileIndex,
};
use crate::core::state::GameState;

//=== Draw Primitives =====================================================

/// Which loaded texture a draw call samples from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sprite {
    Tiles,
    Runner,
    Textbox,
}

/// Pixel rectangle inside a texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }
}

/// Copy `source` of `sprite` (or the whole texture) to screen `dest`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawCall {
    pub sprite: Sprite,
    pub source: Option<Rect>,
    pub dest: (i32, i32),
}

/// Rendering backend used by the render loop.
pub trait Canvas {
    /// Resets the frame before any draw call.
    fn clear(&mut self);

    /// Draws one texture region at a translated screen position.
    fn draw(&mut self, call: DrawCall);

    /// Shows a diagnostics line (ticks per second).
    fn debug_print(&mut self, text: &str);
}

//=== Layer Scrolling =====================================================

/// Shifts every layer of `stack` opposite to the player's displacement.
///
/// A positive horizontal displacement shifts rows right (content moves
/// towards column 0), a negative one shifts them left. A positive
/// vertical displacement shifts rows up, a negative one down. Magnitudes
/// are truncated to whole cells. A zero displacement on an axis follows
/// `zero`.
pub fn scroll_layers(
    stack: &mut LayerStack,
    displacement: (f64, f64),
    fill: TileIndex,
    zero: ZeroShiftPolicy,
) {
    let (dx, dy) = displacement;

    for layer in stack.layers_mut() {
        if dx == 0.0 {
            if zero.fills_horizontal() {
                layer.iter_mut().for_each(|row| row.fill(fill));
            }
        } else {
            let cells = dx.abs() as usize;
            for row in layer.iter_mut() {
                *row = if dx > 0.0 {
                    shift_row_right(row, cells, fill)
                } else {
                    shift_row_left(row, cells, fill)
                };
            }
        }

        if dy == 0.0 {
            if zero.fills_vertical() {
                layer.iter_mut().for_each(|row| row.fill(fill));
            }
        } else {
            let cells = dy.abs() as usize;
            *layer = if dy > 0.0 {
                shift_grid_up(layer, cells, fill)
            } else {
                shift_grid_down(layer, cells, fill)
            };
        }
    }
}

//=== RenderLoop ==========================================================

/// Produces the draw calls of one frame.
#[derive(Debug, Clone)]
pub struct RenderLoop {
    config: GameConfig,
}

impl RenderLoop {
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }

    /// Player offset from the screen-center anchor.
    pub fn displacement(&self, state: &GameState) -> (f64, f64) {
        let (cx, cy) = self.config.screen_center();
        let player = state.player();
        (player.x - cx, player.y - cy)
    }

    /// Duplicated world layers, scrolled for the current player position.
    pub fn scrolled_world(&self, state: &GameState) -> LayerStack {
        let mut draft = state.world().duplicate();
        scroll_layers(
            &mut draft,
            self.displacement(state),
            self.config.fill,
            self.config.zero_shift,
        );
        draft
    }

    /// Animation frame shown at `frame_count`.
    pub fn player_frame(&self, frame_count: u64) -> u32 {
        let ticks = self.config.ticks_per_frame.max(1);
        let frames = u64::from(self.config.frame_count.max(1));
        ((frame_count / ticks) % frames) as u32
    }

    //--- render() ---------------------------------------------------------
    //
    // Draws background layers, player and textbox, then resets the tick's
    // transient input and prints the diagnostics line.
    //
    pub fn render<C: Canvas>(&self, state: &mut GameState, canvas: &mut C, tps: f64) {
        canvas.clear();

        let world = self.scrolled_world(state);
        self.draw_layers(&world, canvas);
        self.draw_player(state.frame_count(), canvas);

        if state.textbox_visible() {
            self.draw_textbox(canvas);
        }

        state.clear_input();
        canvas.debug_print(&format!("TPS: {:0.2}", tps));
    }

    //--- Internal Helpers -------------------------------------------------

    fn draw_layers<C: Canvas>(&self, stack: &LayerStack, canvas: &mut C) {
        let size = self.config.tile_size;
        let columns = self.config.columns_per_row().max(1) as usize;

        for layer in stack.layers() {
            for (i, tile) in LayerStack::flatten(layer).enumerate() {
                let Some(source) = self.tile_source(tile) else {
                    trace!(target: "core", "Tile {} lies outside the tile sheet, skipped", tile);
                    continue;
                };
                let dest = (
                    ((i % columns) as u32).saturating_mul(size) as i32,
                    ((i / columns) as u32).saturating_mul(size) as i32,
                );
                canvas.draw(DrawCall { sprite: Sprite::Tiles, source: Some(source), dest });
            }
        }
    }

    /// Sheet rectangle of `tile`, or `None` if its coordinates overflow.
    fn tile_source(&self, tile: TileIndex) -> Option<Rect> {
        let size = self.config.tile_size;
        let sheet_columns = self.config.tile_sheet_columns.max(1);

        Some(Rect::new(
            (tile % sheet_columns).checked_mul(size)?,
            (tile / sheet_columns).checked_mul(size)?,
            size,
            size,
        ))
    }

    fn draw_player<C: Canvas>(&self, frame_count: u64, canvas: &mut C) {
        let config = &self.config;
        let frame = self.player_frame(frame_count);
        let (ox, oy) = config.frame_origin;
        let (cx, cy) = config.screen_center();

        canvas.draw(DrawCall {
            sprite: Sprite::Runner,
            source: Some(Rect::new(
                ox.saturating_add(frame.saturating_mul(config.frame_width)),
                oy,
                config.frame_width,
                config.frame_height,
            )),
            dest: (cx as i32, cy as i32),
        });
    }

    fn draw_textbox<C: Canvas>(&self, canvas: &mut C) {
        canvas.draw(DrawCall {
            sprite: Sprite::Textbox,
            source: None,
            dest: (0, self.config.textbox_top() as i32),
        });
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
