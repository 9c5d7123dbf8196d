//=========================================================================
// Platform Subsystem
//
// Owns the window, the pixel surface and the fixed-timestep schedule,
// and drives the core game loop from winit's event loop.
//
// Architecture:
// ```text
//  winit Event Loop (main thread)
//   │
//   ├─ KeyboardInput ──→ InputProcessor ──→ InputBuffer
//   │
//   ├─ about_to_wait ──→ TickClock due? ──→ request_redraw()
//   │
//   └─ RedrawRequested (frame boundary)
//        ├─ flush InputBuffer ──→ channel ──→ EventCollector
//        ├─ GameLoop::advance(PixelCanvas)   (one update + one render)
//        ├─ overlay text → window title
//        └─ pixels.render()
// ```
//
// Key Design Decisions:
// - **RedrawRequested = frame boundary**: all input buffered since the
//   last tick is delivered as one batch
// - **ControlFlow::WaitUntil**: the loop sleeps until the next tick is
//   due instead of spinning
// - **Fail-fast surface errors**: window, surface and present failures
//   stop the loop and are returned from `run()`
//
//=========================================================================

//=== Submodules ==========================================================

mod canvas;
mod clock;
mod input_buffer;
mod input_processor;

//=== Standard Library ====================================================

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

//=== External Crates =====================================================

use crossbeam_channel::{Sender, TrySendError};
use log::*;
use pixels::{Pixels, SurfaceTexture};
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowAttributes, WindowId},
};

//=== Internal Imports ====================================================

use crate::assets::Assets;
use crate::core::config::GameConfig;
use crate::core::platform_bridge::PlatformEvent;
use crate::core::{GameLoop, TickControl};
use canvas::PixelCanvas;
use clock::TickClock;
use input_buffer::InputBuffer;
use input_processor::InputProcessor;

//=== PlatformError =======================================================

/// Window, surface and event loop failures. All of them end the game.
#[derive(Debug)]
pub enum PlatformError {
    /// Failed to create the event loop.
    EventLoopCreation(winit::error::EventLoopError),

    /// The event loop terminated with an error.
    EventLoopExecution(winit::error::EventLoopError),

    /// The OS refused to open the window.
    WindowCreation(winit::error::OsError),

    /// The pixel surface could not be created.
    Surface(pixels::Error),

    /// The pixel surface could not follow a window resize.
    Resize(pixels::TextureError),

    /// Presenting a frame failed.
    Present(pixels::Error),
}

//--- Trait Implementations -----------------------------------------------

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EventLoopCreation(e) => write!(f, "Event loop creation failed: {}", e),
            Self::EventLoopExecution(e) => write!(f, "Event loop error: {}", e),
            Self::WindowCreation(e) => write!(f, "Window creation failed: {}", e),
            Self::Surface(e) => write!(f, "Pixel surface creation failed: {}", e),
            Self::Resize(e) => write!(f, "Pixel surface resize failed: {}", e),
            Self::Present(e) => write!(f, "Frame present failed: {}", e),
        }
    }
}

impl std::error::Error for PlatformError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::EventLoopCreation(e) | Self::EventLoopExecution(e) => Some(e),
            Self::WindowCreation(e) => Some(e),
            Self::Surface(e) | Self::Present(e) => Some(e),
            Self::Resize(e) => Some(e),
        }
    }
}

//=== Platform ============================================================

/// Window host and tick driver.
///
/// Must live on the main thread (winit requirement on macOS/iOS). The
/// window and surface are created lazily in `resumed()`.
pub(crate) struct Platform {
    config: GameConfig,
    assets: Assets,
    game: GameLoop,

    window: Option<Arc<Window>>,
    pixels: Option<Pixels<'static>>,
    title: String,

    buffer: InputBuffer,
    event_sender: Sender<PlatformEvent>,
    input_processor: InputProcessor,

    clock: TickClock,
    error: Option<PlatformError>,
}

impl Platform {
    //--- Construction -----------------------------------------------------

    pub fn new(
        config: GameConfig,
        assets: Assets,
        game: GameLoop,
        event_sender: Sender<PlatformEvent>,
        tps: f64,
    ) -> Self {
        info!(target: "platform", "Platform subsystem initialized ({} TPS)", tps);
        Self {
            title: config.window_title.clone(),
            config,
            assets,
            game,
            window: None,
            pixels: None,
            buffer: InputBuffer::new(),
            event_sender,
            input_processor: InputProcessor::new(),
            clock: TickClock::new(tps, Instant::now()),
            error: None,
        }
    }

    //--- Execution --------------------------------------------------------

    /// Runs the event loop until the window closes or the game quits.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the event loop cannot start, or the
    /// first fatal window/surface error seen while running.
    pub fn run(mut self) -> Result<(), PlatformError> {
        debug!(target: "platform", "Starting winit event loop");

        let event_loop = EventLoop::new().map_err(PlatformError::EventLoopCreation)?;
        event_loop
            .run_app(&mut self)
            .map_err(PlatformError::EventLoopExecution)?;

        match self.error.take() {
            Some(err) => Err(err),
            None => {
                info!(target: "platform", "Event loop finished");
                Ok(())
            }
        }
    }

    //--- Internal Helpers -------------------------------------------------

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: PlatformError) {
        error!(target: "platform", "{}", err);
        let _ = self.event_sender.try_send(PlatformEvent::WindowClosed);
        self.error.get_or_insert(err);
        event_loop.exit();
    }

    fn create_surface(&self, window: &Arc<Window>) -> Result<Pixels<'static>, PlatformError> {
        let size = window.inner_size();
        let surface = SurfaceTexture::new(size.width, size.height, Arc::clone(window));
        Pixels::new(self.config.screen_width, self.config.screen_height, surface)
            .map_err(PlatformError::Surface)
    }

    /// Sends the frame's buffered key events to the core.
    fn flush_input_buffer(&mut self) {
        if let Some(events) = self.buffer.drain() {
            let count = events.len();
            trace!(target: "platform::input", "Flushing {} key events", count);

            // Producer and consumer share this thread, so never block here.
            match self.event_sender.try_send(PlatformEvent::Inputs(events)) {
                Ok(()) => {}
                Err(TrySendError::Full(_)) => {
                    warn!(target: "platform::input", "Event queue full, dropping {} events", count);
                }
                Err(TrySendError::Disconnected(_)) => {
                    warn!(target: "platform::input", "Channel disconnected, dropping {} events", count);
                }
            }
        }
    }

    //--- redraw() ---------------------------------------------------------
    //
    // Runs one tick if the clock says one is due, then presents. Redraws
    // the OS asks for between ticks (expose, resize) only re-present the
    // last frame.
    //
    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();

        if self.clock.try_tick(now) {
            self.flush_input_buffer();

            if self.tick(now) == TickControl::Exit {
                info!(
                    target: "platform",
                    "Game requested exit at frame {}",
                    self.game.state().frame_count()
                );
                event_loop.exit();
                return;
            }
        }

        let Some(pixels) = self.pixels.as_mut() else {
            return;
        };
        if let Err(err) = pixels.render() {
            self.fail(event_loop, PlatformError::Present(err));
        }
    }

    /// Advances the game into the pixel buffer and mirrors the debug line
    /// into the window title.
    fn tick(&mut self, now: Instant) -> TickControl {
        let Some(pixels) = self.pixels.as_mut() else {
            return TickControl::Continue;
        };

        let (width, height) = (self.config.screen_width, self.config.screen_height);
        let mut canvas = PixelCanvas::new(pixels.frame_mut(), width, height, &self.assets);
        let control = self.game.advance(&mut canvas, now);

        if let Some(overlay) = canvas.overlay() {
            let title = format!("{} | {}", self.config.window_title, overlay);
            if title != self.title {
                if let Some(window) = &self.window {
                    window.set_title(&title);
                }
                self.title = title;
            }
        }

        control
    }

    //--- Test Accessors ---------------------------------------------------

    #[cfg(test)]
    pub(crate) fn window(&self) -> Option<&Window> {
        self.window.as_deref()
    }
}

//=== Winit Integration ===================================================

impl ApplicationHandler for Platform {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (mobile resume?)");
            return;
        }

        let scale = self.config.window_scale.max(1);
        let attrs = WindowAttributes::default()
            .with_title(self.title.clone())
            .with_inner_size(LogicalSize::new(
                self.config.screen_width * scale,
                self.config.screen_height * scale,
            ))
            .with_resizable(false);

        let window = match event_loop.create_window(attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => return self.fail(event_loop, PlatformError::WindowCreation(e)),
        };

        let pixels = match self.create_surface(&window) {
            Ok(pixels) => pixels,
            Err(e) => return self.fail(event_loop, e),
        };

        info!(
            target: "platform",
            "Window created: {}x{} @ {}x DPI",
            window.inner_size().width,
            window.inner_size().height,
            window.scale_factor()
        );

        event_loop.set_control_flow(ControlFlow::WaitUntil(self.clock.next()));
        window.request_redraw();
        self.window = Some(window);
        self.pixels = Some(pixels);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                let _ = self.event_sender.try_send(PlatformEvent::WindowClosed);
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if let Some(pixels) = self.pixels.as_mut() {
                    if let Err(e) = pixels.resize_surface(size.width, size.height) {
                        self.fail(event_loop, PlatformError::Resize(e));
                    }
                }
            }

            WindowEvent::ModifiersChanged(state) => {
                self.input_processor.update_modifiers(state.state());
                trace!(
                    target: "platform::input",
                    "Modifiers changed: {:?}",
                    self.input_processor.current_modifiers()
                );
            }

            WindowEvent::KeyboardInput { event: key_event, .. } => {
                match self.input_processor.process_key_event(&key_event) {
                    Some(event) => self.buffer.push(event),
                    None => trace!(target: "platform::input", "Key event ignored"),
                }
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if Instant::now() >= self.clock.next() {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.clock.next()));
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::Texture;
    use crate::core::input::{InputEvent, KeyBindings, KeyCode, Modifiers};
    use crate::core::level::Level;
    use crossbeam_channel::{unbounded, Receiver};

    fn blank(width: u32, height: u32) -> Texture {
        Texture::from_rgba(width, height, vec![0; (width * height * 4) as usize]).unwrap()
    }

    /// Platform whose own game loop reads from a channel nobody writes to,
    /// plus the receiver its sender feeds.
    fn platform() -> (Platform, Receiver<PlatformEvent>) {
        let config = GameConfig::default();
        let assets = Assets {
            tiles: blank(16, 16),
            runner: blank(32, 64),
            textbox: blank(240, 80),
        };
        let (_game_tx, game_rx) = unbounded();
        let game = GameLoop::new(game_rx, Level::builtin().unwrap(), config.clone(), KeyBindings::default());
        let (tx, rx) = unbounded();

        (Platform::new(config, assets, game, tx, 60.0), rx)
    }

    fn space_down() -> InputEvent {
        InputEvent::KeyDown { key: KeyCode::Space, modifiers: Modifiers::NONE }
    }

    //=====================================================================
    // Platform Tests
    //=====================================================================

    #[test]
    fn platform_creation() {
        let (platform, _rx) = platform();

        assert!(platform.window().is_none(), "Window should be created lazily");
        assert_eq!(platform.title, "I am not a Monster");
    }

    #[test]
    fn flush_empty_buffer_is_noop() {
        let (mut platform, rx) = platform();

        platform.flush_input_buffer();

        assert!(rx.try_recv().is_err(), "No events should be sent for empty buffer");
    }

    #[test]
    fn flush_sends_buffered_events() {
        let (mut platform, rx) = platform();
        platform.buffer.push(space_down());

        platform.flush_input_buffer();

        match rx.try_recv() {
            Ok(PlatformEvent::Inputs(events)) => assert_eq!(events, vec![space_down()]),
            other => panic!("Expected Inputs event, got {:?}", other),
        }
        platform.flush_input_buffer();
        assert!(rx.try_recv().is_err(), "Second flush should not send");
    }

    #[test]
    fn flush_handles_disconnected_channel() {
        let (mut platform, rx) = platform();
        platform.buffer.push(space_down());

        drop(rx);

        // Should not panic, just log warning
        platform.flush_input_buffer();
        assert_eq!(platform.buffer.drain(), None);
    }

    #[test]
    fn tick_without_surface_continues() {
        let (mut platform, _rx) = platform();

        assert_eq!(platform.tick(Instant::now()), TickControl::Continue);
        assert_eq!(platform.game.state().frame_count(), 0, "No surface, no tick");
    }

    //=====================================================================
    // PlatformError Tests
    //=====================================================================

    #[test]
    fn platform_error_is_error_trait() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<PlatformError>();
    }
}
