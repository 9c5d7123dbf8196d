//=========================================================================
// Engine
//
// Entry point that wires configuration, assets, the level and the
// platform together and runs the game until it exits.
//
// Architecture:
// ```text
//     EngineBuilder  ──build()──>  Engine  ──run()──>  [Runtime]
//         │                          │
//         ├─ with_tps()              ├─ validates GameConfig
//         ├─ with_config()           ├─ loads assets (fail fast)
//         ├─ with_asset_root()       ├─ builds GameLoop
//         ├─ with_level()            └─ runs Platform until exit
//         ├─ with_bindings()
//         └─ with_channel_capacity()
// ```
//
//=========================================================================

//=== Standard Library ====================================================

use std::fmt;
use std::path::PathBuf;

//=== External Dependencies ===============================================

use crossbeam_channel::bounded;
use log::info;

//=== Internal Dependencies ===============================================

use crate::assets::{AssetError, Assets};
use crate::core::config::{AssetPaths, ConfigError, GameConfig};
use crate::core::grid::LayerError;
use crate::core::input::KeyBindings;
use crate::core::level::Level;
use crate::core::GameLoop;
use crate::platform::{Platform, PlatformError};

//=== EngineError =========================================================

/// Any failure that stops the game before or while it runs.
#[derive(Debug)]
pub enum EngineError {
    /// The game configuration cannot be run.
    Config(ConfigError),

    /// The level data is malformed.
    Layer(LayerError),

    /// An image could not be loaded.
    Asset(AssetError),

    /// The window, surface or event loop failed.
    Platform(PlatformError),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "Invalid configuration: {}", e),
            Self::Layer(e) => write!(f, "Invalid level: {}", e),
            Self::Asset(e) => write!(f, "Asset error: {}", e),
            Self::Platform(e) => write!(f, "Platform error: {}", e),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Layer(e) => Some(e),
            Self::Asset(e) => Some(e),
            Self::Platform(e) => Some(e),
        }
    }
}

impl From<ConfigError> for EngineError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<LayerError> for EngineError {
    fn from(err: LayerError) -> Self {
        Self::Layer(err)
    }
}

impl From<AssetError> for EngineError {
    fn from(err: AssetError) -> Self {
        Self::Asset(err)
    }
}

impl From<PlatformError> for EngineError {
    fn from(err: PlatformError) -> Self {
        Self::Platform(err)
    }
}

//=== EngineBuilder =======================================================

/// Builder for configuring and constructing an [`Engine`].
///
/// # Default Values
///
/// - **TPS**: 60.0
/// - **Channel capacity**: 128 event batches
/// - **Asset root**: `assets`
/// - **Level**: the built-in town map
///
/// # Examples
///
/// ```no_run
/// use tilewalk::EngineBuilder;
///
/// EngineBuilder::new()
///     .with_tps(60.0)
///     .with_asset_root("assets")
///     .build()
///     .run()
///     .expect("game failed");
/// ```
pub struct EngineBuilder {
    tps: f64,
    channel_capacity: usize,
    config: GameConfig,
    asset_root: PathBuf,
    asset_paths: AssetPaths,
    level: Option<Level>,
    bindings: KeyBindings,
}

impl EngineBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            tps: 60.0,
            channel_capacity: 128,
            config: GameConfig::default(),
            asset_root: PathBuf::from("assets"),
            asset_paths: AssetPaths::default(),
            level: None,
            bindings: KeyBindings::default(),
        }
    }

    /// Sets the fixed update rate. One update and one render run per tick.
    ///
    /// # Panics
    ///
    /// Panics if `tps <= 0.0`.
    pub fn with_tps(mut self, tps: f64) -> Self {
        assert!(tps > 0.0, "TPS must be positive, got {}", tps);
        self.tps = tps;
        self
    }

    /// Sets the platform → core queue capacity.
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.channel_capacity = capacity;
        self
    }

    pub fn with_config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Directory the image files are resolved against.
    pub fn with_asset_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.asset_root = root.into();
        self
    }

    pub fn with_asset_paths(mut self, paths: AssetPaths) -> Self {
        self.asset_paths = paths;
        self
    }

    /// Replaces the built-in level.
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = Some(level);
        self
    }

    pub fn with_bindings(mut self, bindings: KeyBindings) -> Self {
        self.bindings = bindings;
        self
    }

    /// Builds the engine instance.
    pub fn build(self) -> Engine {
        info!("Building engine (TPS: {}, channel: {})", self.tps, self.channel_capacity);

        Engine {
            tps: self.tps,
            channel_capacity: self.channel_capacity,
            config: self.config,
            asset_root: self.asset_root,
            asset_paths: self.asset_paths,
            level: self.level,
            bindings: self.bindings,
        }
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Engine ==============================================================

/// Game runtime. Create via [`EngineBuilder`].
pub struct Engine {
    tps: f64,
    channel_capacity: usize,
    config: GameConfig,
    asset_root: PathBuf,
    asset_paths: AssetPaths,
    level: Option<Level>,
    bindings: KeyBindings,
}

impl Engine {
    /// Runs the game and blocks until the window closes or the player quits.
    ///
    /// # Lifecycle
    ///
    /// 1. Validates the configuration
    /// 2. Loads every image; a missing or corrupt file aborts startup
    /// 3. Creates the platform → core channel
    /// 4. Builds the game loop from the level and configuration
    /// 5. Runs the platform event loop (blocks here)
    ///
    /// # Errors
    ///
    /// Returns [`EngineError`] for configuration, asset, level or platform
    /// failures.
    pub fn run(self) -> Result<(), EngineError> {
        info!("Starting engine runtime (TPS: {})", self.tps);

        //--- 1. Validate configuration -------------------------------------
        self.config.validate()?;

        //--- 2. Load assets ------------------------------------------------
        let assets = Assets::load(&self.asset_root, &self.asset_paths)?;

        //--- 3. Create communication channel -------------------------------
        let (tx, rx) = bounded(self.channel_capacity);
        info!("Event channel created (capacity: {})", self.channel_capacity);

        //--- 4. Build the game loop ----------------------------------------
        let level = match self.level {
            Some(level) => level,
            None => Level::builtin()?,
        };
        let game = GameLoop::new(rx, level, self.config.clone(), self.bindings);

        //--- 5. Launch the platform subsystem ------------------------------
        let platform = Platform::new(self.config, assets, game, tx, self.tps);
        platform.run()?;

        info!("Engine shutdown complete");
        Ok(())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::BoundaryPolicy;
    use crate::core::input::{Action, KeyCode};
    use crate::core::render::Sprite;

    //=====================================================================
    // EngineBuilder Tests
    //=====================================================================

    #[test]
    fn builder_defaults() {
        let builder = EngineBuilder::new();
        assert_eq!(builder.tps, 60.0);
        assert_eq!(builder.channel_capacity, 128);
        assert_eq!(builder.asset_root, PathBuf::from("assets"));
        assert_eq!(builder.config, GameConfig::default());
        assert!(builder.level.is_none());
    }

    #[test]
    fn builder_with_tps() {
        let builder = EngineBuilder::new().with_tps(120.0);
        assert_eq!(builder.tps, 120.0);
    }

    #[test]
    #[should_panic(expected = "TPS must be positive")]
    fn builder_with_tps_panics_on_zero() {
        EngineBuilder::new().with_tps(0.0);
    }

    #[test]
    #[should_panic(expected = "TPS must be positive")]
    fn builder_with_tps_panics_on_negative() {
        EngineBuilder::new().with_tps(-60.0);
    }

    #[test]
    fn builder_with_channel_capacity() {
        let builder = EngineBuilder::new().with_channel_capacity(256);
        assert_eq!(builder.channel_capacity, 256);
    }

    #[test]
    #[should_panic(expected = "Channel capacity must be positive")]
    fn builder_with_channel_capacity_panics_on_zero() {
        EngineBuilder::new().with_channel_capacity(0);
    }

    #[test]
    fn builder_fluent_api_chaining() {
        let config = GameConfig {
            boundary: BoundaryPolicy::Clamp { min_x: 0.0, min_y: 0.0, max_x: 240.0, max_y: 240.0 },
            ..GameConfig::default()
        };
        let mut bindings = KeyBindings::empty();
        bindings.bind_key(KeyCode::KeyQ, Action::Quit);

        let engine = EngineBuilder::new()
            .with_tps(30.0)
            .with_channel_capacity(16)
            .with_config(config.clone())
            .with_asset_root("/srv/game")
            .with_level(Level::builtin().unwrap())
            .with_bindings(bindings)
            .build();

        assert_eq!(engine.tps, 30.0);
        assert_eq!(engine.channel_capacity, 16);
        assert_eq!(engine.config, config);
        assert_eq!(engine.asset_root, PathBuf::from("/srv/game"));
        assert!(engine.level.is_some());
        assert_eq!(engine.bindings.map_key(KeyCode::KeyQ), Some(Action::Quit));
    }

    //=====================================================================
    // Engine Tests
    //=====================================================================

    #[test]
    fn run_fails_fast_on_missing_assets() {
        let result = EngineBuilder::new()
            .with_asset_root("/nonexistent/tilewalk-assets")
            .build()
            .run();

        match result {
            Err(EngineError::Asset(err)) => assert_eq!(err.sprite(), Sprite::Tiles),
            other => panic!("Expected asset error, got {:?}", other),
        }
    }

    #[test]
    fn run_rejects_invalid_config_before_loading_assets() {
        let config = GameConfig { tile_size: 0, ..GameConfig::default() };
        let result = EngineBuilder::new()
            .with_config(config)
            .with_asset_root("/nonexistent/tilewalk-assets")
            .build()
            .run();

        match result {
            Err(EngineError::Config(err)) => {
                assert_eq!(err, ConfigError::Zero { field: "tile_size" })
            }
            other => panic!("Expected config error, got {:?}", other),
        }
    }

    #[test]
    fn engine_error_wraps_source() {
        use std::error::Error;

        let err = EngineError::from(LayerError::EmptyLayer { layer: 2 });

        assert!(err.to_string().starts_with("Invalid level:"));
        assert!(err.source().is_some());
    }
}
