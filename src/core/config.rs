//=========================================================================
// Game Configuration
//=========================================================================
//
// All tunable constants of the game loop in one place.
//
// Screen geometry, tile sheet layout, sprite animation and the movement
// policies are handed to the update and render loops at construction.
//
//=========================================================================

//=== Standard Library ====================================================

use std::fmt;
use std::path::{Path, PathBuf};

//=== Internal Dependencies ===============================================

use crate::core::grid::TileIndex;

//=== ZeroShiftPolicy =====================================================

/// What the renderer does on an axis whose displacement is exactly zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZeroShiftPolicy {
    /// Leave the layers untouched on either axis.
    #[default]
    Keep,

    /// Overwrite every cell with the fill value when either axis is zero.
    Fill,

    /// Overwrite every cell with the fill value when the horizontal
    /// displacement is zero; a zero vertical displacement is a no-op.
    FillHorizontal,
}

impl ZeroShiftPolicy {
    /// Whether a zero displacement on the horizontal axis blanks the layers.
    pub fn fills_horizontal(self) -> bool {
        matches!(self, Self::Fill | Self::FillHorizontal)
    }

    /// Whether a zero displacement on the vertical axis blanks the layers.
    pub fn fills_vertical(self) -> bool {
        self == Self::Fill
    }
}

//=== BoundaryPolicy ======================================================

/// Constraint applied to the player position after each step.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BoundaryPolicy {
    /// The position is never constrained.
    #[default]
    Unbounded,

    /// The position is clamped into the inclusive rectangle.
    Clamp {
        min_x: f64,
        min_y: f64,
        max_x: f64,
        max_y: f64,
    },
}

//=== ConfigError =========================================================

/// Rejection reasons for a [`GameConfig`] the loops cannot run with.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A size or count that must be at least one is zero.
    Zero { field: &'static str },

    /// Not a single tile fits across the screen.
    TileWiderThanScreen { tile_size: u32, screen_width: u32 },

    /// The last animation frame lies beyond `u32` pixel coordinates.
    FrameStripOverflow,

    /// A clamp rectangle with a NaN bound or `min > max` on some axis.
    InvalidBoundary { axis: char, min: f64, max: f64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Zero { field } => write!(f, "{} must be positive", field),
            Self::TileWiderThanScreen { tile_size, screen_width } => write!(
                f,
                "tile size {} exceeds screen width {}",
                tile_size, screen_width
            ),
            Self::FrameStripOverflow => write!(f, "player frame strip overflows the sprite sheet"),
            Self::InvalidBoundary { axis, min, max } => {
                write!(f, "invalid {} clamp range [{}, {}]", axis, min, max)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

//=== AssetPaths ==========================================================

/// File names of the three raster assets, relative to an asset root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetPaths {
    pub tiles: PathBuf,
    pub runner: PathBuf,
    pub textbox: PathBuf,
}

impl AssetPaths {
    /// Resolves every path against `root`.
    pub fn resolve(&self, root: &Path) -> Self {
        Self {
            tiles: root.join(&self.tiles),
            runner: root.join(&self.runner),
            textbox: root.join(&self.textbox),
        }
    }
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self {
            tiles: PathBuf::from("tiles.png"),
            runner: PathBuf::from("runner.png"),
            textbox: PathBuf::from("textbox_combined.png"),
        }
    }
}

//=== GameConfig ==========================================================

/// Screen, sheet, animation and movement settings.
///
/// # Default Values
///
/// - **Screen**: 240x240 logical pixels, window scaled x2
/// - **Tiles**: 16px cells, 25 columns per sheet row
/// - **Player**: 8 frames of 32x32 starting at (0, 32), 5 ticks per frame
/// - **Movement**: 1 unit per tick, unbounded, zero shifts kept
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub window_title: String,
    pub screen_width: u32,
    pub screen_height: u32,
    pub window_scale: u32,

    pub tile_size: u32,
    /// Columns of the tile sheet.
    pub tile_sheet_columns: u32,

    pub frame_origin: (u32, u32),
    pub frame_width: u32,
    pub frame_height: u32,
    pub frame_count: u32,
    /// Ticks each animation frame stays on screen.
    pub ticks_per_frame: u64,

    pub fill: TileIndex,
    pub movement_step: i64,
    pub zero_shift: ZeroShiftPolicy,
    pub boundary: BoundaryPolicy,
    pub textbox_visible: bool,
}

impl GameConfig {
    /// Checks every value the update and render loops divide or index by.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("screen_width", u64::from(self.screen_width)),
            ("screen_height", u64::from(self.screen_height)),
            ("window_scale", u64::from(self.window_scale)),
            ("tile_size", u64::from(self.tile_size)),
            ("tile_sheet_columns", u64::from(self.tile_sheet_columns)),
            ("frame_width", u64::from(self.frame_width)),
            ("frame_height", u64::from(self.frame_height)),
            ("frame_count", u64::from(self.frame_count)),
            ("ticks_per_frame", self.ticks_per_frame),
        ];
        if let Some(&(field, _)) = positive.iter().find(|(_, value)| *value == 0) {
            return Err(ConfigError::Zero { field });
        }

        if self.tile_size > self.screen_width {
            return Err(ConfigError::TileWiderThanScreen {
                tile_size: self.tile_size,
                screen_width: self.screen_width,
            });
        }

        self.frame_count
            .checked_mul(self.frame_width)
            .and_then(|strip| strip.checked_add(self.frame_origin.0))
            .ok_or(ConfigError::FrameStripOverflow)?;

        if let BoundaryPolicy::Clamp { min_x, min_y, max_x, max_y } = self.boundary {
            for (axis, min, max) in [('x', min_x, max_x), ('y', min_y, max_y)] {
                // Also rejects NaN bounds.
                if !(min <= max) {
                    return Err(ConfigError::InvalidBoundary { axis, min, max });
                }
            }
        }

        Ok(())
    }

    /// Fixed on-screen anchor of the player (screen center).
    pub fn screen_center(&self) -> (f64, f64) {
        (
            f64::from(self.screen_width / 2),
            f64::from(self.screen_height / 2),
        )
    }

    /// Tiles drawn per screen row.
    pub fn columns_per_row(&self) -> u32 {
        self.screen_width.checked_div(self.tile_size).unwrap_or(0)
    }

    /// Top edge of the textbox overlay.
    pub fn textbox_top(&self) -> u32 {
        self.screen_height - self.screen_height / 3
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window_title: String::from("I am not a Monster"),
            screen_width: 240,
            screen_height: 240,
            window_scale: 2,
            tile_size: 16,
            tile_sheet_columns: 25,
            frame_origin: (0, 32),
            frame_width: 32,
            frame_height: 32,
            frame_count: 8,
            ticks_per_frame: 5,
            fill: 0,
            movement_step: 1,
            zero_shift: ZeroShiftPolicy::Keep,
            boundary: BoundaryPolicy::Unbounded,
            textbox_visible: true,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_geometry() {
        let config = GameConfig::default();
        assert_eq!(config.screen_center(), (120.0, 120.0));
        assert_eq!(config.columns_per_row(), 15);
        assert_eq!(config.textbox_top(), 160);
    }

    #[test]
    fn default_policies() {
        let config = GameConfig::default();
        assert_eq!(config.zero_shift, ZeroShiftPolicy::Keep);
        assert_eq!(config.boundary, BoundaryPolicy::Unbounded);
        assert!(config.textbox_visible);
    }

    #[test]
    fn zero_shift_policy_axes() {
        assert!(!ZeroShiftPolicy::Keep.fills_horizontal());
        assert!(!ZeroShiftPolicy::Keep.fills_vertical());
        assert!(ZeroShiftPolicy::Fill.fills_horizontal());
        assert!(ZeroShiftPolicy::Fill.fills_vertical());
        assert!(ZeroShiftPolicy::FillHorizontal.fills_horizontal());
        assert!(!ZeroShiftPolicy::FillHorizontal.fills_vertical());
    }

    //=====================================================================
    // validate() Tests
    //=====================================================================

    #[test]
    fn default_config_is_valid() {
        assert_eq!(GameConfig::default().validate(), Ok(()));
    }

    #[test]
    fn zero_tile_size_is_rejected() {
        let config = GameConfig { tile_size: 0, ..GameConfig::default() };
        assert_eq!(config.validate(), Err(ConfigError::Zero { field: "tile_size" }));
        assert_eq!(config.columns_per_row(), 0, "No division by zero");
    }

    #[test]
    fn zero_counts_are_rejected() {
        let cases = [
            GameConfig { frame_count: 0, ..GameConfig::default() },
            GameConfig { ticks_per_frame: 0, ..GameConfig::default() },
            GameConfig { tile_sheet_columns: 0, ..GameConfig::default() },
            GameConfig { window_scale: 0, ..GameConfig::default() },
        ];
        let fields = ["frame_count", "ticks_per_frame", "tile_sheet_columns", "window_scale"];

        for (config, field) in cases.iter().zip(fields) {
            assert_eq!(config.validate(), Err(ConfigError::Zero { field }));
        }
    }

    #[test]
    fn tile_wider_than_screen_is_rejected() {
        let config = GameConfig { tile_size: 300, ..GameConfig::default() };
        assert!(matches!(config.validate(), Err(ConfigError::TileWiderThanScreen { .. })));
    }

    #[test]
    fn overflowing_frame_strip_is_rejected() {
        let config = GameConfig {
            frame_width: u32::MAX / 2,
            frame_count: 3,
            ..GameConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::FrameStripOverflow));
    }

    #[test]
    fn inverted_or_nan_clamp_is_rejected() {
        let inverted = GameConfig {
            boundary: BoundaryPolicy::Clamp { min_x: 10.0, min_y: 0.0, max_x: 5.0, max_y: 240.0 },
            ..GameConfig::default()
        };
        assert!(matches!(
            inverted.validate(),
            Err(ConfigError::InvalidBoundary { axis: 'x', .. })
        ));

        let nan = GameConfig {
            boundary: BoundaryPolicy::Clamp { min_x: 0.0, min_y: f64::NAN, max_x: 5.0, max_y: 240.0 },
            ..GameConfig::default()
        };
        assert!(matches!(nan.validate(), Err(ConfigError::InvalidBoundary { axis: 'y', .. })));
    }

    #[test]
    fn asset_paths_resolve_against_root() {
        let paths = AssetPaths::default().resolve(Path::new("assets"));
        assert_eq!(paths.tiles, Path::new("assets").join("tiles.png"));
        assert_eq!(paths.runner, Path::new("assets").join("runner.png"));
        assert_eq!(paths.textbox, Path::new("assets").join("textbox_combined.png"));
    }
}
