//=========================================================================
// Assets
//=========================================================================
//
// The three raster images the game draws from, decoded once at startup.
//
// Loading fails fast: a missing or corrupt file aborts startup with an
// error naming the asset and its path instead of leaving a texture slot
// empty until the first draw.
//
//=========================================================================

//=== Standard Library ====================================================

use std::fmt;
use std::path::{Path, PathBuf};

//=== External Dependencies ===============================================

use log::info;

//=== Internal Dependencies ===============================================

use crate::core::config::AssetPaths;
use crate::core::render::{Rect, Sprite};

//=== AssetError ==========================================================

/// An asset could not be opened or decoded.
#[derive(Debug)]
pub struct AssetError {
    sprite: Sprite,
    path: PathBuf,
    source: image::ImageError,
}

impl AssetError {
    pub fn sprite(&self) -> Sprite {
        self.sprite
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "failed to load {} image '{}': {}",
            sprite_name(self.sprite),
            self.path.display(),
            self.source
        )
    }
}

impl std::error::Error for AssetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

fn sprite_name(sprite: Sprite) -> &'static str {
    match sprite {
        Sprite::Tiles => "tile sheet",
        Sprite::Runner => "player sprite sheet",
        Sprite::Textbox => "textbox",
    }
}

//=== Texture =============================================================

/// Decoded RGBA8 image, row-major, 4 bytes per pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Texture {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

impl Texture {
    /// Wraps raw RGBA8 pixels; `None` if the buffer size does not match.
    pub fn from_rgba(width: u32, height: u32, rgba: Vec<u8>) -> Option<Self> {
        let expected = width as usize * height as usize * 4;
        (rgba.len() == expected).then_some(Self { width, height, rgba })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn rgba(&self) -> &[u8] {
        &self.rgba
    }

    /// Whole-texture rectangle.
    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    /// RGBA bytes of the pixel at `(x, y)`, or `None` outside the texture.
    #[cfg(test)]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = (y as usize * self.width as usize + x as usize) * 4;
        let px = &self.rgba[offset..offset + 4];
        Some([px[0], px[1], px[2], px[3]])
    }

    fn open(sprite: Sprite, path: &Path) -> Result<Self, AssetError> {
        let image = image::open(path).map_err(|source| AssetError {
            sprite,
            path: path.to_path_buf(),
            source,
        })?;
        let rgba = image.to_rgba8();
        let (width, height) = rgba.dimensions();

        info!(
            target: "assets",
            "Loaded {} '{}' ({}x{})",
            sprite_name(sprite),
            path.display(),
            width,
            height
        );

        Ok(Self { width, height, rgba: rgba.into_raw() })
    }
}

//=== Assets ==============================================================

/// Tile sheet, player sprite sheet and textbox overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assets {
    pub tiles: Texture,
    pub runner: Texture,
    pub textbox: Texture,
}

impl Assets {
    /// Decodes every image under `root`, stopping at the first failure.
    pub fn load(root: &Path, paths: &AssetPaths) -> Result<Self, AssetError> {
        let paths = paths.resolve(root);
        Ok(Self {
            tiles: Texture::open(Sprite::Tiles, &paths.tiles)?,
            runner: Texture::open(Sprite::Runner, &paths.runner)?,
            textbox: Texture::open(Sprite::Textbox, &paths.textbox)?,
        })
    }

    pub fn texture(&self, sprite: Sprite) -> &Texture {
        match sprite {
            Sprite::Tiles => &self.tiles,
            Sprite::Runner => &self.runner,
            Sprite::Textbox => &self.textbox,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
