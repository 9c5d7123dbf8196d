//=========================================================================
// Pixel Canvas
//=========================================================================
//
// `Canvas` implementation over an RGBA8 frame buffer (the `pixels`
// surface in the running game, a plain Vec in tests).
//
// Draw calls are copied texel by texel: fully transparent source pixels
// are skipped and anything outside the frame is clipped. The debug line
// is kept for the platform to show in the window title.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::assets::{Assets, Texture};
use crate::core::render::{Canvas, DrawCall, Rect};

//=== Constants ===========================================================

const CLEAR_COLOR: [u8; 4] = [0x00, 0x00, 0x00, 0xff];

//=== PixelCanvas =========================================================

pub(crate) struct PixelCanvas<'a> {
    frame: &'a mut [u8],
    width: u32,
    height: u32,
    assets: &'a Assets,
    overlay: Option<String>,
}

impl<'a> PixelCanvas<'a> {
    /// `frame` must hold `width * height` RGBA8 pixels.
    pub(crate) fn new(frame: &'a mut [u8], width: u32, height: u32, assets: &'a Assets) -> Self {
        debug_assert_eq!(frame.len(), width as usize * height as usize * 4);
        Self {
            frame,
            width,
            height,
            assets,
            overlay: None,
        }
    }

    /// Last text passed to `debug_print` this frame.
    pub(crate) fn overlay(&self) -> Option<&str> {
        self.overlay.as_deref()
    }

    //--- Internal Helpers -------------------------------------------------

    fn blit(&mut self, texture: &Texture, source: Rect, dest: (i32, i32)) {
        // Source rectangle limited to the texture.
        let src_w = source.width.min(texture.width().saturating_sub(source.x));
        let src_h = source.height.min(texture.height().saturating_sub(source.y));

        let left = i64::from(dest.0);
        let top = i64::from(dest.1);
        let draw_left = left.max(0);
        let draw_top = top.max(0);
        let draw_right = (left + i64::from(src_w)).min(i64::from(self.width));
        let draw_bottom = (top + i64::from(src_h)).min(i64::from(self.height));
        if draw_left >= draw_right || draw_top >= draw_bottom {
            return;
        }

        let rgba = texture.rgba();
        let tex_stride = texture.width() as usize * 4;
        let frame_stride = self.width as usize * 4;

        for out_y in draw_top..draw_bottom {
            let src_y = (i64::from(source.y) + out_y - top) as usize;
            let src_row = src_y * tex_stride;
            let dst_row = out_y as usize * frame_stride;

            for out_x in draw_left..draw_right {
                let src_x = (i64::from(source.x) + out_x - left) as usize;
                let src = src_row + src_x * 4;
                if rgba[src + 3] == 0 {
                    continue;
                }
                let dst = dst_row + out_x as usize * 4;
                self.frame[dst..dst + 4].copy_from_slice(&rgba[src..src + 4]);
            }
        }
    }
}

impl Canvas for PixelCanvas<'_> {
    fn clear(&mut self) {
        for pixel in self.frame.chunks_exact_mut(4) {
            pixel.copy_from_slice(&CLEAR_COLOR);
        }
        self.overlay = None;
    }

    fn draw(&mut self, call: DrawCall) {
        let assets = self.assets;
        let texture = assets.texture(call.sprite);
        let source = call.source.unwrap_or_else(|| texture.bounds());
        self.blit(texture, source, call.dest);
    }

    fn debug_print(&mut self, text: &str) {
        self.overlay = Some(text.to_owned());
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
