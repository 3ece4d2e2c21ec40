//! Built-in image provider: packed 1-bit sprites rasterized on demand.
//!
//! The widget only needs something that can turn an [`ImageId`] into a
//! texture at a requested pixel size; hosts with real art can swap this out.

use anyhow::{bail, Result};
use core_mv::ImageId;
use eframe::egui::{Color32, ColorImage, Context, TextureHandle, TextureOptions};
use std::collections::HashMap;

/// Default orientation pointer, an upward arrow.
pub const GLYPH_POINTER: ImageId = ImageId(0);
/// The digit six used by the demo maze.
pub const GLYPH_SIX: ImageId = ImageId(6);

const SPRITE_SIZE: usize = 16;

/// One bit per pixel, most significant bit is the leftmost column.
const POINTER_SPRITE: [u16; SPRITE_SIZE] = [
    0b0000000110000000,
    0b0000001111000000,
    0b0000011111100000,
    0b0000111111110000,
    0b0001111111111000,
    0b0011111111111100,
    0b0111111111111110,
    0b0000001111000000,
    0b0000001111000000,
    0b0000001111000000,
    0b0000001111000000,
    0b0000001111000000,
    0b0000001111000000,
    0b0000001111000000,
    0b0000001111000000,
    0b0000000000000000,
];

const SIX_SPRITE: [u16; SPRITE_SIZE] = [
    0b0000011111100000,
    0b0000111111110000,
    0b0001110000111000,
    0b0001100000000000,
    0b0011000000000000,
    0b0011011111100000,
    0b0011111111111000,
    0b0011110000011100,
    0b0011100000001100,
    0b0011000000001100,
    0b0011000000001100,
    0b0011100000011100,
    0b0001110000111000,
    0b0000111111110000,
    0b0000011111100000,
    0b0000000000000000,
];

/// Caches one texture per (image, pixel size) pair so every redraw after the
/// first is a lookup.
pub struct SpriteBank {
    textures: HashMap<(ImageId, u32), TextureHandle>,
}

impl SpriteBank {
    pub fn new() -> Self {
        Self {
            textures: HashMap::new(),
        }
    }

    /// Returns a texture for `id` scaled to `size` x `size` pixels, creating
    /// it on first use.
    pub fn load_and_scale(
        &mut self,
        ctx: &Context,
        id: ImageId,
        size: u32,
    ) -> Result<TextureHandle> {
        let size = size.max(1);
        if let Some(texture) = self.textures.get(&(id, size)) {
            return Ok(texture.clone());
        }

        let sprite = match id {
            GLYPH_POINTER => &POINTER_SPRITE,
            GLYPH_SIX => &SIX_SPRITE,
            _ => bail!("no sprite for image id {}", id.0),
        };

        let image = rasterize(sprite, size as usize);
        let texture = ctx.load_texture(
            format!("sprite-{}-{}", id.0, size),
            image,
            TextureOptions::NEAREST,
        );
        self.textures.insert((id, size), texture.clone());
        Ok(texture)
    }
}

/// Nearest-neighbor scale of a packed sprite into white-on-transparent.
fn rasterize(sprite: &[u16; SPRITE_SIZE], size: usize) -> ColorImage {
    let mut pixels = Vec::with_capacity(size * size);
    for py in 0..size {
        let row = sprite[py * SPRITE_SIZE / size];
        for px in 0..size {
            let sx = px * SPRITE_SIZE / size;
            let on = row & (0x8000 >> sx) != 0;
            pixels.push(if on {
                Color32::WHITE
            } else {
                Color32::TRANSPARENT
            });
        }
    }
    ColorImage {
        size: [size, size],
        pixels,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rasterize_scales_without_losing_the_outline() {
        let image = rasterize(&POINTER_SPRITE, 32);
        assert_eq!(image.size, [32, 32]);

        // arrow tip: the sprite's row 0 center bit maps to the top rows
        assert_eq!(image.pixels[16], Color32::WHITE);
        // corners stay transparent
        assert_eq!(image.pixels[0], Color32::TRANSPARENT);
        assert_eq!(image.pixels[31], Color32::TRANSPARENT);
    }

    #[test]
    fn rasterize_handles_downscaling() {
        let image = rasterize(&SIX_SPRITE, 8);
        assert_eq!(image.size, [8, 8]);
        assert_eq!(image.pixels.len(), 64);
    }
}
