//! Decoded RGBA sprite with nearest-neighbour sampling.

use std::path::Path;

use crate::AssetError;

/// 8-bit RGBA pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Pixels below half alpha are treated as holes.
    pub fn is_opaque(&self) -> bool {
        self.a >= 128
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprite {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl Sprite {
    /// Decode an image file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, AssetError> {
        let path = path.as_ref();
        let img = image::open(path).map_err(|source| AssetError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        let rgba = img.to_rgba8();
        Ok(Self::from_rgba8(rgba.width(), rgba.height(), rgba.as_raw()))
    }

    /// Build from tightly packed RGBA bytes. Missing trailing bytes are
    /// filled with transparent pixels.
    pub fn from_rgba8(width: u32, height: u32, bytes: &[u8]) -> Self {
        let len = (width as usize) * (height as usize);
        let mut pixels: Vec<Rgba> = bytes
            .chunks_exact(4)
            .take(len)
            .map(|c| Rgba::new(c[0], c[1], c[2], c[3]))
            .collect();
        pixels.resize(len, Rgba::default());
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn solid(width: u32, height: u32, color: Rgba) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            pixels: vec![color; len],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get((y as usize) * (self.width as usize) + (x as usize))
            .copied()
    }

    /// Sample at normalized coordinates (`0.0..1.0` on each axis).
    ///
    /// Out-of-range coordinates clamp to the nearest edge pixel.
    pub fn sample(&self, u: f32, v: f32) -> Rgba {
        if self.width == 0 || self.height == 0 {
            return Rgba::default();
        }
        let x = ((u * self.width as f32) as i64).clamp(0, self.width as i64 - 1) as u32;
        let y = ((v * self.height as f32) as i64).clamp(0, self.height as i64 - 1) as u32;
        self.pixel(x, y).unwrap_or_default()
    }
}
