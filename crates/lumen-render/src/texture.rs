//! CPU-side texture resources shared between batches and the backend.
//!
//! A [`Texture`] owns its RGBA8 pixels and a dirty flag. Pixel writes only
//! mark the texture dirty; the re-upload happens when a batch flush that uses
//! the texture reads and clears the flag. A texture written many times in a
//! frame is therefore uploaded at most once per flush.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use parking_lot::{RwLock, RwLockReadGuard};

use crate::Color;
use crate::error::TextureError;

/// Bytes per pixel of the RGBA8 store.
pub const BYTES_PER_PIXEL: usize = 4;

/// Process-unique texture identifier, used by backends to key GPU objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TextureId(u64);

impl TextureId {
    fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

#[derive(Debug)]
pub struct Texture {
    id: TextureId,
    width: u32,
    height: u32,
    pixels: RwLock<Vec<u8>>,
    dirty: AtomicBool,
}

impl Texture {
    /// Create a texture from tightly packed RGBA8 rows.
    pub fn from_rgba8(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, TextureError> {
        if width == 0 || height == 0 {
            return Err(TextureError::ZeroSize);
        }
        let expected = width as usize * height as usize * BYTES_PER_PIXEL;
        if pixels.len() != expected {
            return Err(TextureError::DataSizeMismatch {
                expected,
                actual: pixels.len(),
            });
        }

        Ok(Self {
            id: TextureId::next(),
            width,
            height,
            pixels: RwLock::new(pixels),
            dirty: AtomicBool::new(false),
        })
    }

    /// Create a texture filled with one color.
    pub fn solid(width: u32, height: u32, color: Color) -> Result<Self, TextureError> {
        let texel = color.to_rgba_u8();
        let count = width as usize * height as usize;
        let pixels = texel.iter().copied().cycle().take(count * BYTES_PER_PIXEL).collect();
        Self::from_rgba8(width, height, pixels)
    }

    #[inline]
    pub fn id(&self) -> TextureId {
        self.id
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Read access to the pixel store, for backend uploads.
    pub fn pixels(&self) -> RwLockReadGuard<'_, Vec<u8>> {
        self.pixels.read()
    }

    /// Read one pixel. Returns `None` outside the texture.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let offset = self.offset(x, y)?;
        let pixels = self.pixels.read();
        let mut out = [0u8; 4];
        out.copy_from_slice(&pixels[offset..offset + BYTES_PER_PIXEL]);
        Some(out)
    }

    /// Write one pixel and mark the texture dirty. Writes outside the
    /// texture are ignored.
    pub fn set_pixel(&self, x: u32, y: u32, color: Color) {
        let Some(offset) = self.offset(x, y) else {
            return;
        };
        self.pixels.write()[offset..offset + BYTES_PER_PIXEL].copy_from_slice(&color.to_rgba_u8());
        self.mark_dirty();
    }

    /// Copy a `width` x `height` block of RGBA8 rows to `(x, y)`.
    pub fn write_region(
        &self,
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        data: &[u8],
    ) -> Result<(), TextureError> {
        let fits_x = x.checked_add(width).is_some_and(|r| r <= self.width);
        let fits_y = y.checked_add(height).is_some_and(|b| b <= self.height);
        if !fits_x || !fits_y {
            return Err(TextureError::RegionOutOfBounds);
        }
        let row_bytes = width as usize * BYTES_PER_PIXEL;
        let expected = row_bytes * height as usize;
        if data.len() != expected {
            return Err(TextureError::DataSizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        if expected == 0 {
            return Ok(());
        }

        let stride = self.width as usize * BYTES_PER_PIXEL;
        let mut pixels = self.pixels.write();
        for (row, src) in data.chunks_exact(row_bytes).enumerate() {
            let start = (y as usize + row) * stride + x as usize * BYTES_PER_PIXEL;
            pixels[start..start + row_bytes].copy_from_slice(src);
        }
        drop(pixels);

        self.mark_dirty();
        Ok(())
    }

    pub fn mark_dirty(&self) {
        self.dirty.store(true, Ordering::Release);
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::Acquire)
    }

    /// Clear the dirty flag, returning whether it was set.
    pub fn take_dirty(&self) -> bool {
        self.dirty.swap(false, Ordering::AcqRel)
    }

    fn offset(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_bad_sizes() {
        assert_eq!(Texture::from_rgba8(0, 4, vec![]).unwrap_err(), TextureError::ZeroSize);
        assert_eq!(
            Texture::from_rgba8(2, 2, vec![0; 15]).unwrap_err(),
            TextureError::DataSizeMismatch {
                expected: 16,
                actual: 15
            }
        );
    }

    #[test]
    fn test_new_texture_is_clean() {
        let tex = Texture::solid(4, 4, Color::RED).unwrap();
        assert!(!tex.is_dirty());
        assert_eq!(tex.pixel(3, 3), Some([255, 0, 0, 255]));
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Texture::solid(1, 1, Color::WHITE).unwrap();
        let b = Texture::solid(1, 1, Color::WHITE).unwrap();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_set_pixel_marks_dirty() {
        let tex = Texture::solid(2, 2, Color::BLACK).unwrap();
        tex.set_pixel(1, 0, Color::WHITE);
        assert!(tex.is_dirty());
        assert_eq!(tex.pixel(1, 0), Some([255, 255, 255, 255]));

        assert!(tex.take_dirty());
        assert!(!tex.take_dirty());
    }

    #[test]
    fn test_set_pixel_out_of_bounds_is_ignored() {
        let tex = Texture::solid(2, 2, Color::BLACK).unwrap();
        tex.set_pixel(2, 0, Color::WHITE);
        assert!(!tex.is_dirty());
        assert_eq!(tex.pixel(2, 0), None);
    }

    #[test]
    fn test_write_region() {
        let tex = Texture::solid(4, 4, Color::BLACK).unwrap();
        let block = [9u8; 2 * 2 * BYTES_PER_PIXEL];
        tex.write_region(1, 2, 2, 2, &block).unwrap();

        assert!(tex.is_dirty());
        assert_eq!(tex.pixel(1, 2), Some([9; 4]));
        assert_eq!(tex.pixel(2, 3), Some([9; 4]));
        assert_eq!(tex.pixel(0, 2), Some([0, 0, 0, 255]));
        assert_eq!(tex.pixel(3, 3), Some([0, 0, 0, 255]));
    }

    #[test]
    fn test_write_region_out_of_bounds() {
        let tex = Texture::solid(4, 4, Color::BLACK).unwrap();
        let block = [0u8; 2 * 2 * BYTES_PER_PIXEL];
        assert_eq!(
            tex.write_region(3, 0, 2, 2, &block),
            Err(TextureError::RegionOutOfBounds)
        );
        assert!(!tex.is_dirty());
    }
}
