//! Interleaved pixel buffers.

use crate::{Cipher, Direction, Error, KeyPair, Result};

/// Channel layout of an interleaved 8-bit pixel buffer.
///
/// Alpha is always the last channel and is never transformed.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum PixelFormat {
    /// Luminance.
    Gray,
    /// Luminance and alpha.
    GrayAlpha,
    /// Red, green and blue.
    Rgb,
    /// Red, green, blue and alpha.
    Rgba,
}

impl PixelFormat {
    /// Bytes per pixel.
    pub const fn channels(self) -> usize {
        match self {
            PixelFormat::Gray => 1,
            PixelFormat::GrayAlpha => 2,
            PixelFormat::Rgb => 3,
            PixelFormat::Rgba => 4,
        }
    }

    /// Does the last channel hold alpha?
    pub const fn has_alpha(self) -> bool {
        matches!(self, PixelFormat::GrayAlpha | PixelFormat::Rgba)
    }

    /// Bytes per pixel that carry color.
    pub const fn color_channels(self) -> usize {
        self.channels() - self.has_alpha() as usize
    }
}

impl Cipher {
    /// Encrypt the color channels of an interleaved pixel buffer in place.
    pub fn encrypt_pixels(
        &self,
        key: &KeyPair,
        format: PixelFormat,
        pixels: &mut [u8],
    ) -> Result<()> {
        self.substitute_pixels(key, Direction::Encrypt, format, pixels)
    }

    /// Decrypt the color channels of an interleaved pixel buffer in place.
    pub fn decrypt_pixels(
        &self,
        key: &KeyPair,
        format: PixelFormat,
        pixels: &mut [u8],
    ) -> Result<()> {
        self.substitute_pixels(key, Direction::Decrypt, format, pixels)
    }

    fn substitute_pixels(
        &self,
        key: &KeyPair,
        direction: Direction,
        format: PixelFormat,
        pixels: &mut [u8],
    ) -> Result<()> {
        let channels = format.channels();
        if pixels.len() % channels != 0 {
            return Err(Error::PixelBufferLength {
                len: pixels.len(),
                channels,
            });
        }

        let table = self.substitution_table(key, direction)?;
        for pixel in pixels.chunks_exact_mut(channels) {
            for value in &mut pixel[..format.color_channels()] {
                *value = table[usize::from(*value)];
            }
        }

        Ok(())
    }
}
