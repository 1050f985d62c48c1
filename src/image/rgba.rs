//! Borrowed interleaved RGBA view (4 bytes per pixel, tightly packed).
use super::traits::ImageView;
use crate::error::LivewireError;

#[derive(Clone, Copy, Debug)]
pub struct RgbaImage<'a> {
    pub w: usize,
    pub h: usize,
    pub data: &'a [u8],
}

impl<'a> RgbaImage<'a> {
    pub const CHANNELS: usize = 4;

    /// Byte length of a `w × h` RGBA buffer, `None` when it overflows `usize`.
    pub fn byte_len(w: usize, h: usize) -> Option<usize> {
        w.checked_mul(h)?.checked_mul(Self::CHANNELS)
    }

    /// Validate that `data` holds exactly `w * h` RGBA pixels.
    pub fn new(w: usize, h: usize, data: &'a [u8]) -> Result<Self, LivewireError> {
        let expected = Self::byte_len(w, h)
            .ok_or(LivewireError::InvalidDimensions { width: w, height: h })?;
        if data.len() != expected {
            return Err(LivewireError::BufferSize {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { w, h, data })
    }

    /// Mean of the colour channels of one RGBA pixel, scaled to `[0, 1]`;
    /// alpha is ignored.
    #[inline]
    pub fn luminance(px: &[u8]) -> f32 {
        (px[0] as f32 + px[1] as f32 + px[2] as f32) / (3.0 * 255.0)
    }
}

impl<'a> ImageView for RgbaImage<'a> {
    type Pixel = u8;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let stride = self.w * Self::CHANNELS;
        let start = y * stride;
        &self.data[start..start + stride]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrong_buffer_length_is_rejected() {
        let buf = [0u8; 15];
        assert_eq!(
            RgbaImage::new(2, 2, &buf).unwrap_err(),
            LivewireError::BufferSize {
                expected: 16,
                actual: 15
            }
        );
    }

    #[test]
    fn overflowing_dimensions_are_rejected() {
        let buf = [0u8; 16];
        let w = usize::MAX / 2;
        assert_eq!(
            RgbaImage::new(w, 3, &buf).unwrap_err(),
            LivewireError::InvalidDimensions { width: w, height: 3 }
        );
        assert_eq!(RgbaImage::byte_len(usize::MAX / 4 + 1, 1), None);
    }

    #[test]
    fn luminance_ignores_alpha() {
        let buf = [30u8, 60, 90, 0, 255, 255, 255, 255];
        let img = RgbaImage::new(2, 1, &buf).unwrap();
        let row = img.row(0);
        assert!((RgbaImage::luminance(&row[..4]) - 180.0 / 765.0).abs() < 1e-6);
        assert_eq!(RgbaImage::luminance(&row[4..]), 1.0);
    }
}
