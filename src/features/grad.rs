//! Greyscale conversion and forward-difference gradients.
//!
//! - Derivatives are forward differences `g[x+1] - g[x]`; the last column
//!   (row) has no forward neighbour and replicates the one before it.
//! - An axis of length 1 has no derivative and reads as 0.
//! - The cost map is `1 - |∇g| / max|∇g|`. A uniform image has no maximum to
//!   normalize by and maps to all 1.
use super::fill_rows;
use crate::image::{ImageF32, ImageView, RgbaImage};

/// Forward-difference derivatives and their magnitude.
#[derive(Clone, Debug)]
pub struct GradientField {
    pub gx: ImageF32,
    pub gy: ImageF32,
    pub magnitude: ImageF32,
}

/// Mean of the colour channels in `[0, 1]`.
pub fn greyscale(image: &RgbaImage<'_>) -> ImageF32 {
    let mut out = ImageF32::new(image.w, image.h);
    fill_rows(&mut out, |y, row| {
        let src = image.row(y).chunks_exact(RgbaImage::CHANNELS);
        for (px, rgba) in row.iter_mut().zip(src) {
            *px = RgbaImage::luminance(rgba);
        }
    });
    out
}

/// Column whose forward difference stands in for `x`.
#[inline]
fn source_index(i: usize, len: usize) -> usize {
    if len >= 2 {
        i.min(len - 2)
    } else {
        i
    }
}

#[inline]
fn forward_dx(g: &ImageF32, x: usize, y: usize) -> f32 {
    if x + 1 < g.w {
        g.get(x + 1, y) - g.get(x, y)
    } else {
        0.0
    }
}

#[inline]
fn forward_dy(g: &ImageF32, x: usize, y: usize) -> f32 {
    if y + 1 < g.h {
        g.get(x, y + 1) - g.get(x, y)
    } else {
        0.0
    }
}

impl GradientField {
    pub fn compute(grey: &ImageF32) -> Self {
        let (w, h) = (grey.w, grey.h);
        let mut gx = ImageF32::new(w, h);
        let mut gy = ImageF32::new(w, h);
        let mut magnitude = ImageF32::new(w, h);

        fill_rows(&mut gx, |y, row| {
            for (x, v) in row.iter_mut().enumerate() {
                *v = forward_dx(grey, source_index(x, w), y);
            }
        });
        fill_rows(&mut gy, |y, row| {
            let sy = source_index(y, h);
            for (x, v) in row.iter_mut().enumerate() {
                *v = forward_dy(grey, x, sy);
            }
        });
        // The magnitude replicates as a whole: the last column copies the
        // magnitude of column w-2, not a mix of replicated and live terms.
        fill_rows(&mut magnitude, |y, row| {
            let sy = source_index(y, h);
            for (x, v) in row.iter_mut().enumerate() {
                let sx = source_index(x, w);
                let dx = forward_dx(grey, sx, sy);
                let dy = forward_dy(grey, sx, sy);
                *v = (dx * dx + dy * dy).sqrt();
            }
        });

        Self { gx, gy, magnitude }
    }
}

/// Normalize by the global maximum and invert so strong edges are cheap.
pub fn gradient_cost_map(magnitude: &ImageF32) -> ImageF32 {
    let max = magnitude.max_value().unwrap_or(0.0);
    if max <= 0.0 {
        return ImageF32::filled(magnitude.w, magnitude.h, 1.0);
    }
    let mut out = magnitude.clone();
    for v in &mut out.data {
        *v = 1.0 - *v / max;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split_columns(w: usize, h: usize, split: usize) -> ImageF32 {
        let mut img = ImageF32::new(w, h);
        for y in 0..h {
            for x in split..w {
                img.set(x, y, 1.0);
            }
        }
        img
    }

    #[test]
    fn forward_differences_replicate_last_column_and_row() {
        let grey = split_columns(4, 4, 3);
        let field = GradientField::compute(&grey);
        // Step between x=2 and x=3 shows up at x=2 and is copied into x=3.
        for y in 0..4 {
            assert_eq!(field.gx.get(2, y), 1.0);
            assert_eq!(field.gx.get(3, y), 1.0);
            assert_eq!(field.gx.get(1, y), 0.0);
            assert_eq!(field.magnitude.get(3, y), field.magnitude.get(2, y));
        }
        assert!(field.gy.data.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn cost_map_is_zero_at_strongest_edge() {
        let grey = split_columns(4, 4, 2);
        let field = GradientField::compute(&grey);
        let cost = gradient_cost_map(&field.magnitude);
        for y in 0..4 {
            assert_eq!(cost.get(1, y), 0.0);
            assert_eq!(cost.get(0, y), 1.0);
            assert_eq!(cost.get(2, y), 1.0);
            assert_eq!(cost.get(3, y), 1.0);
        }
    }

    #[test]
    fn single_column_image_has_no_horizontal_derivative() {
        let mut grey = ImageF32::new(1, 3);
        grey.set(0, 1, 0.5);
        let field = GradientField::compute(&grey);
        assert!(field.gx.data.iter().all(|&v| v == 0.0));
        assert_eq!(field.gy.get(0, 0), 0.5);
        assert_eq!(field.gy.get(0, 2), field.gy.get(0, 1));
    }

    #[test]
    fn uniform_image_maps_to_unit_cost() {
        let grey = ImageF32::filled(5, 5, 0.3);
        let field = GradientField::compute(&grey);
        let cost = gradient_cost_map(&field.magnitude);
        assert!(cost.data.iter().all(|&v| v == 1.0));
    }
}
