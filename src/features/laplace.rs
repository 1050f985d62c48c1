//! Laplacian zero-crossing mask.
//!
//! The stencil spans a 5×5 window:
//!
//! ```text
//!         1
//!     1   2   1
//! 1   2 -16   2   1
//!     1   2   1
//!         1
//! ```
//!
//! A response above [`LAPLACE_THRESHOLD`] marks the pixel as lying on an
//! edge (cost 0). The 2-pixel border the stencil cannot reach is 1.
use super::fill_rows;
use crate::image::ImageF32;

pub const LAPLACE_THRESHOLD: f32 = 0.33;

const MARGIN: usize = 2;

#[inline]
fn response(g: &ImageF32, x: usize, y: usize) -> f32 {
    let at = |dx: isize, dy: isize| g.get((x as isize + dx) as usize, (y as isize + dy) as usize);
    let far = at(0, -2) + at(0, 2) + at(-2, 0) + at(2, 0);
    let diag = at(-1, -1) + at(1, -1) + at(-1, 1) + at(1, 1);
    let near = at(0, -1) + at(0, 1) + at(-1, 0) + at(1, 0);
    -16.0 * g.get(x, y) + far + diag + 2.0 * near
}

pub fn laplace_crossings(grey: &ImageF32) -> ImageF32 {
    let (w, h) = (grey.w, grey.h);
    let mut out = ImageF32::filled(w, h, 1.0);
    if w <= 2 * MARGIN || h <= 2 * MARGIN {
        return out;
    }
    fill_rows(&mut out, |y, row| {
        if y < MARGIN || y >= h - MARGIN {
            return;
        }
        for (x, v) in row.iter_mut().enumerate().take(w - MARGIN).skip(MARGIN) {
            *v = if response(grey, x, y) > LAPLACE_THRESHOLD {
                0.0
            } else {
                1.0
            };
        }
    });
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(w: usize, h: usize, split: usize) -> ImageF32 {
        let mut img = ImageF32::new(w, h);
        for y in 0..h {
            for x in split..w {
                img.set(x, y, 1.0);
            }
        }
        img
    }

    #[test]
    fn marks_dark_side_of_step() {
        let lap = laplace_crossings(&step(10, 8, 5));
        for y in 2..6 {
            assert_eq!(lap.get(4, y), 0.0, "boundary column at y={y}");
            assert_eq!(lap.get(3, y), 0.0);
            assert_eq!(lap.get(5, y), 1.0);
            assert_eq!(lap.get(7, y), 1.0);
        }
        // padding
        for x in 0..10 {
            assert_eq!(lap.get(x, 0), 1.0);
            assert_eq!(lap.get(x, 7), 1.0);
        }
        assert_eq!(lap.get(1, 4), 1.0);
    }

    #[test]
    fn small_images_are_all_padding() {
        let lap = laplace_crossings(&step(4, 4, 2));
        assert!(lap.data.iter().all(|&v| v == 1.0));
    }
}
