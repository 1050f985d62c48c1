//! Greyscale samples on either side of the local edge.
//!
//! The edge runs perpendicular to the gradient, so the sampling direction is
//! the unit gradient rotated by 90°: `(uy, -ux)`. `inside` is taken at
//! `+edge_width` along it and `outside` at `-edge_width`, both rounded to the
//! nearest pixel and clamped to the image.
use super::{fill_rows, round_half_up, unit_vector};
use crate::image::ImageF32;

#[derive(Clone, Debug)]
pub struct SideSamples {
    pub inside: ImageF32,
    pub outside: ImageF32,
}

pub fn side_samples(grey: &ImageF32, gx: &ImageF32, gy: &ImageF32, edge_width: usize) -> SideSamples {
    let (w, h) = (grey.w, grey.h);
    let dist = edge_width as f32;
    let sample = |x: usize, y: usize, sign: f32| {
        let u = unit_vector(gx.get(x, y), gy.get(x, y));
        let sx = round_half_up(x as f32 + sign * dist * u.y);
        let sy = round_half_up(y as f32 - sign * dist * u.x);
        grey.get_clamped(sx, sy)
    };

    let mut inside = ImageF32::new(w, h);
    let mut outside = ImageF32::new(w, h);
    fill_rows(&mut inside, |y, row| {
        for (x, v) in row.iter_mut().enumerate() {
            *v = sample(x, y, 1.0);
        }
    });
    fill_rows(&mut outside, |y, row| {
        for (x, v) in row.iter_mut().enumerate() {
            *v = sample(x, y, -1.0);
        }
    });
    SideSamples { inside, outside }
}
