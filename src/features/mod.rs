//! Per-pixel features feeding the livewire cost function.
//!
//! All maps share the image's `w × h` row-major shape and are computed once
//! per loaded image:
//!
//! - `greyscale`: mean of R, G, B scaled to `[0, 1]`.
//! - `grad_x` / `grad_y`: forward differences, last column/row replicated.
//! - `gradient`: magnitude normalized by the image maximum and inverted, so
//!   flat areas cost ~1 and the strongest edge costs 0.
//! - `laplace`: zero-crossing mask from a 13-tap Laplacian stencil (0 = edge).
//! - `inside` / `outside`: greyscale sampled `edge_width` pixels to either side
//!   of the edge, along the rotated gradient direction.
//!
//! With the `parallel` feature the row passes run on the rayon pool.
pub mod grad;
pub mod laplace;
pub mod sides;

use crate::image::{ImageF32, RgbaImage};
use log::debug;
use nalgebra::Vector2;
use std::time::Instant;

pub use grad::{gradient_cost_map, greyscale, GradientField};
pub use laplace::{laplace_crossings, LAPLACE_THRESHOLD};
pub use sides::{side_samples, SideSamples};

/// Floor applied to gradient magnitudes before normalizing to a unit vector.
pub const GRADIENT_EPSILON: f32 = 1e-4;

/// Immutable feature stack for one image.
#[derive(Clone, Debug)]
pub struct FeatureMaps {
    pub width: usize,
    pub height: usize,
    pub greyscale: ImageF32,
    pub grad_x: ImageF32,
    pub grad_y: ImageF32,
    /// Inverted, normalized gradient magnitude (usable as a cost directly).
    pub gradient: ImageF32,
    pub laplace: ImageF32,
    pub inside: ImageF32,
    pub outside: ImageF32,
    pub edge_width: usize,
}

impl FeatureMaps {
    pub fn compute(image: &RgbaImage<'_>, edge_width: usize) -> Self {
        let start = Instant::now();
        let grey = greyscale(image);
        let field = GradientField::compute(&grey);
        let gradient = gradient_cost_map(&field.magnitude);
        let laplace = laplace_crossings(&grey);
        let SideSamples { inside, outside } =
            side_samples(&grey, &field.gx, &field.gy, edge_width);
        debug!(
            "FeatureMaps::compute {}x{} edge_width={} in {:.3} ms",
            image.w,
            image.h,
            edge_width,
            start.elapsed().as_secs_f64() * 1000.0
        );
        Self {
            width: image.w,
            height: image.h,
            greyscale: grey,
            grad_x: field.gx,
            grad_y: field.gy,
            gradient,
            laplace,
            inside,
            outside,
            edge_width,
        }
    }

    /// Unit gradient vector at `(x, y)`; zero where the image is flat.
    #[inline]
    pub fn unit_gradient(&self, x: usize, y: usize) -> Vector2<f32> {
        unit_vector(self.grad_x.get(x, y), self.grad_y.get(x, y))
    }
}

#[inline]
pub(crate) fn unit_vector(gx: f32, gy: f32) -> Vector2<f32> {
    let g = Vector2::new(gx, gy);
    g / g.norm().max(GRADIENT_EPSILON)
}

/// Round half towards +∞ (matches the usual "round to nearest pixel").
#[inline]
pub(crate) fn round_half_up(v: f32) -> isize {
    (v + 0.5).floor() as isize
}

/// Fill every row of `out` with `f(y, row)`, on the rayon pool when enabled.
pub(crate) fn fill_rows<F>(out: &mut ImageF32, f: F)
where
    F: Fn(usize, &mut [f32]) + Sync + Send,
{
    let w = out.w;
    if w == 0 {
        return;
    }
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        out.data
            .par_chunks_mut(w)
            .enumerate()
            .for_each(|(y, row)| f(y, row));
    }
    #[cfg(not(feature = "parallel"))]
    {
        for (y, row) in out.data.chunks_mut(w).enumerate() {
            f(y, row);
        }
    }
}
