//! Link cost between two 8-connected pixels.
//!
//! Untrained, the cost blends the inverted gradient at the destination, the
//! Laplacian crossing mask and a gradient-direction smoothness term.
//! Trained, the gradient and the three appearance channels (greyscale,
//! inside, outside) go through the learned lookup tables instead.
//!
//! Weights follow Mortensen & Barrett's Intelligent Scissors and are kept as
//! fixed constants: changing them changes which boundaries are found.
use crate::features::FeatureMaps;
use crate::training::TrainingModel;
use crate::types::Point;
use nalgebra::Vector2;
use std::f64::consts::{FRAC_1_SQRT_2, PI};

pub const UNTRAINED_GRAD_WEIGHT: f64 = 0.43;
pub const UNTRAINED_LAPLACE_WEIGHT: f64 = 0.43;
pub const UNTRAINED_DIRECTION_WEIGHT: f64 = 0.11;

pub const TRAINED_GRAD_WEIGHT: f64 = 0.3;
pub const TRAINED_LAPLACE_WEIGHT: f64 = 0.3;
/// Shared by the direction term and the three appearance tables.
pub const TRAINED_DETAIL_WEIGHT: f64 = 0.1;

/// Scales `acos(dp) + acos(dq) ∈ [0, 2π]` into `[0, 4/3]`.
const TWO_THIRDS_PI: f64 = 2.0 / (3.0 * PI);

/// Upper bound of a single link cost under either weighting, rounded up.
///
/// Untrained links reach `0.43 + 0.43 + 0.11 · 4/3 ≈ 1.007`, trained ones
/// `0.3 + 0.3 + 0.1 · (4/3 + 3) ≈ 1.033`.
pub const MAX_LINK_COST: f64 = 1.05;

#[derive(Clone, Copy)]
pub struct CostFunction<'a> {
    features: &'a FeatureMaps,
    training: &'a TrainingModel,
}

impl<'a> CostFunction<'a> {
    pub fn new(features: &'a FeatureMaps, training: &'a TrainingModel) -> Self {
        Self { features, training }
    }

    /// Cost of stepping from `p` to its neighbour `q`.
    pub fn dist(&self, p: Point, q: Point) -> f64 {
        let f = self.features;
        let mut grad = f.gradient.get(q.x, q.y) as f64;
        if !p.is_diagonal_to(&q) {
            grad *= FRAC_1_SQRT_2;
        }
        let lap = f.laplace.get(q.x, q.y) as f64;
        let dir = self.grad_direction(p, q);

        if self.training.is_trained() {
            let t = self.training;
            let grad_t = t.trained_grad(grad as f32) as f64;
            let edge_t = t.trained_edge(f.greyscale.get(p.x, p.y)) as f64;
            let inside_t = t.trained_inside(f.inside.get(p.x, p.y)) as f64;
            let outside_t = t.trained_outside(f.outside.get(p.x, p.y)) as f64;
            TRAINED_GRAD_WEIGHT * grad_t
                + TRAINED_LAPLACE_WEIGHT * lap
                + TRAINED_DETAIL_WEIGHT * (dir + edge_t + inside_t + outside_t)
        } else {
            UNTRAINED_GRAD_WEIGHT * grad
                + UNTRAINED_LAPLACE_WEIGHT * lap
                + UNTRAINED_DIRECTION_WEIGHT * dir
        }
    }

    /// Smoothness term: 0 when the step runs along both pixels' edge
    /// directions, growing as the step cuts across them.
    pub fn grad_direction(&self, p: Point, q: Point) -> f64 {
        let up: Vector2<f64> = self.features.unit_gradient(p.x, p.y).cast();
        let uq: Vector2<f64> = self.features.unit_gradient(q.x, q.y).cast();
        let vx = q.x as f64 - p.x as f64;
        let vy = q.y as f64 - p.y as f64;

        let mut dp = up.y * vx - up.x * vy;
        let mut dq = uq.y * vx - uq.x * vy;
        if dp < 0.0 {
            dp = -dp;
            dq = -dq;
        }
        if p.is_diagonal_to(&q) {
            dp *= FRAC_1_SQRT_2;
            dq *= FRAC_1_SQRT_2;
        }
        TWO_THIRDS_PI * (dp.clamp(-1.0, 1.0).acos() + dq.clamp(-1.0, 1.0).acos())
    }
}
