//! Online training of the livewire cost from an accepted boundary.
//!
//! A recent stretch of path is sampled on four channels (greyscale, inverted
//! gradient, inside and outside side samples). Each channel becomes a
//! [`LookupTable`] in which frequently seen values are cheap, so subsequent
//! searches prefer edges that look like the one just traced.
//!
//! Training is all-or-nothing: too few samples leave the previous model
//! untouched, otherwise all four tables are rebuilt from scratch.
mod table;

pub use table::LookupTable;

use crate::features::FeatureMaps;
use crate::image::ImageF32;
use crate::types::Point;
use log::debug;

pub const EDGE_GRANULARITY: usize = 256;
pub const GRAD_GRANULARITY: usize = 1024;
pub const INSIDE_GRANULARITY: usize = 256;
pub const OUTSIDE_GRANULARITY: usize = 256;

pub const DEFAULT_MIN_TRAINING_POINTS: usize = 8;
pub const DEFAULT_GRAD_POINTS_NEEDED: usize = 32;

#[derive(Clone, Debug)]
pub struct TrainingModel {
    points: Vec<Point>,
    edge: LookupTable,
    grad: LookupTable,
    inside: LookupTable,
    outside: LookupTable,
    trained: bool,
    min_points: usize,
    grad_points_needed: usize,
}

impl Default for TrainingModel {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_TRAINING_POINTS, DEFAULT_GRAD_POINTS_NEEDED)
    }
}

fn samples<'a>(map: &'a ImageF32, points: &'a [Point]) -> impl Iterator<Item = f32> + 'a {
    points.iter().map(move |p| map.get(p.x, p.y))
}

impl TrainingModel {
    pub fn new(min_points: usize, grad_points_needed: usize) -> Self {
        Self {
            points: Vec::new(),
            edge: LookupTable::new(EDGE_GRANULARITY),
            grad: LookupTable::new(GRAD_GRANULARITY),
            inside: LookupTable::new(INSIDE_GRANULARITY),
            outside: LookupTable::new(OUTSIDE_GRANULARITY),
            trained: false,
            min_points,
            grad_points_needed,
        }
    }

    /// Rebuild the tables from `points` (most recent first).
    ///
    /// Returns `false` and changes nothing when fewer than the minimum number
    /// of points are supplied.
    pub fn train(&mut self, features: &FeatureMaps, points: &[Point]) -> bool {
        if points.len() < self.min_points {
            debug!(
                "TrainingModel::train skipped: {} points < {}",
                points.len(),
                self.min_points
            );
            return false;
        }

        self.edge.fit(samples(&features.greyscale, points));
        self.grad.fit(samples(&features.gradient, points));
        self.inside.fit(samples(&features.inside, points));
        self.outside.fit(samples(&features.outside, points));

        // A short path gives a spiky gradient histogram; cap it with a
        // reference line that flattens out as the sample count approaches
        // the target.
        let have = points.len();
        if have < self.grad_points_needed {
            let need = self.grad_points_needed as f32;
            let slope = (need - have as f32) / (need * GRAD_GRANULARITY as f32);
            self.grad.cap_linear(slope);
        }

        self.points.clear();
        self.points.extend_from_slice(points);
        self.trained = true;
        debug!("TrainingModel::train rebuilt tables from {} points", have);
        true
    }

    /// Forget the learned weights; the tables stay allocated.
    pub fn reset(&mut self) {
        self.trained = false;
    }

    #[inline]
    pub fn is_trained(&self) -> bool {
        self.trained
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn trained_edge(&self, value: f32) -> f32 {
        self.edge.lookup(value)
    }

    #[inline]
    pub fn trained_grad(&self, value: f32) -> f32 {
        self.grad.lookup(value)
    }

    #[inline]
    pub fn trained_inside(&self, value: f32) -> f32 {
        self.inside.lookup(value)
    }

    #[inline]
    pub fn trained_outside(&self, value: f32) -> f32 {
        self.outside.lookup(value)
    }

    /// The four tables in `(edge, grad, inside, outside)` order.
    pub fn tables(&self) -> [&LookupTable; 4] {
        [&self.edge, &self.grad, &self.inside, &self.outside]
    }
}
