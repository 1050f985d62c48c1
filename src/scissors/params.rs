//! Tunable knobs of the search engine.
//!
//! Only scheduling and sampling parameters live here. Cost weights and the
//! Laplacian threshold are algorithm constants (see `cost` and `features`).
use crate::cost::MAX_LINK_COST;
use crate::error::LivewireError;
use crate::training::{DEFAULT_GRAD_POINTS_NEEDED, DEFAULT_MIN_TRAINING_POINTS};
use serde::{Deserialize, Serialize};

/// Largest accepted `search_gran_bits` (16M buckets).
pub const MAX_SEARCH_GRAN_BITS: u32 = 24;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScissorsParams {
    /// Nodes popped per `do_work` call.
    pub points_per_post: usize,
    /// The bucket queue holds `2^search_gran_bits` buckets.
    pub search_gran_bits: u32,
    /// Scale applied to path costs before rounding to a bucket.
    ///
    /// `search_granularity * MAX_LINK_COST + 1` must stay below
    /// `2^search_gran_bits` for the queue to pop in order. The default is a
    /// quarter of the bucket count, not the full bucket count: scaling by
    /// `2^bits` would let a single link jump past the window.
    pub search_granularity: f64,
    /// Distance in pixels of the inside/outside samples from the edge.
    pub edge_width: usize,
    /// Maximum number of path points used for training.
    pub training_length: usize,
    /// Training is skipped below this many points.
    pub min_training_points: usize,
    /// Below this many points the gradient table is capped by a reference line.
    pub grad_points_needed: usize,
}

impl Default for ScissorsParams {
    fn default() -> Self {
        let search_gran_bits = 8;
        Self {
            points_per_post: 500,
            search_gran_bits,
            search_granularity: granularity_for_bits(search_gran_bits),
            edge_width: 2,
            training_length: 32,
            min_training_points: DEFAULT_MIN_TRAINING_POINTS,
            grad_points_needed: DEFAULT_GRAD_POINTS_NEEDED,
        }
    }
}

/// Default cost scale for a queue of `2^bits` buckets: `2^(bits - 2)`.
pub fn granularity_for_bits(bits: u32) -> f64 {
    (1u64 << bits.saturating_sub(2).min(MAX_SEARCH_GRAN_BITS)) as f64
}

impl ScissorsParams {
    /// Reject values that would overflow the bucket queue or stall the search.
    pub fn validate(&self) -> Result<(), LivewireError> {
        let invalid = |msg: String| Err(LivewireError::InvalidParams(msg));
        if self.points_per_post == 0 {
            return invalid("points_per_post must be positive".to_string());
        }
        if self.search_gran_bits == 0 || self.search_gran_bits > MAX_SEARCH_GRAN_BITS {
            return invalid(format!(
                "search_gran_bits must be in 1..={MAX_SEARCH_GRAN_BITS}, got {}",
                self.search_gran_bits
            ));
        }
        let g = self.search_granularity;
        if !g.is_finite() || g <= 0.0 {
            return invalid(format!(
                "search_granularity must be finite and positive, got {g}"
            ));
        }
        let buckets = (1u64 << self.search_gran_bits) as f64;
        if g * MAX_LINK_COST + 1.0 >= buckets {
            return invalid(format!(
                "search_granularity {g} overflows {buckets} buckets (max link cost {MAX_LINK_COST})"
            ));
        }
        Ok(())
    }
}
