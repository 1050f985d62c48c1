//! Interactive livewire search over the pixel graph.
//!
//! Overview
//! - `set_dimensions` + `set_data` load one image and compute its
//!   [`FeatureMaps`]; the training model is reset.
//! - `set_point` starts a search session at a seed: cost 0 at
//!   the seed, +∞ elsewhere, the seed queued.
//! - `do_work` runs a bounded batch of Dijkstra relaxation over the
//!   8-connected grid, keyed by a [`BucketQueue`](crate::queue::BucketQueue).
//!   Callers interleave batches with UI work and stop once their target has
//!   a parent.
//! - `do_training` learns the cost tables from the path ending at a point.
//!
//! State
//! - `Idle` until a seed is set, `Seeded` until the first batch pops a node,
//!   then `Searching`. Re-seeding discards the session and returns to
//!   `Seeded`; it is also the only way to cancel a search.
//! - The parent grid is the source of truth for paths. The links returned by
//!   `do_work` only report what a batch discovered.

pub mod params;
mod session;

pub use params::ScissorsParams;

use self::session::SearchSession;
use crate::cost::CostFunction;
use crate::error::LivewireError;
use crate::features::FeatureMaps;
use crate::image::RgbaImage;
use crate::training::TrainingModel;
use crate::types::{ParentLink, Point};
use log::{debug, trace};
use std::time::Instant;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchState {
    Idle,
    Seeded,
    Searching,
}

pub struct Scissors {
    params: ScissorsParams,
    dims: Option<(usize, usize)>,
    features: Option<FeatureMaps>,
    training: TrainingModel,
    session: Option<SearchSession>,
    state: SearchState,
}

impl Default for Scissors {
    fn default() -> Self {
        Self::with_valid_params(ScissorsParams::default())
    }
}

impl Scissors {
    /// Engine with validated `params`; see [`ScissorsParams::validate`].
    pub fn new(params: ScissorsParams) -> Result<Self, LivewireError> {
        params.validate()?;
        Ok(Self::with_valid_params(params))
    }

    fn with_valid_params(params: ScissorsParams) -> Self {
        let training = TrainingModel::new(params.min_training_points, params.grad_points_needed);
        Self {
            params,
            dims: None,
            features: None,
            training,
            session: None,
            state: SearchState::Idle,
        }
    }

    pub fn params(&self) -> &ScissorsParams {
        &self.params
    }

    /// Store the grid size. Drops any loaded image and session.
    ///
    /// Zero sides and sizes whose RGBA buffer length overflows `usize` are
    /// rejected.
    pub fn set_dimensions(&mut self, width: usize, height: usize) -> Result<(), LivewireError> {
        if width == 0 || height == 0 || RgbaImage::byte_len(width, height).is_none() {
            return Err(LivewireError::InvalidDimensions { width, height });
        }
        self.dims = Some((width, height));
        self.features = None;
        self.session = None;
        self.state = SearchState::Idle;
        Ok(())
    }

    pub fn dimensions(&self) -> Option<(usize, usize)> {
        self.dims
    }

    /// Load an RGBA buffer of `width * height * 4` bytes.
    pub fn set_data(&mut self, buffer: &[u8]) -> Result<(), LivewireError> {
        let (w, h) = self.dims.ok_or(LivewireError::DimensionsNotSet)?;
        let image = RgbaImage::new(w, h, buffer)?;
        self.features = Some(FeatureMaps::compute(&image, self.params.edge_width));
        self.training = TrainingModel::new(
            self.params.min_training_points,
            self.params.grad_points_needed,
        );
        self.session = None;
        self.state = SearchState::Idle;
        Ok(())
    }

    /// Start a fresh search at `seed`, discarding the current session.
    pub fn set_point(&mut self, seed: Point) -> Result<(), LivewireError> {
        let (w, h) = self.loaded_dims()?;
        self.check_bounds(seed)?;
        let start = Instant::now();
        self.session = Some(SearchSession::new(
            seed,
            w,
            h,
            self.params.search_gran_bits,
            self.params.search_granularity,
        ));
        self.state = SearchState::Seeded;
        debug!(
            "Scissors::set_point seed=({}, {}) grid={}x{} in {:.3} ms",
            seed.x,
            seed.y,
            w,
            h,
            start.elapsed().as_secs_f64() * 1000.0
        );
        Ok(())
    }

    /// Pop and relax up to `points_per_post` nodes.
    ///
    /// Returns one link per popped node. Empty when idle or when the queue has
    /// drained; neither case touches the session.
    pub fn do_work(&mut self) -> Vec<ParentLink> {
        let (Some(session), Some(features)) = (self.session.as_mut(), self.features.as_ref())
        else {
            return Vec::new();
        };
        let cost_fn = CostFunction::new(features, &self.training);
        let (w, h) = (features.width, features.height);
        let budget = self.params.points_per_post;

        let mut links = Vec::with_capacity(budget.min(session.queue.len()));
        while links.len() < budget {
            let Some(p) = session.queue.try_pop() else {
                break;
            };
            let pi = session.idx(p);
            session.visited[pi] = true;
            links.push(ParentLink {
                child: p,
                parent: session.parent[pi],
            });

            let base = session.cost[pi];
            for q in p.neighbours(w, h) {
                let qi = session.idx(q);
                if session.visited[qi] {
                    continue;
                }
                let new_cost = base + cost_fn.dist(p, q);
                if new_cost < session.cost[qi] {
                    if session.cost[qi].is_finite() {
                        // Queued under its old cost; re-key it.
                        let old_key = session.key(q);
                        session.queue.remove(&q, old_key);
                    }
                    session.cost[qi] = new_cost;
                    session.parent[qi] = Some(p);
                    let key = session.key_for(new_cost);
                    session.queue.push(q, key);
                }
            }
        }

        if !links.is_empty() {
            self.state = SearchState::Searching;
        }
        trace!(
            "Scissors::do_work popped={} queued={}",
            links.len(),
            session.queue.len()
        );
        links
    }

    /// Train the cost tables from the path that ends at `point`.
    ///
    /// Returns `Ok(false)` when the path is too short to train on; the
    /// previous model stays in effect.
    pub fn do_training(&mut self, point: Point) -> Result<bool, LivewireError> {
        self.check_bounds(point)?;
        let features = self.features.as_ref().ok_or(LivewireError::NoImageData)?;
        let session = self.session.as_ref().ok_or(LivewireError::NoSession)?;
        let points: Vec<Point> = session
            .walk(point)
            .take(self.params.training_length)
            .collect();
        Ok(self.training.train(features, &points))
    }

    /// Switch back to the static weights.
    pub fn reset_training(&mut self) {
        self.training.reset();
    }

    /// Seed-to-target polyline, or `None` while `target` is unreached.
    pub fn path_to(&self, target: Point) -> Option<Vec<Point>> {
        let session = self.session.as_ref()?;
        if !self.in_bounds(target) || !self.reached(session, target) {
            return None;
        }
        let mut path: Vec<Point> = session.walk(target).collect();
        path.reverse();
        Some(path)
    }

    /// Run batches until `target` is reached, the queue drains, or
    /// `max_batches` have run; then return the path if there is one.
    pub fn search_to(
        &mut self,
        target: Point,
        max_batches: usize,
    ) -> Result<Option<Vec<Point>>, LivewireError> {
        self.check_bounds(target)?;
        if self.session.is_none() {
            return Err(LivewireError::NoSession);
        }
        let mut batches = 0;
        while batches < max_batches && !self.is_reachable(target) {
            if self.do_work().is_empty() {
                break;
            }
            batches += 1;
        }
        debug!(
            "Scissors::search_to ({}, {}) after {} batches: reached={}",
            target.x,
            target.y,
            batches,
            self.is_reachable(target)
        );
        Ok(self.path_to(target))
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    pub fn seed(&self) -> Option<Point> {
        self.session.as_ref().map(|s| s.seed)
    }

    pub fn features(&self) -> Option<&FeatureMaps> {
        self.features.as_ref()
    }

    pub fn training(&self) -> &TrainingModel {
        &self.training
    }

    /// Accumulated cost at `p`; `+∞` while unreached, `None` without a session.
    pub fn cost(&self, p: Point) -> Option<f64> {
        let session = self.session.as_ref()?;
        self.in_bounds(p).then(|| session.cost[session.idx(p)])
    }

    pub fn parent(&self, p: Point) -> Option<Point> {
        let session = self.session.as_ref()?;
        if !self.in_bounds(p) {
            return None;
        }
        session.parent[session.idx(p)]
    }

    pub fn is_visited(&self, p: Point) -> bool {
        match self.session.as_ref() {
            Some(session) if self.in_bounds(p) => session.visited[session.idx(p)],
            _ => false,
        }
    }

    /// True once a path from the seed to `p` is known.
    pub fn is_reachable(&self, p: Point) -> bool {
        match self.session.as_ref() {
            Some(session) if self.in_bounds(p) => self.reached(session, p),
            _ => false,
        }
    }

    /// Nodes still waiting in the queue.
    pub fn pending(&self) -> usize {
        self.session.as_ref().map_or(0, |s| s.queue.len())
    }

    fn reached(&self, session: &SearchSession, p: Point) -> bool {
        p == session.seed || session.parent[session.idx(p)].is_some()
    }

    fn loaded_dims(&self) -> Result<(usize, usize), LivewireError> {
        self.features
            .as_ref()
            .map(|f| (f.width, f.height))
            .ok_or(LivewireError::NoImageData)
    }

    #[inline]
    fn in_bounds(&self, p: Point) -> bool {
        self.dims.is_some_and(|(w, h)| p.x < w && p.y < h)
    }

    fn check_bounds(&self, p: Point) -> Result<(), LivewireError> {
        let (width, height) = self.dims.ok_or(LivewireError::DimensionsNotSet)?;
        if p.x < width && p.y < height {
            Ok(())
        } else {
            Err(LivewireError::PointOutOfBounds {
                x: p.x,
                y: p.y,
                width,
                height,
            })
        }
    }
}
