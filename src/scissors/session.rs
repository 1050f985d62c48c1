//! Per-seed search state.
//!
//! A session owns the cost, parent and visited grids plus the bucket queue.
//! It is created whole by `Scissors::set_point` and dropped on the next seed;
//! nothing is carried over.
use crate::queue::BucketQueue;
use crate::types::Point;

pub(crate) struct SearchSession {
    pub seed: Point,
    pub width: usize,
    pub cost: Vec<f64>,
    pub parent: Vec<Option<Point>>,
    pub visited: Vec<bool>,
    pub queue: BucketQueue<Point>,
    granularity: f64,
}

impl SearchSession {
    pub fn new(seed: Point, width: usize, height: usize, bits: u32, granularity: f64) -> Self {
        let len = width * height;
        let mut session = Self {
            seed,
            width,
            cost: vec![f64::INFINITY; len],
            parent: vec![None; len],
            visited: vec![false; len],
            queue: BucketQueue::new(bits),
            granularity,
        };
        let i = session.idx(seed);
        session.cost[i] = 0.0;
        session.queue.push(seed, 0);
        session
    }

    #[inline]
    pub fn idx(&self, p: Point) -> usize {
        p.y * self.width + p.x
    }

    /// Bucket key of `p`'s current cost.
    #[inline]
    pub fn key(&self, p: Point) -> usize {
        self.key_for(self.cost[self.idx(p)])
    }

    #[inline]
    pub fn key_for(&self, cost: f64) -> usize {
        (self.granularity * cost).round() as usize
    }

    /// Parent chain from `from` back to the seed, `from` first.
    pub fn walk(&self, from: Point) -> impl Iterator<Item = Point> + '_ {
        std::iter::successors(Some(from), move |p| self.parent[self.idx(*p)])
    }
}
