use serde::{Deserialize, Serialize};

/// Pixel-grid coordinate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// True for the four diagonal neighbours of `other`.
    #[inline]
    pub fn is_diagonal_to(&self, other: &Point) -> bool {
        self.x != other.x && self.y != other.y
    }

    /// Up to 8 neighbours clamped to a `width × height` grid, row by row.
    pub fn neighbours(&self, width: usize, height: usize) -> impl Iterator<Item = Point> {
        let (px, py) = (self.x, self.y);
        let x0 = px.saturating_sub(1);
        let x1 = (px + 1).min(width.saturating_sub(1));
        let y0 = py.saturating_sub(1);
        let y1 = (py + 1).min(height.saturating_sub(1));
        (y0..=y1)
            .flat_map(move |y| (x0..=x1).map(move |x| Point::new(x, y)))
            .filter(move |q| q.x != px || q.y != py)
    }
}

impl From<(usize, usize)> for Point {
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}

/// A node popped during a work batch together with its parent at that time.
///
/// The seed is reported with `parent: None`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParentLink {
    pub child: Point,
    pub parent: Option<Point>,
}
