use super::TimingBreakdown;
use crate::scissors::ScissorsParams;
use crate::types::Point;
use serde::Serialize;

/// Outcome of tracing one seed → target segment.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentTrace {
    pub seed: Point,
    pub target: Point,
    pub reached: bool,
    /// Whether trained weights were active during this segment's search.
    pub trained: bool,
    pub batches: usize,
    pub path_cost: f64,
    pub points: Vec<Point>,
    pub elapsed_ms: f64,
}

/// Serializable report written by the tracing tool.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TraceReport {
    pub width: usize,
    pub height: usize,
    pub params: ScissorsParams,
    pub segments: Vec<SegmentTrace>,
    pub timing: TimingBreakdown,
}

impl TraceReport {
    /// Concatenated polyline; shared endpoints between segments appear once.
    pub fn contour(&self) -> Vec<Point> {
        let mut out: Vec<Point> = Vec::new();
        for seg in &self.segments {
            let skip = usize::from(out.last().is_some() && out.last() == seg.points.first());
            out.extend(seg.points.iter().skip(skip).copied());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(points: &[(usize, usize)]) -> SegmentTrace {
        let points: Vec<Point> = points.iter().map(|&p| p.into()).collect();
        SegmentTrace {
            seed: points[0],
            target: *points.last().unwrap(),
            reached: true,
            trained: false,
            batches: 1,
            path_cost: 0.0,
            points,
            elapsed_ms: 0.0,
        }
    }

    #[test]
    fn contour_joins_segments_without_duplicates() {
        let report = TraceReport {
            width: 4,
            height: 4,
            params: ScissorsParams::default(),
            segments: vec![segment(&[(0, 0), (1, 1)]), segment(&[(1, 1), (2, 1)])],
            timing: TimingBreakdown::default(),
        };
        assert_eq!(
            report.contour(),
            vec![Point::new(0, 0), Point::new(1, 1), Point::new(2, 1)]
        );
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"pathCost\""));
    }
}
