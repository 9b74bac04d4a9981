//! Path tracing: walk the stroke sequence from the origin, computing
//! absolute segment endpoints and emitting normalized sweep events.
//!
//! Every painted segment is normalized so its interval runs from the
//! smaller coordinate to the larger one (`Down` and `Left` strokes are
//! swapped). Later stages rely on this: each segment contributes exactly
//! one `+1` and one `-1` event with start < end, so the sweep's coverage
//! counter is always correctly paired.
//!
//! This is step 1 in the pipeline, before coordinate compression.

use crate::types::{Direction, Point, RawEvent, Stroke};

/// Everything one walk over the strokes produces for the later stages.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TracedPath {
    /// Events from horizontal segments: `at` is x, `line` is the row (y).
    pub h_events: Vec<RawEvent>,
    /// Events from vertical segments: `at` is y, `line` is the column (x).
    pub v_events: Vec<RawEvent>,
    /// Every x coordinate appearing as a segment endpoint (unsorted,
    /// with duplicates; compression sorts and dedups).
    pub xs: Vec<i64>,
    /// Every y coordinate appearing as a segment endpoint.
    pub ys: Vec<i64>,
    /// Vertices visited: the origin plus each painted stroke's endpoint,
    /// in order. Retained for export and inspection.
    pub vertices: Vec<Point>,
    /// Strokes that painted at least one cell.
    pub painted_count: usize,
}

/// Walk the strokes from `(0, 0)` and collect segments as sweep events.
///
/// Zero-length strokes neither move the brush nor emit events.
/// Retraced cells are represented as overlapping intervals; the sweep's
/// coverage counter absorbs the overlap without any deduplication.
#[must_use]
pub fn trace(strokes: &[Stroke]) -> TracedPath {
    let mut path = TracedPath {
        vertices: vec![Point::new(0, 0)],
        ..TracedPath::default()
    };
    let mut pos = Point::new(0, 0);

    for stroke in strokes {
        if stroke.length == 0 {
            continue;
        }
        let len = i64::from(stroke.length);
        let next = match stroke.direction {
            Direction::Up => Point::new(pos.x, pos.y + len),
            Direction::Down => Point::new(pos.x, pos.y - len),
            Direction::Left => Point::new(pos.x - len, pos.y),
            Direction::Right => Point::new(pos.x + len, pos.y),
        };

        if stroke.direction.is_horizontal() {
            let (start, end) = ordered(pos.x, next.x);
            path.h_events.push(RawEvent {
                at: start,
                line: pos.y,
                delta: 1,
            });
            path.h_events.push(RawEvent {
                at: end,
                line: pos.y,
                delta: -1,
            });
        } else {
            let (start, end) = ordered(pos.y, next.y);
            path.v_events.push(RawEvent {
                at: start,
                line: pos.x,
                delta: 1,
            });
            path.v_events.push(RawEvent {
                at: end,
                line: pos.x,
                delta: -1,
            });
        }

        path.xs.push(pos.x);
        path.xs.push(next.x);
        path.ys.push(pos.y);
        path.ys.push(next.y);
        path.vertices.push(next);
        path.painted_count += 1;
        pos = next;
    }

    path
}

/// Order a segment's endpoints so the interval runs low to high.
const fn ordered(a: i64, b: i64) -> (i64, i64) {
    if a <= b { (a, b) } else { (b, a) }
}
