//! Sweep-line interval building: turn paired start/end events into the
//! covered sub-intervals of each row and column.
//!
//! Each row (and, independently, each column) is swept in compressed
//! coordinate order with a running coverage counter. Retraced strokes
//! push the counter above 1 and change nothing about which cells come
//! out covered, so duplicate painting needs no deduplication.
//!
//! This is step 3 in the pipeline, between compression and detection.

use std::collections::HashMap;

use crate::compress::CompressedAxis;
use crate::types::RawEvent;

/// Half-open range `[start, end)` in compressed index space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// First covered cell index.
    pub start: usize,
    /// One past the last covered cell index.
    pub end: usize,
}

/// Covered spans of a single row or column.
///
/// Spans are sorted by `start` and non-overlapping; a continuously
/// covered region may still be split into adjacent spans wherever an
/// event fell inside it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IntervalSet {
    spans: Vec<Span>,
}

/// Covered intervals for every line of one orientation, keyed by the
/// compressed row or column index. Lines with no coverage are absent.
pub type LineIntervals = HashMap<usize, IntervalSet>;

impl IntervalSet {
    /// Wrap spans that are already sorted by `start` and non-overlapping.
    #[must_use]
    pub fn new(spans: Vec<Span>) -> Self {
        debug_assert!(
            spans.windows(2).all(|w| w[0].end <= w[1].start),
            "spans must be sorted and non-overlapping",
        );
        Self { spans }
    }

    /// Whether the unit cell `[cell, cell + 1)` is covered.
    ///
    /// Binary search for the rightmost span with `start <= cell`, then
    /// check that it extends past `cell`. Adjacent spans from a split
    /// region still answer correctly: the split point starts its own
    /// span, which the search finds.
    #[must_use]
    pub fn covers(&self, cell: usize) -> bool {
        let i = self.spans.partition_point(|span| span.start <= cell);
        i > 0 && self.spans[i - 1].end > cell
    }

    /// The covered spans, sorted by `start`.
    #[must_use]
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// Total number of covered unit cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.spans.iter().map(|span| span.end - span.start).sum()
    }
}

/// Build the per-line interval sets for one orientation.
///
/// `event_axis` compresses the coordinate the sweep moves along (x for
/// rows, y for columns); `line_axis` compresses the fixed perpendicular
/// coordinate. Events are grouped by line, sorted by compressed event
/// coordinate, and swept: whenever the sweep advances while coverage is
/// positive, the cells passed over are recorded as one span.
///
/// No tie-break is needed for events sharing a coordinate: a span is
/// only emitted when the coordinate strictly increases, so every delta
/// at one coordinate is absorbed before the sweep moves past it.
#[must_use]
pub fn build_interval_sets(
    events: &[RawEvent],
    event_axis: &CompressedAxis,
    line_axis: &CompressedAxis,
) -> LineIntervals {
    let mut by_line: HashMap<usize, Vec<(usize, i8)>> = HashMap::new();
    for event in events {
        let (Some(at), Some(line)) = (
            event_axis.index_of(event.at),
            line_axis.index_of(event.line),
        ) else {
            // Tracing records every endpoint coordinate, so both lookups
            // succeed for events it produced.
            continue;
        };
        by_line.entry(line).or_default().push((at, event.delta));
    }

    let mut sets = LineIntervals::with_capacity(by_line.len());
    for (line, mut line_events) in by_line {
        line_events.sort_unstable_by_key(|&(at, _)| at);

        let Some(&(first, _)) = line_events.first() else {
            continue;
        };
        let mut coverage: i64 = 0;
        let mut last = first;
        let mut spans = Vec::new();

        for &(at, delta) in &line_events {
            if coverage > 0 && at > last {
                spans.push(Span { start: last, end: at });
            }
            coverage += i64::from(delta);
            last = at;
        }
        debug_assert_eq!(
            coverage, 0,
            "sweep coverage did not return to zero: unpaired events on line {line}",
        );

        if !spans.is_empty() {
            sets.insert(line, IntervalSet::new(spans));
        }
    }
    sets
}

#[cfg(test)]
mod tests {
    use super::*;

    fn axis(coords: &[i64]) -> CompressedAxis {
        CompressedAxis::new(coords.to_vec())
    }

    fn event(at: i64, line: i64, delta: i8) -> RawEvent {
        RawEvent { at, line, delta }
    }

    #[test]
    fn empty_events_produce_no_intervals() {
        let sets = build_interval_sets(&[], &axis(&[0, 1]), &axis(&[0]));
        assert!(sets.is_empty());
    }

    #[test]
    fn single_segment_covers_its_span() {
        let sets = build_interval_sets(
            &[event(0, 0, 1), event(5, 0, -1)],
            &axis(&[0, 5]),
            &axis(&[0]),
        );
        let row = &sets[&0];
        assert_eq!(row.spans(), &[Span { start: 0, end: 1 }]);
        assert!(row.covers(0));
        assert!(!row.covers(1));
    }

    #[test]
    fn lines_are_swept_independently() {
        let sets = build_interval_sets(
            &[
                event(0, 0, 1),
                event(2, 0, -1),
                event(1, 7, 1),
                event(3, 7, -1),
            ],
            &axis(&[0, 1, 2, 3]),
            &axis(&[0, 7]),
        );
        assert_eq!(sets.len(), 2);
        assert_eq!(sets[&0].spans(), &[Span { start: 0, end: 2 }]);
        assert_eq!(sets[&1].spans(), &[Span { start: 1, end: 3 }]);
    }

    #[test]
    fn overlapping_segments_merge_through_coverage() {
        // [0, 4) and [2, 6) overlap; the sweep splits at every event
        // but never loses coverage in between.
        let sets = build_interval_sets(
            &[
                event(0, 0, 1),
                event(4, 0, -1),
                event(2, 0, 1),
                event(6, 0, -1),
            ],
            &axis(&[0, 2, 4, 6]),
            &axis(&[0]),
        );
        let row = &sets[&0];
        assert_eq!(
            row.spans(),
            &[
                Span { start: 0, end: 1 },
                Span { start: 1, end: 2 },
                Span { start: 2, end: 3 },
            ],
        );
        for cell in 0..3 {
            assert!(row.covers(cell), "cell {cell} should be covered");
        }
        assert!(!row.covers(3));
    }

    #[test]
    fn touching_segments_leave_no_gap() {
        // One segment ends exactly where the next starts; the -1 and +1
        // land on the same coordinate and cancel before the sweep moves.
        let sets = build_interval_sets(
            &[
                event(0, 0, 1),
                event(3, 0, -1),
                event(3, 0, 1),
                event(5, 0, -1),
            ],
            &axis(&[0, 3, 5]),
            &axis(&[0]),
        );
        let row = &sets[&0];
        assert!(row.covers(0));
        assert!(row.covers(1));
        assert_eq!(row.cell_count(), 2);
    }

    #[test]
    fn disjoint_segments_leave_a_gap() {
        let sets = build_interval_sets(
            &[
                event(0, 0, 1),
                event(1, 0, -1),
                event(4, 0, 1),
                event(6, 0, -1),
            ],
            &axis(&[0, 1, 4, 6]),
            &axis(&[0]),
        );
        let row = &sets[&0];
        assert!(row.covers(0));
        assert!(!row.covers(1), "the gap between segments is uncovered");
        assert!(row.covers(2));
    }

    #[test]
    fn retracing_does_not_change_coverage() {
        let once = build_interval_sets(
            &[event(0, 0, 1), event(2, 0, -1)],
            &axis(&[0, 2]),
            &axis(&[0]),
        );
        let twice = build_interval_sets(
            &[
                event(0, 0, 1),
                event(2, 0, -1),
                event(0, 0, 1),
                event(2, 0, -1),
            ],
            &axis(&[0, 2]),
            &axis(&[0]),
        );
        assert_eq!(once[&0].cell_count(), twice[&0].cell_count());
        assert!(twice[&0].covers(0));
    }

    #[test]
    fn covers_uses_rightmost_candidate_span() {
        let set = IntervalSet::new(vec![Span { start: 0, end: 2 }, Span { start: 4, end: 5 }]);
        assert!(set.covers(0));
        assert!(set.covers(1));
        assert!(!set.covers(2));
        assert!(!set.covers(3));
        assert!(set.covers(4));
        assert!(!set.covers(5));
    }

    #[test]
    fn covers_on_empty_set() {
        let set = IntervalSet::default();
        assert!(!set.covers(0));
        assert_eq!(set.cell_count(), 0);
    }
}
