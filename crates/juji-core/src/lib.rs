//! juji-core: Pure plus-sign counting pipeline (sans-IO).
//!
//! Counts the grid points where painted unit segments meet from all
//! four cardinal directions ("plus signs") after a sequence of
//! axis-aligned brush strokes is drawn from the origin:
//! trace -> compress -> sweep -> detect.
//!
//! This crate has **no I/O dependencies** -- it operates on in-memory
//! stroke sequences and returns structured data. File handling and
//! terminal output live in the `juji` CLI crate.

use std::time::Instant;

pub mod compress;
pub mod detect;
pub mod diagnostics;
pub mod sweep;
pub mod trace;
pub mod types;

use diagnostics::{CountDiagnostics, CountSummary, StageDiagnostics, StageMetrics};

pub use compress::CompressedAxis;
pub use sweep::{IntervalSet, LineIntervals, Span};
pub use trace::TracedPath;
pub use types::{
    Direction, DirectionPolicy, ParseError, Point, RawEvent, StagedCount, Stroke, parse_strokes,
};

/// Count the plus signs painted by a stroke sequence.
///
/// # Pipeline steps
///
/// 1. Trace the strokes into normalized sweep events
/// 2. Compress each axis's endpoint coordinates to dense indices
/// 3. Sweep rows and columns into covered interval sets
/// 4. Detect centers whose four adjacent cells are all covered
#[must_use]
pub fn count(strokes: &[Stroke]) -> u64 {
    // 1. Trace.
    let traced = trace::trace(strokes);

    // 2. Compress both axes.
    let x_axis = CompressedAxis::new(traced.xs);
    let y_axis = CompressedAxis::new(traced.ys);

    // Fewer than 3 distinct values on either axis leaves no internal
    // vertex to center a plus on.
    if x_axis.len() < 3 || y_axis.len() < 3 {
        return 0;
    }

    // 3. Sweep rows and columns independently.
    let rows = sweep::build_interval_sets(&traced.h_events, &x_axis, &y_axis);
    let cols = sweep::build_interval_sets(&traced.v_events, &y_axis, &x_axis);

    // 4. Detect.
    detect::count_centers(&rows, &cols, x_axis.len(), y_axis.len())
}

/// Count plus signs from the raw problem inputs.
///
/// The lenient entry point: `stroke_count` must equal both the number
/// of lengths and the number of direction characters, and at least two
/// strokes are needed to paint anything that intersects; anything less
/// is a degenerate-but-valid input that counts 0 rather than erroring.
/// Direction characters outside `UDLR` are skipped with a logged
/// warning ([`DirectionPolicy::Skip`]); hosts that prefer failing fast
/// should use [`parse_strokes`] with [`DirectionPolicy::Strict`] and
/// [`count`].
#[must_use]
pub fn count_plus_signs(stroke_count: usize, lengths: &[u32], directions: &str) -> u64 {
    if stroke_count < 2
        || lengths.len() != stroke_count
        || directions.chars().count() != stroke_count
    {
        return 0;
    }
    // The counts agree, so the lenient parse cannot fail.
    let strokes =
        parse_strokes(lengths, directions, DirectionPolicy::Skip).unwrap_or_default();
    count(&strokes)
}

/// Run the counting pipeline keeping every intermediate stage output,
/// plus per-stage diagnostics.
///
/// Callers that only need the count should prefer [`count`], which
/// discards the intermediates.
#[must_use]
pub fn count_staged(strokes: &[Stroke]) -> StagedCount {
    let total_start = Instant::now();

    // 1. Trace.
    let stage_start = Instant::now();
    let traced = trace::trace(strokes);
    let TracedPath {
        h_events,
        v_events,
        xs,
        ys,
        vertices,
        painted_count,
    } = traced;
    let trace_diag = StageDiagnostics {
        duration: stage_start.elapsed(),
        metrics: StageMetrics::Trace {
            stroke_count: strokes.len(),
            painted_count,
            horizontal_events: h_events.len(),
            vertical_events: v_events.len(),
        },
    };

    // 2. Compress.
    let stage_start = Instant::now();
    let x_axis = CompressedAxis::new(xs);
    let y_axis = CompressedAxis::new(ys);
    let compress_diag = StageDiagnostics {
        duration: stage_start.elapsed(),
        metrics: StageMetrics::Compress {
            distinct_x: x_axis.len(),
            distinct_y: y_axis.len(),
        },
    };

    // 3. Sweep. (Unlike `count`, no early exit on a degenerate grid:
    // the intermediates are wanted regardless, and detection is a no-op
    // on fewer than 3 distinct values per axis.)
    let stage_start = Instant::now();
    let rows = sweep::build_interval_sets(&h_events, &x_axis, &y_axis);
    let cols = sweep::build_interval_sets(&v_events, &y_axis, &x_axis);
    let sweep_diag = StageDiagnostics {
        duration: stage_start.elapsed(),
        metrics: StageMetrics::Sweep {
            covered_rows: rows.len(),
            covered_cols: cols.len(),
            row_spans: rows.values().map(|set| set.spans().len()).sum(),
            col_spans: cols.values().map(|set| set.spans().len()).sum(),
            covered_cells: rows
                .values()
                .chain(cols.values())
                .map(IntervalSet::cell_count)
                .sum(),
        },
    };

    // 4. Detect, mapping centers back to real coordinates.
    let stage_start = Instant::now();
    let compressed = detect::collect_centers(&rows, &cols, x_axis.len(), y_axis.len());
    let plus_count = compressed.len() as u64;
    let centers: Vec<Point> = compressed
        .into_iter()
        .filter_map(|(cx, cy)| match (x_axis.value_at(cx), y_axis.value_at(cy)) {
            (Some(x), Some(y)) => Some(Point::new(x, y)),
            _ => None,
        })
        .collect();
    let detect_diag = StageDiagnostics {
        duration: stage_start.elapsed(),
        metrics: StageMetrics::Detect { plus_count },
    };

    let diagnostics = CountDiagnostics {
        summary: CountSummary {
            stroke_count: strokes.len(),
            distinct_x: x_axis.len(),
            distinct_y: y_axis.len(),
            plus_count,
        },
        trace: trace_diag,
        compress: compress_diag,
        sweep: sweep_diag,
        detect: detect_diag,
        total_duration: total_start.elapsed(),
    };

    StagedCount {
        path: vertices,
        x_axis,
        y_axis,
        rows,
        cols,
        centers,
        plus_count,
        diagnostics,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn strokes(lengths: &[u32], directions: &str) -> Vec<Stroke> {
        parse_strokes(lengths, directions, DirectionPolicy::Strict).unwrap()
    }

    #[test]
    fn degenerate_stroke_count_returns_zero() {
        assert_eq!(count_plus_signs(0, &[], ""), 0);
        assert_eq!(count_plus_signs(1, &[5], "R"), 0);
    }

    #[test]
    fn mismatched_inputs_return_zero() {
        assert_eq!(count_plus_signs(3, &[1, 2], "RUL"), 0);
        assert_eq!(count_plus_signs(3, &[1, 2, 3], "RU"), 0);
        assert_eq!(count_plus_signs(2, &[1, 2, 3], "RUL"), 0);
    }

    #[test]
    fn unknown_directions_are_skipped_not_miscounted() {
        // The cross from [5,2,3,4] "RDLU" with junk strokes mixed in;
        // the junk is dropped, the painting is unchanged.
        let with_junk = count_plus_signs(6, &[5, 9, 2, 3, 4, 7], "RxDLUz");
        let clean = count_plus_signs(4, &[5, 2, 3, 4], "RDLU");
        assert_eq!(with_junk, clean);
        assert_eq!(clean, 1);
    }

    #[test]
    fn single_line_has_no_plus() {
        assert_eq!(count(&strokes(&[10], "R")), 0);
        assert_eq!(count(&strokes(&[4, 4], "UU")), 0);
    }

    #[test]
    fn zero_length_strokes_do_not_contribute() {
        let with_zeros = count(&strokes(&[5, 0, 2, 0, 3, 4], "RUDULU"));
        let without = count(&strokes(&[5, 2, 3, 4], "RDLU"));
        assert_eq!(with_zeros, without);
    }

    #[test]
    fn count_is_idempotent() {
        let s = strokes(&[6, 3, 4, 5, 1, 6, 3, 3, 4], "ULDRULURD");
        assert_eq!(count(&s), count(&s));
    }

    #[test]
    fn staged_count_matches_count() {
        let s = strokes(&[6, 3, 4, 5, 1, 6, 3, 3, 4], "ULDRULURD");
        let staged = count_staged(&s);
        assert_eq!(staged.plus_count, count(&s));
        assert_eq!(staged.centers.len() as u64, staged.plus_count);
        assert_eq!(staged.diagnostics.summary.plus_count, staged.plus_count);
    }

    #[test]
    fn staged_centers_are_real_coordinates() {
        // (0,0) -R5-> (5,0) -D2-> (5,-2) -L3-> (2,-2) -U4-> (2,2):
        // the final vertical stroke crosses the first horizontal one
        // at (2, 0).
        let staged = count_staged(&strokes(&[5, 2, 3, 4], "RDLU"));
        assert_eq!(staged.centers, vec![Point::new(2, 0)]);
        assert_eq!(staged.plus_count, 1);
    }

    #[test]
    fn staged_path_records_visited_vertices() {
        let staged = count_staged(&strokes(&[5, 2, 3, 4], "RDLU"));
        assert_eq!(
            staged.path,
            vec![
                Point::new(0, 0),
                Point::new(5, 0),
                Point::new(5, -2),
                Point::new(2, -2),
                Point::new(2, 2),
            ],
        );
    }

    #[test]
    fn staged_on_empty_input_is_all_zero() {
        let staged = count_staged(&[]);
        assert_eq!(staged.plus_count, 0);
        assert!(staged.centers.is_empty());
        assert!(staged.rows.is_empty());
        assert!(staged.cols.is_empty());
        assert_eq!(staged.path, vec![Point::new(0, 0)]);
    }
}
