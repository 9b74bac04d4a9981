//! Plus-sign detection over the covered interval sets.
//!
//! A plus sign is centered at a compressed vertex whose four adjacent
//! unit cells — left and right along its row, below and above along its
//! column — are all painted. Compressed cells always span at least one
//! real unit, so a covered adjacent cell is exactly a real arm of unit
//! length or more.
//!
//! This is step 4, the last stage of the pipeline.

use crate::sweep::LineIntervals;

/// Count the plus-sign centers in the compressed grid.
///
/// `nx` and `ny` are the compressed axis sizes; with fewer than 3
/// distinct values on either axis no internal vertex exists and the
/// count is 0.
#[must_use]
pub fn count_centers(rows: &LineIntervals, cols: &LineIntervals, nx: usize, ny: usize) -> u64 {
    let mut count = 0;
    for_each_center(rows, cols, nx, ny, |_, _| count += 1);
    count
}

/// Collect every plus-sign center as compressed `(cx, cy)` indices.
///
/// Sorted, so the output is deterministic despite the hash-map row
/// iteration order.
#[must_use]
pub fn collect_centers(
    rows: &LineIntervals,
    cols: &LineIntervals,
    nx: usize,
    ny: usize,
) -> Vec<(usize, usize)> {
    let mut centers = Vec::new();
    for_each_center(rows, cols, nx, ny, |cx, cy| centers.push((cx, cy)));
    centers.sort_unstable();
    centers
}

/// Invoke `visit` once for every compressed plus-sign center.
///
/// Rather than scanning the full grid, only cells that already have a
/// right arm are tried: for each covered row, every covered unit cell
/// start is a candidate center. A true center always has a right arm,
/// so the enumeration is complete, and the work is bounded by the
/// number of painted cells instead of the grid area. Spans within a row
/// are disjoint and rows are distinct keys, so no vertex is visited
/// twice.
fn for_each_center(
    rows: &LineIntervals,
    cols: &LineIntervals,
    nx: usize,
    ny: usize,
    mut visit: impl FnMut(usize, usize),
) {
    if nx < 3 || ny < 3 {
        return;
    }
    for (&cy, row) in rows {
        // The center needs room below and above.
        if cy == 0 || cy + 1 >= ny {
            continue;
        }
        for span in row.spans() {
            for cx in span.start..span.end {
                // Room to the left and right; the cell [cx, cx + 1) is
                // the right arm by construction.
                if cx == 0 || cx + 1 >= nx {
                    continue;
                }
                if !row.covers(cx - 1) {
                    continue;
                }
                let Some(col) = cols.get(&cx) else {
                    continue;
                };
                if col.covers(cy) && col.covers(cy - 1) {
                    visit(cx, cy);
                }
            }
        }
    }
}
