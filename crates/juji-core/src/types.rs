//! Shared types for the juji counting pipeline.

use serde::{Deserialize, Serialize};

use crate::compress::CompressedAxis;
use crate::diagnostics::CountDiagnostics;
use crate::sweep::LineIntervals;

/// Direction of a single brush stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Toward larger y.
    Up,
    /// Toward smaller y.
    Down,
    /// Toward smaller x.
    Left,
    /// Toward larger x.
    Right,
}

impl Direction {
    /// Parse one stroke-script character (`U`, `D`, `L`, `R`).
    ///
    /// Returns `None` for any other character; see [`DirectionPolicy`]
    /// for how callers decide what that means.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'U' => Some(Self::Up),
            'D' => Some(Self::Down),
            'L' => Some(Self::Left),
            'R' => Some(Self::Right),
            _ => None,
        }
    }

    /// Whether this stroke paints along the x axis.
    #[must_use]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }
}

/// One directional line-drawing command.
///
/// Strokes are consumed in order, each starting where the previous one
/// ended. A stroke of length 0 paints nothing and does not move the
/// brush.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stroke {
    /// Number of unit cells painted.
    pub length: u32,
    /// Which way the brush moves.
    pub direction: Direction,
}

impl Stroke {
    /// Create a new stroke.
    #[must_use]
    pub const fn new(length: u32, direction: Direction) -> Self {
        Self { length, direction }
    }
}

/// An absolute grid coordinate. Tracing starts at `(0, 0)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal position.
    pub x: i64,
    /// Vertical position.
    pub y: i64,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

/// One sweep event produced by a painted segment.
///
/// A segment covering `[a, b)` (with `a < b`) on its axis yields two
/// events: `(a, +1)` and `(b, -1)`, both tagged with the constant
/// perpendicular coordinate `line` (the row for horizontal segments,
/// the column for vertical ones).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawEvent {
    /// Position along the sweep axis.
    pub at: i64,
    /// The fixed row or column this segment lies on.
    pub line: i64,
    /// `+1` at the segment start, `-1` at its end.
    pub delta: i8,
}

/// How [`parse_strokes`] treats direction characters outside `UDLR`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DirectionPolicy {
    /// Drop the stroke (the brush does not move) and log a warning.
    #[default]
    Skip,
    /// Fail with [`ParseError::InvalidDirection`].
    Strict,
}

/// Errors from parsing a stroke script.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The lengths and directions describe different stroke counts.
    #[error("stroke count mismatch: {lengths} lengths but {directions} directions")]
    LengthMismatch {
        /// Number of length entries.
        lengths: usize,
        /// Number of direction characters.
        directions: usize,
    },

    /// A direction character outside `UDLR` under [`DirectionPolicy::Strict`].
    #[error("unknown direction character {found:?} at stroke {index}")]
    InvalidDirection {
        /// Zero-based stroke index.
        index: usize,
        /// The offending character.
        found: char,
    },
}

/// Pair stroke lengths with their direction characters.
///
/// The two inputs must describe the same number of strokes. Direction
/// characters outside `UDLR` are handled per `policy`: with
/// [`DirectionPolicy::Skip`] the stroke is dropped entirely (a dropped
/// stroke neither paints nor moves the brush) and a warning is logged;
/// with [`DirectionPolicy::Strict`] parsing fails.
///
/// # Errors
///
/// Returns [`ParseError::LengthMismatch`] when the counts disagree, and
/// [`ParseError::InvalidDirection`] for an unknown character under
/// [`DirectionPolicy::Strict`].
pub fn parse_strokes(
    lengths: &[u32],
    directions: &str,
    policy: DirectionPolicy,
) -> Result<Vec<Stroke>, ParseError> {
    let direction_count = directions.chars().count();
    if lengths.len() != direction_count {
        return Err(ParseError::LengthMismatch {
            lengths: lengths.len(),
            directions: direction_count,
        });
    }

    let mut strokes = Vec::with_capacity(lengths.len());
    for (index, (&length, c)) in lengths.iter().zip(directions.chars()).enumerate() {
        match Direction::from_char(c) {
            Some(direction) => strokes.push(Stroke::new(length, direction)),
            None => match policy {
                DirectionPolicy::Strict => {
                    return Err(ParseError::InvalidDirection { index, found: c });
                }
                DirectionPolicy::Skip => {
                    log::warn!("skipping stroke {index}: unknown direction character {c:?}");
                }
            },
        }
    }
    Ok(strokes)
}

/// Result of running the counting pipeline with every intermediate
/// stage output preserved.
///
/// [`count`](crate::count) discards all of this and returns only the
/// count; [`count_staged`](crate::count_staged) keeps it for
/// diagnostics, export, and inspection.
#[derive(Debug, Clone)]
pub struct StagedCount {
    /// Vertices visited by the brush: the origin plus each painted
    /// stroke's endpoint, in order.
    pub path: Vec<Point>,
    /// Compressed x axis (distinct endpoint columns, sorted).
    pub x_axis: CompressedAxis,
    /// Compressed y axis (distinct endpoint rows, sorted).
    pub y_axis: CompressedAxis,
    /// Covered horizontal intervals, keyed by compressed row index.
    pub rows: LineIntervals,
    /// Covered vertical intervals, keyed by compressed column index.
    pub cols: LineIntervals,
    /// Plus-sign centers in real grid coordinates, sorted.
    pub centers: Vec<Point>,
    /// Number of plus signs found.
    pub plus_count: u64,
    /// Per-stage timing and counts.
    pub diagnostics: CountDiagnostics,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn direction_from_char_accepts_udlr() {
        assert_eq!(Direction::from_char('U'), Some(Direction::Up));
        assert_eq!(Direction::from_char('D'), Some(Direction::Down));
        assert_eq!(Direction::from_char('L'), Some(Direction::Left));
        assert_eq!(Direction::from_char('R'), Some(Direction::Right));
    }

    #[test]
    fn direction_from_char_rejects_other_characters() {
        assert_eq!(Direction::from_char('u'), None);
        assert_eq!(Direction::from_char('X'), None);
        assert_eq!(Direction::from_char(' '), None);
    }

    #[test]
    fn direction_orientation() {
        assert!(Direction::Left.is_horizontal());
        assert!(Direction::Right.is_horizontal());
        assert!(!Direction::Up.is_horizontal());
        assert!(!Direction::Down.is_horizontal());
    }

    #[test]
    fn parse_strokes_pairs_in_order() {
        let strokes = parse_strokes(&[1, 2, 3], "RUL", DirectionPolicy::Strict);
        assert_eq!(
            strokes,
            Ok(vec![
                Stroke::new(1, Direction::Right),
                Stroke::new(2, Direction::Up),
                Stroke::new(3, Direction::Left),
            ]),
        );
    }

    #[test]
    fn parse_strokes_mismatch_is_an_error_under_both_policies() {
        for policy in [DirectionPolicy::Skip, DirectionPolicy::Strict] {
            assert_eq!(
                parse_strokes(&[1, 2], "R", policy),
                Err(ParseError::LengthMismatch {
                    lengths: 2,
                    directions: 1,
                }),
            );
        }
    }

    #[test]
    fn parse_strokes_skip_drops_unknown_directions() {
        let strokes = parse_strokes(&[1, 2, 3], "RxU", DirectionPolicy::Skip);
        assert_eq!(
            strokes,
            Ok(vec![
                Stroke::new(1, Direction::Right),
                Stroke::new(3, Direction::Up),
            ]),
        );
    }

    #[test]
    fn parse_strokes_strict_rejects_unknown_directions() {
        assert_eq!(
            parse_strokes(&[1, 2, 3], "RxU", DirectionPolicy::Strict),
            Err(ParseError::InvalidDirection {
                index: 1,
                found: 'x',
            }),
        );
    }

    #[test]
    fn parse_error_display() {
        let err = ParseError::InvalidDirection {
            index: 4,
            found: '?',
        };
        assert_eq!(err.to_string(), "unknown direction character '?' at stroke 4");
    }

    #[test]
    fn point_serde_round_trip() {
        let p = Point::new(-3, 7);
        let json = serde_json::to_string(&p).unwrap();
        let back: Point = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }
}
