//! SVG export serializer.
//!
//! Converts a traced painting into an SVG string using the [`svg`]
//! crate for document construction, XML escaping, and path data
//! formatting. The brush path becomes a single `<path>` element of `M`
//! (move to) and `L` (line to) commands; each detected plus-sign center
//! becomes a `<circle>` marker.
//!
//! Grid coordinates grow upward but SVG's y axis grows downward, so y
//! is negated on the way out — an `Up` stroke points up on screen.
//!
//! Optional [`SvgMetadata`] embeds `<title>` and `<desc>` elements for
//! accessibility and to help file managers identify exported files.
//!
//! This is a pure function with no I/O -- it returns a `String`.

use svg::Document;
use svg::node::Text;
use svg::node::element::path::Data;
use svg::node::element::{Circle, Description, Path, Title};

use juji_core::Point;

/// Stroke width of the painted path, in grid units.
const PATH_STROKE_WIDTH: f64 = 0.15;
/// Radius of a plus-sign center marker, in grid units.
const CENTER_RADIUS: f64 = 0.3;
/// Margin around the painting's bounding box, in grid units.
const MARGIN: f64 = 1.0;

/// Metadata to embed in the SVG document.
///
/// Both fields are optional. When present, a `<title>` and/or `<desc>`
/// element is emitted immediately after the opening `<svg>` tag. Text
/// values are XML-escaped automatically by the `svg` crate.
#[derive(Debug, Clone, Default)]
pub struct SvgMetadata<'a> {
    /// Document title — emitted as `<title>`.
    pub title: Option<&'a str>,

    /// Document description — emitted as `<desc>`.
    ///
    /// Typically the stroke counts and result, so exported files are
    /// distinguishable.
    pub description: Option<&'a str>,
}

/// Render a painting as an SVG document string.
///
/// `path` is the sequence of vertices the brush visited (origin first);
/// `centers` are the detected plus-sign centers. A path with fewer than
/// two vertices produces a document with markers only.
#[must_use]
pub fn to_svg(path: &[Point], centers: &[Point], metadata: &SvgMetadata<'_>) -> String {
    let (min, max) = bounding_box(path.iter().chain(centers));

    let min_x = flip(min).0 - MARGIN;
    let min_y = flip(Point::new(min.x, max.y)).1 - MARGIN;
    let width = to_f64(max.x - min.x) + 2.0 * MARGIN;
    let height = to_f64(max.y - min.y) + 2.0 * MARGIN;

    let mut doc = Document::new()
        .set("width", width)
        .set("height", height)
        .set("viewBox", format!("{min_x} {min_y} {width} {height}"));

    if let Some(title) = metadata.title {
        doc = doc.add(Title::new(title));
    }
    if let Some(description) = metadata.description {
        doc = doc.add(Description::new().add(Text::new(description)));
    }

    if let Some(data) = build_path_data(path) {
        doc = doc.add(
            Path::new()
                .set("d", data)
                .set("fill", "none")
                .set("stroke", "black")
                .set("stroke-width", PATH_STROKE_WIDTH)
                .set("stroke-linecap", "round")
                .set("stroke-linejoin", "round"),
        );
    }

    for center in centers {
        let (cx, cy) = flip(*center);
        doc = doc.add(
            Circle::new()
                .set("cx", cx)
                .set("cy", cy)
                .set("r", CENTER_RADIUS)
                .set("fill", "#d33"),
        );
    }

    doc.to_string()
}

/// Build the `d` attribute data for the brush path.
///
/// Returns `None` for paths with fewer than 2 vertices (nothing was
/// painted).
fn build_path_data(path: &[Point]) -> Option<Data> {
    let (first, rest) = path.split_first()?;
    if rest.is_empty() {
        return None;
    }
    let mut data = Data::new().move_to(flip(*first));
    for p in rest {
        data = data.line_to(flip(*p));
    }
    Some(data)
}

/// Map a grid point into SVG coordinates (y negated).
fn flip(p: Point) -> (f64, f64) {
    (to_f64(p.x), to_f64(p.y.saturating_neg()))
}

/// Grid coordinates are far below 2^53, so the cast is exact.
#[allow(clippy::cast_precision_loss)]
fn to_f64(v: i64) -> f64 {
    v as f64
}

/// Bounding box over a set of points; the origin when the set is empty.
fn bounding_box<'a>(points: impl Iterator<Item = &'a Point>) -> (Point, Point) {
    let mut min = Point::new(i64::MAX, i64::MAX);
    let mut max = Point::new(i64::MIN, i64::MIN);
    let mut any = false;
    for p in points {
        any = true;
        min = Point::new(min.x.min(p.x), min.y.min(p.y));
        max = Point::new(max.x.max(p.x), max.y.max(p.y));
    }
    if any { (min, max) } else { (Point::new(0, 0), Point::new(0, 0)) }
}
