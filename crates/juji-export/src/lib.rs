//! juji-export: Pure format serializers (sans-IO)
//!
//! Converts traced paintings into output formats. Currently supports
//! SVG.

pub mod svg;

pub use svg::{SvgMetadata, to_svg};
