//! Category and edge-kind styling.
//!
//! Every function here is pure and total: the same input always yields the
//! same value, and [`Category::Unknown`] falls back to a neutral gray.

use super::types::{Category, EdgeKind};

/// Gap between a node's circle and the end of an incoming edge, and between the
/// circle and its label.
pub const NODE_GAP: f64 = 2.0;

/// Arrowhead length in canvas units. Not zoom-compensated.
pub const ARROW_SIZE: f64 = 6.0;

/// Arrowhead half-angle (30 degrees).
pub const ARROW_HALF_ANGLE: f64 = std::f64::consts::PI / 6.0;

/// Base label size in screen pixels at zoom 1.
const BASE_FONT_SIZE: f64 = 12.0;

pub fn color_for(category: Category) -> &'static str {
	match category {
		Category::Role => "#6366f1",       // indigo
		Category::Skill => "#10b981",      // green
		Category::Internship => "#f59e0b", // amber
		Category::Unknown => "#6b7280",    // gray
	}
}

/// Circle radius in graph units, before zoom.
pub fn size_for(category: Category) -> f64 {
	match category {
		Category::Role => 7.0,
		Category::Skill => 3.0,
		Category::Internship => 9.0,
		Category::Unknown => 4.0,
	}
}

/// Label font size in graph units. Dividing by `zoom` cancels the canvas
/// transform so labels keep a steady on-screen size.
pub fn font_size_for(category: Category, zoom: f64) -> f64 {
	let base = BASE_FONT_SIZE / zoom;
	match category {
		Category::Skill => base * 0.8,
		Category::Role => base,
		Category::Internship => base * 1.1,
		Category::Unknown => base,
	}
}

/// Pointer area used for hover and click hit-testing.
pub fn hit_radius_for(category: Category) -> f64 {
	size_for(category) + NODE_GAP
}

/// How an edge of a given kind is stroked.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeStroke {
	pub color: &'static str,
	pub width: f64,
	/// `(dash, gap)`; `None` for a solid line.
	pub dash: Option<(f64, f64)>,
	/// Whether a directional arrowhead is drawn at the target end.
	pub arrowhead: bool,
}

pub fn stroke_for(kind: EdgeKind) -> EdgeStroke {
	match kind {
		EdgeKind::Similarity => EdgeStroke {
			color: "#9ca3af",
			width: 0.8,
			dash: Some((5.0, 5.0)),
			arrowhead: false,
		},
		EdgeKind::Pathway => EdgeStroke {
			color: "#d1d5db",
			width: 1.0,
			dash: None,
			arrowhead: true,
		},
	}
}
