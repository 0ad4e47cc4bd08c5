//! Per-node and per-edge painters.
//!
//! Both are called once per element per frame, inside the camera transform, so
//! all coordinates are in graph space.

use super::camera::Point;
use super::canvas::Canvas2d;
use super::style::{
	ARROW_HALF_ANGLE, ARROW_SIZE, NODE_GAP, color_for, font_size_for, size_for, stroke_for,
};
use super::theme::ColorScheme;
use super::types::{Category, EdgeKind};

/// Edges shorter than this are not drawn.
pub const MIN_EDGE_LENGTH: f64 = 1.0;

/// A node ready to be painted.
#[derive(Clone, Copy, Debug)]
pub struct NodeSprite<'a> {
	pub label: &'a str,
	pub category: Category,
	pub at: Point,
}

pub fn paint_node(
	ctx: &impl Canvas2d,
	node: &NodeSprite<'_>,
	k: f64,
	hovered: bool,
	scheme: ColorScheme,
) {
	let radius = size_for(node.category);
	let Point { x, y } = node.at;

	ctx.begin_path();
	ctx.arc(x, y, radius);
	ctx.set_fill_style(color_for(node.category));
	ctx.fill();

	if hovered {
		ctx.set_stroke_style(scheme.hover_outline());
		ctx.set_line_width(2.0 / k);
		ctx.stroke();
	}

	ctx.set_text_align("center");
	ctx.set_text_baseline("bottom");
	ctx.set_fill_style(scheme.label());
	ctx.set_font(&format!(
		"{}px Inter, sans-serif",
		font_size_for(node.category, k)
	));
	ctx.fill_text(node.label, x, y - radius - NODE_GAP);
}

/// Where an edge's line ends and which way it points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeGeometry {
	pub start: Point,
	/// Line end, `target_radius + NODE_GAP` short of the target center.
	pub end: Point,
	/// Direction of travel in radians.
	pub angle: f64,
}

impl EdgeGeometry {
	/// `None` for edges too short to have a meaningful direction.
	pub fn between(source: Point, target: Point, target_radius: f64) -> Option<Self> {
		let (dx, dy) = (target.x - source.x, target.y - source.y);
		let dist = dx.hypot(dy);
		if dist < MIN_EDGE_LENGTH {
			return None;
		}
		let (ux, uy) = (dx / dist, dy / dist);
		let back = target_radius + NODE_GAP;
		Some(Self {
			start: source,
			end: Point::new(target.x - ux * back, target.y - uy * back),
			angle: dy.atan2(dx),
		})
	}

	/// Arrowhead triangle: tip at the line end, barbs swept back by 30 degrees.
	pub fn arrowhead(&self) -> [Point; 3] {
		let tip = self.end;
		let barb = |angle: f64| {
			Point::new(
				tip.x - ARROW_SIZE * angle.cos(),
				tip.y - ARROW_SIZE * angle.sin(),
			)
		};
		[
			tip,
			barb(self.angle - ARROW_HALF_ANGLE),
			barb(self.angle + ARROW_HALF_ANGLE),
		]
	}
}

/// Paints one edge. Unresolved endpoints (`None`) and degenerate edges are
/// skipped without drawing anything.
pub fn paint_edge(
	ctx: &impl Canvas2d,
	source: Option<Point>,
	target: Option<(Point, Category)>,
	kind: EdgeKind,
) {
	let (Some(source), Some((target, target_category))) = (source, target) else {
		return;
	};
	let Some(geometry) = EdgeGeometry::between(source, target, size_for(target_category)) else {
		return;
	};
	let stroke = stroke_for(kind);

	ctx.begin_path();
	ctx.move_to(geometry.start.x, geometry.start.y);
	ctx.line_to(geometry.end.x, geometry.end.y);
	ctx.set_stroke_style(stroke.color);
	ctx.set_line_width(stroke.width);
	match stroke.dash {
		Some((dash, gap)) => ctx.set_line_dash(&[dash, gap]),
		None => ctx.set_line_dash(&[]),
	}
	ctx.stroke();
	ctx.set_line_dash(&[]);

	if !stroke.arrowhead {
		return;
	}
	let [tip, left, right] = geometry.arrowhead();
	ctx.begin_path();
	ctx.move_to(tip.x, tip.y);
	ctx.line_to(left.x, left.y);
	ctx.line_to(right.x, right.y);
	ctx.close_path();
	ctx.set_fill_style(stroke.color);
	ctx.fill();
}

#[cfg(test)]
mod tests {
	use super::super::canvas::recording::{Op, RecordingCanvas};
	use super::*;

	fn line_end(canvas: &RecordingCanvas) -> Point {
		canvas
			.ops()
			.iter()
			.find_map(|op| match *op {
				Op::LineTo(x, y) => Some(Point::new(x, y)),
				_ => None,
			})
			.unwrap()
	}

	#[test]
	fn pathway_line_stops_short_of_target_with_one_arrow() {
		let canvas = RecordingCanvas::default();
		let (from, to) = (Point::new(0.0, 0.0), Point::new(100.0, 0.0));
		paint_edge(
			&canvas,
			Some(from),
			Some((to, Category::Role)),
			EdgeKind::Pathway,
		);

		let end = line_end(&canvas);
		assert!((to.distance(end) - (7.0 + 2.0)).abs() < 1e-9);
		assert_eq!(canvas.count(|op| *op == Op::Fill), 1);
		assert_eq!(canvas.count(|op| *op == Op::ClosePath), 1);
		assert_eq!(canvas.count(|op| *op == Op::Stroke), 1);
		assert!(canvas.ops().contains(&Op::StrokeStyle("#d1d5db".into())));
		assert!(canvas.ops().contains(&Op::LineDash(vec![])));
	}

	#[test]
	fn shortening_holds_in_any_direction() {
		for (tx, ty) in [(30.0, 40.0), (-12.0, 5.0), (0.0, -80.0), (3.0, 3.0)] {
			for category in [Category::Skill, Category::Internship, Category::Unknown] {
				let target = Point::new(tx, ty);
				let geometry = EdgeGeometry::between(Point::ORIGIN, target, size_for(category))
					.unwrap();
				let expected = size_for(category) + NODE_GAP;
				assert!((target.distance(geometry.end) - expected).abs() < 1e-9);
			}
		}
	}

	#[test]
	fn arrowhead_points_at_target() {
		let geometry = EdgeGeometry::between(Point::ORIGIN, Point::new(50.0, 0.0), 3.0).unwrap();
		let [tip, left, right] = geometry.arrowhead();
		assert_eq!(tip, Point::new(45.0, 0.0));
		assert!(left.x < tip.x && right.x < tip.x);
		assert!((left.y + right.y).abs() < 1e-9);
		assert!((tip.distance(left) - ARROW_SIZE).abs() < 1e-9);
		assert!((left.y - ARROW_SIZE * ARROW_HALF_ANGLE.sin()).abs() < 1e-9);
	}

	#[test]
	fn similarity_edges_are_dashed_without_arrow() {
		let canvas = RecordingCanvas::default();
		paint_edge(
			&canvas,
			Some(Point::ORIGIN),
			Some((Point::new(0.0, 60.0), Category::Skill)),
			EdgeKind::Similarity,
		);
		assert!(canvas.ops().contains(&Op::LineDash(vec![5.0, 5.0])));
		assert!(canvas.ops().contains(&Op::LineWidth(0.8)));
		assert_eq!(canvas.count(|op| *op == Op::Fill), 0);
		assert_eq!(canvas.ops().last(), Some(&Op::LineDash(vec![])));
	}

	#[test]
	fn unresolved_or_degenerate_edges_draw_nothing() {
		let canvas = RecordingCanvas::default();
		paint_edge(
			&canvas,
			None,
			Some((Point::ORIGIN, Category::Role)),
			EdgeKind::Pathway,
		);
		paint_edge(&canvas, Some(Point::ORIGIN), None, EdgeKind::Pathway);
		paint_edge(
			&canvas,
			Some(Point::new(5.0, 5.0)),
			Some((Point::new(5.5, 5.2), Category::Role)),
			EdgeKind::Pathway,
		);
		assert!(canvas.ops().is_empty());
	}

	#[test]
	fn node_label_sits_above_circle() {
		let canvas = RecordingCanvas::default();
		let sprite = NodeSprite {
			label: "Python",
			category: Category::Skill,
			at: Point::new(10.0, 20.0),
		};
		paint_node(&canvas, &sprite, 1.0, false, ColorScheme::Light);

		let ops = canvas.ops();
		assert!(ops.contains(&Op::Arc(10.0, 20.0, 3.0)));
		assert!(ops.contains(&Op::FillStyle("#10b981".into())));
		assert!(ops.contains(&Op::FillStyle("#374151".into())));
		assert!(ops.contains(&Op::TextAlign("center".into())));
		assert!(ops.contains(&Op::TextBaseline("bottom".into())));
		assert!(ops.contains(&Op::FillText("Python".into(), 10.0, 15.0)));
		assert_eq!(canvas.count(|op| *op == Op::Stroke), 0);
	}

	#[test]
	fn hovered_node_gets_scale_compensated_outline() {
		let canvas = RecordingCanvas::default();
		let sprite = NodeSprite {
			label: "Data Analyst",
			category: Category::Role,
			at: Point::ORIGIN,
		};
		paint_node(&canvas, &sprite, 2.0, true, ColorScheme::Dark);

		let ops = canvas.ops();
		assert!(ops.contains(&Op::FillStyle("#6366f1".into())));
		assert!(ops.contains(&Op::StrokeStyle("#ffffff".into())));
		assert!(ops.contains(&Op::LineWidth(1.0)));
		assert!(ops.contains(&Op::FillStyle("#e5e7eb".into())));
		assert!(ops.contains(&Op::Font("6px Inter, sans-serif".into())));
		assert_eq!(canvas.count(|op| *op == Op::Stroke), 1);
	}
}
