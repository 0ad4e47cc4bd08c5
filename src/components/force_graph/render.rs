use super::canvas::Canvas2d;
use super::paint::{NodeSprite, paint_edge, paint_node};
use super::state::{ForceGraphState, resolved};
use super::theme::ColorScheme;

pub fn render(state: &ForceGraphState, ctx: &impl Canvas2d, scheme: ColorScheme) {
	clear(ctx, state.width, state.height, scheme);
	ctx.save();
	let t = state.camera.transform();
	ctx.translate(t.x, t.y);
	ctx.scale(t.k);
	draw_edges(state, ctx);
	draw_nodes(state, ctx, scheme);
	ctx.restore();
}

/// Paints only the background, wiping whatever graph was drawn before.
pub fn clear(ctx: &impl Canvas2d, width: f64, height: f64, scheme: ColorScheme) {
	ctx.set_fill_style(scheme.background());
	ctx.fill_rect(0.0, 0.0, width, height);
}

fn draw_edges(state: &ForceGraphState, ctx: &impl Canvas2d) {
	state.graph.visit_edges(|n1, n2, edge| {
		paint_edge(
			ctx,
			resolved(n1.x(), n1.y()),
			resolved(n2.x(), n2.y()).map(|p| (p, n2.data.user_data.category)),
			edge.user_data,
		);
	});
}

fn draw_nodes(state: &ForceGraphState, ctx: &impl Canvas2d, scheme: ColorScheme) {
	let k = state.camera.k();
	state.graph.visit_nodes(|node| {
		let Some(at) = resolved(node.x(), node.y()) else {
			return;
		};
		let info = &node.data.user_data;
		let sprite = NodeSprite {
			label: &info.id,
			category: info.category,
			at,
		};
		paint_node(ctx, &sprite, k, state.is_hovered(node.index()), scheme);
	});
}
