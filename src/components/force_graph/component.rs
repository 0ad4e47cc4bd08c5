//! Leptos component wrapping the career graph canvas.
//!
//! The component validates the dataset, builds the simulation, and runs an
//! animation loop via `requestAnimationFrame` that ticks the simulation and
//! camera and repaints each frame. Mouse handlers drive hover, node dragging,
//! panning and wheel zoom; the navigation buttons drive the camera controller.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use leptos::prelude::*;
use log::{debug, error, info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, WheelEvent};

use super::camera::CameraCommand;
use super::config::{CameraConfig, SimulationTuning};
use super::dataset::{CareerGraph, builtin_graph_data};
use super::render;
use super::state::{ForceGraphState, frame_interval};
use super::theme::{ColorScheme, ThemeObserver};
use super::types::{Category, GraphData};

type SharedState = Rc<RefCell<Option<ForceGraphState>>>;
type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Tooltip text for a hovered node, e.g. `"Python (skill)"`.
pub fn tooltip_text(id: &str, category: Category) -> String {
	format!("{id} ({category})")
}

/// Hover tooltip content, anchored at a canvas pixel position.
#[derive(Clone, Debug, PartialEq)]
struct Tooltip {
	text: String,
	x: f64,
	y: f64,
}

/// Everything that must stop when the component unmounts.
struct Teardown {
	alive: Rc<Cell<bool>>,
	theme: Option<ThemeObserver>,
	centering: Option<TimeoutHandle>,
	resize: Option<Closure<dyn FnMut()>>,
	animation: FrameCallback,
	pending_frame: Rc<Cell<Option<i32>>>,
}

impl Teardown {
	fn replace_centering(&mut self, handle: Option<TimeoutHandle>) {
		if let Some(previous) = self.centering.take() {
			previous.clear();
		}
		self.centering = handle;
	}
}

impl Drop for Teardown {
	fn drop(&mut self) {
		self.alive.set(false);
		self.replace_centering(None);
		self.theme = None;
		let window = web_sys::window();
		if let (Some(cb), Some(window)) = (self.resize.take(), &window) {
			let _ = window.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}
		if let (Some(id), Some(window)) = (self.pending_frame.take(), &window) {
			let _ = window.cancel_animation_frame(id);
		}
		// The frame callback holds its own cell; emptying it breaks the cycle.
		self.animation.borrow_mut().take();
	}
}

/// Renders the career graph on a canvas with navigation controls and a hover
/// tooltip.
///
/// `data` defaults to the builtin career dataset. When `center_node` names a
/// node, the camera glides to it once the layout has had time to settle.
#[component]
pub fn CareerGraphCanvas(
	#[prop(into, default = Signal::derive(builtin_graph_data))] data: Signal<GraphData>,
	#[prop(optional, into)] center_node: Option<String>,
	#[prop(optional, into)] class: String,
	#[prop(default = 600.0)] height: f64,
	#[prop(optional)] on_node_click: Option<Callback<String>>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let graph = Memo::new(move |_| CareerGraph::load(data.get()));
	let scheme = RwSignal::new(ColorScheme::detect());
	let tooltip = RwSignal::new(None::<Tooltip>);
	let camera_config = CameraConfig::default();

	let alive = Rc::new(Cell::new(true));
	let theme = match ThemeObserver::subscribe(move |s| scheme.set(s)) {
		Ok(observer) => Some(observer),
		Err(e) => {
			warn!("career graph: theme tracking unavailable: {:?}", e);
			None
		}
	};
	let animate: FrameCallback = Rc::new(RefCell::new(None));
	let pending_frame = Rc::new(Cell::new(None));
	let teardown = StoredValue::new_local(Teardown {
		alive: alive.clone(),
		theme,
		centering: None,
		resize: None,
		animation: animate.clone(),
		pending_frame: pending_frame.clone(),
	});
	on_cleanup(move || teardown.dispose());

	let state: SharedState = Rc::new(RefCell::new(None));
	let (state_init, animate_init, alive_init, config_init) =
		(state.clone(), animate.clone(), alive.clone(), camera_config);

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let graph = match graph.get() {
			Ok(graph) => graph,
			Err(e) => {
				error!("career graph: invalid dataset: {}", e);
				discard_graph(&state_init);
				tooltip.set(None);
				teardown.update_value(|t| t.replace_centering(None));
				return;
			}
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};
		let Some(ctx) = context_2d(&canvas) else {
			warn!("career graph: canvas has no 2d context");
			return;
		};

		let w = container_width(&canvas);
		canvas.set_width(w as u32);
		canvas.set_height(height as u32);

		info!(
			"career graph: {} nodes, {} links",
			graph.nodes().len(),
			graph.links().len()
		);
		*state_init.borrow_mut() = Some(ForceGraphState::new(
			&graph,
			w,
			height,
			SimulationTuning::default(),
			config_init.clone(),
		));

		let centering = center_node.clone().and_then(|id| {
			schedule_centering(
				id,
				&graph,
				state_init.clone(),
				alive_init.clone(),
				Duration::from_millis(config_init.settle_delay_ms),
			)
		});
		teardown.update_value(|t| t.replace_centering(centering));

		// A dataset change only swaps the state; the loop and listeners stay.
		if animate_init.borrow().is_some() {
			return;
		}

		let (state_resize, canvas_resize) = (state_init.clone(), canvas.clone());
		let on_resize = Closure::<dyn FnMut()>::new(move || {
			let nw = container_width(&canvas_resize);
			canvas_resize.set_width(nw as u32);
			if let Some(ref mut s) = *state_resize.borrow_mut() {
				s.resize(nw, height);
			}
		});
		let _ = window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
		teardown.update_value(|t| t.resize = Some(on_resize));

		let (state_anim, animate_inner, alive_anim, frame_anim, canvas_anim) = (
			state_init.clone(),
			animate_init.clone(),
			alive_init.clone(),
			pending_frame.clone(),
			canvas.clone(),
		);
		let mut last_frame = None;
		*animate_init.borrow_mut() = Some(Closure::new(move |now: f64| {
			frame_anim.set(None);
			if !alive_anim.get() {
				return;
			}
			let frame_ms = frame_interval(last_frame.replace(now), now);
			match *state_anim.borrow_mut() {
				Some(ref mut s) => {
					s.tick(frame_ms);
					render::render(s, &ctx, scheme.get_untracked());
				}
				None => render::clear(
					&ctx,
					canvas_anim.width() as f64,
					canvas_anim.height() as f64,
					scheme.get_untracked(),
				),
			}
			if let (Some(cb), Some(win)) = (animate_inner.borrow().as_ref(), web_sys::window()) {
				frame_anim.set(win.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			pending_frame.set(window.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
		}
	});

	let state_md = state.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some((x, y)) = canvas_point(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut s) = *state_md.borrow_mut() {
			s.press(x, y);
		}
	};

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some((x, y)) = canvas_point(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut s) = *state_mm.borrow_mut() {
			s.pointer_moved(x, y);
			let tip = s
				.hover
				.node
				.and_then(|idx| s.node_info(idx))
				.map(|info| Tooltip {
					text: tooltip_text(&info.id, info.category),
					x,
					y,
				});
			if tooltip.with_untracked(|current| *current != tip) {
				tooltip.set(tip);
			}
		}
	};

	let state_mu = state.clone();
	let on_mouseup = move |_: MouseEvent| {
		let clicked = match *state_mu.borrow_mut() {
			Some(ref mut s) => s.release().and_then(|idx| s.node_info(idx)),
			None => None,
		};
		if let Some(node) = clicked {
			debug!("career graph: node clicked: {} ({})", node.id, node.category);
			if let Some(cb) = on_node_click {
				cb.run(node.id);
			}
		}
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_ml.borrow_mut() {
			s.pointer_left();
		}
		tooltip.set(None);
	};

	let state_wh = state.clone();
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let Some((x, y)) = canvas_point(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut s) = *state_wh.borrow_mut() {
			let wheel_step = s.controls.config().wheel_step;
			let factor = if ev.delta_y() > 0.0 {
				1.0 / wheel_step
			} else {
				wheel_step
			};
			s.camera.zoom_at(x, y, factor);
		}
	};

	let state_nav = state.clone();
	let dispatch = move |command: CameraCommand| {
		if let Some(ref mut s) = *state_nav.borrow_mut() {
			s.controls.apply(command, &mut s.camera);
		}
	};

	let tooltip_view = move || {
		tooltip.get().map(|tip| {
			let (background, color) = scheme.get().tooltip();
			let style = format!(
				"position: absolute; left: {}px; top: {}px; transform: translate(-50%, calc(-100% - 10px)); \
				 background-color: {background}; color: {color}; border-radius: 0.375rem; padding: 0.5rem; \
				 font-size: 0.875rem; white-space: nowrap; pointer-events: none; \
				 box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);",
				tip.x, tip.y
			);
			view! { <div class="career-graph-tooltip" style=style>{tip.text}</div> }
		})
	};

	let error_view = move || {
		graph.with(|g| g.as_ref().err().map(ToString::to_string)).map(|message| {
			view! { <p class="career-graph-error">"Unable to display the career graph: " {message}</p> }
		})
	};

	view! {
		<div class=format!("career-graph w-full {class}")>
			<div
				class="career-graph-frame"
				style="position: relative; overflow: hidden; border-radius: 1rem;"
			>
				<canvas
					node_ref=canvas_ref
					class="career-graph-canvas"
					on:mousedown=on_mousedown
					on:mousemove=on_mousemove
					on:mouseup=on_mouseup
					on:mouseleave=on_mouseleave
					on:wheel=on_wheel
					style="display: block; cursor: grab;"
				/>
				{navigation_controls(dispatch)}
				{tooltip_view}
				{error_view}
			</div>
		</div>
	}
}

/// Arms the one-shot centering timer. Unknown ids are skipped without moving
/// the camera.
fn schedule_centering(
	id: String,
	graph: &CareerGraph,
	state: SharedState,
	alive: Rc<Cell<bool>>,
	delay: Duration,
) -> Option<TimeoutHandle> {
	let Some(node) = graph.node(&id) else {
		debug!("career graph: center node `{}` not in dataset; not centering", id);
		return None;
	};
	debug!("career graph: centering on {} ({}) once settled", node.id, node.category);
	let center = move || {
		if !alive.get() {
			return;
		}
		if let Some(ref mut s) = *state.borrow_mut() {
			if !s.center_on_node(&id) {
				debug!("career graph: `{}` has no position yet; not centering", id);
			}
		}
	};
	match set_timeout_with_handle(center, delay) {
		Ok(handle) => Some(handle),
		Err(e) => {
			warn!("career graph: could not schedule centering: {:?}", e);
			None
		}
	}
}

/// Forgets the simulated graph so the next frame paints an empty canvas.
fn discard_graph(state: &SharedState) {
	state.borrow_mut().take();
}

fn navigation_controls(dispatch: impl Fn(CameraCommand) + Clone + 'static) -> impl IntoView {
	let button = move |title: &'static str, icon: &'static str, command: CameraCommand| {
		let dispatch = dispatch.clone();
		view! {
			<button
				class="career-graph-nav-button w-8 h-8 flex items-center justify-center rounded"
				title=title
				on:click=move |_| dispatch(command)
			>
				<svg class="w-4 h-4" fill="none" stroke="currentColor" viewBox="0 0 24 24">
					<path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d=icon />
				</svg>
			</button>
		}
	};

	view! {
		<div class="career-graph-nav" style="position: absolute; bottom: 1rem; right: 1rem; z-index: 10;">
			<div class="flex space-x-1 mb-2">
				{button("Zoom Out", "M18 12H6", CameraCommand::ZoomOut)}
				{button("Zoom In", "M12 6v6m0 0v6m0-6h6m-6 0H6", CameraCommand::ZoomIn)}
			</div>
			<div class="grid grid-cols-3 gap-1 mb-2">
				<div></div>
				{button("Pan Up", "M5 15l7-7 7 7", CameraCommand::PanUp)}
				<div></div>
				{button("Pan Left", "M15 19l-7-7 7-7", CameraCommand::PanLeft)}
				{button(
					"Reset View",
					"M4 4v5h.582m15.356 2A8.001 8.001 0 004.582 9m0 0H9m11 11v-5h-.581m0 0a8.003 8.003 0 01-15.357-2m15.357 2H15",
					CameraCommand::Reset,
				)}
				{button("Pan Right", "M9 5l7 7-7 7", CameraCommand::PanRight)}
				<div></div>
				{button("Pan Down", "M19 9l-7 7-7-7", CameraCommand::PanDown)}
				<div></div>
			</div>
		</div>
	}
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas.get_context("2d").ok()??.dyn_into().ok()
}

fn container_width(canvas: &HtmlCanvasElement) -> f64 {
	canvas
		.parent_element()
		.map(|p| p.client_width() as f64)
		.filter(|w| *w > 0.0)
		.unwrap_or(800.0)
}

fn canvas_point(canvas_ref: NodeRef<leptos::html::Canvas>, ev: &MouseEvent) -> Option<(f64, f64)> {
	let canvas: HtmlCanvasElement = canvas_ref.get_untracked()?.into();
	let rect = canvas.get_bounding_client_rect();
	Some((
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	))
}

#[cfg(test)]
mod tests {
	use super::*;
	use super::super::error::DatasetError;
	use super::super::types::{EdgeKind, GraphLink, GraphNode};

	#[test]
	fn tooltip_names_node_and_category() {
		assert_eq!(
			tooltip_text("Data Analyst", Category::Role),
			"Data Analyst (role)"
		);
		assert_eq!(tooltip_text("Python", Category::Skill), "Python (skill)");
	}

	#[test]
	fn invalid_dataset_discards_the_previous_graph() {
		let graph = CareerGraph::load(builtin_graph_data()).unwrap();
		let state: SharedState = Rc::new(RefCell::new(Some(ForceGraphState::new(
			&graph,
			800.0,
			600.0,
			SimulationTuning::default(),
			CameraConfig::default(),
		))));

		let broken = CareerGraph::load(GraphData {
			nodes: vec![GraphNode::new("Python", Category::Skill, None)],
			links: vec![GraphLink::new("Python", "Nowhere", EdgeKind::Pathway)],
		});
		assert!(matches!(broken, Err(DatasetError::DanglingEdge { .. })));

		discard_graph(&state);
		assert!(state.borrow().is_none());
	}
}
