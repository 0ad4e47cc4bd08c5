use std::collections::HashMap;
use std::f64::consts::PI;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData};

use super::camera::{Camera, CameraController, Point};
use super::config::{CameraConfig, SimulationTuning};
use super::dataset::CareerGraph;
use super::style::hit_radius_for;
use super::types::{Category, EdgeKind};

/// Simulation time advanced per animation frame, in seconds.
pub const SIMULATION_STEP: f32 = 0.016;

/// Frame interval assumed for the first frame, in milliseconds.
pub const NOMINAL_FRAME_MS: f64 = 16.0;

/// Longest frame interval fed to the camera; longer gaps (a backgrounded tab)
/// are treated as one slow frame.
pub const MAX_FRAME_MS: f64 = 100.0;

/// Per-node payload carried through the simulation.
#[derive(Clone, Debug)]
pub struct NodeInfo {
	pub id: String,
	pub category: Category,
}

#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub node_idx: Option<DefaultNodeIdx>,
	/// Set once the pointer moves; a press without movement is a click.
	pub moved: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub node_start_x: f32,
	pub node_start_y: f32,
}

#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub center_start: Point,
}

#[derive(Clone, Debug, Default)]
pub struct HoverState {
	pub node: Option<DefaultNodeIdx>,
}

/// Cooling schedule: the simulation runs for a fixed number of ticks after each
/// reheat, with `alpha` easing the step size down as it goes.
#[derive(Clone, Debug)]
pub struct Heat {
	pub alpha: f64,
	pub ticks_left: u32,
}

impl Heat {
	pub fn is_running(&self) -> bool {
		self.ticks_left > 0
	}
}

pub struct ForceGraphState {
	pub graph: ForceGraph<NodeInfo, EdgeKind>,
	pub camera: Camera,
	pub controls: CameraController,
	pub drag: DragState,
	pub pan: PanState,
	pub hover: HoverState,
	pub width: f64,
	pub height: f64,
	pub heat: Heat,
	tuning: SimulationTuning,
	id_to_idx: HashMap<String, DefaultNodeIdx>,
}

impl ForceGraphState {
	pub fn new(
		data: &CareerGraph,
		width: f64,
		height: f64,
		tuning: SimulationTuning,
		camera: CameraConfig,
	) -> Self {
		let mut graph = ForceGraph::new(tuning.parameters());
		let mut id_to_idx = HashMap::new();
		let count = data.nodes().len().max(1) as f64;

		for (i, node) in data.nodes().iter().enumerate() {
			let angle = (i as f64) * 2.0 * PI / count;
			let idx = graph.add_node(NodeData {
				x: (tuning.seed_radius * angle.cos()) as f32,
				y: (tuning.seed_radius * angle.sin()) as f32,
				mass: tuning.node_mass,
				is_anchor: false,
				user_data: NodeInfo {
					id: node.id.clone(),
					category: node.category,
				},
			});
			id_to_idx.insert(node.id.clone(), idx);
		}

		for link in data.links() {
			if let (Some(&src), Some(&tgt)) =
				(id_to_idx.get(&link.source), id_to_idx.get(&link.target))
			{
				graph.add_edge(
					src,
					tgt,
					EdgeData {
						user_data: link.effective_kind(),
					},
				);
			}
		}

		let mut state = Self {
			graph,
			camera: Camera::new(width, height, &camera),
			controls: CameraController::new(camera),
			drag: DragState::default(),
			pan: PanState::default(),
			hover: HoverState::default(),
			width,
			height,
			heat: Heat {
				alpha: 1.0,
				ticks_left: 0,
			},
			tuning,
			id_to_idx,
		};
		state.warm_up();
		state
	}

	/// Runs the configured warmup ticks unpainted, then reheats so the visible
	/// cooldown starts fresh.
	fn warm_up(&mut self) {
		self.reheat();
		for _ in 0..self.tuning.warmup_ticks {
			self.step(SIMULATION_STEP);
		}
		self.reheat();
	}

	pub fn reheat(&mut self) {
		self.heat = Heat {
			alpha: 1.0,
			ticks_left: self.tuning.cooldown_ticks,
		};
	}

	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<DefaultNodeIdx> {
		let p = self.camera.screen_to_graph(sx, sy);
		let mut found: Option<(DefaultNodeIdx, f64)> = None;
		self.graph.visit_nodes(|node| {
			let d = Point::new(node.x() as f64, node.y() as f64).distance(p);
			let closer = found.is_none_or(|(_, best)| d < best);
			if d < hit_radius_for(node.data.user_data.category) && closer {
				found = Some((node.index(), d));
			}
		});
		found.map(|(idx, _)| idx)
	}

	/// Resolved position of `id`; `None` if unknown or not yet finite.
	pub fn node_position(&self, id: &str) -> Option<Point> {
		let idx = *self.id_to_idx.get(id)?;
		self.position_of(idx)
	}

	pub fn position_of(&self, idx: DefaultNodeIdx) -> Option<Point> {
		let mut found = None;
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				found = resolved(node.x(), node.y());
			}
		});
		found
	}

	pub fn node_info(&self, idx: DefaultNodeIdx) -> Option<NodeInfo> {
		let mut found = None;
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				found = Some(node.data.user_data.clone());
			}
		});
		found
	}

	/// Returns whether the hovered node changed.
	pub fn set_hover(&mut self, node: Option<DefaultNodeIdx>) -> bool {
		if self.hover.node == node {
			return false;
		}
		self.hover.node = node;
		true
	}

	pub fn is_hovered(&self, idx: DefaultNodeIdx) -> bool {
		self.hover.node == Some(idx)
	}

	/// Starts dragging `idx`, or panning when no node is under the pointer.
	pub fn press(&mut self, sx: f64, sy: f64) {
		match self.node_at_position(sx, sy) {
			Some(idx) => {
				let start = self.position_of(idx).unwrap_or_default();
				self.drag = DragState {
					active: true,
					node_idx: Some(idx),
					moved: false,
					start_x: sx,
					start_y: sy,
					node_start_x: start.x as f32,
					node_start_y: start.y as f32,
				};
			}
			None => {
				self.pan = PanState {
					active: true,
					start_x: sx,
					start_y: sy,
					center_start: self.camera.visible_center(),
				};
			}
		}
	}

	pub fn pointer_moved(&mut self, sx: f64, sy: f64) {
		if !self.drag.active {
			let hovered = self.node_at_position(sx, sy);
			self.set_hover(hovered);
		}

		if self.drag.active {
			let Some(idx) = self.drag.node_idx else {
				return;
			};
			let k = self.camera.k();
			let (dx, dy) = ((sx - self.drag.start_x) / k, (sy - self.drag.start_y) / k);
			if !self.drag.moved && dx == 0.0 && dy == 0.0 {
				return;
			}
			if !self.drag.moved {
				self.drag.moved = true;
				self.reheat();
			}
			let (nx, ny) = (
				self.drag.node_start_x + dx as f32,
				self.drag.node_start_y + dy as f32,
			);
			self.graph.visit_nodes_mut(|node| {
				if node.index() == idx {
					node.data.x = nx;
					node.data.y = ny;
					node.data.is_anchor = true;
				}
			});
		} else if self.pan.active {
			self.camera.drag_from(
				self.pan.center_start,
				sx - self.pan.start_x,
				sy - self.pan.start_y,
			);
		}
	}

	/// Ends any drag or pan. Returns the node that was clicked, if the press
	/// never moved. A dragged node is handed back to the simulation.
	pub fn release(&mut self) -> Option<DefaultNodeIdx> {
		let clicked = match std::mem::take(&mut self.drag) {
			DragState {
				active: true,
				moved: false,
				node_idx,
				..
			} => node_idx,
			DragState {
				active: true,
				moved: true,
				node_idx: Some(idx),
				..
			} => {
				self.set_anchor(idx, false);
				None
			}
			_ => None,
		};
		self.pan.active = false;
		clicked
	}

	pub fn pointer_left(&mut self) {
		self.release();
		self.set_hover(None);
	}

	/// Advances the simulation by one step (while hot) and any camera
	/// transition by `frame_ms` of wall time.
	pub fn tick(&mut self, frame_ms: f64) {
		if self.heat.is_running() {
			self.step(SIMULATION_STEP);
			self.heat.ticks_left -= 1;
		}
		self.camera.tick(frame_ms);
	}

	/// Glides the camera to `id`. Returns false, leaving the camera alone, when
	/// the node is unknown or has no resolved position yet.
	pub fn center_on_node(&mut self, id: &str) -> bool {
		let Some(target) = self.node_position(id) else {
			return false;
		};
		self.controls.center_on(target, &mut self.camera);
		true
	}

	fn set_anchor(&mut self, idx: DefaultNodeIdx, anchored: bool) {
		self.graph.visit_nodes_mut(|node| {
			if node.index() == idx {
				node.data.is_anchor = anchored;
			}
		});
	}

	fn step(&mut self, dt: f32) {
		self.graph.update(dt * self.heat.alpha as f32);
		self.pull_to_center();
		self.heat.alpha -= self.heat.alpha * self.tuning.alpha_decay;
	}

	/// Shifts free nodes so their centroid drifts toward the origin.
	fn pull_to_center(&mut self) {
		let (mut sx, mut sy, mut n) = (0.0f64, 0.0f64, 0usize);
		self.graph.visit_nodes(|node| {
			if resolved(node.x(), node.y()).is_some() {
				sx += node.x() as f64;
				sy += node.y() as f64;
				n += 1;
			}
		});
		if n == 0 {
			return;
		}
		let strength = self.tuning.center_strength;
		let (ox, oy) = (
			(sx / n as f64 * strength) as f32,
			(sy / n as f64 * strength) as f32,
		);
		self.graph.visit_nodes_mut(|node| {
			if !node.data.is_anchor {
				node.data.x -= ox;
				node.data.y -= oy;
			}
		});
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
		self.camera.resize(width, height);
	}
}

/// Milliseconds between two `requestAnimationFrame` timestamps, clamped to
/// `0..=MAX_FRAME_MS`.
pub fn frame_interval(previous: Option<f64>, now: f64) -> f64 {
	match previous {
		Some(previous) => (now - previous).clamp(0.0, MAX_FRAME_MS),
		None => NOMINAL_FRAME_MS,
	}
}

/// A simulated position is usable once both coordinates are finite.
pub fn resolved(x: f32, y: f32) -> Option<Point> {
	(x.is_finite() && y.is_finite()).then(|| Point::new(x as f64, y as f64))
}

#[cfg(test)]
mod tests {
	use super::super::camera::CameraSurface;
	use super::super::dataset::builtin_graph_data;
	use super::super::types::{GraphData, GraphLink, GraphNode};
	use super::*;

	fn small_graph() -> CareerGraph {
		CareerGraph::load(GraphData {
			nodes: vec![
				GraphNode::new("Python", Category::Skill, None),
				GraphNode::new("Data Analyst", Category::Role, None),
			],
			links: vec![GraphLink::new("Python", "Data Analyst", EdgeKind::Pathway)],
		})
		.unwrap()
	}

	fn state(data: &CareerGraph) -> ForceGraphState {
		ForceGraphState::new(
			data,
			800.0,
			600.0,
			SimulationTuning::default(),
			CameraConfig::default(),
		)
	}

	fn screen_of(state: &ForceGraphState, id: &str) -> (f64, f64) {
		let p = state.node_position(id).unwrap();
		state.camera.graph_to_screen(p)
	}

	#[test]
	fn builds_one_simulated_node_per_unique_id() {
		let data = CareerGraph::load(builtin_graph_data()).unwrap();
		let s = state(&data);
		let mut count = 0;
		s.graph.visit_nodes(|_| count += 1);
		assert_eq!(count, data.nodes().len());

		let mut edges = 0;
		s.graph.visit_edges(|_, _, _| edges += 1);
		assert_eq!(edges, data.links().len());
	}

	#[test]
	fn edges_keep_direction_and_kind() {
		let s = state(&small_graph());
		let mut seen = Vec::new();
		s.graph.visit_edges(|a, b, edge| {
			seen.push((
				a.data.user_data.id.clone(),
				b.data.user_data.id.clone(),
				edge.user_data,
			));
		});
		assert_eq!(
			seen,
			vec![("Python".into(), "Data Analyst".into(), EdgeKind::Pathway)]
		);
	}

	#[test]
	fn hover_follows_pointer() {
		let mut s = state(&small_graph());
		let (x, y) = screen_of(&s, "Data Analyst");
		s.pointer_moved(x, y);
		let hovered = s.hover.node.unwrap();
		assert_eq!(s.node_info(hovered).unwrap().id, "Data Analyst");
		assert!(s.is_hovered(hovered));

		s.pointer_moved(x + 500.0, y + 500.0);
		assert_eq!(s.hover.node, None);

		s.pointer_moved(x, y);
		s.pointer_left();
		assert_eq!(s.hover.node, None);
	}

	#[test]
	fn press_and_release_in_place_is_a_click() {
		let mut s = state(&small_graph());
		let (x, y) = screen_of(&s, "Python");
		s.press(x, y);
		let clicked = s.release().unwrap();
		assert_eq!(s.node_info(clicked).unwrap().id, "Python");
		assert!(!s.drag.active);
	}

	fn is_anchored(state: &ForceGraphState, id: &str) -> bool {
		let mut anchored = false;
		state.graph.visit_nodes(|node| {
			if node.data.user_data.id == id {
				anchored = node.data.is_anchor;
			}
		});
		anchored
	}

	#[test]
	fn dragging_a_node_pins_it_and_reheats() {
		let mut s = state(&small_graph());
		for _ in 0..200 {
			s.tick(NOMINAL_FRAME_MS);
		}
		assert!(!s.heat.is_running());
		let (x, y) = screen_of(&s, "Python");
		let before = s.node_position("Python").unwrap();

		s.press(x, y);
		s.pointer_moved(x + 30.0, y);
		assert!(s.heat.is_running());
		assert!(is_anchored(&s, "Python"));
		let moved = s.node_position("Python").unwrap();
		assert!((moved.x - before.x - 30.0).abs() < 1e-3);

		assert_eq!(s.release(), None);
		assert!(!is_anchored(&s, "Python"));
	}

	#[test]
	fn leaving_the_canvas_mid_drag_releases_the_node() {
		let mut s = state(&small_graph());
		let (x, y) = screen_of(&s, "Data Analyst");
		s.press(x, y);
		s.pointer_moved(x, y + 20.0);
		assert!(is_anchored(&s, "Data Analyst"));
		s.pointer_left();
		assert!(!is_anchored(&s, "Data Analyst"));
		assert!(!s.drag.active);
	}

	#[test]
	fn centering_on_unknown_node_leaves_camera_alone() {
		let mut s = state(&small_graph());
		let (center, zoom) = (s.camera.center(), s.camera.zoom());
		assert!(!s.center_on_node("Nonexistent Role"));
		s.tick(1000.0);
		assert_eq!(s.camera.center(), center);
		assert_eq!(s.camera.zoom(), zoom);
	}

	#[test]
	fn centering_glides_to_the_node() {
		let data = CareerGraph::load(builtin_graph_data()).unwrap();
		let mut s = state(&data);
		let target = s.node_position("Data Analyst").unwrap();
		assert!(s.center_on_node("Data Analyst"));
		assert_eq!(s.camera.center(), target);

		s.camera.tick(1000.0);
		assert!(s.camera.visible_center().distance(target) < 1e-6);
		assert_eq!(s.camera.zoom(), 1.0);
	}

	#[test]
	fn frame_interval_is_clamped() {
		assert_eq!(frame_interval(None, 1234.0), NOMINAL_FRAME_MS);
		assert_eq!(frame_interval(Some(1000.0), 1008.3), 1008.3 - 1000.0);
		assert_eq!(frame_interval(Some(1000.0), 5000.0), MAX_FRAME_MS);
		assert_eq!(frame_interval(Some(1000.0), 990.0), 0.0);
	}

	#[test]
	fn camera_transitions_follow_wall_time() {
		let mut fast = state(&small_graph());
		let mut slow = state(&small_graph());
		fast.controls.zoom_in(&mut fast.camera);
		slow.controls.zoom_in(&mut slow.camera);
		for _ in 0..24 {
			fast.tick(1000.0 / 120.0);
		}
		for _ in 0..12 {
			slow.tick(1000.0 / 60.0);
		}
		assert!((fast.camera.k() - slow.camera.k()).abs() < 1e-9);
		assert!(fast.camera.k() < 1.5);
	}

	#[test]
	fn panning_on_empty_space_moves_camera() {
		let mut s = state(&small_graph());
		s.press(5.0, 5.0);
		s.pointer_moved(25.0, 5.0);
		s.release();
		assert_eq!(s.camera.center(), Point::new(-20.0, 0.0));
	}

	#[test]
	fn simulation_cools_down() {
		let mut s = state(&small_graph());
		assert!(s.heat.is_running());
		for _ in 0..SimulationTuning::default().cooldown_ticks {
			s.tick(NOMINAL_FRAME_MS);
		}
		assert!(!s.heat.is_running());
		assert!(s.heat.alpha < 1.0);
		s.reheat();
		assert_eq!(s.heat.alpha, 1.0);
	}

	#[test]
	fn unknown_ids_have_no_position() {
		let s = state(&small_graph());
		assert!(s.node_position("Nonexistent Role").is_none());
		assert!(s.node_position("Python").is_some());
	}

	#[test]
	fn resolved_rejects_non_finite_positions() {
		assert!(resolved(f32::NAN, 0.0).is_none());
		assert!(resolved(0.0, f32::INFINITY).is_none());
		assert_eq!(resolved(1.0, 2.0), Some(Point::new(1.0, 2.0)));
	}
}
