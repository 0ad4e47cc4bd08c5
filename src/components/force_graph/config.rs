//! Tunable constants for the simulation and the camera.

use force_graph::SimulationParameters;

/// Spring stiffness at a link distance of 1. `force_graph` springs have no rest
/// length, so a longer link distance maps to a softer spring.
const SPRING_PER_DISTANCE: f64 = 5.0;

/// Force simulation tuning, applied whenever the dataset changes.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationTuning {
	/// Preferred link length in graph units.
	pub link_distance: f64,
	/// Node repulsion; negative values push nodes apart.
	pub charge_strength: f64,
	/// Fraction of the centroid offset removed each tick.
	pub center_strength: f64,
	/// Fraction of velocity lost each tick.
	pub velocity_decay: f64,
	/// How quickly the simulation cools after a reheat.
	pub alpha_decay: f64,
	/// Ticks run before the first frame is painted.
	pub warmup_ticks: u32,
	/// Ticks run after a reheat before the simulation stops.
	pub cooldown_ticks: u32,
	pub node_mass: f32,
	/// Radius of the circle nodes are seeded on.
	pub seed_radius: f64,
}

impl Default for SimulationTuning {
	fn default() -> Self {
		Self {
			link_distance: 100.0,
			charge_strength: -200.0,
			center_strength: 0.05,
			velocity_decay: 0.5,
			alpha_decay: 0.01,
			warmup_ticks: 100,
			cooldown_ticks: 100,
			node_mass: 10.0,
			seed_radius: 150.0,
		}
	}
}

impl SimulationTuning {
	pub fn parameters(&self) -> SimulationParameters {
		SimulationParameters {
			force_charge: self.charge_strength.abs() as f32,
			force_spring: (SPRING_PER_DISTANCE / self.link_distance.max(1.0)) as f32,
			force_max: 100.0,
			node_speed: 3000.0,
			damping_factor: (1.0 - self.velocity_decay).clamp(0.0, 1.0) as f32,
		}
	}
}

/// Camera limits, steps and animation timings.
#[derive(Clone, Debug, PartialEq)]
pub struct CameraConfig {
	pub min_zoom: f64,
	pub max_zoom: f64,
	/// Factor applied by one zoom-in/zoom-out command.
	pub zoom_step: f64,
	/// Graph units moved by one pan command.
	pub pan_step: f64,
	/// Transition length for zoom and pan commands.
	pub step_duration_ms: f64,
	/// Transition length for reset and node centering.
	pub reset_duration_ms: f64,
	/// Factor applied per wheel notch.
	pub wheel_step: f64,
	/// Delay before centering on a node, giving the layout time to settle.
	pub settle_delay_ms: u64,
}

impl Default for CameraConfig {
	fn default() -> Self {
		Self {
			min_zoom: 0.5,
			max_zoom: 3.0,
			zoom_step: 1.5,
			pan_step: 50.0,
			step_duration_ms: 400.0,
			reset_duration_ms: 1000.0,
			wheel_step: 1.1,
			settle_delay_ms: 1000,
		}
	}
}

impl CameraConfig {
	pub fn clamp_zoom(&self, k: f64) -> f64 {
		k.clamp(self.min_zoom, self.max_zoom)
	}
}
