//! Camera state and the pan/zoom/reset controls.
//!
//! The camera is described in graph space: a `center` point that sits in the
//! middle of the canvas and a zoom factor `k`. Commands are fire-and-forget and
//! animate over a fixed duration; [`Camera::tick`] advances them each frame.

use super::config::CameraConfig;

/// A point in graph space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

impl Point {
	pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	pub fn distance(self, other: Point) -> f64 {
		(other.x - self.x).hypot(other.y - self.y)
	}
}

/// Canvas transform: translate by `(x, y)` screen pixels, then scale by `k`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

/// Something the camera controls can drive.
pub trait CameraSurface {
	/// Current zoom factor (the destination if a transition is running).
	fn zoom(&self) -> f64;
	/// Current view center in graph space (the destination if moving).
	fn center(&self) -> Point;
	fn zoom_to(&mut self, k: f64, duration_ms: f64);
	fn center_at(&mut self, x: f64, y: f64, duration_ms: f64);
}

pub(crate) fn ease_out_cubic(t: f64) -> f64 {
	1.0 - (1.0 - t).powi(3)
}

trait Lerp: Copy {
	fn lerp(self, to: Self, t: f64) -> Self;
}

impl Lerp for f64 {
	fn lerp(self, to: f64, t: f64) -> f64 {
		self + (to - self) * t
	}
}

impl Lerp for Point {
	fn lerp(self, to: Point, t: f64) -> Point {
		Point::new(self.x.lerp(to.x, t), self.y.lerp(to.y, t))
	}
}

#[derive(Clone, Debug)]
struct Tween<T> {
	from: T,
	to: T,
	elapsed_ms: f64,
	duration_ms: f64,
}

impl<T: Lerp> Tween<T> {
	fn new(from: T, to: T, duration_ms: f64) -> Self {
		Self {
			from,
			to,
			elapsed_ms: 0.0,
			duration_ms,
		}
	}

	fn advance(&mut self, dt_ms: f64) -> T {
		self.elapsed_ms += dt_ms;
		self.value()
	}

	fn value(&self) -> T {
		let t = (self.elapsed_ms / self.duration_ms).clamp(0.0, 1.0);
		self.from.lerp(self.to, ease_out_cubic(t))
	}

	fn done(&self) -> bool {
		self.elapsed_ms >= self.duration_ms
	}
}

/// Animated camera over a canvas of `width` x `height` pixels.
#[derive(Clone, Debug)]
pub struct Camera {
	center: Point,
	k: f64,
	width: f64,
	height: f64,
	min_zoom: f64,
	max_zoom: f64,
	zoom_tween: Option<Tween<f64>>,
	center_tween: Option<Tween<Point>>,
}

impl Camera {
	pub fn new(width: f64, height: f64, config: &CameraConfig) -> Self {
		Self {
			center: Point::ORIGIN,
			k: 1.0,
			width,
			height,
			min_zoom: config.min_zoom,
			max_zoom: config.max_zoom,
			zoom_tween: None,
			center_tween: None,
		}
	}

	/// Zoom factor currently on screen, mid-transition included.
	pub fn k(&self) -> f64 {
		self.k
	}

	#[cfg(test)]
	pub fn is_animating(&self) -> bool {
		self.zoom_tween.is_some() || self.center_tween.is_some()
	}

	pub fn tick(&mut self, dt_ms: f64) {
		if let Some(tween) = &mut self.zoom_tween {
			self.k = tween.advance(dt_ms);
			if tween.done() {
				self.zoom_tween = None;
			}
		}
		if let Some(tween) = &mut self.center_tween {
			self.center = tween.advance(dt_ms);
			if tween.done() {
				self.center_tween = None;
			}
		}
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}

	pub fn transform(&self) -> ViewTransform {
		ViewTransform {
			x: self.width / 2.0 - self.center.x * self.k,
			y: self.height / 2.0 - self.center.y * self.k,
			k: self.k,
		}
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> Point {
		Point::new(
			self.center.x + (sx - self.width / 2.0) / self.k,
			self.center.y + (sy - self.height / 2.0) / self.k,
		)
	}

	pub fn graph_to_screen(&self, p: Point) -> (f64, f64) {
		(
			self.width / 2.0 + (p.x - self.center.x) * self.k,
			self.height / 2.0 + (p.y - self.center.y) * self.k,
		)
	}

	/// Moves the view so that the content follows a pointer drag of
	/// `(dx, dy)` screen pixels from the drag-start `center`.
	pub fn drag_from(&mut self, start: Point, dx: f64, dy: f64) {
		self.center_tween = None;
		self.center = Point::new(start.x - dx / self.k, start.y - dy / self.k);
	}

	/// Zooms by `factor` keeping the graph point under `(sx, sy)` fixed.
	pub fn zoom_at(&mut self, sx: f64, sy: f64, factor: f64) {
		let anchor = self.screen_to_graph(sx, sy);
		self.zoom_tween = None;
		self.center_tween = None;
		self.k = (self.k * factor).clamp(self.min_zoom, self.max_zoom);
		self.center = Point::new(
			anchor.x - (sx - self.width / 2.0) / self.k,
			anchor.y - (sy - self.height / 2.0) / self.k,
		);
	}

	/// Center of the view as currently drawn.
	pub fn visible_center(&self) -> Point {
		self.center
	}
}

impl CameraSurface for Camera {
	fn zoom(&self) -> f64 {
		self.zoom_tween.as_ref().map_or(self.k, |t| t.to)
	}

	fn center(&self) -> Point {
		self.center_tween.as_ref().map_or(self.center, |t| t.to)
	}

	fn zoom_to(&mut self, k: f64, duration_ms: f64) {
		let k = k.clamp(self.min_zoom, self.max_zoom);
		if duration_ms <= 0.0 {
			self.zoom_tween = None;
			self.k = k;
		} else {
			self.zoom_tween = Some(Tween::new(self.k, k, duration_ms));
		}
	}

	fn center_at(&mut self, x: f64, y: f64, duration_ms: f64) {
		let to = Point::new(x, y);
		if duration_ms <= 0.0 {
			self.center_tween = None;
			self.center = to;
		} else {
			self.center_tween = Some(Tween::new(self.center, to, duration_ms));
		}
	}
}

/// A navigation button press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CameraCommand {
	ZoomIn,
	ZoomOut,
	PanUp,
	PanDown,
	PanLeft,
	PanRight,
	Reset,
}

/// Translates navigation commands into camera moves.
#[derive(Clone, Debug, Default)]
pub struct CameraController {
	config: CameraConfig,
}

impl CameraController {
	pub fn new(config: CameraConfig) -> Self {
		Self { config }
	}

	pub fn config(&self) -> &CameraConfig {
		&self.config
	}

	pub fn apply(&self, command: CameraCommand, surface: &mut impl CameraSurface) {
		match command {
			CameraCommand::ZoomIn => self.zoom_in(surface),
			CameraCommand::ZoomOut => self.zoom_out(surface),
			CameraCommand::PanUp => self.pan_up(surface),
			CameraCommand::PanDown => self.pan_down(surface),
			CameraCommand::PanLeft => self.pan_left(surface),
			CameraCommand::PanRight => self.pan_right(surface),
			CameraCommand::Reset => self.reset(surface),
		}
	}

	pub fn zoom_in(&self, surface: &mut impl CameraSurface) {
		let k = self.config.clamp_zoom(surface.zoom() * self.config.zoom_step);
		surface.zoom_to(k, self.config.step_duration_ms);
	}

	pub fn zoom_out(&self, surface: &mut impl CameraSurface) {
		let k = self.config.clamp_zoom(surface.zoom() / self.config.zoom_step);
		surface.zoom_to(k, self.config.step_duration_ms);
	}

	pub fn pan_up(&self, surface: &mut impl CameraSurface) {
		self.pan_by(surface, 0.0, self.config.pan_step);
	}

	pub fn pan_down(&self, surface: &mut impl CameraSurface) {
		self.pan_by(surface, 0.0, -self.config.pan_step);
	}

	pub fn pan_left(&self, surface: &mut impl CameraSurface) {
		self.pan_by(surface, self.config.pan_step, 0.0);
	}

	pub fn pan_right(&self, surface: &mut impl CameraSurface) {
		self.pan_by(surface, -self.config.pan_step, 0.0);
	}

	pub fn reset(&self, surface: &mut impl CameraSurface) {
		surface.center_at(0.0, 0.0, self.config.reset_duration_ms);
		surface.zoom_to(1.0, self.config.reset_duration_ms);
	}

	/// Smoothly brings `target` to the middle of the view.
	pub fn center_on(&self, target: Point, surface: &mut impl CameraSurface) {
		surface.center_at(target.x, target.y, self.config.reset_duration_ms);
	}

	fn pan_by(&self, surface: &mut impl CameraSurface, dx: f64, dy: f64) {
		let c = surface.center();
		surface.center_at(c.x + dx, c.y + dy, self.config.step_duration_ms);
	}
}

#[cfg(test)]
mod tests {
	use proptest::prelude::*;

	use super::*;

	/// Applies commands instantly and records their durations.
	#[derive(Default)]
	struct Recorder {
		k: f64,
		center: Point,
		durations: Vec<f64>,
	}

	impl CameraSurface for Recorder {
		fn zoom(&self) -> f64 {
			self.k
		}
		fn center(&self) -> Point {
			self.center
		}
		fn zoom_to(&mut self, k: f64, duration_ms: f64) {
			self.k = k;
			self.durations.push(duration_ms);
		}
		fn center_at(&mut self, x: f64, y: f64, duration_ms: f64) {
			self.center = Point::new(x, y);
			self.durations.push(duration_ms);
		}
	}

	fn recorder() -> Recorder {
		Recorder {
			k: 1.0,
			..Default::default()
		}
	}

	#[test]
	fn zoom_in_multiplies_and_clamps() {
		let controls = CameraController::default();
		let mut view = recorder();
		controls.zoom_in(&mut view);
		assert_eq!(view.k, 1.5);
		controls.zoom_in(&mut view);
		assert_eq!(view.k, 2.25);
		controls.zoom_in(&mut view);
		assert_eq!(view.k, 3.0);
		assert_eq!(view.durations, vec![400.0; 3]);
	}

	#[test]
	fn zoom_out_stops_at_minimum() {
		let controls = CameraController::default();
		let mut view = recorder();
		for _ in 0..10 {
			controls.zoom_out(&mut view);
		}
		assert_eq!(view.k, 0.5);
	}

	#[test]
	fn pan_moves_center_by_step() {
		let controls = CameraController::default();
		let mut view = recorder();
		controls.pan_up(&mut view);
		assert_eq!(view.center, Point::new(0.0, 50.0));
		controls.pan_left(&mut view);
		assert_eq!(view.center, Point::new(50.0, 50.0));
		controls.pan_down(&mut view);
		controls.pan_right(&mut view);
		assert_eq!(view.center, Point::ORIGIN);
	}

	#[test]
	fn reset_restores_origin_and_unit_zoom() {
		let controls = CameraController::default();
		let mut view = recorder();
		controls.apply(CameraCommand::ZoomIn, &mut view);
		controls.apply(CameraCommand::PanRight, &mut view);
		controls.apply(CameraCommand::Reset, &mut view);
		assert_eq!(view.k, 1.0);
		assert_eq!(view.center, Point::ORIGIN);
		assert_eq!(&view.durations[2..], &[1000.0, 1000.0]);
	}

	#[test]
	fn camera_transition_converges() {
		let mut camera = Camera::new(800.0, 600.0, &CameraConfig::default());
		camera.zoom_to(2.0, 400.0);
		camera.center_at(100.0, -40.0, 400.0);
		assert_eq!(camera.zoom(), 2.0);
		assert_eq!(camera.k(), 1.0);

		camera.tick(200.0);
		assert!(camera.k() > 1.0 && camera.k() < 2.0);
		assert!(camera.is_animating());

		camera.tick(200.0);
		assert!(!camera.is_animating());
		assert_eq!(camera.k(), 2.0);
		assert_eq!(camera.visible_center(), Point::new(100.0, -40.0));
		assert_eq!(camera.graph_to_screen(Point::new(100.0, -40.0)), (400.0, 300.0));
	}

	#[test]
	fn wheel_zoom_keeps_cursor_point_fixed() {
		let mut camera = Camera::new(800.0, 600.0, &CameraConfig::default());
		let before = camera.screen_to_graph(600.0, 100.0);
		camera.zoom_at(600.0, 100.0, 1.1);
		let after = camera.screen_to_graph(600.0, 100.0);
		assert!(before.distance(after) < 1e-9);

		for _ in 0..50 {
			camera.zoom_at(600.0, 100.0, 1.1);
		}
		assert_eq!(camera.k(), 3.0);
	}

	#[test]
	fn drag_moves_content_with_pointer() {
		let mut camera = Camera::new(800.0, 600.0, &CameraConfig::default());
		camera.zoom_to(2.0, 0.0);
		let under = camera.screen_to_graph(300.0, 300.0);
		camera.drag_from(camera.visible_center(), 40.0, -20.0);
		let (sx, sy) = camera.graph_to_screen(under);
		assert!((sx - 340.0).abs() < 1e-9);
		assert!((sy - 280.0).abs() < 1e-9);
	}

	fn command() -> impl Strategy<Value = CameraCommand> {
		prop_oneof![
			Just(CameraCommand::ZoomIn),
			Just(CameraCommand::ZoomOut),
			Just(CameraCommand::PanUp),
			Just(CameraCommand::PanDown),
			Just(CameraCommand::PanLeft),
			Just(CameraCommand::PanRight),
		]
	}

	proptest! {
		#[test]
		fn zoom_stays_in_range(commands in proptest::collection::vec(command(), 0..40)) {
			let controls = CameraController::default();
			let mut camera = Camera::new(800.0, 600.0, controls.config());
			for command in commands {
				controls.apply(command, &mut camera);
				camera.tick(150.0);
				prop_assert!((0.5..=3.0).contains(&camera.zoom()));
				prop_assert!((0.5..=3.0).contains(&camera.k()));
			}
		}

		#[test]
		fn reset_always_returns_home(commands in proptest::collection::vec(command(), 0..40)) {
			let controls = CameraController::default();
			let mut camera = Camera::new(800.0, 600.0, controls.config());
			for command in commands {
				controls.apply(command, &mut camera);
			}
			controls.reset(&mut camera);
			camera.tick(1000.0);
			prop_assert_eq!(camera.k(), 1.0);
			prop_assert_eq!(camera.visible_center(), Point::ORIGIN);
		}
	}
}
