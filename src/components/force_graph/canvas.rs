//! The subset of the 2D canvas API the painters use.
//!
//! Painting goes through this trait rather than `CanvasRenderingContext2d`
//! directly so the drawing routines can run against a recorder in tests.

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

pub trait Canvas2d {
	fn save(&self);
	fn restore(&self);
	fn translate(&self, x: f64, y: f64);
	fn scale(&self, k: f64);
	fn fill_rect(&self, x: f64, y: f64, w: f64, h: f64);
	fn begin_path(&self);
	fn close_path(&self);
	fn move_to(&self, x: f64, y: f64);
	fn line_to(&self, x: f64, y: f64);
	fn arc(&self, x: f64, y: f64, radius: f64);
	fn fill(&self);
	fn stroke(&self);
	fn set_fill_style(&self, color: &str);
	fn set_stroke_style(&self, color: &str);
	fn set_line_width(&self, width: f64);
	/// An empty slice restores solid lines.
	fn set_line_dash(&self, segments: &[f64]);
	fn set_font(&self, font: &str);
	fn set_text_align(&self, align: &str);
	fn set_text_baseline(&self, baseline: &str);
	fn fill_text(&self, text: &str, x: f64, y: f64);
}

impl Canvas2d for CanvasRenderingContext2d {
	fn save(&self) {
		CanvasRenderingContext2d::save(self);
	}

	fn restore(&self) {
		CanvasRenderingContext2d::restore(self);
	}

	fn translate(&self, x: f64, y: f64) {
		let _ = CanvasRenderingContext2d::translate(self, x, y);
	}

	fn scale(&self, k: f64) {
		let _ = CanvasRenderingContext2d::scale(self, k, k);
	}

	fn fill_rect(&self, x: f64, y: f64, w: f64, h: f64) {
		CanvasRenderingContext2d::fill_rect(self, x, y, w, h);
	}

	fn begin_path(&self) {
		CanvasRenderingContext2d::begin_path(self);
	}

	fn close_path(&self) {
		CanvasRenderingContext2d::close_path(self);
	}

	fn move_to(&self, x: f64, y: f64) {
		CanvasRenderingContext2d::move_to(self, x, y);
	}

	fn line_to(&self, x: f64, y: f64) {
		CanvasRenderingContext2d::line_to(self, x, y);
	}

	fn arc(&self, x: f64, y: f64, radius: f64) {
		let _ = CanvasRenderingContext2d::arc(self, x, y, radius, 0.0, std::f64::consts::TAU);
	}

	fn fill(&self) {
		CanvasRenderingContext2d::fill(self);
	}

	fn stroke(&self) {
		CanvasRenderingContext2d::stroke(self);
	}

	fn set_fill_style(&self, color: &str) {
		self.set_fill_style_str(color);
	}

	fn set_stroke_style(&self, color: &str) {
		self.set_stroke_style_str(color);
	}

	fn set_line_width(&self, width: f64) {
		CanvasRenderingContext2d::set_line_width(self, width);
	}

	fn set_line_dash(&self, segments: &[f64]) {
		let dash = js_sys::Array::new();
		for &s in segments {
			dash.push(&JsValue::from_f64(s));
		}
		let _ = CanvasRenderingContext2d::set_line_dash(self, &dash);
	}

	fn set_font(&self, font: &str) {
		CanvasRenderingContext2d::set_font(self, font);
	}

	fn set_text_align(&self, align: &str) {
		CanvasRenderingContext2d::set_text_align(self, align);
	}

	fn set_text_baseline(&self, baseline: &str) {
		CanvasRenderingContext2d::set_text_baseline(self, baseline);
	}

	fn fill_text(&self, text: &str, x: f64, y: f64) {
		let _ = CanvasRenderingContext2d::fill_text(self, text, x, y);
	}
}
