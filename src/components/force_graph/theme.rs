//! Light/dark color scheme, observed from the `dark` class on the document root.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, MutationObserver, MutationObserverInit};

/// Class on `<html>` that switches the page to its dark scheme.
pub const DARK_CLASS: &str = "dark";

/// Colors that depend on the ambient light/dark setting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorScheme {
	#[default]
	Light,
	Dark,
}

impl ColorScheme {
	pub fn from_dark(is_dark: bool) -> Self {
		if is_dark {
			ColorScheme::Dark
		} else {
			ColorScheme::Light
		}
	}

	pub fn is_dark(self) -> bool {
		self == ColorScheme::Dark
	}

	/// Canvas fill behind the graph.
	pub fn background(self) -> &'static str {
		match self {
			ColorScheme::Light => "#ffffff",
			ColorScheme::Dark => "#1f2937",
		}
	}

	pub fn label(self) -> &'static str {
		match self {
			ColorScheme::Light => "#374151",
			ColorScheme::Dark => "#e5e7eb",
		}
	}

	/// Outline around the hovered node.
	pub fn hover_outline(self) -> &'static str {
		match self {
			ColorScheme::Light => "#000000",
			ColorScheme::Dark => "#ffffff",
		}
	}

	/// `(background, text)` for the hover tooltip.
	pub fn tooltip(self) -> (&'static str, &'static str) {
		match self {
			ColorScheme::Light => ("#1f2937", "#ffffff"),
			ColorScheme::Dark => ("#374151", "#f3f4f6"),
		}
	}

	/// Reads the current scheme from the document root. Light when there is no
	/// document (e.g. outside a browser).
	pub fn detect() -> Self {
		document_root()
			.map(|root| Self::of(&root))
			.unwrap_or_default()
	}

	fn of(root: &Element) -> Self {
		Self::from_dark(root.class_list().contains(DARK_CLASS))
	}
}

fn document_root() -> Option<Element> {
	web_sys::window()?.document()?.document_element()
}

/// Live subscription to class changes on the document root.
///
/// The observer is disconnected when this value is dropped.
pub struct ThemeObserver {
	observer: MutationObserver,
	_callback: Closure<dyn FnMut(js_sys::Array, MutationObserver)>,
}

impl ThemeObserver {
	/// Calls `on_change` with the new scheme whenever the root's `class`
	/// attribute changes.
	pub fn subscribe(mut on_change: impl FnMut(ColorScheme) + 'static) -> Result<Self, JsValue> {
		let root = document_root().ok_or_else(|| JsValue::from_str("no document root"))?;
		let watched = root.clone();
		let callback = Closure::<dyn FnMut(js_sys::Array, MutationObserver)>::new(
			move |_records: js_sys::Array, _observer: MutationObserver| {
				on_change(ColorScheme::of(&watched));
			},
		);
		let observer = MutationObserver::new(callback.as_ref().unchecked_ref())?;

		let options = MutationObserverInit::new();
		options.set_attributes(true);
		options.set_attribute_filter(&js_sys::Array::of1(&JsValue::from_str("class")));
		observer.observe_with_options(&root, &options)?;

		Ok(Self {
			observer,
			_callback: callback,
		})
	}
}

impl Drop for ThemeObserver {
	fn drop(&mut self) {
		self.observer.disconnect();
	}
}
