//! Button that flips the page between light and dark mode.
//!
//! The scheme lives in the `dark` class on the document root, so any graph on
//! the page picks the change up through its theme observer.

use leptos::prelude::*;
use log::{debug, warn};

use super::force_graph::ColorScheme;
use super::force_graph::theme::DARK_CLASS;

/// Label shown on the toggle for the current scheme.
pub fn toggle_label(scheme: ColorScheme) -> &'static str {
	if scheme.is_dark() {
		"☀️ Light"
	} else {
		"🌙 Dark"
	}
}

fn apply(scheme: ColorScheme) {
	let Some(root) = web_sys::window()
		.and_then(|w| w.document())
		.and_then(|d| d.document_element())
	else {
		return;
	};
	let classes = root.class_list();
	let result = if scheme.is_dark() {
		classes.add_1(DARK_CLASS)
	} else {
		classes.remove_1(DARK_CLASS)
	};
	match result {
		Ok(()) => debug!("color scheme set to {:?}", scheme),
		Err(e) => warn!("could not switch color scheme: {:?}", e),
	}
}

#[component]
pub fn DarkModeToggle() -> impl IntoView {
	let scheme = RwSignal::new(ColorScheme::detect());

	let toggle = move |_| {
		let next = ColorScheme::from_dark(!scheme.get_untracked().is_dark());
		apply(next);
		scheme.set(next);
	};

	view! {
		<button
			class="dark-mode-toggle fixed top-4 right-4 z-10 rounded-lg px-4 py-2 text-sm font-medium"
			on:click=toggle
		>
			{move || toggle_label(scheme.get())}
		</button>
	}
}
