//! career-gps-graph: interactive force-directed map of career paths.
//!
//! Roles, skills and internships are laid out by a physics simulation and drawn
//! on a canvas, with pathway and similarity edges between them. The app shell
//! routes between the home page, a bare demo page and a 404.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

// Modules
pub mod components;
mod pages;

pub use components::force_graph::{
	CareerGraph, CareerGraphCanvas, Category, DatasetError, EdgeKind, GraphData, GraphLink,
	GraphNode, Sector, builtin_graph_data,
};

// Top-Level pages
use crate::pages::demo::Demo;
use crate::pages::home::Home;
use crate::pages::not_found::NotFound;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("career-gps-graph: logging initialized");
}

/// Parses a `{ nodes: [...], links: [...] }` dataset.
pub fn parse_graph_data(json: &str) -> Result<GraphData, serde_json::Error> {
	serde_json::from_str(json)
}

/// Load graph data from a script element with id="graph-data".
fn load_graph_data() -> Option<GraphData> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("graph-data")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match parse_graph_data(&json_text) {
		Ok(data) => {
			info!(
				"career-gps-graph: loaded {} nodes, {} links from page",
				data.nodes.len(),
				data.links.len()
			);
			Some(data)
		}
		Err(e) => {
			warn!("career-gps-graph: failed to parse graph data: {}", e);
			None
		}
	}
}

/// An app router which renders the career graph pages and handles 404's
#[component]
pub fn App() -> impl IntoView {
	// Provides context that manages stylesheets, titles, meta tags, etc.
	provide_meta_context();

	let graph_data = load_graph_data().unwrap_or_else(builtin_graph_data);
	provide_context(Signal::derive(move || graph_data.clone()));

	view! {
		<Html attr:lang="en" attr:dir="ltr" />

		// sets the document title
		<Title text="Career GPS Graph" />

		// injects metadata in the <head> of the page
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />
		<Meta name="description" content="Interactive 2D career path exploration" />

		<Router>
			<Routes fallback=|| view! { <NotFound /> }>
				<Route path=path!("/") view=Home />
				<Route path=path!("/demo") view=Demo />
			</Routes>
		</Router>
	}
}
