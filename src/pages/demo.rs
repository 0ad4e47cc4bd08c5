use leptos::prelude::*;
use log::info;

use super::home::graph_data;
use crate::components::force_graph::CareerGraphCanvas;

/// Bare page with just the graph, logging node clicks.
#[component]
pub fn Demo() -> impl IntoView {
	let on_click = Callback::new(|id: String| info!("demo: selected {}", id));

	view! {
		<div class="demo" style="padding: 20px; min-height: 100vh;">
			<h1 style="text-align: center; margin-bottom: 20px;">"Career GPS Demo"</h1>
			<CareerGraphCanvas data=graph_data() center_node="Data Analyst" on_node_click=on_click />
		</div>
	}
}
