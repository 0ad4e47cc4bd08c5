use leptos::prelude::*;

use crate::components::dark_mode_toggle::DarkModeToggle;
use crate::components::force_graph::{CareerGraphCanvas, Category, GraphData, builtin_graph_data};
use crate::components::force_graph::style::color_for;

/// Dataset shared by the pages, falling back to the builtin one.
pub fn graph_data() -> Signal<GraphData> {
	use_context::<Signal<GraphData>>().unwrap_or_else(|| Signal::derive(builtin_graph_data))
}

fn legend_entry(category: Category, label: &'static str, size: &'static str) -> impl IntoView {
	let style = format!(
		"display: inline-block; width: {size}; height: {size}; border-radius: 9999px; background-color: {};",
		color_for(category)
	);
	view! {
		<div class="legend-entry flex items-center space-x-1">
			<span style=style></span>
			<span>{label}</span>
		</div>
	}
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>
			<DarkModeToggle />
			<main class="home h-screen p-1 flex flex-col">
				<div class="max-w-7xl mx-auto flex-1 flex flex-col">
					<div class="text-center mb-2">
						<h1 class="text-3xl font-bold mb-1">"Career GPS Graph"</h1>
						<p class="subtitle text-xs">"Interactive 2D career path exploration"</p>
					</div>

					<nav class="graph-bar px-3 py-1 mb-2 flex items-center justify-between text-sm">
						<div class="features flex items-center space-x-3">
							<span>"🎯 Interactive"</span>
							<span>"🔍 Zoom"</span>
							<span>"🔄 Drag"</span>
						</div>
						<div class="legend flex items-center space-x-3">
							{legend_entry(Category::Internship, "Internships", "0.75rem")}
							{legend_entry(Category::Role, "Roles", "0.625rem")}
							{legend_entry(Category::Skill, "Skills", "0.5rem")}
						</div>
					</nav>

					<div class="flex-1">
						<CareerGraphCanvas data=graph_data() center_node="Data Analyst" />
					</div>
				</div>
			</main>
		</ErrorBoundary>
	}
}
