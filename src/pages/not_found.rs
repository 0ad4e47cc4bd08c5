use leptos::prelude::*;
use leptos_router::components::A;

/// 404 page
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<div class="not-found" style="padding: 20px; text-align: center;">
			<h1>"Page not found"</h1>
			<p>
				<A href="/">"Back to the career graph"</A>
			</p>
		</div>
	}
}
