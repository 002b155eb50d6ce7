use leptos::prelude::*;

use crate::components::neural_glow::NeuralGlowCanvas;

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

			<div class="fullscreen-glow">
				<NeuralGlowCanvas />
				<div class="glow-overlay">
					<p class="subtitle">"Click a node to fire it. Press Escape to stop."</p>
				</div>
			</div>
		</ErrorBoundary>
	}
}
