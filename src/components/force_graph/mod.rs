mod component;
mod render;
mod state;
mod types;

use leptos::prelude::*;

use crate::topology::Role;

pub use component::ForceGraphCanvas;
pub use types::NodeStyle;

/// Swatches matching the canvas colors for each role.
#[component]
pub fn RoleLegend() -> impl IntoView {
	[Role::Leader, Role::Router, Role::Child]
		.into_iter()
		.map(|role| {
			let style = NodeStyle::for_role(role);
			view! {
				<span class="legend-item">
					<span
						class="legend-swatch"
						style=format!("background: {}; border-color: {}", style.fill, style.stroke)
					></span>
					{role.as_str()}
				</span>
			}
		})
		.collect_view()
}
