use leptos::prelude::*;

use crate::topology::NodeDetails;

#[component]
pub fn NodeDetailsPanel(#[prop(into)] details: Signal<Option<NodeDetails>>) -> impl IntoView {
	move || match details.get() {
		None => view! { <p class="text-muted">"Select a device in the topology"</p> }.into_any(),
		Some(d) => {
			let leader = d.leader.map(|leader| {
				view! {
					<div class="row"><strong>"Partition ID: "</strong>{leader.partition_id}</div>
					<div class="row"><strong>"Data Version: "</strong>{leader.data_version}</div>
				}
			});
			let routes = (!d.routes.is_empty()).then(|| {
				view! {
					<div class="row"><strong>"Route Information:"</strong></div>
					<div class="route-info">
						{d.routes
							.into_iter()
							.map(|line| view! { <div class="route-entry">{line}</div> })
							.collect_view()}
					</div>
				}
			});
			let child_count = d.children.len();
			let children = (child_count > 0).then(|| {
				view! {
					<div class="row"><strong>{format!("Children ({child_count}):")}</strong></div>
					<div class="children-info">
						{d.children
							.into_iter()
							.map(|line| view! { <div class="child-entry">{line}</div> })
							.collect_view()}
					</div>
				}
			});
			let addresses = (!d.ip6_addresses.is_empty()).then(|| {
				view! {
					<div class="row"><strong>"IPv6 Addresses:"</strong></div>
					<div class="ip-addresses">
						{d.ip6_addresses
							.into_iter()
							.map(|addr| view! { <code class="d-block">{addr}</code> })
							.collect_view()}
					</div>
				}
			});

			view! {
				<div class="device-detail-card">
					<h4>{format!("{} Device", d.role.as_str())}</h4>
					<div class="row"><strong>"RLOC16: "</strong><code>{d.rloc16}</code></div>
					<div class="row"><strong>"MAC Address: "</strong><span class="mac-address">{d.mac}</span></div>
					{leader}
					{routes}
					{children}
					{addresses}
				</div>
			}
			.into_any()
		}
	}
}
