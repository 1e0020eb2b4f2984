use leptos::prelude::*;

use crate::dashboard::{DatasetSummary, NetworkSummary, NodeSummary};
use crate::topology::DeviceCounts;

#[component]
fn InfoRow(label: &'static str, #[prop(into)] value: Signal<String>) -> impl IntoView {
	view! {
		<tr>
			<th>{label}</th>
			<td>{move || value.get()}</td>
		</tr>
	}
}

fn or_unknown(value: Option<String>) -> String {
	value.unwrap_or_else(|| "Unknown".into())
}

#[component]
pub fn NetworkPanel(#[prop(into)] summary: Signal<Option<NetworkSummary>>) -> impl IntoView {
	let field = move |f: fn(&NetworkSummary) -> String| {
		Signal::derive(move || or_unknown(summary.with(|s| s.as_ref().map(f))))
	};
	let status_class = move || {
		let online = summary.with(|s| s.as_ref().is_some_and(NetworkSummary::is_online));
		if online { "status-online" } else { "status-offline" }
	};

	view! {
		<div class="card">
			<h3>
				<span class=status_class></span>
				"Network"
			</h3>
			<table class="info-table">
				<InfoRow label="Name" value=field(|s| s.network_name.clone()) />
				<InfoRow label="PAN ID" value=field(|s| s.pan_id.clone()) />
				<InfoRow label="Extended PAN ID" value=field(|s| s.ext_pan_id.clone()) />
				<InfoRow label="Channel" value=field(|s| s.channel.clone()) />
				<InfoRow label="PSKc" value=field(|s| s.pskc.clone()) />
				<InfoRow label="Role" value=field(|s| s.role.clone()) />
				<InfoRow label="Link-local address" value=field(|s| s.link_local_address.clone()) />
				<InfoRow label="Mesh-local address" value=field(|s| s.mesh_local_address.clone()) />
				<InfoRow label="Routing-locator address" value=field(|s| s.routing_local_address.clone()) />
				<InfoRow label="Mesh-local prefix" value=field(|s| s.mesh_local_prefix.clone()) />
				<InfoRow label="OpenThread version" value=field(|s| s.ot_version.clone()) />
				<InfoRow label="OpenThread API" value=field(|s| s.ot_api_version.clone()) />
				<InfoRow label="RCP channel" value=field(|s| s.rcp_channel.clone()) />
				<InfoRow label="RCP EUI64" value=field(|s| s.rcp_eui64.clone()) />
				<InfoRow label="RCP TX power" value=field(|s| s.rcp_tx_power.clone()) />
				<InfoRow label="RCP version" value=field(|s| s.rcp_version.clone()) />
			</table>
		</div>
	}
}

#[component]
pub fn NodePanel(
	#[prop(into)] summary: Signal<Option<NodeSummary>>,
	#[prop(into)] counts: Signal<DeviceCounts>,
) -> impl IntoView {
	let field = move |f: fn(&NodeSummary) -> Option<String>| {
		Signal::derive(move || or_unknown(summary.with(|s| s.as_ref().and_then(f))))
	};
	let count = move |f: fn(&DeviceCounts) -> usize| {
		Signal::derive(move || counts.with(f).to_string())
	};

	view! {
		<div class="card">
			<h3>"This device"</h3>
			<table class="info-table">
				<InfoRow label="RLOC16" value=field(|s| Some(s.rloc16.clone())) />
				<InfoRow label="Extended address" value=field(|s| Some(s.ext_address.clone())) />
				<InfoRow label="Network name" value=field(|s| Some(s.network_name.clone())) />
				<InfoRow label="Leader" value=field(|s| s.leader.clone()) />
				<InfoRow label="Router number" value=field(|s| Some(s.router_count.clone())) />
				<InfoRow label="Routers" value=count(|c| c.routers) />
				<InfoRow label="Children" value=count(|c| c.children) />
				<InfoRow label="Total devices" value=count(DeviceCounts::total) />
			</table>
		</div>
	}
}

#[component]
pub fn DatasetPanel(#[prop(into)] dataset: Signal<Option<DatasetSummary>>) -> impl IntoView {
	let field = move |f: fn(&DatasetSummary) -> Option<String>| {
		Signal::derive(move || or_unknown(dataset.with(|d| d.as_ref().and_then(f))))
	};

	view! {
		<div class="card">
			<h3>"Active dataset"</h3>
			<Show
				when=move || dataset.with(Option::is_some)
				fallback=|| view! { <p class="text-muted">"No active dataset"</p> }
			>
				<table class="info-table">
					<InfoRow label="Network name" value=field(|d| d.network_name.clone()) />
					<InfoRow label="Network key" value=field(|d| d.network_key.clone()) />
					<InfoRow label="Channel" value=field(|d| d.channel.clone()) />
					<InfoRow label="Channel mask" value=field(|d| d.channel_mask.clone()) />
					<InfoRow label="PAN ID" value=field(|d| d.pan_id.clone()) />
					<InfoRow label="Extended PAN ID" value=field(|d| d.ext_pan_id.clone()) />
					<InfoRow label="PSKc" value=field(|d| d.pskc.clone()) />
				</table>
			</Show>
		</div>
	}
}
