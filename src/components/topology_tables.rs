use leptos::prelude::*;

use crate::topology::{Role, TopologyGraph};

#[component]
pub fn RouterTable(#[prop(into)] topology: Signal<TopologyGraph>) -> impl IntoView {
	let rows = move || topology.with(TopologyGraph::router_rows);

	view! {
		<table id="router-table" class="table">
			<thead>
				<tr>
					<th>"Router ID"</th>
					<th>"RLOC16"</th>
					<th>"Extended address"</th>
					<th>"LQ in"</th>
					<th>"LQ out"</th>
					<th>"Cost"</th>
					<th>"Role"</th>
				</tr>
			</thead>
			<tbody>
				{move || {
					let rows = rows();
					if rows.is_empty() {
						return view! {
							<tr><td colspan="7" class="text-center text-muted">"No routers found"</td></tr>
						}
						.into_any();
					}
					rows.into_iter()
						.map(|row| {
							let badge = if row.role == Role::Leader { "badge bg-primary" } else { "badge bg-info" };
							view! {
								<tr>
									<td>{row.router_id}</td>
									<td>{row.rloc16}</td>
									<td class="small">{row.ext_address}</td>
									<td>{row.link_quality_in}</td>
									<td>{row.link_quality_out}</td>
									<td>{row.route_cost}</td>
									<td><span class=badge>{row.role.as_str()}</span></td>
								</tr>
							}
						})
						.collect_view()
						.into_any()
				}}
			</tbody>
		</table>
	}
}

#[component]
pub fn ChildTable(#[prop(into)] topology: Signal<TopologyGraph>) -> impl IntoView {
	let rows = move || topology.with(TopologyGraph::child_rows);

	view! {
		<table id="child-table" class="table">
			<thead>
				<tr>
					<th>"Parent RLOC16"</th>
					<th>"Child ID"</th>
					<th>"RLOC16"</th>
					<th>"Timeout"</th>
					<th>"Mode"</th>
				</tr>
			</thead>
			<tbody>
				{move || {
					let rows = rows();
					if rows.is_empty() {
						return view! {
							<tr><td colspan="5" class="text-center text-muted">"No child devices found"</td></tr>
						}
						.into_any();
					}
					rows.into_iter()
						.map(|row| {
							view! {
								<tr>
									<td>{row.parent_rloc16}</td>
									<td>{row.child_id}</td>
									<td>{row.rloc16}</td>
									<td>{format!("{}s", row.timeout)}</td>
									<td>{row.mode}</td>
								</tr>
							}
						})
						.collect_view()
						.into_any()
				}}
			</tbody>
		</table>
	}
}
