use leptos::prelude::*;
use log::{debug, error};
use wasm_bindgen_futures::spawn_local;

use crate::api::ApiClient;
use crate::components::action_log::{ActionLog, ActionOutcome};
use crate::components::actions::{FormNetworkPanel, ScanPanel, SettingsPanel};
use crate::components::details_panel::NodeDetailsPanel;
use crate::components::force_graph::{ForceGraphCanvas, RoleLegend};
use crate::components::info_panels::{DatasetPanel, NetworkPanel, NodePanel};
use crate::components::topology_tables::{ChildTable, RouterTable};
use crate::dashboard::{DatasetSummary, NetworkSummary, NodeSummary};
use crate::topology::{NodeDetails, TopologyGraph, build_topology_graph};

/// Everything the page renders from the agent. Each field is refreshed on its own.
#[derive(Clone, Copy)]
struct DashboardState {
	network: RwSignal<Option<NetworkSummary>>,
	node: RwSignal<Option<NodeSummary>>,
	dataset: RwSignal<Option<DatasetSummary>>,
	topology: RwSignal<TopologyGraph>,
	selected: RwSignal<Option<usize>>,
	in_flight: RwSignal<u32>,
}

impl DashboardState {
	fn new() -> Self {
		Self {
			network: RwSignal::new(None),
			node: RwSignal::new(None),
			dataset: RwSignal::new(None),
			topology: RwSignal::new(TopologyGraph::default()),
			selected: RwSignal::new(None),
			in_flight: RwSignal::new(0),
		}
	}

	/// Runs `fut` in the background, counting it as in flight until it finishes.
	fn track(self, fut: impl Future<Output = ()> + 'static) {
		self.in_flight.update(|n| *n += 1);
		spawn_local(async move {
			fut.await;
			self.in_flight.update(|n| *n = n.saturating_sub(1));
		});
	}
}

async fn load_properties(client: ApiClient, state: DashboardState) {
	match client.properties().await.and_then(|resp| resp.into_result()) {
		Ok(props) => state.network.set(Some(NetworkSummary::from_properties(&props))),
		Err(err) => error!("loading network properties failed: {err}"),
	}
}

async fn load_node(client: ApiClient, state: DashboardState) {
	match client.node_information().await.and_then(|resp| resp.into_result()) {
		Ok(info) => state.node.set(Some(NodeSummary::from_node_info(&info))),
		Err(err) => error!("loading node information failed: {err}"),
	}
}

async fn load_dataset(client: ApiClient, state: DashboardState) {
	match client.active_dataset().await {
		Ok(dataset) => state
			.dataset
			.set(dataset.as_ref().map(DatasetSummary::from_dataset)),
		Err(err) => error!("loading active dataset failed: {err}"),
	}
}

/// Diagnostics first, then this node's identity; the graph is replaced only when both arrive.
async fn load_topology(client: ApiClient, state: DashboardState) {
	let diagnostics = match client.topology().await {
		Ok(resp) => resp,
		Err(err) => {
			error!("loading topology failed: {err}");
			return;
		}
	};
	let self_info = match client.node_information().await {
		Ok(resp) => resp,
		Err(err) => {
			error!("loading node information for topology failed: {err}");
			return;
		}
	};
	let graph = build_topology_graph(&self_info, &diagnostics);
	debug!(
		"topology refreshed: {} nodes, {} edges",
		graph.nodes.len(),
		graph.edges.len()
	);
	state.selected.set(graph.self_node);
	state.topology.set(graph);
}

#[component]
pub fn Dashboard() -> impl IntoView {
	let client = use_context::<ApiClient>().unwrap_or_default();
	let state = DashboardState::new();
	let log = RwSignal::new(None::<ActionOutcome>);

	let refresh_topology = {
		let client = client.clone();
		move || state.track(load_topology(client.clone(), state))
	};
	let refresh_all = {
		let client = client.clone();
		let refresh_topology = refresh_topology.clone();
		move || {
			state.track(load_properties(client.clone(), state));
			state.track(load_node(client.clone(), state));
			state.track(load_dataset(client.clone(), state));
			refresh_topology();
		}
	};
	refresh_all();

	let topology: Signal<TopologyGraph> = state.topology.into();
	let counts = Signal::derive(move || state.topology.with(TopologyGraph::counts));
	let details = Signal::derive(move || {
		state.topology.with(|graph| {
			state
				.selected
				.get()
				.and_then(|index| graph.nodes.get(index))
				.map(NodeDetails::from_node)
		})
	});
	let on_select = Callback::new(move |index: usize| state.selected.set(Some(index)));

	view! {
		<header class="toolbar">
			<h1>"Thread Border Router"</h1>
			<button class="btn-submit" on:click=move |_| refresh_all()>"Refresh all"</button>
			<button class="btn-submit" on:click=move |_| refresh_topology()>"Refresh topology"</button>
			<Show when=move || { state.in_flight.get() > 0 }>
				<span class="text-muted">"Loading..."</span>
			</Show>
		</header>
		<main class="dashboard">
			<section class="panels">
				<NetworkPanel summary=state.network />
				<NodePanel summary=state.node counts=counts />
				<DatasetPanel dataset=state.dataset />
			</section>
			<section class="topology">
				<div class="card graph-card">
					<h3>"Topology"</h3>
					<div class="legend">
						<RoleLegend />
					</div>
					<ForceGraphCanvas data=topology on_select=on_select />
				</div>
				<div class="card">
					<h3>"Device details"</h3>
					<NodeDetailsPanel details=details />
				</div>
			</section>
			<section class="tables">
				<div class="card">
					<h3>"Routers"</h3>
					<RouterTable topology=topology />
				</div>
				<div class="card">
					<h3>"Children"</h3>
					<ChildTable topology=topology />
				</div>
			</section>
			<section class="actions">
				<ScanPanel log=log />
				<FormNetworkPanel log=log />
				<SettingsPanel log=log />
			</section>
		</main>
		<ActionLog log=log />
	}
}
