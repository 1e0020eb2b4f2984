use log::{debug, warn};
use serde::Deserialize;
use serde_json::Value as JsonValue;

use super::locator::Rloc16;
use super::types::{DiagnosticNode, EdgeKind, GraphEdge, GraphNode, LinkInfo, Role, TopologyGraph};
use crate::api::{ApiResponse, NodeInfo};

/// Builds the topology graph from the `/node_information` and `/topology` responses.
///
/// Returns an empty graph when the diagnostic result is absent, null, not a list, or
/// the agent reported an error.
pub fn build_topology_graph(
	self_info: &ApiResponse<NodeInfo>,
	diagnostics: &ApiResponse<JsonValue>,
) -> TopologyGraph {
	let Some(JsonValue::Array(raw)) = diagnostics.data() else {
		debug!("topology response carries no diagnostic list");
		return TopologyGraph::default();
	};
	let self_rloc16 = self_info.data().and_then(|info| info.rloc16);
	build_from_records(&parse_records(raw), self_rloc16)
}

/// Decodes each record on its own so one malformed device does not hide the rest.
pub fn parse_records(raw: &[JsonValue]) -> Vec<DiagnosticNode> {
	raw.iter()
		.enumerate()
		.filter_map(|(i, value)| match DiagnosticNode::deserialize(value) {
			Ok(node) => Some(node),
			Err(err) => {
				warn!("skipping diagnostic record {i}: {err}");
				None
			}
		})
		.collect()
}

/// Routers first, in input order, then children in the order their parents list them.
pub fn build_from_records(records: &[DiagnosticNode], self_rloc16: Option<Rloc16>) -> TopologyGraph {
	let mut graph = TopologyGraph::default();
	let mut routers = Vec::new();

	for record in records {
		if record.child_table.is_none() {
			continue;
		}
		if graph.index.contains_key(&record.rloc16) {
			warn!("duplicate diagnostic record for {}", record.rloc16);
			continue;
		}
		let idx = graph.nodes.len();
		graph.index.insert(record.rloc16, idx);
		graph.nodes.push(router_node(record));
		if Some(record.rloc16) == self_rloc16 {
			graph.self_node = Some(idx);
		}
		routers.push((idx, record));
	}
	graph.router_count = graph.nodes.len();

	for (src, record) in routers {
		link_neighbors(&mut graph, src, record);
		attach_children(&mut graph, src, record);
	}

	debug!(
		"built topology: {} routers, {} children, {} edges",
		graph.router_count,
		graph.child_count(),
		graph.edges.len()
	);
	graph
}

fn router_node(record: &DiagnosticNode) -> GraphNode {
	let route_id = record.rloc16.router_id();
	let leader_id = record
		.leader_data
		.as_ref()
		.and_then(|leader| leader.leader_router_id);
	GraphNode {
		role: if leader_id == Some(route_id) {
			Role::Leader
		} else {
			Role::Router
		},
		rloc16: record.rloc16,
		route_id,
		ext_address: record.ext_address.clone(),
		leader_data: record.leader_data.clone(),
		route: record.route.clone(),
		child_table: record.child_table.clone(),
		ip6_addresses: record.ip6_address_list.clone().unwrap_or_default(),
	}
}

// Each router pair is linked once, from the lower sequence index. A neighbor that
// only the higher-indexed router reports produces no edge.
fn link_neighbors(graph: &mut TopologyGraph, src: usize, record: &DiagnosticNode) {
	let entries = record.route.iter().flat_map(|route| &route.route_data);
	for entry in entries {
		let Some(dist) = graph.index_of(entry.route_id.base_locator()) else {
			continue;
		};
		if dist >= graph.router_count || src >= dist {
			continue;
		}
		graph.edges.push(GraphEdge {
			source: src,
			target: dist,
			weight: 1,
			kind: EdgeKind::RouterToRouter,
			link_info: LinkInfo::Router {
				in_quality: entry.link_quality_in,
				out_quality: entry.link_quality_out,
			},
		});
	}
}

fn attach_children(graph: &mut TopologyGraph, parent: usize, record: &DiagnosticNode) {
	let route_id = graph.nodes[parent].route_id;
	for child in record.child_table.iter().flatten() {
		let rloc16 = match record.rloc16.child(child.child_id) {
			Ok(rloc16) => rloc16,
			Err(err) => {
				warn!("{err}");
				continue;
			}
		};
		if graph.index.contains_key(&rloc16) {
			warn!("child locator {rloc16} already present in topology");
			continue;
		}
		let idx = graph.nodes.len();
		graph.index.insert(rloc16, idx);
		graph.nodes.push(GraphNode {
			role: Role::Child,
			rloc16,
			route_id,
			ext_address: None,
			leader_data: None,
			route: None,
			child_table: None,
			ip6_addresses: Vec::new(),
		});
		graph.edges.push(GraphEdge {
			source: parent,
			target: idx,
			weight: 1,
			kind: EdgeKind::RouterToChild,
			link_info: LinkInfo::Child {
				timeout: child.timeout,
				mode: child.mode,
			},
		});
	}
}
