use std::collections::HashMap;

use log::warn;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value as JsonValue;

use super::locator::{Rloc16, RouterId};

/// One device's self-reported diagnostic snapshot, as returned by `/topology`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DiagnosticNode {
	/// Routing locator the record was reported from.
	pub rloc16: Rloc16,
	/// IEEE 802.15.4 extended address, 16 hex characters.
	pub ext_address: Option<String>,
	/// Partition and leader the device currently follows.
	pub leader_data: Option<LeaderData>,
	/// Router table; absent on end devices.
	pub route: Option<Route>,
	/// Present on router-class devices only, even when they have no children.
	#[serde(default, deserialize_with = "present_list")]
	pub child_table: Option<Vec<ChildEntry>>,
	/// Unicast addresses assigned to the device.
	#[serde(rename = "IP6AddressList", default)]
	pub ip6_address_list: Option<Vec<String>>,
}

/// Partition the reporting device is attached to.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LeaderData {
	/// Partition identifier.
	pub partition_id: Option<u32>,
	/// Leader weighting.
	pub weighting: Option<u8>,
	/// Full network data version.
	pub data_version: Option<u8>,
	/// Stable network data version.
	pub stable_data_version: Option<u8>,
	/// Router id of the current leader.
	pub leader_router_id: Option<RouterId>,
}

/// Router table of a router-class device.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Route {
	/// Sequence number of the router id set.
	pub id_sequence: Option<u8>,
	/// One entry per known router.
	#[serde(default)]
	pub route_data: Vec<RouteEntry>,
}

/// A neighbor router as seen from the reporting router.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RouteEntry {
	/// Neighbor's router id.
	pub route_id: RouterId,
	/// Link quality towards the neighbor, 0 to 3.
	#[serde(default)]
	pub link_quality_out: u8,
	/// Link quality from the neighbor, 0 to 3.
	#[serde(default)]
	pub link_quality_in: u8,
	/// Path cost to the neighbor.
	#[serde(default)]
	pub route_cost: u8,
}

/// A child attached to the reporting router.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ChildEntry {
	/// Low bits added to the parent's locator.
	pub child_id: u16,
	/// Child supervision timeout in seconds.
	#[serde(default)]
	pub timeout: u32,
	/// Link mode flags, when readable.
	#[serde(default, deserialize_with = "lenient_mode")]
	pub mode: Option<ChildMode>,
}

/// MLE link mode flags of a child.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ChildMode {
	/// Receiver stays on while idle.
	#[serde(alias = "mRxOnWhenIdle", deserialize_with = "mode_flag")]
	pub rx_on_when_idle: bool,
	/// Full Thread device.
	#[serde(alias = "mDeviceType", deserialize_with = "mode_flag")]
	pub device_type: bool,
	/// Wants the full network data.
	#[serde(alias = "mNetworkData", deserialize_with = "mode_flag")]
	pub network_data: bool,
}

// Agents report the mode bits as booleans or as 0/1.
fn mode_flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
	#[derive(Deserialize)]
	#[serde(untagged)]
	enum Flag {
		Bool(bool),
		Number(f64),
	}
	Ok(match Option::<Flag>::deserialize(deserializer)? {
		Some(Flag::Bool(set)) => set,
		Some(Flag::Number(n)) => n != 0.0,
		None => false,
	})
}

// An unreadable mode reads as `None`; the child and its router stay in the graph.
fn lenient_mode<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<ChildMode>, D::Error> {
	let Some(raw) = Option::<JsonValue>::deserialize(deserializer)? else {
		return Ok(None);
	};
	match ChildMode::deserialize(&raw) {
		Ok(mode) => Ok(Some(mode)),
		Err(err) => {
			warn!("ignoring unreadable child mode {raw}: {err}");
			Ok(None)
		}
	}
}

// `"ChildTable": null` still marks a router.
fn present_list<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
	D: Deserializer<'de>,
	T: Deserialize<'de>,
{
	Ok(Some(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default()))
}

/// What a graph node is in the mesh.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Role {
	/// Router that is not the leader.
	Router,
	/// Router holding the leader role for the partition.
	Leader,
	/// End device attached to a router.
	Child,
}

impl Role {
	/// Leaders count as routers.
	pub fn is_router(self) -> bool {
		matches!(self, Role::Router | Role::Leader)
	}

	/// Display name.
	pub fn as_str(self) -> &'static str {
		match self {
			Role::Router => "Router",
			Role::Leader => "Leader",
			Role::Child => "Child",
		}
	}
}

/// Which pair of roles an edge connects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum EdgeKind {
	/// Link between two routers.
	RouterToRouter,
	/// Link from a router to one of its children.
	RouterToChild,
}

/// Per-edge details, shaped by the edge kind.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged, rename_all_fields = "camelCase")]
pub enum LinkInfo {
	/// Link qualities as seen by the source router.
	Router {
		/// Quality of frames received from the target.
		in_quality: u8,
		/// Quality of frames sent to the target.
		out_quality: u8,
	},
	/// Supervision timeout and link mode of the child.
	Child {
		/// Seconds.
		timeout: u32,
		/// Link mode flags, when readable.
		mode: Option<ChildMode>,
	},
}

/// A device in the built topology.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphNode {
	/// Role derived from the child table and leader data.
	pub role: Role,
	/// Unique key of the node within one graph.
	pub rloc16: Rloc16,
	/// Router id, or the parent's for a child.
	pub route_id: RouterId,
	/// Extended address, routers only.
	pub ext_address: Option<String>,
	/// Leader data as reported.
	pub leader_data: Option<LeaderData>,
	/// Router table as reported.
	pub route: Option<Route>,
	/// Child table as reported; `None` for children.
	pub child_table: Option<Vec<ChildEntry>>,
	/// Reported IPv6 addresses.
	pub ip6_addresses: Vec<String>,
}

/// An undirected link between two nodes of the same graph.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphEdge {
	/// Index into [`TopologyGraph::nodes`].
	pub source: usize,
	/// Index into [`TopologyGraph::nodes`].
	pub target: usize,
	/// Always 1.
	pub weight: u32,
	/// Router link or child link.
	pub kind: EdgeKind,
	/// Link details.
	pub link_info: LinkInfo,
}

/// Result of one topology build. Indices are only meaningful within this value.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopologyGraph {
	/// Routers in input order, then children.
	pub nodes: Vec<GraphNode>,
	/// Router links and child links.
	pub edges: Vec<GraphEdge>,
	/// Leading entries of `nodes` that are routers.
	pub router_count: usize,
	/// Index of the node serving the dashboard, if it reported.
	pub self_node: Option<usize>,
	/// Locator to node index.
	#[serde(skip)]
	pub index: HashMap<Rloc16, usize>,
}

impl TopologyGraph {
	/// True when no router was found.
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	/// Index of the node with this locator.
	pub fn index_of(&self, rloc16: Rloc16) -> Option<usize> {
		self.index.get(&rloc16).copied()
	}

	/// Node with this locator.
	pub fn node(&self, rloc16: Rloc16) -> Option<&GraphNode> {
		self.index_of(rloc16).map(|i| &self.nodes[i])
	}

	/// First node holding the leader role.
	pub fn leader(&self) -> Option<&GraphNode> {
		self.nodes.iter().find(|n| n.role == Role::Leader)
	}

	/// Number of child nodes.
	pub fn child_count(&self) -> usize {
		self.nodes.len() - self.router_count
	}
}
