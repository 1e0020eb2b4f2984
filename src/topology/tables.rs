use super::details::format_mac;
use super::types::{ChildMode, Role, RouteEntry, TopologyGraph};

const NOT_AVAILABLE: &str = "N/A";

/// One line of the router table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouterRow {
	/// Router id as `0x` plus uppercase hex.
	pub router_id: String,
	/// Locator of the router.
	pub rloc16: String,
	/// Colon-separated extended address, or `Unknown`.
	pub ext_address: String,
	/// Inbound quality of the first neighbor entry, or `N/A`.
	pub link_quality_in: String,
	/// Outbound quality of the first neighbor entry, or `N/A`.
	pub link_quality_out: String,
	/// Cost of the first neighbor entry, or `N/A`.
	pub route_cost: String,
	/// Router or leader.
	pub role: Role,
}

/// One line of the child table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChildRow {
	/// Locator of the parent router.
	pub parent_rloc16: String,
	/// Child id within the parent.
	pub child_id: u16,
	/// Derived child locator, or `Unknown` on overflow.
	pub rloc16: String,
	/// Supervision timeout in seconds.
	pub timeout: u32,
	/// Formatted link mode.
	pub mode: String,
}

/// Device totals shown next to the node panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DeviceCounts {
	/// Routers, the leader included.
	pub routers: usize,
	/// Child devices.
	pub children: usize,
}

impl DeviceCounts {
	/// Routers plus children.
	pub fn total(&self) -> usize {
		self.routers + self.children
	}
}

/// `RxOnIdle, FFD, FullNetData`, or `Unknown` when no flag is set.
pub fn format_mode(mode: Option<&ChildMode>) -> String {
	let Some(mode) = mode else {
		return "Unknown".into();
	};
	let flags: Vec<&str> = [
		(mode.rx_on_when_idle, "RxOnIdle"),
		(mode.device_type, "FFD"),
		(mode.network_data, "FullNetData"),
	]
	.into_iter()
	.filter_map(|(set, name)| set.then_some(name))
	.collect();
	if flags.is_empty() {
		"Unknown".into()
	} else {
		flags.join(", ")
	}
}

impl TopologyGraph {
	/// Router and child totals.
	pub fn counts(&self) -> DeviceCounts {
		DeviceCounts {
			routers: self.router_count,
			children: self.child_count(),
		}
	}

	/// One row per router. Link figures come from the first neighbor entry only.
	pub fn router_rows(&self) -> Vec<RouterRow> {
		self.nodes
			.iter()
			.filter(|node| node.role.is_router())
			.map(|node| {
				let first = node.route.as_ref().and_then(|r| r.route_data.first());
				let field = |f: fn(&RouteEntry) -> u8| {
					first.map(|e| f(e).to_string()).unwrap_or_else(|| NOT_AVAILABLE.into())
				};
				RouterRow {
					router_id: format!("0x{:X}", node.route_id.0),
					rloc16: node.rloc16.to_string(),
					ext_address: node
						.ext_address
						.as_deref()
						.map(format_mac)
						.unwrap_or_else(|| "Unknown".into()),
					link_quality_in: field(|e| e.link_quality_in),
					link_quality_out: field(|e| e.link_quality_out),
					route_cost: field(|e| e.route_cost),
					role: node.role,
				}
			})
			.collect()
	}

	/// One row per child entry, grouped by parent in router order.
	pub fn child_rows(&self) -> Vec<ChildRow> {
		let mut rows = Vec::new();
		for parent in self.nodes.iter().filter(|node| node.role.is_router()) {
			for child in parent.child_table.iter().flatten() {
				rows.push(ChildRow {
					parent_rloc16: parent.rloc16.to_string(),
					child_id: child.child_id,
					rloc16: parent
						.rloc16
						.child(child.child_id)
						.map(|r| r.to_string())
						.unwrap_or_else(|_| "Unknown".into()),
					timeout: child.timeout,
					mode: format_mode(child.mode.as_ref()),
				});
			}
		}
		rows
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;
	use crate::topology::{Rloc16, build_from_records, parse_records};

	fn graph() -> TopologyGraph {
		let raw = json!([
			{
				"Rloc16": 0x0400,
				"ExtAddress": "aabbccddeeff0011",
				"LeaderData": { "LeaderRouterId": 1 },
				"Route": { "RouteData": [
					{ "RouteId": 2, "LinkQualityIn": 3, "LinkQualityOut": 3, "RouteCost": 1 },
					{ "RouteId": 5, "LinkQualityIn": 1, "LinkQualityOut": 1, "RouteCost": 4 }
				] },
				"ChildTable": [
					{ "ChildId": 1, "Timeout": 240, "Mode": { "RxOnWhenIdle": true, "DeviceType": false, "NetworkData": true } },
					{ "ChildId": 2, "Timeout": 30, "Mode": {} }
				]
			},
			{ "Rloc16": 0x0800, "ChildTable": [] }
		]);
		let records = parse_records(raw.as_array().unwrap());
		build_from_records(&records, Some(Rloc16(0x0400)))
	}

	#[test]
	fn router_rows_use_first_route_entry() {
		let rows = graph().router_rows();
		assert_eq!(rows.len(), 2);
		assert_eq!(rows[0].router_id, "0x1");
		assert_eq!(rows[0].ext_address, "AA:BB:CC:DD:EE:FF:00:11");
		assert_eq!(rows[0].link_quality_in, "3");
		assert_eq!(rows[0].route_cost, "1");
		assert_eq!(rows[0].role, Role::Leader);
		assert_eq!(rows[1].link_quality_out, "N/A");
		assert_eq!(rows[1].ext_address, "Unknown");
		assert_eq!(rows[1].role, Role::Router);
	}

	#[test]
	fn child_rows_and_counts() {
		let g = graph();
		let rows = g.child_rows();
		assert_eq!(rows.len(), 2);
		assert_eq!(rows[0].rloc16, "0x0401");
		assert_eq!(rows[0].parent_rloc16, "0x0400");
		assert_eq!(rows[0].mode, "RxOnIdle, FullNetData");
		assert_eq!(rows[1].mode, "Unknown");
		assert_eq!(g.counts(), DeviceCounts { routers: 2, children: 2 });
		assert_eq!(g.counts().total(), 4);
	}

	#[test]
	fn mode_without_data() {
		assert_eq!(format_mode(None), "Unknown");
		let all = ChildMode {
			rx_on_when_idle: true,
			device_type: true,
			network_data: true,
		};
		assert_eq!(format_mode(Some(&all)), "RxOnIdle, FFD, FullNetData");
	}
}
