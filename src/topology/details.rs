use super::types::{GraphNode, Role};

const UNKNOWN: &str = "Unknown";

/// Display-ready summary of one selected graph node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeDetails {
	/// Role of the node.
	pub role: Role,
	/// Locator as `0x` plus four hex digits.
	pub rloc16: String,
	/// Colon-separated extended address, or `Unknown`.
	pub mac: String,
	/// Present when the node reported leader data.
	pub leader: Option<LeaderSummary>,
	/// One line per router table entry.
	pub routes: Vec<String>,
	/// One line per child table entry.
	pub children: Vec<String>,
	/// Reported IPv6 addresses.
	pub ip6_addresses: Vec<String>,
}

/// Leader data fields shown in the detail panel; missing values read `N/A`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeaderSummary {
	/// Partition identifier.
	pub partition_id: String,
	/// Network data version.
	pub data_version: String,
}

/// `00112233445566AA` -> `00:11:22:33:44:55:66:AA`. Anything shorter than 16 characters is `Unknown`.
pub fn format_mac(raw: &str) -> String {
	if raw.len() < 16 {
		return UNKNOWN.into();
	}
	let chars: Vec<char> = raw.chars().collect();
	chars
		.chunks(2)
		.map(|pair| pair.iter().collect::<String>().to_uppercase())
		.collect::<Vec<_>>()
		.join(":")
}

impl NodeDetails {
	/// Formats every field of `node` for display.
	pub fn from_node(node: &GraphNode) -> Self {
		let leader = node.leader_data.as_ref().map(|leader| LeaderSummary {
			partition_id: or_na(leader.partition_id),
			data_version: or_na(leader.data_version),
		});

		let routes = node
			.route
			.iter()
			.flat_map(|route| &route.route_data)
			.map(|entry| {
				format!(
					"Router ID: {} | LQ In: {} | LQ Out: {} | Cost: {}",
					entry.route_id, entry.link_quality_in, entry.link_quality_out, entry.route_cost
				)
			})
			.collect();

		let children = node
			.child_table
			.iter()
			.flatten()
			.map(|child| {
				let rloc16 = node
					.rloc16
					.child(child.child_id)
					.map(|r| r.to_string())
					.unwrap_or_else(|_| UNKNOWN.into());
				format!("Child {} ({rloc16}) - Timeout: {}s", child.child_id, child.timeout)
			})
			.collect();

		Self {
			role: node.role,
			rloc16: node.rloc16.to_string(),
			mac: node.ext_address.as_deref().map(format_mac).unwrap_or_else(|| UNKNOWN.into()),
			leader,
			routes,
			children,
			ip6_addresses: node.ip6_addresses.clone(),
		}
	}
}

fn or_na<T: ToString>(value: Option<T>) -> String {
	value.map(|v| v.to_string()).unwrap_or_else(|| "N/A".into())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::topology::{ChildEntry, LeaderData, Rloc16, Route, RouteEntry, RouterId};

	fn router() -> GraphNode {
		GraphNode {
			role: Role::Leader,
			rloc16: Rloc16(0x0400),
			route_id: RouterId(1),
			ext_address: Some("00112233445566aa".into()),
			leader_data: Some(LeaderData {
				partition_id: Some(305419896),
				data_version: Some(12),
				leader_router_id: Some(RouterId(1)),
				..Default::default()
			}),
			route: Some(Route {
				id_sequence: None,
				route_data: vec![RouteEntry {
					route_id: RouterId(2),
					link_quality_out: 3,
					link_quality_in: 2,
					route_cost: 1,
				}],
			}),
			child_table: Some(vec![ChildEntry { child_id: 3, timeout: 240, mode: None }]),
			ip6_addresses: vec!["fd00::ff:fe00:400".into()],
		}
	}

	#[test]
	fn mac_formatting() {
		assert_eq!(format_mac("00112233445566AA"), "00:11:22:33:44:55:66:AA");
		assert_eq!(format_mac("00112233445566aa"), "00:11:22:33:44:55:66:AA");
		assert_eq!(format_mac("0011223344"), "Unknown");
		assert_eq!(format_mac(""), "Unknown");
	}

	#[test]
	fn router_details() {
		let details = NodeDetails::from_node(&router());
		assert_eq!(details.role, Role::Leader);
		assert_eq!(details.rloc16, "0x0400");
		assert_eq!(details.mac, "00:11:22:33:44:55:66:AA");
		assert_eq!(
			details.leader,
			Some(LeaderSummary {
				partition_id: "305419896".into(),
				data_version: "12".into(),
			})
		);
		assert_eq!(details.routes, ["Router ID: 0x02 | LQ In: 2 | LQ Out: 3 | Cost: 1"]);
		assert_eq!(details.children, ["Child 3 (0x0403) - Timeout: 240s"]);
		assert_eq!(details.ip6_addresses, ["fd00::ff:fe00:400"]);
	}

	#[test]
	fn bare_child_details() {
		let child = GraphNode {
			role: Role::Child,
			rloc16: Rloc16(0x0403),
			route_id: RouterId(1),
			ext_address: None,
			leader_data: None,
			route: None,
			child_table: None,
			ip6_addresses: Vec::new(),
		};
		let details = NodeDetails::from_node(&child);
		assert_eq!(details.mac, "Unknown");
		assert!(details.leader.is_none());
		assert!(details.routes.is_empty() && details.children.is_empty());
	}

	#[test]
	fn missing_leader_fields_show_na() {
		let mut node = router();
		node.leader_data = Some(LeaderData::default());
		let details = NodeDetails::from_node(&node);
		assert_eq!(details.leader.unwrap().partition_id, "N/A");
	}
}
