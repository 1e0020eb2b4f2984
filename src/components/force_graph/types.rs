use crate::topology::{EdgeKind, GraphNode, Role};

/// Per-role look of a node on the canvas, in world units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeStyle {
	pub radius: f64,
	pub fill: &'static str,
	pub stroke: &'static str,
	pub stroke_width: f64,
}

impl NodeStyle {
	pub fn for_role(role: Role) -> Self {
		match role {
			Role::Leader => Self {
				radius: 9.0,
				fill: "#0ea2bd",
				stroke: "#1e6b7a",
				stroke_width: 3.0,
			},
			Role::Router => Self {
				radius: 7.0,
				fill: "#03e2dd",
				stroke: "#484e46",
				stroke_width: 2.0,
			},
			Role::Child => Self {
				radius: 5.0,
				fill: "#aad4b0",
				stroke: "#484e46",
				stroke_width: 1.0,
			},
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeStyle {
	pub rgb: (u8, u8, u8),
	pub width: f64,
	pub dashed: bool,
}

impl EdgeStyle {
	pub fn for_kind(kind: EdgeKind) -> Self {
		match kind {
			EdgeKind::RouterToRouter => Self {
				rgb: (153, 153, 153),
				width: 2.0,
				dashed: false,
			},
			EdgeKind::RouterToChild => Self {
				rgb: (204, 204, 204),
				width: 1.0,
				dashed: true,
			},
		}
	}
}

/// Two-line canvas label: the locator, and the last three MAC octets when known.
pub fn node_label(node: &GraphNode) -> (String, Option<String>) {
	let mac_tail = node
		.ext_address
		.as_deref()
		.filter(|mac| mac.len() >= 16 && mac.is_ascii())
		.map(|mac| {
			let tail = &mac[mac.len() - 6..];
			format!(
				"...{}:{}:{}",
				&tail[0..2],
				&tail[2..4],
				&tail[4..6]
			)
			.to_uppercase()
		});
	(node.rloc16.to_string(), mac_tail)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::topology::{Rloc16, RouterId};

	#[test]
	fn label_shows_mac_tail() {
		let mut node = GraphNode {
			role: Role::Router,
			rloc16: Rloc16(0x0800),
			route_id: RouterId(2),
			ext_address: Some("00112233445566aa".into()),
			leader_data: None,
			route: None,
			child_table: None,
			ip6_addresses: Vec::new(),
		};
		assert_eq!(
			node_label(&node),
			("0x0800".to_string(), Some("...55:66:AA".to_string()))
		);
		node.ext_address = Some("abc".into());
		assert_eq!(node_label(&node).1, None);
	}

	#[test]
	fn leader_stands_out() {
		let leader = NodeStyle::for_role(Role::Leader);
		let router = NodeStyle::for_role(Role::Router);
		assert!(leader.radius > router.radius);
		assert!(EdgeStyle::for_kind(EdgeKind::RouterToChild).dashed);
	}
}
