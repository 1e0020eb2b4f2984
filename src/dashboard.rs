//! Panel view models built from the agent's property, node and dataset payloads.

use serde_json::Value as JsonValue;

use crate::api::{ActiveDataset, ChannelMask, NetworkProperties, NodeInfo};
use crate::topology::format_mac;

const UNKNOWN: &str = "Unknown";

/// Roles in which the radio is not attached to any partition.
const OFFLINE_ROLES: &[&str] = &["unknown", "disabled", "detached"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NetworkSummary {
	pub network_name: String,
	pub pan_id: String,
	pub channel: String,
	pub link_local_address: String,
	pub mesh_local_address: String,
	pub routing_local_address: String,
	pub mesh_local_prefix: String,
	pub role: String,
	pub ext_pan_id: String,
	pub pskc: String,
	pub ot_version: String,
	pub ot_api_version: String,
	pub rcp_channel: String,
	pub rcp_eui64: String,
	pub rcp_tx_power: String,
	pub rcp_version: String,
}

impl NetworkSummary {
	pub fn from_properties(props: &NetworkProperties) -> Self {
		let get = |key: &str| property_text(props.get(key));
		let mac = |key: &str| {
			props
				.get(key)
				.and_then(JsonValue::as_str)
				.map(format_mac)
				.unwrap_or_else(|| UNKNOWN.into())
		};
		let role = props
			.get("RCP:State")
			.map(|v| property_text(Some(v)))
			.filter(|r| r != UNKNOWN)
			.unwrap_or_else(|| "unknown".into());
		Self {
			network_name: get("Network:Name"),
			pan_id: get("Network:PANID"),
			channel: get("RCP:Channel"),
			link_local_address: get("IPv6:LinkLocalAddress"),
			mesh_local_address: get("IPv6:MeshLocalAddress"),
			routing_local_address: get("IPv6:RoutingLocalAddress"),
			mesh_local_prefix: get("IPv6:MeshLocalPrefix"),
			role,
			ext_pan_id: mac("Network:XPANID"),
			pskc: mac("OpenThread:PSKc"),
			ot_version: get("OpenThread:Version"),
			ot_api_version: get("OpenThread:VersionAPI"),
			rcp_channel: get("RCP:Channel"),
			rcp_eui64: get("RCP:EUI64"),
			rcp_tx_power: get("RCP:TxPower"),
			rcp_version: get("RCP:Version"),
		}
	}

	pub fn is_online(&self) -> bool {
		!OFFLINE_ROLES.contains(&self.role.as_str())
	}
}

// Empty strings and nulls read as missing.
fn property_text(value: Option<&JsonValue>) -> String {
	match value {
		None | Some(JsonValue::Null) => UNKNOWN.into(),
		Some(JsonValue::String(s)) if s.is_empty() => UNKNOWN.into(),
		Some(JsonValue::String(s)) => s.clone(),
		Some(other) => other.to_string(),
	}
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeSummary {
	pub rloc16: String,
	pub ext_address: String,
	pub router_count: String,
	pub network_name: String,
	pub leader: Option<String>,
}

impl NodeSummary {
	pub fn from_node_info(info: &NodeInfo) -> Self {
		let ext_address = match info.ext_address.as_deref() {
			Some(raw) if raw.len() >= 16 => format_mac(raw),
			Some(raw) if !raw.is_empty() => raw.to_string(),
			_ => UNKNOWN.into(),
		};
		Self {
			rloc16: info
				.rloc16
				.map(|r| r.to_string())
				.unwrap_or_else(|| UNKNOWN.into()),
			ext_address,
			router_count: info.router_number.unwrap_or(0).to_string(),
			network_name: info.network_name.clone().unwrap_or_else(|| UNKNOWN.into()),
			leader: info
				.leader_data
				.as_ref()
				.and_then(|l| l.leader_router_id)
				.map(|id| format!("0x{:x}", id.0)),
		}
	}
}

/// Fields missing from the dataset stay `None`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DatasetSummary {
	pub network_key: Option<String>,
	pub channel_mask: Option<String>,
	pub network_name: Option<String>,
	pub channel: Option<String>,
	pub pan_id: Option<String>,
	pub ext_pan_id: Option<String>,
	pub pskc: Option<String>,
}

impl DatasetSummary {
	pub fn from_dataset(dataset: &ActiveDataset) -> Self {
		let channel_mask = match (&dataset.channel_mask, dataset.channel) {
			(Some(ChannelMask::Bits(bits)), _) => Some(format!("0x{bits:X}")),
			(Some(ChannelMask::Text(text)), _) => Some(text.clone()),
			(None, Some(channel)) => 1u32.checked_shl(u32::from(channel)).map(|m| format!("0x{m:X}")),
			(None, None) => None,
		};
		Self {
			network_key: dataset
				.network_key
				.clone()
				.or_else(|| dataset.master_key.clone()),
			channel_mask,
			network_name: dataset.network_name.clone(),
			channel: dataset.channel.map(|c| c.to_string()),
			pan_id: dataset.pan_id.map(|p| format!("0x{p:X}")),
			ext_pan_id: dataset.extended_pan_id.as_deref().map(format_mac),
			pskc: dataset.pskc.as_deref().map(format_mac),
		}
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;
	use crate::topology::{LeaderData, Rloc16, RouterId};

	fn props(value: JsonValue) -> NetworkProperties {
		serde_json::from_value(value).unwrap()
	}

	#[test]
	fn network_summary_fills_unknowns() {
		let summary = NetworkSummary::from_properties(&props(json!({
			"Network:Name": "OpenThread-1234",
			"Network:PANID": "0x1234",
			"RCP:Channel": 15,
			"RCP:State": "leader",
			"Network:XPANID": "dead00beef00cafe",
			"OpenThread:PSKc": "short",
			"IPv6:MeshLocalPrefix": ""
		})));
		assert_eq!(summary.network_name, "OpenThread-1234");
		assert_eq!(summary.channel, "15");
		assert_eq!(summary.ext_pan_id, "DE:AD:00:BE:EF:00:CA:FE");
		assert_eq!(summary.pskc, "Unknown");
		assert_eq!(summary.mesh_local_prefix, "Unknown");
		assert_eq!(summary.rcp_version, "Unknown");
		assert!(summary.is_online());
	}

	#[test]
	fn offline_roles() {
		for role in ["disabled", "detached"] {
			let summary = NetworkSummary::from_properties(&props(json!({ "RCP:State": role })));
			assert!(!summary.is_online());
		}
		let summary = NetworkSummary::from_properties(&NetworkProperties::new());
		assert_eq!(summary.role, "unknown");
		assert!(!summary.is_online());
	}

	#[test]
	fn node_summary() {
		let info = NodeInfo {
			rloc16: Some(Rloc16(0x0c00)),
			ext_address: Some("1122334455667788".into()),
			router_number: Some(3),
			network_name: Some("ot-test".into()),
			leader_data: Some(LeaderData {
				leader_router_id: Some(RouterId(0x1a)),
				..Default::default()
			}),
		};
		let summary = NodeSummary::from_node_info(&info);
		assert_eq!(summary.rloc16, "0x0c00");
		assert_eq!(summary.ext_address, "11:22:33:44:55:66:77:88");
		assert_eq!(summary.router_count, "3");
		assert_eq!(summary.leader.as_deref(), Some("0x1a"));

		let empty = NodeSummary::from_node_info(&NodeInfo::default());
		assert_eq!(empty.ext_address, "Unknown");
		assert_eq!(empty.router_count, "0");
		assert_eq!(empty.leader, None);
	}

	#[test]
	fn dataset_summary() {
		let dataset: ActiveDataset = serde_json::from_value(json!({
			"MasterKey": "00112233445566778899aabbccddeeff",
			"Channel": 11,
			"PanId": 0xface,
			"ExtendedPanId": "dead00beef00cafe",
			"NetworkName": "ot"
		}))
		.unwrap();
		let summary = DatasetSummary::from_dataset(&dataset);
		assert_eq!(summary.network_key.as_deref(), Some("00112233445566778899aabbccddeeff"));
		assert_eq!(summary.channel_mask.as_deref(), Some("0x800"));
		assert_eq!(summary.pan_id.as_deref(), Some("0xFACE"));
		assert_eq!(summary.ext_pan_id.as_deref(), Some("DE:AD:00:BE:EF:00:CA:FE"));
		assert_eq!(summary.pskc, None);
	}

	#[test]
	fn dataset_mask_prefers_explicit_value() {
		let dataset = ActiveDataset {
			network_key: Some("k".into()),
			master_key: Some("m".into()),
			channel_mask: Some(ChannelMask::Bits(0x07fff800)),
			channel: Some(11),
			..Default::default()
		};
		let summary = DatasetSummary::from_dataset(&dataset);
		assert_eq!(summary.network_key.as_deref(), Some("k"));
		assert_eq!(summary.channel_mask.as_deref(), Some("0x7FFF800"));
	}
}
