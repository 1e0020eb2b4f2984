use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::topology::{LeaderData, Rloc16};

/// `Network:Name`, `RCP:State`, `IPv6:*` and friends, in agent order.
pub type NetworkProperties = Map<String, Value>;

/// One row of `/available_network`, fields kept in agent order.
pub type ScanResult = Map<String, Value>;

/// `/node_information` result for the border router itself.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NodeInfo {
	/// Own routing locator.
	pub rloc16: Option<Rloc16>,
	/// Extended address.
	#[serde(rename = "ExtendedAddress", alias = "ExtAddress", alias = "extAddress")]
	pub ext_address: Option<String>,
	/// Routers known to the node.
	pub router_number: Option<u32>,
	/// Name of the joined network.
	pub network_name: Option<String>,
	/// Current leader data.
	pub leader_data: Option<LeaderData>,
}

/// Active operational dataset. Served bare, without the response envelope.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ActiveDataset {
	/// Network key, hex.
	pub network_key: Option<String>,
	/// Network key under its older name.
	pub master_key: Option<String>,
	/// Supported channels.
	pub channel_mask: Option<ChannelMask>,
	/// Operating channel.
	pub channel: Option<u16>,
	/// Network name.
	pub network_name: Option<String>,
	/// PAN identifier.
	pub pan_id: Option<u16>,
	/// Extended PAN identifier, hex.
	pub extended_pan_id: Option<String>,
	/// Pre-shared commissioner key, hex.
	#[serde(rename = "PSKc")]
	pub pskc: Option<String>,
}

/// Channel mask, reported either as a bit field or preformatted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChannelMask {
	/// Bit `n` set means channel `n` is allowed.
	Bits(u32),
	/// Already formatted by the agent.
	Text(String),
}

/// Credential offered when joining a scanned network.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CredentialType {
	/// Join with the network key.
	#[default]
	#[serde(rename = "network_key_type")]
	NetworkKey,
	/// Join through a commissioner with a joiner PSKd.
	#[serde(rename = "thread_pskd_type")]
	Pskd,
}

/// Body of `POST /join_network`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinRequest {
	/// Which credential is sent.
	pub credential_type: CredentialType,
	/// Set for [`CredentialType::NetworkKey`].
	#[serde(skip_serializing_if = "Option::is_none")]
	pub network_key: Option<String>,
	/// Set for [`CredentialType::Pskd`].
	#[serde(skip_serializing_if = "Option::is_none")]
	pub pskd: Option<String>,
	/// On-mesh prefix to add after joining.
	pub prefix: String,
	/// Whether the prefix is a default route.
	#[serde(serialize_with = "as_flag")]
	pub default_route: bool,
	/// Index of the network in the scan result.
	pub index: u32,
}

/// Body of `POST /form_network`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormNetworkRequest {
	/// Network name.
	pub network_name: String,
	/// Extended PAN id, hex.
	pub ext_pan_id: String,
	/// PAN id, hex.
	pub pan_id: String,
	/// Commissioner passphrase.
	pub passphrase: String,
	/// Network key, hex.
	pub network_key: String,
	/// Operating channel.
	pub channel: u16,
	/// On-mesh prefix.
	pub prefix: String,
	/// Whether the prefix is a default route.
	#[serde(serialize_with = "as_flag")]
	pub default_route: bool,
}

/// Body of `POST /add_prefix`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrefixRequest {
	/// On-mesh prefix.
	pub prefix: String,
	/// Whether the prefix is a default route.
	#[serde(serialize_with = "as_flag")]
	pub default_route: bool,
}

/// Body of `POST /delete_prefix`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct DeletePrefixRequest {
	/// Prefix to remove.
	pub prefix: String,
}

/// Body of `POST /commission`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CommissionRequest {
	/// Joiner PSKd to accept.
	pub pskd: String,
}

// The agent expects checkbox state as 0/1.
fn as_flag<S: serde::Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
	serializer.serialize_u8(u8::from(*value))
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	#[test]
	fn node_info_accepts_any_ext_address_spelling() {
		for key in ["ExtendedAddress", "ExtAddress", "extAddress"] {
			let mut raw = Map::new();
			raw.insert("Rloc16".into(), json!(1024));
			raw.insert(key.into(), json!("00112233445566aa"));
			let info: NodeInfo = serde_json::from_value(Value::Object(raw)).unwrap();
			assert_eq!(info.ext_address.as_deref(), Some("00112233445566aa"));
			assert_eq!(info.rloc16, Some(Rloc16(0x0400)));
		}
	}

	#[test]
	fn dataset_channel_mask_is_number_or_text() {
		let a: ActiveDataset = serde_json::from_value(json!({ "ChannelMask": 134215680 })).unwrap();
		let b: ActiveDataset = serde_json::from_value(json!({ "ChannelMask": "07fff800" })).unwrap();
		assert_eq!(a.channel_mask, Some(ChannelMask::Bits(134215680)));
		assert_eq!(b.channel_mask, Some(ChannelMask::Text("07fff800".into())));
	}

	#[test]
	fn join_request_wire_shape() {
		let req = JoinRequest {
			credential_type: CredentialType::Pskd,
			pskd: Some("J01NME".into()),
			prefix: "fd11:22::".into(),
			default_route: true,
			index: 2,
			..Default::default()
		};
		assert_eq!(
			serde_json::to_value(&req).unwrap(),
			json!({
				"credentialType": "thread_pskd_type",
				"pskd": "J01NME",
				"prefix": "fd11:22::",
				"defaultRoute": 1,
				"index": 2
			})
		);
	}
}
