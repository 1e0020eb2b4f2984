//! REST client for the border router agent.

mod client;
mod envelope;
mod payloads;

pub use client::ApiClient;
pub use envelope::ApiResponse;
pub use payloads::{
	ActiveDataset, ChannelMask, CommissionRequest, CredentialType, DeletePrefixRequest,
	FormNetworkRequest, JoinRequest, NetworkProperties, NodeInfo, PrefixRequest, ScanResult,
};
