use gloo_net::http::{Request, Response};
use log::debug;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;

use super::envelope::ApiResponse;
use super::payloads::{
	ActiveDataset, CommissionRequest, DeletePrefixRequest, FormNetworkRequest, JoinRequest,
	NetworkProperties, NodeInfo, PrefixRequest, ScanResult,
};
use crate::config::DashboardConfig;
use crate::error::ApiError;

const NO_CONTENT: u16 = 204;

/// Thin wrapper over the border router agent's REST endpoints.
///
/// No retries or timeouts are applied here; a failed call is returned to the
/// caller, which logs it and keeps whatever it rendered last.
#[derive(Clone, Debug, Default)]
pub struct ApiClient {
	config: DashboardConfig,
}

impl ApiClient {
	/// Client addressing the agent at `config.api_base`.
	pub fn new(config: DashboardConfig) -> Self {
		Self { config }
	}

	/// `GET /get_properties`.
	pub async fn properties(&self) -> Result<ApiResponse<NetworkProperties>, ApiError> {
		self.get("/get_properties").await
	}

	/// `GET /node_information`.
	pub async fn node_information(&self) -> Result<ApiResponse<NodeInfo>, ApiError> {
		self.get("/node_information").await
	}

	/// Diagnostic records stay untyped until the topology builder validates them one by one.
	pub async fn topology(&self) -> Result<ApiResponse<JsonValue>, ApiError> {
		self.get("/topology").await
	}

	/// `Ok(None)` when the agent answers 204: no dataset has been committed yet.
	pub async fn active_dataset(&self) -> Result<Option<ActiveDataset>, ApiError> {
		let response = Request::get(&self.config.endpoint("/node/dataset/active"))
			.send()
			.await?;
		if response.status() == NO_CONTENT {
			debug!("no active dataset available");
			return Ok(None);
		}
		Ok(Some(Self::decode(response).await?))
	}

	/// `GET /available_network`: scan for joinable networks.
	pub async fn available_networks(&self) -> Result<ApiResponse<Vec<ScanResult>>, ApiError> {
		self.get("/available_network").await
	}

	/// `POST /join_network`.
	pub async fn join_network(&self, req: &JoinRequest) -> Result<ApiResponse<JsonValue>, ApiError> {
		self.post("/join_network", req).await
	}

	/// `POST /form_network`.
	pub async fn form_network(
		&self,
		req: &FormNetworkRequest,
	) -> Result<ApiResponse<JsonValue>, ApiError> {
		self.post("/form_network", req).await
	}

	/// `POST /add_prefix`.
	pub async fn add_prefix(&self, req: &PrefixRequest) -> Result<ApiResponse<JsonValue>, ApiError> {
		self.post("/add_prefix", req).await
	}

	/// `POST /delete_prefix`.
	pub async fn delete_prefix(
		&self,
		req: &DeletePrefixRequest,
	) -> Result<ApiResponse<JsonValue>, ApiError> {
		self.post("/delete_prefix", req).await
	}

	/// `POST /commission`: start the commissioner for a joiner.
	pub async fn commission(
		&self,
		req: &CommissionRequest,
	) -> Result<ApiResponse<JsonValue>, ApiError> {
		self.post("/commission", req).await
	}

	async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<ApiResponse<T>, ApiError> {
		let url = self.config.endpoint(path);
		debug!("GET {url}");
		let response = Request::get(&url).send().await?;
		Self::decode(response).await
	}

	async fn post<B: Serialize, T: DeserializeOwned>(
		&self,
		path: &str,
		body: &B,
	) -> Result<ApiResponse<T>, ApiError> {
		let url = self.config.endpoint(path);
		debug!("POST {url}");
		let response = Request::post(&url).json(body)?.send().await?;
		Self::decode(response).await
	}

	async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
		if !response.ok() {
			return Err(ApiError::Status(response.status()));
		}
		Ok(response.json::<T>().await?)
	}
}
