use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// `{error, result?, message?}` wrapper returned by every agent endpoint except the dataset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
	/// Zero on success; absent reads as zero.
	#[serde(default)]
	pub error: i64,
	/// Endpoint payload.
	pub result: Option<T>,
	/// Human-readable status from the agent.
	#[serde(default)]
	pub message: Option<String>,
}

impl<T> ApiResponse<T> {
	/// True when the agent reported no error.
	pub fn is_ok(&self) -> bool {
		self.error == 0
	}

	/// The payload, if the agent reported success and sent one.
	pub fn data(&self) -> Option<&T> {
		self.result.as_ref().filter(|_| self.is_ok())
	}

	/// The agent's message, or `Unknown`.
	pub fn message_or_unknown(&self) -> String {
		self.message.clone().unwrap_or_else(|| "Unknown".into())
	}

	/// Payload of a successful response.
	///
	/// Fails with [`ApiError::Rejected`] on an agent error and [`ApiError::Empty`] when
	/// the result is missing.
	pub fn into_result(self) -> Result<T, ApiError> {
		if !self.is_ok() {
			return Err(ApiError::Rejected {
				code: self.error,
				message: self.message.unwrap_or_default(),
			});
		}
		self.result.ok_or(ApiError::Empty)
	}
}

impl<T> Default for ApiResponse<T> {
	fn default() -> Self {
		Self {
			error: 0,
			result: None,
			message: None,
		}
	}
}

#[cfg(test)]
mod tests {
	use serde_json::{Value, json};

	use super::*;

	#[test]
	fn missing_error_means_success() {
		let resp: ApiResponse<Value> = serde_json::from_value(json!({ "result": [1, 2] })).unwrap();
		assert!(resp.is_ok());
		assert_eq!(resp.data(), Some(&json!([1, 2])));
	}

	#[test]
	fn error_hides_result() {
		let resp: ApiResponse<Value> =
			serde_json::from_value(json!({ "error": 3, "result": "x", "message": "busy" })).unwrap();
		assert_eq!(resp.data(), None);
		match resp.into_result() {
			Err(ApiError::Rejected { code, message }) => {
				assert_eq!(code, 3);
				assert_eq!(message, "busy");
			}
			other => panic!("unexpected {other:?}"),
		}
	}

	#[test]
	fn absent_result_is_empty() {
		let resp: ApiResponse<Value> = serde_json::from_value(json!({ "error": 0 })).unwrap();
		assert!(matches!(resp.into_result(), Err(ApiError::Empty)));
	}

	#[test]
	fn message_defaults_to_unknown() {
		let resp = ApiResponse::<Value>::default();
		assert_eq!(resp.message_or_unknown(), "Unknown");
	}
}
