use leptos::prelude::*;
use log::{error, info};
use serde_json::Value as JsonValue;

use crate::api::ApiResponse;
use crate::error::ApiError;

/// What the last user action produced, as shown in the log window.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionOutcome {
	pub title: String,
	pub ok: bool,
	pub message: String,
}

impl ActionOutcome {
	pub fn pending(title: &str) -> Self {
		Self {
			title: title.into(),
			ok: true,
			message: "Waiting...".into(),
		}
	}

	pub fn from_response<T>(title: &str, result: &Result<ApiResponse<T>, ApiError>) -> Self {
		match result {
			Ok(resp) => {
				info!("{title}: error={} message={:?}", resp.error, resp.message);
				Self {
					title: title.into(),
					ok: resp.is_ok(),
					message: resp.message_or_unknown(),
				}
			}
			Err(err) => {
				error!("{title} failed: {err}");
				Self {
					title: title.into(),
					ok: false,
					message: "Unknown".into(),
				}
			}
		}
	}
}

/// Convenience for action endpoints whose result carries nothing worth keeping.
pub fn record(
	log: RwSignal<Option<ActionOutcome>>,
	title: &str,
	result: &Result<ApiResponse<JsonValue>, ApiError>,
) {
	log.set(Some(ActionOutcome::from_response(title, result)));
}

#[component]
pub fn ActionLog(log: RwSignal<Option<ActionOutcome>>) -> impl IntoView {
	move || {
		log.get().map(|outcome| {
			let color = if outcome.ok { "green" } else { "red" };
			view! {
				<div class="log-window">
					<h3 class="log-title">{outcome.title}</h3>
					<p class="log-content" style=format!("color: {color}")>
						{outcome.message}
					</p>
					<button class="btn-close" on:click=move |_| log.set(None)>
						"Close"
					</button>
				</div>
			}
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn success_uses_agent_message() {
		let resp: Result<ApiResponse<JsonValue>, ApiError> = Ok(ApiResponse {
			message: Some("Join success".into()),
			..Default::default()
		});
		let outcome = ActionOutcome::from_response("Join", &resp);
		assert!(outcome.ok);
		assert_eq!(outcome.message, "Join success");
	}

	#[test]
	fn agent_error_is_red() {
		let resp: Result<ApiResponse<JsonValue>, ApiError> = Ok(ApiResponse {
			error: 1,
			message: Some("invalid prefix".into()),
			..Default::default()
		});
		let outcome = ActionOutcome::from_response("Add Prefix", &resp);
		assert!(!outcome.ok);
		assert_eq!(outcome.message, "invalid prefix");
	}

	#[test]
	fn transport_failure_is_unknown() {
		let resp: Result<ApiResponse<JsonValue>, ApiError> = Err(ApiError::Status(500));
		let outcome = ActionOutcome::from_response("Form", &resp);
		assert!(!outcome.ok);
		assert_eq!(outcome.message, "Unknown");
	}
}
