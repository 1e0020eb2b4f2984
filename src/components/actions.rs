//! Forms that drive the agent: scan and join, form a network, prefixes and commissioning.

use leptos::prelude::*;
use log::warn;
use serde_json::Value as JsonValue;
use wasm_bindgen_futures::spawn_local;

use super::action_log::{ActionOutcome, record};
use crate::api::{
	ApiClient, CommissionRequest, CredentialType, DeletePrefixRequest, FormNetworkRequest,
	JoinRequest, PrefixRequest, ScanResult,
};

fn client() -> ApiClient {
	use_context::<ApiClient>().unwrap_or_default()
}

fn cell_text(value: &JsonValue) -> String {
	match value {
		JsonValue::String(s) => s.clone(),
		other => other.to_string(),
	}
}

/// Join index of a scan row: the first column when it is numeric, else the row position.
pub fn join_index(row: &ScanResult, position: usize) -> u32 {
	row.values()
		.next()
		.and_then(|first| match first {
			JsonValue::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
			JsonValue::String(s) => s.trim().parse().ok(),
			_ => None,
		})
		.unwrap_or_else(|| u32::try_from(position).unwrap_or(u32::MAX))
}

#[component]
pub fn ScanPanel(log: RwSignal<Option<ActionOutcome>>) -> impl IntoView {
	let client = client();
	let networks = RwSignal::new(Vec::<ScanResult>::new());
	let caption = RwSignal::new("Available Thread Networks");
	let join_target = RwSignal::new(None::<u32>);

	let scan = {
		let client = client.clone();
		move |_| {
			let client = client.clone();
			caption.set("Available Thread Networks: Waiting ...");
			log.set(Some(ActionOutcome::pending("Available Network")));
			spawn_local(async move {
				let result = client.available_networks().await;
				log.set(Some(ActionOutcome::from_response("Available Network", &result)));
				match result {
					Ok(resp) if resp.is_ok() => {
						networks.set(resp.result.unwrap_or_default());
						caption.set("Available Thread Networks: Scan Completed");
					}
					_ => caption.set("Available Thread Networks"),
				}
			});
		}
	};

	let headers = move || {
		networks.with(|rows| {
			rows.first()
				.map(|row| row.keys().cloned().collect::<Vec<_>>())
				.unwrap_or_default()
		})
	};

	view! {
		<div class="card">
			<button class="btn-submit" on:click=scan>"Scan"</button>
			<table id="available_networks_table" class="table">
				<caption>{move || caption.get()}</caption>
				<thead>
					<tr>
						{move || headers().into_iter().map(|h| view! { <th>{h}</th> }).collect_view()}
						<th></th>
					</tr>
				</thead>
				<tbody>
					{move || {
						networks
							.get()
							.into_iter()
							.enumerate()
							.map(|(position, row)| {
								let index = join_index(&row, position);
								view! {
									<tr>
										{row.values().map(|v| view! { <td>{cell_text(v)}</td> }).collect_view()}
										<td>
											<button
												class="btn-submit"
												on:click=move |_| join_target.set(Some(index))
											>
												"Join"
											</button>
										</td>
									</tr>
								}
							})
							.collect_view()
					}}
				</tbody>
			</table>
			<Show when=move || join_target.with(Option::is_some)>
				<JoinForm client=client.clone() log=log target=join_target />
			</Show>
		</div>
	}
}

#[component]
fn JoinForm(
	client: ApiClient,
	log: RwSignal<Option<ActionOutcome>>,
	target: RwSignal<Option<u32>>,
) -> impl IntoView {
	let credential = RwSignal::new(CredentialType::NetworkKey);
	let network_key = RwSignal::new(String::from("00112233445566778899aabbccddeeff"));
	let pskd = RwSignal::new(String::new());
	let prefix = RwSignal::new(String::from("fd11:22::"));
	let default_route = RwSignal::new(true);

	let submit = move |_| {
		let Some(index) = target.get_untracked() else {
			warn!("join submitted without a selected network");
			return;
		};
		let credential_type = credential.get_untracked();
		let req = JoinRequest {
			credential_type,
			network_key: (credential_type == CredentialType::NetworkKey)
				.then(|| network_key.get_untracked()),
			pskd: (credential_type == CredentialType::Pskd).then(|| pskd.get_untracked()),
			prefix: prefix.get_untracked(),
			default_route: default_route.get_untracked(),
			index,
		};
		target.set(None);
		log.set(Some(ActionOutcome::pending("Join")));
		let client = client.clone();
		spawn_local(async move {
			record(log, "Join", &client.join_network(&req).await);
		});
	};

	view! {
		<div id="join_window" class="modal">
			<h3>{move || format!("Join network {}", target.get().unwrap_or_default())}</h3>
			<label>
				"Credential"
				<select on:change=move |ev| {
					let kind = match event_target_value(&ev).as_str() {
						"thread_pskd_type" => CredentialType::Pskd,
						_ => CredentialType::NetworkKey,
					};
					credential.set(kind);
				}>
					<option value="network_key_type">"Network key"</option>
					<option value="thread_pskd_type">"PSKd"</option>
				</select>
			</label>
			<Show
				when=move || credential.get() == CredentialType::NetworkKey
				fallback=move || view! {
					<label>
						"PSKd"
						<input
							type="text"
							prop:value=move || pskd.get()
							on:input=move |ev| pskd.set(event_target_value(&ev))
						/>
					</label>
				}
			>
				<label>
					"Network key"
					<input
						type="text"
						prop:value=move || network_key.get()
						on:input=move |ev| network_key.set(event_target_value(&ev))
					/>
				</label>
			</Show>
			<TextField label="On-mesh prefix" value=prefix />
			<label>
				<input
					type="checkbox"
					prop:checked=move || default_route.get()
					on:change=move |ev| default_route.set(event_target_checked(&ev))
				/>
				"Default route"
			</label>
			<button class="btn-submit" on:click=submit>"Join"</button>
			<button class="btn-cancel" on:click=move |_| target.set(None)>"Cancel"</button>
		</div>
	}
}

#[component]
fn TextField(label: &'static str, value: RwSignal<String>) -> impl IntoView {
	view! {
		<label class="form-field">
			<span>{label}</span>
			<input
				type="text"
				prop:value=move || value.get()
				on:input=move |ev| value.set(event_target_value(&ev))
			/>
		</label>
	}
}

#[component]
pub fn FormNetworkPanel(log: RwSignal<Option<ActionOutcome>>) -> impl IntoView {
	let client = client();
	let network_name = RwSignal::new(String::from("OpenThread"));
	let ext_pan_id = RwSignal::new(String::from("1111111122222222"));
	let pan_id = RwSignal::new(String::from("0x1234"));
	let passphrase = RwSignal::new(String::from("j01Nme"));
	let network_key = RwSignal::new(String::from("00112233445566778899aabbccddeeff"));
	let channel = RwSignal::new(String::from("15"));
	let prefix = RwSignal::new(String::from("fd11:22::"));
	let default_route = RwSignal::new(true);

	let submit = move |_| {
		let Ok(channel) = channel.get_untracked().trim().parse::<u16>() else {
			log.set(Some(ActionOutcome {
				title: "Form".into(),
				ok: false,
				message: "Channel must be a number".into(),
			}));
			return;
		};
		let req = FormNetworkRequest {
			network_name: network_name.get_untracked(),
			ext_pan_id: ext_pan_id.get_untracked(),
			pan_id: pan_id.get_untracked(),
			passphrase: passphrase.get_untracked(),
			network_key: network_key.get_untracked(),
			channel,
			prefix: prefix.get_untracked(),
			default_route: default_route.get_untracked(),
		};
		log.set(Some(ActionOutcome::pending("Form")));
		let client = client.clone();
		spawn_local(async move {
			record(log, "Form", &client.form_network(&req).await);
		});
	};

	view! {
		<div class="card">
			<h3>"Form network"</h3>
			<TextField label="Network name" value=network_name />
			<TextField label="Extended PAN ID" value=ext_pan_id />
			<TextField label="PAN ID" value=pan_id />
			<TextField label="Passphrase" value=passphrase />
			<TextField label="Network key" value=network_key />
			<TextField label="Channel" value=channel />
			<TextField label="On-mesh prefix" value=prefix />
			<label>
				<input
					type="checkbox"
					prop:checked=move || default_route.get()
					on:change=move |ev| default_route.set(event_target_checked(&ev))
				/>
				"Default route"
			</label>
			<button class="btn-submit" on:click=submit>"Form"</button>
		</div>
	}
}

#[component]
pub fn SettingsPanel(log: RwSignal<Option<ActionOutcome>>) -> impl IntoView {
	let client = client();
	let prefix = RwSignal::new(String::from("fd11:22::"));
	let default_route = RwSignal::new(true);
	let pskd = RwSignal::new(String::new());

	let add = {
		let client = client.clone();
		move |_| {
			let req = PrefixRequest {
				prefix: prefix.get_untracked(),
				default_route: default_route.get_untracked(),
			};
			log.set(Some(ActionOutcome::pending("Add Prefix")));
			let client = client.clone();
			spawn_local(async move {
				record(log, "Add Prefix", &client.add_prefix(&req).await);
			});
		}
	};
	let delete = {
		let client = client.clone();
		move |_| {
			let req = DeletePrefixRequest {
				prefix: prefix.get_untracked(),
			};
			log.set(Some(ActionOutcome::pending("Delete Prefix")));
			let client = client.clone();
			spawn_local(async move {
				record(log, "Delete Prefix", &client.delete_prefix(&req).await);
			});
		}
	};
	let commission = move |_| {
		let req = CommissionRequest {
			pskd: pskd.get_untracked(),
		};
		log.set(Some(ActionOutcome::pending("Commission")));
		let client = client.clone();
		spawn_local(async move {
			record(log, "Commission", &client.commission(&req).await);
		});
	};

	view! {
		<div class="card">
			<h3>"Settings"</h3>
			<TextField label="On-mesh prefix" value=prefix />
			<label>
				<input
					type="checkbox"
					prop:checked=move || default_route.get()
					on:change=move |ev| default_route.set(event_target_checked(&ev))
				/>
				"Default route"
			</label>
			<button class="btn-submit" on:click=add>"Add prefix"</button>
			<button class="btn-submit" on:click=delete>"Delete prefix"</button>
		</div>
		<div class="card">
			<h3>"Commission"</h3>
			<TextField label="Joiner PSKd" value=pskd />
			<button class="btn-submit" on:click=commission>"Start commissioner"</button>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	fn row(value: JsonValue) -> ScanResult {
		serde_json::from_value(value).unwrap()
	}

	#[test]
	fn join_index_reads_first_column() {
		let numeric = row(json!({ "id": 3, "NetworkName": "ot" }));
		assert_eq!(join_index(&numeric, 0), 3);
		let text = row(json!({ "id": " 7 ", "NetworkName": "ot" }));
		assert_eq!(join_index(&text, 0), 7);
	}

	#[test]
	fn join_index_falls_back_to_position() {
		let named = row(json!({ "NetworkName": "ot", "Channel": 15 }));
		assert_eq!(join_index(&named, 4), 4);
		assert_eq!(join_index(&ScanResult::new(), 2), 2);
	}

	#[test]
	fn cells_render_strings_bare() {
		assert_eq!(cell_text(&json!("ot")), "ot");
		assert_eq!(cell_text(&json!(15)), "15");
		assert_eq!(cell_text(&json!(null)), "null");
	}
}
