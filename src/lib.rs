//! Leptos client-side dashboard for a Thread border router: network panels,
//! mesh topology graph and the agent's actions.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{info, warn};

// Modules
pub mod api;
mod components;
pub mod config;
mod dashboard;
pub mod error;
mod pages;
pub mod topology;

use crate::api::ApiClient;
use crate::config::DashboardConfig;

// Top-Level pages
use crate::pages::dashboard::Dashboard;
use crate::pages::not_found::NotFound;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging(config: &DashboardConfig) {
	let _ = console_log::init_with_level(config.log_level);
	console_error_panic_hook::set_once();
	info!("Logging initialized at {}", config.log_level);
	if let Some(raw) = &config.rejected_log_level {
		warn!("ignoring unknown log level {raw:?}");
	}
}

/// An app router which renders the dashboard and handles 404's
#[component]
pub fn App(
	/// Settings read from the hosting page.
	config: DashboardConfig,
) -> impl IntoView {
	// Provides context that manages stylesheets, titles, meta tags, etc.
	provide_meta_context();
	provide_context(ApiClient::new(config));

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="light" />

		// sets the document title
		<Title text="OpenThread Border Router" />

		// injects metadata in the <head> of the page
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router>
			<Routes fallback=|| view! { <NotFound /> }>
				<Route path=path!("/") view=Dashboard />
			</Routes>
		</Router>
	}
}
