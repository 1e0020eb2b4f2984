//! Browser entry point: reads the page settings, starts logging, mounts the dashboard.

use leptos::prelude::*;
use otbr_dashboard::config::DashboardConfig;
use otbr_dashboard::{App, init_logging};

fn main() {
	let config = DashboardConfig::from_document();
	init_logging(&config);

	leptos::mount::mount_to_body(move || {
		view! { <App config=config.clone() /> }
	})
}
