//! Runtime settings, read from `<meta>` tags of the hosting page.

use std::str::FromStr;

use log::Level;

const API_BASE_META: &str = "otbr-api-base";
const LOG_LEVEL_META: &str = "otbr-log-level";

/// Where the agent lives and how chatty the console should be.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardConfig {
	/// Prefix for every agent endpoint. Empty means same origin.
	pub api_base: String,
	/// Maximum level forwarded to the browser console.
	pub log_level: Level,
	/// A log level meta value that did not parse. Reported once logging is up.
	pub rejected_log_level: Option<String>,
}

impl Default for DashboardConfig {
	fn default() -> Self {
		Self {
			api_base: String::new(),
			log_level: Level::Debug,
			rejected_log_level: None,
		}
	}
}

impl DashboardConfig {
	/// Defaults overridden by `<meta name="otbr-api-base" content="...">` and
	/// `<meta name="otbr-log-level" content="info">` when present.
	pub fn from_document() -> Self {
		let lookup = |name: &str| {
			web_sys::window()
				.and_then(|w| w.document())
				.and_then(|d| d.query_selector(&format!("meta[name=\"{name}\"]")).ok().flatten())
				.and_then(|el| el.get_attribute("content"))
		};
		Self::from_lookup(lookup)
	}

	/// Like [`DashboardConfig::from_document`], with `lookup` mapping a meta name to its content.
	pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
		let mut config = Self::default();
		if let Some(base) = lookup(API_BASE_META) {
			config.api_base = base.trim().trim_end_matches('/').to_string();
		}
		if let Some(level) = lookup(LOG_LEVEL_META) {
			match Level::from_str(level.trim()) {
				Ok(level) => config.log_level = level,
				Err(_) => config.rejected_log_level = Some(level),
			}
		}
		config
	}

	/// Joins the base and `path` with exactly one slash.
	pub fn endpoint(&self, path: &str) -> String {
		format!("{}/{}", self.api_base, path.trim_start_matches('/'))
	}
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
	use wasm_bindgen_test::*;

	use super::*;

	wasm_bindgen_test_configure!(run_in_browser);

	#[wasm_bindgen_test]
	fn reads_meta_tags_from_document() {
		let document = web_sys::window().unwrap().document().unwrap();
		let meta = document.create_element("meta").unwrap();
		meta.set_attribute("name", API_BASE_META).unwrap();
		meta.set_attribute("content", "/agent").unwrap();
		document.head().unwrap().append_child(&meta).unwrap();

		let config = DashboardConfig::from_document();
		assert_eq!(config.endpoint("topology"), "/agent/topology");
		meta.remove();
	}
}
