//! Leptos components of the dashboard page.

pub mod action_log;
pub mod actions;
pub mod details_panel;
pub mod force_graph;
pub mod info_panels;
pub mod topology_tables;
