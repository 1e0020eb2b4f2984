//! Mesh topology: diagnostic records in, typed graph out.
//!
//! Nothing here touches the DOM; the canvas and panels consume the [`TopologyGraph`]
//! and [`NodeDetails`] values read-only.

mod builder;
mod details;
mod locator;
mod tables;
mod types;

pub use builder::{build_from_records, build_topology_graph, parse_records};
pub use details::{LeaderSummary, NodeDetails, format_mac};
pub use locator::{Rloc16, RouterId};
pub use tables::{ChildRow, DeviceCounts, RouterRow, format_mode};
pub use types::{
	ChildEntry, ChildMode, DiagnosticNode, EdgeKind, GraphEdge, GraphNode, LeaderData, LinkInfo,
	Role, Route, RouteEntry, TopologyGraph,
};
