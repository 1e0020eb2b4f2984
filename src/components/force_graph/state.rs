use std::collections::{HashMap, HashSet};
use std::f64::consts::PI;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};

use super::types::node_label;
use crate::topology::{EdgeKind, Role, TopologyGraph};

pub const HIT_RADIUS: f64 = 12.0;

#[derive(Clone, Debug)]
pub struct NodeView {
	pub label: String,
	pub mac_tail: Option<String>,
	pub role: Role,
	/// Position of the node in the [`TopologyGraph`] it was built from.
	pub graph_index: usize,
}

#[derive(Clone, Debug, Default)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub moved: bool,
	pub node_idx: Option<DefaultNodeIdx>,
	pub start_x: f64,
	pub start_y: f64,
	pub node_start_x: f32,
	pub node_start_y: f32,
}

#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

#[derive(Clone, Debug, Default)]
pub struct HoverState {
	pub node: Option<DefaultNodeIdx>,
	pub neighbors: HashSet<DefaultNodeIdx>,
	pub highlight_t: f64,
	pub prev_node: Option<DefaultNodeIdx>,
	pub prev_neighbors: HashSet<DefaultNodeIdx>,
	delay_t: f64,
}

pub struct ForceGraphState {
	pub graph: ForceGraph<NodeView, ()>,
	pub transform: ViewTransform,
	pub drag: DragState,
	pub pan: PanState,
	pub hover: HoverState,
	pub selected: Option<DefaultNodeIdx>,
	pub width: f64,
	pub height: f64,
	pub flow_time: f64,
	edges: HashMap<(DefaultNodeIdx, DefaultNodeIdx), EdgeKind>,
}

impl ForceGraphState {
	pub fn new(topology: &TopologyGraph, width: f64, height: f64) -> Self {
		let mut graph = ForceGraph::new(SimulationParameters {
			force_charge: 300.0,
			force_spring: 0.08,
			force_max: 100.0,
			node_speed: 3000.0,
			damping_factor: 0.9,
		});
		let mut by_graph_index = Vec::with_capacity(topology.nodes.len());
		let mut edges = HashMap::new();

		for (i, node) in topology.nodes.iter().enumerate() {
			let angle = (i as f64) * 2.0 * PI / topology.nodes.len() as f64;
			// Children start further out than the routers they hang off.
			let ring = if node.role.is_router() { 80.0 } else { 160.0 };
			let (x, y) = (
				(width / 2.0 + ring * angle.cos()) as f32,
				(height / 2.0 + ring * angle.sin()) as f32,
			);
			let (label, mac_tail) = node_label(node);

			let idx = graph.add_node(NodeData {
				x,
				y,
				mass: if node.role.is_router() { 20.0 } else { 8.0 },
				is_anchor: false,
				user_data: NodeView {
					label,
					mac_tail,
					role: node.role,
					graph_index: i,
				},
			});
			by_graph_index.push(idx);
		}

		for edge in &topology.edges {
			if let (Some(&src), Some(&tgt)) = (
				by_graph_index.get(edge.source),
				by_graph_index.get(edge.target),
			) {
				graph.add_edge(src, tgt, EdgeData::default());
				edges.insert((src, tgt), edge.kind);
				edges.insert((tgt, src), edge.kind);
			}
		}

		let selected = topology
			.self_node
			.and_then(|i| by_graph_index.get(i).copied());

		Self {
			graph,
			edges,
			transform: ViewTransform {
				x: 0.0,
				y: 0.0,
				k: 1.0,
			},
			drag: DragState::default(),
			pan: PanState::default(),
			hover: HoverState::default(),
			selected,
			width,
			height,
			flow_time: 0.0,
		}
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<DefaultNodeIdx> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		let mut found = None;
		self.graph.visit_nodes(|node| {
			let (dx, dy) = (node.x() as f64 - gx, node.y() as f64 - gy);
			// HIT_RADIUS is in world-space, scales with zoom like nodes
			if (dx * dx + dy * dy).sqrt() < HIT_RADIUS {
				found = Some(node.index());
			}
		});
		found
	}

	pub fn edge_kind(&self, a: DefaultNodeIdx, b: DefaultNodeIdx) -> Option<EdgeKind> {
		self.edges.get(&(a, b)).copied()
	}

	/// Marks `idx` as selected and returns its position in the source topology.
	pub fn select(&mut self, idx: DefaultNodeIdx) -> Option<usize> {
		self.selected = Some(idx);
		self.graph_index_of(idx)
	}

	pub fn graph_index_of(&self, idx: DefaultNodeIdx) -> Option<usize> {
		let mut found = None;
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				found = Some(node.data.user_data.graph_index);
			}
		});
		found
	}

	pub fn is_selected(&self, idx: DefaultNodeIdx) -> bool {
		self.selected == Some(idx)
	}

	pub fn set_hover(&mut self, node: Option<DefaultNodeIdx>) {
		if self.hover.node == node {
			return;
		}
		let was_hovering = self.hover.node.is_some();

		// Save previous state for fade-out
		if was_hovering && node.is_none() {
			self.hover.prev_node = self.hover.node.take();
			self.hover.prev_neighbors = std::mem::take(&mut self.hover.neighbors);
		} else {
			self.hover.prev_node = None;
			self.hover.prev_neighbors.clear();
		}

		self.hover.node = node;
		self.hover.neighbors.clear();

		if let Some(idx) = node {
			if !was_hovering {
				self.hover.delay_t = 0.0;
			}
			for &(src, tgt) in self.edges.keys() {
				if src == idx {
					self.hover.neighbors.insert(tgt);
				}
			}
		}
	}

	pub fn is_highlighted(&self, idx: DefaultNodeIdx) -> bool {
		self.hover.node == Some(idx)
			|| self.hover.neighbors.contains(&idx)
			|| self.hover.prev_node == Some(idx)
			|| self.hover.prev_neighbors.contains(&idx)
	}

	pub fn is_hovered(&self, idx: DefaultNodeIdx) -> bool {
		self.hover.node == Some(idx) || self.hover.prev_node == Some(idx)
	}

	pub fn has_active_highlight(&self) -> bool {
		self.hover.node.is_some() || self.hover.prev_node.is_some()
	}

	pub fn tick(&mut self, dt: f32) {
		self.graph.update(dt);
		self.flow_time += dt as f64;

		let (target, delay, speed) = if self.hover.node.is_some() {
			(1.0, 0.08, 1.8)
		} else {
			(0.0, 0.0, 1.26)
		};

		if self.hover.node.is_some() {
			self.hover.delay_t = (self.hover.delay_t + dt as f64).min(delay);
			if self.hover.delay_t >= delay {
				self.hover.highlight_t += (target - self.hover.highlight_t) * speed * dt as f64;
			}
		} else {
			self.hover.highlight_t += (target - self.hover.highlight_t) * speed * dt as f64;
			if self.hover.highlight_t < 0.01 {
				self.hover.highlight_t = 0.0;
				self.hover.prev_node = None;
				self.hover.prev_neighbors.clear();
			}
		}
	}
}
