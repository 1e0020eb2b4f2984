//! Drives the public topology API with the responses a three-router mesh returns.

use otbr_dashboard::api::{ApiResponse, NodeInfo};
use otbr_dashboard::topology::{
	EdgeKind, LinkInfo, NodeDetails, Rloc16, Role, RouterId, TopologyGraph, build_topology_graph,
};
use serde_json::Value as JsonValue;

const NODE_INFORMATION: &str = r#"{
	"error": 0,
	"result": {
		"Rloc16": "0x0800",
		"ExtAddress": "a2b4c6d8e0f21304",
		"RouterNumber": 3,
		"NetworkName": "OpenThread-mesh",
		"LeaderData": { "LeaderRouterId": 1 }
	},
	"message": "Get node information success"
}"#;

const TOPOLOGY: &str = r#"{
	"error": 0,
	"result": [
		{
			"Rloc16": 1024,
			"ExtAddress": "1a2b3c4d5e6f7081",
			"LeaderData": {
				"PartitionId": 1938462734,
				"Weighting": 64,
				"DataVersion": 7,
				"StableDataVersion": 3,
				"LeaderRouterId": 1
			},
			"Route": {
				"IdSequence": 112,
				"RouteData": [
					{ "RouteId": 2, "LinkQualityOut": 3, "LinkQualityIn": 3, "RouteCost": 1 },
					{ "RouteId": 3, "LinkQualityOut": 2, "LinkQualityIn": 1, "RouteCost": 2 }
				]
			},
			"ChildTable": [
				{ "ChildId": 1, "Timeout": 240, "Mode": { "RxOnWhenIdle": true, "DeviceType": true, "NetworkData": true } }
			],
			"IP6AddressList": ["fdde:ad00:beef:0:0:ff:fe00:400", "fe80:0:0:0:182b:3c4d:5e6f:7081"]
		},
		{
			"Rloc16": "0x0800",
			"ExtAddress": "a2b4c6d8e0f21304",
			"LeaderData": { "PartitionId": 1938462734, "DataVersion": 7, "LeaderRouterId": 1 },
			"Route": {
				"RouteData": [
					{ "RouteId": 1, "LinkQualityOut": 3, "LinkQualityIn": 3, "RouteCost": 1 },
					{ "RouteId": 3, "LinkQualityOut": 3, "LinkQualityIn": 2, "RouteCost": 1 }
				]
			},
			"ChildTable": [
				{ "ChildId": 2, "Timeout": 100, "Mode": { "RxOnWhenIdle": false, "DeviceType": false, "NetworkData": false } },
				{ "ChildId": 5, "Timeout": 240 }
			]
		},
		{
			"Rloc16": "0x0c00",
			"LeaderData": { "LeaderRouterId": 1 },
			"Route": {
				"RouteData": [
					{ "RouteId": 1, "LinkQualityOut": 1, "LinkQualityIn": 2, "RouteCost": 2 },
					{ "RouteId": 2, "LinkQualityOut": 2, "LinkQualityIn": 3, "RouteCost": 1 }
				]
			},
			"ChildTable": null
		},
		{
			"Rloc16": "not-a-locator",
			"ChildTable": []
		}
	],
	"message": "Get topology success"
}"#;

fn build() -> TopologyGraph {
	let info: ApiResponse<NodeInfo> = serde_json::from_str(NODE_INFORMATION).unwrap();
	let diagnostics: ApiResponse<JsonValue> = serde_json::from_str(TOPOLOGY).unwrap();
	build_topology_graph(&info, &diagnostics)
}

#[test]
fn mesh_nodes_and_roles() {
	let graph = build();

	assert_eq!(graph.router_count, 3);
	assert_eq!(graph.nodes.len(), 6);
	assert_eq!(graph.child_count(), 3);

	let roles: Vec<Role> = graph.nodes.iter().map(|n| n.role).collect();
	assert_eq!(
		roles,
		[Role::Leader, Role::Router, Role::Router, Role::Child, Role::Child, Role::Child]
	);
	let locators: Vec<u16> = graph.nodes.iter().map(|n| n.rloc16.0).collect();
	assert_eq!(locators, [0x0400, 0x0800, 0x0c00, 0x0401, 0x0802, 0x0805]);

	assert_eq!(graph.self_node, graph.index_of(Rloc16(0x0800)));
	assert_eq!(graph.leader().map(|n| n.rloc16), Some(Rloc16(0x0400)));
	assert_eq!(graph.node(Rloc16(0x0805)).map(|n| n.route_id), Some(RouterId(2)));
}

#[test]
fn mesh_edges_follow_index_order() {
	let graph = build();

	let router_links: Vec<(usize, usize)> = graph
		.edges
		.iter()
		.filter(|e| e.kind == EdgeKind::RouterToRouter)
		.map(|e| (e.source, e.target))
		.collect();
	assert_eq!(router_links, [(0, 1), (0, 2), (1, 2)]);

	let child_links: Vec<(usize, usize)> = graph
		.edges
		.iter()
		.filter(|e| e.kind == EdgeKind::RouterToChild)
		.map(|e| (e.source, e.target))
		.collect();
	assert_eq!(child_links, [(0, 3), (1, 4), (1, 5)]);

	assert!(graph.edges.iter().all(|e| e.weight == 1));
	assert_eq!(
		graph.edges[1].link_info,
		LinkInfo::Router { in_quality: 1, out_quality: 2 }
	);
}

#[test]
fn mesh_tables_and_details() {
	let graph = build();

	let routers = graph.router_rows();
	let ids: Vec<&str> = routers.iter().map(|r| r.router_id.as_str()).collect();
	assert_eq!(ids, ["0x1", "0x2", "0x3"]);
	assert_eq!(routers[0].ext_address, "1A:2B:3C:4D:5E:6F:70:81");
	assert_eq!(routers[2].ext_address, "Unknown");
	assert_eq!(routers[2].route_cost, "2");

	let children = graph.child_rows();
	let modes: Vec<&str> = children.iter().map(|c| c.mode.as_str()).collect();
	assert_eq!(modes, ["RxOnIdle, FFD, FullNetData", "Unknown", "Unknown"]);
	assert_eq!(children[2].parent_rloc16, "0x0800");
	assert_eq!(children[2].rloc16, "0x0805");

	let counts = graph.counts();
	assert_eq!((counts.routers, counts.children, counts.total()), (3, 3, 6));

	let leader = NodeDetails::from_node(&graph.nodes[0]);
	assert_eq!(leader.role, Role::Leader);
	assert_eq!(leader.routes[0], "Router ID: 0x02 | LQ In: 3 | LQ Out: 3 | Cost: 1");
	assert_eq!(leader.children, ["Child 1 (0x0401) - Timeout: 240s"]);
	assert_eq!(leader.ip6_addresses.len(), 2);
	let summary = leader.leader.unwrap();
	assert_eq!(summary.partition_id, "1938462734");
	assert_eq!(summary.data_version, "7");

	let child = NodeDetails::from_node(&graph.nodes[5]);
	assert_eq!(child.mac, "Unknown");
	assert!(child.routes.is_empty());
}

#[test]
fn mesh_serializes_for_the_canvas() {
	let value = serde_json::to_value(build()).unwrap();
	assert_eq!(value["routerCount"], 3);
	assert_eq!(value["selfNode"], 1);
	assert_eq!(value["nodes"][3]["rloc16"], "0x0401");
	assert!(value.get("index").is_none());
}
