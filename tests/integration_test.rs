//! Integration tests for network-topology
//!
//! These tests drive the whole path from an inventory file to rendered output.

use network_topology::inventory::load_inventory;
use network_topology::models::{Inventory, UNSET_IP};
use network_topology::{
    build_network, render_graph, render_mermaid, InventoryError, OutputFormat, TopologyError,
    TopologyService,
};
use std::collections::HashSet;
use std::path::Path;
use std::rc::Rc;

fn load(name: &str) -> Inventory {
    load_inventory(Path::new(&format!("src/tests/test_data/{name}")))
        .expect("Failed to read inventory")
}

#[test]
fn test_single_host_scenario() {
    let inventory: Inventory = serde_json::from_str(
        r#"{"h1": {"hostname":"Node1","ips":["10.0.0.5","None"],"subnets":["10.0.0.0/24","10.0.0.0/24"]}}"#,
    )
    .unwrap();
    let network = build_network(&inventory).expect("Failed to build network");

    assert_eq!(network.nodes.len(), 1);
    assert_eq!(network.subnets.len(), 1);
    assert_eq!(network.interface_count(), 2);

    let graph = render_graph(&network).unwrap();
    assert_eq!(graph.nodes.len(), 2);
    assert_eq!(graph.links.len(), 2);

    let diagram = render_mermaid(&network).unwrap();
    let edges: Vec<&str> = diagram.lines().filter(|l| l.contains("-->")).collect();
    assert_eq!(
        edges,
        vec![
            "  Node1 -->|: 10.0.0.5| Subnet_1",
            "  Node1 -->|DHCP lease expired| Subnet_1",
        ]
    );
    assert_eq!(diagram.matches("Subnet_1[").count(), 1);
}

#[test]
fn test_cardinality_mismatch_returns_no_network() {
    let err = build_network(&load("inventory_mismatch.yaml")).unwrap_err();
    assert_eq!(
        err,
        TopologyError::CardinalityMismatch {
            host: "h1".to_string(),
            ips: 2,
            subnets: 1,
        }
    );
}

#[test]
fn test_inventory_file_properties() {
    let inventory = load("inventory_01.yaml");
    let network = build_network(&inventory).expect("Failed to build network");

    // one node per record, one interface per ip, canonical CIDRs
    assert_eq!(network.nodes.len(), inventory.len());
    for ((_, record), node) in inventory.iter().zip(&network.nodes) {
        assert_eq!(node.interfaces.len(), record.ips.len());
        for (iface, raw) in node.interfaces.iter().zip(&record.subnets) {
            let canonical = raw.parse::<network_topology::models::Ipv4>().unwrap().canonical();
            assert_eq!(iface.subnet.cidr, canonical);
        }
        for (iface, raw_ip) in node.interfaces.iter().zip(&record.ips) {
            assert_eq!(iface.ip.is_none(), raw_ip == UNSET_IP);
        }
    }

    // /23 given with and without host bits is one subnet
    let cidrs: Vec<String> = network.subnets.iter().map(|s| s.cidr.to_string()).collect();
    assert_eq!(cidrs, vec!["10.20.0.0/24", "10.30.0.0/24", "10.40.0.0/23"]);
    let storage = network.node("storage-1").expect("storage-1 missing");
    let storage_net = network.subnet_by_cidr("10.40.0.0/23").unwrap();
    assert!(Rc::ptr_eq(&storage.interfaces[1].subnet, storage_net));
    assert!(Rc::ptr_eq(&storage.interfaces[2].subnet, storage_net));

    // every referenced subnet is present exactly once, none unreferenced
    let referenced: HashSet<*const _> = network
        .interfaces()
        .map(|(_, iface)| Rc::as_ptr(&iface.subnet))
        .collect();
    let present: HashSet<*const _> = network.subnets.iter().map(Rc::as_ptr).collect();
    assert_eq!(referenced, present);
    assert_eq!(present.len(), network.subnets.len());

    let graph = render_graph(&network).unwrap();
    assert_eq!(graph.nodes.len(), network.subnets.len() + network.nodes.len());
    assert_eq!(graph.links.len(), network.interface_count());
    assert_eq!(graph.links[0].source, "compute-1");
    assert_eq!(graph.links[0].interface, "eno1");
}

#[test]
fn test_mermaid_from_file() {
    let network = build_network(&load("inventory_01.yaml")).unwrap();
    let diagram = render_mermaid(&network).unwrap();
    let blocks: Vec<&str> = diagram.split("\n\n").collect();

    assert_eq!(blocks[0], "graph LR");
    assert_eq!(
        blocks[1],
        "  Subnet_1[\"Subnet_1<br>10.20.0.0/24\"]\n  Subnet_2[\"Subnet_2<br>10.30.0.0/24\"]\n  Subnet_3[\"Subnet_3<br>10.40.0.0/23\"]"
    );
    assert_eq!(
        blocks[2],
        "  compute-1[\"compute-1\"]\n  compute-2[\"compute-2\"]\n  storage-1[\"storage-1\"]"
    );
    assert_eq!(diagram.matches("-->").count(), 7);
    assert_eq!(diagram.matches("|DHCP lease expired|").count(), 2);
    assert!(diagram.contains("  compute-2 -->|eno2: 10.30.0.12| Subnet_2\n"));
}

#[test]
fn test_display_id_collision() {
    let network = build_network(&load("inventory_collision.json")).unwrap();
    let expected = TopologyError::DuplicateIdentifier {
        id: "rack_1".to_string(),
    };
    assert_eq!(render_graph(&network).unwrap_err(), expected);
    assert_eq!(render_mermaid(&network).unwrap_err(), expected);
}

#[test]
fn test_service_per_request() {
    let text = std::fs::read_to_string("src/tests/test_data/inventory_02.json").unwrap();
    let graph = TopologyService::new(OutputFormat::Graph)
        .render_document("inventory_02.json", &text)
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&graph).unwrap();
    assert_eq!(value["nodes"][2]["id"], "Node1");
    assert_eq!(value["nodes"][3]["id"], "h2");

    let err = TopologyService::new(OutputFormat::Graph)
        .render_document("inventory_02.txt", &text)
        .unwrap_err();
    assert!(matches!(err, InventoryError::UnsupportedFormat { .. }));
}
