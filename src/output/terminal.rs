//! Terminal summary of a built network.

use crate::models::Network;
use colored::Colorize;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let quoted = format!("\"{}\"", value.to_string());
    if quoted.len() >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

/// Lines of the summary, without colour.
fn summary_lines(network: &Network) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push(format!(
        r#" {id},{cidr},{broadcast},{ifaces},{expired}"#,
        id = format_field("subnet", 12),
        cidr = format_field("cidr", 20),
        broadcast = format_field("broadcast", 18),
        ifaces = format_field("ifaces", 8),
        expired = format_field("no_lease", 10),
    ));
    for subnet in &network.subnets {
        let attached: Vec<_> = network
            .nodes
            .iter()
            .flat_map(|node| node.interfaces_on(subnet))
            .collect();
        let expired = attached.iter().filter(|iface| iface.ip.is_none()).count();
        lines.push(format!(
            r#" {id},{cidr},{broadcast},{ifaces},{expired}"#,
            id = format_field(format!("Subnet_{}", subnet.id), 12),
            cidr = format_field(subnet.cidr, 20),
            broadcast = format_field(format!("{}_br", subnet.cidr.hi()), 18),
            ifaces = format_field(attached.len(), 8),
            expired = format_field(expired, 10),
        ));
    }
    for node in &network.nodes {
        lines.push(format!(
            "NODE: '{}' [{}] - {} interface(s)",
            node.name,
            node.key,
            node.interfaces.len()
        ));
    }
    lines
}

/// Print a summary of subnets and nodes to stdout.
pub fn print_summary(network: &Network) {
    log::info!(
        "#Start print_summary() nodes={} subnets={}",
        network.nodes.len(),
        network.subnets.len()
    );
    log::debug!("{network}");
    for (i, line) in summary_lines(network).into_iter().enumerate() {
        if i == 0 {
            println!("{}", line.bold());
        } else if line.starts_with("NODE:") {
            println!("{}", line.green());
        } else {
            println!("{line}");
        }
    }
    let expired = network
        .interfaces()
        .filter(|(_, iface)| iface.ip.is_none())
        .count();
    if expired > 0 {
        println!(
            "#{}# {expired} interface(s) without a DHCP lease",
            "NOTE".on_red()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{HostRecord, Inventory};
    use crate::processing::build_network;

    #[test]
    fn test_format_field_short() {
        assert_eq!(format_field("test", 10), "    \"test\"");
    }

    #[test]
    fn test_format_field_long() {
        assert_eq!(format_field("long_value", 5), "\"long_value\"");
    }

    #[test]
    fn test_format_field_number() {
        assert_eq!(format_field(42, 6), "  \"42\"");
    }

    #[test]
    fn test_summary_lines() {
        let inventory: Inventory = [(
            "abc".to_string(),
            HostRecord {
                hostname: Some("web".to_string()),
                ips: vec!["10.1.0.4".to_string(), "None".to_string()],
                subnets: vec!["10.1.0.0/16".to_string(), "10.1.0.0/16".to_string()],
                interfaces: None,
            },
        )]
        .into_iter()
        .collect();
        let network = build_network(&inventory).unwrap();
        let lines = summary_lines(&network);
        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains("\"10.1.0.0/16\""));
        assert!(lines[1].contains("\"10.1.255.255_br\""));
        assert!(lines[1].ends_with(&format!("{},{}", format_field(2, 8), format_field(1, 10))));
        assert_eq!(lines[2], "NODE: 'web' [abc] - 2 interface(s)");
    }
}
