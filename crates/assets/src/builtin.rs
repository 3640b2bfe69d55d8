//! Models bundled with the viewer.
//!
//! Layers are listed top-down (highest layer number first), which puts the
//! application layer at the bottom of the rendered stack.

use layerstack_core::{LayerDescriptor, ModelDefinition, Rgb};

use crate::ModelCatalog;

fn layer(id: u32, name: &str, color: u32, purpose: &str, protocols: &str, pdu: &str) -> LayerDescriptor {
    LayerDescriptor {
        id,
        name: name.to_string(),
        color: Rgb::from_hex(color),
        purpose: purpose.to_string(),
        protocols: protocols.to_string(),
        pdu: pdu.to_string(),
    }
}

/// The seven-layer OSI reference model.
pub fn osi_model() -> ModelDefinition {
    ModelDefinition::new(
        "OSI Model",
        vec![
            layer(7, "Application", 0xff6347, "Network process to application. Provides services for user applications.", "HTTP, FTP, SMTP, DNS", "Data"),
            layer(6, "Presentation", 0xffa07a, "Data representation, encryption and decryption, compression.", "SSL, TLS, JPEG, ASCII", "Data"),
            layer(5, "Session", 0xffdab9, "Interhost communication, managing sessions between applications.", "NetBIOS, RPC, PPTP", "Data"),
            layer(4, "Transport", 0x90ee90, "End-to-end connections, reliability and flow control.", "TCP, UDP", "Segment/Datagram"),
            layer(3, "Network", 0x87cefa, "Path determination and logical addressing (IP).", "IP, ICMP, IGMP, OSPF", "Packet"),
            layer(2, "Data Link", 0xadd8e6, "Physical addressing (MAC) and error detection.", "Ethernet, PPP, Switch", "Frame"),
            layer(1, "Physical", 0xb0c4de, "Media, signal and binary transmission.", "Ethernet (cable), Wi-Fi (radio), Hubs", "Bits"),
        ],
    )
}

/// The four-layer TCP/IP (RFC 1122) model.
pub fn tcpip4_model() -> ModelDefinition {
    ModelDefinition::new(
        "TCP/IP Model (4 layers)",
        vec![
            layer(4, "Application", 0xff6347, "Process-to-process communication; merges OSI application, presentation and session.", "HTTP, FTP, SMTP, DNS, TLS", "Data"),
            layer(3, "Transport", 0x90ee90, "Host-to-host delivery, reliability and flow control.", "TCP, UDP", "Segment/Datagram"),
            layer(2, "Internet", 0x87cefa, "Logical addressing and routing across networks.", "IP, ICMP, IGMP", "Packet"),
            layer(1, "Network Access", 0xb0c4de, "Framing and transmission on the local medium.", "Ethernet, Wi-Fi, PPP, ARP", "Frame/Bits"),
        ],
    )
}

/// The five-layer hybrid TCP/IP model used in most textbooks.
pub fn tcpip5_model() -> ModelDefinition {
    ModelDefinition::new(
        "TCP/IP Model (5 layers)",
        vec![
            layer(5, "Application", 0xff6347, "Services for user applications, including data representation and sessions.", "HTTP, FTP, SMTP, DNS, TLS", "Data"),
            layer(4, "Transport", 0x90ee90, "End-to-end connections, reliability and flow control.", "TCP, UDP", "Segment/Datagram"),
            layer(3, "Network", 0x87cefa, "Path determination and logical addressing (IP).", "IP, ICMP, OSPF", "Packet"),
            layer(2, "Data Link", 0xadd8e6, "Physical addressing (MAC) and error detection.", "Ethernet, PPP, Switch", "Frame"),
            layer(1, "Physical", 0xb0c4de, "Media, signal and binary transmission.", "Ethernet (cable), Wi-Fi (radio), Hubs", "Bits"),
        ],
    )
}

/// Catalog with every bundled model under its selection key.
pub fn builtin_catalog() -> ModelCatalog {
    ModelCatalog::from_models([
        ("osi", osi_model()),
        ("tcpip4", tcpip4_model()),
        ("tcpip5", tcpip5_model()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_models_are_top_down_with_unique_ids() {
        let catalog = builtin_catalog();
        assert_eq!(catalog.keys().collect::<Vec<_>>(), vec!["osi", "tcpip4", "tcpip5"]);
        for (key, model) in catalog.iter() {
            assert!(model.duplicate_ids().is_empty(), "{key} has duplicate ids");
            let ids: Vec<u32> = model.layers.iter().map(|l| l.id).collect();
            let expected: Vec<u32> = (1..=model.len() as u32).rev().collect();
            assert_eq!(ids, expected, "{key} is not listed top-down");
        }
    }

    #[test]
    fn osi_matches_reference_data() {
        let osi = osi_model();
        assert_eq!(osi.len(), 7);
        assert_eq!(osi.layers[0].name, "Application");
        assert_eq!(osi.layers[0].color, Rgb(0xff6347));
        assert_eq!(osi.layers[3].pdu, "Segment/Datagram");
        assert_eq!(osi.layers[6].protocols, "Ethernet (cable), Wi-Fi (radio), Hubs");
    }
}
