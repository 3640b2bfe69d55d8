//! Inspection panel contract.
//!
//! The scene code only ever pushes a descriptor (or nothing) at the panel; it
//! never reads anything back.

use crate::layer::LayerDescriptor;

/// Text shown in every field when no layer is selected.
pub const PLACEHOLDER: &str = "-";

/// Receiver for "show this layer" / "show nothing" requests.
pub trait InspectionPanel {
    /// Display `layer`, or placeholders when `None`.
    fn display(&mut self, layer: Option<&LayerDescriptor>);
}

impl<P: InspectionPanel + ?Sized> InspectionPanel for &mut P {
    fn display(&mut self, layer: Option<&LayerDescriptor>) {
        (**self).display(layer)
    }
}

/// The four formatted panel lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelText {
    /// `Name: {name} (Layer {id})`
    pub name: String,
    /// `Purpose: {purpose}`
    pub purpose: String,
    /// `Protocols: {protocols}`
    pub protocols: String,
    /// `PDU: {pdu}`
    pub pdu: String,
}

impl PanelText {
    /// Format the panel fields for a layer, or placeholders for `None`.
    pub fn for_layer(layer: Option<&LayerDescriptor>) -> Self {
        match layer {
            Some(layer) => Self {
                name: format!("Name: {} (Layer {})", layer.name, layer.id),
                purpose: format!("Purpose: {}", layer.purpose),
                protocols: format!("Protocols: {}", layer.protocols),
                pdu: format!("PDU: {}", layer.pdu),
            },
            None => Self::placeholder(),
        }
    }

    /// Placeholder text for every field.
    pub fn placeholder() -> Self {
        Self {
            name: format!("Name: {PLACEHOLDER}"),
            purpose: format!("Purpose: {PLACEHOLDER}"),
            protocols: format!("Protocols: {PLACEHOLDER}"),
            pdu: format!("PDU: {PLACEHOLDER}"),
        }
    }

    /// True when this is the "nothing selected" text.
    pub fn is_placeholder(&self) -> bool {
        *self == Self::placeholder()
    }

    /// Fields in display order.
    pub fn lines(&self) -> [&str; 4] {
        [&self.name, &self.purpose, &self.protocols, &self.pdu]
    }
}
