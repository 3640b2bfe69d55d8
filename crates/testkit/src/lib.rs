#![warn(missing_docs)]
//! Shared fixtures and fakes for layerstack tests.

use layerstack_assets::{osi_model, ModelCatalog};
use layerstack_core::{InspectionPanel, LayerDescriptor, ModelDefinition, PanelText, Rgb};

/// Panel that records every display call as formatted text.
#[derive(Debug, Default, Clone)]
pub struct RecordingPanel {
    shown: Vec<PanelText>,
}

impl RecordingPanel {
    /// Everything displayed so far, oldest first.
    pub fn shown(&self) -> &[PanelText] {
        &self.shown
    }

    /// Most recent display.
    pub fn last(&self) -> Option<&PanelText> {
        self.shown.last()
    }

    /// Number of display calls.
    pub fn calls(&self) -> usize {
        self.shown.len()
    }
}

impl InspectionPanel for RecordingPanel {
    fn display(&mut self, layer: Option<&LayerDescriptor>) {
        self.shown.push(PanelText::for_layer(layer));
    }
}

/// Three layers `A`, `B`, `C` with ids 1, 2, 3, listed bottom first.
pub fn abc_model() -> ModelDefinition {
    let colors = [0xff0000, 0x00ff00, 0x0000ff];
    ModelDefinition::new(
        "ABC",
        ["A", "B", "C"]
            .iter()
            .zip(colors)
            .enumerate()
            .map(|(i, (name, color))| LayerDescriptor {
                color: Rgb(color),
                purpose: format!("Purpose of {name}"),
                protocols: format!("{name}P"),
                pdu: format!("{name}-PDU"),
                ..LayerDescriptor::simple(i as u32 + 1, name)
            })
            .collect(),
    )
}

/// Catalog with `abc` ([`abc_model`]) and `seven` (the OSI model).
pub fn fixture_catalog() -> ModelCatalog {
    ModelCatalog::from_models([("abc", abc_model()), ("seven", osi_model())])
}

/// Assert two floats are within `1e-5`.
#[track_caller]
pub fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 1e-5,
        "expected {expected}, got {actual}"
    );
}
