//! Layer descriptors and the models that order them.

use crate::color::Rgb;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One entry of a layered reference model (e.g. "Transport" in OSI).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerDescriptor {
    /// Conventional layer number; identity within a model.
    pub id: u32,
    /// Display name, also the label text.
    pub name: String,
    /// Base color of the layer's solid.
    pub color: Rgb,
    /// What the layer is for.
    #[serde(default)]
    pub purpose: String,
    /// Representative protocols.
    #[serde(default)]
    pub protocols: String,
    /// Protocol data unit exchanged at this layer.
    #[serde(default)]
    pub pdu: String,
}

impl LayerDescriptor {
    /// Helper for tests and fixtures that only care about id and name.
    pub fn simple(id: u32, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            color: Rgb(0x808080),
            purpose: String::new(),
            protocols: String::new(),
            pdu: String::new(),
        }
    }
}

/// A named, ordered stack of layers.
///
/// Index 0 is drawn at the bottom of the stack. Catalogs list layers top-down
/// by convention, so the first listed layer ends up lowest on screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelDefinition {
    /// Human-readable model name.
    pub name: String,
    /// Layers in stack order.
    pub layers: Vec<LayerDescriptor>,
}

impl ModelDefinition {
    /// Create a model from its layers.
    pub fn new(name: impl Into<String>, layers: Vec<LayerDescriptor>) -> Self {
        Self {
            name: name.into(),
            layers,
        }
    }

    /// Number of layers.
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// True when the model has no layers.
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Find a layer by id.
    pub fn layer(&self, id: u32) -> Option<&LayerDescriptor> {
        self.layers.iter().find(|layer| layer.id == id)
    }

    /// Ids that occur more than once, in ascending order.
    pub fn duplicate_ids(&self) -> Vec<u32> {
        let mut seen = BTreeSet::new();
        let mut dupes = BTreeSet::new();
        for layer in &self.layers {
            if !seen.insert(layer.id) {
                dupes.insert(layer.id);
            }
        }
        dupes.into_iter().collect()
    }
}
