#![warn(missing_docs)]
//! Core data shared across the layerstack workspace.
//!
//! Nothing in here touches pixels or scene graphs: these are the descriptors,
//! colors and dimensions every other crate agrees on.

pub mod color;
pub mod layer;
pub mod panel;
pub mod scale;

// Re-export commonly used types
pub use color::{Rgb, Rgba};
pub use layer::{LayerDescriptor, ModelDefinition};
pub use panel::{InspectionPanel, PanelText, PLACEHOLDER};
pub use scale::{DimensionError, StackDimensions, WorldScale};
