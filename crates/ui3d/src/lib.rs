//! Layer stack scene for layerstack
//!
//! This crate turns an ordered list of layer descriptors into a scene of
//! stacked, translucent boxes, each with a camera-facing text label that is
//! rasterized on the fly.
//!
//! # Features
//!
//! - **Stack layout**: non-overlapping, origin-centered placement of layer solids
//! - **Label textures**: CPU text rasterization into RGBA8 billboard textures
//! - **Scene graph**: handle-based node storage with atomic transactions
//! - **Picking**: ray tests against solids and labels for layer inspection
//!
//! # Example
//!
//! ```rust,no_run
//! use layerstack_assets::builtin_catalog;
//! use layerstack_core::{InspectionPanel, LayerDescriptor};
//! use layerstack_ui3d::{BlockRaster, SessionConfig, VisualizationSession};
//!
//! struct NoPanel;
//! impl InspectionPanel for NoPanel {
//!     fn display(&mut self, _: Option<&LayerDescriptor>) {}
//! }
//!
//! let mut session = VisualizationSession::new(
//!     SessionConfig::default(),
//!     builtin_catalog(),
//!     Box::new(BlockRaster),
//!     NoPanel,
//! )
//! .unwrap();
//! session.load_model("osi");
//! let frame = session.frame();
//! assert_eq!(frame.items.len(), 14);
//! ```

pub mod components;
pub mod interaction;
pub mod layout;
pub mod render;
pub mod scene_graph;
pub mod session;

// Re-export commonly used types
pub use components::{Billboard, LayerSolid, SceneComponent, SolidMaterial, Transform3D};
pub use interaction::{raycast_billboard_quad, screen_to_ray, Aabb};
pub use layout::{LayerPlacement, StackLayout};
pub use render::{
    generate_label, label_dimensions, BlockRaster, FontError, FontSpec, FontdueRaster,
    LabelSprite, LabelStyle, LabelStyleError, LabelTexture, RasterSurface, TextRaster,
    LABEL_HEIGHT_FACTOR, MAX_FONT_SIZE_PX,
};
pub use scene_graph::{NodeHandle, SceneGraph, SceneNode, SceneTransaction};
pub use session::{
    DrawItem, DrawKind, FrameSnapshot, LayerVisual, SessionConfig, SessionError,
    VisualizationSession,
};
