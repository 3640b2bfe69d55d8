//! Visualization session - one selected model rendered as a labeled stack.
//!
//! The session owns the scene graph, the active [`LayerVisual`]s, the camera
//! and the inspection panel. Selecting a model builds every solid and label
//! off-graph first and then swaps them in with one [`SceneTransaction`], so a
//! frame taken at any point shows exactly one model (or nothing).

use crate::components::{Billboard, LayerSolid, SceneComponent, SolidMaterial};
use crate::interaction::{raycast_billboard_quad, screen_to_ray};
use crate::layout::StackLayout;
use crate::render::{generate_label, LabelStyle, LabelStyleError, LabelTexture, TextRaster};
use crate::scene_graph::{NodeHandle, SceneGraph, SceneNode, SceneTransaction};
use glam::{Mat4, Vec3};
use layerstack_assets::ModelCatalog;
use layerstack_core::{
    DimensionError, InspectionPanel, LayerDescriptor, StackDimensions, WorldScale,
};
use layerstack_render::{Camera, CameraSettings, SceneEnvironment};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Settings a session refuses to start with.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Dimensions(#[from] DimensionError),
    #[error(transparent)]
    Label(#[from] LabelStyleError),
}

/// Everything a session needs besides its catalog, raster and panel.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    pub stack: StackDimensions,
    /// Pixel-to-world factor for label sprites.
    pub scale: WorldScale,
    pub label: LabelStyle,
    pub camera: CameraSettings,
    /// Viewport size in pixels.
    pub viewport: (u32, u32),
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            stack: StackDimensions::default(),
            scale: WorldScale::default(),
            label: LabelStyle::default(),
            camera: CameraSettings::default(),
            viewport: (1280, 720),
        }
    }
}

/// Scene objects belonging to one displayed layer.
#[derive(Debug, Clone)]
pub struct LayerVisual {
    pub solid: NodeHandle,
    pub label: NodeHandle,
    pub descriptor: LayerDescriptor,
}

/// What to draw for one scene node.
#[derive(Debug, Clone)]
pub enum DrawKind {
    Solid {
        layer_id: u32,
        material: SolidMaterial,
    },
    Label {
        texture: Arc<LabelTexture>,
    },
}

/// One node ready for drawing: unit-cube or unit-quad model matrix plus payload.
#[derive(Debug, Clone)]
pub struct DrawItem {
    pub handle: NodeHandle,
    pub model: Mat4,
    pub kind: DrawKind,
}

/// Read-only view of the scene for a render loop.
#[derive(Debug, Clone)]
pub struct FrameSnapshot {
    /// Scene graph revision the snapshot was taken at.
    pub revision: u64,
    pub view_projection: Mat4,
    pub camera_position: Vec3,
    pub environment: SceneEnvironment,
    pub items: Vec<DrawItem>,
}

impl FrameSnapshot {
    /// Layer ids of the solids in this frame.
    pub fn layer_ids(&self) -> Vec<u32> {
        self.items
            .iter()
            .filter_map(|item| match item.kind {
                DrawKind::Solid { layer_id, .. } => Some(layer_id),
                DrawKind::Label { .. } => None,
            })
            .collect()
    }
}

/// A scene showing the layers of at most one model at a time.
pub struct VisualizationSession<P: InspectionPanel> {
    config: SessionConfig,
    layout: StackLayout,
    catalog: ModelCatalog,
    raster: Box<dyn TextRaster>,
    panel: P,
    scene: SceneGraph,
    visuals: Vec<LayerVisual>,
    camera: Camera,
    environment: SceneEnvironment,
    active_model: Option<String>,
    viewport: (u32, u32),
}

fn aspect_ratio((width, height): (u32, u32)) -> f32 {
    if width == 0 || height == 0 {
        16.0 / 9.0
    } else {
        width as f32 / height as f32
    }
}

impl<P: InspectionPanel> VisualizationSession<P> {
    /// Create an empty session; nothing is shown until [`Self::load_model`].
    pub fn new(
        config: SessionConfig,
        catalog: ModelCatalog,
        raster: Box<dyn TextRaster>,
        panel: P,
    ) -> Result<Self, SessionError> {
        config.stack.validate()?;
        config.scale.validate()?;
        config.label.validate()?;
        let camera = Camera::from_settings(&config.camera, aspect_ratio(config.viewport));
        Ok(Self {
            layout: StackLayout::new(config.stack, config.scale),
            viewport: config.viewport,
            config,
            catalog,
            raster,
            panel,
            scene: SceneGraph::new(),
            visuals: Vec::new(),
            camera,
            environment: SceneEnvironment::default(),
            active_model: None,
        })
    }

    /// Replace whatever is shown with the model under `key`.
    ///
    /// Unknown keys leave the scene empty. Either way the panel is cleared.
    pub fn load_model(&mut self, key: &str) {
        let mut tx = SceneTransaction::new();
        for visual in self.visuals.drain(..) {
            tx.remove(visual.solid);
            tx.remove(visual.label);
        }

        let mut pending = Vec::new();
        match self.catalog.get(key) {
            Some(model) => {
                let n = model.len();
                let size = self.layout.solid_size();
                for (placement, layer) in self.layout.placements(n).into_iter().zip(&model.layers) {
                    let sprite = generate_label(
                        self.raster.as_ref(),
                        &layer.name,
                        &self.config.label,
                        self.layout.scale(),
                    );
                    let label = Billboard::from_sprite(placement.label_position, sprite);
                    let solid = LayerSolid::new(placement.center, size, layer.clone());
                    debug!(
                        layer = layer.id,
                        name = %layer.name,
                        y = placement.center.y,
                        "Placed layer"
                    );
                    let solid_slot = tx.add(SceneNode::Solid(solid));
                    let label_slot = tx.add(SceneNode::Billboard(label));
                    pending.push((solid_slot, label_slot, layer.clone()));
                }
                self.camera
                    .frame_height(self.layout.camera_height(n), self.config.camera.distance);
                self.active_model = Some(key.to_string());
                info!(model = key, name = %model.name, layers = n, "Loaded model");
            }
            None => {
                warn!(model = key, "Unknown model key; showing an empty scene");
                self.active_model = None;
            }
        }

        let handles = self.scene.apply(tx);
        self.visuals = pending
            .into_iter()
            .map(|(solid, label, descriptor)| LayerVisual {
                solid: handles[solid],
                label: handles[label],
                descriptor,
            })
            .collect();
        self.panel.display(None);
    }

    /// Remove every layer and clear the panel.
    pub fn clear(&mut self) {
        let mut tx = SceneTransaction::new();
        for visual in self.visuals.drain(..) {
            tx.remove(visual.solid);
            tx.remove(visual.label);
        }
        self.scene.apply(tx);
        self.active_model = None;
        self.panel.display(None);
    }

    /// Show layer `id` of the current model in the panel; placeholders when absent.
    pub fn inspect(&mut self, id: u32) -> Option<&LayerDescriptor> {
        let found = self
            .visuals
            .iter()
            .map(|visual| &visual.descriptor)
            .find(|descriptor| descriptor.id == id);
        self.panel.display(found);
        found
    }

    /// Pick the nearest layer solid or label along a world-space ray and show it.
    pub fn pick(&mut self, origin: Vec3, dir: Vec3) -> Option<u32> {
        let mut best: Option<(f32, usize)> = None;
        for (index, visual) in self.visuals.iter().enumerate() {
            let solid_hit = self
                .scene
                .get(visual.solid)
                .and_then(SceneNode::as_solid)
                .and_then(|solid| solid.aabb().ray_intersection(origin, dir));
            let label_hit = self
                .scene
                .get(visual.label)
                .and_then(SceneNode::as_billboard)
                .and_then(|label| {
                    raycast_billboard_quad(
                        origin,
                        dir,
                        label.position(),
                        (label.width(), label.height()),
                        self.camera.position,
                    )
                });
            for distance in [solid_hit, label_hit].into_iter().flatten() {
                if best.map_or(true, |(nearest, _)| distance < nearest) {
                    best = Some((distance, index));
                }
            }
        }

        let picked = best.map(|(_, index)| &self.visuals[index].descriptor);
        self.panel.display(picked);
        picked.map(|descriptor| descriptor.id)
    }

    /// Pick through a viewport pixel (origin top-left).
    pub fn pick_screen(&mut self, screen_pos: (f32, f32)) -> Option<u32> {
        let ray = screen_to_ray(
            screen_pos,
            self.viewport,
            &self.camera.view_matrix(),
            &self.camera.projection_matrix(),
        );
        match ray {
            Some((origin, dir)) => self.pick(origin, dir),
            None => {
                self.panel.display(None);
                None
            }
        }
    }

    /// Track a new viewport size; zero-sized viewports are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            debug!(width, height, "Ignoring degenerate resize");
            return;
        }
        self.viewport = (width, height);
        self.camera.set_aspect(aspect_ratio(self.viewport));
    }

    /// Capture what a renderer should draw right now.
    pub fn frame(&self) -> FrameSnapshot {
        let camera_up = self.camera.up();
        let items = self
            .scene
            .iter()
            .map(|(handle, node)| match node {
                SceneNode::Solid(solid) => DrawItem {
                    handle,
                    model: solid.model_matrix(),
                    kind: DrawKind::Solid {
                        layer_id: solid.layer.id,
                        material: solid.material,
                    },
                },
                SceneNode::Billboard(label) => DrawItem {
                    handle,
                    model: label.calculate_orientation(self.camera.position, camera_up),
                    kind: DrawKind::Label {
                        texture: Arc::clone(&label.texture),
                    },
                },
            })
            .collect();

        FrameSnapshot {
            revision: self.scene.revision(),
            view_projection: self.camera.view_projection_matrix(),
            camera_position: self.camera.position,
            environment: self.environment,
            items,
        }
    }

    /// Visuals of the current model, bottom of the stack first.
    pub fn visuals(&self) -> &[LayerVisual] {
        &self.visuals
    }

    /// Label billboard of every active layer.
    pub fn labels(&self) -> impl Iterator<Item = (&LayerVisual, &Billboard)> {
        self.visuals.iter().filter_map(move |visual| {
            self.scene
                .get(visual.label)
                .and_then(SceneNode::as_billboard)
                .map(|label| (visual, label))
        })
    }

    /// Key of the model on screen, if any.
    pub fn active_model(&self) -> Option<&str> {
        self.active_model.as_deref()
    }

    pub fn catalog(&self) -> &ModelCatalog {
        &self.catalog
    }

    pub fn scene(&self) -> &SceneGraph {
        &self.scene
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn environment(&self) -> &SceneEnvironment {
        &self.environment
    }

    pub fn layout(&self) -> &StackLayout {
        &self.layout
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn viewport(&self) -> (u32, u32) {
        self.viewport
    }

    pub fn panel(&self) -> &P {
        &self.panel
    }
}
