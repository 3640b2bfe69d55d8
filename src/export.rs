//! Dump the current scene to disk: one PNG per label plus `scene.json`.

use anyhow::{Context, Result};
use layerstack_core::InspectionPanel;
use layerstack_render::write_png;
use layerstack_ui3d::{SceneComponent, SceneNode, VisualizationSession};
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub const SCENE_FILE: &str = "scene.json";

/// File name for the label of the layer at `index` in the stack.
pub fn label_file_name(index: usize, name: &str) -> String {
    let slug: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();
    format!("label_{index:02}_{slug}.png")
}

/// Write every label texture and a JSON description of the scene into `dir`.
///
/// Returns the label files written, bottom of the stack first.
pub fn export_scene<P: InspectionPanel>(
    session: &VisualizationSession<P>,
    dir: &Path,
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;

    let mut written = Vec::new();
    let mut layers = Vec::new();
    for (index, visual) in session.visuals().iter().enumerate() {
        let solid = session
            .scene()
            .get(visual.solid)
            .and_then(SceneNode::as_solid)
            .with_context(|| format!("layer {} has no solid", visual.descriptor.id))?;
        let label = session
            .scene()
            .get(visual.label)
            .and_then(SceneNode::as_billboard)
            .with_context(|| format!("layer {} has no label", visual.descriptor.id))?;

        let file_name = label_file_name(index, &visual.descriptor.name);
        let path = dir.join(&file_name);
        let texture = &label.texture;
        write_png(&path, (texture.width(), texture.height()), texture.pixels())?;
        written.push(path);

        let center = solid.position();
        let label_pos = label.position();
        let material = &solid.material;
        layers.push(json!({
            "id": visual.descriptor.id,
            "name": visual.descriptor.name,
            "color": solid.original_color.to_string(),
            "center": [center.x, center.y, center.z],
            "size": [solid.size.x, solid.size.y, solid.size.z],
            "material": {
                "opacity": material.opacity,
                "roughness": material.roughness,
                "metalness": material.metalness,
                "blend": material.is_transparent(),
            },
            "label": {
                "file": file_name,
                "position": [label_pos.x, label_pos.y, label_pos.z],
                "pixels": [texture.width(), texture.height()],
                "world_size": [label.width(), label.height()],
            },
        }));
    }

    let camera = session.camera();
    let env = session.environment();
    let light_dir = env.light_direction();
    let (width, height) = session.viewport();
    let scene = json!({
        "model": session.active_model(),
        "revision": session.scene().revision(),
        "viewport": [width, height],
        "camera": {
            "position": [camera.position.x, camera.position.y, camera.position.z],
            "target": [camera.target.x, camera.target.y, camera.target.z],
            "fov": camera.fov,
        },
        "environment": {
            "background": env.background.to_string(),
            "ambient": {
                "color": env.ambient.color.to_string(),
                "intensity": env.ambient.intensity,
            },
            "directional": {
                "color": env.directional.color.to_string(),
                "intensity": env.directional.intensity,
                "direction": [light_dir.x, light_dir.y, light_dir.z],
            },
        },
        "layers": layers,
    });
    let scene_path = dir.join(SCENE_FILE);
    fs::write(&scene_path, serde_json::to_string_pretty(&scene)?)
        .with_context(|| format!("failed to write {}", scene_path.display()))?;

    info!(dir = %dir.display(), labels = written.len(), "Exported scene");
    Ok(written)
}
