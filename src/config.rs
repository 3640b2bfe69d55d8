use anyhow::Result;
use layerstack_core::{StackDimensions, WorldScale};
use layerstack_render::CameraSettings;
use layerstack_ui3d::{LabelStyle, SessionConfig};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::warn;

const DEFAULT_CONFIG_PATH: &str = "layerstack.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ViewportConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Catalog key shown at startup.
    pub default_model: String,
    /// Label font file; a system font is searched for when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_path: Option<PathBuf>,
    /// Extra JSON catalog merged over the built-in models.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,
    /// World units per label pixel.
    pub world_scale: WorldScale,
    pub stack: StackDimensions,
    pub label: LabelStyle,
    pub camera: CameraSettings,
    pub viewport: ViewportConfig,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            default_model: "osi".to_string(),
            font_path: None,
            catalog_path: None,
            world_scale: WorldScale::default(),
            stack: StackDimensions::default(),
            label: LabelStyle::default(),
            camera: CameraSettings::default(),
            viewport: ViewportConfig::default(),
        }
    }
}

impl ViewerConfig {
    /// Load viewer configuration from the default path.
    pub fn load() -> Self {
        Self::load_from_path(Path::new(DEFAULT_CONFIG_PATH))
    }

    /// Load configuration from an explicit path, falling back to defaults on errors.
    pub fn load_from_path(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<ViewerConfig>(&contents) {
                Ok(cfg) => cfg,
                Err(err) => {
                    warn!("Failed to parse {}: {err}. Using defaults", path.display());
                    ViewerConfig::default()
                }
            },
            Err(err) => {
                if path != Path::new(DEFAULT_CONFIG_PATH)
                    || err.kind() != std::io::ErrorKind::NotFound
                {
                    warn!("Failed to read {}: {err}. Using defaults", path.display());
                }
                ViewerConfig::default()
            }
        }
    }

    /// Save configuration to an explicit path.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        let toml = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        Ok(())
    }

    /// Scene settings for a [`layerstack_ui3d::VisualizationSession`].
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            stack: self.stack,
            scale: self.world_scale,
            label: self.label.clone(),
            camera: self.camera,
            viewport: (self.viewport.width, self.viewport.height),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use layerstack_core::Rgba;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_path(name: &str) -> PathBuf {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        std::env::temp_dir().join(format!("layerstack_{name}_{timestamp}.toml"))
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let cfg: ViewerConfig = toml::from_str(
            r#"
default_model = "tcpip5"
world_scale = 0.1

[stack]
layer_gap = 0.5

[label.font]
size_px = 32.0
"#,
        )
        .unwrap();
        assert_eq!(cfg.default_model, "tcpip5");
        assert_eq!(cfg.world_scale, WorldScale::new(0.1));
        assert_eq!(cfg.stack.layer_gap, 0.5);
        assert_eq!(cfg.stack.layer_height, 1.0);
        assert_eq!(cfg.label.font.size_px, 32.0);
        assert_eq!(cfg.label.font.family, "Arial");
        assert_eq!(cfg.label.background_color, Rgba::TRANSPARENT);
        assert_eq!(cfg.camera.fov_degrees, 75.0);
    }

    #[test]
    fn save_and_reload_round_trips() {
        let path = temp_path("roundtrip");
        let mut cfg = ViewerConfig::default();
        cfg.default_model = "tcpip4".to_string();
        cfg.font_path = Some(PathBuf::from("/fonts/Bold.ttf"));
        cfg.label.text_color = Rgba::new(255, 255, 255, 1.0);
        cfg.save_to_path(&path).unwrap();

        let loaded = ViewerConfig::load_from_path(&path);
        assert_eq!(loaded, cfg);
        let _ = fs::remove_file(path);
    }

    #[test]
    fn unreadable_or_invalid_files_fall_back_to_defaults() {
        let missing = ViewerConfig::load_from_path(Path::new("/no/such/layerstack.toml"));
        assert_eq!(missing, ViewerConfig::default());

        let path = temp_path("invalid");
        fs::write(&path, "stack = 5").unwrap();
        assert_eq!(ViewerConfig::load_from_path(&path), ViewerConfig::default());
        let _ = fs::remove_file(path);
    }

    #[test]
    fn session_config_carries_shared_scale() {
        let mut cfg = ViewerConfig::default();
        cfg.world_scale = WorldScale::new(0.02);
        cfg.viewport.width = 640;
        let session = cfg.session_config();
        assert_eq!(session.scale, WorldScale::new(0.02));
        assert_eq!(session.viewport, (640, 720));
    }
}
