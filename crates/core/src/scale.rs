//! World-space dimensions shared by stack layout and label sizing.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Conversion from label raster pixels to world units.
///
/// The same value sizes label sprites and is the unit the stack dimensions are
/// authored in, so a 24px label stays legible against a 6-unit-wide solid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorldScale {
    /// World units per raster pixel.
    pub pixels_to_world: f32,
}

impl WorldScale {
    /// Create a scale from a pixels-to-world factor.
    pub const fn new(pixels_to_world: f32) -> Self {
        Self { pixels_to_world }
    }

    /// Convert a pixel length to world units.
    pub fn to_world(self, pixels: f32) -> f32 {
        pixels * self.pixels_to_world
    }

    /// Reject factors that would produce empty, mirrored or NaN sprites.
    pub fn validate(self) -> Result<(), DimensionError> {
        if self.pixels_to_world.is_finite() && self.pixels_to_world > 0.0 {
            Ok(())
        } else {
            Err(DimensionError::Scale(self.pixels_to_world))
        }
    }
}

impl Default for WorldScale {
    fn default() -> Self {
        Self::new(0.05)
    }
}

/// Errors for dimensions that would produce overlapping or inverted stacks.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DimensionError {
    /// Layer height must be strictly positive.
    #[error("layer height must be > 0 (got {0})")]
    Height(f32),
    /// Gap between layers must be non-negative.
    #[error("layer gap must be >= 0 (got {0})")]
    Gap(f32),
    /// Footprint must be strictly positive.
    #[error("layer footprint must be > 0 (got {width} x {depth})")]
    Footprint {
        /// Offending width.
        width: f32,
        /// Offending depth.
        depth: f32,
    },
    /// Label standoff must be finite and non-negative.
    #[error("label standoff must be >= 0 (got {0})")]
    Standoff(f32),
    /// Pixel-to-world factor must be finite and strictly positive.
    #[error("world scale must be > 0 (got {0})")]
    Scale(f32),
}

/// Size of each layer solid and spacing of the stack.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StackDimensions {
    /// Height of one layer solid.
    pub layer_height: f32,
    /// Vertical gap between neighbouring solids.
    pub layer_gap: f32,
    /// Solid extent along X.
    pub layer_width: f32,
    /// Solid extent along Z.
    pub layer_depth: f32,
    /// Distance of a label in front of its solid's front face.
    pub label_standoff: f32,
}

impl Default for StackDimensions {
    fn default() -> Self {
        Self {
            layer_height: 1.0,
            layer_gap: 0.2,
            layer_width: 6.0,
            layer_depth: 4.0,
            label_standoff: 0.1,
        }
    }
}

impl StackDimensions {
    /// Distance between consecutive layer centers.
    pub fn pitch(&self) -> f32 {
        self.layer_height + self.layer_gap
    }

    /// Reject dimensions that cannot describe a non-overlapping stack.
    pub fn validate(&self) -> Result<(), DimensionError> {
        if !(self.layer_height.is_finite() && self.layer_height > 0.0) {
            return Err(DimensionError::Height(self.layer_height));
        }
        if !(self.layer_gap.is_finite() && self.layer_gap >= 0.0) {
            return Err(DimensionError::Gap(self.layer_gap));
        }
        let footprint_ok = self.layer_width.is_finite()
            && self.layer_depth.is_finite()
            && self.layer_width > 0.0
            && self.layer_depth > 0.0;
        if !footprint_ok {
            return Err(DimensionError::Footprint {
                width: self.layer_width,
                depth: self.layer_depth,
            });
        }
        if !(self.label_standoff.is_finite() && self.label_standoff >= 0.0) {
            return Err(DimensionError::Standoff(self.label_standoff));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let dims = StackDimensions::default();
        assert!(dims.validate().is_ok());
        assert!((dims.pitch() - 1.2).abs() < 1e-6);
        assert_eq!(WorldScale::default().pixels_to_world, 0.05);
    }

    #[test]
    fn rejects_degenerate_dimensions() {
        let zero_height = StackDimensions {
            layer_height: 0.0,
            ..Default::default()
        };
        assert_eq!(zero_height.validate(), Err(DimensionError::Height(0.0)));

        let negative_gap = StackDimensions {
            layer_gap: -0.1,
            ..Default::default()
        };
        assert_eq!(negative_gap.validate(), Err(DimensionError::Gap(-0.1)));

        let flat = StackDimensions {
            layer_depth: 0.0,
            ..Default::default()
        };
        assert!(matches!(flat.validate(), Err(DimensionError::Footprint { .. })));

        let nan_standoff = StackDimensions {
            label_standoff: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(nan_standoff.validate(), Err(DimensionError::Standoff(_))));
    }

    #[test]
    fn rejects_unusable_world_scale() {
        assert!(WorldScale::default().validate().is_ok());
        assert_eq!(
            WorldScale::new(-0.05).validate(),
            Err(DimensionError::Scale(-0.05))
        );
        assert_eq!(WorldScale::new(0.0).validate(), Err(DimensionError::Scale(0.0)));
        assert!(matches!(
            WorldScale::new(f32::NAN).validate(),
            Err(DimensionError::Scale(_))
        ));
        assert!(WorldScale::new(f32::INFINITY).validate().is_err());
    }

    #[test]
    fn converts_pixels_to_world_units() {
        let scale = WorldScale::default();
        assert!((scale.to_world(100.0) - 5.0).abs() < 1e-6);
    }
}
