//! Vertical stacking of layer solids.
//!
//! Layers share one footprint centered on the Y axis. Index 0 sits at the
//! bottom, each next layer one `height + gap` higher, and the stack as a whole
//! is centered on the origin:
//!
//! ```text
//! total_height = n * (h + g) - g
//! bottom_y     = -total_height / 2
//! center_y(i)  = bottom_y + i * (h + g) + h / 2
//! ```

use glam::Vec3;
use layerstack_core::{StackDimensions, WorldScale};

/// Where one layer's solid and label go.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerPlacement {
    /// Stack index (0 = bottom).
    pub index: usize,
    /// Center of the layer solid.
    pub center: Vec3,
    /// Center of the label billboard, in front of the solid's +Z face.
    pub label_position: Vec3,
}

/// Pure placement math for a stack of identically sized layers.
///
/// Carries the pixel-to-world factor as well, so labels placed on the stack
/// are sized in the same world units the stack is laid out in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StackLayout {
    dims: StackDimensions,
    scale: WorldScale,
}

impl StackLayout {
    pub fn new(dims: StackDimensions, scale: WorldScale) -> Self {
        Self { dims, scale }
    }

    pub fn dims(&self) -> &StackDimensions {
        &self.dims
    }

    /// World units per label pixel.
    pub fn scale(&self) -> WorldScale {
        self.scale
    }

    /// Height from the bottom face of layer 0 to the top face of layer `n - 1`.
    ///
    /// For `n == 0` this is `-gap`; callers must not draw anything for an empty stack.
    pub fn total_height(&self, n: usize) -> f32 {
        n as f32 * self.dims.pitch() - self.dims.layer_gap
    }

    /// Y of the bottom face of layer 0.
    pub fn bottom_y(&self, n: usize) -> f32 {
        -self.total_height(n) / 2.0
    }

    /// Y of the center of layer `index` in a stack of `n`, `None` when out of range.
    pub fn center_y(&self, n: usize, index: usize) -> Option<f32> {
        (index < n).then(|| {
            self.bottom_y(n) + index as f32 * self.dims.pitch() + self.dims.layer_height / 2.0
        })
    }

    /// Placement of layer `index` in a stack of `n`.
    pub fn placement(&self, n: usize, index: usize) -> Option<LayerPlacement> {
        let y = self.center_y(n, index)?;
        Some(LayerPlacement {
            index,
            center: Vec3::new(0.0, y, 0.0),
            label_position: Vec3::new(0.0, y, self.label_z()),
        })
    }

    /// Placements for every layer, bottom first; empty for `n == 0`.
    pub fn placements(&self, n: usize) -> Vec<LayerPlacement> {
        (0..n).filter_map(|i| self.placement(n, i)).collect()
    }

    /// Label Z: front face of the solid plus the standoff.
    pub fn label_z(&self) -> f32 {
        self.dims.layer_depth / 2.0 + self.dims.label_standoff
    }

    /// Size of every layer solid.
    pub fn solid_size(&self) -> Vec3 {
        Vec3::new(
            self.dims.layer_width,
            self.dims.layer_height,
            self.dims.layer_depth,
        )
    }

    /// Bottom and top Y of the occupied stack, `None` when empty.
    pub fn extent(&self, n: usize) -> Option<(f32, f32)> {
        (n > 0).then(|| {
            let bottom = self.bottom_y(n);
            (bottom, bottom + self.total_height(n))
        })
    }

    /// Camera eye height used when framing a stack of `n` layers.
    pub fn camera_height(&self, n: usize) -> f32 {
        n as f32 * self.dims.pitch() / 4.0
    }
}

impl Default for StackLayout {
    fn default() -> Self {
        Self::new(StackDimensions::default(), WorldScale::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn three_layer_centers() {
        let layout = StackLayout::default();
        assert!((layout.total_height(3) - 3.4).abs() < EPS);
        assert!((layout.bottom_y(3) + 1.7).abs() < EPS);
        assert!((layout.center_y(3, 0).unwrap() + 1.2).abs() < EPS);
        assert!(layout.center_y(3, 1).unwrap().abs() < EPS);
        assert!((layout.center_y(3, 2).unwrap() - 1.2).abs() < EPS);
        assert_eq!(layout.center_y(3, 3), None);
    }

    #[test]
    fn empty_stack_has_no_placements() {
        let layout = StackLayout::default();
        assert!((layout.total_height(0) + 0.2).abs() < EPS);
        assert!(layout.placements(0).is_empty());
        assert_eq!(layout.center_y(0, 0), None);
        assert_eq!(layout.extent(0), None);
    }

    #[test]
    fn single_layer_is_centered_on_origin() {
        let layout = StackLayout::default();
        assert!(layout.center_y(1, 0).unwrap().abs() < EPS);
        let (bottom, top) = layout.extent(1).unwrap();
        assert!((bottom + 0.5).abs() < EPS && (top - 0.5).abs() < EPS);
    }

    #[test]
    fn labels_sit_in_front_of_solids() {
        let layout = StackLayout::default();
        let placement = layout.placement(7, 6).unwrap();
        assert_eq!(placement.label_position.x, placement.center.x);
        assert_eq!(placement.label_position.y, placement.center.y);
        assert!((placement.label_position.z - 2.1).abs() < EPS);
        assert_eq!(placement.center.z, 0.0);
    }

    #[test]
    fn carries_the_world_scale() {
        assert_eq!(StackLayout::default().scale(), WorldScale::new(0.05));
        let layout = StackLayout::new(StackDimensions::default(), WorldScale::new(0.02));
        assert_eq!(layout.scale().to_world(50.0), 1.0);
    }

    #[test]
    fn camera_height_matches_stack_size() {
        let layout = StackLayout::default();
        assert!((layout.camera_height(7) - 2.1).abs() < EPS);
    }
}
