//! Property-based tests for stack placement
//!
//! Validates stack invariants:
//! - Neighbouring layer centers are exactly one pitch apart
//! - The occupied stack is centered on the origin for any layer count
//! - Solids never overlap
//! - An empty stack yields no placements

use layerstack_core::{StackDimensions, WorldScale};
use layerstack_ui3d::StackLayout;
use proptest::prelude::*;

fn layout(h: f32, g: f32) -> StackLayout {
    let dims = StackDimensions {
        layer_height: h,
        layer_gap: g,
        ..Default::default()
    };
    StackLayout::new(dims, WorldScale::default())
}

fn tolerance(n: usize, h: f32, g: f32) -> f32 {
    // Error grows with the magnitude of the coordinates involved.
    1e-4 * (1.0 + n as f32 * (h + g))
}

proptest! {
    /// Property: Adjacent centers differ by exactly height + gap
    #[test]
    fn centers_are_one_pitch_apart(
        n in 2usize..64,
        h in 0.01f32..10.0,
        g in 0.0f32..5.0,
    ) {
        let layout = layout(h, g);
        let eps = tolerance(n, h, g);
        for i in 0..n - 1 {
            let lower = layout.center_y(n, i).unwrap();
            let upper = layout.center_y(n, i + 1).unwrap();
            prop_assert!(
                ((upper - lower) - (h + g)).abs() < eps,
                "layers {} and {} are {} apart, expected {}",
                i, i + 1, upper - lower, h + g
            );
        }
    }

    /// Property: The stack is vertically centered on the origin
    #[test]
    fn stack_is_origin_centered(
        n in 1usize..64,
        h in 0.01f32..10.0,
        g in 0.0f32..5.0,
    ) {
        let layout = layout(h, g);
        let placements = layout.placements(n);
        prop_assert_eq!(placements.len(), n);

        let min = placements.iter().map(|p| p.center.y).fold(f32::INFINITY, f32::min);
        let max = placements.iter().map(|p| p.center.y).fold(f32::NEG_INFINITY, f32::max);
        prop_assert!(((min + max) / 2.0).abs() < tolerance(n, h, g));
        prop_assert_eq!(placements[0].center.y, min);
    }

    /// Property: Solids do not overlap
    #[test]
    fn solids_never_overlap(
        n in 2usize..32,
        h in 0.01f32..10.0,
        g in 0.0f32..5.0,
    ) {
        let layout = layout(h, g);
        let eps = tolerance(n, h, g);
        let placements = layout.placements(n);
        for pair in placements.windows(2) {
            let top_of_lower = pair[0].center.y + h / 2.0;
            let bottom_of_upper = pair[1].center.y - h / 2.0;
            prop_assert!(bottom_of_upper - top_of_lower > g - eps);
        }
    }

    /// Property: Placement is pure - same inputs give the same placements
    #[test]
    fn placement_is_deterministic(
        n in 0usize..32,
        h in 0.01f32..10.0,
        g in 0.0f32..5.0,
    ) {
        let layout = layout(h, g);
        prop_assert_eq!(layout.placements(n), layout.placements(n));
    }
}

#[test]
fn zero_layers_yield_no_placements() {
    let layout = layout(1.0, 0.2);
    assert!(layout.placements(0).is_empty());
    // The raw formula goes negative; nothing may be built from it.
    assert!(layout.total_height(0) < 0.0);
    assert_eq!(layout.extent(0), None);
}

#[test]
fn reference_three_layer_stack() {
    let layout = layout(1.0, 0.2);
    let ys: Vec<f32> = layout.placements(3).iter().map(|p| p.center.y).collect();
    let expected = [-1.2, 0.0, 1.2];
    for (y, e) in ys.iter().zip(expected) {
        assert!((y - e).abs() < 1e-5, "{ys:?}");
    }
}
