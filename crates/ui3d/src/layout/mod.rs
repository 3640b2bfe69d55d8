//! World-space layout of the layer stack.

pub mod stack;

pub use stack::{LayerPlacement, StackLayout};
