//! Shape geometry and orientation handling
//!
//! This module contains the load-time side of the solver:
//! - Immutable boolean shape grids
//! - Orientation expansion and deduplication
//! - The shape registry shared by every problem

/// Orientation expansion for polyomino shapes
pub mod orientation;
/// Shape registry keyed by shape identifier
pub mod registry;
/// Boolean polyomino grids and their transformations
pub mod shape;

pub use orientation::OrientationSet;
pub use registry::{ShapeId, ShapeRegistry};
pub use shape::Shape;
