//! 2D geometry kernel
//!
//! Pure, stateless math primitives for the race plane:
//! - `Point`: integer lattice positions
//! - `Vector`: anchored displacements with exact direction math
//! - `Circle`: collision areas
//! - `Angle`: turn deviation between consecutive legs of travel
//!
//! Coordinates are `i64`; float work happens on `glam::DVec2` and rounds
//! back to the lattice at well-defined points only.

pub mod angle;
pub mod circle;
pub mod point;
pub mod vector;

pub use angle::Angle;
pub use circle::Circle;
pub use point::Point;
pub use vector::Vector;
