//! 2D convex hull extraction for collider outlines.
//!
//! Purpose
//! - Turn an unordered 2D point cloud (e.g. sampled sprite outline vertices)
//!   into the ordered vertex loop of its convex hull, ready to hand to a
//!   polygon-collider consumer.
//!
//! Why gift wrapping
//! - O(n·h) with a single, explicit orientation predicate; easy to make
//!   deterministic and to bound (sweep cap instead of an open-ended loop).
//! - Colinear grouping keeps edge-interior samples as explicit vertices in
//!   distance order, which downstream boundary builders tolerate fine.
//!
//! Numerics
//! - All epsilon use is centralized in `HullCfg`; vertex identity (duplicate
//!   suppression, termination) is exact coordinate equality, never epsilon.

mod engine;
mod types;

pub mod rand;
pub mod util;

pub use engine::{compute_hull, compute_hull_with_defaults, Hull};
pub use types::{HullCfg, HullError};

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::rand::{draw_point_cloud, PointCount, ReplayToken, ScatterCfg};
    pub use crate::util::{contains_point_eps, ensure_ccw, point_edge_relation, signed_area};
    pub use crate::{compute_hull, compute_hull_with_defaults, Hull, HullCfg, HullError};
    pub use nalgebra::Vector2 as Vec2;
}
