//! Navigation mesh kernels: locate the closest face to a point, project points onto a face's
//! surface or into its navigable volume, and resolve one step of sliding collision.
//!
//! All queries run against an immutable [`NavMesh`] built from a flattened
//! [`NavMeshLayout`]. Building that layout (normals, coefficients, adjacency) is left to the
//! caller.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod collision;
pub mod error;
pub mod math;
pub mod mesh;
mod surface;
pub mod volume;

pub use collision::{CollisionConfig, SlidingCollision, SlidingOutcome, COLLISION_TOLERANCE};
pub use error::{NavMeshError, Result};
pub use math::Vec3;
pub use mesh::{FaceView, NavMesh, NavMeshLayout};
pub use volume::VolumeCase;
