use crate::{NavMesh, Vec3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Distance by which crossing planes are shifted when computing contact parameters.
///
/// Walls are pulled inward and the surface is lifted, so a sticky point never lands exactly on
/// the plane it stopped against and the next step does not collide with it again. Edge passes
/// use the opposite shift to place the crossing just beyond the shared edge.
pub const COLLISION_TOLERANCE: f32 = 0.0001;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CollisionConfig {
    /// See [`COLLISION_TOLERANCE`].
    pub tolerance: f32,
}

impl Default for CollisionConfig {
    fn default() -> Self {
        Self {
            tolerance: COLLISION_TOLERANCE,
        }
    }
}

/// Which boundary of the face a motion segment ran into first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SlidingOutcome {
    /// The segment stays within the face's volume.
    None,
    /// The segment goes through the face surface.
    Surface,
    /// The segment hits the wall of a boundary edge (no neighboring face).
    Edge(usize),
    /// The segment crosses a shared edge; continue against the neighboring face.
    EdgePass(usize),
}

/// Result of one iteration of sliding collision.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SlidingCollision {
    pub outcome: SlidingOutcome,
    /// Where the motion stopped ("sticky"): `from` when nothing was hit, the contact point for
    /// surface/edge hits, or the point the motion crossed into the neighbor for edge passes.
    pub result_from: Vec3,
    /// Where the motion continues to ("sliding"): `to` pushed back onto the contacted plane for
    /// surface/edge hits (which may lie outside the face), otherwise `to` unchanged.
    pub result_to: Vec3,
}

#[derive(Debug, Clone, Copy)]
struct Crossing {
    outcome: SlidingOutcome,
    along: f32,
    normal: Vec3,
    /// Distance along `normal` for surface/edge hits, segment parameter for edge passes.
    escape: f32,
}

impl NavMesh {
    /// One iteration of sliding collision within `face` using the default [`CollisionConfig`].
    ///
    /// `from` must lie within the face's volume.
    ///
    /// Panics if `face >= face_count()`.
    pub fn sliding_collision(&self, from: Vec3, face: usize, to: Vec3) -> SlidingCollision {
        self.sliding_collision_with(&CollisionConfig::default(), from, face, to)
    }

    /// One iteration of sliding collision within `face`.
    ///
    /// Candidates are the surface, then each edge in vertex order; a later candidate replaces
    /// the current one when it is hit at the same point along the segment or earlier.
    pub fn sliding_collision_with(
        &self,
        config: &CollisionConfig,
        from: Vec3,
        face: usize,
        to: Vec3,
    ) -> SlidingCollision {
        let face = self.face(face);
        let tolerance = config.tolerance;
        let mut best: Option<Crossing> = None;

        let to_surface = face.signed_distance(to);
        if to_surface < 0.0 {
            let from_surface = face.signed_distance(from);
            if from_surface >= 0.0 {
                let adjusted_from = from_surface - tolerance;
                let adjusted_to = to_surface - tolerance;
                best = Some(Crossing {
                    outcome: SlidingOutcome::Surface,
                    along: adjusted_from / (adjusted_from - adjusted_to),
                    normal: face.normal(),
                    escape: -adjusted_to,
                });
            }
        }

        for edge in 0..face.vertex_count() {
            let start = face.vertex(edge);
            let exit_normal = face.edge_exit_normal(edge);

            let to_edge = (to - start).dot(exit_normal);
            if to_edge <= 0.0 {
                continue;
            }
            let from_edge = (from - start).dot(exit_normal);
            if from_edge > 0.0 {
                continue;
            }

            let adjusted_from = from_edge + tolerance;
            let adjusted_to = to_edge + tolerance;
            let along = adjusted_from / (adjusted_from - adjusted_to);
            let best_along = best.map_or(f32::INFINITY, |b| b.along);
            if !(along <= best_along) {
                continue;
            }

            best = Some(if face.edge_neighbor_count(edge) == 0 {
                Crossing {
                    outcome: SlidingOutcome::Edge(edge),
                    along,
                    normal: exit_normal,
                    escape: -adjusted_to,
                }
            } else {
                let crossing_from = from_edge - tolerance;
                let crossing_to = to_edge - tolerance;
                Crossing {
                    outcome: SlidingOutcome::EdgePass(edge),
                    along,
                    normal: Vec3::ZERO,
                    escape: crossing_from / (crossing_from - crossing_to),
                }
            });
        }

        let result = match best {
            None => SlidingCollision {
                outcome: SlidingOutcome::None,
                result_from: from,
                result_to: to,
            },
            Some(c) => match c.outcome {
                SlidingOutcome::EdgePass(_) => SlidingCollision {
                    outcome: c.outcome,
                    result_from: from.lerp(to, c.escape.clamp(0.0, 1.0)),
                    result_to: to,
                },
                _ => SlidingCollision {
                    outcome: c.outcome,
                    result_from: from.lerp(to, c.along.clamp(0.0, 1.0)),
                    result_to: to + c.normal * c.escape,
                },
            },
        };

        tracing::trace!(face = face.index(), outcome = ?result.outcome, "sliding collision");
        result
    }
}
