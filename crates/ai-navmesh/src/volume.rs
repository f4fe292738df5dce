use crate::surface::constrain_to_face_surface;
use crate::{FaceView, NavMesh, Vec3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How a point relates to the navigable volume of one face.
///
/// The volume is the face polygon swept along its exit walls, with each vertical corner
/// rounded into a post around the vertex up normal. Wall cases name the first edge (in vertex
/// order) whose exit wall the point lies outside of.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum VolumeCase {
    /// Above the face plane and inside every wall.
    Inside,
    /// On or below the face plane; resolved like a surface projection.
    UnderSurface,
    /// Outside this wall and the previous one, at or below the start vertex.
    StartCorner { edge: usize },
    /// Outside this wall and the previous one, `height` up the start vertex's post.
    StartPost { edge: usize, height: f32 },
    /// Outside this wall and the next one, at or below the end vertex.
    EndCorner { edge: usize },
    /// Outside this wall and the next one, `height` up the end vertex's post.
    EndPost { edge: usize, height: f32 },
    /// Outside this wall only, but dropping onto the wall lands under the face plane.
    BelowEdge { edge: usize },
    /// Outside this wall only; `point` is the location dropped onto the wall.
    Wall { edge: usize, point: Vec3 },
}

impl VolumeCase {
    /// The edge whose wall was violated, if any.
    pub fn edge(&self) -> Option<usize> {
        match *self {
            Self::Inside | Self::UnderSurface => None,
            Self::StartCorner { edge }
            | Self::StartPost { edge, .. }
            | Self::EndCorner { edge }
            | Self::EndPost { edge, .. }
            | Self::BelowEdge { edge }
            | Self::Wall { edge, .. } => Some(edge),
        }
    }
}

impl NavMesh {
    /// Project `location` into the navigable volume of `face`.
    ///
    /// Panics if `face >= face_count()`.
    pub fn constrain_to_volume(&self, location: Vec3, face: usize) -> Vec3 {
        let face = self.face(face);
        let case = classify(&face, location);
        resolve(&face, case, location)
    }

    /// Which part of the volume boundary `constrain_to_volume` would snap `location` to.
    ///
    /// Panics if `face >= face_count()`.
    pub fn classify_volume(&self, location: Vec3, face: usize) -> VolumeCase {
        classify(&self.face(face), location)
    }
}

fn classify(face: &FaceView<'_>, location: Vec3) -> VolumeCase {
    if face.signed_distance(location) <= 0.0 {
        return VolumeCase::UnderSurface;
    }

    for edge in 0..face.vertex_count() {
        let start = face.vertex(edge);
        let exit_normal = face.edge_exit_normal(edge);
        let from_start = location - start;
        let outside = from_start.dot(exit_normal);
        if outside <= 0.0 {
            continue;
        }

        let on_wall = location - exit_normal * outside;
        let wall_from_start = on_wall - start;
        let previous = face.previous_index(edge);
        if wall_from_start.dot(face.edge_exit_normal(previous)) > 0.0 {
            let height = from_start.dot(face.vertex_up_normal(edge));
            return if height <= 0.0 {
                VolumeCase::StartCorner { edge }
            } else {
                VolumeCase::StartPost { edge, height }
            };
        }

        let next = face.next_index(edge);
        let end = face.vertex(next);
        if (on_wall - end).dot(face.edge_exit_normal(next)) > 0.0 {
            let height = (location - end).dot(face.vertex_up_normal(next));
            return if height <= 0.0 {
                VolumeCase::EndCorner { edge }
            } else {
                VolumeCase::EndPost { edge, height }
            };
        }

        return if wall_from_start.dot(face.normal()) < 0.0 {
            VolumeCase::BelowEdge { edge }
        } else {
            VolumeCase::Wall {
                edge,
                point: on_wall,
            }
        };
    }

    VolumeCase::Inside
}

fn resolve(face: &FaceView<'_>, case: VolumeCase, location: Vec3) -> Vec3 {
    match case {
        VolumeCase::Inside => location,
        VolumeCase::UnderSurface => constrain_to_face_surface(face, location),
        VolumeCase::StartCorner { edge } => face.vertex(edge),
        VolumeCase::StartPost { edge, height } => {
            face.vertex(edge) + face.vertex_up_normal(edge) * height
        }
        VolumeCase::EndCorner { edge } => face.vertex(face.next_index(edge)),
        VolumeCase::EndPost { edge, height } => {
            let next = face.next_index(edge);
            face.vertex(next) + face.vertex_up_normal(next) * height
        }
        VolumeCase::BelowEdge { edge } => face.clamp_to_edge(edge, location),
        VolumeCase::Wall { point, .. } => point,
    }
}
