use crate::{FaceView, NavMesh, Vec3};

impl NavMesh {
    /// Project `location` onto the plane of `face` and clamp it inside the polygon.
    ///
    /// Only the first edge (in vertex order) that the projected point lies outside of is
    /// corrected; points are assumed to violate at most one edge's half-plane.
    ///
    /// Panics if `face >= face_count()`.
    pub fn constrain_to_surface(&self, location: Vec3, face: usize) -> Vec3 {
        constrain_to_face_surface(&self.face(face), location)
    }

    /// Index of the face whose surface-constrained projection of `location` is nearest.
    ///
    /// Exact ties go to the later face. Returns `None` for a mesh without faces.
    pub fn closest_face(&self, location: Vec3) -> Option<usize> {
        let mut best = None;
        let mut best_distance_squared = f32::INFINITY;

        for face in self.faces() {
            let constrained = constrain_to_face_surface(&face, location);
            let distance_squared = location.distance_squared(constrained);
            if distance_squared <= best_distance_squared {
                best = Some(face.index());
                best_distance_squared = distance_squared;
            }
        }

        tracing::trace!(face = ?best, distance_squared = best_distance_squared, "closest face");
        best
    }
}

pub(crate) fn constrain_to_face_surface(face: &FaceView<'_>, location: Vec3) -> Vec3 {
    let distance = face.signed_distance(location);
    let on_plane = location - face.normal() * distance;
    clamp_in_plane(face, on_plane)
}

/// Clamp a point already on the face plane against the first edge it lies outside of.
pub(crate) fn clamp_in_plane(face: &FaceView<'_>, on_plane: Vec3) -> Vec3 {
    for i in 0..face.vertex_count() {
        let outside = (on_plane - face.vertex(i)).dot(face.edge_normal(i));
        if outside > 0.0 {
            return face.clamp_to_edge(i, on_plane);
        }
    }
    on_plane
}
