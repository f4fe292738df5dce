use crate::{NavMeshError, Result, Vec3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Flattened navigation mesh data, as handed over by a mesh builder.
///
/// Faces own their vertices: a vertex shared by two faces appears once in each face's range.
/// Face `f` occupies the half-open range
/// `face_vertex_offsets[f]..face_vertex_offsets[f] + face_vertex_counts[f]` of every per-vertex
/// array. Edge `i` of a face runs from vertex `i` to vertex `(i + 1) % count`, so per-edge data
/// is stored in the slot of its start vertex.
///
/// All normals are expected to be unit length. That is the builder's job and is never checked.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NavMeshLayout {
    pub face_vertex_counts: Vec<usize>,
    /// Exclusive running totals of `face_vertex_counts` (counts `3, 5, 4` give `0, 3, 8`).
    pub face_vertex_offsets: Vec<usize>,
    pub face_normals: Vec<Vec3>,
    pub vertex_positions: Vec<Vec3>,
    /// In-plane, perpendicular to the edge, pointing away from the face.
    pub edge_normals: Vec<Vec3>,
    /// Perpendicular to the edge, pointing away from the face. In-plane on boundary edges;
    /// shared edges carry the same averaged vector on every face that touches them.
    pub edge_exit_normals: Vec<Vec3>,
    /// Points along the edge with magnitude `1 / edge length`.
    pub edge_coefficients: Vec<Vec3>,
    /// Perpendicular to the exit normals either side of the vertex, facing the face normal.
    pub vertex_up_normals: Vec<Vec3>,
    /// Number of other faces sharing each edge; `0` is a boundary wall.
    pub edge_neighbor_counts: Vec<u32>,
}

impl NavMeshLayout {
    pub fn face_count(&self) -> usize {
        self.face_vertex_counts.len()
    }

    /// Check the structural contract of the layout and freeze it into a [`NavMesh`].
    ///
    /// This is the only fallible step; the queries on [`NavMesh`] trust what passed here.
    pub fn validate(self) -> Result<NavMesh> {
        match self.check() {
            Ok(vertex_count) => {
                tracing::debug!(
                    faces = self.face_count(),
                    vertices = vertex_count,
                    "validated navmesh layout"
                );
                Ok(NavMesh { layout: self })
            }
            Err(err) => {
                tracing::warn!(error = %err, "rejected navmesh layout");
                Err(err)
            }
        }
    }

    fn check(&self) -> Result<usize> {
        let faces = self.face_count();
        check_len("face_vertex_offsets", faces, self.face_vertex_offsets.len(), true)?;
        check_len("face_normals", faces, self.face_normals.len(), true)?;

        let mut running = 0usize;
        for (face, (&count, &offset)) in self
            .face_vertex_counts
            .iter()
            .zip(&self.face_vertex_offsets)
            .enumerate()
        {
            if count < 3 {
                return Err(NavMeshError::FaceTooSmall { face, count });
            }
            if offset != running {
                return Err(NavMeshError::OffsetMismatch {
                    face,
                    expected: running,
                    actual: offset,
                });
            }
            running += count;
        }

        check_len("vertex_positions", running, self.vertex_positions.len(), false)?;
        check_len("edge_normals", running, self.edge_normals.len(), false)?;
        check_len("edge_exit_normals", running, self.edge_exit_normals.len(), false)?;
        check_len("edge_coefficients", running, self.edge_coefficients.len(), false)?;
        check_len("vertex_up_normals", running, self.vertex_up_normals.len(), false)?;
        check_len(
            "edge_neighbor_counts",
            running,
            self.edge_neighbor_counts.len(),
            false,
        )?;

        check_finite("face_normals", &self.face_normals)?;
        check_finite("vertex_positions", &self.vertex_positions)?;
        check_finite("edge_normals", &self.edge_normals)?;
        check_finite("edge_exit_normals", &self.edge_exit_normals)?;
        check_finite("edge_coefficients", &self.edge_coefficients)?;
        check_finite("vertex_up_normals", &self.vertex_up_normals)?;

        Ok(running)
    }
}

fn check_len(array: &'static str, expected: usize, actual: usize, per_face: bool) -> Result<()> {
    if expected == actual {
        return Ok(());
    }
    Err(if per_face {
        NavMeshError::FaceArrayLength {
            array,
            expected,
            actual,
        }
    } else {
        NavMeshError::VertexArrayLength {
            array,
            expected,
            actual,
        }
    })
}

fn check_finite(array: &'static str, values: &[Vec3]) -> Result<()> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(NavMeshError::NonFinite { array, index }),
        None => Ok(()),
    }
}

/// A validated, immutable navigation mesh.
///
/// Queries take `&self` and never allocate, so one mesh can be shared across threads freely.
#[derive(Debug, Clone, PartialEq)]
pub struct NavMesh {
    layout: NavMeshLayout,
}

impl NavMesh {
    pub fn face_count(&self) -> usize {
        self.layout.face_count()
    }

    pub fn layout(&self) -> &NavMeshLayout {
        &self.layout
    }

    pub fn into_layout(self) -> NavMeshLayout {
        self.layout
    }

    /// Borrow one face's slice of the layout.
    ///
    /// Panics if `index >= face_count()`.
    pub fn face(&self, index: usize) -> FaceView<'_> {
        let l = &self.layout;
        let count = l.face_vertex_counts[index];
        let start = l.face_vertex_offsets[index];
        let range = start..start + count;
        FaceView {
            index,
            normal: l.face_normals[index],
            vertices: &l.vertex_positions[range.clone()],
            edge_normals: &l.edge_normals[range.clone()],
            edge_exit_normals: &l.edge_exit_normals[range.clone()],
            edge_coefficients: &l.edge_coefficients[range.clone()],
            vertex_up_normals: &l.vertex_up_normals[range.clone()],
            edge_neighbor_counts: &l.edge_neighbor_counts[range],
        }
    }

    pub fn faces(&self) -> impl Iterator<Item = FaceView<'_>> + '_ {
        (0..self.face_count()).map(move |i| self.face(i))
    }
}

impl TryFrom<NavMeshLayout> for NavMesh {
    type Error = NavMeshError;

    fn try_from(layout: NavMeshLayout) -> Result<Self> {
        layout.validate()
    }
}

/// One face of a [`NavMesh`]: its normal plus its range of every per-vertex array.
///
/// Local vertex/edge indices run `0..vertex_count()`.
#[derive(Debug, Clone, Copy)]
pub struct FaceView<'a> {
    index: usize,
    normal: Vec3,
    vertices: &'a [Vec3],
    edge_normals: &'a [Vec3],
    edge_exit_normals: &'a [Vec3],
    edge_coefficients: &'a [Vec3],
    vertex_up_normals: &'a [Vec3],
    edge_neighbor_counts: &'a [u32],
}

impl<'a> FaceView<'a> {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn vertices(&self) -> &'a [Vec3] {
        self.vertices
    }

    pub fn vertex(&self, i: usize) -> Vec3 {
        self.vertices[i]
    }

    pub fn next_index(&self, i: usize) -> usize {
        (i + 1) % self.vertices.len()
    }

    pub fn previous_index(&self, i: usize) -> usize {
        if i == 0 {
            self.vertices.len() - 1
        } else {
            i - 1
        }
    }

    pub fn edge_normal(&self, i: usize) -> Vec3 {
        self.edge_normals[i]
    }

    pub fn edge_exit_normal(&self, i: usize) -> Vec3 {
        self.edge_exit_normals[i]
    }

    pub fn edge_coefficient(&self, i: usize) -> Vec3 {
        self.edge_coefficients[i]
    }

    pub fn vertex_up_normal(&self, i: usize) -> Vec3 {
        self.vertex_up_normals[i]
    }

    pub fn edge_neighbor_count(&self, i: usize) -> u32 {
        self.edge_neighbor_counts[i]
    }

    /// Distance of `p` above the face plane, measured from vertex 0 along the face normal.
    pub fn signed_distance(&self, p: Vec3) -> f32 {
        (p - self.vertices[0]).dot(self.normal)
    }

    /// Clamp a point onto edge `i` using its coefficient: `t <= 0` snaps to the start vertex,
    /// `t >= 1` to the end vertex.
    pub(crate) fn clamp_to_edge(&self, i: usize, p: Vec3) -> Vec3 {
        let start = self.vertices[i];
        let t = (p - start).dot(self.edge_coefficients[i]);
        if t <= 0.0 {
            return start;
        }
        let end = self.vertices[self.next_index(i)];
        if t >= 1.0 {
            return end;
        }
        start.lerp(end, t)
    }
}

#[cfg(feature = "serde")]
impl Serialize for NavMesh {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.layout.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for NavMesh {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let layout = NavMeshLayout::deserialize(deserializer)?;
        layout.validate().map_err(serde::de::Error::custom)
    }
}
