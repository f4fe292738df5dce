use thiserror::Error;

/// Reasons a [`NavMeshLayout`](crate::NavMeshLayout) is rejected by validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavMeshError {
    #[error("face {face} has {count} vertices; at least 3 are required")]
    FaceTooSmall { face: usize, count: usize },

    #[error("face {face} starts at vertex offset {actual}, expected {expected}")]
    OffsetMismatch {
        face: usize,
        expected: usize,
        actual: usize,
    },

    #[error("per-face array `{array}` has {actual} entries, expected {expected}")]
    FaceArrayLength {
        array: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("per-vertex array `{array}` has {actual} entries, expected {expected}")]
    VertexArrayLength {
        array: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("`{array}[{index}]` has a NaN or infinite component")]
    NonFinite { array: &'static str, index: usize },
}

pub type Result<T> = std::result::Result<T, NavMeshError>;
