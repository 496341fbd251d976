//! Error types for mesh construction.

use thiserror::Error;

/// Result type for mesh operations.
pub type MeshResult<T> = Result<T, MeshError>;

/// Errors that can occur when constructing a polyhedral mesh.
#[derive(Debug, Error)]
pub enum MeshError {
    /// Mesh has no faces.
    #[error("Mesh has no faces")]
    NoFaces,

    /// Owner/neighbour lists do not match the face list length.
    #[error("Face addressing mismatch: {faces} faces, {owners} owners, {neighbours} neighbours")]
    AddressingMismatch {
        /// Number of faces.
        faces: usize,
        /// Number of owner entries.
        owners: usize,
        /// Number of neighbour entries.
        neighbours: usize,
    },

    /// A face references a point that does not exist.
    #[error("Face {face} references point {point}, but the mesh has {points} points")]
    PointOutOfRange {
        /// Offending face index.
        face: usize,
        /// Offending point index.
        point: u32,
        /// Number of points in the mesh.
        points: usize,
    },

    /// A face has fewer than three vertices.
    #[error("Face {face} has {vertices} vertices; at least 3 are required")]
    DegenerateFace {
        /// Offending face index.
        face: usize,
        /// Number of vertices on the face.
        vertices: usize,
    },

    /// A face lists the same cell as both owner and neighbour.
    #[error("Face {face} has cell {cell} as both owner and neighbour")]
    SelfNeighbour {
        /// Offending face index.
        face: usize,
        /// The duplicated cell index.
        cell: u32,
    },

    /// A cell index in the owner/neighbour lists has no faces at all.
    #[error("Cell {cell} is referenced but owns no faces")]
    EmptyCell {
        /// Offending cell index.
        cell: u32,
    },
}
