//! Polyhedral volume mesh types and geometry.
//!
//! This crate provides the foundational types for unstructured volume
//! mesh analysis:
//!
//! - [`PolyMesh`] - An owner/neighbour polyhedral mesh (points, faces as
//!   vertex loops, per-face owner and optional neighbour cell)
//! - [`geometry`] - Face centres/areas and cell centres/volumes by
//!   fan/pyramid decomposition
//! - Canonical single-cell primitives ([`unit_cube`], [`unit_tetrahedron`],
//!   [`square_pyramid`], ...) for tests and reference topologies
//!
//! # Units
//!
//! This library is **unit-agnostic**. All coordinates are `f64`.
//!
//! # Orientation
//!
//! Face vertex loops are ordered so the face area vector (right-hand rule)
//! points **out of the owner cell**. Internal faces point from owner to
//! neighbour.
//!
//! # Example
//!
//! ```
//! use mesh_poly::{geometry, unit_cube};
//!
//! let cube = unit_cube();
//! let (face_centres, face_areas) = geometry::face_centres_and_areas(&cube);
//! let (_, volumes) = geometry::cell_centres_and_volumes(&cube, &face_centres, &face_areas);
//!
//! assert!((volumes[0] - 1.0).abs() < 1e-12);
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
pub mod geometry;
mod mesh;
mod primitives;

pub use error::{MeshError, MeshResult};
pub use mesh::PolyMesh;
pub use primitives::{
    cube_and_tet, hexagonal_prism, sheared_cell_pair, square_pyramid, tet_wedge,
    triangular_prism, unit_cube, unit_tetrahedron, wedge,
};

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
