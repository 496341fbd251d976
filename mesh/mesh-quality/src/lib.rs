//! Per-cell and per-face quality diagnostics for polyhedral volume meshes.
//!
//! This crate measures an unstructured volume mesh and reports the results
//! as named scalar fields:
//!
//! - **Cell volume** (`meshVolume`)
//! - **Cell shape classification** (`meshCellType`): each cell is matched
//!   against the canonical topologies (hexahedron, tetrahedron, pyramid,
//!   prism, wedge, tet wedge) in a fixed priority cascade, falling back to
//!   a general polyhedron code
//! - **Non-orthogonality** per cell and per face
//!   (`meshCellNonOrthogonality`, `meshFaceNonOrthogonality`)
//! - **Skewness** per cell and per face (`meshCellSkewness`,
//!   `meshFaceSkewness`)
//!
//! Measurement only: the mesh is read, never repaired or modified.
//!
//! # Pipeline
//!
//! [`QualityFieldSet`] drives one invocation cycle per analysis step:
//! [`execute`](QualityFieldSet::execute) computes every enabled metric and
//! caches it in a [`FieldStore`]; a later, independent
//! [`write`](QualityFieldSet::write) persists whatever was cached. Each
//! metric succeeds or degrades on its own, and both phases report the AND
//! over the requested metrics.
//!
//! # Example
//!
//! ```
//! use mesh_poly::cube_and_tet;
//! use mesh_quality::{MemoryFieldStore, QualityConfig, QualityFieldSet};
//!
//! let mesh = cube_and_tet();
//! let mut store = MemoryFieldStore::new();
//! let mut fields = QualityFieldSet::new(&QualityConfig::default());
//!
//! assert!(fields.execute(&mesh, &mut store));
//! assert!(fields.write(&mut store));
//!
//! // Cube first, tetrahedron second.
//! let types = store.field("meshCellType").unwrap();
//! assert_eq!(types.values(), &[0.0, 1.0]);
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod classify;
mod config;
mod error;
mod evaluate;
mod fields;
mod matchers;
mod report;
mod shape;
mod store;

pub use classify::{classify_cell, classify_cells, matcher_cascade};
pub use config::QualityConfig;
pub use error::{QualityError, QualityResult};
pub use evaluate::QualityEvaluator;
pub use fields::{Metric, MetricStatus, QualityFieldSet};
pub use matchers::{
    HexMatcher, PrismMatcher, PyramidMatcher, ShapeMatcher, TetMatcher, TetWedgeMatcher,
    WedgeMatcher,
};
pub use report::{analyze_quality, QualityReport};
pub use shape::CellShape;
pub use store::{FieldData, FieldStore, MemoryFieldStore};
