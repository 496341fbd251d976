//! One-shot quality summary over a whole mesh.

use hashbrown::HashMap;
use mesh_poly::PolyMesh;

use crate::classify::classify_cells;
use crate::config::QualityConfig;
use crate::error::{QualityError, QualityResult};
use crate::fields::{Metric, MetricStatus, QualityFieldSet};
use crate::shape::CellShape;
use crate::store::{FieldData, MemoryFieldStore};

/// Aggregated quality statistics for one mesh snapshot.
///
/// Produced by [`analyze_quality`], which runs the full field pipeline
/// into an in-memory store and condenses the cached fields.
///
/// # Example
///
/// ```
/// use mesh_poly::cube_and_tet;
/// use mesh_quality::{analyze_quality, CellShape};
///
/// let report = analyze_quality(&cube_and_tet()).unwrap();
/// assert_eq!(report.cell_count, 2);
/// assert_eq!(report.shape_count(CellShape::Hexahedron), 1);
/// assert_eq!(report.shape_count(CellShape::Tetrahedron), 1);
/// ```
#[derive(Debug, Clone)]
pub struct QualityReport {
    /// Number of cells analyzed.
    pub cell_count: usize,

    /// Number of faces analyzed.
    pub face_count: usize,

    /// How many cells fall into each shape family.
    pub shape_counts: HashMap<CellShape, usize>,

    /// Smallest cell volume.
    pub min_volume: f64,

    /// Total mesh volume.
    pub total_volume: f64,

    /// Worst cell non-orthogonality in degrees.
    pub max_non_orthogonality: f64,

    /// Mean cell non-orthogonality in degrees.
    pub mean_non_orthogonality: f64,

    /// Worst cell skewness.
    pub max_skewness: f64,
}

impl QualityReport {
    /// Number of cells classified as the given shape.
    #[must_use]
    pub fn shape_count(&self, shape: CellShape) -> usize {
        self.shape_counts.get(&shape).copied().unwrap_or(0)
    }

    /// Whether every quality measure is within the given limits.
    #[must_use]
    pub fn within_limits(&self, max_non_orthogonality: f64, max_skewness: f64) -> bool {
        self.max_non_orthogonality <= max_non_orthogonality && self.max_skewness <= max_skewness
    }

    /// A one-line human-readable summary.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{} cells ({} hex, {} tet, {} poly), volume {:.6}, \
             max non-orthogonality {:.2} deg, max skewness {:.4}",
            self.cell_count,
            self.shape_count(CellShape::Hexahedron),
            self.shape_count(CellShape::Tetrahedron),
            self.shape_count(CellShape::Polyhedron),
            self.total_volume,
            self.max_non_orthogonality,
            self.max_skewness,
        )
    }
}

/// Run the full quality pipeline over a mesh and summarize the result.
///
/// All six metrics are enabled; the fields are cached in a private
/// in-memory store and reduced to a [`QualityReport`].
///
/// # Errors
///
/// Returns an error if a metric degraded during the compute phase, or if
/// a field the summary depends on was not cached or does not match the
/// mesh's cell count.
pub fn analyze_quality(mesh: &PolyMesh) -> QualityResult<QualityReport> {
    let mut store = MemoryFieldStore::new();
    let mut fields = QualityFieldSet::new(&QualityConfig::all());
    if !fields.execute(mesh, &mut store) {
        for metric in Metric::ALL {
            if fields.status(metric) != MetricStatus::Cached {
                return Err(QualityError::DegradedMetric {
                    name: metric.field_name().to_owned(),
                });
            }
        }
    }

    let volumes = cell_field(&store, Metric::Volume, mesh.cell_count())?;
    let non_ortho = cell_field(&store, Metric::CellNonOrthogonality, mesh.cell_count())?;
    let skewness = cell_field(&store, Metric::CellSkewness, mesh.cell_count())?;

    let mut shape_counts = HashMap::new();
    for shape in classify_cells(mesh) {
        *shape_counts.entry(shape).or_insert(0) += 1;
    }

    #[allow(clippy::cast_precision_loss)]
    let mean_non_orthogonality =
        non_ortho.iter().sum::<f64>() / (mesh.cell_count().max(1) as f64);

    Ok(QualityReport {
        cell_count: mesh.cell_count(),
        face_count: mesh.face_count(),
        shape_counts,
        min_volume: volumes.iter().copied().fold(f64::INFINITY, f64::min),
        total_volume: volumes.iter().sum(),
        max_non_orthogonality: non_ortho.iter().copied().fold(0.0, f64::max),
        mean_non_orthogonality,
        max_skewness: skewness.iter().copied().fold(0.0, f64::max),
    })
}

fn cell_field<'a>(
    store: &'a MemoryFieldStore,
    metric: Metric,
    expected: usize,
) -> QualityResult<&'a [f64]> {
    let name = metric.field_name();
    let data = store.field(name).ok_or_else(|| QualityError::MissingField {
        name: name.to_owned(),
    })?;
    match data {
        FieldData::Cell(values) if values.len() == expected => Ok(values),
        FieldData::Cell(values) => Err(QualityError::FieldSizeMismatch {
            name: name.to_owned(),
            actual: values.len(),
            expected,
        }),
        FieldData::Face(values) => Err(QualityError::FieldSizeMismatch {
            name: name.to_owned(),
            actual: values.len(),
            expected,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use mesh_poly::{cube_and_tet, sheared_cell_pair, unit_cube};

    #[test]
    fn cube_report() {
        let report = analyze_quality(&unit_cube()).unwrap();
        assert_eq!(report.cell_count, 1);
        assert_eq!(report.shape_count(CellShape::Hexahedron), 1);
        assert_relative_eq!(report.total_volume, 1.0, epsilon = 1e-12);
        assert!(report.within_limits(1.0, 0.01));
    }

    #[test]
    fn cube_and_tet_report() {
        let report = analyze_quality(&cube_and_tet()).unwrap();
        assert_eq!(report.cell_count, 2);
        assert_eq!(report.shape_count(CellShape::Hexahedron), 1);
        assert_eq!(report.shape_count(CellShape::Tetrahedron), 1);
        assert_relative_eq!(report.total_volume, 1.0 + 1.0 / 6.0, epsilon = 1e-12);
        assert_relative_eq!(report.min_volume, 1.0 / 6.0, epsilon = 1e-12);
        // The corner tetrahedron is not orthogonal.
        assert!(report.max_non_orthogonality > 1.0);
    }

    #[test]
    fn sheared_mesh_exceeds_tight_limits() {
        let report = analyze_quality(&sheared_cell_pair()).unwrap();
        assert!(!report.within_limits(5.0, 0.05));
        assert!(report.within_limits(90.0, 10.0));
    }

    #[test]
    fn summary_mentions_shape_counts() {
        let report = analyze_quality(&cube_and_tet()).unwrap();
        let text = report.summary();
        assert!(text.contains("2 cells"));
        assert!(text.contains("1 hex"));
        assert!(text.contains("1 tet"));
    }
}
