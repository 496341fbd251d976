//! Geometric quality metrics: non-orthogonality and skewness.
//!
//! Non-orthogonality of a face is the angle in degrees between its area
//! vector and the line joining the centroids of its two adjacent cells
//! (owner centroid to face centre for boundary faces). Skewness measures
//! how far the face centre lies from the point where that centroid line
//! crosses the face, normalized by the centroid distance. Per-cell values
//! are the worst (maximum) over the cell's faces.

use mesh_poly::geometry::{cell_centres_and_volumes, face_centres_and_areas};
use mesh_poly::{Point3, PolyMesh, Vector3};
use rayon::prelude::*;

/// Guards divisions by near-zero lengths and areas.
const SMALL: f64 = 1e-30;

/// Per-cell and per-face quality metrics over one mesh snapshot.
///
/// Construction computes and holds the mesh geometry (face centres/areas,
/// cell centres/volumes); each metric method is then a pure function of
/// that snapshot. The evaluator performs no result caching: callers that
/// need a metric twice are expected to keep the returned field.
///
/// # Example
///
/// ```
/// use mesh_poly::unit_cube;
/// use mesh_quality::QualityEvaluator;
///
/// let cube = unit_cube();
/// let eval = QualityEvaluator::new(&cube);
///
/// assert!((eval.cell_volumes()[0] - 1.0).abs() < 1e-12);
/// // A perfect cube is fully orthogonal.
/// assert!(eval.cell_non_orthogonality()[0].abs() < 1e-9);
/// ```
pub struct QualityEvaluator<'a> {
    mesh: &'a PolyMesh,
    face_centres: Vec<Point3<f64>>,
    face_areas: Vec<Vector3<f64>>,
    cell_centres: Vec<Point3<f64>>,
    cell_volumes: Vec<f64>,
}

impl<'a> QualityEvaluator<'a> {
    /// Compute the geometric support (centres, areas, volumes) for a mesh.
    #[must_use]
    pub fn new(mesh: &'a PolyMesh) -> Self {
        let (face_centres, face_areas) = face_centres_and_areas(mesh);
        let (cell_centres, cell_volumes) =
            cell_centres_and_volumes(mesh, &face_centres, &face_areas);
        Self {
            mesh,
            face_centres,
            face_areas,
            cell_centres,
            cell_volumes,
        }
    }

    /// One volume per cell.
    #[must_use]
    pub fn cell_volumes(&self) -> Vec<f64> {
        self.cell_volumes.clone()
    }

    /// Non-orthogonality angle in degrees, one value per face.
    ///
    /// Internal faces compare the owner-to-neighbour centroid vector with
    /// the face area vector; boundary faces use the owner centroid to the
    /// face centre.
    #[must_use]
    pub fn face_non_orthogonality(&self) -> Vec<f64> {
        (0..self.mesh.face_count())
            .into_par_iter()
            .map(|facei| {
                let d = self.centroid_span(facei);
                let s = self.face_areas[facei];
                angle_between_deg(d, s)
            })
            .collect()
    }

    /// Worst face non-orthogonality per cell, in degrees.
    #[must_use]
    pub fn cell_non_orthogonality(&self) -> Vec<f64> {
        self.max_over_cells(&self.face_non_orthogonality())
    }

    /// Skewness, one value per face.
    ///
    /// For an internal face this is the distance between the face centre
    /// and the point where the owner-neighbour centroid line crosses the
    /// face plane, normalized by the centroid distance. For a boundary face it
    /// is the component of owner-centre-to-face-centre perpendicular to
    /// the face normal, normalized the same way.
    #[must_use]
    pub fn face_skewness(&self) -> Vec<f64> {
        (0..self.mesh.face_count())
            .into_par_iter()
            .map(|facei| {
                let fc = self.face_centres[facei];
                let own = self.cell_centres[self.mesh.face_owner(facei) as usize];

                if let Some(nei) = self.mesh.face_neighbour(facei) {
                    let nei = self.cell_centres[nei as usize];
                    let d = nei - own;
                    let s = self.face_areas[facei];
                    let denom = s.dot(&d);
                    if denom.abs() < SMALL {
                        return 0.0;
                    }
                    // Where the centroid line crosses the face plane.
                    let intersection = own + d * (s.dot(&(fc - own)) / denom);
                    (fc - intersection).norm() / (d.norm() + SMALL)
                } else {
                    let d = fc - own;
                    let s = self.face_areas[facei];
                    let s_mag = s.norm();
                    if s_mag < SMALL {
                        return 0.0;
                    }
                    let normal = s / s_mag;
                    let off_normal = d - d.dot(&normal) * normal;
                    off_normal.norm() / (d.norm() + SMALL)
                }
            })
            .collect()
    }

    /// Worst face skewness per cell.
    #[must_use]
    pub fn cell_skewness(&self) -> Vec<f64> {
        self.max_over_cells(&self.face_skewness())
    }

    /// Vector from the owner centroid towards the other side of the face.
    fn centroid_span(&self, facei: usize) -> Vector3<f64> {
        let own = self.cell_centres[self.mesh.face_owner(facei) as usize];
        match self.mesh.face_neighbour(facei) {
            Some(nei) => self.cell_centres[nei as usize] - own,
            None => self.face_centres[facei] - own,
        }
    }

    /// Reduce a per-face field to the maximum seen by each cell.
    fn max_over_cells(&self, face_field: &[f64]) -> Vec<f64> {
        let mut result = vec![0.0f64; self.mesh.cell_count()];
        for (facei, &value) in face_field.iter().enumerate() {
            let own = self.mesh.face_owner(facei) as usize;
            result[own] = result[own].max(value);
            if let Some(nei) = self.mesh.face_neighbour(facei) {
                let nei = nei as usize;
                result[nei] = result[nei].max(value);
            }
        }
        result
    }
}

/// Angle between two vectors in degrees, clamped against rounding.
fn angle_between_deg(a: Vector3<f64>, b: Vector3<f64>) -> f64 {
    let denom = a.norm() * b.norm();
    if denom < SMALL {
        return 0.0;
    }
    let cos = (a.dot(&b) / denom).clamp(-1.0, 1.0);
    cos.acos().to_degrees()
}
