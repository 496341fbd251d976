//! Owner/neighbour polyhedral volume mesh.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{MeshError, MeshResult};

/// An unstructured polyhedral volume mesh in owner/neighbour form.
///
/// Faces are stored once, as ordered vertex loops. Every face belongs to
/// exactly one cell (its *owner*) or two cells (owner plus *neighbour*).
/// Faces with a neighbour are *internal*; faces without one lie on the
/// boundary. Per-cell face lists are derived at construction time.
///
/// # Orientation
///
/// Each face's vertex loop is ordered so that its area vector (right-hand
/// rule over the loop) points **out of the owner cell**, i.e. from owner
/// towards neighbour for internal faces and out of the mesh for boundary
/// faces.
///
/// # Example
///
/// ```
/// use mesh_poly::unit_cube;
///
/// let cube = unit_cube();
/// assert_eq!(cube.cell_count(), 1);
/// assert_eq!(cube.face_count(), 6);
/// assert_eq!(cube.internal_face_count(), 0);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PolyMesh {
    points: Vec<Point3<f64>>,
    faces: Vec<Vec<u32>>,
    owner: Vec<u32>,
    neighbour: Vec<Option<u32>>,
    cell_faces: Vec<Vec<u32>>,
}

impl PolyMesh {
    /// Build a mesh from points, face vertex loops, and face ownership.
    ///
    /// `neighbour[i]` is `Some(cell)` for internal faces and `None` for
    /// boundary faces. Per-cell face lists are derived from the owner and
    /// neighbour lists; the number of cells is one past the largest cell
    /// index that appears in them.
    ///
    /// # Errors
    ///
    /// Returns an error if the face list is empty, the owner/neighbour
    /// lists do not match it in length, a face has fewer than three
    /// vertices or references a missing point, a face names the same cell
    /// twice, or a cell index in range ends up with no faces.
    pub fn from_parts(
        points: Vec<Point3<f64>>,
        faces: Vec<Vec<u32>>,
        owner: Vec<u32>,
        neighbour: Vec<Option<u32>>,
    ) -> MeshResult<Self> {
        if faces.is_empty() {
            return Err(MeshError::NoFaces);
        }
        if owner.len() != faces.len() || neighbour.len() != faces.len() {
            return Err(MeshError::AddressingMismatch {
                faces: faces.len(),
                owners: owner.len(),
                neighbours: neighbour.len(),
            });
        }

        for (facei, loop_) in faces.iter().enumerate() {
            if loop_.len() < 3 {
                return Err(MeshError::DegenerateFace {
                    face: facei,
                    vertices: loop_.len(),
                });
            }
            for &pointi in loop_ {
                if pointi as usize >= points.len() {
                    return Err(MeshError::PointOutOfRange {
                        face: facei,
                        point: pointi,
                        points: points.len(),
                    });
                }
            }
        }

        let mut n_cells = 0usize;
        for (facei, (&own, nei)) in owner.iter().zip(&neighbour).enumerate() {
            n_cells = n_cells.max(own as usize + 1);
            if let Some(nei) = *nei {
                if nei == own {
                    return Err(MeshError::SelfNeighbour {
                        face: facei,
                        cell: own,
                    });
                }
                n_cells = n_cells.max(nei as usize + 1);
            }
        }

        let mut cell_faces = vec![Vec::new(); n_cells];
        #[allow(clippy::cast_possible_truncation)]
        // Face indices are u32 by the same convention as point indices.
        for (facei, (&own, nei)) in owner.iter().zip(&neighbour).enumerate() {
            cell_faces[own as usize].push(facei as u32);
            if let Some(nei) = *nei {
                cell_faces[nei as usize].push(facei as u32);
            }
        }

        for (celli, faces) in cell_faces.iter().enumerate() {
            if faces.is_empty() {
                #[allow(clippy::cast_possible_truncation)]
                return Err(MeshError::EmptyCell { cell: celli as u32 });
            }
        }

        Ok(Self {
            points,
            faces,
            owner,
            neighbour,
            cell_faces,
        })
    }

    /// Number of cells.
    #[inline]
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cell_faces.len()
    }

    /// Number of faces (internal and boundary).
    #[inline]
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Number of internal faces (faces with a neighbour cell).
    #[must_use]
    pub fn internal_face_count(&self) -> usize {
        self.neighbour.iter().filter(|n| n.is_some()).count()
    }

    /// Number of points.
    #[inline]
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// All point positions.
    #[inline]
    #[must_use]
    pub fn points(&self) -> &[Point3<f64>] {
        &self.points
    }

    /// The vertex loop of a face.
    #[inline]
    #[must_use]
    pub fn face_vertices(&self, facei: usize) -> &[u32] {
        &self.faces[facei]
    }

    /// The owner cell of a face.
    #[inline]
    #[must_use]
    pub fn face_owner(&self, facei: usize) -> u32 {
        self.owner[facei]
    }

    /// The neighbour cell of a face, or `None` for boundary faces.
    #[inline]
    #[must_use]
    pub fn face_neighbour(&self, facei: usize) -> Option<u32> {
        self.neighbour[facei]
    }

    /// Whether a face is internal (shared by two cells).
    #[inline]
    #[must_use]
    pub fn is_internal_face(&self, facei: usize) -> bool {
        self.neighbour[facei].is_some()
    }

    /// The faces of a cell.
    #[inline]
    #[must_use]
    pub fn cell_faces(&self, celli: usize) -> &[u32] {
        &self.cell_faces[celli]
    }

    /// Iterate over the vertex loops of a cell's faces.
    pub fn cell_face_loops(&self, celli: usize) -> impl Iterator<Item = &[u32]> {
        self.cell_faces[celli]
            .iter()
            .map(move |&facei| self.faces[facei as usize].as_slice())
    }

    /// Translate every point by the given vector.
    pub fn translate(&mut self, offset: Vector3<f64>) {
        for point in &mut self.points {
            *point += offset;
        }
    }

    /// Scale every point uniformly around the origin.
    pub fn scale(&mut self, factor: f64) {
        for point in &mut self.points {
            point.coords *= factor;
        }
    }

    /// Apply an arbitrary transform to every point.
    ///
    /// Connectivity is untouched, so topological queries (and shape
    /// classification built on them) are unaffected.
    pub fn map_points<F: FnMut(&mut Point3<f64>)>(&mut self, mut f: F) {
        for point in &mut self.points {
            f(point);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{unit_cube, unit_tetrahedron};

    #[test]
    fn cube_addressing() {
        let cube = unit_cube();
        assert_eq!(cube.cell_count(), 1);
        assert_eq!(cube.face_count(), 6);
        assert_eq!(cube.point_count(), 8);
        assert_eq!(cube.internal_face_count(), 0);
        assert_eq!(cube.cell_faces(0).len(), 6);
        for facei in 0..6 {
            assert_eq!(cube.face_owner(facei), 0);
            assert!(!cube.is_internal_face(facei));
        }
    }

    #[test]
    fn tet_addressing() {
        let tet = unit_tetrahedron();
        assert_eq!(tet.cell_count(), 1);
        assert_eq!(tet.face_count(), 4);
        assert_eq!(tet.point_count(), 4);
        for loop_ in tet.cell_face_loops(0) {
            assert_eq!(loop_.len(), 3);
        }
    }

    #[test]
    fn rejects_empty_face_list() {
        let err = PolyMesh::from_parts(vec![Point3::origin()], vec![], vec![], vec![]);
        assert!(matches!(err, Err(MeshError::NoFaces)));
    }

    #[test]
    fn rejects_addressing_mismatch() {
        let points = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ];
        let err = PolyMesh::from_parts(points, vec![vec![0, 1, 2]], vec![0, 0], vec![None]);
        assert!(matches!(err, Err(MeshError::AddressingMismatch { .. })));
    }

    #[test]
    fn rejects_point_out_of_range() {
        let points = vec![Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0)];
        let err = PolyMesh::from_parts(points, vec![vec![0, 1, 7]], vec![0], vec![None]);
        assert!(matches!(err, Err(MeshError::PointOutOfRange { point: 7, .. })));
    }

    #[test]
    fn rejects_degenerate_face() {
        let points = vec![Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0)];
        let err = PolyMesh::from_parts(points, vec![vec![0, 1]], vec![0], vec![None]);
        assert!(matches!(
            err,
            Err(MeshError::DegenerateFace { vertices: 2, .. })
        ));
    }

    #[test]
    fn rejects_self_neighbour() {
        let points = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ];
        let err = PolyMesh::from_parts(points, vec![vec![0, 1, 2]], vec![0], vec![Some(0)]);
        assert!(matches!(err, Err(MeshError::SelfNeighbour { cell: 0, .. })));
    }

    #[test]
    fn rejects_gap_in_cell_numbering() {
        let points = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ];
        // Owner 2 with no cells 0..2 owning anything leaves cell 0 and 1 empty.
        let err = PolyMesh::from_parts(points, vec![vec![0, 1, 2]], vec![2], vec![None]);
        assert!(matches!(err, Err(MeshError::EmptyCell { cell: 0 })));
    }
}
