//! Cell-shape classification cascade.

use mesh_poly::PolyMesh;

use crate::matchers::{
    HexMatcher, PrismMatcher, PyramidMatcher, ShapeMatcher, TetMatcher, TetWedgeMatcher,
    WedgeMatcher,
};
use crate::shape::CellShape;

/// The matcher cascade, in priority order.
///
/// Some topologies are compatible with more than one canonical pattern
/// under degenerate vertex merging, so the order is a deliberate
/// tie-break: hexahedron, tetrahedron, pyramid, prism, wedge, tet wedge.
/// The first matcher to accept a cell wins.
#[must_use]
pub fn matcher_cascade() -> [&'static dyn ShapeMatcher; 6] {
    [
        &HexMatcher,
        &TetMatcher,
        &PyramidMatcher,
        &PrismMatcher,
        &WedgeMatcher,
        &TetWedgeMatcher,
    ]
}

/// Classify one cell by running the matcher cascade.
///
/// Cells accepted by no matcher are classified [`CellShape::Polyhedron`];
/// [`CellShape::Unknown`] is never returned.
///
/// # Example
///
/// ```
/// use mesh_poly::unit_cube;
/// use mesh_quality::{classify_cell, CellShape};
///
/// assert_eq!(classify_cell(&unit_cube(), 0), CellShape::Hexahedron);
/// ```
#[must_use]
pub fn classify_cell(mesh: &PolyMesh, celli: usize) -> CellShape {
    for matcher in matcher_cascade() {
        if matcher.matches(mesh, celli) {
            return matcher.shape();
        }
    }
    CellShape::Polyhedron
}

/// Classify every cell of the mesh.
#[must_use]
pub fn classify_cells(mesh: &PolyMesh) -> Vec<CellShape> {
    (0..mesh.cell_count())
        .map(|celli| classify_cell(mesh, celli))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mesh_poly::{
        cube_and_tet, hexagonal_prism, square_pyramid, tet_wedge, triangular_prism, unit_cube,
        unit_tetrahedron, wedge,
    };

    #[test]
    fn canonical_shapes_classify_to_themselves() {
        let cases = [
            (unit_cube(), CellShape::Hexahedron),
            (unit_tetrahedron(), CellShape::Tetrahedron),
            (square_pyramid(), CellShape::Pyramid),
            (triangular_prism(), CellShape::Prism),
            (wedge(), CellShape::Wedge),
            (tet_wedge(), CellShape::TetWedge),
        ];
        for (mesh, expected) in cases {
            assert_eq!(classify_cell(&mesh, 0), expected);
        }
    }

    #[test]
    fn unmatched_cell_falls_back_to_polyhedron() {
        // Must be the polyhedron code, never the pre-classification state.
        let shape = classify_cell(&hexagonal_prism(), 0);
        assert_eq!(shape, CellShape::Polyhedron);
        assert_ne!(shape, CellShape::Unknown);
    }

    #[test]
    fn scrambled_face_loop_classifies_as_polyhedron() {
        // A cube with one face loop reordered into a bowtie has the right
        // face and vertex counts but not hexahedral edge adjacency; it
        // must take the polyhedron code, not code 0.
        let points: Vec<_> = (0..8)
            .map(|i| {
                mesh_poly::Point3::new(
                    f64::from(i & 1),
                    f64::from((i >> 1) & 1),
                    f64::from((i >> 2) & 1),
                )
            })
            .collect();
        let faces = vec![
            vec![0, 2, 3, 1],
            vec![4, 5, 7, 6],
            vec![0, 1, 5, 4],
            vec![2, 6, 7, 3],
            vec![0, 4, 6, 2],
            vec![1, 7, 3, 5], // bowtie: diagonals 1-7 and 3-5
        ];
        let mesh =
            mesh_poly::PolyMesh::from_parts(points, faces, vec![0; 6], vec![None; 6]).unwrap();
        assert_eq!(classify_cell(&mesh, 0), CellShape::Polyhedron);
    }

    #[test]
    fn cascade_priority_order_is_fixed() {
        let order: Vec<CellShape> = matcher_cascade().iter().map(|m| m.shape()).collect();
        assert_eq!(
            order,
            vec![
                CellShape::Hexahedron,
                CellShape::Tetrahedron,
                CellShape::Pyramid,
                CellShape::Prism,
                CellShape::Wedge,
                CellShape::TetWedge,
            ]
        );
    }

    #[test]
    fn classify_cells_covers_whole_mesh() {
        let shapes = classify_cells(&cube_and_tet());
        assert_eq!(
            shapes,
            vec![CellShape::Hexahedron, CellShape::Tetrahedron]
        );
    }

    #[test]
    fn classification_is_stable_across_calls() {
        let mesh = cube_and_tet();
        assert_eq!(classify_cells(&mesh), classify_cells(&mesh));
    }
}
