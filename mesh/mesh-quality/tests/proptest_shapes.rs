//! Property-based tests for shape classification.
//!
//! Classification is purely topological, so it must be invariant under
//! any transform of the point positions, and it must never leave a cell
//! in the pre-classification state.

use mesh_poly::{
    hexagonal_prism, square_pyramid, tet_wedge, triangular_prism, unit_cube, unit_tetrahedron,
    wedge, PolyMesh, Vector3,
};
use mesh_quality::{classify_cells, CellShape};
use proptest::prelude::*;

fn arb_primitive() -> impl Strategy<Value = (PolyMesh, CellShape)> {
    prop_oneof![
        Just((unit_cube(), CellShape::Hexahedron)),
        Just((unit_tetrahedron(), CellShape::Tetrahedron)),
        Just((square_pyramid(), CellShape::Pyramid)),
        Just((triangular_prism(), CellShape::Prism)),
        Just((wedge(), CellShape::Wedge)),
        Just((tet_wedge(), CellShape::TetWedge)),
        Just((hexagonal_prism(), CellShape::Polyhedron)),
    ]
}

fn arb_jitter() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-0.2..0.2f64, 3 * 12)
}

proptest! {
    /// Moving, scaling, or jittering points never changes a cell's class.
    #[test]
    fn classification_ignores_geometry(
        (mut mesh, expected) in arb_primitive(),
        offset in prop::array::uniform3(-100.0..100.0f64),
        scale in 0.01..50.0f64,
        jitter in arb_jitter(),
    ) {
        mesh.translate(Vector3::new(offset[0], offset[1], offset[2]));
        mesh.scale(scale);
        let mut i = 0;
        mesh.map_points(|p| {
            p.x += jitter[i % jitter.len()];
            p.y += jitter[(i + 1) % jitter.len()];
            p.z += jitter[(i + 2) % jitter.len()];
            i += 3;
        });

        prop_assert_eq!(classify_cells(&mesh), vec![expected]);
    }

    /// A completed classification never contains the unknown code.
    #[test]
    fn classification_is_total((mesh, _) in arb_primitive()) {
        for shape in classify_cells(&mesh) {
            prop_assert_ne!(shape, CellShape::Unknown);
        }
    }
}
