//! Canonical single-cell meshes and small test fixtures.
//!
//! Every vertex loop is ordered so its area vector points out of the owner
//! cell. These are the reference topologies for shape classification and
//! the fixtures used throughout the quality tests.

// Hard-coded connectivity below is valid by construction.
#![allow(clippy::expect_used)]

use nalgebra::Point3;

use crate::mesh::PolyMesh;

fn build(
    points: Vec<Point3<f64>>,
    faces: Vec<Vec<u32>>,
    owner: Vec<u32>,
    neighbour: Vec<Option<u32>>,
) -> PolyMesh {
    PolyMesh::from_parts(points, faces, owner, neighbour)
        .expect("hard-coded primitive connectivity is valid")
}

fn single_cell(points: Vec<Point3<f64>>, faces: Vec<Vec<u32>>) -> PolyMesh {
    let n = faces.len();
    build(points, faces, vec![0; n], vec![None; n])
}

/// A unit cube from (0,0,0) to (1,1,1) as one hexahedral cell.
///
/// # Example
///
/// ```
/// use mesh_poly::unit_cube;
///
/// let cube = unit_cube();
/// assert_eq!(cube.cell_count(), 1);
/// assert_eq!(cube.face_count(), 6);
/// ```
#[must_use]
pub fn unit_cube() -> PolyMesh {
    single_cell(cube_points(0.0), cube_faces())
}

fn cube_points(x0: f64) -> Vec<Point3<f64>> {
    vec![
        Point3::new(x0, 0.0, 0.0),
        Point3::new(x0 + 1.0, 0.0, 0.0),
        Point3::new(x0 + 1.0, 1.0, 0.0),
        Point3::new(x0, 1.0, 0.0),
        Point3::new(x0, 0.0, 1.0),
        Point3::new(x0 + 1.0, 0.0, 1.0),
        Point3::new(x0 + 1.0, 1.0, 1.0),
        Point3::new(x0, 1.0, 1.0),
    ]
}

fn cube_faces() -> Vec<Vec<u32>> {
    vec![
        vec![0, 3, 2, 1], // bottom, -z
        vec![4, 5, 6, 7], // top, +z
        vec![0, 1, 5, 4], // front, -y
        vec![3, 7, 6, 2], // back, +y
        vec![0, 4, 7, 3], // left, -x
        vec![1, 2, 6, 5], // right, +x
    ]
}

/// A corner tetrahedron on the unit axes (volume 1/6) as one cell.
#[must_use]
pub fn unit_tetrahedron() -> PolyMesh {
    let points = vec![
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
        Point3::new(0.0, 0.0, 1.0),
    ];
    let faces = vec![
        vec![0, 2, 1], // z = 0
        vec![0, 3, 2], // x = 0
        vec![0, 1, 3], // y = 0
        vec![1, 2, 3], // slant
    ];
    single_cell(points, faces)
}

/// A square-based pyramid with apex above the base centre.
#[must_use]
pub fn square_pyramid() -> PolyMesh {
    let points = vec![
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(1.0, 1.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
        Point3::new(0.5, 0.5, 1.0),
    ];
    let faces = vec![
        vec![0, 3, 2, 1], // base, -z
        vec![0, 1, 4],
        vec![1, 2, 4],
        vec![2, 3, 4],
        vec![3, 0, 4],
    ];
    single_cell(points, faces)
}

/// A triangular prism: a right triangle extruded one unit in z.
#[must_use]
pub fn triangular_prism() -> PolyMesh {
    let points = vec![
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
        Point3::new(0.0, 0.0, 1.0),
        Point3::new(1.0, 0.0, 1.0),
        Point3::new(0.0, 1.0, 1.0),
    ];
    let faces = vec![
        vec![0, 2, 1],    // bottom, -z
        vec![3, 4, 5],    // top, +z
        vec![0, 1, 4, 3], // y = 0
        vec![1, 2, 5, 4], // slant
        vec![2, 0, 3, 5], // x = 0
    ];
    single_cell(points, faces)
}

/// A wedge: a hexahedron with one top edge collapsed to a single point.
///
/// Seven vertices, four quadrilateral faces, and two triangular faces that
/// share exactly the collapsed vertex.
#[must_use]
pub fn wedge() -> PolyMesh {
    let points = vec![
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(1.0, 1.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
        Point3::new(0.0, 0.0, 1.0),
        Point3::new(1.0, 0.0, 1.0),
        Point3::new(0.5, 1.0, 1.0), // collapsed top edge
    ];
    let faces = vec![
        vec![0, 3, 2, 1], // bottom, -z
        vec![0, 1, 5, 4], // front, -y
        vec![1, 2, 6, 5], // right
        vec![0, 4, 6, 3], // left
        vec![3, 6, 2],    // back, +y
        vec![4, 5, 6],    // top, +z
    ];
    single_cell(points, faces)
}

/// A tet wedge: a triangular prism with one top edge collapsed.
///
/// Five vertices and four faces, two triangles (sharing an edge) and two
/// quadrilaterals.
#[must_use]
pub fn tet_wedge() -> PolyMesh {
    let points = vec![
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
        Point3::new(0.5, 0.0, 1.0), // collapsed top edge over 0-1
        Point3::new(0.0, 1.0, 1.0),
    ];
    let faces = vec![
        vec![0, 2, 1],    // bottom, -z
        vec![0, 1, 3],    // y = 0
        vec![1, 2, 4, 3], // slant
        vec![2, 0, 3, 4], // x = 0 side
    ];
    single_cell(points, faces)
}

/// A hexagonal prism: a regular hexagon extruded one unit in z.
///
/// Eight faces (two hexagons, six quadrilaterals); matches none of the
/// canonical shapes, so it classifies as a general polyhedron.
#[must_use]
pub fn hexagonal_prism() -> PolyMesh {
    let mut points = Vec::with_capacity(12);
    for &z in &[0.0, 1.0] {
        for k in 0..6u32 {
            let angle = f64::from(k) * std::f64::consts::FRAC_PI_3;
            points.push(Point3::new(angle.cos(), angle.sin(), z));
        }
    }

    let mut faces = vec![
        vec![0, 5, 4, 3, 2, 1],    // bottom, -z
        vec![6, 7, 8, 9, 10, 11],  // top, +z
    ];
    for k in 0..6u32 {
        let k1 = (k + 1) % 6;
        faces.push(vec![k, k1, k1 + 6, k + 6]);
    }
    single_cell(points, faces)
}

/// Two hexahedral cells stacked in z, the upper one sheared in x.
///
/// The shared face at z=1 is internal (owner cell 0, neighbour cell 1);
/// the shear moves the upper cell's centroid off the shared face's normal,
/// so the internal face has nonzero non-orthogonality and skewness.
#[must_use]
pub fn sheared_cell_pair() -> PolyMesh {
    let points = vec![
        // z = 0
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(1.0, 1.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
        // z = 1 (shared)
        Point3::new(0.0, 0.0, 1.0),
        Point3::new(1.0, 0.0, 1.0),
        Point3::new(1.0, 1.0, 1.0),
        Point3::new(0.0, 1.0, 1.0),
        // z = 2, sheared +0.5 in x
        Point3::new(0.5, 0.0, 2.0),
        Point3::new(1.5, 0.0, 2.0),
        Point3::new(1.5, 1.0, 2.0),
        Point3::new(0.5, 1.0, 2.0),
    ];
    let faces = vec![
        vec![4, 5, 6, 7], // internal, 0 -> 1
        // cell 0 boundary
        vec![0, 3, 2, 1],
        vec![0, 1, 5, 4],
        vec![1, 2, 6, 5],
        vec![2, 3, 7, 6],
        vec![3, 0, 4, 7],
        // cell 1 boundary
        vec![8, 9, 10, 11],
        vec![4, 5, 9, 8],
        vec![5, 6, 10, 9],
        vec![6, 7, 11, 10],
        vec![7, 4, 8, 11],
    ];
    let owner = vec![0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1];
    let neighbour = vec![
        Some(1),
        None,
        None,
        None,
        None,
        None,
        None,
        None,
        None,
        None,
        None,
    ];
    build(points, faces, owner, neighbour)
}

/// A two-cell mesh: a unit cube (cell 0) and a disjoint corner
/// tetrahedron (cell 1) translated to x >= 2.
#[must_use]
pub fn cube_and_tet() -> PolyMesh {
    let mut points = cube_points(0.0);
    points.extend([
        Point3::new(2.0, 0.0, 0.0),
        Point3::new(3.0, 0.0, 0.0),
        Point3::new(2.0, 1.0, 0.0),
        Point3::new(2.0, 0.0, 1.0),
    ]);

    let mut faces = cube_faces();
    faces.extend([
        vec![8, 10, 9],
        vec![8, 11, 10],
        vec![8, 9, 11],
        vec![9, 10, 11],
    ]);

    let owner = vec![0, 0, 0, 0, 0, 0, 1, 1, 1, 1];
    let neighbour = vec![None; 10];
    build(points, faces, owner, neighbour)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{cell_centres_and_volumes, face_centres_and_areas};
    use approx::assert_relative_eq;

    fn volumes(mesh: &PolyMesh) -> Vec<f64> {
        let (fc, fa) = face_centres_and_areas(mesh);
        cell_centres_and_volumes(mesh, &fc, &fa).1
    }

    #[test]
    fn primitives_have_positive_volume() {
        for (name, mesh) in [
            ("cube", unit_cube()),
            ("tet", unit_tetrahedron()),
            ("pyramid", square_pyramid()),
            ("prism", triangular_prism()),
            ("wedge", wedge()),
            ("tet_wedge", tet_wedge()),
            ("hex_prism", hexagonal_prism()),
        ] {
            for (celli, &vol) in volumes(&mesh).iter().enumerate() {
                assert!(vol > 0.0, "{name} cell {celli} has volume {vol}");
            }
        }
    }

    #[test]
    fn pyramid_volume() {
        // V = base * height / 3.
        assert_relative_eq!(volumes(&square_pyramid())[0], 1.0 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn prism_volume() {
        assert_relative_eq!(volumes(&triangular_prism())[0], 0.5, epsilon = 1e-12);
    }

    #[test]
    fn cube_and_tet_volumes() {
        let vols = volumes(&cube_and_tet());
        assert_eq!(vols.len(), 2);
        assert_relative_eq!(vols[0], 1.0, epsilon = 1e-12);
        assert_relative_eq!(vols[1], 1.0 / 6.0, epsilon = 1e-12);
    }

    #[test]
    fn sheared_pair_addressing() {
        let pair = sheared_cell_pair();
        assert_eq!(pair.cell_count(), 2);
        assert_eq!(pair.internal_face_count(), 1);
        assert_eq!(pair.face_owner(0), 0);
        assert_eq!(pair.face_neighbour(0), Some(1));

        let (_, fa) = face_centres_and_areas(&pair);
        // Shared face normal points from owner (lower) to neighbour (upper).
        assert!(fa[0].z > 0.0);

        let (fc, fa) = face_centres_and_areas(&pair);
        let (centres, vols) = cell_centres_and_volumes(&pair, &fc, &fa);
        assert_relative_eq!(vols[0], 1.0, epsilon = 1e-12);
        assert_relative_eq!(vols[1], 1.0, epsilon = 1e-12);
        assert_relative_eq!(centres[0].x, 0.5, epsilon = 1e-12);
        assert_relative_eq!(centres[0].z, 0.5, epsilon = 1e-12);
    }
}
