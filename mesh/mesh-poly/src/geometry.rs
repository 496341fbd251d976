//! Face and cell geometry for polyhedral meshes.
//!
//! Faces are decomposed into triangle fans around an estimated centre, and
//! cells into pyramids over their faces. This handles warped (non-planar)
//! faces and arbitrary polyhedra consistently: the same decomposition is
//! used for centres, areas, and volumes, so the quantities stay in
//! agreement with each other.

use nalgebra::{Point3, Vector3};

use crate::mesh::PolyMesh;

/// Area magnitudes below this are treated as zero when normalizing.
const TINY: f64 = 1e-300;

/// Face centres and area vectors for every face of the mesh.
///
/// The area vector points out of the owner cell and its magnitude is the
/// face area. Triangle faces are computed directly; larger loops use a
/// triangle fan around the average of the loop's points, with the centre
/// taken as the area-weighted mean of the fan triangles' centroids.
#[must_use]
pub fn face_centres_and_areas(mesh: &PolyMesh) -> (Vec<Point3<f64>>, Vec<Vector3<f64>>) {
    let points = mesh.points();
    let mut centres = Vec::with_capacity(mesh.face_count());
    let mut areas = Vec::with_capacity(mesh.face_count());

    for facei in 0..mesh.face_count() {
        let (centre, area) = face_geometry(points, mesh.face_vertices(facei));
        centres.push(centre);
        areas.push(area);
    }

    (centres, areas)
}

/// Centre and area vector of a single face given its vertex loop.
#[must_use]
pub fn face_geometry(points: &[Point3<f64>], loop_: &[u32]) -> (Point3<f64>, Vector3<f64>) {
    let n = loop_.len();

    if n == 3 {
        let a = points[loop_[0] as usize];
        let b = points[loop_[1] as usize];
        let c = points[loop_[2] as usize];
        let centre = Point3::from((a.coords + b.coords + c.coords) / 3.0);
        let area = 0.5 * (b - a).cross(&(c - a));
        return (centre, area);
    }

    // Estimated centre: average of the loop's points.
    let mut centre_est = Vector3::zeros();
    for &pointi in loop_ {
        centre_est += points[pointi as usize].coords;
    }
    #[allow(clippy::cast_precision_loss)]
    let centre_est = Point3::from(centre_est / n as f64);

    let mut sum_normal = Vector3::zeros();
    let mut sum_area = 0.0;
    let mut sum_area_centroid = Vector3::zeros();

    for i in 0..n {
        let p1 = points[loop_[i] as usize];
        let p2 = points[loop_[(i + 1) % n] as usize];

        let tri_normal = (p2 - p1).cross(&(centre_est - p1));
        let tri_area = tri_normal.norm();
        let tri_centroid = (p1.coords + p2.coords + centre_est.coords) / 3.0;

        sum_normal += tri_normal;
        sum_area += tri_area;
        sum_area_centroid += tri_area * tri_centroid;
    }

    let centre = if sum_area > TINY {
        Point3::from(sum_area_centroid / sum_area)
    } else {
        centre_est
    };

    (centre, 0.5 * sum_normal)
}

/// Cell centres and volumes for every cell of the mesh.
///
/// Each cell is decomposed into pyramids from an estimated centre (the
/// average of its face centres) to each of its faces; the signed pyramid
/// volumes sum to the cell volume, and the centre is the volume-weighted
/// mean of the pyramid centroids. Face area vectors are flipped for cells
/// that see the face as neighbour so every pyramid points outward.
#[must_use]
pub fn cell_centres_and_volumes(
    mesh: &PolyMesh,
    face_centres: &[Point3<f64>],
    face_areas: &[Vector3<f64>],
) -> (Vec<Point3<f64>>, Vec<f64>) {
    let mut centres = Vec::with_capacity(mesh.cell_count());
    let mut volumes = Vec::with_capacity(mesh.cell_count());

    for celli in 0..mesh.cell_count() {
        let faces = mesh.cell_faces(celli);

        let mut centre_est = Vector3::zeros();
        for &facei in faces {
            centre_est += face_centres[facei as usize].coords;
        }
        #[allow(clippy::cast_precision_loss)]
        let centre_est = Point3::from(centre_est / faces.len() as f64);

        let mut sum_vol3 = 0.0;
        let mut sum_vol_centroid = Vector3::zeros();

        #[allow(clippy::cast_possible_truncation)]
        for &facei in faces {
            let fc = face_centres[facei as usize];
            let mut area = face_areas[facei as usize];
            if mesh.face_owner(facei as usize) != celli as u32 {
                area = -area;
            }

            // Three times the signed pyramid volume over this face.
            let pyr_vol3 = area.dot(&(fc - centre_est));
            // Centroid of the pyramid: 3/4 along centre -> face centre.
            let pyr_centroid = 0.75 * fc.coords + 0.25 * centre_est.coords;

            sum_vol3 += pyr_vol3;
            sum_vol_centroid += pyr_vol3 * pyr_centroid;
        }

        let centre = if sum_vol3.abs() > TINY {
            Point3::from(sum_vol_centroid / sum_vol3)
        } else {
            centre_est
        };

        centres.push(centre);
        volumes.push(sum_vol3 / 3.0);
    }

    (centres, volumes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{unit_cube, unit_tetrahedron};
    use approx::assert_relative_eq;

    #[test]
    fn cube_face_geometry() {
        let cube = unit_cube();
        let (centres, areas) = face_centres_and_areas(&cube);

        for facei in 0..cube.face_count() {
            // Unit areas, outward normals, centres on the cube surface.
            assert_relative_eq!(areas[facei].norm(), 1.0, epsilon = 1e-12);
            let outward = centres[facei] - Point3::new(0.5, 0.5, 0.5);
            assert!(
                areas[facei].dot(&outward) > 0.0,
                "face {facei} area vector points into the cell"
            );
        }
    }

    #[test]
    fn cube_volume_and_centre() {
        let cube = unit_cube();
        let (fc, fa) = face_centres_and_areas(&cube);
        let (centres, volumes) = cell_centres_and_volumes(&cube, &fc, &fa);

        assert_relative_eq!(volumes[0], 1.0, epsilon = 1e-12);
        assert_relative_eq!(centres[0].x, 0.5, epsilon = 1e-12);
        assert_relative_eq!(centres[0].y, 0.5, epsilon = 1e-12);
        assert_relative_eq!(centres[0].z, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn tet_volume_and_centre() {
        let tet = unit_tetrahedron();
        let (fc, fa) = face_centres_and_areas(&tet);
        let (centres, volumes) = cell_centres_and_volumes(&tet, &fc, &fa);

        // Corner tetrahedron on the unit axes: V = 1/6, centroid at 1/4.
        assert_relative_eq!(volumes[0], 1.0 / 6.0, epsilon = 1e-12);
        assert_relative_eq!(centres[0].x, 0.25, epsilon = 1e-12);
        assert_relative_eq!(centres[0].y, 0.25, epsilon = 1e-12);
        assert_relative_eq!(centres[0].z, 0.25, epsilon = 1e-12);
    }

    #[test]
    fn triangle_fan_matches_direct_triangle() {
        // A planar quad split as one loop vs two triangles must agree on area.
        let points = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
            Point3::new(2.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ];
        let (centre, area) = face_geometry(&points, &[0, 1, 2, 3]);
        assert_relative_eq!(area.norm(), 2.0, epsilon = 1e-12);
        assert_relative_eq!(centre.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(centre.y, 0.5, epsilon = 1e-12);
        assert!(area.z > 0.0);
    }
}
