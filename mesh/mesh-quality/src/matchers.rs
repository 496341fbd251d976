//! Topological shape matchers.
//!
//! Each matcher is a pure predicate over one cell's face/vertex
//! connectivity: face counts, face sizes, and the way faces share
//! vertices and edges. Geometry is never consulted, so degenerate (e.g.
//! flattened) cells still match their topological family, and a matcher
//! accepts only cells combinatorially isomorphic to its canonical shape.

use hashbrown::HashMap;
use mesh_poly::PolyMesh;

use crate::shape::CellShape;

/// A pure topological predicate for one canonical cell shape.
pub trait ShapeMatcher {
    /// The shape this matcher recognizes.
    fn shape(&self) -> CellShape;

    /// Whether the cell's connectivity is isomorphic to the canonical shape.
    fn matches(&self, mesh: &PolyMesh, celli: usize) -> bool;
}

/// Connectivity summary of one cell: its face loops split by size, the
/// number of faces each vertex appears on, and how often each edge is
/// walked by the loops.
struct CellConnectivity<'a> {
    tris: Vec<&'a [u32]>,
    quads: Vec<&'a [u32]>,
    other_faces: usize,
    valence: HashMap<u32, usize>,
    edge_use: HashMap<(u32, u32), usize>,
}

impl<'a> CellConnectivity<'a> {
    fn new(mesh: &'a PolyMesh, celli: usize) -> Self {
        let mut tris = Vec::new();
        let mut quads = Vec::new();
        let mut other_faces = 0;
        let mut valence = HashMap::new();
        let mut edge_use = HashMap::new();

        for loop_ in mesh.cell_face_loops(celli) {
            match loop_.len() {
                3 => tris.push(loop_),
                4 => quads.push(loop_),
                _ => other_faces += 1,
            }
            for &pointi in loop_ {
                *valence.entry(pointi).or_insert(0) += 1;
            }
            for e in face_edges(loop_) {
                *edge_use.entry(e).or_insert(0) += 1;
            }
        }

        Self {
            tris,
            quads,
            other_faces,
            valence,
            edge_use,
        }
    }

    fn face_count(&self) -> usize {
        self.tris.len() + self.quads.len() + self.other_faces
    }

    fn vertex_count(&self) -> usize {
        self.valence.len()
    }

    fn all_valences_are(&self, n: usize) -> bool {
        self.valence.values().all(|&v| v == n)
    }

    /// Whether every edge is walked by exactly two face loops, i.e. the
    /// faces close up into a manifold cell surface. A loop with the right
    /// vertex set but the wrong order leaves its edges unmatched and
    /// fails here.
    fn is_closed(&self) -> bool {
        self.edge_use.values().all(|&n| n == 2)
    }
}

fn edge(a: u32, b: u32) -> (u32, u32) {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

fn face_edges(loop_: &[u32]) -> impl Iterator<Item = (u32, u32)> + '_ {
    (0..loop_.len()).map(move |i| edge(loop_[i], loop_[(i + 1) % loop_.len()]))
}

fn shared_vertices(a: &[u32], b: &[u32]) -> usize {
    a.iter().filter(|v| b.contains(v)).count()
}

/// Number of edges (consecutive vertex pairs) two face loops have in
/// common. Sharing vertices is not enough for adjacency; the vertices
/// must be consecutive in both loops.
fn shared_edges(a: &[u32], b: &[u32]) -> usize {
    face_edges(a)
        .filter(|e| face_edges(b).any(|f| f == *e))
        .count()
}

/// Matches cells with six quadrilateral faces in the hexahedral adjacency
/// pattern: eight vertices on three faces each, and every face sharing an
/// edge with four faces and no vertex with its opposite.
#[derive(Debug, Clone, Copy, Default)]
pub struct HexMatcher;

impl ShapeMatcher for HexMatcher {
    fn shape(&self) -> CellShape {
        CellShape::Hexahedron
    }

    fn matches(&self, mesh: &PolyMesh, celli: usize) -> bool {
        let conn = CellConnectivity::new(mesh, celli);
        if conn.face_count() != 6
            || conn.quads.len() != 6
            || conn.vertex_count() != 8
            || !conn.all_valences_are(3)
            || !conn.is_closed()
        {
            return false;
        }

        // Three pairs of opposite faces: each face is vertex-disjoint from
        // exactly one other and shares exactly one edge with the rest.
        for (i, quad) in conn.quads.iter().enumerate() {
            let mut disjoint = 0;
            for (j, other) in conn.quads.iter().enumerate() {
                if i == j {
                    continue;
                }
                match (shared_vertices(quad, other), shared_edges(quad, other)) {
                    (0, 0) => disjoint += 1,
                    (2, 1) => {}
                    _ => return false,
                }
            }
            if disjoint != 1 {
                return false;
            }
        }

        true
    }
}

/// Matches cells with four triangular faces over four vertices.
#[derive(Debug, Clone, Copy, Default)]
pub struct TetMatcher;

impl ShapeMatcher for TetMatcher {
    fn shape(&self) -> CellShape {
        CellShape::Tetrahedron
    }

    fn matches(&self, mesh: &PolyMesh, celli: usize) -> bool {
        let conn = CellConnectivity::new(mesh, celli);
        conn.face_count() == 4
            && conn.tris.len() == 4
            && conn.vertex_count() == 4
            && conn.all_valences_are(3)
            && conn.is_closed()
    }
}

/// Matches square-based pyramids: four triangles meeting at an apex over
/// one quadrilateral base.
#[derive(Debug, Clone, Copy, Default)]
pub struct PyramidMatcher;

impl ShapeMatcher for PyramidMatcher {
    fn shape(&self) -> CellShape {
        CellShape::Pyramid
    }

    fn matches(&self, mesh: &PolyMesh, celli: usize) -> bool {
        let conn = CellConnectivity::new(mesh, celli);
        if conn.face_count() != 5
            || conn.tris.len() != 4
            || conn.quads.len() != 1
            || conn.vertex_count() != 5
            || !conn.is_closed()
        {
            return false;
        }

        let base = conn.quads[0];
        // The apex is the one vertex off the base; it must sit on all four
        // triangles, and each triangle must take an edge from the base.
        let apex: Vec<u32> = conn
            .valence
            .keys()
            .copied()
            .filter(|v| !base.contains(v))
            .collect();
        let [apex] = apex.as_slice() else {
            return false;
        };

        conn.tris
            .iter()
            .all(|tri| tri.contains(apex) && shared_edges(tri, base) == 1)
    }
}

/// Matches triangular prisms: two vertex-disjoint triangles joined by
/// three quadrilaterals.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrismMatcher;

impl ShapeMatcher for PrismMatcher {
    fn shape(&self) -> CellShape {
        CellShape::Prism
    }

    fn matches(&self, mesh: &PolyMesh, celli: usize) -> bool {
        let conn = CellConnectivity::new(mesh, celli);
        if conn.face_count() != 5
            || conn.tris.len() != 2
            || conn.quads.len() != 3
            || conn.vertex_count() != 6
            || !conn.all_valences_are(3)
            || !conn.is_closed()
        {
            return false;
        }

        shared_vertices(conn.tris[0], conn.tris[1]) == 0
            && conn.quads.iter().all(|quad| {
                shared_edges(quad, conn.tris[0]) == 1 && shared_edges(quad, conn.tris[1]) == 1
            })
    }
}

/// Matches wedges: hexahedra with one edge collapsed to a point, leaving
/// seven vertices, four quadrilaterals, and two triangles that meet only
/// at the collapsed vertex.
#[derive(Debug, Clone, Copy, Default)]
pub struct WedgeMatcher;

impl ShapeMatcher for WedgeMatcher {
    fn shape(&self) -> CellShape {
        CellShape::Wedge
    }

    fn matches(&self, mesh: &PolyMesh, celli: usize) -> bool {
        let conn = CellConnectivity::new(mesh, celli);
        if conn.face_count() != 6
            || conn.tris.len() != 2
            || conn.quads.len() != 4
            || conn.vertex_count() != 7
            || !conn.is_closed()
        {
            return false;
        }

        // The collapsed vertex is the single vertex the two triangles
        // share; it sits on four faces, every other vertex on three.
        let shared: Vec<u32> = conn.tris[0]
            .iter()
            .copied()
            .filter(|v| conn.tris[1].contains(v))
            .collect();
        let [collapsed] = shared.as_slice() else {
            return false;
        };

        conn.valence
            .iter()
            .all(|(v, &n)| if v == collapsed { n == 4 } else { n == 3 })
    }
}

/// Matches tet wedges: prisms with one edge collapsed to a point, leaving
/// five vertices, two triangles sharing an edge, and two quadrilaterals.
#[derive(Debug, Clone, Copy, Default)]
pub struct TetWedgeMatcher;

impl ShapeMatcher for TetWedgeMatcher {
    fn shape(&self) -> CellShape {
        CellShape::TetWedge
    }

    fn matches(&self, mesh: &PolyMesh, celli: usize) -> bool {
        let conn = CellConnectivity::new(mesh, celli);
        conn.face_count() == 4
            && conn.tris.len() == 2
            && conn.quads.len() == 2
            && conn.vertex_count() == 5
            && conn.is_closed()
            && shared_edges(conn.tris[0], conn.tris[1]) == 1
            && shared_edges(conn.quads[0], conn.quads[1]) == 2
    }
}
