//! Discrete cell-shape classification codes.

/// Topological classification of a cell into a canonical polyhedral family.
///
/// The numeric codes are the values written into the `meshCellType` field:
///
/// | code | shape        |
/// |------|--------------|
/// | -1   | unknown      |
/// |  0   | hexahedron   |
/// |  1   | tetrahedron  |
/// |  2   | polyhedron   |
/// |  3   | pyramid      |
/// |  4   | prism        |
/// |  5   | wedge        |
/// |  6   | tet wedge    |
///
/// `Unknown` is the pre-classification state only; a completed
/// classification never contains it. Cells matching no canonical shape are
/// `Polyhedron`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellShape {
    /// Not yet classified. Never appears in a completed field.
    Unknown,
    /// Six quadrilateral faces in three opposite pairs.
    Hexahedron,
    /// Four triangular faces.
    Tetrahedron,
    /// Any cell matching no canonical shape.
    Polyhedron,
    /// Four triangular faces over a quadrilateral base.
    Pyramid,
    /// Two disjoint triangular faces joined by three quadrilaterals.
    Prism,
    /// A hexahedron with one edge collapsed to a point.
    Wedge,
    /// A prism with one edge collapsed to a point.
    TetWedge,
}

impl CellShape {
    /// The scalar code written into the `meshCellType` field.
    #[must_use]
    pub fn code(self) -> f64 {
        match self {
            Self::Unknown => -1.0,
            Self::Hexahedron => 0.0,
            Self::Tetrahedron => 1.0,
            Self::Polyhedron => 2.0,
            Self::Pyramid => 3.0,
            Self::Prism => 4.0,
            Self::Wedge => 5.0,
            Self::TetWedge => 6.0,
        }
    }

    /// Human-readable shape name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Hexahedron => "hexahedron",
            Self::Tetrahedron => "tetrahedron",
            Self::Polyhedron => "polyhedron",
            Self::Pyramid => "pyramid",
            Self::Prism => "prism",
            Self::Wedge => "wedge",
            Self::TetWedge => "tetWedge",
        }
    }
}

impl std::fmt::Display for CellShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_match_field_encoding() {
        assert!((CellShape::Unknown.code() - -1.0).abs() < f64::EPSILON);
        assert!((CellShape::Hexahedron.code() - 0.0).abs() < f64::EPSILON);
        assert!((CellShape::Tetrahedron.code() - 1.0).abs() < f64::EPSILON);
        assert!((CellShape::Polyhedron.code() - 2.0).abs() < f64::EPSILON);
        assert!((CellShape::Pyramid.code() - 3.0).abs() < f64::EPSILON);
        assert!((CellShape::Prism.code() - 4.0).abs() < f64::EPSILON);
        assert!((CellShape::Wedge.code() - 5.0).abs() < f64::EPSILON);
        assert!((CellShape::TetWedge.code() - 6.0).abs() < f64::EPSILON);
    }

    #[test]
    fn display_names() {
        assert_eq!(CellShape::Hexahedron.to_string(), "hexahedron");
        assert_eq!(CellShape::TetWedge.to_string(), "tetWedge");
    }
}
