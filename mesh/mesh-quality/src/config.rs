//! Per-metric enable switches.

/// Which quality fields to compute and write.
///
/// Each of the six metrics is enabled independently and defaults to
/// enabled; a disabled metric is never computed, registered, or
/// persisted, and has no effect on the other five.
///
/// # Example
///
/// ```
/// use mesh_quality::QualityConfig;
///
/// let config = QualityConfig::default().with_face_skewness(false);
/// assert!(config.write_volume);
/// assert!(!config.write_face_skewness);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QualityConfig {
    /// Write the per-cell volume field (`meshVolume`).
    pub write_volume: bool,

    /// Write the per-cell shape classification field (`meshCellType`).
    pub write_cell_types: bool,

    /// Write the per-cell non-orthogonality field
    /// (`meshCellNonOrthogonality`).
    pub write_cell_non_orthogonality: bool,

    /// Write the per-cell skewness field (`meshCellSkewness`).
    pub write_cell_skewness: bool,

    /// Write the per-face non-orthogonality field
    /// (`meshFaceNonOrthogonality`).
    pub write_face_non_orthogonality: bool,

    /// Write the per-face skewness field (`meshFaceSkewness`).
    pub write_face_skewness: bool,
}

impl Default for QualityConfig {
    fn default() -> Self {
        Self::all()
    }
}

impl QualityConfig {
    /// All six metrics enabled.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            write_volume: true,
            write_cell_types: true,
            write_cell_non_orthogonality: true,
            write_cell_skewness: true,
            write_face_non_orthogonality: true,
            write_face_skewness: true,
        }
    }

    /// All six metrics disabled.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            write_volume: false,
            write_cell_types: false,
            write_cell_non_orthogonality: false,
            write_cell_skewness: false,
            write_face_non_orthogonality: false,
            write_face_skewness: false,
        }
    }

    /// Set whether the volume field is written.
    #[must_use]
    pub const fn with_volume(mut self, on: bool) -> Self {
        self.write_volume = on;
        self
    }

    /// Set whether the cell-type field is written.
    #[must_use]
    pub const fn with_cell_types(mut self, on: bool) -> Self {
        self.write_cell_types = on;
        self
    }

    /// Set whether the cell non-orthogonality field is written.
    #[must_use]
    pub const fn with_cell_non_orthogonality(mut self, on: bool) -> Self {
        self.write_cell_non_orthogonality = on;
        self
    }

    /// Set whether the cell skewness field is written.
    #[must_use]
    pub const fn with_cell_skewness(mut self, on: bool) -> Self {
        self.write_cell_skewness = on;
        self
    }

    /// Set whether the face non-orthogonality field is written.
    #[must_use]
    pub const fn with_face_non_orthogonality(mut self, on: bool) -> Self {
        self.write_face_non_orthogonality = on;
        self
    }

    /// Set whether the face skewness field is written.
    #[must_use]
    pub const fn with_face_skewness(mut self, on: bool) -> Self {
        self.write_face_skewness = on;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_enables_everything() {
        let config = QualityConfig::default();
        assert_eq!(config, QualityConfig::all());
        assert!(config.write_volume);
        assert!(config.write_face_skewness);
    }

    #[test]
    fn none_disables_everything() {
        let config = QualityConfig::none();
        assert!(!config.write_volume);
        assert!(!config.write_cell_types);
        assert!(!config.write_cell_non_orthogonality);
        assert!(!config.write_cell_skewness);
        assert!(!config.write_face_non_orthogonality);
        assert!(!config.write_face_skewness);
    }

    #[test]
    fn builder_toggles_single_metric() {
        let config = QualityConfig::default().with_cell_skewness(false);
        assert!(!config.write_cell_skewness);
        assert!(config.write_cell_non_orthogonality);
    }
}
