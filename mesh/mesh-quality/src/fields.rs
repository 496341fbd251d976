//! The compute/cache/emit pipeline for quality fields.

use mesh_poly::PolyMesh;
use tracing::{debug, info, warn};

use crate::classify::classify_cells;
use crate::config::QualityConfig;
use crate::evaluate::QualityEvaluator;
use crate::shape::CellShape;
use crate::store::{FieldData, FieldStore};

/// The six quality metrics, in the order they are computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    /// Per-cell volume.
    Volume,
    /// Per-cell shape classification code.
    CellTypes,
    /// Per-cell non-orthogonality (degrees).
    CellNonOrthogonality,
    /// Per-cell skewness.
    CellSkewness,
    /// Per-face non-orthogonality (degrees).
    FaceNonOrthogonality,
    /// Per-face skewness.
    FaceSkewness,
}

impl Metric {
    /// All metrics, in computation order.
    pub const ALL: [Self; 6] = [
        Self::Volume,
        Self::CellTypes,
        Self::CellNonOrthogonality,
        Self::CellSkewness,
        Self::FaceNonOrthogonality,
        Self::FaceSkewness,
    ];

    /// The stable field name this metric is cached and persisted under.
    #[must_use]
    pub const fn field_name(self) -> &'static str {
        match self {
            Self::Volume => "meshVolume",
            Self::CellTypes => "meshCellType",
            Self::CellNonOrthogonality => "meshCellNonOrthogonality",
            Self::CellSkewness => "meshCellSkewness",
            Self::FaceNonOrthogonality => "meshFaceNonOrthogonality",
            Self::FaceSkewness => "meshFaceSkewness",
        }
    }

    /// Whether this metric needs the geometric evaluator (everything but
    /// the purely topological cell types).
    const fn needs_geometry(self) -> bool {
        !matches!(self, Self::CellTypes)
    }

    const fn index(self) -> usize {
        match self {
            Self::Volume => 0,
            Self::CellTypes => 1,
            Self::CellNonOrthogonality => 2,
            Self::CellSkewness => 3,
            Self::FaceNonOrthogonality => 4,
            Self::FaceSkewness => 5,
        }
    }
}

/// Lifecycle of one metric within an invocation cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricStatus {
    /// Not yet computed this cycle (or not requested at all).
    Pending,
    /// Computed and registered with the field store.
    Cached,
    /// Persisted to the output sink.
    Emitted,
    /// Computation, caching, or persistence failed; the metric stays
    /// degraded for the rest of the cycle.
    Failed,
}

#[derive(Debug, Clone, Copy)]
struct MetricState {
    requested: bool,
    status: MetricStatus,
}

/// Computes the enabled quality fields, caches them in a [`FieldStore`],
/// and persists them on demand.
///
/// One invocation cycle is [`execute`](Self::execute) (compute and cache
/// every requested metric) followed, possibly later and possibly more
/// than once, by [`write`](Self::write) (persist every cached metric).
/// Metrics are independent: a failure degrades only the metric it hits,
/// and both phases report the AND over the *requested* metrics, so a
/// fully disabled set vacuously succeeds.
///
/// # Example
///
/// ```
/// use mesh_poly::cube_and_tet;
/// use mesh_quality::{MemoryFieldStore, QualityConfig, QualityFieldSet};
///
/// let mesh = cube_and_tet();
/// let mut store = MemoryFieldStore::new();
/// let mut fields = QualityFieldSet::new(&QualityConfig::default());
///
/// assert!(fields.execute(&mesh, &mut store));
/// assert!(fields.write(&mut store));
/// assert!(store.is_persisted("meshCellType"));
/// ```
#[derive(Debug)]
pub struct QualityFieldSet {
    states: [MetricState; 6],
}

impl QualityFieldSet {
    /// Build a field set from the per-metric enable switches.
    #[must_use]
    pub fn new(config: &QualityConfig) -> Self {
        let mut set = Self {
            states: [MetricState {
                requested: false,
                status: MetricStatus::Pending,
            }; 6],
        };
        set.reconfigure(config);
        set
    }

    /// Re-read the enable switches and reset every metric to pending.
    pub fn reconfigure(&mut self, config: &QualityConfig) {
        for metric in Metric::ALL {
            self.states[metric.index()] = MetricState {
                requested: metric_enabled(config, metric),
                status: MetricStatus::Pending,
            };
        }
    }

    /// Whether a metric was requested by the configuration.
    #[must_use]
    pub fn is_requested(&self, metric: Metric) -> bool {
        self.states[metric.index()].requested
    }

    /// The current lifecycle state of a metric.
    #[must_use]
    pub fn status(&self, metric: Metric) -> MetricStatus {
        self.states[metric.index()].status
    }

    /// Compute and cache every requested metric for the current mesh.
    ///
    /// Starts a fresh cycle: previous statuses are discarded, each
    /// requested field is rebuilt from the mesh as it is now and
    /// registered with the store. Returns `true` iff every requested
    /// metric was cached successfully.
    pub fn execute(&mut self, mesh: &PolyMesh, store: &mut dyn FieldStore) -> bool {
        for state in &mut self.states {
            state.status = MetricStatus::Pending;
        }

        let needs_geometry = Metric::ALL
            .iter()
            .any(|&m| self.is_requested(m) && m.needs_geometry());
        let evaluator = needs_geometry.then(|| QualityEvaluator::new(mesh));

        info!(
            cells = mesh.cell_count(),
            faces = mesh.face_count(),
            "Computing mesh quality fields"
        );

        for metric in Metric::ALL {
            if !self.states[metric.index()].requested {
                continue;
            }

            let Some(data) = build_field(metric, mesh, evaluator.as_ref()) else {
                self.states[metric.index()].status = MetricStatus::Failed;
                continue;
            };

            let name = metric.field_name();
            if store.register(name, data) {
                debug!(field = name, "Cached quality field");
                self.states[metric.index()].status = MetricStatus::Cached;
            } else {
                warn!(field = name, "Field store rejected quality field");
                self.states[metric.index()].status = MetricStatus::Failed;
            }
        }

        self.all_requested_have(MetricStatus::Cached)
    }

    /// Persist every cached metric to the store's output sink.
    ///
    /// May be called any number of times after [`execute`](Self::execute);
    /// metrics that failed to compute or cache are skipped and count as
    /// degraded. Returns `true` iff every requested metric is persisted.
    pub fn write(&mut self, store: &mut dyn FieldStore) -> bool {
        for metric in Metric::ALL {
            let state = self.states[metric.index()];
            if !state.requested
                || !matches!(state.status, MetricStatus::Cached | MetricStatus::Emitted)
            {
                continue;
            }

            let name = metric.field_name();
            info!(field = name, "Writing quality field");
            self.states[metric.index()].status = if store.persist(name) {
                MetricStatus::Emitted
            } else {
                warn!(field = name, "Failed to persist quality field");
                MetricStatus::Failed
            };
        }

        self.all_requested_have(MetricStatus::Emitted)
    }

    fn all_requested_have(&self, status: MetricStatus) -> bool {
        self.states
            .iter()
            .filter(|s| s.requested)
            .all(|s| s.status == status)
    }
}

const fn metric_enabled(config: &QualityConfig, metric: Metric) -> bool {
    match metric {
        Metric::Volume => config.write_volume,
        Metric::CellTypes => config.write_cell_types,
        Metric::CellNonOrthogonality => config.write_cell_non_orthogonality,
        Metric::CellSkewness => config.write_cell_skewness,
        Metric::FaceNonOrthogonality => config.write_face_non_orthogonality,
        Metric::FaceSkewness => config.write_face_skewness,
    }
}

fn build_field(
    metric: Metric,
    mesh: &PolyMesh,
    evaluator: Option<&QualityEvaluator<'_>>,
) -> Option<FieldData> {
    match metric {
        Metric::CellTypes => Some(FieldData::Cell(
            classify_cells(mesh)
                .into_iter()
                .map(CellShape::code)
                .collect(),
        )),
        Metric::Volume => Some(FieldData::Cell(evaluator?.cell_volumes())),
        Metric::CellNonOrthogonality => Some(FieldData::Cell(evaluator?.cell_non_orthogonality())),
        Metric::CellSkewness => Some(FieldData::Cell(evaluator?.cell_skewness())),
        Metric::FaceNonOrthogonality => Some(FieldData::Face(evaluator?.face_non_orthogonality())),
        Metric::FaceSkewness => Some(FieldData::Face(evaluator?.face_skewness())),
    }
}
