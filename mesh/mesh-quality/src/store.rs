//! Field caching and persistence seam.

use hashbrown::{HashMap, HashSet};

/// A named scalar field, defined either per cell or per face.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldData {
    /// One value per cell.
    Cell(Vec<f64>),
    /// One value per face.
    Face(Vec<f64>),
}

impl FieldData {
    /// The raw values, regardless of association.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        match self {
            Self::Cell(v) | Self::Face(v) => v,
        }
    }

    /// Number of values in the field.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values().len()
    }

    /// Whether the field holds no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values().is_empty()
    }
}

/// Where computed quality fields are cached and later persisted.
///
/// Both operations report success as a plain `bool`: a `false` from
/// either degrades only the field in question, never the whole analysis.
/// Registering a name that already exists within the same step replaces
/// the previous values.
pub trait FieldStore {
    /// Cache a field under a stable name for the current step.
    fn register(&mut self, name: &str, data: FieldData) -> bool;

    /// Write a previously registered field to the output sink.
    ///
    /// Returns `false` if no field is registered under `name` or the sink
    /// rejects it.
    fn persist(&mut self, name: &str) -> bool;
}

/// An in-memory [`FieldStore`].
///
/// Registration always succeeds; persisting marks the field as written
/// and succeeds iff the field was registered. Hosts with a real output
/// sink supply their own store; this one backs tests and in-process
/// consumers that only need to read the cached fields back.
#[derive(Debug, Default)]
pub struct MemoryFieldStore {
    fields: HashMap<String, FieldData>,
    persisted: HashSet<String>,
}

impl MemoryFieldStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a registered field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldData> {
        self.fields.get(name)
    }

    /// Whether a field has been persisted.
    #[must_use]
    pub fn is_persisted(&self, name: &str) -> bool {
        self.persisted.contains(name)
    }

    /// Number of registered fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether no fields are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Drop all registered and persisted state, starting a fresh step.
    pub fn clear(&mut self) {
        self.fields.clear();
        self.persisted.clear();
    }
}

impl FieldStore for MemoryFieldStore {
    fn register(&mut self, name: &str, data: FieldData) -> bool {
        self.fields.insert(name.to_owned(), data);
        true
    }

    fn persist(&mut self, name: &str) -> bool {
        if self.fields.contains_key(name) {
            self.persisted.insert(name.to_owned());
            true
        } else {
            false
        }
    }
}
