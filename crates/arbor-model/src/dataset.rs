#![forbid(unsafe_code)]

//! Dataset handles backing the visualization.
//!
//! The theme layer reads exactly one thing from the dataset: the taxon count,
//! which fixes its hue scale. The boundary is therefore a count-only trait, so
//! callers can hand over whatever structure actually owns the tree data.
//! [`TaxonTable`] is the plain in-memory implementation.

/// Read-only handle to the ordered taxon list backing the visualization.
pub trait TaxonSource: Send + Sync {
    /// Number of taxa in the ordered traversal.
    fn taxon_count(&self) -> usize;
}

/// In-memory ordered taxon list.
#[derive(Debug, Clone, Default)]
pub struct TaxonTable {
    names: Vec<String>,
}

impl TaxonTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self { names: Vec::new() }
    }

    /// Build a table from taxon names in traversal order.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Append a taxon at the end of the traversal order.
    pub fn push(&mut self, name: impl Into<String>) {
        self.names.push(name.into());
    }

    /// Number of taxa.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the table holds no taxa.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Taxon name at a traversal index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// Iterate over taxon names in traversal order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl TaxonSource for TaxonTable {
    fn taxon_count(&self) -> usize {
        self.names.len()
    }
}

impl<S: Into<String>> FromIterator<S> for TaxonTable {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_names(iter)
    }
}
