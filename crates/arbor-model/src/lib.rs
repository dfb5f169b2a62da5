#![forbid(unsafe_code)]

//! Shared tree-model vocabulary for the Arbor tree-of-life explorer.
//!
//! The viewer's layers (data loading, layout, theming, rendering) exchange a
//! small set of types without depending on each other; this crate carries
//! them: node index spans and the dataset handle whose taxon count drives
//! positional coloring.
//!
//! # Example
//!
//! ```
//! use arbor_model::{NodeSpan, TaxonSource, TaxonTable};
//!
//! let taxa = TaxonTable::from_names(["Wolffia", "Sequoia", "Quercus"]);
//! assert_eq!(taxa.taxon_count(), 3);
//!
//! let span = NodeSpan::new(0.0, 2.0);
//! assert_eq!(span.midpoint(), 1.0);
//! ```

pub mod dataset;
pub mod node;

pub use dataset::{TaxonSource, TaxonTable};
pub use node::NodeSpan;
