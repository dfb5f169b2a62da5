#![forbid(unsafe_code)]

//! Positional coloring: hue derived from a node's place in the dataset.
//!
//! Nodes are painted by where they sit in the ordered taxon traversal: the
//! midpoint of a node's span maps linearly onto the 360 degree hue circle,
//! with saturation and lightness fixed. Nodes near the start of the traversal
//! get low hues, nodes near the end approach 360.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use arbor_model::{NodeSpan, TaxonTable};
//! use arbor_style::PositionalColor;
//!
//! let taxa = Arc::new(TaxonTable::from_names(vec!["t"; 180]));
//! let positional = PositionalColor::new(taxa);
//!
//! let color = positional.color(&NodeSpan::new(10.0, 20.0), None).unwrap();
//! assert_eq!(color.to_string(), "hsla(30,60%,60%,1)");
//! ```

use std::fmt;
use std::sync::{Arc, OnceLock};

use arbor_model::{NodeSpan, TaxonSource};

use crate::color::Color;
use crate::style::StyleError;

/// Saturation of positional colors, percent.
const SATURATION: f64 = 60.0;
/// Lightness of positional colors, percent.
const LIGHTNESS: f64 = 60.0;
/// Degrees on the hue circle.
const FULL_CIRCLE: f64 = 360.0;

/// Derives a node's color from its span within the ordered dataset.
///
/// One handle is shared by every style entry bound to positional color, so a
/// node keeps a consistent hue across its bar, interior, and signpost
/// representations. The hue-scale divisor is memoized on first use and never
/// recomputed, even if the dataset handle later reports a different count;
/// colors already on screen must not shift as more of the tree streams in.
pub struct PositionalColor {
    taxa: Arc<dyn TaxonSource>,
    scale: OnceLock<f64>,
}

impl PositionalColor {
    /// Create a handle over the dataset backing the visualization.
    #[must_use]
    pub fn new(taxa: Arc<dyn TaxonSource>) -> Self {
        Self {
            taxa,
            scale: OnceLock::new(),
        }
    }

    /// Color for `node`, with `alpha` defaulting to fully opaque.
    ///
    /// Fails on a non-finite span or an empty dataset; never fails otherwise.
    pub fn color(&self, node: &NodeSpan, alpha: Option<f64>) -> Result<Color, StyleError> {
        let hue = self.hue(node)?;
        Ok(Color::hsla(hue, SATURATION, LIGHTNESS, alpha.unwrap_or(1.0)))
    }

    /// Hue in degrees for `node`, unwrapped: spans past the end of the
    /// dataset (or before its start) produce hues outside [0, 360], which the
    /// renderer treats as cyclic.
    pub fn hue(&self, node: &NodeSpan) -> Result<f64, StyleError> {
        if !node.is_finite() {
            return Err(StyleError::MalformedNode {
                start: node.start,
                end: node.end,
            });
        }
        // Midpoint of the span scaled to degrees; the factor of two in the
        // scale cancels the halving.
        Ok((node.end + node.start) / self.scale_factor()?)
    }

    /// The hue-scale divisor, `taxon count * 2 / 360`.
    ///
    /// Computed from the dataset on the first call and fixed from then on.
    /// An empty dataset fails without initializing the cache, so a dataset
    /// populated later still gets a correct scale.
    pub fn scale_factor(&self) -> Result<f64, StyleError> {
        if let Some(scale) = self.scale.get() {
            return Ok(*scale);
        }
        let count = self.taxa.taxon_count();
        if count == 0 {
            return Err(StyleError::EmptyDataset);
        }
        let scale = *self.scale.get_or_init(|| {
            let scale = count as f64 * 2.0 / FULL_CIRCLE;
            #[cfg(feature = "tracing")]
            tracing::debug!(taxon_count = count, scale, "hue scale initialized");
            scale
        });
        Ok(scale)
    }

    /// Whether the hue scale has been computed yet.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.scale.get().is_some()
    }
}

impl fmt::Debug for PositionalColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PositionalColor")
            .field("taxon_count", &self.taxa.taxon_count())
            .field("scale", &self.scale.get())
            .finish()
    }
}
