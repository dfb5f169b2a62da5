#![forbid(unsafe_code)]

//! Node index spans within the ordered taxon traversal.

/// A node's half-open span of index positions within the full ordered dataset.
///
/// `start` and `end` are traversal indices: the range a node covers in the
/// flat, ordered list of all taxa. Leaves cover a narrow range, deep interior
/// nodes a wide one. Coordinates are kept as floats because layout code
/// interpolates spans during transitions; nothing here requires whole numbers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeSpan {
    pub start: f64,
    pub end: f64,
}

impl NodeSpan {
    /// Create a span from start/end traversal indices.
    #[must_use]
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Center of the span.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        (self.start + self.end) / 2.0
    }

    /// Number of index positions the span covers.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.end - self.start
    }

    /// Whether both coordinates are finite numbers.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.start.is_finite() && self.end.is_finite()
    }
}
