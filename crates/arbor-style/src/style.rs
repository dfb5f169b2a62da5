#![forbid(unsafe_code)]

//! Style records and the paints they hold.
//!
//! A [`StyleRecord`] is one entry in the theme table: optional `fill` and
//! `stroke` paints plus optional nested sub-records for compound elements
//! (copyright badges carry their own `text`/`text_hover` appearance, the
//! search highlight ring an `outer`/`inner` pair). A [`Paint`] is either a
//! literal [`Color`] or a handle to the shared positional color function.
//!
//! # Example
//!
//! ```
//! use arbor_style::{Color, PaintAttr, StyleRecord};
//!
//! let sponsor = StyleRecord::new().fill(Color::rgb(150, 180, 100));
//! assert!(sponsor.paint(PaintAttr::Fill).is_some());
//! assert!(sponsor.paint(PaintAttr::Stroke).is_none());
//! ```

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::color::Color;
use crate::position::PositionalColor;

/// A paint-attribute slot on a [`StyleRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaintAttr {
    Fill,
    Stroke,
}

impl PaintAttr {
    /// Every paint attribute, in table order.
    pub const ALL: [PaintAttr; 2] = [PaintAttr::Fill, PaintAttr::Stroke];

    /// Attribute name as it appears in style paths.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            PaintAttr::Fill => "fill",
            PaintAttr::Stroke => "stroke",
        }
    }

    /// Parse an attribute name; `None` if unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "fill" => Some(PaintAttr::Fill),
            "stroke" => Some(PaintAttr::Stroke),
            _ => None,
        }
    }
}

impl fmt::Display for PaintAttr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PaintAttr {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| StyleError::UnknownStylePath { path: s.to_string() })
    }
}

/// A nested sub-record slot on a [`StyleRecord`].
///
/// The slot set is closed: the theme data only ever nests these four names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubRecord {
    Text,
    TextHover,
    Outer,
    Inner,
}

impl SubRecord {
    /// Every nested slot, in table order.
    pub const ALL: [SubRecord; 4] = [
        SubRecord::Text,
        SubRecord::TextHover,
        SubRecord::Outer,
        SubRecord::Inner,
    ];

    /// Slot name as it appears in style paths.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            SubRecord::Text => "text",
            SubRecord::TextHover => "text_hover",
            SubRecord::Outer => "outer",
            SubRecord::Inner => "inner",
        }
    }

    /// Parse a slot name; `None` if unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "text" => Some(SubRecord::Text),
            "text_hover" => Some(SubRecord::TextHover),
            "outer" => Some(SubRecord::Outer),
            "inner" => Some(SubRecord::Inner),
            _ => None,
        }
    }
}

impl fmt::Display for SubRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SubRecord {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| StyleError::UnknownStylePath { path: s.to_string() })
    }
}

/// What a resolved style attribute holds: a literal color or the shared
/// positional color function.
///
/// The renderer matches on the variant: literals are used as-is, positional
/// paints are invoked with the node being drawn (and an optional opacity).
#[derive(Debug, Clone)]
pub enum Paint {
    Literal(Color),
    Positional(Arc<PositionalColor>),
}

impl Paint {
    /// Whether this paint is a literal color.
    #[must_use]
    pub fn is_literal(&self) -> bool {
        matches!(self, Paint::Literal(_))
    }

    /// Whether this paint is bound to the positional color function.
    #[must_use]
    pub fn is_positional(&self) -> bool {
        matches!(self, Paint::Positional(_))
    }

    /// The literal color, if this paint holds one.
    #[must_use]
    pub fn literal(&self) -> Option<Color> {
        match self {
            Paint::Literal(color) => Some(*color),
            Paint::Positional(_) => None,
        }
    }

    /// The positional function handle, if this paint holds one.
    #[must_use]
    pub fn positional(&self) -> Option<&Arc<PositionalColor>> {
        match self {
            Paint::Literal(_) => None,
            Paint::Positional(positional) => Some(positional),
        }
    }
}

/// Literal paints compare by color value; positional paints compare by
/// function identity, since sharing one function is part of the contract.
impl PartialEq for Paint {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Paint::Literal(a), Paint::Literal(b)) => a == b,
            (Paint::Positional(a), Paint::Positional(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<Color> for Paint {
    fn from(color: Color) -> Self {
        Paint::Literal(color)
    }
}

impl From<Arc<PositionalColor>> for Paint {
    fn from(positional: Arc<PositionalColor>) -> Self {
        Paint::Positional(positional)
    }
}

impl From<&Arc<PositionalColor>> for Paint {
    fn from(positional: &Arc<PositionalColor>) -> Self {
        Paint::Positional(Arc::clone(positional))
    }
}

/// One entry in the theme table.
///
/// Every slot is optional and there is no inheritance between records: a
/// hover record states its full appearance explicitly or the renderer gets a
/// lookup error, never a silently substituted color.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleRecord {
    pub fill: Option<Paint>,
    pub stroke: Option<Paint>,
    pub text: Option<Box<StyleRecord>>,
    pub text_hover: Option<Box<StyleRecord>>,
    pub outer: Option<Box<StyleRecord>>,
    pub inner: Option<Box<StyleRecord>>,
}

impl StyleRecord {
    /// Create a record with no attributes set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fill: None,
            stroke: None,
            text: None,
            text_hover: None,
            outer: None,
            inner: None,
        }
    }

    /// Set the fill paint.
    #[must_use]
    pub fn fill(mut self, paint: impl Into<Paint>) -> Self {
        self.fill = Some(paint.into());
        self
    }

    /// Set the stroke paint.
    #[must_use]
    pub fn stroke(mut self, paint: impl Into<Paint>) -> Self {
        self.stroke = Some(paint.into());
        self
    }

    /// Set the nested `text` record.
    #[must_use]
    pub fn text(mut self, record: StyleRecord) -> Self {
        self.text = Some(Box::new(record));
        self
    }

    /// Set the nested `text_hover` record.
    #[must_use]
    pub fn text_hover(mut self, record: StyleRecord) -> Self {
        self.text_hover = Some(Box::new(record));
        self
    }

    /// Set the nested `outer` record.
    #[must_use]
    pub fn outer(mut self, record: StyleRecord) -> Self {
        self.outer = Some(Box::new(record));
        self
    }

    /// Set the nested `inner` record.
    #[must_use]
    pub fn inner(mut self, record: StyleRecord) -> Self {
        self.inner = Some(Box::new(record));
        self
    }

    /// The paint stored for `attr`, if any.
    #[must_use]
    pub fn paint(&self, attr: PaintAttr) -> Option<&Paint> {
        match attr {
            PaintAttr::Fill => self.fill.as_ref(),
            PaintAttr::Stroke => self.stroke.as_ref(),
        }
    }

    /// The nested record stored in `slot`, if any.
    #[must_use]
    pub fn sub(&self, slot: SubRecord) -> Option<&StyleRecord> {
        let nested = match slot {
            SubRecord::Text => &self.text,
            SubRecord::TextHover => &self.text_hover,
            SubRecord::Outer => &self.outer,
            SubRecord::Inner => &self.inner,
        };
        nested.as_deref()
    }

    /// Whether the record carries no paints and no nested records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fill.is_none()
            && self.stroke.is_none()
            && self.text.is_none()
            && self.text_hover.is_none()
            && self.outer.is_none()
            && self.inner.is_none()
    }
}

/// Errors surfaced by theme resolution and positional coloring.
///
/// None of these are recoverable here; callers decide whether to abort the
/// rendering pass, log, or substitute at a higher layer.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleError {
    /// The requested element/sub-part/attribute combination is not in the
    /// theme. A configuration error; the registry never substitutes defaults.
    UnknownStylePath { path: String },
    /// The taxon dataset had no entries when the hue scale was first needed.
    EmptyDataset,
    /// A node span carried non-finite coordinates.
    MalformedNode { start: f64, end: f64 },
}

impl fmt::Display for StyleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownStylePath { path } => write!(f, "unknown style path '{path}'"),
            Self::EmptyDataset => {
                write!(f, "empty dataset: positional color requires at least one taxon")
            }
            Self::MalformedNode { start, end } => {
                write!(f, "malformed node span: start={start}, end={end}")
            }
        }
    }
}

impl std::error::Error for StyleError {}

#[cfg(test)]
mod tests {
    use super::*;
    use arbor_model::TaxonSource;

    struct FixedTaxa(usize);

    impl TaxonSource for FixedTaxa {
        fn taxon_count(&self) -> usize {
            self.0
        }
    }

    fn positional(taxa: usize) -> Arc<PositionalColor> {
        Arc::new(PositionalColor::new(Arc::new(FixedTaxa(taxa))))
    }

    // --- paint tests ---

    #[test]
    fn literal_paints_compare_by_value() {
        let a = Paint::from(Color::rgb(1, 2, 3));
        let b = Paint::Literal(Color::rgb(1, 2, 3));
        assert_eq!(a, b);
        assert_ne!(a, Paint::Literal(Color::rgb(3, 2, 1)));
    }

    #[test]
    fn positional_paints_compare_by_identity() {
        let shared = positional(180);
        let a = Paint::from(&shared);
        let b = Paint::from(Arc::clone(&shared));
        assert_eq!(a, b);

        // A separate handle over an identical dataset is still a different
        // function.
        let other = Paint::from(positional(180));
        assert_ne!(a, other);
    }

    #[test]
    fn literal_and_positional_never_compare_equal() {
        let literal = Paint::from(Color::WHITE);
        let bound = Paint::from(positional(10));
        assert_ne!(literal, bound);
    }

    #[test]
    fn paint_accessors() {
        let literal = Paint::from(Color::rgb(150, 180, 100));
        assert!(literal.is_literal());
        assert_eq!(literal.literal(), Some(Color::rgb(150, 180, 100)));
        assert!(literal.positional().is_none());

        let bound = Paint::from(positional(10));
        assert!(bound.is_positional());
        assert!(bound.literal().is_none());
        assert!(bound.positional().is_some());
    }

    // --- record tests ---

    #[test]
    fn empty_record_has_nothing() {
        let record = StyleRecord::new();
        assert!(record.is_empty());
        assert!(record.paint(PaintAttr::Fill).is_none());
        assert!(record.paint(PaintAttr::Stroke).is_none());
        assert!(record.sub(SubRecord::Text).is_none());
    }

    #[test]
    fn builder_sets_paints() {
        let record = StyleRecord::new()
            .fill(Color::rgb(150, 180, 100))
            .stroke(Color::BLACK);
        assert!(!record.is_empty());
        assert_eq!(
            record.paint(PaintAttr::Fill),
            Some(&Paint::Literal(Color::rgb(150, 180, 100)))
        );
        assert_eq!(
            record.paint(PaintAttr::Stroke),
            Some(&Paint::Literal(Color::BLACK))
        );
    }

    #[test]
    fn builder_sets_nested_records() {
        let record = StyleRecord::new()
            .outer(StyleRecord::new().fill(Color::WHITE))
            .inner(StyleRecord::new().fill(Color::hsl(64.0, 100.0, 83.0)));
        let inner = record.sub(SubRecord::Inner).unwrap();
        assert_eq!(inner.paint(PaintAttr::Fill).unwrap().literal(), Some(Color::hsl(64.0, 100.0, 83.0)));
        assert!(record.sub(SubRecord::Text).is_none());
    }

    #[test]
    fn nested_records_can_nest_paints_only() {
        let record = StyleRecord::new()
            .text(StyleRecord::new().fill(Color::BLACK))
            .text_hover(StyleRecord::new().fill(Color::WHITE));
        assert!(record.sub(SubRecord::Text).is_some_and(|r| !r.is_empty()));
        assert!(record.sub(SubRecord::TextHover).is_some());
    }

    #[test]
    fn record_with_positional_fill() {
        let shared = positional(42);
        let record = StyleRecord::new().fill(&shared);
        assert!(record.paint(PaintAttr::Fill).unwrap().is_positional());
    }

    // --- name tests ---

    #[test]
    fn paint_attr_names_round_trip() {
        for attr in PaintAttr::ALL {
            assert_eq!(PaintAttr::from_name(attr.name()), Some(attr));
        }
        assert_eq!(PaintAttr::from_name("fil"), None);
    }

    #[test]
    fn sub_record_names_round_trip() {
        for slot in SubRecord::ALL {
            assert_eq!(SubRecord::from_name(slot.name()), Some(slot));
        }
        assert_eq!(SubRecord::from_name("texthover"), None);
    }

    #[test]
    fn attrs_parse_from_str() {
        assert_eq!("fill".parse::<PaintAttr>().unwrap(), PaintAttr::Fill);
        assert_eq!("text_hover".parse::<SubRecord>().unwrap(), SubRecord::TextHover);
        assert!("nope".parse::<PaintAttr>().is_err());
    }

    // --- error tests ---

    #[test]
    fn error_messages() {
        let unknown = StyleError::UnknownStylePath {
            path: "leaf.nonexistent.fill".to_string(),
        };
        assert_eq!(unknown.to_string(), "unknown style path 'leaf.nonexistent.fill'");

        assert_eq!(
            StyleError::EmptyDataset.to_string(),
            "empty dataset: positional color requires at least one taxon"
        );

        let malformed = StyleError::MalformedNode {
            start: 1.0,
            end: f64::NAN,
        };
        assert!(malformed.to_string().starts_with("malformed node span"));
    }

    #[test]
    fn error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(StyleError::EmptyDataset);
        assert!(err.to_string().contains("empty dataset"));
    }
}
