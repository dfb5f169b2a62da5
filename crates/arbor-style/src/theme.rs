#![forbid(unsafe_code)]

//! The theme registry: nested style tables with exact-match resolution.
//!
//! A [`Theme`] maps element categories to [`ElementTheme`] tables and sub-part
//! names to [`StyleRecord`]s. Resolution is a pure structural traversal:
//! there is no inheritance between interaction states, and a missing key is a
//! configuration error surfaced as [`StyleError::UnknownStylePath`], never a
//! silently substituted color.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use arbor_model::TaxonTable;
//! use arbor_style::{Element, PaintAttr, themes};
//!
//! let taxa = Arc::new(TaxonTable::from_names(vec!["t"; 180]));
//! let theme = themes::canopy(taxa);
//!
//! let sponsor = theme.resolve(Element::Leaf, "sponsor", PaintAttr::Fill).unwrap();
//! assert_eq!(sponsor.literal().unwrap().to_string(), "rgb(150,180,100)");
//! ```

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::color::Color;
use crate::position::PositionalColor;
use crate::style::{Paint, PaintAttr, StyleError, StyleRecord, SubRecord};

/// A top-level drawable category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    Branch,
    Interior,
    Signpost,
    Leaf,
}

impl Element {
    /// Every category, in table order.
    pub const ALL: [Element; 4] = [
        Element::Branch,
        Element::Interior,
        Element::Signpost,
        Element::Leaf,
    ];

    /// Category name as it appears in style paths.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Element::Branch => "branch",
            Element::Interior => "interior",
            Element::Signpost => "signpost",
            Element::Leaf => "leaf",
        }
    }

    /// Parse a category name; `None` if unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "branch" => Some(Element::Branch),
            "interior" => Some(Element::Interior),
            "signpost" => Some(Element::Signpost),
            "leaf" => Some(Element::Leaf),
            _ => None,
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Element {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| StyleError::UnknownStylePath { path: s.to_string() })
    }
}

/// Cycling palette used to tint marked subtrees.
///
/// Marked areas are numbered as the user creates them; lookup wraps, so any
/// number of simultaneous marks maps onto the palette.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarkedPalette {
    colors: Vec<Color>,
}

impl MarkedPalette {
    /// Create a palette from entries in marking order.
    #[must_use]
    pub fn new(colors: Vec<Color>) -> Self {
        Self { colors }
    }

    /// Color for the marked area at `index`, wrapping past the end.
    ///
    /// `None` only for an empty palette.
    #[must_use]
    pub fn color(&self, index: usize) -> Option<Color> {
        if self.colors.is_empty() {
            return None;
        }
        Some(self.colors[index % self.colors.len()])
    }

    /// Number of palette entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the palette has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// All palette entries in order.
    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }
}

/// Styles for one drawable element category: a base record for attributes
/// carried directly on the category, plus exact-match sub-part styles.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementTheme {
    base: StyleRecord,
    styles: HashMap<String, StyleRecord>,
}

impl ElementTheme {
    /// Create an element theme with no styles.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the attributes carried directly on the category.
    #[must_use]
    pub fn base(mut self, record: StyleRecord) -> Self {
        self.base = record;
        self
    }

    /// Add a sub-part style, replacing any previous entry under `name`.
    #[must_use]
    pub fn style(mut self, name: impl Into<String>, record: StyleRecord) -> Self {
        self.styles.insert(name.into(), record);
        self
    }

    /// The attributes carried directly on the category.
    #[must_use]
    pub fn base_record(&self) -> &StyleRecord {
        &self.base
    }

    /// The record for a sub-part; lookup is exact-match on the name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&StyleRecord> {
        self.styles.get(name)
    }

    /// Iterate over (sub-part name, record) pairs in arbitrary order.
    pub fn styles(&self) -> impl Iterator<Item = (&str, &StyleRecord)> {
        self.styles
            .iter()
            .map(|(name, record)| (name.as_str(), record))
    }

    /// Number of sub-part styles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Whether no sub-part styles exist.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

/// The full style table for one visual skin of the tree renderer.
///
/// Constructed once at startup, immutable thereafter, and shared read-only by
/// every rendering task; resolution is plain map traversal with no interior
/// locking.
#[derive(Debug, Clone)]
pub struct Theme {
    branch: ElementTheme,
    interior: ElementTheme,
    signpost: ElementTheme,
    leaf: ElementTheme,
    marked_areas: MarkedPalette,
    positional: Arc<PositionalColor>,
}

impl Theme {
    /// Create an empty theme around a positional color handle.
    #[must_use]
    pub fn new(positional: Arc<PositionalColor>) -> Self {
        Self {
            branch: ElementTheme::new(),
            interior: ElementTheme::new(),
            signpost: ElementTheme::new(),
            leaf: ElementTheme::new(),
            marked_areas: MarkedPalette::default(),
            positional,
        }
    }

    /// Set the table for one element category.
    #[must_use]
    pub fn with_element(mut self, element: Element, theme: ElementTheme) -> Self {
        match element {
            Element::Branch => self.branch = theme,
            Element::Interior => self.interior = theme,
            Element::Signpost => self.signpost = theme,
            Element::Leaf => self.leaf = theme,
        }
        self
    }

    /// Set the marked-area palette.
    #[must_use]
    pub fn with_marked_areas(mut self, palette: MarkedPalette) -> Self {
        self.marked_areas = palette;
        self
    }

    /// The table for one element category.
    #[must_use]
    pub fn element(&self, element: Element) -> &ElementTheme {
        match element {
            Element::Branch => &self.branch,
            Element::Interior => &self.interior,
            Element::Signpost => &self.signpost,
            Element::Leaf => &self.leaf,
        }
    }

    /// The shared positional color function.
    #[must_use]
    pub fn positional(&self) -> &Arc<PositionalColor> {
        &self.positional
    }

    /// The marked-area palette.
    #[must_use]
    pub fn marked_areas(&self) -> &MarkedPalette {
        &self.marked_areas
    }

    /// Color for the marked area at `index` (cycling).
    #[must_use]
    pub fn marked_area(&self, index: usize) -> Option<Color> {
        self.marked_areas.color(index)
    }

    /// The whole record for a sub-part.
    pub fn style(&self, element: Element, subpart: &str) -> Result<&StyleRecord, StyleError> {
        self.element(element)
            .get(subpart)
            .ok_or_else(|| StyleError::UnknownStylePath {
                path: format!("{element}.{subpart}"),
            })
    }

    /// The paint at `element.subpart.attr`.
    pub fn resolve(
        &self,
        element: Element,
        subpart: &str,
        attr: PaintAttr,
    ) -> Result<&Paint, StyleError> {
        self.element(element)
            .get(subpart)
            .and_then(|record| record.paint(attr))
            .ok_or_else(|| StyleError::UnknownStylePath {
                path: format!("{element}.{subpart}.{attr}"),
            })
    }

    /// The paint at `element.subpart.slot.attr`, one nesting level down
    /// (e.g. the `text` appearance of a copyright badge).
    pub fn resolve_sub(
        &self,
        element: Element,
        subpart: &str,
        slot: SubRecord,
        attr: PaintAttr,
    ) -> Result<&Paint, StyleError> {
        self.element(element)
            .get(subpart)
            .and_then(|record| record.sub(slot))
            .and_then(|nested| nested.paint(attr))
            .ok_or_else(|| StyleError::UnknownStylePath {
                path: format!("{element}.{subpart}.{slot}.{attr}"),
            })
    }

    /// The paint carried directly on a category (e.g. `branch.stroke`).
    pub fn resolve_base(&self, element: Element, attr: PaintAttr) -> Result<&Paint, StyleError> {
        self.element(element)
            .base_record()
            .paint(attr)
            .ok_or_else(|| StyleError::UnknownStylePath {
                path: format!("{element}.{attr}"),
            })
    }

    /// Resolve a dot-separated style path, the form renderer code uses when
    /// it addresses styles textually.
    ///
    /// Two segments name a category attribute (`"branch.stroke"`), three a
    /// sub-part attribute (`"leaf.sponsor.fill"`), four an attribute inside a
    /// nested record (`"leaf.copyright.text.fill"`). Anything else, or any
    /// unknown segment, fails with the full requested path.
    pub fn resolve_path(&self, path: &str) -> Result<&Paint, StyleError> {
        let unknown = || StyleError::UnknownStylePath {
            path: path.to_string(),
        };

        let mut segments = path.split('.');
        let element = segments
            .next()
            .and_then(Element::from_name)
            .ok_or_else(unknown)?;
        let rest: Vec<&str> = segments.collect();

        match rest.as_slice() {
            [attr] => {
                let attr = PaintAttr::from_name(attr).ok_or_else(unknown)?;
                self.element(element)
                    .base_record()
                    .paint(attr)
                    .ok_or_else(unknown)
            }
            [subpart, attr] => {
                let attr = PaintAttr::from_name(attr).ok_or_else(unknown)?;
                self.element(element)
                    .get(subpart)
                    .and_then(|record| record.paint(attr))
                    .ok_or_else(unknown)
            }
            [subpart, slot, attr] => {
                let slot = SubRecord::from_name(slot).ok_or_else(unknown)?;
                let attr = PaintAttr::from_name(attr).ok_or_else(unknown)?;
                self.element(element)
                    .get(subpart)
                    .and_then(|record| record.sub(slot))
                    .and_then(|nested| nested.paint(attr))
                    .ok_or_else(unknown)
            }
            _ => Err(unknown()),
        }
    }
}

/// Built-in themes.
pub mod themes {
    use std::sync::Arc;

    use arbor_model::TaxonSource;

    use super::{Element, ElementTheme, MarkedPalette, Theme};
    use crate::color::Color;
    use crate::position::PositionalColor;
    use crate::style::StyleRecord;

    // Shared palette entries.
    const BRANCH: Color = Color::WHITE;
    const BAR: Color = Color::TRANSPARENT;
    const HIGHLIGHT: Color = Color::hsl(64.0, 100.0, 83.0); // pale yellow-green
    const INT_TEXT_STROKE_HOVER: Color = Color::rgba(255, 255, 255, 0.5);
    const INT_TEXT_FILL: Color = Color::BLACK;
    const INT_TEXT_FILL_HOVER: Color = Color::BLACK;
    const INT_SPONSOR_FILL: Color = Color::rgb(227, 200, 115); // muted gold
    const INT_SPONSOR_FILL_HOVER: Color = Color::WHITE;

    /// The standard Arbor look: white branchwork over positional leaf hues.
    pub fn canopy(taxa: Arc<dyn TaxonSource>) -> Theme {
        let positional = Arc::new(PositionalColor::new(taxa));

        let branch = ElementTheme::new()
            .base(StyleRecord::new().stroke(BRANCH))
            .style("highlight_concestor", StyleRecord::new().stroke(HIGHLIGHT))
            .style("highlight_search_hit", StyleRecord::new().stroke(HIGHLIGHT))
            .style(
                "highlight_search_hit1",
                StyleRecord::new().stroke(Color::rgba(255, 255, 255, 0.6)),
            )
            .style(
                "highlight_search_hit2",
                StyleRecord::new().stroke(Color::rgb(190, 140, 70)),
            )
            .style(
                "highlight_arrow_concestor",
                StyleRecord::new().fill(HIGHLIGHT),
            )
            .style(
                "highlight_arrow_search_hit",
                StyleRecord::new().fill(HIGHLIGHT),
            )
            .style(
                "highlight_arrow_search_hit1",
                StyleRecord::new().fill(Color::rgba(255, 255, 255, 0.6)),
            )
            .style(
                "highlight_arrow_search_hit2",
                StyleRecord::new().fill(Color::rgb(190, 140, 70)),
            );

        let interior = ElementTheme::new()
            .style(
                "pic_text_hover",
                StyleRecord::new()
                    .stroke(INT_TEXT_STROKE_HOVER)
                    .fill(INT_TEXT_FILL_HOVER),
            )
            .style("pic_text", StyleRecord::new().fill(INT_TEXT_FILL))
            .style("text_hover", StyleRecord::new().stroke(INT_TEXT_STROKE_HOVER))
            .style("text", StyleRecord::new().fill(INT_TEXT_FILL))
            .style(
                "sponsor_text_hover",
                StyleRecord::new().fill(INT_SPONSOR_FILL_HOVER),
            )
            .style("sponsor_text", StyleRecord::new().fill(INT_SPONSOR_FILL))
            .style("circle_hover", StyleRecord::new().stroke(BAR).fill(BAR))
            .style("circle", StyleRecord::new().stroke(BAR).fill(BRANCH))
            .style("circle_searchin", StyleRecord::new().stroke(HIGHLIGHT))
            .style(
                "circle_highlight",
                StyleRecord::new()
                    .outer(StyleRecord::new().fill(BRANCH))
                    .inner(StyleRecord::new().fill(HIGHLIGHT)),
            )
            .style(
                "copyright_hover",
                StyleRecord::new().fill(Color::WHITE).stroke(Color::BLACK),
            )
            .style(
                "copyright",
                StyleRecord::new()
                    .fill(Color::rgba(255, 255, 255, 0.5))
                    .stroke(Color::BLACK)
                    .text(StyleRecord::new().fill(Color::BLACK))
                    .text_hover(StyleRecord::new().fill(Color::BLACK)),
            );

        let signpost = ElementTheme::new()
            .style("pic", StyleRecord::new().fill(&positional))
            .style(
                "pic_hover",
                StyleRecord::new().stroke(Color::rgba(251, 255, 208, 0.8)),
            )
            .style("pic_inner", StyleRecord::new().stroke(Color::WHITE))
            .style(
                "pic_text",
                StyleRecord::new()
                    .stroke(Color::rgb(66, 66, 66))
                    .fill(Color::rgba(255, 255, 255, 1.0)),
            )
            .style(
                "pic_text_hover",
                StyleRecord::new()
                    .stroke(Color::rgba(0, 0, 0, 0.8))
                    // Alpha pinned so hover text is always opaque.
                    .fill(Color::hsla(64.0, 100.0, 83.0, 1.0)),
            );

        let leaf = ElementTheme::new()
            .style("bg", StyleRecord::new().fill(&positional))
            .style("outline_hover", StyleRecord::new().fill(Color::rgb(0, 50, 0)))
            .style(
                "outline",
                StyleRecord::new().fill(Color::TRANSPARENT).stroke(Color::TRANSPARENT),
            )
            .style("inside", StyleRecord::new().fill(&positional))
            .style("inside_hover", StyleRecord::new().fill(&positional))
            .style(
                "text",
                StyleRecord::new()
                    .stroke(Color::rgb(66, 66, 66))
                    .fill(Color::rgba(255, 255, 255, 1.0)),
            )
            .style(
                "text_hover",
                StyleRecord::new()
                    .stroke(Color::rgba(0, 0, 0, 0.8))
                    // Alpha pinned so hover text is always opaque.
                    .fill(Color::hsla(64.0, 100.0, 83.0, 1.0)),
            )
            .style("sponsor", StyleRecord::new().fill(Color::rgb(150, 180, 100)))
            .style("sponsor_hover", StyleRecord::new().fill(Color::WHITE))
            .style(
                "copyright_hover",
                StyleRecord::new().fill(Color::BLACK).stroke(Color::WHITE),
            )
            .style(
                "copyright",
                StyleRecord::new()
                    .fill(Color::rgba(30, 30, 30, 0.3))
                    .stroke(Color::rgb(80, 80, 80))
                    .text(StyleRecord::new().fill(Color::rgb(80, 80, 80)))
                    .text_hover(StyleRecord::new().fill(Color::WHITE)),
            );

        let marked = MarkedPalette::new(vec![
            HIGHLIGHT,
            Color::hsl(133.0, 100.0, 83.0), // mint
            Color::hsl(188.0, 100.0, 83.0), // sky
            Color::hsl(252.0, 100.0, 83.0), // lavender
            Color::hsl(296.0, 100.0, 83.0), // orchid
            Color::hsl(332.0, 100.0, 83.0), // rose
        ]);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            subparts = branch.len() + interior.len() + signpost.len() + leaf.len(),
            "canopy theme built"
        );

        Theme::new(positional)
            .with_element(Element::Branch, branch)
            .with_element(Element::Interior, interior)
            .with_element(Element::Signpost, signpost)
            .with_element(Element::Leaf, leaf)
            .with_marked_areas(marked)
    }
}
