#![forbid(unsafe_code)]

//! Theming for the Arbor tree-of-life renderer.
//!
//! This crate provides the immutable style tables the canvas layer draws
//! from:
//! - [`Theme`] - the full style table for one visual skin
//! - [`ElementTheme`] - per-category sub-part styles
//! - [`StyleRecord`] - fill/stroke paints plus nested records
//! - [`Paint`] - a literal [`Color`] or a shared [`PositionalColor`]
//! - [`PositionalColor`] - hue from a node's position in the taxon ordering
//! - [`MarkedPalette`] - cycling colors for user-marked subtrees
//!
//! Lookup is exact-match: interaction states such as `text_hover` carry
//! their own complete records, and asking for a path the theme does not
//! define is an error ([`StyleError::UnknownStylePath`]), not a fallback.
//!
//! # Example
//! ```
//! use std::sync::Arc;
//! use arbor_model::{NodeSpan, TaxonTable};
//! use arbor_style::{Element, PaintAttr, themes};
//!
//! let taxa = Arc::new(TaxonTable::from_names(vec!["taxon"; 180]));
//! let theme = themes::canopy(taxa);
//!
//! // Literal paints render directly.
//! let sponsor = theme.resolve(Element::Leaf, "sponsor", PaintAttr::Fill)?;
//! assert_eq!(sponsor.literal().unwrap().to_string(), "rgb(150,180,100)");
//!
//! // Positional paints derive their hue from the node being drawn.
//! let bg = theme.resolve(Element::Leaf, "bg", PaintAttr::Fill)?;
//! let color = bg.positional().unwrap().color(&NodeSpan::new(10.0, 20.0), None)?;
//! assert_eq!(color.to_string(), "hsla(30,60%,60%,1)");
//! # Ok::<(), arbor_style::StyleError>(())
//! ```

pub mod color;
pub mod position;
pub mod style;
pub mod theme;

pub use color::Color;
pub use position::PositionalColor;
pub use style::{Paint, PaintAttr, StyleError, StyleRecord, SubRecord};
pub use theme::{Element, ElementTheme, MarkedPalette, Theme, themes};
