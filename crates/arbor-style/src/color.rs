#![forbid(unsafe_code)]

//! Color values in the renderer's color model.
//!
//! The canvas layer consumes CSS-style color expressions. [`Color`] carries
//! the four accepted forms as typed channels and renders the canonical
//! expression through `Display`, so any value that exists is syntactically
//! valid paint by construction.
//!
//! # Example
//!
//! ```
//! use arbor_style::Color;
//!
//! assert_eq!(Color::rgb(150, 180, 100).to_string(), "rgb(150,180,100)");
//! assert_eq!(Color::hsla(30.0, 60.0, 60.0, 1.0).to_string(), "hsla(30,60%,60%,1)");
//! ```

use std::fmt;

/// A color in one of the four forms the canvas accepts.
///
/// `r`/`g`/`b` are 0–255 channels, `a` is opacity in 0–1, `s`/`l` are
/// percentages. `h` is degrees on the hue circle and is deliberately NOT
/// normalized here: positional hues may land outside [0, 360] and the
/// renderer treats hue as cyclic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    Rgb { r: u8, g: u8, b: u8 },
    Rgba { r: u8, g: u8, b: u8, a: f64 },
    Hsl { h: f64, s: f64, l: f64 },
    Hsla { h: f64, s: f64, l: f64, a: f64 },
}

impl Color {
    /// Opaque white.
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    /// Opaque black.
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    /// Fully transparent black.
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0.0);

    /// Opaque RGB color.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb { r, g, b }
    }

    /// RGB color with explicit opacity.
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self::Rgba { r, g, b, a }
    }

    /// Opaque HSL color.
    #[must_use]
    pub const fn hsl(h: f64, s: f64, l: f64) -> Self {
        Self::Hsl { h, s, l }
    }

    /// HSL color with explicit opacity.
    #[must_use]
    pub const fn hsla(h: f64, s: f64, l: f64, a: f64) -> Self {
        Self::Hsla { h, s, l, a }
    }

    /// Opacity of this color; the alpha-less forms are opaque.
    #[must_use]
    pub fn alpha(&self) -> f64 {
        match *self {
            Color::Rgb { .. } | Color::Hsl { .. } => 1.0,
            Color::Rgba { a, .. } | Color::Hsla { a, .. } => a,
        }
    }

    /// The same color with opacity `a`, upgrading to an alpha-carrying form
    /// if needed.
    #[must_use]
    pub fn with_alpha(self, a: f64) -> Self {
        match self {
            Color::Rgb { r, g, b } | Color::Rgba { r, g, b, .. } => Color::Rgba { r, g, b, a },
            Color::Hsl { h, s, l } | Color::Hsla { h, s, l, .. } => Color::Hsla { h, s, l, a },
        }
    }

    /// Whether this color is fully opaque.
    #[must_use]
    pub fn is_opaque(&self) -> bool {
        self.alpha() == 1.0
    }

    /// Hue in degrees, for the HSL forms.
    #[must_use]
    pub fn hue(&self) -> Option<f64> {
        match *self {
            Color::Hsl { h, .. } | Color::Hsla { h, .. } => Some(h),
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Color::Rgb { r, g, b } => write!(f, "rgb({r},{g},{b})"),
            Color::Rgba { r, g, b, a } => write!(f, "rgba({r},{g},{b},{a})"),
            Color::Hsl { h, s, l } => write!(f, "hsl({h},{s}%,{l}%)"),
            Color::Hsla { h, s, l, a } => write!(f, "hsla({h},{s}%,{l}%,{a})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- display tests ---

    #[test]
    fn rgb_renders_canvas_form() {
        assert_eq!(Color::rgb(150, 180, 100).to_string(), "rgb(150,180,100)");
    }

    #[test]
    fn rgba_renders_canvas_form() {
        assert_eq!(Color::rgba(0, 0, 0, 0.0).to_string(), "rgba(0,0,0,0)");
        assert_eq!(
            Color::rgba(255, 255, 255, 0.5).to_string(),
            "rgba(255,255,255,0.5)"
        );
    }

    #[test]
    fn hsl_renders_canvas_form() {
        assert_eq!(Color::hsl(64.0, 100.0, 83.0).to_string(), "hsl(64,100%,83%)");
    }

    #[test]
    fn hsla_renders_canvas_form() {
        assert_eq!(
            Color::hsla(30.0, 60.0, 60.0, 1.0).to_string(),
            "hsla(30,60%,60%,1)"
        );
        assert_eq!(
            Color::hsla(360.0, 60.0, 60.0, 0.5).to_string(),
            "hsla(360,60%,60%,0.5)"
        );
    }

    #[test]
    fn whole_number_channels_render_without_decimals() {
        // f64 Display drops the trailing ".0"; the canvas form relies on it.
        assert_eq!(Color::hsla(0.0, 60.0, 60.0, 1.0).to_string(), "hsla(0,60%,60%,1)");
    }

    #[test]
    fn fractional_hue_renders_in_full() {
        assert_eq!(
            Color::hsla(12.5, 60.0, 60.0, 1.0).to_string(),
            "hsla(12.5,60%,60%,1)"
        );
    }

    #[test]
    fn out_of_range_hue_passes_through() {
        assert_eq!(
            Color::hsla(420.0, 60.0, 60.0, 1.0).to_string(),
            "hsla(420,60%,60%,1)"
        );
        assert_eq!(
            Color::hsla(-30.0, 60.0, 60.0, 1.0).to_string(),
            "hsla(-30,60%,60%,1)"
        );
    }

    // --- alpha tests ---

    #[test]
    fn alpha_less_forms_are_opaque() {
        assert_eq!(Color::rgb(1, 2, 3).alpha(), 1.0);
        assert_eq!(Color::hsl(10.0, 20.0, 30.0).alpha(), 1.0);
        assert!(Color::rgb(1, 2, 3).is_opaque());
    }

    #[test]
    fn alpha_forms_report_their_channel() {
        assert_eq!(Color::rgba(1, 2, 3, 0.25).alpha(), 0.25);
        assert_eq!(Color::hsla(0.0, 0.0, 0.0, 0.75).alpha(), 0.75);
        assert!(!Color::rgba(1, 2, 3, 0.25).is_opaque());
    }

    #[test]
    fn explicit_full_alpha_is_opaque() {
        assert!(Color::hsla(64.0, 100.0, 83.0, 1.0).is_opaque());
    }

    #[test]
    fn with_alpha_upgrades_rgb() {
        let c = Color::rgb(10, 20, 30).with_alpha(0.5);
        assert_eq!(c, Color::rgba(10, 20, 30, 0.5));
    }

    #[test]
    fn with_alpha_upgrades_hsl() {
        let c = Color::hsl(64.0, 100.0, 83.0).with_alpha(0.8);
        assert_eq!(c, Color::hsla(64.0, 100.0, 83.0, 0.8));
    }

    #[test]
    fn with_alpha_replaces_existing_channel() {
        let c = Color::rgba(1, 2, 3, 0.1).with_alpha(0.9);
        assert_eq!(c.alpha(), 0.9);
    }

    // --- accessor tests ---

    #[test]
    fn hue_only_on_hsl_forms() {
        assert_eq!(Color::hsl(33.0, 1.0, 1.0).hue(), Some(33.0));
        assert_eq!(Color::hsla(400.0, 1.0, 1.0, 0.5).hue(), Some(400.0));
        assert_eq!(Color::rgb(1, 2, 3).hue(), None);
    }

    #[test]
    fn named_constants() {
        assert_eq!(Color::WHITE.to_string(), "rgb(255,255,255)");
        assert_eq!(Color::BLACK.to_string(), "rgb(0,0,0)");
        assert_eq!(Color::TRANSPARENT.to_string(), "rgba(0,0,0,0)");
        assert!(!Color::TRANSPARENT.is_opaque());
    }

    #[test]
    fn colors_are_copy_and_compare_by_value() {
        let a = Color::hsla(1.0, 2.0, 3.0, 0.4);
        let b = a;
        assert_eq!(a, b);
        assert_ne!(a, a.with_alpha(0.5));
    }
}
