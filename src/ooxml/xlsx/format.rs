//! Cell formatting types.
//!
//! Colors are RGB hex strings. Six-digit values ("366092") are widened to the
//! ARGB form Excel stores ("FF366092") when styles are written.

use std::hash::{Hash, Hasher};

/// Cell format information.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CellFormat {
    pub font: Option<CellFont>,
    pub fill: Option<CellFill>,
    pub border: Option<CellBorder>,
    pub alignment: Option<CellAlignment>,
}

impl CellFormat {
    /// An empty format.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the font.
    pub fn with_font(mut self, font: CellFont) -> Self {
        self.font = Some(font);
        self
    }

    /// Set the fill.
    pub fn with_fill(mut self, fill: CellFill) -> Self {
        self.fill = Some(fill);
        self
    }

    /// Set the border.
    pub fn with_border(mut self, border: CellBorder) -> Self {
        self.border = Some(border);
        self
    }

    /// Set the alignment.
    pub fn with_alignment(mut self, alignment: CellAlignment) -> Self {
        self.alignment = Some(alignment);
        self
    }
}

/// Font properties for a cell.
#[derive(Debug, Clone, PartialEq)]
pub struct CellFont {
    pub name: Option<String>,
    pub size: Option<f64>,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub color: Option<String>,
}

impl CellFont {
    /// Default font with bold set.
    pub fn bold() -> Self {
        Self {
            bold: true,
            ..Default::default()
        }
    }

    /// Set the point size.
    pub fn size(mut self, size: f64) -> Self {
        self.size = Some(size);
        self
    }

    /// Set the font color.
    pub fn color(mut self, color: &str) -> Self {
        self.color = Some(color.to_string());
        self
    }

    /// Set italic.
    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }
}

#[allow(clippy::derivable_impls)]
impl Default for CellFont {
    fn default() -> Self {
        Self {
            name: None,
            size: None,
            bold: false,
            italic: false,
            underline: false,
            color: None,
        }
    }
}

// Sizes are always finite point values, so bitwise equality is sound.
impl Eq for CellFont {}

impl Hash for CellFont {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.size.map(f64::to_bits).hash(state);
        self.bold.hash(state);
        self.italic.hash(state);
        self.underline.hash(state);
        self.color.hash(state);
    }
}

/// Fill properties for a cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CellFill {
    pub pattern_type: CellFillPatternType,
    pub fg_color: Option<String>,
    pub bg_color: Option<String>,
}

impl CellFill {
    /// A solid fill with the same foreground and background color.
    pub fn solid(color: &str) -> Self {
        Self {
            pattern_type: CellFillPatternType::Solid,
            fg_color: Some(color.to_string()),
            bg_color: Some(color.to_string()),
        }
    }
}

/// Cell fill pattern types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellFillPatternType {
    None,
    Solid,
    Gray125,
}

impl CellFillPatternType {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Solid => "solid",
            Self::Gray125 => "gray125",
        }
    }
}

/// Border properties for a cell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CellBorder {
    pub left: Option<CellBorderSide>,
    pub right: Option<CellBorderSide>,
    pub top: Option<CellBorderSide>,
    pub bottom: Option<CellBorderSide>,
}

impl CellBorder {
    /// The same line style on all four sides.
    pub fn all(style: CellBorderLineStyle) -> Self {
        let side = Some(CellBorderSide { style, color: None });
        Self {
            left: side.clone(),
            right: side.clone(),
            top: side.clone(),
            bottom: side,
        }
    }
}

/// Border side properties.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CellBorderSide {
    pub style: CellBorderLineStyle,
    pub color: Option<String>,
}

/// Border line styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellBorderLineStyle {
    Thin,
    Medium,
    Thick,
    Dashed,
    Dotted,
    Double,
}

impl CellBorderLineStyle {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Thin => "thin",
            Self::Medium => "medium",
            Self::Thick => "thick",
            Self::Dashed => "dashed",
            Self::Dotted => "dotted",
            Self::Double => "double",
        }
    }
}

/// Alignment properties for a cell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CellAlignment {
    pub horizontal: Option<HorizontalAlignment>,
    pub vertical: Option<VerticalAlignment>,
    pub wrap_text: bool,
}

impl CellAlignment {
    /// Horizontally centred.
    pub fn centered() -> Self {
        Self {
            horizontal: Some(HorizontalAlignment::Center),
            ..Default::default()
        }
    }
}

/// Horizontal alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HorizontalAlignment {
    Left,
    Center,
    Right,
}

impl HorizontalAlignment {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

/// Vertical alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerticalAlignment {
    Top,
    Center,
    Bottom,
}

impl VerticalAlignment {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Center => "center",
            Self::Bottom => "bottom",
        }
    }
}

/// Widen a 6-digit RGB color to ARGB with full opacity.
pub(crate) fn argb(color: &str) -> String {
    let color = color.trim_start_matches('#');
    if color.len() == 6 {
        format!("FF{}", color.to_ascii_uppercase())
    } else {
        color.to_ascii_uppercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argb_widens_rgb() {
        assert_eq!(argb("366092"), "FF366092");
        assert_eq!(argb("#ffffff"), "FFFFFFFF");
        assert_eq!(argb("80ED7D31"), "80ED7D31");
    }

    #[test]
    fn border_all_sets_four_sides() {
        let border = CellBorder::all(CellBorderLineStyle::Thin);
        for side in [&border.left, &border.right, &border.top, &border.bottom] {
            assert_eq!(side.as_ref().unwrap().style, CellBorderLineStyle::Thin);
        }
    }

    #[test]
    fn equal_fonts_compare_equal() {
        let a = CellFont::bold().size(12.0).color("FFFFFF");
        let b = CellFont::bold().size(12.0).color("FFFFFF");
        assert_eq!(a, b);
        assert_ne!(a, CellFont::bold().size(11.0).color("FFFFFF"));
    }
}
