//! Fixed colour palette and type sizes
//!
//! The palette is a plain value handed to the compiler. There is one
//! standard palette; forms are not themed.

use formdoc_model::{Border, CellBorders, Color};

/// Glyph prepended to bullet lines
pub const BULLET_GLYPH: &str = "\u{2022}";

/// Font sizes in half-points
pub mod sizes {
    pub const TITLE: u32 = 32;
    pub const SUBTITLE: u32 = 24;
    pub const HEADING: u32 = 26;
    pub const BODY: u32 = 22;
    pub const SMALL: u32 = 18;
}

/// Colours used by every section renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Title and heading text
    pub primary: Color,
    /// Body text
    pub text: Color,
    /// Sublabels, prompts and the footer
    pub muted: Color,
    /// Checklist header row fill
    pub header_fill: Color,
    /// Checklist header row text
    pub header_text: Color,
    /// Alternate checklist row fill
    pub stripe_fill: Color,
    /// Fill-in and writing lines
    pub rule: Color,
    /// Table grid lines
    pub grid: Color,
}

impl Palette {
    pub const STANDARD: Palette = Palette {
        primary: Color::rgb(0x1F, 0x38, 0x64),
        text: Color::rgb(0x26, 0x26, 0x26),
        muted: Color::rgb(0x59, 0x59, 0x59),
        header_fill: Color::rgb(0x1F, 0x38, 0x64),
        header_text: Color::rgb(0xFF, 0xFF, 0xFF),
        stripe_fill: Color::rgb(0xF2, 0xF5, 0xFA),
        rule: Color::rgb(0x8C, 0x8C, 0x8C),
        grid: Color::rgb(0xBF, 0xBF, 0xBF),
    };

    /// Thin line for fill-in fields and ruled writing areas
    pub fn rule_border(&self) -> Border {
        Border::single(4, self.rule)
    }

    /// Grid on every edge of a table cell
    pub fn grid_borders(&self) -> CellBorders {
        CellBorders::all(Border::single(4, self.grid))
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::STANDARD
    }
}
