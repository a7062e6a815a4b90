//! Render settings
//!
//! Settings are loaded from TOML; every table and key is optional:
//!
//! ```toml
//! [footer]
//! disclaimer = "Template only. Adapt to your practice before use."
//!
//! [layout]
//! signature_row_height = 720
//! description_line_gap = 60
//! description_block_gap = 240
//! bullet_indent = 360
//! writing_line_spacing = 280
//! ```
//!
//! Lengths are twips.

use serde::{Deserialize, Serialize};

/// Top-level settings structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RenderSettings {
    pub footer: FooterSettings,
    pub layout: LayoutSettings,
}

impl RenderSettings {
    /// Parse settings from a TOML string
    pub fn from_toml_str(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }
}

/// Footer disclaimer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterSettings {
    pub disclaimer: String,
}

impl Default for FooterSettings {
    fn default() -> Self {
        Self {
            disclaimer: "This template is provided for guidance only. Review it against current \
                         regulations and adapt it to your organisation before use."
                .to_string(),
        }
    }
}

/// Geometry of the generated document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    /// Minimum height of each signature row
    pub signature_row_height: u32,
    /// Space after interior description lines
    pub description_line_gap: u32,
    /// Space after the last line of a description block
    pub description_block_gap: u32,
    /// Left indent of bullet lines
    pub bullet_indent: u32,
    /// Space above each ruled writing line
    pub writing_line_spacing: u32,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            signature_row_height: 720,
            description_line_gap: 60,
            description_block_gap: 240,
            bullet_indent: 360,
            writing_line_spacing: 280,
        }
    }
}
