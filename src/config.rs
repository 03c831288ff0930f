use crate::error::LayoutError;
use crate::page::PageGeometry;
use crate::units::Mm;
use serde::{Deserialize, Serialize};

/// Font sizes, in points, for each kind of text the engine sets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontSizes {
    pub name: f32,
    pub contact: f32,
    pub heading: f32,
    pub summary: f32,
    pub entry_title: f32,
    /// Dates, subtitles and entry descriptions
    pub entry_detail: f32,
    pub link: f32,
    pub skill: f32,
}

impl Default for FontSizes {
    fn default() -> Self {
        FontSizes {
            name: 24.0,
            contact: 11.0,
            heading: 16.0,
            summary: 11.0,
            entry_title: 12.0,
            entry_detail: 10.0,
            link: 9.0,
            skill: 10.0,
        }
    }
}

/// Vertical advances, in millimetres, between consecutive baselines
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Spacing {
    /// Advance after the name line
    pub name: Mm,
    /// Advance after the contact line
    pub contact: Mm,
    /// Advance after the website line, or the gap left in its place
    pub website: Mm,
    pub website_absent: Mm,
    /// Distance from a heading's baseline down to its rule
    pub heading_rule_offset: Mm,
    /// Total advance of a heading, rule included
    pub heading: Mm,
    pub heading_rule_width: Mm,
    /// Advance per wrapped line of paragraph or description text
    pub line: Mm,
    /// Advance for the title and subtitle lines of an entry
    pub entry_line: Mm,
    /// Offset of a credential link below the preceding line
    pub link_offset: Mm,
    pub skill_row: Mm,
    pub skill_column_gap: Mm,
    /// Gaps left after each kind of block
    pub paragraph_gap: Mm,
    pub entry_gap: Mm,
    pub certification_gap: Mm,
    /// Extra gap after the last block of a section
    pub section_gap: Mm,
}

impl Default for Spacing {
    fn default() -> Self {
        Spacing {
            name: Mm(10.0),
            contact: Mm(5.0),
            website: Mm(10.0),
            website_absent: Mm(5.0),
            heading_rule_offset: Mm(4.0),
            heading: Mm(9.0),
            heading_rule_width: Mm(0.2),
            line: Mm(5.0),
            entry_line: Mm(5.0),
            link_offset: Mm(2.0),
            skill_row: Mm(6.0),
            skill_column_gap: Mm(0.0),
            paragraph_gap: Mm(5.0),
            entry_gap: Mm(5.0),
            certification_gap: Mm(8.0),
            section_gap: Mm(3.0),
        }
    }
}

/// Remaining space below which a block starts on a fresh page instead of
/// squeezing its first lines onto the bottom of the current one
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LowWaterMarks {
    pub entry: Mm,
    pub certification: Mm,
    pub skill_list: Mm,
    pub paragraph: Mm,
}

impl Default for LowWaterMarks {
    fn default() -> Self {
        LowWaterMarks {
            entry: Mm(20.0),
            certification: Mm(15.0),
            skill_list: Mm(15.0),
            paragraph: Mm(0.0),
        }
    }
}

/// Every typographic constant used during layout. The defaults reproduce the
/// classic single-column A4 résumé.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub geometry: PageGeometry,
    pub font_sizes: FontSizes,
    pub spacing: Spacing,
    pub low_water: LowWaterMarks,
    /// Printed when the résumé has no name
    pub placeholder_name: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            geometry: PageGeometry::default(),
            font_sizes: FontSizes::default(),
            spacing: Spacing::default(),
            low_water: LowWaterMarks::default(),
            placeholder_name: "Your Name".to_string(),
        }
    }
}

impl LayoutConfig {
    /// Load a configuration from JSON. Any field left out keeps its default value.
    pub fn from_json(json: &str) -> Result<LayoutConfig, LayoutError> {
        let config: LayoutConfig = serde_json::from_str(json).map_err(LayoutError::Config)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the margins leave a non-empty content box
    pub fn validate(&self) -> Result<(), LayoutError> {
        let geometry = &self.geometry;
        if geometry.content_width() <= Mm::ZERO || geometry.content_height() <= Mm::ZERO {
            return Err(LayoutError::InvalidGeometry {
                width: geometry.width,
                height: geometry.height,
            });
        }
        Ok(())
    }
}
