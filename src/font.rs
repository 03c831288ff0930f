use crate::{
    refs::{ObjectReferences, RefType},
    Mm, Pt,
};
use pdf_writer::{Name, Pdf};
use serde::{Deserialize, Serialize};

/// The three faces of the single font family the engine lays out with. Every face
/// maps onto one of the standard 14 PDF fonts, so nothing needs to be embedded.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    #[default]
    Normal,
    Bold,
    Italic,
}

impl FontStyle {
    /// Every face, in the order they are registered in generated PDFs
    pub const ALL: [FontStyle; 3] = [FontStyle::Normal, FontStyle::Bold, FontStyle::Italic];

    pub fn is_bold(&self) -> bool {
        matches!(self, FontStyle::Bold)
    }

    pub fn is_italic(&self) -> bool {
        matches!(self, FontStyle::Italic)
    }

    /// The PostScript name of the standard font backing this face
    pub fn base_font(&self) -> &'static str {
        match self {
            FontStyle::Normal => "Helvetica",
            FontStyle::Bold => "Helvetica-Bold",
            FontStyle::Italic => "Helvetica-Oblique",
        }
    }

    /// Name of the font within a page's resource dictionary
    pub(crate) fn resource_name(&self) -> &'static str {
        match self {
            FontStyle::Normal => "F0",
            FontStyle::Bold => "F1",
            FontStyle::Italic => "F2",
        }
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, writer: &mut Pdf) {
        let id = refs.gen(RefType::Font(*self));
        writer
            .type1_font(id)
            .base_font(Name(self.base_font().as_bytes()))
            .encoding_predefined(Name(b"WinAnsiEncoding"));
    }
}

/// Measures how wide a run of text is once rendered. Layout only ever asks
/// this oracle, so alternative metrics can be swapped in for testing or for
/// other renderers.
///
/// Implementations must be deterministic, return zero for the empty string and
/// never return a smaller width when text is appended.
pub trait TextMeasurer: Send + Sync {
    /// The rendered width of `text` at `font_size` points in the given face
    fn measure(&self, text: &str, font_size: f32, style: FontStyle) -> Mm;
}

/// Character advance widths of the standard Helvetica faces, in 1/1000 of the
/// font size. Tables cover printable ASCII; index = (char as usize) - 32.
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' ' .. '/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // '0' .. '?'
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // '@' .. 'O'
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // 'P' .. '_'
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // '`' .. 'o'
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, // 'p' .. '~'
];

const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // ' ' .. '/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611, // '0' .. '?'
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778, // '@' .. 'O'
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556, // 'P' .. '_'
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611, // '`' .. 'o'
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584, // 'p' .. '~'
];

/// Estimated advance for glyphs outside the tables
const HELVETICA_AVERAGE_WIDTH: u16 = 556;
const HELVETICA_BOLD_AVERAGE_WIDTH: u16 = 611;

/// Static Helvetica metrics. Oblique shares the upright advances, as it does in
/// the real font. Characters without a table entry are measured with the
/// family's average width rather than failing; control characters are zero-width.
#[derive(Debug, Default, Copy, Clone)]
pub struct StandardMetrics;

impl StandardMetrics {
    /// Advance width of a single character, in 1/1000 of the font size
    pub fn char_width(ch: char, style: FontStyle) -> u16 {
        let (table, average) = match style {
            FontStyle::Bold => (&HELVETICA_BOLD_WIDTHS, HELVETICA_BOLD_AVERAGE_WIDTH),
            FontStyle::Normal | FontStyle::Italic => (&HELVETICA_WIDTHS, HELVETICA_AVERAGE_WIDTH),
        };

        if ch.is_control() {
            return 0;
        }

        (ch as usize)
            .checked_sub(32)
            .and_then(|index| table.get(index))
            .copied()
            .unwrap_or(average)
    }
}

impl TextMeasurer for StandardMetrics {
    fn measure(&self, text: &str, font_size: f32, style: FontStyle) -> Mm {
        let units: u32 = text
            .chars()
            .map(|ch| StandardMetrics::char_width(ch, style) as u32)
            .sum();
        Pt(units as f32 * font_size / 1000.0).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_has_no_width() {
        assert_eq!(StandardMetrics.measure("", 12.0, FontStyle::Normal), Mm(0.0));
    }

    #[test]
    fn width_scales_with_font_size() {
        let small = StandardMetrics.measure("Experience", 10.0, FontStyle::Normal);
        let large = StandardMetrics.measure("Experience", 20.0, FontStyle::Normal);
        assert!((large.0 - small.0 * 2.0).abs() < 1e-4);
    }

    #[test]
    fn bold_is_wider_than_regular() {
        let regular = StandardMetrics.measure("Software Engineer", 12.0, FontStyle::Normal);
        let bold = StandardMetrics.measure("Software Engineer", 12.0, FontStyle::Bold);
        assert!(bold > regular);
    }

    #[test]
    fn italic_shares_regular_advances() {
        assert_eq!(
            StandardMetrics.measure("Remote", 10.0, FontStyle::Italic),
            StandardMetrics.measure("Remote", 10.0, FontStyle::Normal)
        );
    }

    #[test]
    fn unknown_glyphs_fall_back_to_average_width() {
        assert_eq!(StandardMetrics::char_width('語', FontStyle::Normal), 556);
        assert_eq!(StandardMetrics::char_width('é', FontStyle::Bold), 611);
        assert_eq!(StandardMetrics::char_width('\n', FontStyle::Normal), 0);
    }

    #[test]
    fn known_widths_match_afm() {
        // 'W' is 944 units; at 10pt that is 9.44pt
        let width: Pt = StandardMetrics.measure("W", 10.0, FontStyle::Normal).into();
        assert!((width.0 - 9.44).abs() < 1e-3);
    }
}
