//! Content stream generation for laid out pages.

use crate::colour::Colour;
use crate::font::FontStyle;
use crate::page::{DrawCommand, Page, TextSpan};
use crate::units::{Mm, Pt};
use std::io::Write;

/// Encodes text for the WinAnsi encoded standard fonts. Characters the
/// encoding cannot represent print as `?`.
pub(crate) fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .filter(|ch| !ch.is_control())
        .map(|ch| match ch {
            ' '..='~' | '\u{a0}'..='\u{ff}' => ch as u8,
            '€' => 0x80,
            '‚' => 0x82,
            '„' => 0x84,
            '…' => 0x85,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '•' => 0x95,
            '–' => 0x96,
            '—' => 0x97,
            '™' => 0x99,
            _ => b'?',
        })
        .collect()
}

/// Flips a top-down position into the bottom-up point space of PDF
fn to_pdf_y(page_height: Mm, y: Mm) -> f32 {
    Pt::from(page_height - y).0
}

/// Renders the draw commands of a page into PDF content stream operators.
#[allow(clippy::write_with_newline)]
pub(crate) fn render_commands(page: &Page) -> Result<Vec<u8>, std::io::Error> {
    let mut content: Vec<u8> = Vec::default();
    if page.is_empty() {
        return Ok(content);
    }

    let height = page.geometry.height;
    let mut current_font: Option<(FontStyle, f32)> = None;
    let mut current_colour: Option<Colour> = None;

    write!(&mut content, "q\n")?;
    for command in page.commands() {
        match command {
            DrawCommand::Text(span) => {
                if current_font != Some((span.style, span.font_size)) {
                    current_font = Some((span.style, span.font_size));
                    write!(
                        &mut content,
                        "/{} {} Tf\n",
                        span.style.resource_name(),
                        span.font_size
                    )?;
                }
                if current_colour != Some(span.colour) {
                    current_colour = Some(span.colour);
                    write_colour(&mut content, span.colour)?;
                }
                write_span(&mut content, span, height)?;
            }
            DrawCommand::Rule { x1, y, x2, width } => {
                let y = to_pdf_y(height, *y);
                write!(&mut content, "{} w\n", Pt::from(*width).0)?;
                write!(&mut content, "{} {} m\n", Pt::from(*x1).0, y)?;
                write!(&mut content, "{} {} l\n", Pt::from(*x2).0, y)?;
                write!(&mut content, "S\n")?;
            }
        }
    }
    write!(&mut content, "Q\n")?;

    Ok(content)
}

#[allow(clippy::write_with_newline)]
fn write_span(content: &mut Vec<u8>, span: &TextSpan, page_height: Mm) -> Result<(), std::io::Error> {
    write!(content, "BT\n")?;
    write!(
        content,
        "{} {} Td\n",
        Pt::from(span.x).0,
        to_pdf_y(page_height, span.y)
    )?;
    write!(content, "<")?;
    for byte in encode_win_ansi(&span.content) {
        write!(content, "{byte:02x}")?;
    }
    write!(content, "> Tj\n")?;
    write!(content, "ET\n")?;
    Ok(())
}

#[allow(clippy::write_with_newline)]
fn write_colour(content: &mut Vec<u8>, colour: Colour) -> Result<(), std::io::Error> {
    match colour {
        Colour::RGB { r, g, b } => write!(content, "{r} {g} {b} rg\n"),
        Colour::Grey { g } => write!(content, "{g} g\n"),
    }
}
