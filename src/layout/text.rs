use crate::font::{FontStyle, TextMeasurer};
use crate::units::Mm;
use std::iter::Peekable;
use std::str::SplitWhitespace;

/// Breaks `text` into lines no wider than `max_width`, greedily packing as many
/// whitespace-separated words onto each line as will fit.
///
/// # Wrapping Behavior
///
/// - Runs of whitespace collapse to a single space between words.
/// - A newline always ends the current line, so an author's paragraph breaks
///   survive. Blank lines between paragraphs are kept as empty lines; blank
///   lines before the first or after the last paragraph are dropped.
/// - A word that is wider than `max_width` on its own is placed alone on its
///   line and allowed to overflow. Words are never split.
///
/// Empty or whitespace-only text produces no lines at all.
///
/// The returned iterator is lazy and borrows `text`; calling `wrap_text` again
/// with the same arguments always yields the same lines.
///
/// # Example
///
/// ```
/// use cv_pdf::{FontStyle, Mm, StandardMetrics};
/// use cv_pdf::layout::wrap_text;
///
/// let lines: Vec<String> =
///     wrap_text("one two three", Mm(15.0), 10.0, FontStyle::Normal, &StandardMetrics).collect();
/// assert_eq!(lines, vec!["one two", "three"]);
/// ```
pub fn wrap_text<'a, M: TextMeasurer + ?Sized>(
    text: &'a str,
    max_width: Mm,
    font_size: f32,
    style: FontStyle,
    measurer: &'a M,
) -> WrappedLines<'a, M> {
    // `lines` also strips the '\r' of Windows line endings
    let segments: Vec<&'a str> = text.lines().collect();

    // drop blank paragraphs at either end
    let first = segments.iter().position(|s| !s.trim().is_empty());
    let last = segments.iter().rposition(|s| !s.trim().is_empty());
    let segments = match (first, last) {
        (Some(first), Some(last)) => segments[first..=last].to_vec(),
        _ => Vec::new(),
    };

    WrappedLines {
        measurer,
        max_width,
        font_size,
        style,
        segments: segments.into_iter(),
        words: None,
    }
}

/// A lazy sequence of wrapped lines, created by [`wrap_text`]
pub struct WrappedLines<'a, M: TextMeasurer + ?Sized> {
    measurer: &'a M,
    max_width: Mm,
    font_size: f32,
    style: FontStyle,
    segments: std::vec::IntoIter<&'a str>,
    words: Option<Peekable<SplitWhitespace<'a>>>,
}

impl<'a, M: TextMeasurer + ?Sized> WrappedLines<'a, M> {
    fn fits(&self, line: &str) -> bool {
        self.measurer.measure(line, self.font_size, self.style) <= self.max_width
    }
}

impl<'a, M: TextMeasurer + ?Sized> Iterator for WrappedLines<'a, M> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            if let Some(mut words) = self.words.take() {
                if let Some(first) = words.next() {
                    let mut line = first.to_string();
                    while let Some(word) = words.peek() {
                        let candidate = format!("{line} {word}");
                        if !self.fits(&candidate) {
                            break;
                        }
                        line = candidate;
                        words.next();
                    }
                    self.words = Some(words);
                    return Some(line);
                }
                // paragraph exhausted, move on to the next one
                continue;
            }

            let segment = self.segments.next()?;
            let mut words = segment.split_whitespace().peekable();
            if words.peek().is_none() {
                // an intentional blank line between paragraphs
                return Some(String::new());
            }
            self.words = Some(words);
        }
    }
}
