use crate::error::LayoutError;
use crate::refs::{ObjectReferences, RefType};
use crate::units::{Mm, Pt};
use pdf_writer::{Finish, Pdf, Ref, TextStr};
use serde::{Deserialize, Serialize};

/// Where a section heading landed, recorded as the document is laid out
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutlineEntry {
    pub title: String,
    pub page_index: usize,
    /// Baseline of the heading, from the top of the page
    pub y: Mm,
}

/// A flat document outline with one bookmark per section
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Outline {
    pub entries: Vec<OutlineEntry>,
}

impl Outline {
    pub fn new(entries: Vec<OutlineEntry>) -> Outline {
        Outline { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Writes the outline tree, returning its root. Nothing is written for an
    /// empty outline.
    pub(crate) fn write(
        &self,
        refs: &mut ObjectReferences,
        page_height: Mm,
        writer: &mut Pdf,
    ) -> Result<Option<Ref>, LayoutError> {
        let (first, last) = match (self.entries.first(), self.entries.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Ok(None),
        };

        // generate IDs for everything
        let outlines_id = refs.gen(RefType::Outlines);
        let item_ids: Vec<Ref> = (0..self.entries.len())
            .map(|i| refs.gen(RefType::OutlineEntry(i)))
            .collect();

        let mut outline = writer.outline(outlines_id);
        outline.first(item_ids[0]);
        outline.last(item_ids[item_ids.len() - 1]);
        outline.count(self.entries.len() as i32);
        outline.finish();

        for (i, entry) in self.entries.iter().enumerate() {
            let page = refs.require(RefType::Page(entry.page_index))?;
            let mut item = writer.outline_item(item_ids[i]);
            item.parent(outlines_id);
            item.title(TextStr(entry.title.as_str()));
            if i > 0 {
                item.prev(item_ids[i - 1]);
            }
            if let Some(next) = item_ids.get(i + 1) {
                item.next(*next);
            }
            item.dest()
                .page(page)
                .xyz(0.0, Pt::from(page_height - entry.y).0, None);
        }

        tracing::trace!(
            bookmarks = self.entries.len(),
            first = %first.title,
            last = %last.title,
            "wrote document outline"
        );
        Ok(Some(outlines_id))
    }
}
