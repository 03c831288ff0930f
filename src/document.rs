use crate::{
    error::LayoutError,
    font::FontStyle,
    info::Info,
    outline::{Outline, OutlineEntry},
    page::Page,
    refs::{ObjectReferences, RefType},
    PageGeometry,
};
use pdf_writer::{Finish, Pdf, Ref};
use std::io::Write;
use tracing::debug;

/// The result of laying out a résumé: every page with its positioned draw
/// commands, in order, plus the bookmarks of each section.
///
/// A document can be inspected directly, handed to another renderer, or
/// serialised to PDF with [Document::write].
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Document {
    pub info: Option<Info>,
    pub pages: Vec<Page>,
    pub outline: Outline,
}

impl Document {
    pub fn new(pages: Vec<Page>, outline: Vec<OutlineEntry>) -> Document {
        Document {
            info: None,
            pages,
            outline: Outline::new(outline),
        }
    }

    /// Sets information about the document. If not provided, no information block will be
    /// written to the PDF
    pub fn set_info(&mut self, info: Info) {
        self.info = Some(info);
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// The page at the 0-based `page_index`, if there is one
    pub fn page(&self, page_index: usize) -> Option<&Page> {
        self.pages.get(page_index)
    }

    /// Every text run in the document, page by page
    pub fn texts(&self) -> Vec<&str> {
        self.pages.iter().flat_map(Page::texts).collect()
    }

    /// Write the entire document as a PDF. Note: the document is rendered in memory
    /// first and only then copied into `w`.
    ///
    /// Text is set in the standard Helvetica faces, which every PDF viewer
    /// provides, so no fonts are embedded.
    pub fn write<W: Write>(&self, mut w: W) -> Result<(), LayoutError> {
        let bytes = self.to_bytes()?;
        w.write_all(bytes.as_slice())?;
        Ok(())
    }

    /// Render the document into an in-memory PDF
    pub fn to_bytes(&self) -> Result<Vec<u8>, LayoutError> {
        let mut refs = ObjectReferences::new();

        let catalog_id = refs.gen(RefType::Catalog);
        let page_tree_id = refs.gen(RefType::PageTree);

        let mut writer = Pdf::new();
        if let Some(info) = &self.info {
            info.write(&mut refs, &mut writer);
        }

        // an empty document still gets a blank page, as PDF viewers expect
        let blank;
        let pages: &[Page] = if self.pages.is_empty() {
            blank = [Page::new(PageGeometry::default())];
            &blank
        } else {
            &self.pages
        };

        let page_refs: Vec<Ref> = (0..pages.len())
            .map(|i| refs.gen(RefType::Page(i)))
            .collect();
        writer
            .pages(page_tree_id)
            .count(page_refs.len() as i32)
            .kids(page_refs);

        for style in FontStyle::ALL {
            style.write(&mut refs, &mut writer);
        }

        for (page_index, page) in pages.iter().enumerate() {
            page.write(&mut refs, page_index, &mut writer)?;
        }

        let page_height = pages[0].geometry.height;
        let outlines = self.outline.write(&mut refs, page_height, &mut writer)?;

        let mut catalog = writer.catalog(catalog_id);
        catalog.pages(page_tree_id);
        if let Some(outlines) = outlines {
            catalog.outlines(outlines);
        }
        catalog.finish();

        let bytes = writer.finish();
        debug!(pages = pages.len(), bytes = bytes.len(), "wrote PDF");
        Ok(bytes)
    }
}
