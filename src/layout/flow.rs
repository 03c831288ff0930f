use super::cursor::PageCursor;
use super::render::{render_block, BlockLayout, LayoutContext};
use crate::block::{Block, Section};
use crate::outline::OutlineEntry;
use crate::page::Page;
use tracing::{debug, trace};

/// Places rendered blocks onto pages, top to bottom, opening a new page
/// whenever the next piece of content would cross the bottom margin.
///
/// # Pagination rules
///
/// - A block whose low-water mark exceeds the space left starts on a new page,
///   unless the current page is still empty.
/// - A block's leading lines that are kept together (an entry's title and
///   subtitle, a masthead) move to a new page as a group.
/// - A heading is never left at the bottom of a page: it is only placed where
///   the block following it can also start.
/// - Any other block splits between whole lines. A line that does not fit even
///   on an empty page is placed there anyway and allowed to overflow, so layout
///   always terminates.
/// - Blank rows never start a continuation page.
///
/// Pages are created lazily, as content lands on them.
pub struct PageFlow<'a> {
    ctx: LayoutContext<'a>,
    pages: Vec<Page>,
    cursor: PageCursor,
    outline: Vec<OutlineEntry>,
}

impl<'a> PageFlow<'a> {
    pub fn new(ctx: LayoutContext<'a>) -> PageFlow<'a> {
        PageFlow {
            cursor: PageCursor::top_of_page(0, ctx.config.geometry),
            ctx,
            pages: Vec::new(),
            outline: Vec::new(),
        }
    }

    /// Where the next line would be placed
    pub fn cursor(&self) -> PageCursor {
        self.cursor
    }

    fn break_page(&mut self, reason: &'static str) {
        self.cursor = self.cursor.next_page();
        debug!(page = self.cursor.page_index + 1, reason, "starting new page");
    }

    fn current_page(&mut self) -> &mut Page {
        let geometry = self.ctx.config.geometry;
        while self.pages.len() <= self.cursor.page_index {
            self.pages.push(Page::new(geometry));
        }
        &mut self.pages[self.cursor.page_index]
    }

    /// Lays out and places every section, in order
    pub fn place_sections(&mut self, sections: &[Section]) {
        for section in sections {
            self.place_section(section);
        }
    }

    /// Places the blocks of one section followed by the section gap
    pub fn place_section(&mut self, section: &Section) {
        let layouts: Vec<BlockLayout> = section
            .blocks
            .iter()
            .map(|block| render_block(block, &self.ctx))
            .collect();

        for (index, (block, layout)) in section.blocks.iter().zip(&layouts).enumerate() {
            trace!(section = ?section.kind, index, lines = layout.lines.len(), "placing block");
            match block {
                Block::Heading(title) => {
                    let start = self.place_layout(layout, layouts.get(index + 1));
                    self.outline.push(OutlineEntry {
                        title: title.clone(),
                        page_index: start.page_index,
                        y: start.y,
                    });
                }
                _ => {
                    self.place_layout(layout, None);
                }
            }
        }

        if section.kind.title().is_some() {
            self.cursor = self.cursor.advanced(self.ctx.config.spacing.section_gap);
        }
    }

    /// Places a single block on its own, without any look-ahead
    pub fn place_block(&mut self, block: &Block) -> PageCursor {
        let layout = render_block(block, &self.ctx);
        self.place_layout(&layout, None)
    }

    /// Places `layout`, returning the cursor its first line was placed at.
    /// `follower` is the block that must be able to start on the same page.
    fn place_layout(&mut self, layout: &BlockLayout, follower: Option<&BlockLayout>) -> PageCursor {
        if layout.lines.is_empty() {
            return self.cursor;
        }

        if !self.cursor.at_top() {
            if !self.cursor.fits(layout.low_water) {
                self.break_page("low water mark");
            } else {
                let required = match follower {
                    Some(next) => layout.height() + layout.trailing_gap + next.lead_in(),
                    None => layout.head_extent(),
                };
                if !self.cursor.fits(required) {
                    self.break_page(match follower {
                        Some(_) => "keeping heading with its content",
                        None => "keeping lines together",
                    });
                }
            }
        }

        let start = self.cursor;
        let kept = layout.head().len();
        for (index, line) in layout.lines.iter().enumerate() {
            if index >= kept {
                if self.cursor.at_top() && line.items.is_empty() {
                    // blank rows collapse at the top of a continuation page
                    continue;
                }
                if !self.cursor.at_top() && !self.cursor.fits(line.extent()) {
                    self.break_page("line overflow");
                    if line.items.is_empty() {
                        continue;
                    }
                }
            }
            let (commands, next) = line.place(self.cursor);
            self.current_page().extend(commands);
            self.cursor = next;
        }

        self.cursor = self.cursor.advanced(layout.trailing_gap);
        start
    }

    /// The laid out pages, always at least one, and the position of every
    /// section heading
    pub fn finish(mut self) -> (Vec<Page>, Vec<OutlineEntry>) {
        if self.pages.is_empty() {
            self.current_page();
        }
        debug!(pages = self.pages.len(), "layout complete");
        (self.pages, self.outline)
    }
}

/// Lays out `sections` from the top of the first page
pub fn paginate(sections: &[Section], ctx: LayoutContext) -> (Vec<Page>, Vec<OutlineEntry>) {
    let mut flow = PageFlow::new(ctx);
    flow.place_sections(sections);
    flow.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::{Entry, EntryKind, SectionKind};
    use crate::config::LayoutConfig;
    use crate::font::StandardMetrics;
    use crate::layout::Margins;
    use crate::page::PageGeometry;
    use crate::units::Mm;
    use pretty_assertions::assert_eq;

    fn numbered(prefix: &str, count: usize) -> String {
        (1..=count)
            .map(|n| format!("{prefix}{n}"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn paragraph(text: String) -> Block {
        Block::Paragraph {
            text,
            font_size: 10.0,
        }
    }

    fn config_with_height(height: f32) -> LayoutConfig {
        LayoutConfig {
            geometry: PageGeometry::new((Mm(210.0), Mm(height)), Margins::all(Mm(15.0))),
            ..LayoutConfig::default()
        }
    }

    fn entry(title: &str, body: String) -> Block {
        Block::Entry(Entry {
            kind: EntryKind::Experience,
            title: title.into(),
            date: Some("2020 - Present".into()),
            subtitle: "Remote".into(),
            body,
            link: None,
        })
    }

    #[test]
    fn long_paragraph_splits_between_lines() {
        // 50 filler lines and a gap leave exactly 50mm, room for 10 lines
        let config = config_with_height(335.0);
        let mut flow = PageFlow::new(LayoutContext::new(&config, &StandardMetrics));
        flow.place_block(&paragraph(numbered("filler", 50)));
        assert_eq!(flow.cursor().remaining(), Mm(50.0));
        flow.place_block(&paragraph(numbered("line", 40)));
        let (pages, _) = flow.finish();

        assert_eq!(pages.len(), 2);
        let first: Vec<&str> = pages[0]
            .texts()
            .into_iter()
            .filter(|t| t.starts_with("line"))
            .collect();
        assert_eq!(first.len(), 10);
        assert_eq!(first.last(), Some(&"line10"));

        let second = pages[1].texts();
        assert_eq!(second.len(), 30);
        assert_eq!(second[0], "line11");
        assert_eq!(second[29], "line40");
        assert_eq!(pages[1].text_spans().next().map(|s| s.y), Some(Mm(15.0)));
    }

    #[test]
    fn blank_line_at_a_page_break_is_dropped() {
        // 50mm left: line1-line10 fill it and the paragraph break lands on
        // the boundary
        let config = config_with_height(335.0);
        let mut flow = PageFlow::new(LayoutContext::new(&config, &StandardMetrics));
        flow.place_block(&paragraph(numbered("filler", 50)));
        assert_eq!(flow.cursor().remaining(), Mm(50.0));
        flow.place_block(&paragraph(format!(
            "{}\n\n{}",
            numbered("line", 10),
            numbered("more", 5)
        )));
        let (pages, _) = flow.finish();

        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].texts().last(), Some(&"line10"));
        let top = pages[1].text_spans().next().expect("continues on page 2");
        assert_eq!(top.content, "more1");
        assert_eq!(top.y, Mm(15.0));
    }

    #[test]
    fn blank_line_before_a_break_keeps_its_row() {
        // the blank row still fits at the bottom of page 1
        let config = config_with_height(335.0);
        let mut flow = PageFlow::new(LayoutContext::new(&config, &StandardMetrics));
        flow.place_block(&paragraph(numbered("filler", 50)));
        flow.place_block(&paragraph(format!(
            "{}\n\n{}",
            numbered("line", 9),
            numbered("more", 5)
        )));
        let (pages, _) = flow.finish();

        assert_eq!(pages[0].texts().last(), Some(&"line9"));
        let top = pages[1].text_spans().next().expect("continues on page 2");
        assert_eq!(top.content, "more1");
        assert_eq!(top.y, Mm(15.0));
    }

    #[test]
    fn entry_below_low_water_mark_starts_a_new_page() {
        let config = LayoutConfig::default();
        let mut flow = PageFlow::new(LayoutContext::new(&config, &StandardMetrics));
        // 49 lines plus the gap leave 17mm, under the 20mm mark
        flow.place_block(&paragraph(numbered("filler", 49)));
        assert_eq!(flow.cursor().remaining(), Mm(17.0));

        let start = flow.place_block(&entry("Engineer | Acme", "Shipped it".into()));
        assert_eq!(start.page_index, 1);
        assert_eq!(start.y, Mm(15.0));

        let (pages, _) = flow.finish();
        assert_eq!(pages[1].texts()[0], "Engineer | Acme");
    }

    #[test]
    fn heading_moves_with_its_first_entry() {
        let config = LayoutConfig::default();
        let mut flow = PageFlow::new(LayoutContext::new(&config, &StandardMetrics));
        // leaves 22mm: enough for the heading, not for the heading and an entry
        flow.place_block(&paragraph(format!("{}\nend", numbered("filler", 47))));
        assert_eq!(flow.cursor().remaining(), Mm(22.0));

        flow.place_section(&Section {
            kind: SectionKind::Experience,
            blocks: vec![
                Block::Heading("Experience".into()),
                entry("Engineer | Acme", String::new()),
            ],
        });
        let (pages, outline) = flow.finish();

        assert_eq!(pages.len(), 2);
        assert!(!pages[0].texts().contains(&"Experience"));
        assert_eq!(pages[1].texts()[..2], ["Experience", "Engineer | Acme"]);
        assert_eq!(outline.len(), 1);
        assert_eq!(outline[0].page_index, 1);
        assert_eq!(outline[0].y, Mm(15.0));
    }

    #[test]
    fn title_and_subtitle_stay_together() {
        let mut config = LayoutConfig::default();
        config.low_water.entry = Mm::ZERO;
        let mut flow = PageFlow::new(LayoutContext::new(&config, &StandardMetrics));
        // 51 lines and the gap leave 7mm: room for the title but not the subtitle
        flow.place_block(&paragraph(numbered("filler", 51)));
        assert_eq!(flow.cursor().remaining(), Mm(7.0));

        let start = flow.place_block(&entry("Engineer | Acme", String::new()));
        assert_eq!(start.page_index, 1);
    }

    #[test]
    fn oversized_lines_overflow_instead_of_looping() {
        let config = config_with_height(33.0);
        let mut flow = PageFlow::new(LayoutContext::new(&config, &StandardMetrics));
        flow.place_block(&paragraph(numbered("line", 3)));
        let (pages, _) = flow.finish();
        assert_eq!(pages.len(), 3);
        assert!(pages.iter().all(|page| page.texts().len() == 1));
    }

    #[test]
    fn empty_flow_produces_one_blank_page() {
        let config = LayoutConfig::default();
        let (pages, outline) = PageFlow::new(LayoutContext::new(&config, &StandardMetrics)).finish();
        assert_eq!(pages.len(), 1);
        assert!(pages[0].is_empty());
        assert!(outline.is_empty());
    }

    #[test]
    fn nothing_crosses_the_bottom_margin() {
        let config = LayoutConfig::default();
        let body = numbered("detail", 30);
        let sections = vec![Section {
            kind: SectionKind::Experience,
            blocks: std::iter::once(Block::Heading("Experience".into()))
                .chain((0..6).map(|n| entry(&format!("Role {n}"), body.clone())))
                .collect(),
        }];
        let (pages, _) = paginate(&sections, LayoutContext::new(&config, &StandardMetrics));

        assert!(pages.len() > 1);
        for page in &pages {
            for command in page.commands() {
                assert!(command.y() <= config.geometry.content_bottom());
            }
        }
    }
}
