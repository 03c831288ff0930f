use super::cursor::PageCursor;
use super::text::wrap_text;
use crate::block::{Block, Entry, EntryKind};
use crate::colour::{colours, Colour};
use crate::config::LayoutConfig;
use crate::font::{FontStyle, TextMeasurer};
use crate::page::{DrawCommand, HorizontalAlign, TextSpan};
use crate::resume::Skill;
use crate::units::Mm;

/// Everything a renderer needs to know besides the block itself
#[derive(Copy, Clone)]
pub struct LayoutContext<'a> {
    pub config: &'a LayoutConfig,
    pub measurer: &'a dyn TextMeasurer,
}

impl<'a> LayoutContext<'a> {
    pub fn new(config: &'a LayoutConfig, measurer: &'a dyn TextMeasurer) -> LayoutContext<'a> {
        LayoutContext { config, measurer }
    }

    /// The left edge at which a run of text starts so that it sits with the
    /// given alignment inside the content box
    fn anchor(&self, content: &str, font_size: f32, style: FontStyle, align: HorizontalAlign) -> Mm {
        let geometry = &self.config.geometry;
        match align {
            HorizontalAlign::Left => geometry.content_left(),
            HorizontalAlign::Center => {
                geometry.centre() - self.measurer.measure(content, font_size, style) / 2.0
            }
            HorizontalAlign::Right => {
                geometry.content_right() - self.measurer.measure(content, font_size, style)
            }
        }
    }
}

/// Something drawn relative to the baseline of the line it belongs to
#[derive(Debug, Clone, PartialEq)]
pub enum LineItem {
    Text {
        /// Resolved left edge
        x: Mm,
        /// Offset below the line's baseline
        dy: Mm,
        content: String,
        font_size: f32,
        style: FontStyle,
        align: HorizontalAlign,
        colour: Colour,
    },
    Rule {
        x1: Mm,
        x2: Mm,
        dy: Mm,
        width: Mm,
    },
}

/// The smallest unit the paginator places: one baseline worth of content and
/// the advance to the next baseline. Lines are never split across pages.
#[derive(Debug, Clone, PartialEq)]
pub struct LineBox {
    pub height: Mm,
    pub items: Vec<LineItem>,
}

impl LineBox {
    fn new(height: Mm) -> LineBox {
        LineBox {
            height,
            items: Vec::new(),
        }
    }

    fn with_text(
        mut self,
        ctx: &LayoutContext,
        content: impl Into<String>,
        font_size: f32,
        style: FontStyle,
        align: HorizontalAlign,
    ) -> LineBox {
        let content = content.into();
        let x = ctx.anchor(&content, font_size, style, align);
        self.items.push(LineItem::Text {
            x,
            dy: Mm::ZERO,
            content,
            font_size,
            style,
            align,
            colour: colours::BLACK,
        });
        self
    }

    /// Restyles the most recently added item
    fn coloured(mut self, colour: Colour) -> LineBox {
        if let Some(LineItem::Text { colour: c, .. }) = self.items.last_mut() {
            *c = colour;
        }
        self
    }

    /// Shifts the most recently added item below the baseline
    fn lowered(mut self, offset: Mm) -> LineBox {
        match self.items.last_mut() {
            Some(LineItem::Text { dy, .. }) | Some(LineItem::Rule { dy, .. }) => *dy = offset,
            None => {}
        }
        self
    }

    /// The vertical space the line needs on the page: its advance, or the
    /// deepest item if something hangs further down
    pub fn extent(&self) -> Mm {
        self.items
            .iter()
            .map(|item| match item {
                LineItem::Text { dy, .. } | LineItem::Rule { dy, .. } => *dy,
            })
            .fold(self.height, Mm::max)
    }

    /// Emits the line's draw commands at `cursor` and returns the cursor moved
    /// to the next baseline
    pub fn place(&self, cursor: PageCursor) -> (Vec<DrawCommand>, PageCursor) {
        let commands = self
            .items
            .iter()
            .map(|item| match item {
                LineItem::Text {
                    x,
                    dy,
                    content,
                    font_size,
                    style,
                    align,
                    colour,
                } => DrawCommand::Text(TextSpan {
                    content: content.clone(),
                    x: *x,
                    y: cursor.y + *dy,
                    font_size: *font_size,
                    style: *style,
                    align: *align,
                    colour: *colour,
                }),
                LineItem::Rule { x1, x2, dy, width } => DrawCommand::Rule {
                    x1: *x1,
                    y: cursor.y + *dy,
                    x2: *x2,
                    width: *width,
                },
            })
            .collect();
        (commands, cursor.advanced(self.height))
    }
}

/// A block broken into lines, plus the rules the paginator applies to it
#[derive(Debug, Clone, PartialEq)]
pub struct BlockLayout {
    pub lines: Vec<LineBox>,
    /// How many leading lines must land on the same page as the line after
    /// them. Zero lets the block split anywhere.
    pub keep_with_next: usize,
    /// Advanced after the last line without checking for space
    pub trailing_gap: Mm,
    /// Minimum space the block wants before it starts; with less left the
    /// block opens a fresh page instead
    pub low_water: Mm,
}

impl BlockLayout {
    /// Total height the block occupies, trailing gap excluded
    pub fn height(&self) -> Mm {
        self.lines.iter().map(|line| line.height).sum()
    }

    /// The lines that must be placed together before the block may split
    pub fn head(&self) -> &[LineBox] {
        let end = (self.keep_with_next + 1).min(self.lines.len());
        &self.lines[..end]
    }

    /// Space needed to place the head group. The last line of the group only
    /// needs its own extent, not a full advance.
    pub fn head_extent(&self) -> Mm {
        match self.head().split_last() {
            Some((last, rest)) => rest.iter().map(|line| line.height).sum::<Mm>() + last.extent(),
            None => Mm::ZERO,
        }
    }

    /// Space a preceding heading must reserve so the block does not open a
    /// page right after it
    pub fn lead_in(&self) -> Mm {
        self.head_extent().max(self.low_water)
    }
}

/// Lays out one block. This is a pure function of the block and the context:
/// nothing is placed, and the result can be measured and thrown away.
pub fn render_block(block: &Block, ctx: &LayoutContext) -> BlockLayout {
    match block {
        Block::Masthead {
            name,
            contact,
            website,
        } => render_masthead(name, contact.as_deref(), website.as_deref(), ctx),
        Block::Heading(title) => render_heading(title, ctx),
        Block::Paragraph { text, font_size } => render_paragraph(text, *font_size, ctx),
        Block::Entry(entry) => render_entry(entry, ctx),
        Block::SkillList(skills) => render_skills(skills, ctx),
    }
}

fn render_masthead(
    name: &str,
    contact: Option<&str>,
    website: Option<&str>,
    ctx: &LayoutContext,
) -> BlockLayout {
    let sizes = &ctx.config.font_sizes;
    let spacing = &ctx.config.spacing;

    let mut lines = vec![LineBox::new(spacing.name).with_text(
        ctx,
        name,
        sizes.name,
        FontStyle::Bold,
        HorizontalAlign::Center,
    )];
    if let Some(contact) = contact {
        lines.push(LineBox::new(spacing.contact).with_text(
            ctx,
            contact,
            sizes.contact,
            FontStyle::Normal,
            HorizontalAlign::Center,
        ));
    }

    let trailing_gap = match website {
        Some(website) => {
            lines.push(
                LineBox::new(spacing.website)
                    .with_text(
                        ctx,
                        website,
                        sizes.contact,
                        FontStyle::Normal,
                        HorizontalAlign::Center,
                    )
                    .coloured(colours::LINK_BLUE),
            );
            Mm::ZERO
        }
        None => spacing.website_absent,
    };

    BlockLayout {
        keep_with_next: lines.len() - 1,
        lines,
        trailing_gap,
        low_water: Mm::ZERO,
    }
}

fn render_heading(title: &str, ctx: &LayoutContext) -> BlockLayout {
    let geometry = &ctx.config.geometry;
    let spacing = &ctx.config.spacing;

    let mut line = LineBox::new(spacing.heading).with_text(
        ctx,
        title,
        ctx.config.font_sizes.heading,
        FontStyle::Bold,
        HorizontalAlign::Left,
    );
    line.items.push(LineItem::Rule {
        x1: geometry.content_left(),
        x2: geometry.content_right(),
        dy: spacing.heading_rule_offset,
        width: spacing.heading_rule_width,
    });

    BlockLayout {
        lines: vec![line],
        keep_with_next: 0,
        trailing_gap: Mm::ZERO,
        low_water: Mm::ZERO,
    }
}

/// Wrapped body text, one line box per wrapped line. Blank lines keep their
/// advance but draw nothing.
fn text_lines(text: &str, font_size: f32, advance: Mm, ctx: &LayoutContext) -> Vec<LineBox> {
    wrap_text(
        text,
        ctx.config.geometry.content_width(),
        font_size,
        FontStyle::Normal,
        ctx.measurer,
    )
    .map(|content| {
        let line = LineBox::new(advance);
        if content.is_empty() {
            line
        } else {
            line.with_text(ctx, content, font_size, FontStyle::Normal, HorizontalAlign::Left)
        }
    })
    .collect()
}

fn render_paragraph(text: &str, font_size: f32, ctx: &LayoutContext) -> BlockLayout {
    BlockLayout {
        lines: text_lines(text, font_size, ctx.config.spacing.line, ctx),
        keep_with_next: 0,
        trailing_gap: ctx.config.spacing.paragraph_gap,
        low_water: ctx.config.low_water.paragraph,
    }
}

fn render_entry(entry: &Entry, ctx: &LayoutContext) -> BlockLayout {
    let sizes = &ctx.config.font_sizes;
    let spacing = &ctx.config.spacing;

    let mut title = LineBox::new(spacing.entry_line);
    if !entry.title.is_empty() {
        title = title.with_text(
            ctx,
            entry.title.as_str(),
            sizes.entry_title,
            FontStyle::Bold,
            HorizontalAlign::Left,
        );
    }
    if let Some(date) = &entry.date {
        title = title.with_text(
            ctx,
            date.as_str(),
            sizes.entry_detail,
            FontStyle::Normal,
            HorizontalAlign::Right,
        );
    }
    let mut lines = vec![title];

    if !entry.subtitle.is_empty() {
        lines.push(LineBox::new(spacing.entry_line).with_text(
            ctx,
            entry.subtitle.as_str(),
            sizes.entry_detail,
            FontStyle::Italic,
            HorizontalAlign::Left,
        ));
    }
    let keep_with_next = lines.len() - 1;

    lines.extend(text_lines(&entry.body, sizes.entry_detail, spacing.line, ctx));

    if let Some(link) = &entry.link {
        lines.push(
            LineBox::new(spacing.link_offset)
                .with_text(ctx, link.as_str(), sizes.link, FontStyle::Normal, HorizontalAlign::Left)
                .lowered(spacing.link_offset)
                .coloured(colours::LINK_BLUE),
        );
    }

    let (trailing_gap, low_water) = match entry.kind {
        EntryKind::Experience | EntryKind::Education => {
            (spacing.entry_gap, ctx.config.low_water.entry)
        }
        EntryKind::Certification => (spacing.certification_gap, ctx.config.low_water.certification),
    };

    BlockLayout {
        lines,
        keep_with_next,
        trailing_gap,
        low_water,
    }
}

/// The label printed for a skill
pub fn skill_label(skill: &Skill) -> String {
    match skill.level {
        Some(level) => format!("{} ({}/5)", skill.name.trim(), level),
        None => skill.name.trim().to_string(),
    }
}

/// Splits items into a left and right column, the left one taking the extra
/// item when the count is odd
pub fn split_columns<T>(items: &[T]) -> (&[T], &[T]) {
    items.split_at(items.len().div_ceil(2))
}

fn render_skills(skills: &[Skill], ctx: &LayoutContext) -> BlockLayout {
    let geometry = &ctx.config.geometry;
    let spacing = &ctx.config.spacing;
    let font_size = ctx.config.font_sizes.skill;

    let (left, right) = split_columns(skills);
    let column_width = (geometry.content_width() - spacing.skill_column_gap) / 2.0;
    let right_x = geometry.content_left() + column_width + spacing.skill_column_gap;

    // both columns share the row pitch, so pairing items by row keeps each
    // column's own vertical rhythm
    let lines = (0..left.len())
        .map(|row| {
            let mut line = LineBox::new(spacing.skill_row).with_text(
                ctx,
                skill_label(&left[row]),
                font_size,
                FontStyle::Normal,
                HorizontalAlign::Left,
            );
            if let Some(skill) = right.get(row) {
                line.items.push(LineItem::Text {
                    x: right_x,
                    dy: Mm::ZERO,
                    content: skill_label(skill),
                    font_size,
                    style: FontStyle::Normal,
                    align: HorizontalAlign::Left,
                    colour: colours::BLACK,
                });
            }
            line
        })
        .collect();

    BlockLayout {
        lines,
        keep_with_next: 0,
        trailing_gap: Mm::ZERO,
        low_water: ctx.config.low_water.skill_list,
    }
}
