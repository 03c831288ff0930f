use crate::colour::Colour;
use crate::content::render_commands;
use crate::error::LayoutError;
use crate::font::FontStyle;
use crate::layout::Margins;
use crate::pagesize::{self, PageSize};
use crate::refs::{ObjectReferences, RefType};
use crate::units::{Mm, Pt};
use miniz_oxide::deflate::{compress_to_vec_zlib, CompressionLevel};
use pdf_writer::{Filter, Finish, Name, Pdf, Rect};
use serde::{Deserialize, Serialize};

/// The fixed dimensions shared by every page of a document
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageGeometry {
    pub width: Mm,
    pub height: Mm,
    pub margins: Margins,
}

impl Default for PageGeometry {
    /// A4 portrait with a 15mm margin on every side
    fn default() -> Self {
        PageGeometry::new(pagesize::A4, Margins::all(Mm(15.0)))
    }
}

impl PageGeometry {
    pub fn new(size: PageSize, margins: Margins) -> PageGeometry {
        PageGeometry {
            width: size.0,
            height: size.1,
            margins,
        }
    }

    /// Left edge of the content box
    pub fn content_left(&self) -> Mm {
        self.margins.left
    }

    /// Right edge of the content box
    pub fn content_right(&self) -> Mm {
        self.width - self.margins.right
    }

    /// The first baseline on a fresh page
    pub fn content_top(&self) -> Mm {
        self.margins.top
    }

    /// The last baseline that still lies within the margins
    pub fn content_bottom(&self) -> Mm {
        self.height - self.margins.bottom
    }

    pub fn content_width(&self) -> Mm {
        self.content_right() - self.content_left()
    }

    pub fn content_height(&self) -> Mm {
        self.content_bottom() - self.content_top()
    }

    /// Horizontal centre of the full page
    pub fn centre(&self) -> Mm {
        self.width / 2.0
    }
}

/// How a text run was positioned horizontally. The run's `x` is always its
/// resolved left edge; the alignment records the intent so renderers that
/// measure text themselves can re-anchor it.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// A single run of text at a fixed position on a page. `y` is the baseline.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct TextSpan {
    pub content: String,
    pub x: Mm,
    pub y: Mm,
    pub font_size: f32,
    pub style: FontStyle,
    pub align: HorizontalAlign,
    pub colour: Colour,
}

/// One positioned, styled primitive ready for rendering
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub enum DrawCommand {
    Text(TextSpan),
    /// A horizontal stroke from `x1` to `x2` at height `y`
    Rule { x1: Mm, y: Mm, x2: Mm, width: Mm },
}

impl DrawCommand {
    /// The text run, if this command draws text
    pub fn as_text(&self) -> Option<&TextSpan> {
        match self {
            DrawCommand::Text(span) => Some(span),
            DrawCommand::Rule { .. } => None,
        }
    }

    /// The vertical position the command was placed at
    pub fn y(&self) -> Mm {
        match self {
            DrawCommand::Text(span) => span.y,
            DrawCommand::Rule { y, .. } => *y,
        }
    }
}

/// A single page of laid out content. Commands are only ever appended, in the
/// order they were placed.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Page {
    pub geometry: PageGeometry,
    commands: Vec<DrawCommand>,
}

impl Page {
    pub fn new(geometry: PageGeometry) -> Page {
        Page {
            geometry,
            commands: Vec::default(),
        }
    }

    pub(crate) fn extend<I: IntoIterator<Item = DrawCommand>>(&mut self, commands: I) {
        self.commands.extend(commands);
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// All text runs on the page, in placement order
    pub fn text_spans(&self) -> impl Iterator<Item = &TextSpan> {
        self.commands.iter().filter_map(DrawCommand::as_text)
    }

    /// The contents of every text run on the page, in placement order
    pub fn texts(&self) -> Vec<&str> {
        self.text_spans().map(|span| span.content.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub(crate) fn write(
        &self,
        refs: &mut ObjectReferences,
        page_index: usize,
        writer: &mut Pdf,
    ) -> Result<(), LayoutError> {
        let id = refs.require(RefType::Page(page_index))?;
        let parent = refs.require(RefType::PageTree)?;
        let content_id = refs.gen(RefType::ContentForPage(page_index));

        let geometry = &self.geometry;
        let height = Pt::from(geometry.height).0;
        let mut page = writer.page(id);
        page.media_box(Rect::new(0.0, 0.0, Pt::from(geometry.width).0, height));
        page.art_box(Rect::new(
            Pt::from(geometry.content_left()).0,
            height - Pt::from(geometry.content_bottom()).0,
            Pt::from(geometry.content_right()).0,
            height - Pt::from(geometry.content_top()).0,
        ));
        page.parent(parent);

        let mut resources = page.resources();
        let mut resource_fonts = resources.fonts();
        for style in FontStyle::ALL {
            resource_fonts.pair(
                Name(style.resource_name().as_bytes()),
                refs.require(RefType::Font(style))?,
            );
        }
        resource_fonts.finish();
        resources.finish();

        page.contents(content_id);
        page.finish();

        let rendered = render_commands(self)?;
        let compressed =
            compress_to_vec_zlib(&rendered, CompressionLevel::DefaultCompression as u8);
        writer
            .stream(content_id, compressed.as_slice())
            .filter(Filter::FlateDecode);
        Ok(())
    }
}
