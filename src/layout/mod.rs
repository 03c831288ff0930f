//! Breaking résumé content into lines and placing those lines on pages.
//!
//! Layout happens in two passes. Each [`Block`](crate::Block) is first rendered
//! on its own with [`render_block`], which wraps its text and resolves every
//! horizontal position but places nothing. [`PageFlow`] then walks the rendered
//! lines top to bottom, deciding where pages break.
//!
//! # Example
//!
//! ```
//! use cv_pdf::{Block, LayoutConfig, StandardMetrics};
//! use cv_pdf::layout::{LayoutContext, PageFlow};
//!
//! let config = LayoutConfig::default();
//! let mut flow = PageFlow::new(LayoutContext::new(&config, &StandardMetrics));
//! flow.place_block(&Block::Heading("Summary".to_string()));
//! flow.place_block(&Block::Paragraph {
//!     text: "Engineer with a decade of experience in distributed systems.".to_string(),
//!     font_size: 11.0,
//! });
//!
//! let (pages, _outline) = flow.finish();
//! assert_eq!(pages.len(), 1);
//! assert_eq!(pages[0].texts()[0], "Summary");
//! ```

mod cursor;
mod flow;
mod margins;
mod render;
mod text;

pub use cursor::*;
pub use flow::*;
pub use margins::*;
pub use render::*;
pub use text::*;
