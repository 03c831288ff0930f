//! Lays out a résumé into fixed-size pages and writes them as a PDF.
//!
//! ```
//! use cv_pdf::{render, ResumeRecord};
//!
//! let record = ResumeRecord::from_json(r#"{
//!     "personal": { "name": "Jane Doe", "email": "jane@example.com" },
//!     "skills": [{ "name": "Rust", "level": 5 }]
//! }"#).expect("valid record");
//!
//! let document = render(&record);
//! assert_eq!(document.page_count(), 1);
//! assert!(document.texts().contains(&"Rust (5/5)"));
//!
//! let mut pdf = Vec::new();
//! document.write(&mut pdf).expect("can write PDF");
//! ```

mod block;
pub use block::*;

mod colour;
pub use colour::*;

mod config;
pub use config::*;

mod content;

mod document;
pub use document::*;

mod font;
pub use font::*;

mod info;
pub use info::*;

/// Utility functions and structures to break content into lines and pages
pub mod layout;

mod outline;
pub use outline::*;

mod page;
pub use page::*;

pub mod pagesize;

pub(crate) mod refs;

mod resume;
pub use resume::*;

mod suggest;
pub use suggest::*;

mod units;
pub use units::*;

mod error;
pub use error::*;

/// Re-export PDF-writer functionality
pub use pdf_writer;

use layout::{paginate, LayoutContext};
use tracing::debug;

/// Lays out `record` with the default configuration and Helvetica metrics.
/// The document's metadata names the résumé's owner.
pub fn render(record: &ResumeRecord) -> Document {
    render_with(record, &LayoutConfig::default(), &StandardMetrics)
}

/// Lays out `record` with a custom configuration and text measurer.
///
/// Layout never fails: empty fields are left out, and content too large for a
/// page overflows it rather than being dropped.
pub fn render_with(
    record: &ResumeRecord,
    config: &LayoutConfig,
    measurer: &dyn TextMeasurer,
) -> Document {
    let sections = sections_from_record(record, config);
    let (pages, outline) = paginate(&sections, LayoutContext::new(config, measurer));
    debug!(
        sections = sections.len(),
        pages = pages.len(),
        "rendered resume"
    );

    let mut document = Document::new(pages, outline);
    let name = record.personal.name.trim();
    let name = if name.is_empty() {
        config.placeholder_name.as_str()
    } else {
        name
    };
    document.set_info(Info::for_resume(name));
    document
}
