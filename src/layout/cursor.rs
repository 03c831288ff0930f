use crate::page::PageGeometry;
use crate::units::Mm;

/// Slack allowed when checking whether a height fits in the remaining space
pub(crate) const FIT_TOLERANCE: Mm = Mm(1e-3);

/// The position at which the next line will be placed: which page, and how far
/// down it the next baseline sits. Placing content yields a new cursor.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PageCursor {
    pub page_index: usize,
    /// The baseline of the next line, measured from the top edge of the page
    pub y: Mm,
    pub geometry: PageGeometry,
}

impl PageCursor {
    /// A cursor at the top margin of the given page
    pub fn top_of_page(page_index: usize, geometry: PageGeometry) -> PageCursor {
        PageCursor {
            page_index,
            y: geometry.content_top(),
            geometry,
        }
    }

    /// Vertical space left between the cursor and the bottom margin. Negative
    /// once a trailing gap has overshot the margin.
    pub fn remaining(&self) -> Mm {
        self.geometry.content_bottom() - self.y
    }

    /// Whether something `height` tall can still be placed on this page
    pub fn fits(&self, height: Mm) -> bool {
        height <= self.remaining() + FIT_TOLERANCE
    }

    /// The cursor moved down by `height`
    pub fn advanced(self, height: Mm) -> PageCursor {
        PageCursor {
            y: self.y + height,
            ..self
        }
    }

    /// A cursor at the top margin of the following page
    pub fn next_page(self) -> PageCursor {
        PageCursor::top_of_page(self.page_index + 1, self.geometry)
    }

    /// True when nothing has been placed since the top margin
    pub fn at_top(&self) -> bool {
        self.y <= self.geometry.content_top() + FIT_TOLERANCE
    }
}
