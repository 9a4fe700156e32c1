//! Paged category carousel
//!
//! Pages are `page_size` cards wide and paging wraps in both directions, so
//! there is never a disabled arrow.

use std::ops::Range;

/// Which page of category cards is visible
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    item_count: usize,
    page_size: usize,
    current_slide: usize,
}

impl Carousel {
    /// A carousel over `item_count` cards, `page_size` per page.
    ///
    /// A `page_size` of 0 is treated as 1.
    pub fn new(item_count: usize, page_size: usize) -> Self {
        Self {
            item_count,
            page_size: page_size.max(1),
            current_slide: 0,
        }
    }

    /// `ceil(item_count / page_size)`, at least 1 so paging stays total.
    pub fn page_count(&self) -> usize {
        self.item_count.div_ceil(self.page_size).max(1)
    }

    pub fn current_slide(&self) -> usize {
        self.current_slide
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn next(&mut self) {
        self.current_slide = (self.current_slide + 1) % self.page_count();
    }

    pub fn prev(&mut self) {
        let pages = self.page_count();
        self.current_slide = (self.current_slide + pages - 1) % pages;
    }

    /// Horizontal translation of the card strip, in percent of the viewport.
    pub fn translate_percent(&self) -> usize {
        self.current_slide * 100
    }

    /// Indices of the cards on the current page.
    pub fn visible(&self) -> Range<usize> {
        let start = (self.current_slide * self.page_size).min(self.item_count);
        let end = (start + self.page_size).min(self.item_count);
        start..end
    }
}
