// crates/worldview-core/src/paginate.rs

//! # Paginator
//!
//! Page arithmetic for the catalog grid and the page-number control.
//!
//! Pages are 1-based. An out-of-range page (0 or past the last page) is not
//! an error: it selects an empty slice positioned at the end of the list.
//! [`Pager`] keeps the current page inside `[1, total_pages]` for callers
//! that want clamping instead.
//!
//! The page-number window is a centered sliding window of fixed width:
//! `min(max_visible, total_pages)` consecutive numbers, starting
//! `max_visible / 2` before the current page and shifted to stay inside
//! `[1, total_pages]`.

use std::ops::Range;

/// Bounds of one page inside a list of `total` items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSlice {
    pub start: usize,
    /// Exclusive.
    pub end: usize,
    pub total_pages: usize,
}

impl PageSlice {
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// A page control is only worth drawing for two or more pages.
    pub fn needs_control(&self) -> bool {
        self.total_pages > 1
    }
}

/// `ceil(total / page_size)`; zero when either is zero.
pub fn total_pages(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        0
    } else {
        total.div_ceil(page_size)
    }
}

/// Slice bounds of `page` (1-based).
///
/// Pages outside `[1, total_pages]` give `start == end == total`.
pub fn paginate(total: usize, page_size: usize, page: usize) -> PageSlice {
    let pages = total_pages(total, page_size);
    if page == 0 || page > pages {
        return PageSlice {
            start: total,
            end: total,
            total_pages: pages,
        };
    }
    let start = (page - 1) * page_size;
    PageSlice {
        start,
        end: (start + page_size).min(total),
        total_pages: pages,
    }
}

/// Clamps `page` into `[1, total_pages]`; 1 when there are no pages.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Consecutive page numbers around `current`.
///
/// ```rust
/// use worldview_core::visible_pages;
///
/// assert_eq!(visible_pages(1, 10, 4), vec![1, 2, 3, 4]);
/// assert_eq!(visible_pages(6, 10, 4), vec![4, 5, 6, 7]);
/// assert_eq!(visible_pages(10, 10, 4), vec![7, 8, 9, 10]);
/// assert_eq!(visible_pages(2, 3, 4), vec![1, 2, 3]);
/// ```
pub fn visible_pages(current: usize, total_pages: usize, max_visible: usize) -> Vec<usize> {
    let width = max_visible.min(total_pages);
    if width == 0 {
        return Vec::new();
    }
    let current = clamp_page(current, total_pages);
    let start = current
        .saturating_sub(max_visible / 2)
        .max(1)
        .min(total_pages - width + 1);
    (start..start + width).collect()
}

/// One slot of a rendered page control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(usize),
    Ellipsis,
}

/// Full control layout: the window plus `1 …` / `… last` affordances.
///
/// The first (last) page is prepended (appended) when the window does not
/// reach it; an ellipsis is added only when at least one page is skipped.
/// Empty for zero or one page.
pub fn page_items(current: usize, total_pages: usize, max_visible: usize) -> Vec<PageItem> {
    if total_pages <= 1 {
        return Vec::new();
    }
    let window = visible_pages(current, total_pages, max_visible);
    let (Some(&first), Some(&last)) = (window.first(), window.last()) else {
        return Vec::new();
    };

    let mut items = Vec::with_capacity(window.len() + 4);
    if first > 1 {
        items.push(PageItem::Page(1));
        if first > 2 {
            items.push(PageItem::Ellipsis);
        }
    }
    items.extend(window.into_iter().map(PageItem::Page));
    if last < total_pages {
        if last < total_pages - 1 {
            items.push(PageItem::Ellipsis);
        }
        items.push(PageItem::Page(total_pages));
    }
    items
}

/// Current page of a list whose length may change underneath it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    page: usize,
    page_size: usize,
}

impl Pager {
    pub const DEFAULT_PAGE_SIZE: usize = 20;

    pub fn new(page_size: usize) -> Self {
        Self { page: 1, page_size }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_pages(&self, total: usize) -> usize {
        total_pages(total, self.page_size)
    }

    /// Moves to `page`, clamped to the pages `total` items fill.
    pub fn set_page(&mut self, page: usize, total: usize) -> usize {
        self.page = clamp_page(page, self.total_pages(total));
        self.page
    }

    pub fn next(&mut self, total: usize) -> usize {
        self.set_page(self.page.saturating_add(1), total)
    }

    pub fn prev(&mut self) -> usize {
        self.page = self.page.saturating_sub(1).max(1);
        self.page
    }

    /// Back to page 1; call whenever the underlying list changes.
    pub fn reset(&mut self) {
        self.page = 1;
    }

    pub fn slice(&self, total: usize) -> PageSlice {
        paginate(total, self.page_size, self.page)
    }

    /// The current page's items.
    pub fn page_of<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[self.slice(items.len()).range()]
    }

    pub fn items(&self, total: usize, max_visible: usize) -> Vec<PageItem> {
        page_items(self.page, self.total_pages(total), max_visible)
    }
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageItem::{Ellipsis, Page};

    #[test]
    fn full_and_partial_pages() {
        assert_eq!(
            paginate(45, 20, 1),
            PageSlice { start: 0, end: 20, total_pages: 3 }
        );
        assert_eq!(paginate(45, 20, 3).range(), 40..45);
        assert_eq!(paginate(40, 20, 2).range(), 20..40);
    }

    #[test]
    fn empty_list_has_no_pages() {
        let s = paginate(0, 20, 1);
        assert_eq!(s.total_pages, 0);
        assert!(s.is_empty());
        assert!(!s.needs_control());
        assert!(page_items(1, s.total_pages, 4).is_empty());
    }

    #[test]
    fn out_of_range_pages_are_empty() {
        assert_eq!(paginate(45, 20, 0).range(), 45..45);
        assert_eq!(paginate(45, 20, 4).range(), 45..45);
        assert_eq!(paginate(45, 0, 1).total_pages, 0);
    }

    #[test]
    fn window_is_fixed_width_and_clamped() {
        assert_eq!(visible_pages(1, 13, 4), [1, 2, 3, 4]);
        assert_eq!(visible_pages(2, 13, 4), [1, 2, 3, 4]);
        assert_eq!(visible_pages(7, 13, 4), [5, 6, 7, 8]);
        assert_eq!(visible_pages(13, 13, 4), [10, 11, 12, 13]);
        assert_eq!(visible_pages(99, 13, 4), [10, 11, 12, 13]);
        assert_eq!(visible_pages(5, 13, 5), [3, 4, 5, 6, 7]);
        assert_eq!(visible_pages(1, 2, 4), [1, 2]);
        assert!(visible_pages(1, 5, 0).is_empty());
    }

    #[test]
    fn control_adds_edges_and_ellipses() {
        assert_eq!(
            page_items(1, 13, 4),
            [Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(13)]
        );
        assert_eq!(
            page_items(7, 13, 4),
            [Page(1), Ellipsis, Page(5), Page(6), Page(7), Page(8), Ellipsis, Page(13)]
        );
        // Neighbouring edge pages need no ellipsis.
        assert_eq!(
            page_items(4, 6, 4),
            [Page(1), Page(2), Page(3), Page(4), Page(5), Page(6)]
        );
        assert!(page_items(1, 1, 4).is_empty());
    }

    #[test]
    fn pager_clamps_and_resets() {
        let mut pager = Pager::new(20);
        assert_eq!(pager.set_page(9, 45), 3);
        assert_eq!(pager.next(45), 3);
        assert_eq!(pager.prev(), 2);
        assert_eq!(pager.slice(45).range(), 20..40);

        pager.reset();
        assert_eq!(pager.page(), 1);
        assert_eq!(pager.prev(), 1);
        assert_eq!(pager.set_page(3, 0), 1);
    }

    #[test]
    fn pager_slices_items() {
        let items: Vec<u32> = (0..45).collect();
        let mut pager = Pager::new(20);
        pager.set_page(3, items.len());
        assert_eq!(pager.page_of(&items), &[40, 41, 42, 43, 44]);
    }
}
