/// Posts shown per page.
pub const PAGE_SIZE: usize = 9;

/// Current page of the filtered list. Navigation clamps to the page-button
/// strip, but nothing here resets the page when the filtered list shrinks:
/// a page past the end stays selected and simply renders empty.
#[derive(Debug, Clone)]
pub struct Pager {
    current_page: usize,
}

impl Default for Pager {
    fn default() -> Self {
        Self { current_page: 1 }
    }
}

impl Pager {
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Number of page buttons for a filtered list of `len` items; zero when
    /// the list is empty.
    pub fn total_pages(len: usize) -> usize {
        len.div_ceil(PAGE_SIZE)
    }

    pub fn previous(&mut self) {
        if self.current_page > 1 {
            self.current_page -= 1;
        }
    }

    pub fn next(&mut self, total_pages: usize) {
        if self.current_page < total_pages {
            self.current_page += 1;
        }
    }

    /// Jump to a page button. Only buttons in `[1, total_pages]` exist, so
    /// anything else is a no-op.
    pub fn go_to(&mut self, page: usize, total_pages: usize) {
        if page >= 1 && page <= total_pages {
            self.current_page = page;
        }
    }

    /// The current page's slice of `items`. Bounds saturate to the list
    /// length, so a stale page beyond the data yields an empty slice rather
    /// than a panic.
    pub fn page_slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = (self.current_page - 1).saturating_mul(PAGE_SIZE).min(items.len());
        let end = (start + PAGE_SIZE).min(items.len());
        &items[start..end]
    }
}
