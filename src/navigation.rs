/// Current-page state machine over `[0, total_pages - 1]`.
///
/// The boundary pages are ordinary states; requests past either end clamp
/// back into range instead of failing. `total_pages` is never below one, so
/// page 0 is always addressable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigation {
    current_page: u64,
    total_pages: u64,
}

impl Navigation {
    pub fn new(total_pages: u64) -> Self {
        Self {
            current_page: 0,
            total_pages: total_pages.max(1),
        }
    }

    pub fn current_page(&self) -> u64 {
        self.current_page
    }

    pub fn total_pages(&self) -> u64 {
        self.total_pages
    }

    /// Clamp `page` into range and make it current. Returns the page that
    /// actually became current.
    pub fn go_to(&mut self, page: u64) -> u64 {
        self.current_page = page.min(self.total_pages - 1);
        self.current_page
    }

    /// Entry point for user-supplied page numbers, which may go below zero
    /// after the 1-based to 0-based conversion.
    pub fn go_to_signed(&mut self, page: i64) -> u64 {
        self.go_to(page.max(0) as u64)
    }

    pub fn next(&mut self) -> u64 {
        self.go_to(self.current_page.saturating_add(1))
    }

    pub fn prev(&mut self) -> u64 {
        self.go_to(self.current_page.saturating_sub(1))
    }

    /// Re-clamp the current page after the page count changed (page-size
    /// change or reopening a file).
    pub fn resize(&mut self, total_pages: u64) {
        self.total_pages = total_pages.max(1);
        self.current_page = self.current_page.min(self.total_pages - 1);
    }

    pub fn at_first_page(&self) -> bool {
        self.current_page == 0
    }

    pub fn at_last_page(&self) -> bool {
        self.current_page + 1 == self.total_pages
    }
}
