use crate::bookmarks::BookmarkStore;
use crate::document::Document;
use crate::navigation::Navigation;
use crate::pager::Pager;
use crate::settings::{MAX_LINES_PER_PAGE, MIN_LINES_PER_PAGE, Settings};
use eyre::{Result, eyre};
use std::path::Path;

/// Everything that belongs to one open file: the document, its derived
/// pagination, navigation state, bookmarks, and the lines of the current
/// page. A session is replaced wholesale on file-open, so nothing leaks
/// from one file into the next.
///
/// All operations are synchronous and run to completion on the calling
/// thread; a scan's file handle never outlives its call.
pub struct Session {
    document: Document,
    pager: Pager,
    page_size: usize,
    line_count: u64,
    navigation: Navigation,
    bookmarks: BookmarkStore,
    page_lines: Vec<String>,
}

impl Session {
    /// Open `path`, run the initial full line-count pass, and load page 0.
    /// On failure nothing is constructed, so a caller replacing an existing
    /// session keeps its previous state intact.
    pub fn open(path: impl AsRef<Path>, pager: Pager, page_size: usize) -> Result<Self> {
        if !Settings::valid_lines_per_page(page_size) {
            return Err(page_size_error(page_size));
        }
        let document = Document::open(path)?;
        let line_count = pager.count_lines(&document)?;
        let total_pages = pager.page_count(line_count, page_size);
        let navigation = Navigation::new(total_pages);
        let page_lines = pager.read_page(&document, 0, page_size)?;
        Ok(Self {
            document,
            pager,
            page_size,
            line_count,
            navigation,
            bookmarks: BookmarkStore::new(),
            page_lines,
        })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn line_count(&self) -> u64 {
        self.line_count
    }

    pub fn current_page(&self) -> u64 {
        self.navigation.current_page()
    }

    pub fn total_pages(&self) -> u64 {
        self.navigation.total_pages()
    }

    /// Lines of the current page, terminators included.
    pub fn page_lines(&self) -> &[String] {
        &self.page_lines
    }

    pub fn bookmarks(&self) -> &BookmarkStore {
        &self.bookmarks
    }

    /// Absolute index of the current page's first line.
    pub fn page_start_line(&self) -> u64 {
        self.navigation.current_page() * self.page_size as u64
    }

    /// Reading progress in [0, 1] for the status bar.
    pub fn progress(&self) -> f64 {
        (self.navigation.current_page() + 1) as f64 / self.navigation.total_pages() as f64
    }

    /// Clamp `page` into range, make it current, and read its lines. If the
    /// read fails the navigation state keeps its pre-error value.
    pub fn go_to_page(&mut self, page: u64) -> Result<u64> {
        let mut navigation = self.navigation;
        let target = navigation.go_to(page);
        let lines = self.pager.read_page(&self.document, target, self.page_size)?;
        self.navigation = navigation;
        self.page_lines = lines;
        Ok(target)
    }

    /// 1-based entry point for user-typed page numbers; values below one
    /// clamp to the first page, values past the end to the last.
    pub fn go_to_page_number(&mut self, number: i64) -> Result<u64> {
        self.go_to_page((number - 1).max(0) as u64)
    }

    pub fn next_page(&mut self) -> Result<u64> {
        self.go_to_page(self.navigation.current_page().saturating_add(1))
    }

    pub fn prev_page(&mut self) -> Result<u64> {
        self.go_to_page(self.navigation.current_page().saturating_sub(1))
    }

    /// Validate the new size, recompute the page count, re-clamp, and
    /// re-read the current page. Out-of-bound sizes are rejected before any
    /// recompute; if a scan fails the previous pagination stays in effect.
    pub fn set_page_size(&mut self, page_size: usize) -> Result<()> {
        if !Settings::valid_lines_per_page(page_size) {
            return Err(page_size_error(page_size));
        }
        if page_size == self.page_size {
            return Ok(());
        }
        let line_count = self.pager.count_lines(&self.document)?;
        let total_pages = self.pager.page_count(line_count, page_size);
        let mut navigation = self.navigation;
        navigation.resize(total_pages);
        let lines = self
            .pager
            .read_page(&self.document, navigation.current_page(), page_size)?;

        self.line_count = line_count;
        self.page_size = page_size;
        self.navigation = navigation;
        self.page_lines = lines;
        // Bookmarks follow their content, not their old page number.
        self.bookmarks.reindex(page_size as u64);
        Ok(())
    }

    /// Bookmark the current page; returns the generated label for display.
    pub fn add_bookmark(&mut self) -> String {
        let page = self.navigation.current_page();
        let line = self.page_start_line();
        self.bookmarks.add(page, line).label.clone()
    }

    /// Jump to a bookmark by its label.
    pub fn go_to_bookmark(&mut self, label: &str) -> Result<u64> {
        let page = self
            .bookmarks
            .resolve(label)
            .ok_or_else(|| eyre!("no bookmark named {label:?}"))?;
        self.go_to_page(page)
    }

    /// Whether the current page carries a bookmark.
    pub fn current_page_bookmarked(&self) -> bool {
        self.bookmarks.contains_page(self.navigation.current_page())
    }

    /// Whether the absolute line index `line` is a bookmarked position.
    pub fn line_bookmarked(&self, line: u64) -> bool {
        self.bookmarks.contains_line(line)
    }
}

fn page_size_error(page_size: usize) -> eyre::Report {
    eyre!("page size {page_size} is out of range ({MIN_LINES_PER_PAGE}-{MAX_LINES_PER_PAGE})")
}
