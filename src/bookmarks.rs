/// A labeled reference into the currently open file.
///
/// `page_index` is what `resolve` returns; `line` is the absolute index of
/// the page's first line at creation time, which lets the bookmark find its
/// page again after the page size changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bookmark {
    pub label: String,
    pub page_index: u64,
    pub line: u64,
}

/// Session-only bookmark list, in insertion order. Lives for the lifetime
/// of the open file; cleared on every file-open. Nothing is persisted.
#[derive(Debug, Clone, Default)]
pub struct BookmarkStore {
    entries: Vec<Bookmark>,
}

impl BookmarkStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a page. Labels run "Bookmark <n> (page <p>)" with n the
    /// 1-based insertion count and p the 1-based page number; adding twice
    /// on the same page creates two distinct entries.
    pub fn add(&mut self, page_index: u64, line: u64) -> &Bookmark {
        let label = format!(
            "Bookmark {} (page {})",
            self.entries.len() + 1,
            page_index + 1
        );
        self.entries.push(Bookmark {
            label,
            page_index,
            line,
        });
        &self.entries[self.entries.len() - 1]
    }

    /// Exact label lookup.
    pub fn resolve(&self, label: &str) -> Option<u64> {
        self.entries
            .iter()
            .find(|bookmark| bookmark.label == label)
            .map(|bookmark| bookmark.page_index)
    }

    /// Empties the store; runs whenever a new file is opened.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Whether any entry points at `page_index`. Drives the presentation
    /// marker on the current page.
    pub fn contains_page(&self, page_index: u64) -> bool {
        self.entries
            .iter()
            .any(|bookmark| bookmark.page_index == page_index)
    }

    /// Whether any entry starts at the absolute line `line`. Drives the
    /// in-page line highlight.
    pub fn contains_line(&self, line: u64) -> bool {
        self.entries.iter().any(|bookmark| bookmark.line == line)
    }

    /// Re-derive every entry's page from its stored line offset. Called
    /// after the page size changes so bookmarks keep pointing at the same
    /// content rather than the same page number.
    pub fn reindex(&mut self, page_size: u64) {
        let page_size = page_size.max(1);
        for bookmark in &mut self.entries {
            bookmark.page_index = bookmark.line / page_size;
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Bookmark> {
        self.entries.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Bookmark> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_generation() {
        let mut store = BookmarkStore::new();
        let label = store.add(2, 200).label.clone();
        assert_eq!(label, "Bookmark 1 (page 3)");
        assert_eq!(store.resolve(&label), Some(2));
    }

    #[test]
    fn test_duplicate_pages_get_distinct_labels() {
        let mut store = BookmarkStore::new();
        let first = store.add(4, 400).label.clone();
        let second = store.add(4, 400).label.clone();
        assert_eq!(first, "Bookmark 1 (page 5)");
        assert_eq!(second, "Bookmark 2 (page 5)");
        assert_ne!(first, second);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_resolve_unknown_label() {
        let store = BookmarkStore::new();
        assert_eq!(store.resolve("Bookmark 1 (page 1)"), None);
    }

    #[test]
    fn test_contains_page_and_line() {
        let mut store = BookmarkStore::new();
        store.add(1, 100);
        assert!(store.contains_page(1));
        assert!(!store.contains_page(0));
        assert!(store.contains_line(100));
        assert!(!store.contains_line(101));
    }

    #[test]
    fn test_clear_empties_the_store() {
        let mut store = BookmarkStore::new();
        store.add(0, 0);
        store.add(1, 100);
        store.clear();
        assert!(store.is_empty());
        assert!(!store.contains_page(0));
    }

    #[test]
    fn test_reindex_follows_content() {
        let mut store = BookmarkStore::new();
        store.add(2, 200);
        store.reindex(50);
        assert_eq!(store.resolve("Bookmark 1 (page 3)"), Some(4));
        store.reindex(100);
        assert_eq!(store.resolve("Bookmark 1 (page 3)"), Some(2));
    }

    #[test]
    fn test_insertion_order_iteration() {
        let mut store = BookmarkStore::new();
        store.add(3, 300);
        store.add(0, 0);
        let pages: Vec<u64> = store.iter().map(|b| b.page_index).collect();
        assert_eq!(pages, vec![3, 0]);
    }
}
