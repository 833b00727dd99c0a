//! Reactive glue over the `contracts` list engine.
//!
//! One `ListState` instance per list view replaces the per-screen
//! filter/paginate/select copies: views only render what `page_of`
//! derives from the record store.

use contracts::shared::list::{filter_records, paginate, PageCursor, Searchable, SelectionSet};
use leptos::prelude::*;

/// Derived view of one page of a filtered list.
#[derive(Clone, Debug)]
pub struct PageView<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub total_pages: usize,
    pub filtered_count: usize,
}

#[derive(Clone, Copy)]
pub struct ListState {
    pub query: RwSignal<String>,
    pub cursor: RwSignal<PageCursor>,
    pub selection: RwSignal<SelectionSet>,
}

impl ListState {
    pub fn new(page_size: usize) -> Self {
        Self {
            query: RwSignal::new(String::new()),
            cursor: RwSignal::new(PageCursor::new(page_size)),
            selection: RwSignal::new(SelectionSet::new()),
        }
    }

    /// Re-derived on every keystroke; resets the cursor and drops the
    /// selection so stale ids cannot survive a filter change.
    pub fn set_query(&self, query: String) {
        self.query.set(query);
        self.cursor.update(|c| c.reset());
        self.selection.update(|s| s.clear());
    }

    pub fn go_to_page(&self, page: usize, filtered_len: usize) {
        self.cursor.update(|c| c.go_to(page, filtered_len));
        self.selection.update(|s| s.clear());
    }

    /// Changing the page size always returns to page 1.
    pub fn set_page_size(&self, page_size: usize) {
        self.cursor.update(|c| c.set_page_size(page_size));
        self.selection.update(|s| s.clear());
    }

    pub fn page_size(&self) -> usize {
        self.cursor.get().page_size
    }

    /// Filter + slice the current page out of `all`.
    pub fn page_of<T: Searchable + Clone>(&self, all: &[T]) -> PageView<T> {
        let query = self.query.get();
        let cursor = self.cursor.get();
        let filtered = filter_records(all, &query);
        let slice = paginate(filtered.len(), cursor.page_size, cursor.page);
        // Display-time clamp: the cursor itself is only moved by user actions.
        let page = cursor.page.min(slice.total_pages);
        PageView {
            items: filtered[slice.start..slice.end].to_vec(),
            page,
            total_pages: slice.total_pages,
            filtered_count: filtered.len(),
        }
    }

    pub fn toggle_one(&self, id: &str) {
        let id = id.to_string();
        self.selection.update(|s| s.toggle_one(&id));
    }

    /// Header checkbox: select exactly the visible page or clear.
    pub fn toggle_all(&self, visible_ids: Vec<String>) {
        self.selection.update(|s| s.toggle_all(&visible_ids));
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.get().contains(id)
    }

    pub fn is_all_selected(&self, visible_ids: &[String]) -> bool {
        self.selection.get().is_all_selected(visible_ids)
    }

    pub fn selected_count(&self) -> usize {
        self.selection.get().len()
    }
}
