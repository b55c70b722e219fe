mod dialog;
mod filter;
mod pager;

pub use dialog::{FilterDialog, PointerTarget};
pub use filter::FilterState;
pub use pager::{Pager, PAGE_SIZE};

use crate::{api::FetchError, post::Post};

/// Fetch lifecycle of the view. Resolves exactly once per mount; both
/// `Ready` and `Error` are terminal.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Ready,
    Error(String),
}

/// The posts listing view: the fetched list, the active filter, the pager
/// and the filter panel, wired together. The derived list is recomputed in
/// full on every read; nothing here caches it.
#[derive(Debug, Default)]
pub struct PostsView {
    state: LoadState,
    posts: Vec<Post>,
    filter: FilterState,
    pager: Pager,
    dialog: FilterDialog,
}

impl PostsView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Resolve the one-shot fetch. On success the post list is replaced
    /// wholesale; on failure only the fixed message is kept. Later calls are
    /// ignored, the lifecycle is terminal for this mount.
    pub fn apply_fetch(&mut self, result: Result<Vec<Post>, FetchError>) {
        if self.state != LoadState::Loading {
            return;
        }
        match result {
            Ok(posts) => {
                self.posts = posts;
                self.state = LoadState::Ready;
            }
            Err(error) => self.state = LoadState::Error(error.to_string()),
        }
    }

    //===================================================
    // Filter state
    //===================================================

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }
    pub fn set_tag_input(&mut self, text: &str) {
        self.filter.set_tag_input(text);
    }
    pub fn add_tag(&mut self) {
        self.filter.add_tag();
    }
    pub fn remove_tag(&mut self, tag: &str) {
        self.filter.remove_tag(tag);
    }
    pub fn set_query(&mut self, text: &str) {
        self.filter.set_query(text);
    }

    //===================================================
    // Filter panel
    //===================================================

    pub fn filter_dialog(&self) -> FilterDialog {
        self.dialog
    }
    pub fn toggle_filter_dialog(&mut self) {
        self.dialog.toggle();
    }
    pub fn pointer_pressed(&mut self, target: PointerTarget) {
        self.dialog.pointer_pressed(target);
    }

    //===================================================
    // Derived list & pagination
    //===================================================

    /// Posts passing the active filter, in their original order.
    pub fn filtered_posts(&self) -> Vec<&Post> {
        self.posts.iter().filter(|p| self.filter.matches(p)).collect()
    }

    pub fn total_pages(&self) -> usize {
        Pager::total_pages(self.filtered_posts().len())
    }

    pub fn current_page(&self) -> usize {
        self.pager.current_page()
    }

    /// The page of the derived list currently on screen. Empty when the
    /// selected page is past the end of a shrunken filter result.
    pub fn current_posts(&self) -> Vec<&Post> {
        let filtered = self.filtered_posts();
        self.pager.page_slice(&filtered).to_vec()
    }

    pub fn previous_page(&mut self) {
        self.pager.previous();
    }

    pub fn next_page(&mut self) {
        let total = self.total_pages();
        self.pager.next(total);
    }

    pub fn go_to_page(&mut self, page: usize) {
        let total = self.total_pages();
        self.pager.go_to(page, total);
    }
}
