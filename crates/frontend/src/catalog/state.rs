use contracts::catalog::Course;
use leptos::prelude::*;

/// Records rendered per pagination step.
pub const PER_PAGE: usize = 50;

/// Fraction of the document height the viewport bottom must pass before the
/// next page is rendered.
pub const SCROLL_THRESHOLD: f64 = 0.9;

/// Catalog store: the fetched course list plus the paging/search position.
///
/// Records are appended in fetch order and never removed. The lowercase
/// searchable text is cached in a parallel vector when a batch is appended,
/// so the records themselves stay immutable.
#[derive(Clone, Debug, Default)]
pub struct CatalogState {
    courses: Vec<Course>,
    searchable: Vec<String>,
    page: usize,
    search_mode: bool,
    term: String,
}

impl CatalogState {
    /// Append a fetched batch. Supports multiple incremental loads, though
    /// only one occurs at startup.
    pub fn append(&mut self, batch: Vec<Course>) {
        self.searchable
            .extend(batch.iter().map(Course::searchable_text));
        self.courses.extend(batch);
    }

    /// Advance the pagination window by one page. No-op while searching.
    ///
    /// The visible window is clamped to the record count, so calling this
    /// past the end of the data renders nothing further.
    pub fn render_next_page(&mut self) {
        if self.search_mode {
            return;
        }
        self.page += 1;
    }

    /// Enter or leave search mode for the given term (case-insensitive).
    ///
    /// An empty term leaves search mode; the visible set then reverts to the
    /// first `page * PER_PAGE` records. That is bounded by how far the user
    /// had paginated, not by the full data set.
    pub fn search(&mut self, term: &str) {
        let term = term.to_lowercase();
        if term.is_empty() {
            self.search_mode = false;
            self.term.clear();
        } else {
            self.search_mode = true;
            self.term = term;
        }
    }

    pub fn search_mode(&self) -> bool {
        self.search_mode
    }

    /// The records currently on display, in fetch order, each paired with
    /// its fetch-order index.
    ///
    /// Outside search mode this is the pagination window; in search mode it
    /// is every loaded record whose searchable text contains the term,
    /// regardless of how far pagination had advanced.
    ///
    /// The index, not dept + code, is the display identity: the API does not
    /// guarantee dept + code unique, and two records sharing one must still
    /// render as two independent cards.
    pub fn visible(&self) -> Vec<(usize, Course)> {
        if self.search_mode {
            self.courses
                .iter()
                .zip(&self.searchable)
                .enumerate()
                .filter(|(_, (_, haystack))| haystack.contains(&self.term))
                .map(|(index, (course, _))| (index, course.clone()))
                .collect()
        } else {
            let end = (self.page * PER_PAGE).min(self.courses.len());
            self.courses[..end].iter().cloned().enumerate().collect()
        }
    }
}

pub fn create_state() -> RwSignal<CatalogState> {
    RwSignal::new(CatalogState::default())
}

/// Per-record detail panel state.
///
/// The panel is built on first toggle and never torn down afterwards; hiding
/// it only sets the `hidden` attribute. Kept in a side map keyed by the
/// record's fetch-order index rather than on the record itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DetailState {
    #[default]
    Unbuilt,
    Visible,
    Hidden,
}

impl DetailState {
    pub fn toggled(self) -> Self {
        match self {
            DetailState::Unbuilt | DetailState::Hidden => DetailState::Visible,
            DetailState::Visible => DetailState::Hidden,
        }
    }

    pub fn is_built(self) -> bool {
        self != DetailState::Unbuilt
    }
}
