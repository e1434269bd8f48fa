//! Client-side list state: what the user has typed and picked, what was last
//! shown, and which request is allowed to update the view.
//!
//! Transitions never perform I/O. A transition that needs data returns a
//! [`FetchTicket`]; whoever runs the ticket hands the outcome back through
//! [`ListController::apply_response`] or [`ListController::apply_failure`].
//! Each ticket carries a generation number and only the newest generation is
//! applied, so a slow response can never overwrite a newer one.

use crate::services::advocate_query::{SortColumn, SortOrder, DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
use crate::services::advocates_service::{Advocate, AdvocatePage, Pagination};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub search: String,
    pub degrees: Vec<String>,
    pub cities: Vec<String>,
    pub min_experience: String,
    pub max_experience: String,
    pub specialties: Vec<String>,
}

impl FilterState {
    pub fn toggle_degree(&mut self, degree: &str) {
        toggle(&mut self.degrees, degree);
    }

    pub fn toggle_city(&mut self, city: &str) {
        toggle(&mut self.cities, city);
    }

    pub fn toggle_specialty(&mut self, specialty: &str) {
        toggle(&mut self.specialties, specialty);
    }
}

fn toggle(selected: &mut Vec<String>, value: &str) {
    if let Some(pos) = selected.iter().position(|v| v == value) {
        selected.remove(pos);
    } else {
        selected.push(value.to_string());
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub column: SortColumn,
    pub order: SortOrder,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            column: SortColumn::LastName,
            order: SortOrder::Asc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageTarget {
    First,
    Previous,
    Next,
    Last,
    Number(i64),
}

/// Viewport offsets captured before a re-sort, restored once the new rows render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollAnchor {
    pub table_offset: u32,
    pub page_offset: u32,
}

/// Exactly what goes on the wire for one list fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRequest {
    pub page: i64,
    pub page_size: i64,
    pub sort_by: SortColumn,
    pub sort_order: SortOrder,
    pub filters: FilterState,
}

impl ListRequest {
    /// Query pairs in wire order. Empty text fields are left out and every
    /// selected list value becomes its own pair.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page.to_string()),
            ("pageSize", self.page_size.to_string()),
            ("sortBy", self.sort_by.as_str().to_string()),
            ("sortOrder", self.sort_order.as_str().to_string()),
        ];

        let f = &self.filters;
        if !f.search.is_empty() {
            pairs.push(("search", f.search.clone()));
        }
        if !f.min_experience.is_empty() {
            pairs.push(("minExperience", f.min_experience.clone()));
        }
        if !f.max_experience.is_empty() {
            pairs.push(("maxExperience", f.max_experience.clone()));
        }
        pairs.extend(f.degrees.iter().map(|d| ("degrees", d.clone())));
        pairs.extend(f.cities.iter().map(|c| ("cities", c.clone())));
        pairs.extend(f.specialties.iter().map(|s| ("specialties", s.clone())));
        pairs
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub generation: u64,
    pub request: ListRequest,
    pub restore_scroll: Option<ScrollAnchor>,
}

#[derive(Debug, Clone, Default)]
pub struct ListController {
    filters: FilterState,
    sort: Option<SortState>,
    results: Vec<Advocate>,
    pagination: Pagination,
    has_searched: bool,
    loading: bool,
    generation: u64,
}

impl ListController {
    pub fn new() -> Self {
        Self {
            sort: Some(SortState::default()),
            ..Self::default()
        }
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// Editing filters changes nothing on screen until the next search submit.
    pub fn filters_mut(&mut self) -> &mut FilterState {
        &mut self.filters
    }

    pub fn sort(&self) -> Option<SortState> {
        self.sort
    }

    pub fn results(&self) -> &[Advocate] {
        &self.results
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn has_searched(&self) -> bool {
        self.has_searched
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Explicit search. Always allowed; restarts from page 1.
    pub fn submit_search(&mut self) -> FetchTicket {
        self.has_searched = true;
        self.issue(DEFAULT_PAGE, self.pagination.page_size, None)
    }

    /// Header click. Unsorted or another column -> `column` in its first
    /// direction; active in its first direction -> reversed; otherwise unsorted.
    pub fn activate_sort(
        &mut self,
        column: SortColumn,
        scroll: ScrollAnchor,
    ) -> Option<FetchTicket> {
        if !self.has_searched {
            return None;
        }

        let first = column.first_order();
        self.sort = match self.sort {
            Some(active) if active.column == column && active.order == first => {
                Some(SortState {
                    column,
                    order: first.reversed(),
                })
            }
            Some(active) if active.column == column => None,
            _ => Some(SortState {
                column,
                order: first,
            }),
        };

        Some(self.issue(
            self.pagination.page,
            self.pagination.page_size,
            Some(scroll),
        ))
    }

    pub fn go_to_page(&mut self, target: PageTarget) -> Option<FetchTicket> {
        if !self.has_searched {
            return None;
        }

        let current = self.pagination.page;
        let page = match target {
            PageTarget::First => 1,
            PageTarget::Previous => current.saturating_sub(1),
            PageTarget::Next => current.saturating_add(1),
            PageTarget::Last => self.pagination.total_pages,
            PageTarget::Number(n) => n,
        }
        .max(1);

        Some(self.issue(page, self.pagination.page_size, None))
    }

    /// A new page size invalidates the old offset, so this goes back to page 1.
    pub fn change_page_size(&mut self, page_size: i64) -> Option<FetchTicket> {
        if !self.has_searched {
            return None;
        }
        Some(self.issue(DEFAULT_PAGE, page_size, None))
    }

    /// Back to the pre-search state. Issues no request and orphans any
    /// request still in flight.
    pub fn clear_filters(&mut self) {
        self.filters = FilterState::default();
        self.sort = Some(SortState::default());
        self.results.clear();
        self.pagination = Pagination::new(DEFAULT_PAGE, DEFAULT_PAGE_SIZE, 0);
        self.has_searched = false;
        self.loading = false;
        self.generation += 1;
    }

    /// Replaces the visible rows and paging with `page` if `generation` is the
    /// latest issued. Returns whether it was applied.
    pub fn apply_response(&mut self, generation: u64, page: AdvocatePage) -> bool {
        if generation != self.generation {
            return false;
        }
        self.results = page.data;
        self.pagination = page.pagination;
        self.loading = false;
        true
    }

    /// A failed fetch empties the table rather than showing an error state.
    pub fn apply_failure(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            return false;
        }
        self.results.clear();
        self.loading = false;
        true
    }

    fn issue(
        &mut self,
        page: i64,
        page_size: i64,
        restore_scroll: Option<ScrollAnchor>,
    ) -> FetchTicket {
        self.generation += 1;
        self.loading = true;

        let sort = self.sort.unwrap_or_default();
        FetchTicket {
            generation: self.generation,
            request: ListRequest {
                page,
                page_size,
                sort_by: sort.column,
                sort_order: sort.order,
                filters: self.filters.clone(),
            },
            restore_scroll,
        }
    }
}
