//! Table data controller.
//!
//! Owns one screen's record set together with its search query, status
//! filter and page index, and derives the visible page from them. The
//! derived view is recomputed from scratch after every change; records are
//! only ever replaced wholesale by a fetch.
//!
//! Fetches are stamped with a generation. Only the most recently issued
//! fetch may write state, so a slow response to an earlier reload cannot
//! overwrite a newer one.

use tracing::{debug, warn};

use super::field_path::FieldPath;
use super::filter::{matches_record, SearchFilter, StatusFilter};
use super::pagination::{clamp_page, page_range, total_pages};
use super::record::TableRecord;
use super::source::RecordSource;
use crate::config::DEFAULT_PAGE_SIZE;
use crate::error::FetchError;

/// Per-screen table settings
#[derive(Debug, Clone, PartialEq)]
pub struct TableConfig {
    pub page_size: usize,
    /// Empty disables search matching entirely
    pub searchable_fields: Vec<FieldPath>,
    pub status_field: Option<FieldPath>,
}

impl TableConfig {
    pub fn new() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            searchable_fields: Vec::new(),
            status_field: None,
        }
    }

    /// Page size, raised to 1 if zero
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn searchable<I, P>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<FieldPath>,
    {
        self.searchable_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_status_field(mut self, field: impl Into<FieldPath>) -> Self {
        self.status_field = Some(field.into());
        self
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Generation stamp handed out by [`TableController::begin_fetch`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
}

impl FetchTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// What a completed fetch did to the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    Loaded { records: usize },
    Failed,
    /// A newer fetch was issued meanwhile; the result was discarded
    Stale,
}

/// Owned copy of everything a table view renders
#[derive(Debug, Clone, PartialEq)]
pub struct TableSnapshot<T> {
    pub paginated_data: Vec<T>,
    pub current_page: usize,
    pub total_pages: usize,
    pub filtered_len: usize,
    pub total_len: usize,
    pub search_query: String,
    pub status_filter: Option<String>,
    pub is_loading: bool,
    pub error: Option<FetchError>,
}

#[derive(Debug, Clone)]
pub struct TableController<T> {
    config: TableConfig,
    records: Vec<T>,
    // Indices into `records` that pass the current filters, in record order
    visible: Vec<usize>,
    search_query: String,
    status_filter: Option<String>,
    current_page: usize,
    error: Option<FetchError>,
    latest_generation: u64,
    pending: Option<u64>,
}

impl<T: TableRecord> TableController<T> {
    pub fn new(config: TableConfig) -> Self {
        Self {
            config: TableConfig {
                page_size: config.page_size.max(1),
                ..config
            },
            records: Vec::new(),
            visible: Vec::new(),
            search_query: String::new(),
            status_filter: None,
            current_page: 1,
            error: None,
            latest_generation: 0,
            pending: None,
        }
    }

    /// Controller whose first fetch is already in flight.
    ///
    /// For views that render before they can start fetching: the first
    /// render reports loading, and the returned ticket completes that fetch.
    pub fn loading(config: TableConfig) -> (Self, FetchTicket) {
        let mut controller = Self::new(config);
        let ticket = controller.begin_fetch();
        (controller, ticket)
    }

    /// Controller pre-populated with a record set, as if already fetched
    pub fn with_records(config: TableConfig, records: Vec<T>) -> Self {
        let mut controller = Self::new(config);
        controller.records = records;
        controller.refresh_view();
        controller
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn status_filter(&self) -> Option<&str> {
        self.status_filter.as_deref()
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.config.page_size
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.visible.len(), self.config.page_size)
    }

    pub fn filtered_len(&self) -> usize {
        self.visible.len()
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    pub fn error(&self) -> Option<&FetchError> {
        self.error.as_ref()
    }

    /// Every record passing the current filters, in fetch order
    pub fn filtered_data(&self) -> Vec<&T> {
        self.visible.iter().map(|&idx| &self.records[idx]).collect()
    }

    /// The current page slice of the filtered records
    pub fn paginated_data(&self) -> Vec<&T> {
        let range = page_range(self.current_page, self.config.page_size, self.visible.len());
        self.visible[range].iter().map(|&idx| &self.records[idx]).collect()
    }

    /// Jump to a page; out-of-range values are clamped
    pub fn set_current_page(&mut self, page: usize) {
        self.current_page = clamp_page(page, self.total_pages());
    }

    pub fn next_page(&mut self) {
        self.set_current_page(self.current_page.saturating_add(1));
    }

    pub fn previous_page(&mut self) {
        self.set_current_page(self.current_page.saturating_sub(1));
    }

    /// Replace the search query and go back to the first page
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
        self.current_page = 1;
        self.refresh_view();
    }

    /// Replace the status filter (empty clears it) and go back to the first page
    pub fn set_status_filter(&mut self, value: impl Into<String>) {
        let value = value.into();
        self.status_filter = if value.is_empty() { None } else { Some(value) };
        self.current_page = 1;
        self.refresh_view();
    }

    /// Mark a fetch as in flight and stamp it with a new generation
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.latest_generation += 1;
        self.pending = Some(self.latest_generation);
        debug!(generation = self.latest_generation, "Fetching table records");
        FetchTicket {
            generation: self.latest_generation,
        }
    }

    /// Apply the result of a fetch started with `ticket`.
    ///
    /// On failure the previous record set stays in place and only `error`
    /// changes. Results for superseded tickets are dropped.
    pub fn complete_fetch(&mut self, ticket: FetchTicket, result: Result<Vec<T>, FetchError>) -> FetchOutcome {
        if ticket.generation != self.latest_generation {
            debug!(
                generation = ticket.generation,
                latest = self.latest_generation,
                "Discarding stale table fetch"
            );
            return FetchOutcome::Stale;
        }
        self.pending = None;

        match result {
            Ok(records) => {
                let count = records.len();
                self.records = records;
                self.error = None;
                self.refresh_view();
                FetchOutcome::Loaded { records: count }
            }
            Err(err) => {
                warn!("Table fetch failed: {}", err);
                self.error = Some(err);
                FetchOutcome::Failed
            }
        }
    }

    /// Fetch from `source` and apply the result
    pub async fn load<S>(&mut self, source: &S) -> FetchOutcome
    where
        S: RecordSource<T> + ?Sized,
    {
        let ticket = self.begin_fetch();
        let result = source.fetch().await;
        self.complete_fetch(ticket, result)
    }

    /// Re-fetch the whole record set, replacing it on success
    pub async fn reload<S>(&mut self, source: &S) -> FetchOutcome
    where
        S: RecordSource<T> + ?Sized,
    {
        self.load(source).await
    }

    pub fn snapshot(&self) -> TableSnapshot<T>
    where
        T: Clone,
    {
        TableSnapshot {
            paginated_data: self.paginated_data().into_iter().cloned().collect(),
            current_page: self.current_page,
            total_pages: self.total_pages(),
            filtered_len: self.visible.len(),
            total_len: self.records.len(),
            search_query: self.search_query.clone(),
            status_filter: self.status_filter.clone(),
            is_loading: self.is_loading(),
            error: self.error.clone(),
        }
    }

    fn refresh_view(&mut self) {
        let search = if self.config.searchable_fields.is_empty() {
            None
        } else {
            SearchFilter::new(&self.search_query)
        };
        let status = StatusFilter::new(self.config.status_field.as_ref(), self.status_filter.as_deref());

        self.visible = self
            .records
            .iter()
            .enumerate()
            .filter(|(_, record)| {
                matches_record(*record, search.as_ref(), &self.config.searchable_fields, status.as_ref())
            })
            .map(|(idx, _)| idx)
            .collect();

        let pages = self.total_pages();
        if self.current_page > pages {
            self.current_page = pages;
        }
        debug!(
            total = self.records.len(),
            visible = self.visible.len(),
            page = self.current_page,
            "Recomputed table view"
        );
    }
}
