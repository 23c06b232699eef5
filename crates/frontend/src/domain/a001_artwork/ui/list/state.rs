use crate::domain::a001_artwork::api::ArtworkPage;
use crate::shared::config::GridSettings;
use crate::shared::errors::FetchError;
use crate::shared::notifications::{NotificationQueue, Severity};
use crate::shared::request_guard::{LatestRequest, RequestTicket};
use crate::shared::selection::{parse_desired_count, HeaderCheckState, SelectionTracker};
use contracts::domain::a001_artwork::Artwork;
use contracts::shared::paging::{total_pages, PageRequest};
use leptos::prelude::*;

/// Session state of the artwork list.
///
/// Owned by the list component for as long as it is mounted; selection
/// survives page navigation but not the view.
#[derive(Debug, Clone)]
pub struct ArtworkListState {
    pub artworks: Vec<Artwork>,
    pub request: PageRequest,
    pub total_count: usize,
    pub is_loading: bool,
    pub is_loaded: bool,
    pub selection: SelectionTracker<Artwork>,
    pub notifications: NotificationQueue,
    latest: LatestRequest,
}

impl ArtworkListState {
    pub fn new(page_size: usize) -> Self {
        Self {
            artworks: Vec::new(),
            request: PageRequest::new(0, page_size),
            total_count: 0,
            is_loading: false,
            is_loaded: false,
            selection: SelectionTracker::new(),
            notifications: NotificationQueue::default(),
            latest: LatestRequest::new(),
        }
    }

    /// 0-based page currently requested
    pub fn current_page(&self) -> usize {
        self.request.page_index()
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.total_count, self.request.rows)
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.request = PageRequest::for_page(page, self.request.rows);
    }

    /// Switches page size and returns to the first page.
    pub fn change_page_size(&mut self, page_size: usize) {
        self.request = PageRequest::new(0, page_size);
    }

    /// Marks a fetch of the current request as in flight. Tickets issued
    /// earlier become stale.
    pub fn begin_fetch(&mut self) -> (RequestTicket, PageRequest) {
        self.is_loading = true;
        (self.latest.issue(), self.request)
    }

    /// Applies the outcome of the fetch behind `ticket`.
    ///
    /// Results of superseded requests are dropped and `false` is returned.
    /// On success the rows are replaced and the bulk selection is filled from
    /// the new page. On failure the rows stay as they were and one error
    /// notification is queued.
    pub fn apply_fetch_result(
        &mut self,
        ticket: RequestTicket,
        result: Result<ArtworkPage, FetchError>,
    ) -> bool {
        if !self.latest.is_current(ticket) {
            log::debug!("Dropping response of a superseded artwork request");
            return false;
        }

        self.is_loading = false;
        match result {
            Ok(page) => {
                self.artworks = page.items;
                self.total_count = page.total_count;
                self.is_loaded = true;
                let added = self.selection.reconcile_on_page_load(&self.artworks);
                if added > 0 {
                    log::debug!(
                        "Bulk selection filled with {} rows ({}/{})",
                        added,
                        self.selection.len(),
                        self.selection.desired_count()
                    );
                }
            }
            Err(e) => {
                log::error!("Failed to fetch artworks: {}", e);
                self.notifications.push_fetch_error(&e);
            }
        }
        true
    }

    pub fn toggle_row(&mut self, artwork: &Artwork) {
        self.selection.toggle_row(artwork);
    }

    pub fn toggle_all_on_page(&mut self, checked: bool) {
        self.selection.toggle_all_on_page(&self.artworks, checked);
    }

    pub fn header_state(&self) -> HeaderCheckState {
        self.selection.header_state(&self.artworks)
    }

    /// Handles the bulk-select form. Returns `true` when the input was
    /// accepted; otherwise a warning is queued and nothing else changes.
    pub fn submit_desired_count(&mut self, input: &str) -> bool {
        let result = parse_desired_count(input)
            .and_then(|count| self.selection.set_desired_count(count, &self.artworks));
        match result {
            Ok(()) => {
                log::info!("Bulk selection of {} rows requested", self.selection.desired_count());
                true
            }
            Err(e) => {
                log::warn!("Rejected bulk selection input {:?}: {}", input, e);
                self.notifications.push_validation_error(&e);
                false
            }
        }
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn push_notification(&mut self, severity: Severity, summary: &str, detail: &str) -> u64 {
        self.notifications.push(severity, summary, detail)
    }

    pub fn dismiss_notification(&mut self, id: u64) {
        self.notifications.dismiss(id);
    }
}

pub fn create_state(settings: &GridSettings) -> RwSignal<ArtworkListState> {
    RwSignal::new(ArtworkListState::new(settings.page_size))
}
