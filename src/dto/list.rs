use serde::{Deserialize, Serialize};

use crate::api::ListPayload;
use crate::api::errors::ApiResult;
use crate::domain::types::RecordId;
use crate::forms::{Panel, PanelRequest};
use crate::pagination::Pager;

/// Query parameters shared by every list view.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<usize>,
    /// `new` opens the empty editor.
    pub panel: Option<String>,
    /// Id of the row to edit.
    pub edit: Option<String>,
}

impl PageQuery {
    pub fn page(&self) -> usize {
        self.page.unwrap_or(1).max(1)
    }

    pub fn panel_request(&self) -> PanelRequest {
        PanelRequest::from_query(self.panel.as_deref(), self.edit.as_deref())
    }
}

/// Rows and pagination of one list view.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ListState<T> {
    pub items: Vec<T>,
    pub current_page: usize,
    pub total_pages: usize,
    /// Set when the last fetch failed, so the view can tell "could not load"
    /// apart from "nothing here".
    pub fetch_failed: bool,
}

impl<T> ListState<T> {
    pub fn new(current_page: usize) -> Self {
        Self {
            items: Vec::new(),
            current_page: current_page.max(1),
            total_pages: 1,
            fetch_failed: false,
        }
    }

    /// Stores whichever parts of the payload are present.
    ///
    /// A bare list replaces the rows and keeps `total_pages`; an envelope
    /// replaces only what it carries.
    pub fn apply(&mut self, payload: ListPayload<T>) {
        match payload {
            ListPayload::Bare(items) => self.items = items,
            ListPayload::Envelope { items, total_pages } => {
                if let Some(items) = items {
                    self.items = items;
                }
                if let Some(total_pages) = total_pages {
                    self.total_pages = total_pages;
                }
            }
        }
        self.fetch_failed = false;
    }

    /// Applies a fetch outcome; failures are logged and leave the rows as they were.
    pub fn settle(&mut self, result: ApiResult<ListPayload<T>>, collection: &str) {
        match result {
            Ok(payload) => self.apply(payload),
            Err(err) => {
                log::error!("Failed to fetch {collection} page {}: {err}", self.current_page);
                self.fetch_failed = true;
            }
        }
    }

    pub fn pager(&self) -> Pager {
        Pager::new(self.current_page, self.total_pages)
    }
}

/// Data required to render a list view with its slide-over editor.
#[derive(Clone, Debug, Serialize)]
pub struct ListPageData<T, D> {
    pub list: ListState<T>,
    pub pager: Pager,
    pub panel: Panel<D>,
    /// Set when an edit was requested for a row that is not on the page.
    pub missing_selection: Option<RecordId>,
}

impl<T, D> ListPageData<T, D> {
    pub fn new(list: ListState<T>, panel: Panel<D>) -> Self {
        Self {
            pager: list.pager(),
            list,
            panel,
            missing_selection: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::errors::ApiError;

    #[test]
    fn bare_list_keeps_previous_total_pages() {
        let mut state = ListState::new(2);
        state.total_pages = 7;
        state.apply(ListPayload::Bare(vec![1, 2, 3]));
        assert_eq!(state.items, vec![1, 2, 3]);
        assert_eq!(state.total_pages, 7);
    }

    #[test]
    fn envelope_updates_present_parts() {
        let mut state = ListState::new(1);
        state.apply(ListPayload::Bare(vec![1]));
        state.apply(ListPayload::Envelope {
            items: None,
            total_pages: Some(3),
        });
        assert_eq!(state.items, vec![1]);
        assert_eq!(state.total_pages, 3);
    }

    #[test]
    fn failure_leaves_rows_and_flags_state() {
        let mut state = ListState::new(1);
        state.settle(Ok(ListPayload::Bare(vec!["a"])), "speakers");
        state.settle(Err(ApiError::Transport("refused".into())), "speakers");
        assert_eq!(state.items, vec!["a"]);
        assert!(state.fetch_failed);
    }

    #[test]
    fn fresh_state_starts_on_page_one_of_one() {
        let state: ListState<u8> = ListState::new(0);
        assert_eq!(state.current_page, 1);
        assert_eq!(state.total_pages, 1);
        assert!(state.items.is_empty());
        assert!(!state.fetch_failed);
    }
}
