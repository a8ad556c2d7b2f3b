use serde::{Deserialize, Serialize};

use crate::domain::event::{Event, EventStatus};
use crate::domain::types::SelectOption;
use crate::dto::list::{ListPageData, PageQuery};
use crate::forms::event::EventForm;

/// Query parameters accepted by the events list view.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct EventsQuery {
    pub page: Option<usize>,
    pub panel: Option<String>,
    pub edit: Option<String>,
    /// `all` or one status value.
    pub status: Option<String>,
    /// Search text over name and description.
    pub q: Option<String>,
    /// `date` or `name`.
    pub sort: Option<String>,
}

impl EventsQuery {
    pub fn page_query(&self) -> PageQuery {
        PageQuery {
            page: self.page,
            panel: self.panel.clone(),
            edit: self.edit.clone(),
        }
    }

    pub fn filters(&self) -> EventFilters {
        EventFilters {
            status: self
                .status
                .clone()
                .filter(|status| !status.is_empty())
                .unwrap_or_else(|| "all".to_string()),
            q: self.q.clone().unwrap_or_default(),
            sort: match self.sort.as_deref() {
                Some("name") => EventSort::Name,
                _ => EventSort::Date,
            },
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EventSort {
    #[default]
    Date,
    Name,
}

/// Filters applied to the fetched page before rendering.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EventFilters {
    pub status: String,
    pub q: String,
    pub sort: EventSort,
}

impl EventFilters {
    /// Rows of the current page that pass the filters, in display order.
    pub fn apply(&self, events: &[Event]) -> Vec<Event> {
        let mut visible: Vec<Event> = events
            .iter()
            .filter(|event| self.status == "all" || event.status.as_str() == self.status)
            .filter(|event| event.matches_search(&self.q))
            .cloned()
            .collect();

        match self.sort {
            // Timestamps share one format, so text order is chronological.
            EventSort::Date => visible.sort_by(|a, b| a.date.cmp(&b.date)),
            EventSort::Name => visible.sort_by_key(|event| event.name.to_lowercase()),
        }
        visible
    }
}

/// Data required to render the events list.
#[derive(Debug, Serialize)]
pub struct EventsPageData {
    #[serde(flatten)]
    pub page: ListPageData<Event, EventForm>,
    pub visible: Vec<Event>,
    pub filters: EventFilters,
    pub statuses: Vec<SelectOption>,
}

impl EventsPageData {
    pub fn new(page: ListPageData<Event, EventForm>, filters: EventFilters) -> Self {
        Self {
            visible: filters.apply(&page.list.items),
            page,
            filters,
            statuses: EventStatus::options(),
        }
    }
}
