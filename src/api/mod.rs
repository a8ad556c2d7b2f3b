//! Typed access to the remote event REST service.
//!
//! Each collection gets a reader/writer trait pair so services can depend on
//! exactly the operations they use and tests can substitute mocks.
use async_trait::async_trait;

use crate::{
    api::errors::ApiResult,
    domain::{
        agenda_item::{AgendaItem, AgendaItemPayload},
        attendee::{Attendee, AttendeePayload},
        event::{Event, EventPayload},
        speaker::{Speaker, SpeakerPayload},
        sponsor::{Sponsor, SponsorPayload},
        types::RecordId,
    },
};

pub mod errors;
pub mod http;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

pub const EVENTS: &str = "events";
pub const SPEAKERS: &str = "speakers";
pub const SPONSORS: &str = "sponsors";
pub const ATTENDEES: &str = "attendees";
pub const AGENDA_ITEMS: &str = "agendaItems";

/// Query string sent with a collection list request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub page: Option<usize>,
    pub params: Vec<(String, String)>,
}

impl ListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, page: usize) -> Self {
        self.page = Some(page);
        self
    }

    /// Adds a parameter passed to the server verbatim, even when empty.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Restricts a dependent collection to a single event.
    pub fn event_id(self, id: &RecordId) -> Self {
        self.param("event_id", id.as_str())
    }

    /// Flattened `(key, value)` pairs with `page` first.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        self.page
            .map(|page| ("page".to_string(), page.to_string()))
            .into_iter()
            .chain(self.params.iter().cloned())
            .collect()
    }
}

/// Shape of a list response.
///
/// Servers answer either with a bare JSON array or with an object carrying
/// the rows and pagination metadata.
#[derive(Debug, Clone, PartialEq)]
pub enum ListPayload<T> {
    Bare(Vec<T>),
    Envelope {
        items: Option<Vec<T>>,
        total_pages: Option<usize>,
    },
}

impl<T> ListPayload<T> {
    /// Rows only when the body was a bare list; anything else counts as empty.
    pub fn into_bare(self) -> Vec<T> {
        match self {
            ListPayload::Bare(items) => items,
            ListPayload::Envelope { .. } => Vec::new(),
        }
    }

    /// Rows from either shape.
    pub fn into_items(self) -> Vec<T> {
        match self {
            ListPayload::Bare(items) => items,
            ListPayload::Envelope { items, .. } => items.unwrap_or_default(),
        }
    }
}

#[async_trait]
pub trait EventReader {
    async fn list_events(&self, query: ListQuery) -> ApiResult<ListPayload<Event>>;
    /// `Ok(None)` when the server answered with an empty or `null` body.
    async fn get_event(&self, id: &RecordId) -> ApiResult<Option<Event>>;
}

#[async_trait]
pub trait EventWriter {
    async fn create_event(&self, event: &EventPayload) -> ApiResult<()>;
    async fn update_event(&self, id: &RecordId, event: &EventPayload) -> ApiResult<()>;
    async fn delete_event(&self, id: &RecordId) -> ApiResult<()>;
}

#[async_trait]
pub trait SpeakerReader {
    async fn list_speakers(&self, query: ListQuery) -> ApiResult<ListPayload<Speaker>>;
}

#[async_trait]
pub trait SpeakerWriter {
    async fn create_speaker(&self, speaker: &SpeakerPayload) -> ApiResult<()>;
    async fn update_speaker(&self, id: &RecordId, speaker: &SpeakerPayload) -> ApiResult<()>;
    async fn delete_speaker(&self, id: &RecordId) -> ApiResult<()>;
}

#[async_trait]
pub trait SponsorReader {
    async fn list_sponsors(&self, query: ListQuery) -> ApiResult<ListPayload<Sponsor>>;
}

#[async_trait]
pub trait SponsorWriter {
    async fn create_sponsor(&self, sponsor: &SponsorPayload) -> ApiResult<()>;
    async fn update_sponsor(&self, id: &RecordId, sponsor: &SponsorPayload) -> ApiResult<()>;
    async fn delete_sponsor(&self, id: &RecordId) -> ApiResult<()>;
}

#[async_trait]
pub trait AttendeeReader {
    async fn list_attendees(&self, query: ListQuery) -> ApiResult<ListPayload<Attendee>>;
}

#[async_trait]
pub trait AttendeeWriter {
    async fn create_attendee(&self, attendee: &AttendeePayload) -> ApiResult<()>;
    async fn update_attendee(&self, id: &RecordId, attendee: &AttendeePayload) -> ApiResult<()>;
    async fn delete_attendee(&self, id: &RecordId) -> ApiResult<()>;
}

#[async_trait]
pub trait AgendaItemReader {
    async fn list_agenda_items(&self, query: ListQuery) -> ApiResult<ListPayload<AgendaItem>>;
}

#[async_trait]
pub trait AgendaItemWriter {
    async fn create_agenda_item(&self, item: &AgendaItemPayload) -> ApiResult<()>;
    async fn update_agenda_item(&self, id: &RecordId, item: &AgendaItemPayload) -> ApiResult<()>;
    async fn delete_agenda_item(&self, id: &RecordId) -> ApiResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_put_page_first_and_keep_empty_params() {
        let query = ListQuery::new()
            .param("search", "")
            .param("expertise", "rust")
            .page(2);
        assert_eq!(
            query.to_pairs(),
            vec![
                ("page".to_string(), "2".to_string()),
                ("search".to_string(), String::new()),
                ("expertise".to_string(), "rust".to_string()),
            ]
        );
    }

    #[test]
    fn envelope_counts_as_empty_bare_list() {
        let payload: ListPayload<u8> = ListPayload::Envelope {
            items: Some(vec![1, 2]),
            total_pages: Some(3),
        };
        assert_eq!(payload.clone().into_items(), vec![1, 2]);
        assert!(payload.into_bare().is_empty());
    }
}
