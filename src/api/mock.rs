//! Mock API implementation for isolating services in tests.

use async_trait::async_trait;
use mockall::mock;

use crate::api::errors::ApiResult;
use crate::api::{
    AgendaItemReader, AgendaItemWriter, AttendeeReader, AttendeeWriter, EventReader, EventWriter,
    ListPayload, ListQuery, SpeakerReader, SpeakerWriter, SponsorReader, SponsorWriter,
};
use crate::domain::agenda_item::{AgendaItem, AgendaItemPayload};
use crate::domain::attendee::{Attendee, AttendeePayload};
use crate::domain::event::{Event, EventPayload};
use crate::domain::speaker::{Speaker, SpeakerPayload};
use crate::domain::sponsor::{Sponsor, SponsorPayload};
use crate::domain::types::RecordId;

mock! {
    pub Api {}

    #[async_trait]
    impl EventReader for Api {
        async fn list_events(&self, query: ListQuery) -> ApiResult<ListPayload<Event>>;
        async fn get_event(&self, id: &RecordId) -> ApiResult<Option<Event>>;
    }

    #[async_trait]
    impl EventWriter for Api {
        async fn create_event(&self, event: &EventPayload) -> ApiResult<()>;
        async fn update_event(&self, id: &RecordId, event: &EventPayload) -> ApiResult<()>;
        async fn delete_event(&self, id: &RecordId) -> ApiResult<()>;
    }

    #[async_trait]
    impl SpeakerReader for Api {
        async fn list_speakers(&self, query: ListQuery) -> ApiResult<ListPayload<Speaker>>;
    }

    #[async_trait]
    impl SpeakerWriter for Api {
        async fn create_speaker(&self, speaker: &SpeakerPayload) -> ApiResult<()>;
        async fn update_speaker(&self, id: &RecordId, speaker: &SpeakerPayload) -> ApiResult<()>;
        async fn delete_speaker(&self, id: &RecordId) -> ApiResult<()>;
    }

    #[async_trait]
    impl SponsorReader for Api {
        async fn list_sponsors(&self, query: ListQuery) -> ApiResult<ListPayload<Sponsor>>;
    }

    #[async_trait]
    impl SponsorWriter for Api {
        async fn create_sponsor(&self, sponsor: &SponsorPayload) -> ApiResult<()>;
        async fn update_sponsor(&self, id: &RecordId, sponsor: &SponsorPayload) -> ApiResult<()>;
        async fn delete_sponsor(&self, id: &RecordId) -> ApiResult<()>;
    }

    #[async_trait]
    impl AttendeeReader for Api {
        async fn list_attendees(&self, query: ListQuery) -> ApiResult<ListPayload<Attendee>>;
    }

    #[async_trait]
    impl AttendeeWriter for Api {
        async fn create_attendee(&self, attendee: &AttendeePayload) -> ApiResult<()>;
        async fn update_attendee(&self, id: &RecordId, attendee: &AttendeePayload) -> ApiResult<()>;
        async fn delete_attendee(&self, id: &RecordId) -> ApiResult<()>;
    }

    #[async_trait]
    impl AgendaItemReader for Api {
        async fn list_agenda_items(&self, query: ListQuery) -> ApiResult<ListPayload<AgendaItem>>;
    }

    #[async_trait]
    impl AgendaItemWriter for Api {
        async fn create_agenda_item(&self, item: &AgendaItemPayload) -> ApiResult<()>;
        async fn update_agenda_item(&self, id: &RecordId, item: &AgendaItemPayload) -> ApiResult<()>;
        async fn delete_agenda_item(&self, id: &RecordId) -> ApiResult<()>;
    }
}
