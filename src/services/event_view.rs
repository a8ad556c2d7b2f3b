//! Loader behind the event detail page.
//!
//! The event record is a hard prerequisite; the three dependent collections
//! are fetched concurrently once it is known and never fail the view.

use crate::api::errors::ApiError;
use crate::api::{AgendaItemReader, AttendeeReader, EventReader, ListQuery, SpeakerReader};
use crate::domain::types::RecordId;
use crate::dto::event_view::{Collection, EventAggregate, EventViewState, FetchOutcome, Tab};

/// Fetches the event and, if it exists, its speakers, attendees and agenda.
pub async fn fetch_event_aggregate<R>(api: &R, id: &RecordId) -> FetchOutcome
where
    R: EventReader + SpeakerReader + AttendeeReader + AgendaItemReader + ?Sized,
{
    let mut event = match api.get_event(id).await {
        Ok(Some(event)) => event,
        Ok(None) | Err(ApiError::NotFound) => {
            log::warn!("Event {id} not found");
            return FetchOutcome::NotFound;
        }
        Err(err) => {
            log::error!("Failed to fetch event {id}: {err}");
            return FetchOutcome::Errored(err.to_string());
        }
    };
    if event.id.is_empty() {
        event.id = id.clone();
    }

    // All three settle; a failure in one never cancels the others.
    let (speakers, attendees, agenda) = tokio::join!(
        api.list_speakers(ListQuery::new().event_id(id)),
        api.list_attendees(ListQuery::new().event_id(id)),
        api.list_agenda_items(ListQuery::new().event_id(id)),
    );

    FetchOutcome::Ready(Box::new(EventAggregate::assemble(
        event,
        Collection::settle(speakers, "speakers"),
        Collection::settle(attendees, "attendees"),
        Collection::settle(agenda, "agenda"),
    )))
}

/// Issued by [`EventView::begin`]; only the latest ticket may finish a load.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadTicket {
    event_id: RecordId,
    generation: u64,
}

impl LoadTicket {
    pub fn event_id(&self) -> &RecordId {
        &self.event_id
    }
}

/// Controller owning the detail page state.
#[derive(Debug, Default)]
pub struct EventView {
    state: EventViewState,
    generation: u64,
}

impl EventView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &EventViewState {
        &self.state
    }

    pub fn into_state(self) -> EventViewState {
        self.state
    }

    /// Enters `Loading` for `event_id` and invalidates every earlier ticket.
    pub fn begin(&mut self, event_id: RecordId) -> LoadTicket {
        self.generation += 1;
        self.state = EventViewState::Loading {
            event_id: event_id.clone(),
        };
        LoadTicket {
            event_id,
            generation: self.generation,
        }
    }

    /// Applies a fetch outcome. Returns `false` and leaves the state alone
    /// when the ticket is stale.
    pub fn finish(&mut self, ticket: LoadTicket, outcome: FetchOutcome) -> bool {
        if ticket.generation != self.generation {
            log::debug!("Dropping stale response for event {}", ticket.event_id);
            return false;
        }

        self.state = match outcome {
            FetchOutcome::Ready(aggregate) => EventViewState::Ready(aggregate),
            FetchOutcome::NotFound => EventViewState::NotFound {
                event_id: ticket.event_id,
            },
            FetchOutcome::Errored(message) => EventViewState::Errored {
                event_id: ticket.event_id,
                message,
            },
        };
        true
    }

    /// Runs the whole fetch sequence for `event_id` unless the view already
    /// belongs to that event.
    pub async fn load<R>(&mut self, api: &R, event_id: RecordId)
    where
        R: EventReader + SpeakerReader + AttendeeReader + AgendaItemReader + ?Sized,
    {
        if self.state.event_id() == Some(&event_id) {
            return;
        }
        let ticket = self.begin(event_id);
        let outcome = fetch_event_aggregate(api, ticket.event_id()).await;
        self.finish(ticket, outcome);
    }

    /// Switches the visible tab. Only a ready view has tabs.
    pub fn select_tab(&mut self, tab: Tab) -> bool {
        match &mut self.state {
            EventViewState::Ready(aggregate) => {
                aggregate.active_tab = tab;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ListPayload;
    use crate::api::mock::MockApi;
    use crate::domain::attendee::Attendee;
    use crate::domain::event::Event;
    use crate::domain::speaker::Speaker;
    use crate::dto::event_view::CollectionStatus;

    fn id(value: &str) -> RecordId {
        RecordId::new(value).unwrap()
    }

    fn event(value: &str, max_attendees: Option<u32>) -> Event {
        Event {
            id: id(value),
            name: "RustConf".into(),
            max_attendees,
            ..Default::default()
        }
    }

    fn expect_event(api: &mut MockApi, max_attendees: Option<u32>) {
        api.expect_get_event()
            .times(1)
            .returning(move |id| Ok(Some(event(id.as_str(), max_attendees))));
    }

    #[tokio::test]
    async fn dependent_failures_still_reach_ready() {
        let mut api = MockApi::new();
        expect_event(&mut api, Some(200));
        api.expect_list_speakers()
            .times(1)
            .returning(|_| Err(ApiError::Transport("refused".into())));
        api.expect_list_attendees()
            .times(1)
            .returning(|_| Err(ApiError::Status {
                status: 500,
                body: String::new(),
            }));
        api.expect_list_agenda_items()
            .times(1)
            .returning(|_| Err(ApiError::Decode("garbage".into())));

        let mut view = EventView::new();
        view.load(&api, id("e1")).await;

        match view.state() {
            EventViewState::Ready(aggregate) => {
                assert_eq!(aggregate.event.name, "RustConf");
                assert_eq!(aggregate.stats.total_speakers, 0);
                assert_eq!(aggregate.stats.total_attendees, 0);
                assert_eq!(aggregate.stats.total_agenda_items, 0);
                assert_eq!(aggregate.stats.registration_progress, 0.0);
                assert_eq!(
                    aggregate.speakers.status,
                    CollectionStatus::Failed("failed to load speakers".into())
                );
                assert!(aggregate.attendees.failed());
                assert!(aggregate.agenda.failed());
            }
            other => panic!("unexpected state {other:?}"),
        }
    }

    #[tokio::test]
    async fn dependents_are_filtered_by_event_and_counted() {
        let mut api = MockApi::new();
        expect_event(&mut api, Some(200));
        api.expect_list_speakers()
            .withf(|query| query.params == vec![("event_id".to_string(), "e1".to_string())])
            .times(1)
            .returning(|_| Ok(ListPayload::Bare(vec![Speaker::default(), Speaker::default()])));
        api.expect_list_attendees()
            .withf(|query| query.page.is_none())
            .times(1)
            .returning(|_| Ok(ListPayload::Bare(vec![Attendee::default(); 50])));
        api.expect_list_agenda_items().times(1).returning(|_| {
            Ok(ListPayload::Envelope {
                items: None,
                total_pages: Some(2),
            })
        });

        let outcome = fetch_event_aggregate(&api, &id("e1")).await;

        let FetchOutcome::Ready(aggregate) = outcome else {
            panic!("expected a ready aggregate");
        };
        assert_eq!(aggregate.stats.total_speakers, 2);
        assert_eq!(aggregate.stats.total_attendees, 50);
        assert_eq!(aggregate.stats.registration_progress, 25.0);
        assert_eq!(aggregate.agenda.status, CollectionStatus::Loaded);
        assert!(aggregate.agenda.is_empty());
    }

    #[tokio::test]
    async fn missing_event_skips_dependent_fetches() {
        let mut api = MockApi::new();
        api.expect_get_event()
            .times(1)
            .returning(|_| Err(ApiError::NotFound));
        api.expect_list_speakers().times(0);
        api.expect_list_attendees().times(0);
        api.expect_list_agenda_items().times(0);

        let mut view = EventView::new();
        view.load(&api, id("e404")).await;

        assert_eq!(
            view.state(),
            &EventViewState::NotFound {
                event_id: id("e404")
            }
        );
    }

    #[tokio::test]
    async fn empty_body_counts_as_not_found() {
        let mut api = MockApi::new();
        api.expect_get_event().returning(|_| Ok(None));
        api.expect_list_speakers().times(0);

        let outcome = fetch_event_aggregate(&api, &id("e1")).await;

        assert_eq!(outcome, FetchOutcome::NotFound);
    }

    #[tokio::test]
    async fn server_error_on_root_is_fatal() {
        let mut api = MockApi::new();
        api.expect_get_event().returning(|_| {
            Err(ApiError::Status {
                status: 500,
                body: "boom".into(),
            })
        });
        api.expect_list_speakers().times(0);
        api.expect_list_attendees().times(0);
        api.expect_list_agenda_items().times(0);

        let mut view = EventView::new();
        view.load(&api, id("e1")).await;

        assert!(matches!(
            view.state(),
            EventViewState::Errored { event_id, .. } if event_id.as_str() == "e1"
        ));
    }

    #[tokio::test]
    async fn switching_tabs_issues_no_requests() {
        let mut api = MockApi::new();
        expect_event(&mut api, None);
        api.expect_list_speakers()
            .times(1)
            .returning(|_| Ok(ListPayload::Bare(vec![])));
        api.expect_list_attendees()
            .times(1)
            .returning(|_| Ok(ListPayload::Bare(vec![])));
        api.expect_list_agenda_items()
            .times(1)
            .returning(|_| Ok(ListPayload::Bare(vec![])));

        let mut view = EventView::new();
        view.load(&api, id("e1")).await;
        for tab in Tab::ALL {
            assert!(view.select_tab(tab));
        }
        // Same id again is a no-op, so the `times(1)` expectations hold.
        view.load(&api, id("e1")).await;

        match view.state() {
            EventViewState::Ready(aggregate) => assert_eq!(aggregate.active_tab, Tab::Attendees),
            other => panic!("unexpected state {other:?}"),
        }
    }

    #[test]
    fn stale_ticket_is_dropped() {
        let mut view = EventView::new();
        let first = view.begin(id("e1"));
        let second = view.begin(id("e2"));

        let stale = FetchOutcome::Ready(Box::new(EventAggregate::assemble(
            event("e1", None),
            Collection::settle(Ok(ListPayload::Bare(vec![])), "speakers"),
            Collection::settle(Ok(ListPayload::Bare(vec![])), "attendees"),
            Collection::settle(Ok(ListPayload::Bare(vec![])), "agenda"),
        )));
        assert!(!view.finish(first, stale));
        assert_eq!(
            view.state(),
            &EventViewState::Loading {
                event_id: id("e2")
            }
        );

        assert!(view.finish(second, FetchOutcome::NotFound));
        assert_eq!(
            view.state(),
            &EventViewState::NotFound {
                event_id: id("e2")
            }
        );
    }

    #[test]
    fn tabs_need_a_ready_view() {
        let mut view = EventView::new();
        assert!(!view.select_tab(Tab::Agenda));
        assert_eq!(view.state(), &EventViewState::Idle);
    }
}
