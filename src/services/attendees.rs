use crate::api::{ATTENDEES, AttendeeReader, AttendeeWriter, EVENTS, EventReader, ListQuery};
use crate::domain::types::{RecordId, SelectOption};
use crate::dto::attendees::AttendeesPageData;
use crate::dto::list::{ListState, PageQuery};
use crate::forms::attendee::AttendeeForm;
use crate::forms::{Draft, Panel};
use crate::services::{ServiceResult, open_page};

/// Event select options; a failed fetch leaves the select empty.
pub(crate) async fn event_options<R>(api: &R) -> Vec<SelectOption>
where
    R: EventReader + ?Sized,
{
    match api.list_events(ListQuery::new()).await {
        Ok(payload) => payload
            .into_items()
            .into_iter()
            .map(|event| SelectOption::new(event.id, event.name))
            .collect(),
        Err(err) => {
            log::error!("Failed to fetch {EVENTS} for select options: {err}");
            Vec::new()
        }
    }
}

/// Fetches the attendee page and the event options concurrently.
pub async fn load_attendees_page<R>(
    api: &R,
    query: &PageQuery,
    reopened: Option<Panel<AttendeeForm>>,
) -> AttendeesPageData
where
    R: AttendeeReader + EventReader + ?Sized,
{
    let mut list = ListState::new(query.page());
    let (attendees, events) = tokio::join!(
        api.list_attendees(ListQuery::new().page(list.current_page)),
        event_options(api),
    );
    list.settle(attendees, ATTENDEES);

    AttendeesPageData::new(open_page(list, &query.panel_request(), reopened), events)
}

pub async fn submit_attendee<R>(
    api: &R,
    id: Option<&RecordId>,
    form: &AttendeeForm,
) -> ServiceResult<()>
where
    R: AttendeeWriter + ?Sized,
{
    let payload = form.to_payload()?;
    match id {
        Some(id) => api.update_attendee(id, &payload).await?,
        None => api.create_attendee(&payload).await?,
    }
    Ok(())
}

pub async fn delete_attendee<R>(api: &R, id: &str) -> ServiceResult<()>
where
    R: AttendeeWriter + ?Sized,
{
    let id = RecordId::new(id)?;
    api.delete_attendee(&id).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ListPayload;
    use crate::api::errors::ApiError;
    use crate::api::mock::MockApi;
    use crate::domain::attendee::Attendee;
    use crate::domain::event::Event;

    #[tokio::test]
    async fn failed_event_options_leave_rows_intact() {
        let mut api = MockApi::new();
        api.expect_list_attendees().times(1).returning(|_| {
            Ok(ListPayload::Bare(vec![Attendee {
                id: RecordId::new("a1").unwrap(),
                first_name: "Lin".into(),
                ..Default::default()
            }]))
        });
        api.expect_list_events()
            .times(1)
            .returning(|_| Err(ApiError::Transport("timeout".into())));

        let data = load_attendees_page(&api, &PageQuery::default(), None).await;

        assert_eq!(data.page.list.items.len(), 1);
        assert!(!data.page.list.fetch_failed);
        assert!(data.events.is_empty());
    }

    #[tokio::test]
    async fn event_options_accept_either_list_shape() {
        let mut api = MockApi::new();
        api.expect_list_attendees()
            .returning(|_| Ok(ListPayload::Bare(vec![])));
        api.expect_list_events()
            .withf(|query| query.page.is_none())
            .returning(|_| {
                Ok(ListPayload::Envelope {
                    items: Some(vec![Event {
                        id: RecordId::new("e1").unwrap(),
                        name: "RustConf".into(),
                        ..Default::default()
                    }]),
                    total_pages: Some(1),
                })
            });

        let data = load_attendees_page(&api, &PageQuery::default(), None).await;

        assert_eq!(data.events, vec![SelectOption::new("e1", "RustConf")]);
    }

    #[tokio::test]
    async fn submit_keeps_selected_event() {
        let mut api = MockApi::new();
        api.expect_create_attendee()
            .withf(|payload| payload.event_id.as_ref().map(RecordId::as_str) == Some("e1"))
            .times(1)
            .returning(|_| Ok(()));

        let form = AttendeeForm {
            first_name: "Lin".into(),
            last_name: "Clark".into(),
            email: "lin@example.com".into(),
            phone: "555".into(),
            registration_date: "2024-02-01".into(),
            event_id: "e1".into(),
            ..Default::default()
        };
        submit_attendee(&api, None, &form).await.unwrap();
    }
}
