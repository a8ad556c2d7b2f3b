use crate::api::{EVENTS, EventReader, EventWriter, ListQuery};
use crate::domain::types::RecordId;
use crate::dto::events::{EventsPageData, EventsQuery};
use crate::dto::list::ListState;
use crate::forms::event::EventForm;
use crate::forms::{Draft, Panel};
use crate::services::{ServiceResult, open_page};

/// Fetches one page of events and opens the requested editor.
///
/// A failed fetch is logged and flagged on the list; the page still renders.
pub async fn load_events_page<R>(
    api: &R,
    query: &EventsQuery,
    reopened: Option<Panel<EventForm>>,
) -> EventsPageData
where
    R: EventReader + ?Sized,
{
    let page_query = query.page_query();
    let mut list = ListState::new(page_query.page());
    list.settle(
        api.list_events(ListQuery::new().page(list.current_page))
            .await,
        EVENTS,
    );

    let page = open_page(list, &page_query.panel_request(), reopened);
    EventsPageData::new(page, query.filters())
}

/// Creates the event when `id` is `None`, otherwise replaces it.
pub async fn submit_event<R>(api: &R, id: Option<&RecordId>, form: &EventForm) -> ServiceResult<()>
where
    R: EventWriter + ?Sized,
{
    let payload = form.to_payload()?;
    match id {
        Some(id) => api.update_event(id, &payload).await?,
        None => api.create_event(&payload).await?,
    }
    Ok(())
}

pub async fn delete_event<R>(api: &R, id: &str) -> ServiceResult<()>
where
    R: EventWriter + ?Sized,
{
    let id = RecordId::new(id)?;
    api.delete_event(&id).await?;
    Ok(())
}
