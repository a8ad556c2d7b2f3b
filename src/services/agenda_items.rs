use crate::api::{
    AGENDA_ITEMS, AgendaItemReader, AgendaItemWriter, EventReader, ListQuery, SPEAKERS,
    SpeakerReader,
};
use crate::domain::types::{RecordId, SelectOption};
use crate::dto::agenda_items::AgendaItemsPageData;
use crate::dto::list::{ListState, PageQuery};
use crate::forms::agenda_item::AgendaItemForm;
use crate::forms::{Draft, Panel};
use crate::services::attendees::event_options;
use crate::services::{ServiceResult, open_page};

async fn speaker_options<R>(api: &R) -> Vec<SelectOption>
where
    R: SpeakerReader + ?Sized,
{
    match api.list_speakers(ListQuery::new()).await {
        Ok(payload) => payload
            .into_items()
            .into_iter()
            .map(|speaker| SelectOption::new(speaker.id, speaker.name))
            .collect(),
        Err(err) => {
            log::error!("Failed to fetch {SPEAKERS} for select options: {err}");
            Vec::new()
        }
    }
}

/// Fetches the agenda page together with the event and speaker options.
pub async fn load_agenda_items_page<R>(
    api: &R,
    query: &PageQuery,
    reopened: Option<Panel<AgendaItemForm>>,
) -> AgendaItemsPageData
where
    R: AgendaItemReader + EventReader + SpeakerReader + ?Sized,
{
    let mut list = ListState::new(query.page());
    let (items, events, speakers) = tokio::join!(
        api.list_agenda_items(ListQuery::new().page(list.current_page)),
        event_options(api),
        speaker_options(api),
    );
    list.settle(items, AGENDA_ITEMS);

    AgendaItemsPageData::new(
        open_page(list, &query.panel_request(), reopened),
        events,
        speakers,
    )
}

pub async fn submit_agenda_item<R>(
    api: &R,
    id: Option<&RecordId>,
    form: &AgendaItemForm,
) -> ServiceResult<()>
where
    R: AgendaItemWriter + ?Sized,
{
    let payload = form.to_payload()?;
    match id {
        Some(id) => api.update_agenda_item(id, &payload).await?,
        None => api.create_agenda_item(&payload).await?,
    }
    Ok(())
}

pub async fn delete_agenda_item<R>(api: &R, id: &str) -> ServiceResult<()>
where
    R: AgendaItemWriter + ?Sized,
{
    let id = RecordId::new(id)?;
    api.delete_agenda_item(&id).await?;
    Ok(())
}
