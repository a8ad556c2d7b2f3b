use crate::api::{ListQuery, SPONSORS, SponsorReader, SponsorWriter};
use crate::domain::types::RecordId;
use crate::dto::list::{ListState, PageQuery};
use crate::dto::sponsors::SponsorsPageData;
use crate::forms::sponsor::SponsorForm;
use crate::forms::{Draft, Panel};
use crate::services::{ServiceResult, open_page};

pub async fn load_sponsors_page<R>(
    api: &R,
    query: &PageQuery,
    reopened: Option<Panel<SponsorForm>>,
) -> SponsorsPageData
where
    R: SponsorReader + ?Sized,
{
    let mut list = ListState::new(query.page());
    list.settle(
        api.list_sponsors(ListQuery::new().page(list.current_page))
            .await,
        SPONSORS,
    );

    SponsorsPageData::new(open_page(list, &query.panel_request(), reopened))
}

pub async fn submit_sponsor<R>(
    api: &R,
    id: Option<&RecordId>,
    form: &SponsorForm,
) -> ServiceResult<()>
where
    R: SponsorWriter + ?Sized,
{
    let payload = form.to_payload()?;
    match id {
        Some(id) => api.update_sponsor(id, &payload).await?,
        None => api.create_sponsor(&payload).await?,
    }
    Ok(())
}

pub async fn delete_sponsor<R>(api: &R, id: &str) -> ServiceResult<()>
where
    R: SponsorWriter + ?Sized,
{
    let id = RecordId::new(id)?;
    api.delete_sponsor(&id).await?;
    Ok(())
}
