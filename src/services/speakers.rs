use crate::api::{SPEAKERS, SpeakerReader, SpeakerWriter};
use crate::domain::types::RecordId;
use crate::dto::list::ListState;
use crate::dto::speakers::{SpeakerCard, SpeakersPageData, SpeakersQuery};
use crate::forms::speaker::SpeakerForm;
use crate::forms::{Draft, Panel};
use crate::services::{ServiceResult, open_page};

/// Fetches one page of speakers with the search and filters forwarded verbatim.
pub async fn load_speakers_page<R>(
    api: &R,
    query: &SpeakersQuery,
    reopened: Option<Panel<SpeakerForm>>,
) -> SpeakersPageData
where
    R: SpeakerReader + ?Sized,
{
    let page_query = query.page_query();
    let filters = query.filters();
    let mut list = ListState::new(page_query.page());
    list.settle(
        api.list_speakers(filters.list_query(list.current_page))
            .await,
        SPEAKERS,
    );

    let details = query
        .details
        .as_deref()
        .and_then(|id| list.items.iter().find(|speaker| speaker.id.as_str() == id))
        .map(SpeakerCard::from);

    let page = open_page(list, &page_query.panel_request(), reopened);
    SpeakersPageData {
        visible: filters.apply(&page.list.items),
        page,
        filters,
        view: query.view(),
        details,
    }
}

pub async fn submit_speaker<R>(
    api: &R,
    id: Option<&RecordId>,
    form: &SpeakerForm,
) -> ServiceResult<()>
where
    R: SpeakerWriter + ?Sized,
{
    let payload = form.to_payload()?;
    match id {
        Some(id) => api.update_speaker(id, &payload).await?,
        None => api.create_speaker(&payload).await?,
    }
    Ok(())
}

pub async fn delete_speaker<R>(api: &R, id: &str) -> ServiceResult<()>
where
    R: SpeakerWriter + ?Sized,
{
    let id = RecordId::new(id)?;
    api.delete_speaker(&id).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ListPayload;
    use crate::api::mock::MockApi;
    use crate::domain::speaker::Speaker;
    use crate::services::ServiceError;

    fn speaker(id: &str, name: &str, expertise: &str) -> Speaker {
        Speaker {
            id: RecordId::new(id).unwrap(),
            name: name.into(),
            expertise: expertise.into(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn filters_reach_the_server_verbatim() {
        let mut api = MockApi::new();
        api.expect_list_speakers()
            .withf(|query| {
                let pairs = query.to_pairs();
                pairs.contains(&("search".to_string(), "Ada".to_string()))
                    && pairs.contains(&("company".to_string(), String::new()))
                    && pairs.contains(&("rating".to_string(), "4".to_string()))
                    && query.page == Some(1)
            })
            .times(1)
            .returning(|_| Ok(ListPayload::Bare(vec![])));

        let query = SpeakersQuery {
            search: Some("Ada".into()),
            rating: Some("4".into()),
            ..Default::default()
        };
        load_speakers_page(&api, &query, None).await;
    }

    #[tokio::test]
    async fn search_narrows_visible_rows_and_details_open() {
        let mut api = MockApi::new();
        api.expect_list_speakers().returning(|_| {
            Ok(ListPayload::Bare(vec![
                speaker("s1", "Ada Lovelace", "Math"),
                speaker("s2", "Grace Hopper", "Compilers"),
            ]))
        });

        let query = SpeakersQuery {
            search: Some("compil".into()),
            details: Some("s1".into()),
            ..Default::default()
        };
        let data = load_speakers_page(&api, &query, None).await;

        assert_eq!(data.page.list.items.len(), 2);
        assert_eq!(data.visible.len(), 1);
        assert_eq!(data.visible[0].speaker.name, "Grace Hopper");
        assert_eq!(data.visible[0].initials, "GH");
        assert_eq!(
            data.details.map(|card| card.speaker.name),
            Some("Ada Lovelace".into())
        );
    }

    #[tokio::test]
    async fn edit_clones_row_into_draft() {
        let mut api = MockApi::new();
        api.expect_list_speakers().returning(|_| {
            let mut row = speaker("s1", "Ada", "Math");
            row.tags = vec!["rust".into(), "wasm".into()];
            row.rating = Some(4.5);
            Ok(ListPayload::Bare(vec![row]))
        });

        let query = SpeakersQuery {
            edit: Some("s1".into()),
            ..Default::default()
        };
        let data = load_speakers_page(&api, &query, None).await;

        let draft = data.page.panel.draft().unwrap();
        assert_eq!(draft.tags, "rust, wasm");
        assert_eq!(draft.rating, "4.5");
    }

    #[tokio::test]
    async fn out_of_range_rating_is_rejected_before_sending() {
        let mut api = MockApi::new();
        api.expect_create_speaker().times(0);

        let form = SpeakerForm {
            name: "Ada".into(),
            bio: "Pioneer".into(),
            expertise: "Math".into(),
            email: "ada@example.com".into(),
            phone: "555".into(),
            rating: "7".into(),
            ..Default::default()
        };
        let result = submit_speaker(&api, None, &form).await;

        assert!(matches!(result, Err(ServiceError::Form(_))));
    }

    #[tokio::test]
    async fn valid_submit_creates_once() {
        let mut api = MockApi::new();
        api.expect_create_speaker()
            .withf(|payload| payload.tags == vec!["rust", "wasm"] && payload.rating == Some(4.0))
            .times(1)
            .returning(|_| Ok(()));

        let form = SpeakerForm {
            name: "Ada".into(),
            bio: "Pioneer".into(),
            expertise: "Math".into(),
            email: "ada@example.com".into(),
            phone: "555".into(),
            rating: "4".into(),
            tags: "rust, wasm".into(),
            ..Default::default()
        };
        submit_speaker(&api, None, &form).await.unwrap();
    }

    #[tokio::test]
    async fn delete_passes_row_id() {
        let mut api = MockApi::new();
        api.expect_delete_speaker()
            .withf(|id| id.as_str() == "s7")
            .times(1)
            .returning(|_| Ok(()));

        delete_speaker(&api, "s7").await.unwrap();
    }
}
