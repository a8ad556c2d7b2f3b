//! reqwest-backed implementation of the API traits.

use async_trait::async_trait;
use reqwest::{Method, StatusCode, Url};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::api::errors::{ApiError, ApiResult};
use crate::api::{
    AGENDA_ITEMS, ATTENDEES, AgendaItemReader, AgendaItemWriter, AttendeeReader, AttendeeWriter,
    EVENTS, EventReader, EventWriter, ListPayload, ListQuery, SPEAKERS, SPONSORS, SpeakerReader,
    SpeakerWriter, SponsorReader, SponsorWriter,
};
use crate::domain::agenda_item::{AgendaItem, AgendaItemPayload};
use crate::domain::attendee::{Attendee, AttendeePayload};
use crate::domain::event::{Event, EventPayload};
use crate::domain::speaker::{Speaker, SpeakerPayload};
use crate::domain::sponsor::{Sponsor, SponsorPayload};
use crate::domain::types::RecordId;

/// Client for the remote REST service.
///
/// No auth header, caching or retries; every call goes straight to the
/// server and surfaces its outcome.
#[derive(Clone, Debug)]
pub struct HttpApi {
    http: reqwest::Client,
    base_url: Url,
}

impl HttpApi {
    pub fn new(base_url: &str) -> ApiResult<Self> {
        let base_url = Url::parse(base_url.trim_end_matches('/'))
            .map_err(|e| ApiError::InvalidUrl(format!("{base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(base_url.to_string()));
        }
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(Self { http, base_url })
    }

    /// Base url with `segments` appended as escaped path segments.
    fn url(&self, segments: &[&str]) -> ApiResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn list<T: DeserializeOwned>(
        &self,
        collection: &str,
        query: &ListQuery,
    ) -> ApiResult<ListPayload<T>> {
        let url = self.url(&[collection])?;
        log::debug!("GET {url} {:?}", query.to_pairs());
        let response = self.http.get(url).query(&query.to_pairs()).send().await?;
        let body = read_body(response).await?;
        decode_list(collection, parse_body(&body)?)
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        collection: &str,
        id: &RecordId,
    ) -> ApiResult<Option<T>> {
        let url = self.url(&[collection, id.as_str()])?;
        log::debug!("GET {url}");
        let response = self.http.get(url).send().await?;
        let body = read_body(response).await?;
        match parse_body(&body)? {
            Value::Null => Ok(None),
            value => Ok(Some(serde_json::from_value(value)?)),
        }
    }

    async fn send_json(
        &self,
        method: Method,
        segments: &[&str],
        body: &impl Serialize,
    ) -> ApiResult<()> {
        let url = self.url(segments)?;
        log::debug!("{method} {url}");
        let response = self.http.request(method, url).json(body).send().await?;
        read_body(response).await?;
        Ok(())
    }

    async fn delete(&self, collection: &str, id: &RecordId) -> ApiResult<()> {
        let url = self.url(&[collection, id.as_str()])?;
        log::debug!("DELETE {url}");
        let response = self.http.delete(url).send().await?;
        read_body(response).await?;
        Ok(())
    }
}

/// Reads the body, mapping non-success statuses to errors.
async fn read_body(response: reqwest::Response) -> ApiResult<String> {
    let status = response.status();
    let text = response.text().await?;
    if status == StatusCode::NOT_FOUND {
        return Err(ApiError::NotFound);
    }
    if !status.is_success() {
        return Err(ApiError::Status {
            status: status.as_u16(),
            body: text,
        });
    }
    Ok(text)
}

fn parse_body(body: &str) -> ApiResult<Value> {
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_str(body)?)
}

/// Normalizes the accepted list response shapes into a [`ListPayload`].
pub(crate) fn decode_list<T: DeserializeOwned>(
    collection: &str,
    value: Value,
) -> ApiResult<ListPayload<T>> {
    match value {
        Value::Array(rows) => Ok(ListPayload::Bare(decode_rows(collection, rows))),
        Value::Object(mut map) => {
            let total_pages = map.get("total_pages").and_then(page_count);
            // Rows live under the collection name or one of the generic keys.
            let rows = [collection, "items", "data", "results"]
                .into_iter()
                .find_map(|key| match map.remove(key) {
                    Some(Value::Array(rows)) => Some(rows),
                    _ => None,
                });
            Ok(ListPayload::Envelope {
                items: rows.map(|rows| decode_rows(collection, rows)),
                total_pages,
            })
        }
        _ => Ok(ListPayload::Envelope {
            items: None,
            total_pages: None,
        }),
    }
}

/// Decodes each row on its own; rows of an unexpected shape are skipped.
fn decode_rows<T: DeserializeOwned>(collection: &str, rows: Vec<Value>) -> Vec<T> {
    rows.into_iter()
        .enumerate()
        .filter_map(|(index, row)| match serde_json::from_value(row) {
            Ok(record) => Some(record),
            Err(err) => {
                log::warn!("Skipping {collection} row {index}: {err}");
                None
            }
        })
        .collect()
}

fn page_count(value: &Value) -> Option<usize> {
    let count = match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }?;
    usize::try_from(count).ok()
}

#[async_trait]
impl EventReader for HttpApi {
    async fn list_events(&self, query: ListQuery) -> ApiResult<ListPayload<Event>> {
        self.list(EVENTS, &query).await
    }

    async fn get_event(&self, id: &RecordId) -> ApiResult<Option<Event>> {
        self.fetch(EVENTS, id).await
    }
}

#[async_trait]
impl EventWriter for HttpApi {
    async fn create_event(&self, event: &EventPayload) -> ApiResult<()> {
        self.send_json(Method::POST, &[EVENTS], event).await
    }

    async fn update_event(&self, id: &RecordId, event: &EventPayload) -> ApiResult<()> {
        self.send_json(Method::PUT, &[EVENTS, id.as_str()], event)
            .await
    }

    async fn delete_event(&self, id: &RecordId) -> ApiResult<()> {
        self.delete(EVENTS, id).await
    }
}

#[async_trait]
impl SpeakerReader for HttpApi {
    async fn list_speakers(&self, query: ListQuery) -> ApiResult<ListPayload<Speaker>> {
        self.list(SPEAKERS, &query).await
    }
}

#[async_trait]
impl SpeakerWriter for HttpApi {
    async fn create_speaker(&self, speaker: &SpeakerPayload) -> ApiResult<()> {
        self.send_json(Method::POST, &[SPEAKERS], speaker).await
    }

    async fn update_speaker(&self, id: &RecordId, speaker: &SpeakerPayload) -> ApiResult<()> {
        self.send_json(Method::PUT, &[SPEAKERS, id.as_str()], speaker)
            .await
    }

    async fn delete_speaker(&self, id: &RecordId) -> ApiResult<()> {
        self.delete(SPEAKERS, id).await
    }
}

#[async_trait]
impl SponsorReader for HttpApi {
    async fn list_sponsors(&self, query: ListQuery) -> ApiResult<ListPayload<Sponsor>> {
        self.list(SPONSORS, &query).await
    }
}

#[async_trait]
impl SponsorWriter for HttpApi {
    async fn create_sponsor(&self, sponsor: &SponsorPayload) -> ApiResult<()> {
        self.send_json(Method::POST, &[SPONSORS], sponsor).await
    }

    async fn update_sponsor(&self, id: &RecordId, sponsor: &SponsorPayload) -> ApiResult<()> {
        self.send_json(Method::PUT, &[SPONSORS, id.as_str()], sponsor)
            .await
    }

    async fn delete_sponsor(&self, id: &RecordId) -> ApiResult<()> {
        self.delete(SPONSORS, id).await
    }
}

#[async_trait]
impl AttendeeReader for HttpApi {
    async fn list_attendees(&self, query: ListQuery) -> ApiResult<ListPayload<Attendee>> {
        self.list(ATTENDEES, &query).await
    }
}

#[async_trait]
impl AttendeeWriter for HttpApi {
    async fn create_attendee(&self, attendee: &AttendeePayload) -> ApiResult<()> {
        self.send_json(Method::POST, &[ATTENDEES], attendee).await
    }

    async fn update_attendee(&self, id: &RecordId, attendee: &AttendeePayload) -> ApiResult<()> {
        self.send_json(Method::PUT, &[ATTENDEES, id.as_str()], attendee)
            .await
    }

    async fn delete_attendee(&self, id: &RecordId) -> ApiResult<()> {
        self.delete(ATTENDEES, id).await
    }
}

#[async_trait]
impl AgendaItemReader for HttpApi {
    async fn list_agenda_items(&self, query: ListQuery) -> ApiResult<ListPayload<AgendaItem>> {
        self.list(AGENDA_ITEMS, &query).await
    }
}

#[async_trait]
impl AgendaItemWriter for HttpApi {
    async fn create_agenda_item(&self, item: &AgendaItemPayload) -> ApiResult<()> {
        self.send_json(Method::POST, &[AGENDA_ITEMS], item).await
    }

    async fn update_agenda_item(&self, id: &RecordId, item: &AgendaItemPayload) -> ApiResult<()> {
        self.send_json(Method::PUT, &[AGENDA_ITEMS, id.as_str()], item)
            .await
    }

    async fn delete_agenda_item(&self, id: &RecordId) -> ApiResult<()> {
        self.delete(AGENDA_ITEMS, id).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn bare_array_decodes_rows() {
        let payload: ListPayload<Speaker> =
            decode_list(SPEAKERS, json!([{"id": 1, "name": "Ada"}])).unwrap();
        match payload {
            ListPayload::Bare(rows) => assert_eq!(rows[0].name, "Ada"),
            other => panic!("expected bare list, got {other:?}"),
        }
    }

    #[test]
    fn envelope_prefers_collection_key_and_reads_total_pages() {
        let payload: ListPayload<Speaker> = decode_list(
            SPEAKERS,
            json!({"speakers": [{"id": "s1"}], "items": [], "total_pages": "4"}),
        )
        .unwrap();
        match payload {
            ListPayload::Envelope { items, total_pages } => {
                assert_eq!(items.map(|rows| rows.len()), Some(1));
                assert_eq!(total_pages, Some(4));
            }
            other => panic!("expected envelope, got {other:?}"),
        }
    }

    #[test]
    fn malformed_rows_are_skipped_and_the_rest_kept() {
        let payload: ListPayload<Speaker> = decode_list(
            SPEAKERS,
            json!([
                {"id": "s1", "name": "Ada", "tags": ["ai"]},
                {"id": "s2", "name": "Grace", "tags": "ai, cloud"},
                {"id": "s3", "name": "Linus"}
            ]),
        )
        .unwrap();
        let names: Vec<String> = payload.into_items().into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["Ada", "Linus"]);

        let payload: ListPayload<Speaker> = decode_list(
            SPEAKERS,
            json!({"speakers": [{"id": "s1"}, {"id": "s2", "rating": {"stars": 5}}]}),
        )
        .unwrap();
        assert_eq!(payload.into_items().len(), 1);
    }

    #[test]
    fn envelope_without_rows_keeps_metadata_only() {
        let payload: ListPayload<Event> = decode_list(EVENTS, json!({"total_pages": 2})).unwrap();
        assert_eq!(
            payload,
            ListPayload::Envelope {
                items: None,
                total_pages: Some(2)
            }
        );
    }

    #[test]
    fn scalar_body_is_an_empty_envelope() {
        let payload: ListPayload<Event> = decode_list(EVENTS, Value::Null).unwrap();
        assert_eq!(
            payload,
            ListPayload::Envelope {
                items: None,
                total_pages: None
            }
        );
    }

    #[test]
    fn url_escapes_record_ids() {
        let api = HttpApi::new("http://localhost:4000/api/").unwrap();
        let url = api.url(&[EVENTS, "a b"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:4000/api/events/a%20b");
    }

    #[test]
    fn rejects_unparseable_base_url() {
        assert!(matches!(
            HttpApi::new("not a url"),
            Err(ApiError::InvalidUrl(_))
        ));
    }
}
