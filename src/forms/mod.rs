//! Form definitions backing the console's slide-over editors.
//!
//! Every form struct is the editable draft of one record: numeric fields are
//! kept as the raw text the operator typed and only parsed when the draft is
//! turned into a wire payload on submit.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;
use validator::{ValidateUrl, ValidationError, ValidationErrors};

use crate::domain::types::{Identified, RecordId};

pub mod agenda_item;
pub mod attendee;
pub mod auth;
pub mod event;
pub mod speaker;
pub mod sponsor;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid date: {0:?}")]
    InvalidDate(String),

    #[error("invalid {field}: {value:?}")]
    InvalidNumber { field: &'static str, value: String },
}

/// Editable draft of a record.
pub trait Draft: Default {
    type Record: Identified;
    type Payload;

    /// Clones a fetched record into the editable representation.
    fn from_record(record: &Self::Record) -> Self;

    /// Validates the draft and converts it into the body sent to the server.
    fn to_payload(&self) -> Result<Self::Payload, FormError>;
}

/// Which editor the list view was asked to open.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PanelRequest {
    None,
    New,
    Edit(RecordId),
}

impl PanelRequest {
    /// Reads `?panel=new` and `?edit=<id>`; `edit` wins when both are present.
    pub fn from_query(panel: Option<&str>, edit: Option<&str>) -> Self {
        if let Some(id) = edit.and_then(|id| RecordId::new(id).ok()) {
            return PanelRequest::Edit(id);
        }
        match panel {
            Some("new") => PanelRequest::New,
            _ => PanelRequest::None,
        }
    }
}

/// Open/closed state of the slide-over editor together with its draft.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Panel<D> {
    Closed,
    Adding { draft: D },
    Editing { id: RecordId, draft: D },
}

impl<D> Default for Panel<D> {
    fn default() -> Self {
        Panel::Closed
    }
}

impl<D: Draft> Panel<D> {
    /// Opens the requested editor against the freshly fetched rows.
    ///
    /// Returns `Err(id)` when an edit was requested for a row that is not on
    /// the current page; the panel then stays closed.
    pub fn resolve(request: &PanelRequest, rows: &[D::Record]) -> Result<Self, RecordId> {
        match request {
            PanelRequest::None => Ok(Panel::Closed),
            PanelRequest::New => Ok(Panel::Adding {
                draft: D::default(),
            }),
            PanelRequest::Edit(id) => rows
                .iter()
                .find(|row| row.record_id() == id)
                .map(|row| Panel::Editing {
                    id: id.clone(),
                    draft: D::from_record(row),
                })
                .ok_or_else(|| id.clone()),
        }
    }
}

impl<D> Panel<D> {
    /// Re-opens the editor with the posted values after a failed submit.
    pub fn reopen(id: Option<RecordId>, draft: D) -> Self {
        match id {
            Some(id) => Panel::Editing { id, draft },
            None => Panel::Adding { draft },
        }
    }

    pub fn draft(&self) -> Option<&D> {
        match self {
            Panel::Closed => None,
            Panel::Adding { draft } | Panel::Editing { draft, .. } => Some(draft),
        }
    }
}

/// Query string of a save or delete request.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct SaveTarget {
    pub id: Option<String>,
    pub page: Option<usize>,
}

impl SaveTarget {
    /// Record being edited; `None` creates a new record.
    pub fn record_id(&self) -> Option<RecordId> {
        self.id.as_deref().and_then(|id| RecordId::new(id).ok())
    }

    pub fn page(&self) -> usize {
        self.page.unwrap_or(1).max(1)
    }
}

/// Deserializes an HTML checkbox: present and "on" (or truthy) means checked.
pub(crate) fn checkbox<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(matches!(
        value.as_deref().map(str::trim),
        Some("on" | "true" | "1" | "yes")
    ))
}

pub(crate) fn optional_url(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() || value.validate_url() {
        Ok(())
    } else {
        Err(ValidationError::new("url"))
    }
}

fn parse_instant(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .map(|naive| naive.and_utc())
}

/// Normalizes a submitted date to an RFC 3339 UTC timestamp with milliseconds.
///
/// Local `datetime-local` values carry no offset and are read as UTC.
pub fn normalize_timestamp(value: &str) -> Result<String, FormError> {
    parse_instant(value)
        .map(|instant| instant.to_rfc3339_opts(SecondsFormat::Millis, true))
        .ok_or_else(|| FormError::InvalidDate(value.to_string()))
}

/// Formats a stored timestamp for a `datetime-local` input (`YYYY-MM-DDTHH:MM`).
pub fn datetime_input_value(value: Option<&str>) -> String {
    value
        .and_then(parse_instant)
        .map(|instant| instant.format("%Y-%m-%dT%H:%M").to_string())
        .unwrap_or_default()
}

/// Formats a stored date for a `date` input (`YYYY-MM-DD`).
pub fn date_input_value(value: Option<&str>) -> String {
    value
        .and_then(parse_instant)
        .map(|instant| instant.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Empty text becomes `None`.
pub(crate) fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Comma separated hidden id list into record ids.
pub(crate) fn split_ids(value: &str) -> Vec<RecordId> {
    value
        .split(',')
        .filter_map(|id| RecordId::new(id).ok())
        .collect()
}

pub(crate) fn join_ids(ids: &[RecordId]) -> String {
    ids.iter()
        .map(RecordId::as_str)
        .collect::<Vec<_>>()
        .join(",")
}

/// Formats an optional number for a text input.
pub(crate) fn number_input_value<T: ToString>(value: Option<T>) -> String {
    value.map(|n| n.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_local_datetime_to_utc_millis() {
        assert_eq!(
            normalize_timestamp("2024-03-15T10:00").unwrap(),
            "2024-03-15T10:00:00.000Z"
        );
        assert_eq!(
            normalize_timestamp("2024-03-15T12:00:00+02:00").unwrap(),
            "2024-03-15T10:00:00.000Z"
        );
        assert_eq!(
            normalize_timestamp("2024-03-15").unwrap(),
            "2024-03-15T00:00:00.000Z"
        );
    }

    #[test]
    fn rejects_empty_or_garbage_dates() {
        assert!(matches!(
            normalize_timestamp(""),
            Err(FormError::InvalidDate(_))
        ));
        assert!(matches!(
            normalize_timestamp("next tuesday"),
            Err(FormError::InvalidDate(_))
        ));
    }

    #[test]
    fn input_values_trim_to_minutes_or_days() {
        assert_eq!(
            datetime_input_value(Some("2024-03-15T10:30:45.000Z")),
            "2024-03-15T10:30"
        );
        assert_eq!(datetime_input_value(None), "");
        assert_eq!(datetime_input_value(Some("garbage")), "");
        assert_eq!(date_input_value(Some("2024-06-01T00:00:00Z")), "2024-06-01");
        assert_eq!(date_input_value(Some("2024-06-01")), "2024-06-01");
    }

    #[test]
    fn panel_request_prefers_edit() {
        assert_eq!(
            PanelRequest::from_query(Some("new"), Some("e1")),
            PanelRequest::Edit(RecordId::new("e1").unwrap())
        );
        assert_eq!(
            PanelRequest::from_query(Some("new"), None),
            PanelRequest::New
        );
        assert_eq!(
            PanelRequest::from_query(Some("other"), Some(" ")),
            PanelRequest::None
        );
    }

    #[test]
    fn save_target_defaults() {
        let target = SaveTarget::default();
        assert_eq!(target.page(), 1);
        assert_eq!(target.record_id(), None);

        let target = SaveTarget {
            id: Some("s1".into()),
            page: Some(0),
        };
        assert_eq!(target.page(), 1);
        assert_eq!(target.record_id().unwrap().as_str(), "s1");
    }

    #[test]
    fn id_lists_round_trip() {
        let ids = split_ids("a, b,,c");
        assert_eq!(join_ids(&ids), "a,b,c");
    }

    #[test]
    fn optional_url_accepts_blank() {
        assert!(optional_url(" ").is_ok());
        assert!(optional_url("https://example.com").is_ok());
        assert!(optional_url("nope").is_err());
    }
}
