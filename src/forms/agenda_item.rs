use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::agenda_item::{AgendaItem, AgendaItemPayload, AgendaItemStatus, AgendaItemType};
use crate::domain::types::{RecordId, parse_int};
use crate::forms::{
    Draft, FormError, checkbox, datetime_input_value, non_empty, number_input_value,
    optional_url,
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
/// Editable draft of an agenda item.
pub struct AgendaItemForm {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub description: String,
    #[validate(length(min = 1))]
    pub start_time: String,
    #[validate(length(min = 1))]
    pub end_time: String,
    pub event_id: String,
    pub speaker_id: String,
    pub location: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub status: String,
    pub capacity: String,
    #[serde(deserialize_with = "checkbox")]
    pub is_featured: bool,
    #[validate(custom(function = "optional_url"))]
    pub materials_url: String,
    #[validate(custom(function = "optional_url"))]
    pub recording_url: String,
    pub notes: String,
}

impl Default for AgendaItemForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            start_time: String::new(),
            end_time: String::new(),
            event_id: String::new(),
            speaker_id: String::new(),
            location: String::new(),
            kind: AgendaItemType::default().to_string(),
            status: AgendaItemStatus::default().to_string(),
            capacity: String::new(),
            is_featured: false,
            materials_url: String::new(),
            recording_url: String::new(),
            notes: String::new(),
        }
    }
}

fn id_input_value(id: Option<&RecordId>) -> String {
    id.map(|id| id.as_str().to_string()).unwrap_or_default()
}

impl Draft for AgendaItemForm {
    type Record = AgendaItem;
    type Payload = AgendaItemPayload;

    fn from_record(item: &AgendaItem) -> Self {
        Self {
            title: item.title.clone(),
            description: item.description.clone(),
            start_time: datetime_input_value(item.start_time.as_deref()),
            end_time: datetime_input_value(item.end_time.as_deref()),
            event_id: id_input_value(item.event_id.as_ref()),
            speaker_id: id_input_value(item.speaker_id.as_ref()),
            location: item.location.clone(),
            kind: item.kind.to_string(),
            status: item.status.to_string(),
            capacity: number_input_value(item.capacity),
            is_featured: item.is_featured,
            materials_url: item.materials_url.clone(),
            recording_url: item.recording_url.clone(),
            notes: item.notes.clone(),
        }
    }

    fn to_payload(&self) -> Result<AgendaItemPayload, FormError> {
        self.validate()?;
        Ok(AgendaItemPayload {
            title: self.title.trim().to_string(),
            description: self.description.clone(),
            start_time: non_empty(&self.start_time),
            end_time: non_empty(&self.end_time),
            event_id: RecordId::new(self.event_id.as_str()).ok(),
            speaker_id: RecordId::new(self.speaker_id.as_str()).ok(),
            location: self.location.clone(),
            kind: AgendaItemType::from(self.kind.as_str()),
            status: AgendaItemStatus::from(self.status.as_str()),
            capacity: parse_int(&self.capacity),
            is_featured: self.is_featured,
            materials_url: self.materials_url.trim().to_string(),
            recording_url: self.recording_url.trim().to_string(),
            notes: self.notes.clone(),
        })
    }
}
