use serde::{Deserialize, Serialize};

use crate::domain::types::{Identified, RecordId, lenient_u32, nullable, wire_enum};

wire_enum! {
    AgendaItemType default Session {
        Keynote => "keynote", "Keynote";
        Session => "session", "Session";
        Workshop => "workshop", "Workshop";
        Break => "break", "Break";
        Networking => "networking", "Networking";
    }
}

wire_enum! {
    AgendaItemStatus default Scheduled {
        Scheduled => "scheduled", "Scheduled";
        InProgress => "in_progress", "In Progress";
        Completed => "completed", "Completed";
        Cancelled => "cancelled", "Cancelled";
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgendaItem {
    pub id: RecordId,
    #[serde(deserialize_with = "nullable")]
    pub title: String,
    #[serde(deserialize_with = "nullable")]
    pub description: String,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub event_id: Option<RecordId>,
    pub speaker_id: Option<RecordId>,
    #[serde(deserialize_with = "nullable")]
    pub event_name: String,
    #[serde(deserialize_with = "nullable")]
    pub speaker_name: String,
    #[serde(deserialize_with = "nullable")]
    pub location: String,
    #[serde(rename = "type")]
    pub kind: AgendaItemType,
    pub status: AgendaItemStatus,
    #[serde(deserialize_with = "lenient_u32")]
    pub capacity: Option<u32>,
    #[serde(deserialize_with = "nullable")]
    pub is_featured: bool,
    #[serde(deserialize_with = "nullable")]
    pub materials_url: String,
    #[serde(deserialize_with = "nullable")]
    pub recording_url: String,
    #[serde(deserialize_with = "nullable")]
    pub notes: String,
}

impl Identified for AgendaItem {
    fn record_id(&self) -> &RecordId {
        &self.id
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AgendaItemPayload {
    pub title: String,
    pub description: String,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub event_id: Option<RecordId>,
    pub speaker_id: Option<RecordId>,
    pub location: String,
    #[serde(rename = "type")]
    pub kind: AgendaItemType,
    pub status: AgendaItemStatus,
    pub capacity: Option<u32>,
    pub is_featured: bool,
    pub materials_url: String,
    pub recording_url: String,
    pub notes: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_field_maps_to_kind() {
        let item: AgendaItem = serde_json::from_str(
            r#"{"id": 1, "title": "Opening", "type": "keynote", "capacity": 300, "speaker_id": "s9"}"#,
        )
        .unwrap();
        assert_eq!(item.kind, AgendaItemType::Keynote);
        assert_eq!(item.capacity, Some(300));
        assert_eq!(item.speaker_id.as_ref().map(RecordId::as_str), Some("s9"));

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["type"], "keynote");
    }
}
