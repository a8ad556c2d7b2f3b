use serde::{Deserialize, Serialize};

use crate::domain::types::{
    Identified, RecordId, lenient_f64, lenient_u32, nullable, wire_enum,
};

wire_enum! {
    /// Lifecycle status of an event.
    EventStatus default Upcoming {
        Upcoming => "upcoming", "Upcoming";
        Live => "live", "Live";
        Past => "past", "Past";
        Cancelled => "cancelled", "Cancelled";
        Postponed => "postponed", "Postponed";
    }
}

/// Event record as returned by the remote service.
///
/// Unlike the other collections, events use camelCase on the wire.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Event {
    pub id: RecordId,
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub description: String,
    pub date: Option<String>,
    pub end_date: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub platform: String,
    #[serde(deserialize_with = "nullable")]
    pub url: String,
    #[serde(deserialize_with = "nullable")]
    pub is_online: bool,
    #[serde(deserialize_with = "nullable")]
    pub location: String,
    #[serde(deserialize_with = "nullable")]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub organizer: String,
    #[serde(deserialize_with = "nullable")]
    pub speaker_ids: Vec<RecordId>,
    #[serde(deserialize_with = "nullable")]
    pub agenda_item_ids: Vec<RecordId>,
    #[serde(deserialize_with = "lenient_u32")]
    pub max_attendees: Option<u32>,
    #[serde(deserialize_with = "lenient_u32")]
    pub registered_attendees_count: Option<u32>,
    #[serde(deserialize_with = "nullable")]
    pub sponsor_ids: Vec<RecordId>,
    pub status: EventStatus,
    #[serde(deserialize_with = "nullable")]
    pub banner_image: String,
    #[serde(deserialize_with = "nullable")]
    pub logo_image: String,
    #[serde(deserialize_with = "nullable")]
    pub is_private: bool,
    #[serde(deserialize_with = "lenient_f64")]
    pub entry_fee: Option<f64>,
    #[serde(deserialize_with = "nullable")]
    pub currency: String,
    #[serde(deserialize_with = "nullable")]
    pub contact_email: String,
    #[serde(deserialize_with = "nullable")]
    pub additional_info: String,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl Event {
    /// Case-insensitive match over name and description.
    pub fn matches_search(&self, needle: &str) -> bool {
        let needle = needle.trim().to_lowercase();
        needle.is_empty()
            || self.name.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
    }
}

impl Identified for Event {
    fn record_id(&self) -> &RecordId {
        &self.id
    }
}

/// Body sent on event create and update.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPayload {
    pub name: String,
    pub description: String,
    pub date: String,
    pub end_date: Option<String>,
    pub platform: String,
    pub url: String,
    pub is_online: bool,
    pub location: String,
    pub tags: Vec<String>,
    pub organizer: String,
    pub speaker_ids: Vec<RecordId>,
    pub agenda_item_ids: Vec<RecordId>,
    pub max_attendees: Option<u32>,
    pub registered_attendees_count: u32,
    pub sponsor_ids: Vec<RecordId>,
    pub status: EventStatus,
    pub banner_image: String,
    pub logo_image: String,
    pub is_private: bool,
    pub entry_fee: Option<f64>,
    pub currency: String,
    pub contact_email: String,
    pub additional_info: String,
}
