use serde::{Deserialize, Serialize};

use crate::domain::speaker::SocialProfiles;
use crate::domain::types::{Identified, RecordId, nullable, wire_enum};

wire_enum! {
    TicketType default Regular {
        Regular => "regular", "Regular";
        Vip => "vip", "VIP";
        Student => "student", "Student";
        Speaker => "speaker", "Speaker";
        Sponsor => "sponsor", "Sponsor";
    }
}

wire_enum! {
    AttendeeStatus default Registered {
        Registered => "registered", "Registered";
        CheckedIn => "checked_in", "Checked In";
        Cancelled => "cancelled", "Cancelled";
        Waitlisted => "waitlisted", "Waitlisted";
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Attendee {
    pub id: RecordId,
    #[serde(deserialize_with = "nullable")]
    pub first_name: String,
    #[serde(deserialize_with = "nullable")]
    pub last_name: String,
    #[serde(deserialize_with = "nullable")]
    pub email: String,
    #[serde(deserialize_with = "nullable")]
    pub phone: String,
    #[serde(deserialize_with = "nullable")]
    pub company: String,
    #[serde(deserialize_with = "nullable")]
    pub position: String,
    pub ticket_type: TicketType,
    pub status: AttendeeStatus,
    pub registration_date: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub dietary_restrictions: String,
    #[serde(deserialize_with = "nullable")]
    pub special_requirements: String,
    #[serde(deserialize_with = "nullable")]
    pub is_vip: bool,
    #[serde(deserialize_with = "nullable")]
    pub social_media: SocialProfiles,
    #[serde(deserialize_with = "nullable")]
    pub notes: String,
    pub event_id: Option<RecordId>,
}

impl Identified for Attendee {
    fn record_id(&self) -> &RecordId {
        &self.id
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AttendeePayload {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub position: String,
    pub ticket_type: TicketType,
    pub status: AttendeeStatus,
    pub registration_date: Option<String>,
    pub dietary_restrictions: String,
    pub special_requirements: String,
    pub is_vip: bool,
    pub social_media: SocialProfiles,
    pub notes: String,
    pub event_id: Option<RecordId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_status_and_name() {
        let attendee: Attendee = serde_json::from_str(
            r#"{"id": "a1", "first_name": "Linus", "last_name": null, "status": "checked_in", "event_id": 9}"#,
        )
        .unwrap();
        assert_eq!(attendee.status, AttendeeStatus::CheckedIn);
        assert_eq!(attendee.status.as_str(), "checked_in");
        assert_eq!(attendee.last_name, "");
        assert_eq!(attendee.event_id.map(String::from), Some("9".to_string()));
    }
}
