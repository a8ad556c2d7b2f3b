use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::attendee::{Attendee, AttendeePayload, AttendeeStatus, TicketType};
use crate::domain::speaker::SocialProfiles;
use crate::domain::types::RecordId;
use crate::forms::{Draft, FormError, checkbox, date_input_value, non_empty};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
/// Editable draft of an attendee.
pub struct AttendeeForm {
    #[validate(length(min = 1))]
    pub first_name: String,
    #[validate(length(min = 1))]
    pub last_name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub phone: String,
    pub company: String,
    pub position: String,
    pub ticket_type: String,
    pub status: String,
    #[validate(length(min = 1))]
    pub registration_date: String,
    pub dietary_restrictions: String,
    pub special_requirements: String,
    #[serde(deserialize_with = "checkbox")]
    pub is_vip: bool,
    pub social_linkedin: String,
    pub social_twitter: String,
    pub social_github: String,
    pub notes: String,
    /// Selected event, empty for none.
    pub event_id: String,
}

impl Default for AttendeeForm {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            company: String::new(),
            position: String::new(),
            ticket_type: TicketType::default().to_string(),
            status: AttendeeStatus::default().to_string(),
            registration_date: String::new(),
            dietary_restrictions: String::new(),
            special_requirements: String::new(),
            is_vip: false,
            social_linkedin: String::new(),
            social_twitter: String::new(),
            social_github: String::new(),
            notes: String::new(),
            event_id: String::new(),
        }
    }
}

impl Draft for AttendeeForm {
    type Record = Attendee;
    type Payload = AttendeePayload;

    fn from_record(attendee: &Attendee) -> Self {
        Self {
            first_name: attendee.first_name.clone(),
            last_name: attendee.last_name.clone(),
            email: attendee.email.clone(),
            phone: attendee.phone.clone(),
            company: attendee.company.clone(),
            position: attendee.position.clone(),
            ticket_type: attendee.ticket_type.to_string(),
            status: attendee.status.to_string(),
            registration_date: date_input_value(attendee.registration_date.as_deref()),
            dietary_restrictions: attendee.dietary_restrictions.clone(),
            special_requirements: attendee.special_requirements.clone(),
            is_vip: attendee.is_vip,
            social_linkedin: attendee.social_media.linkedin.clone(),
            social_twitter: attendee.social_media.twitter.clone(),
            social_github: attendee.social_media.github.clone(),
            notes: attendee.notes.clone(),
            event_id: attendee
                .event_id
                .as_ref()
                .map(|id| id.as_str().to_string())
                .unwrap_or_default(),
        }
    }

    fn to_payload(&self) -> Result<AttendeePayload, FormError> {
        self.validate()?;
        Ok(AttendeePayload {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.clone(),
            company: self.company.clone(),
            position: self.position.clone(),
            ticket_type: TicketType::from(self.ticket_type.as_str()),
            status: AttendeeStatus::from(self.status.as_str()),
            registration_date: non_empty(&self.registration_date),
            dietary_restrictions: self.dietary_restrictions.clone(),
            special_requirements: self.special_requirements.clone(),
            is_vip: self.is_vip,
            social_media: SocialProfiles {
                linkedin: self.social_linkedin.clone(),
                twitter: self.social_twitter.clone(),
                github: self.social_github.clone(),
            },
            notes: self.notes.clone(),
            event_id: RecordId::new(self.event_id.as_str()).ok(),
        })
    }
}
