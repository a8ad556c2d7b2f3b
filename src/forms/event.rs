use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::event::{Event, EventPayload, EventStatus};
use crate::domain::types::{join_tags, parse_float, parse_int, split_tags};
use crate::forms::{
    Draft, FormError, checkbox, datetime_input_value, join_ids, non_empty, normalize_timestamp,
    number_input_value, optional_url, split_ids,
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
/// Editable draft of an event.
pub struct EventForm {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub description: String,
    /// `datetime-local` input value.
    #[validate(length(min = 1))]
    pub date: String,
    pub end_date: String,
    pub platform: String,
    #[validate(custom(function = "optional_url"))]
    pub url: String,
    #[serde(deserialize_with = "checkbox")]
    pub is_online: bool,
    pub location: String,
    /// Comma separated tags.
    pub tags: String,
    #[validate(length(min = 1))]
    pub organizer: String,
    /// Related ids are not editable here; they ride along in hidden inputs.
    pub speaker_ids: String,
    pub agenda_item_ids: String,
    pub sponsor_ids: String,
    pub registered_attendees_count: String,
    pub max_attendees: String,
    pub status: String,
    #[validate(custom(function = "optional_url"))]
    pub banner_image: String,
    #[validate(custom(function = "optional_url"))]
    pub logo_image: String,
    #[serde(deserialize_with = "checkbox")]
    pub is_private: bool,
    pub entry_fee: String,
    pub currency: String,
    #[validate(email)]
    pub contact_email: String,
    pub additional_info: String,
}

impl Default for EventForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            date: String::new(),
            end_date: String::new(),
            platform: String::new(),
            url: String::new(),
            is_online: false,
            location: String::new(),
            tags: String::new(),
            organizer: String::new(),
            speaker_ids: String::new(),
            agenda_item_ids: String::new(),
            sponsor_ids: String::new(),
            registered_attendees_count: "0".to_string(),
            max_attendees: String::new(),
            status: EventStatus::default().to_string(),
            banner_image: String::new(),
            logo_image: String::new(),
            is_private: false,
            entry_fee: String::new(),
            currency: "USD".to_string(),
            contact_email: String::new(),
            additional_info: String::new(),
        }
    }
}

impl Draft for EventForm {
    type Record = Event;
    type Payload = EventPayload;

    fn from_record(event: &Event) -> Self {
        Self {
            name: event.name.clone(),
            description: event.description.clone(),
            date: datetime_input_value(event.date.as_deref()),
            end_date: datetime_input_value(event.end_date.as_deref()),
            platform: event.platform.clone(),
            url: event.url.clone(),
            is_online: event.is_online,
            location: event.location.clone(),
            tags: join_tags(&event.tags),
            organizer: event.organizer.clone(),
            speaker_ids: join_ids(&event.speaker_ids),
            agenda_item_ids: join_ids(&event.agenda_item_ids),
            sponsor_ids: join_ids(&event.sponsor_ids),
            registered_attendees_count: event.registered_attendees_count.unwrap_or(0).to_string(),
            max_attendees: number_input_value(event.max_attendees),
            status: event.status.to_string(),
            banner_image: event.banner_image.clone(),
            logo_image: event.logo_image.clone(),
            is_private: event.is_private,
            entry_fee: number_input_value(event.entry_fee),
            currency: event.currency.clone(),
            contact_email: event.contact_email.clone(),
            additional_info: event.additional_info.clone(),
        }
    }

    fn to_payload(&self) -> Result<EventPayload, FormError> {
        self.validate()?;
        let date = normalize_timestamp(&self.date)?;
        let end_date = non_empty(&self.end_date)
            .map(|value| normalize_timestamp(&value))
            .transpose()?;

        Ok(EventPayload {
            name: self.name.trim().to_string(),
            description: self.description.clone(),
            date,
            end_date,
            platform: self.platform.clone(),
            url: self.url.trim().to_string(),
            is_online: self.is_online,
            location: self.location.clone(),
            tags: split_tags(&self.tags),
            organizer: self.organizer.clone(),
            speaker_ids: split_ids(&self.speaker_ids),
            agenda_item_ids: split_ids(&self.agenda_item_ids),
            max_attendees: parse_int(&self.max_attendees),
            registered_attendees_count: parse_int(&self.registered_attendees_count).unwrap_or(0),
            sponsor_ids: split_ids(&self.sponsor_ids),
            status: EventStatus::from(self.status.as_str()),
            banner_image: self.banner_image.trim().to_string(),
            logo_image: self.logo_image.trim().to_string(),
            is_private: self.is_private,
            entry_fee: parse_float(&self.entry_fee),
            currency: self.currency.clone(),
            contact_email: self.contact_email.trim().to_string(),
            additional_info: self.additional_info.clone(),
        })
    }
}
