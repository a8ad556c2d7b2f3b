use serde::Serialize;

use crate::domain::attendee::{Attendee, AttendeeStatus, TicketType};
use crate::domain::types::SelectOption;
use crate::dto::list::ListPageData;
use crate::forms::attendee::AttendeeForm;

/// Data required to render the attendees list.
#[derive(Debug, Serialize)]
pub struct AttendeesPageData {
    #[serde(flatten)]
    pub page: ListPageData<Attendee, AttendeeForm>,
    /// Options of the event select.
    pub events: Vec<SelectOption>,
    pub ticket_types: Vec<SelectOption>,
    pub statuses: Vec<SelectOption>,
}

impl AttendeesPageData {
    pub fn new(page: ListPageData<Attendee, AttendeeForm>, events: Vec<SelectOption>) -> Self {
        Self {
            page,
            events,
            ticket_types: TicketType::options(),
            statuses: AttendeeStatus::options(),
        }
    }
}
