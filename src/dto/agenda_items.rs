use serde::Serialize;

use crate::domain::agenda_item::{AgendaItem, AgendaItemStatus, AgendaItemType};
use crate::domain::types::SelectOption;
use crate::dto::list::ListPageData;
use crate::forms::agenda_item::AgendaItemForm;

/// Data required to render the agenda items list.
#[derive(Debug, Serialize)]
pub struct AgendaItemsPageData {
    #[serde(flatten)]
    pub page: ListPageData<AgendaItem, AgendaItemForm>,
    pub events: Vec<SelectOption>,
    pub speakers: Vec<SelectOption>,
    pub types: Vec<SelectOption>,
    pub statuses: Vec<SelectOption>,
}

impl AgendaItemsPageData {
    pub fn new(
        page: ListPageData<AgendaItem, AgendaItemForm>,
        events: Vec<SelectOption>,
        speakers: Vec<SelectOption>,
    ) -> Self {
        Self {
            page,
            events,
            speakers,
            types: AgendaItemType::options(),
            statuses: AgendaItemStatus::options(),
        }
    }
}
