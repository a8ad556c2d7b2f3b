use serde::Serialize;

use crate::domain::sponsor::{Sponsor, SponsorStatus, SponsorshipLevel};
use crate::domain::types::SelectOption;
use crate::dto::list::ListPageData;
use crate::forms::sponsor::SponsorForm;

/// Data required to render the sponsors list.
#[derive(Debug, Serialize)]
pub struct SponsorsPageData {
    #[serde(flatten)]
    pub page: ListPageData<Sponsor, SponsorForm>,
    pub levels: Vec<SelectOption>,
    pub statuses: Vec<SelectOption>,
}

impl SponsorsPageData {
    pub fn new(page: ListPageData<Sponsor, SponsorForm>) -> Self {
        Self {
            page,
            levels: SponsorshipLevel::options(),
            statuses: SponsorStatus::options(),
        }
    }
}
