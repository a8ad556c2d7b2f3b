use serde::{Deserialize, Serialize};

use crate::api::ListQuery;
use crate::domain::speaker::Speaker;
use crate::dto::list::{ListPageData, PageQuery};
use crate::forms::speaker::SpeakerForm;

/// Query parameters accepted by the speakers view.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct SpeakersQuery {
    pub page: Option<usize>,
    pub panel: Option<String>,
    pub edit: Option<String>,
    /// Id of the speaker whose details are shown.
    pub details: Option<String>,
    pub view: Option<String>,
    pub search: Option<String>,
    pub expertise: Option<String>,
    pub company: Option<String>,
    pub rating: Option<String>,
}

impl SpeakersQuery {
    pub fn page_query(&self) -> PageQuery {
        PageQuery {
            page: self.page,
            panel: self.panel.clone(),
            edit: self.edit.clone(),
        }
    }

    pub fn filters(&self) -> SpeakerFilters {
        SpeakerFilters {
            search: self.search.clone().unwrap_or_default(),
            expertise: self.expertise.clone().unwrap_or_default(),
            company: self.company.clone().unwrap_or_default(),
            rating: self.rating.clone().unwrap_or_default(),
        }
    }

    pub fn view(&self) -> SpeakerView {
        match self.view.as_deref() {
            Some("table") => SpeakerView::Table,
            _ => SpeakerView::Grid,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SpeakerView {
    #[default]
    Grid,
    Table,
}

/// Search and filters, forwarded to the server and re-applied locally.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SpeakerFilters {
    pub search: String,
    pub expertise: String,
    pub company: String,
    pub rating: String,
}

impl SpeakerFilters {
    /// List request for `page` carrying every filter verbatim.
    pub fn list_query(&self, page: usize) -> ListQuery {
        ListQuery::new()
            .page(page)
            .param("search", self.search.as_str())
            .param("expertise", self.expertise.as_str())
            .param("company", self.company.as_str())
            .param("rating", self.rating.as_str())
    }

    /// Rows of the fetched page matching the search text.
    pub fn apply(&self, speakers: &[Speaker]) -> Vec<SpeakerCard> {
        speakers
            .iter()
            .filter(|speaker| speaker.matches_search(&self.search))
            .map(SpeakerCard::from)
            .collect()
    }
}

/// Speaker with the values its card and details panel display.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SpeakerCard {
    #[serde(flatten)]
    pub speaker: Speaker,
    pub initials: String,
    /// Filled stars out of five.
    pub stars: usize,
}

impl From<&Speaker> for SpeakerCard {
    fn from(speaker: &Speaker) -> Self {
        Self {
            initials: speaker.initials(),
            stars: speaker.stars(),
            speaker: speaker.clone(),
        }
    }
}

/// Data required to render the speakers view.
#[derive(Debug, Serialize)]
pub struct SpeakersPageData {
    #[serde(flatten)]
    pub page: ListPageData<Speaker, SpeakerForm>,
    pub visible: Vec<SpeakerCard>,
    pub filters: SpeakerFilters,
    pub view: SpeakerView,
    /// Speaker shown in the read-only details panel.
    pub details: Option<SpeakerCard>,
}
