//! Flows behind the console pages.
//!
//! Services sit between the routes and the API traits: they fetch, settle
//! failures into view state and turn submitted drafts into API calls.

use thiserror::Error;

use crate::api::errors::ApiError;
use crate::dto::list::{ListPageData, ListState};
use crate::forms::{Draft, FormError, Panel, PanelRequest};

pub mod agenda_items;
pub mod attendees;
pub mod auth;
pub mod event_view;
pub mod events;
pub mod speakers;
pub mod sponsors;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Form(#[from] FormError),

    #[error("unauthorized")]
    Unauthorized,

    #[error("type constraint violated: {0}")]
    TypeConstraint(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Combines fetched rows with the editor the request asked for.
///
/// A draft re-posted after a failed submit wins over the query. An edit of a
/// row that is not on the page leaves the panel closed and records the
/// missing id for the view.
pub(crate) fn open_page<D>(
    list: ListState<D::Record>,
    request: &PanelRequest,
    reopened: Option<Panel<D>>,
) -> ListPageData<D::Record, D>
where
    D: Draft,
{
    if let Some(panel) = reopened {
        return ListPageData::new(list, panel);
    }
    match Panel::resolve(request, &list.items) {
        Ok(panel) => ListPageData::new(list, panel),
        Err(missing) => {
            log::warn!("Row {missing} is not on page {}", list.current_page);
            let mut page = ListPageData::new(list, Panel::Closed);
            page.missing_selection = Some(missing);
            page
        }
    }
}
