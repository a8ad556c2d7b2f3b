//! State of the event detail page.

use serde::Serialize;

use crate::api::ListPayload;
use crate::api::errors::ApiResult;
use crate::domain::agenda_item::AgendaItem;
use crate::domain::attendee::Attendee;
use crate::domain::event::Event;
use crate::domain::speaker::Speaker;
use crate::domain::types::RecordId;

/// Tabs of the event detail page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Overview,
    Agenda,
    Speakers,
    Attendees,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Overview, Tab::Agenda, Tab::Speakers, Tab::Attendees];

    pub fn as_str(self) -> &'static str {
        match self {
            Tab::Overview => "overview",
            Tab::Agenda => "agenda",
            Tab::Speakers => "speakers",
            Tab::Attendees => "attendees",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Agenda => "Agenda",
            Tab::Speakers => "Speakers",
            Tab::Attendees => "Attendees",
        }
    }

    /// Unknown or missing values open the overview.
    pub fn from_query(value: Option<&str>) -> Self {
        Tab::ALL
            .into_iter()
            .find(|tab| Some(tab.as_str()) == value)
            .unwrap_or_default()
    }
}

/// Outcome of loading one dependent collection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "message", rename_all = "snake_case")]
pub enum CollectionStatus {
    Loaded,
    Failed(String),
}

/// One dependent collection of the aggregate.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Collection<T> {
    pub items: Vec<T>,
    pub status: CollectionStatus,
}

impl<T> Collection<T> {
    /// Settles a dependent fetch; only a bare list counts as rows.
    pub fn settle(result: ApiResult<ListPayload<T>>, name: &str) -> Self {
        match result {
            Ok(payload) => Self {
                items: payload.into_bare(),
                status: CollectionStatus::Loaded,
            },
            Err(err) => {
                log::error!("Failed to load {name}: {err}");
                Self {
                    items: Vec::new(),
                    status: CollectionStatus::Failed(format!("failed to load {name}")),
                }
            }
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn failed(&self) -> bool {
        matches!(self.status, CollectionStatus::Failed(_))
    }
}

/// Counts and registration progress shown on the overview.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct EventStats {
    pub total_speakers: usize,
    pub total_attendees: usize,
    pub total_agenda_items: usize,
    /// Percentage of capacity taken; may exceed 100.
    pub registration_progress: f64,
}

impl EventStats {
    pub fn compute(
        event: &Event,
        speakers: usize,
        attendees: usize,
        agenda_items: usize,
    ) -> Self {
        let registration_progress = match event.max_attendees {
            Some(max) if max > 0 => attendees as f64 / f64::from(max) * 100.0,
            _ => 0.0,
        };

        Self {
            total_speakers: speakers,
            total_attendees: attendees,
            total_agenda_items: agenda_items,
            registration_progress,
        }
    }

    /// Width of the progress bar in percent, clamped to 100.
    pub fn progress_bar_width(&self) -> f64 {
        self.registration_progress.min(100.0)
    }

    /// Rounded percentage for display.
    pub fn progress_label(&self) -> u64 {
        self.registration_progress.round() as u64
    }
}

/// Everything the detail page renders for one event.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EventAggregate {
    pub event: Event,
    pub speakers: Collection<Speaker>,
    pub attendees: Collection<Attendee>,
    pub agenda: Collection<AgendaItem>,
    pub stats: EventStats,
    pub active_tab: Tab,
}

impl EventAggregate {
    pub fn assemble(
        event: Event,
        speakers: Collection<Speaker>,
        attendees: Collection<Attendee>,
        agenda: Collection<AgendaItem>,
    ) -> Self {
        let stats = EventStats::compute(&event, speakers.len(), attendees.len(), agenda.len());
        Self {
            event,
            speakers,
            attendees,
            agenda,
            stats,
            active_tab: Tab::default(),
        }
    }
}

/// What a fetch for one event id produced.
#[derive(Clone, Debug, PartialEq)]
pub enum FetchOutcome {
    Ready(Box<EventAggregate>),
    NotFound,
    Errored(String),
}

/// Lifecycle of the detail page.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum EventViewState {
    #[default]
    Idle,
    Loading {
        event_id: RecordId,
    },
    Ready(Box<EventAggregate>),
    NotFound {
        event_id: RecordId,
    },
    Errored {
        event_id: RecordId,
        message: String,
    },
}

impl EventViewState {
    /// Event this state belongs to, if any.
    pub fn event_id(&self) -> Option<&RecordId> {
        match self {
            EventViewState::Idle => None,
            EventViewState::Loading { event_id }
            | EventViewState::NotFound { event_id }
            | EventViewState::Errored { event_id, .. } => Some(event_id),
            EventViewState::Ready(aggregate) => Some(&aggregate.event.id),
        }
    }
}
