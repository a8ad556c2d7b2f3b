//! DTO modules that bridge services with templates.

pub mod agenda_items;
pub mod attendees;
pub mod event_view;
pub mod events;
pub mod list;
pub mod speakers;
pub mod sponsors;
