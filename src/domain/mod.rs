//! Domain records exchanged with the remote event service.

pub mod agenda_item;
pub mod attendee;
pub mod event;
pub mod session;
pub mod speaker;
pub mod sponsor;
pub mod types;
