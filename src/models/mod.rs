pub mod catalog;
pub mod category;
pub mod event;
pub mod event_id;
