// Shared services
// Remote calls to the summary service go through the NotesApi port
pub mod api_service;

pub use api_service::{ApiService, NotesApi};
