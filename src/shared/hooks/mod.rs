// Custom Dioxus hooks
pub mod use_notes_api;
pub mod use_page_state;

pub use use_notes_api::{NotesApiHandle, use_notes_api, use_provide_notes_api};
pub use use_page_state::{use_create_flow, use_search_flow};
