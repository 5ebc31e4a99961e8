use std::ops::Deref;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::config::ApiConfig;
use crate::shared::services::{ApiService, NotesApi};

/// Shared handle to the summary service, provided once at the app root
#[derive(Clone)]
pub struct NotesApiHandle(Rc<dyn NotesApi>);

impl NotesApiHandle {
    pub fn new(api: impl NotesApi + 'static) -> Self {
        Self(Rc::new(api))
    }
}

impl Deref for NotesApiHandle {
    type Target = dyn NotesApi;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

/// Install the HTTP-backed API for every page below the caller
pub fn use_provide_notes_api() -> NotesApiHandle {
    use_context_provider(|| {
        let config = ApiConfig::from_env();
        tracing::info!(base_url = %config.base_url, "Summary service configured");
        NotesApiHandle::new(ApiService::new(config))
    })
}

pub fn use_notes_api() -> NotesApiHandle {
    use_context::<NotesApiHandle>()
}
