use dioxus::prelude::*;

use crate::shared::state::{CreateFlow, SearchFlow};

/// Home page state, created empty on every visit
pub fn use_create_flow() -> Signal<CreateFlow> {
    use_signal(CreateFlow::default)
}

/// Search page state, created empty on every visit
pub fn use_search_flow() -> Signal<SearchFlow> {
    use_signal(SearchFlow::default)
}
