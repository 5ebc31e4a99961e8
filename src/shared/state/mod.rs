//! Page state.
//!
//! Each page keeps one explicit state object in a component signal. The
//! synchronous `begin_*`/`finish_*` methods hold every state transition; the
//! async drivers only shuttle requests between them and the `NotesApi`.

pub mod create_flow;
pub mod modal;
pub mod search_flow;
pub mod status;
pub mod store;


pub use create_flow::CreateFlow;
pub use modal::ModalState;
pub use search_flow::{EditSession, SearchFlow};
pub use status::ActionStatus;
pub use store::Store;
