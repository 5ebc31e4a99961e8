pub mod button;
pub mod common;
pub mod delete_button;
pub mod form_fields;
pub mod modal;
pub mod summary_card;

pub use button::{Button, ButtonVariant};
pub use common::{EmptyState, ErrorBanner, LoadingText};
pub use delete_button::DeleteButton;
pub use form_fields::{NumberField, SessionTypeField, TextAreaField, TextField};
pub use modal::Modal;
pub use summary_card::SummaryCard;
