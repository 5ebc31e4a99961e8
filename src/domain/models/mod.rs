// Domain models (business entities)
// Pure Rust, no framework dependencies

pub mod session;
pub mod session_type;
pub mod payloads;

pub use session::SessionSummary;
pub use session_type::SessionType;
pub use payloads::{
    GenerateSummaryRequest, GenerateSummaryResponse, SaveSummaryRequest, SavedSummary,
    SessionSummariesResponse,
};
