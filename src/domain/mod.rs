// Domain layer: session summary records and the payloads exchanged with the summary service
pub mod models;
