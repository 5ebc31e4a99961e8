pub mod home;
pub mod not_found;
pub mod routes;
pub mod search;

pub use home::Home;
pub use not_found::NotFound;
pub use search::Search;
