pub mod handlers;
pub mod routes;
pub mod validation;

pub use routes::{router, AppState};
