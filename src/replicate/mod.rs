pub mod client;
pub mod schema;

pub use client::ReplicateClient;
pub use schema::{ModelRef, Prediction, PredictionStatus, RemixInput, RemixOutput};
