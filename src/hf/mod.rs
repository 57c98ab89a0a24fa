pub mod client;
pub mod schema;

pub use client::HfClient;
pub use schema::{ImageOptions, ImageOutput, ImagePayload, ImageParameters};
