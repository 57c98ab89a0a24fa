//! Studio Gateway library
//!
//! Modules:
//! - `api`: Axum HTTP handlers, request validation and router setup.
//! - `hf`: Thin client for the text-to-image inference provider.
//! - `replicate`: Thin client for the image-to-image (remix) provider.
//! - `provider`: Traits the handlers use to reach either provider.
//! - `studio`: Client-side generation state machine and result history.
//! - `characters`: Static character profiles and their studio links.
//! - `utils`: Bounded text helpers.
//! - `config`: Env-driven configuration loader.
//! - `error`: Common error type and alias.
//!
//! Re-exports are provided for common types: `Config`, `HfClient`,
//! `ReplicateClient`, and `Studio`.
pub mod api;
pub mod characters;
pub mod config;
pub mod error;
pub mod hf;
pub mod provider;
pub mod replicate;
pub mod studio;
pub mod utils;

pub use config::Config;
pub use hf::client::HfClient;
pub use replicate::client::ReplicateClient;
pub use studio::Studio;
