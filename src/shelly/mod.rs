mod client;
mod digest;
mod domain;
mod fetch;
mod normalize;

pub use client::{ShellyClient, ShellyError};
pub use fetch::fetch;
pub use normalize::Normalize;
