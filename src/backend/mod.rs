//! Backend client module for endpoint communication

mod client;
mod error;
mod traits;

pub use client::HttpBackendClient;
pub use error::SubmitError;
pub use traits::BackendClientTrait;

#[cfg(test)]
pub use traits::MockBackendClientTrait;
