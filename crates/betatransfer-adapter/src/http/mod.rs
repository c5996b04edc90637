/*
[INPUT]:  HTTP client configuration, credentials and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod account;
pub mod client;
pub mod error;
pub mod history;

pub use error::{BetatransferError, ErrorKind, Result};

pub use client::{BetatransferClient, ClientConfig, Credentials};
