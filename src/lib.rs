//! Typed async Rust client for the DaisySMS number rental API.
//!
//! The crate is split into a domain layer of strong types, a transport layer for
//! the plaintext wire format, and a small client layer orchestrating requests and
//! the wait-for-code polling loop.
//!
//! ```rust,no_run
//! use daisysms::{ApiKey, DaisySmsClient, MaxPrice, Service};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), daisysms::DaisySmsError> {
//!     let client = DaisySmsClient::new(ApiKey::new("...")?);
//!     let rental = client
//!         .acquire_number(&Service::new("ds")?, Some(MaxPrice::new(0.5)?))
//!         .await?;
//!     let code = client
//!         .wait_for_code(&rental.id, tokio::time::sleep(std::time::Duration::from_secs(300)))
//!         .await?;
//!     println!("{} received {code}", rental.phone_number);
//!     client.mark_done(&rental.id).await?;
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod context;
pub mod domain;
mod transport;

pub use client::{DaisySmsClient, DaisySmsClientBuilder, DaisySmsError};
pub use context::RequestContext;
pub use domain::{
    ApiKey, Balance, MaxPrice, Rental, RentalId, RentalStatus, Service, ServiceError, SmsCode,
    StatusChange, ValidationError,
};
