//! Domain layer: strong types with validation and invariants (no I/O).

mod error;
mod response;
mod validation;
mod value;

pub use error::ServiceError;
pub use response::{Rental, RentalStatus, StatusChange};
pub use validation::ValidationError;
pub use value::{ApiKey, Balance, MaxPrice, RentalId, Service, SmsCode};
