use std::fmt;

use crate::domain::validation::ValidationError;

#[derive(Clone, PartialEq, Eq, Hash)]
/// DaisySMS API key (`api_key`).
///
/// Invariant: non-empty after trimming. `Debug` output is redacted.
pub struct ApiKey(String);

impl ApiKey {
    /// Query parameter name used by DaisySMS (`api_key`).
    pub const FIELD: &'static str = "api_key";

    /// Create a validated [`ApiKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Rental id (`id`) issued by DaisySMS when a number is acquired.
///
/// Invariant: non-empty after trimming.
pub struct RentalId(String);

impl RentalId {
    /// Query parameter name used by DaisySMS (`id`).
    pub const FIELD: &'static str = "id";

    /// Create a validated [`RentalId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated rental id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RentalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Service selector (`service`), e.g. `ds` or `go`.
///
/// The value set is owned by DaisySMS and not checked locally beyond being non-empty.
pub struct Service(String);

impl Service {
    /// Query parameter name used by DaisySMS (`service`).
    pub const FIELD: &'static str = "service";

    /// Create a validated [`Service`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
/// Price ceiling for a rental (`maxPrice`).
///
/// Invariant: finite and non-negative. Sent with exactly two decimal digits.
pub struct MaxPrice(f64);

impl MaxPrice {
    /// Query parameter name used by DaisySMS (`maxPrice`).
    pub const FIELD: &'static str = "maxPrice";

    /// Create a validated [`MaxPrice`].
    pub fn new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() || value < 0.0 {
            return Err(ValidationError::InvalidAmount {
                field: Self::FIELD,
                value,
            });
        }
        Ok(Self(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Wire form: two decimal digits, e.g. `0.50`.
    pub fn to_wire(self) -> String {
        format!("{:.2}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
/// Account balance as reported by `getBalance`.
///
/// Invariant: finite and non-negative.
pub struct Balance(f64);

impl Balance {
    pub(crate) fn from_wire(value: f64) -> Option<Self> {
        (value.is_finite() && value >= 0.0).then_some(Self(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Verification code delivered to a rented number.
pub struct SmsCode(String);

impl SmsCode {
    pub(crate) fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for SmsCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
