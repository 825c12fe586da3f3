use crate::domain::value::{RentalId, Service, SmsCode};

/// A rented number returned by `getNumber`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rental {
    pub id: RentalId,
    pub phone_number: String,
    pub service: Service,
}

/// Non-terminal and successful outcomes of `getStatus`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RentalStatus {
    WaitingForCode,
    CodeReceived(SmsCode),
}

/// Target state for `setStatus`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusChange {
    Done,
    Cancel,
}

impl StatusChange {
    /// Query parameter name used by DaisySMS (`status`).
    pub const FIELD: &'static str = "status";

    pub fn code(self) -> &'static str {
        match self {
            Self::Done => "6",
            Self::Cancel => "8",
        }
    }
}
