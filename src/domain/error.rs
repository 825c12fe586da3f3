/// Failures signaled by the DaisySMS service in a reply body.
///
/// Every variant is recoverable by the caller. The two catch-all variants keep
/// the raw reply text so nothing the service said is lost.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    /// `NO_NUMBERS`: nothing left to rent for the requested service.
    #[error("no numbers available for the requested service")]
    NoNumbersAvailable,

    /// `NO_BALANCE`: the account balance cannot cover the rental.
    #[error("insufficient balance")]
    InsufficientBalance,

    /// `MAX_PRICE_EXCEEDED`: the price ceiling was rejected.
    #[error("max price exceeded")]
    MaxPriceExceeded,

    /// `TOO_MANY_ACTIVE_RENTALS`: the account hit its concurrent rental cap.
    #[error("too many active rentals")]
    TooManyActiveRentals,

    /// `NO_ACTIVATION`: the rental id is unknown to the service.
    #[error("invalid rental id")]
    InvalidRentalId,

    /// `STATUS_CANCEL`: the rental was canceled before a code arrived.
    #[error("rental canceled")]
    RentalCanceled,

    /// A reply that matched the expected shape but carried an unusable value.
    #[error("malformed response: {body:?}")]
    MalformedResponse { body: String },

    /// A token outside the set expected for the operation.
    #[error("unknown service response: {body:?}")]
    UnknownServiceResponse { body: String },
}

impl ServiceError {
    pub(crate) fn malformed(body: &str) -> Self {
        Self::MalformedResponse {
            body: body.to_owned(),
        }
    }

    pub(crate) fn unknown(body: &str) -> Self {
        Self::UnknownServiceResponse {
            body: body.to_owned(),
        }
    }

    /// Raw reply text for the catch-all variants.
    pub fn raw_body(&self) -> Option<&str> {
        match self {
            Self::MalformedResponse { body } | Self::UnknownServiceResponse { body } => Some(body),
            _ => None,
        }
    }
}
