use super::action;
use crate::domain::{Balance, ServiceError};

const BALANCE_PREFIX: &str = "ACCESS_BALANCE:";

pub fn encode_get_balance_query() -> Vec<(String, String)> {
    vec![action("getBalance")]
}

pub fn decode_balance_response(body: &str) -> Result<Balance, ServiceError> {
    let trimmed = body.trim();
    let Some(amount) = trimmed.strip_prefix(BALANCE_PREFIX) else {
        if trimmed.contains(':') {
            return Err(ServiceError::malformed(body));
        }
        return Err(ServiceError::unknown(body));
    };

    amount
        .parse::<f64>()
        .ok()
        .and_then(Balance::from_wire)
        .ok_or_else(|| ServiceError::malformed(body))
}
