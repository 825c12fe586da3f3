use super::action;
use super::reply::Reply;
use crate::domain::{RentalId, ServiceError, StatusChange};

pub fn encode_set_status_query(id: &RentalId, change: StatusChange) -> Vec<(String, String)> {
    vec![
        action("setStatus"),
        (RentalId::FIELD.to_owned(), id.as_str().to_owned()),
        (StatusChange::FIELD.to_owned(), change.code().to_owned()),
    ]
}

pub fn decode_set_status_response(change: StatusChange, body: &str) -> Result<(), ServiceError> {
    let expected = match change {
        StatusChange::Done => "ACCESS_ACTIVATION",
        StatusChange::Cancel => "ACCESS_CANCEL",
    };
    match Reply::parse(body) {
        Reply::Token(token) if token == expected => Ok(()),
        Reply::Token("NO_ACTIVATION") => Err(ServiceError::InvalidRentalId),
        _ => Err(ServiceError::unknown(body)),
    }
}
