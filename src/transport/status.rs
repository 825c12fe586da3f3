use tracing::trace;

use super::action;
use super::reply::Reply;
use crate::domain::{RentalId, RentalStatus, ServiceError, SmsCode};

pub fn encode_get_status_query(id: &RentalId) -> Vec<(String, String)> {
    vec![
        action("getStatus"),
        (RentalId::FIELD.to_owned(), id.as_str().to_owned()),
    ]
}

pub fn decode_get_status_response(body: &str) -> Result<RentalStatus, ServiceError> {
    match Reply::parse(body) {
        Reply::Token("STATUS_WAIT_CODE") => Ok(RentalStatus::WaitingForCode),
        Reply::Token("NO_ACTIVATION") => Err(ServiceError::InvalidRentalId),
        Reply::Token("STATUS_CANCEL") => Err(ServiceError::RentalCanceled),
        Reply::Token(_) => Err(ServiceError::unknown(body)),
        Reply::Record { tag, fields } => match fields[0] {
            "" => Err(ServiceError::malformed(body)),
            code => {
                trace!(tag, "getStatus record");
                Ok(RentalStatus::CodeReceived(SmsCode::new(code)))
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_sets_action_and_id() {
        let id = RentalId::new("77").unwrap();
        assert_eq!(
            encode_get_status_query(&id),
            vec![
                ("action".to_owned(), "getStatus".to_owned()),
                ("id".to_owned(), "77".to_owned()),
            ]
        );
    }

    #[test]
    fn wait_token_is_waiting() {
        assert_eq!(
            decode_get_status_response("STATUS_WAIT_CODE").unwrap(),
            RentalStatus::WaitingForCode
        );
    }

    #[test]
    fn record_carries_code() {
        assert_eq!(
            decode_get_status_response("STATUS_OK:4242").unwrap(),
            RentalStatus::CodeReceived(SmsCode::new("4242"))
        );
    }

    #[test]
    fn terminal_failure_tokens() {
        assert_eq!(
            decode_get_status_response("NO_ACTIVATION").unwrap_err(),
            ServiceError::InvalidRentalId
        );
        assert_eq!(
            decode_get_status_response("STATUS_CANCEL").unwrap_err(),
            ServiceError::RentalCanceled
        );
        assert_eq!(
            decode_get_status_response("STATUS_WAIT_RETRY").unwrap_err(),
            ServiceError::UnknownServiceResponse {
                body: "STATUS_WAIT_RETRY".to_owned()
            }
        );
    }

    #[test]
    fn empty_code_is_malformed() {
        assert!(matches!(
            decode_get_status_response("STATUS_OK:"),
            Err(ServiceError::MalformedResponse { .. })
        ));
    }
}
