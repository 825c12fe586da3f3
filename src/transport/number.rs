use tracing::trace;

use super::action;
use super::reply::Reply;
use crate::domain::{MaxPrice, Rental, RentalId, Service, ServiceError};

pub fn encode_get_number_query(
    service: &Service,
    max_price: Option<MaxPrice>,
) -> Vec<(String, String)> {
    let mut params = vec![
        action("getNumber"),
        (Service::FIELD.to_owned(), service.as_str().to_owned()),
    ];
    if let Some(max_price) = max_price {
        params.push((MaxPrice::FIELD.to_owned(), max_price.to_wire()));
    }
    params
}

pub fn decode_get_number_response(service: &Service, body: &str) -> Result<Rental, ServiceError> {
    match Reply::parse(body) {
        Reply::Token("NO_NUMBERS") => Err(ServiceError::NoNumbersAvailable),
        Reply::Token("NO_BALANCE") => Err(ServiceError::InsufficientBalance),
        Reply::Token("MAX_PRICE_EXCEEDED") => Err(ServiceError::MaxPriceExceeded),
        Reply::Token("TOO_MANY_ACTIVE_RENTALS") => Err(ServiceError::TooManyActiveRentals),
        Reply::Token(_) => Err(ServiceError::unknown(body)),
        Reply::Record { tag, fields } => {
            trace!(tag, "getNumber record");
            let [id, phone_number, ..] = fields.as_slice() else {
                return Err(ServiceError::malformed(body));
            };
            let id = RentalId::new(*id).map_err(|_| ServiceError::malformed(body))?;
            if phone_number.is_empty() {
                return Err(ServiceError::malformed(body));
            }
            Ok(Rental {
                id,
                phone_number: (*phone_number).to_owned(),
                service: service.clone(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> Service {
        Service::new("ds").unwrap()
    }

    #[test]
    fn encode_omits_max_price_when_absent() {
        let params = encode_get_number_query(&service(), None);
        assert_eq!(
            params,
            vec![
                ("action".to_owned(), "getNumber".to_owned()),
                ("service".to_owned(), "ds".to_owned()),
            ]
        );
    }

    #[test]
    fn encode_formats_max_price_with_two_decimals() {
        let params = encode_get_number_query(&service(), Some(MaxPrice::new(0.5).unwrap()));
        assert!(params.contains(&("maxPrice".to_owned(), "0.50".to_owned())));
    }

    #[test]
    fn decodes_rental_record() {
        let rental = decode_get_number_response(&service(), "STATUS_OK:12345:+19998887777").unwrap();
        assert_eq!(rental.id.as_str(), "12345");
        assert_eq!(rental.phone_number, "+19998887777");
        assert_eq!(rental.service, service());
    }

    #[test]
    fn maps_rejection_tokens() {
        let cases = [
            ("NO_NUMBERS", ServiceError::NoNumbersAvailable),
            ("NO_BALANCE", ServiceError::InsufficientBalance),
            ("MAX_PRICE_EXCEEDED", ServiceError::MaxPriceExceeded),
            ("TOO_MANY_ACTIVE_RENTALS", ServiceError::TooManyActiveRentals),
        ];
        for (body, expected) in cases {
            assert_eq!(
                decode_get_number_response(&service(), body).unwrap_err(),
                expected
            );
        }
    }

    #[test]
    fn unexpected_token_keeps_raw_text() {
        assert_eq!(
            decode_get_number_response(&service(), "BAD_SERVICE").unwrap_err(),
            ServiceError::UnknownServiceResponse {
                body: "BAD_SERVICE".to_owned()
            }
        );
    }

    #[test]
    fn short_record_is_malformed() {
        assert!(matches!(
            decode_get_number_response(&service(), "ACCESS_NUMBER:12345"),
            Err(ServiceError::MalformedResponse { .. })
        ));
        assert!(matches!(
            decode_get_number_response(&service(), "ACCESS_NUMBER::+1999"),
            Err(ServiceError::MalformedResponse { .. })
        ));
    }
}
