//! Transport layer: query encoding and plaintext reply decoding (no I/O).

mod balance;
mod number;
mod reply;
mod set_status;
mod status;

pub use balance::{decode_balance_response, encode_get_balance_query};
pub use number::{decode_get_number_response, encode_get_number_query};
pub use set_status::{decode_set_status_response, encode_set_status_query};
pub use status::{decode_get_status_response, encode_get_status_query};

pub(crate) const ACTION_FIELD: &str = "action";

pub(crate) fn action(name: &str) -> (String, String) {
    (ACTION_FIELD.to_owned(), name.to_owned())
}
