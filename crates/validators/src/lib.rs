// validators crate

mod address;
mod alphabet;
mod batch;
mod samples;

pub use address::{find_confusable_chars, validate_address, CONFUSABLE_CHARS};
pub use alphabet::{is_base58, is_base58_char, BASE58_ALPHABET};
pub use batch::validate_batch;
pub use models::{AddressError, AddressWarning, ValidationResult, ADDRESS_LENGTH};
pub use samples::sample_addresses;
