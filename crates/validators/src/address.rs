use crate::alphabet::is_base58;
use lazy_static::lazy_static;
use models::{AddressError, AddressWarning, ValidationResult, ADDRESS_LENGTH};
use regex::Regex;

/// Characters a well-formed base58 string never contains but people still type
pub const CONFUSABLE_CHARS: [char; 4] = ['0', 'O', 'I', 'l'];

lazy_static! {
    static ref CONFUSABLE_REGEX: Regex = {
        let class: String = CONFUSABLE_CHARS
            .iter()
            .map(|c| regex::escape(&c.to_string()))
            .collect();
        Regex::new(&format!("[{}]", class))
            .expect("Failed to compile confusable character regex")
    };
}

/// Validate a Solana address candidate.
///
/// Checks run in priority order and stop at the first failure:
/// emptiness, base58 alphabet, then length. A candidate that passes all
/// three is valid; confusable characters only ever add a warning.
///
/// The caller is expected to trim the input. Whitespace-only input is
/// still reported as empty rather than as a character-set error.
pub fn validate_address(candidate: &str) -> ValidationResult {
    let mut result = ValidationResult::new();

    // Check if address is empty
    if candidate.trim().is_empty() {
        result.add_error(AddressError::EmptyInput);
        return result;
    }

    // Check base58 validity
    if !is_base58(candidate) {
        result.add_error(AddressError::InvalidCharacterSet);
        return result;
    }

    // Check length (32 bytes encode to 44 base58 characters)
    let length = candidate.chars().count();
    if length != ADDRESS_LENGTH {
        result.add_error(AddressError::InvalidLength { length });
        return result;
    }

    // Unreachable while the alphabet check above is strict. Kept so the
    // warning still fires if that check is ever relaxed.
    let confusable = find_confusable_chars(candidate);
    if !confusable.is_empty() {
        result.add_warning(AddressWarning::ConfusableCharacters(confusable));
    }

    result
}

/// Every confusable character in `s`, in order of appearance
pub fn find_confusable_chars(s: &str) -> Vec<char> {
    CONFUSABLE_REGEX
        .find_iter(s)
        .filter_map(|m| m.as_str().chars().next())
        .collect()
}
