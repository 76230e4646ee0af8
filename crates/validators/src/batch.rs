use crate::validate_address;
use models::ValidationResult;
use rayon::prelude::*;

/// Validate many candidates at once.
///
/// Each candidate is trimmed before validation, the same way the form
/// trims its input. The output keeps the input order and pairs every
/// trimmed candidate with its result.
pub fn validate_batch(candidates: &[String]) -> Vec<(String, ValidationResult)> {
    candidates
        .par_iter()
        .map(|candidate| {
            let address = candidate.trim().to_string();
            let result = validate_address(&address);
            (address, result)
        })
        .collect()
}
