//! Short code generation, validation, and conflict suggestions.

use crate::error::AppError;
use rand::Rng;

/// Alphabet for generated codes: 62 alphanumeric symbols, mixed case.
const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Length of auto-generated short codes.
pub const CODE_LENGTH: usize = 7;

/// Length of the random suffix appended to conflict suggestions.
const SUGGESTION_SUFFIX_LENGTH: usize = 3;

/// Number of alternatives offered on a custom-code conflict.
const SUGGESTION_COUNT: usize = 3;

/// Custom codes must stay within these bounds.
const MIN_CUSTOM_CODE_LENGTH: usize = 7;
const MAX_CUSTOM_CODE_LENGTH: usize = 32;

/// Codes reserved for service routes; accepting them would shadow endpoints.
const RESERVED_CODES: &[&str] = &["shorten", "health", "auth", "user"];

fn random_string(length: usize) -> String {
    let mut rng = rand::rng();
    (0..length)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Generates a random short code drawn uniformly from the 62-symbol alphabet.
///
/// Collisions are possible and must be handled by the caller: the service
/// layer re-checks generated codes against the store, and the store's
/// uniqueness constraint remains the final authority.
pub fn generate_code() -> String {
    random_string(CODE_LENGTH)
}

/// Builds alternative codes for a taken custom code.
///
/// Each suggestion is the requested code plus a short random suffix. The
/// suggestions are informational only and are not checked for availability.
pub fn suggest_alternatives(base: &str) -> Vec<String> {
    (0..SUGGESTION_COUNT)
        .map(|_| format!("{base}{}", random_string(SUGGESTION_SUFFIX_LENGTH)))
        .collect()
}

/// Validates a user-provided custom short code.
///
/// # Rules
///
/// - Length: 7-32 characters
/// - Allowed characters: ASCII letters (any case) and digits
/// - Cannot be a reserved route word
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any rule is violated.
pub fn validate_custom_code(code: &str) -> Result<(), AppError> {
    if code.len() < MIN_CUSTOM_CODE_LENGTH || code.len() > MAX_CUSTOM_CODE_LENGTH {
        return Err(AppError::validation(format!(
            "Custom code must be {MIN_CUSTOM_CODE_LENGTH}-{MAX_CUSTOM_CODE_LENGTH} characters"
        )));
    }

    if !code.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(AppError::validation(
            "Custom code can only contain letters and digits",
        ));
    }

    if RESERVED_CODES.contains(&code) {
        return Err(AppError::validation("This code is reserved"));
    }

    Ok(())
}
