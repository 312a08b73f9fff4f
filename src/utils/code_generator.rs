//! Short code generation.

use rand::distr::{Alphanumeric, SampleString};

/// Length of generated short codes.
const CODE_LENGTH: usize = 6;

/// Generates a random 6-character short code.
///
/// Characters are drawn uniformly, with replacement, from the 62-character
/// alphanumeric alphabet (lowercase, uppercase, digits). The generator makes
/// no uniqueness guarantee by itself; callers retry on collision against the
/// store.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code();
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code() -> String {
    Alphanumeric.sample_string(&mut rand::rng(), CODE_LENGTH)
}
