//! Bounded-retry generation of store-unique codes
//!
//! Promotions carry two generated identifiers (a year-stamped unique code
//! and a short redirect code); members carry a check-in code. All of them
//! come out of the same policy: draw a random base36 candidate, pre-check
//! it against storage, retry on collision, give up after a fixed number
//! of attempts.

use std::future::Future;

use rand::Rng;

use crate::error::{AppError, AppResult};

/// Uppercase base36 alphabet used by all generated codes
const ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Length of the random run in every code
pub const CODE_LENGTH: usize = 6;

/// Attempt cap for the collision-retry loop
pub const MAX_ATTEMPTS: u32 = 10;

/// Random run of uppercase base36 characters
pub fn random_code() -> String {
    let mut rng = rand::thread_rng();
    (0..CODE_LENGTH)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Human-readable promotion code, prefixed and year-stamped
pub fn promo_code(year: i32) -> String {
    format!("PROMO-{}-{}", year, random_code())
}

/// Draw candidates from `make` until `taken` reports a free one, failing
/// with [`AppError::CodeGenerationExhausted`] after [`MAX_ATTEMPTS`]
/// consecutive collisions.
///
/// The existence pre-check is not atomic with the later insert; callers
/// rely on a storage-level unique constraint as the backstop for that race.
pub async fn generate_unique<M, T, F>(make: M, mut taken: T) -> AppResult<String>
where
    M: Fn() -> String,
    T: FnMut(String) -> F,
    F: Future<Output = AppResult<bool>>,
{
    for _ in 0..MAX_ATTEMPTS {
        let candidate = make();
        if !taken(candidate.clone()).await? {
            return Ok(candidate);
        }
    }
    Err(AppError::CodeGenerationExhausted(MAX_ATTEMPTS))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[test]
    fn random_code_has_expected_shape() {
        for _ in 0..100 {
            let code = random_code();
            assert_eq!(code.len(), CODE_LENGTH);
            assert!(code.bytes().all(|b| ALPHABET.contains(&b)));
        }
    }

    #[test]
    fn promo_code_is_prefixed_and_year_stamped() {
        let code = promo_code(2026);
        assert!(code.starts_with("PROMO-2026-"));
        let suffix = code.strip_prefix("PROMO-2026-").unwrap();
        assert_eq!(suffix.len(), CODE_LENGTH);
        assert!(suffix.bytes().all(|b| ALPHABET.contains(&b)));
    }

    #[tokio::test]
    async fn first_free_candidate_is_returned() {
        let result = generate_unique(random_code, |_| async { Ok(false) }).await;
        assert_eq!(result.unwrap().len(), CODE_LENGTH);
    }

    #[tokio::test]
    async fn exhaustion_after_max_attempts() {
        let attempts = AtomicU32::new(0);
        let result = generate_unique(random_code, |_| {
            attempts.fetch_add(1, Ordering::SeqCst);
            async { Ok(true) }
        })
        .await;

        assert!(matches!(
            result,
            Err(AppError::CodeGenerationExhausted(MAX_ATTEMPTS))
        ));
        assert_eq!(attempts.load(Ordering::SeqCst), MAX_ATTEMPTS);
    }

    #[tokio::test]
    async fn storage_errors_propagate() {
        let result = generate_unique(random_code, |_| async {
            Err(AppError::Internal("store down".to_string()))
        })
        .await;
        assert!(matches!(result, Err(AppError::Internal(_))));
    }
}
