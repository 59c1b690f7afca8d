// ============================================================================
// Power-of-Ten Cache
// Memoized table of 10^n shared by every scale-shift operation
// ============================================================================

use crate::errors::{DecimalError, DecimalResult};
use num_bigint::BigInt;
use num_traits::Pow;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

/// Exponents pre-populated at construction time. Covers every power a
/// 128-bit magnitude can need, which is the common case for scale shifts.
const PREWARM_MAX: u32 = 38;

/// Append-only memoized table mapping a non-negative exponent to `10^n`.
///
/// Reads of populated entries take a shared lock; a miss escalates to an
/// exclusive lock and re-checks before computing, so a given exponent is
/// computed at most once and every caller receives the same shared value.
///
/// Arithmetic routines use the process-wide instance from
/// [`Pow10Cache::shared`]; tests can construct isolated instances.
pub struct Pow10Cache {
    entries: RwLock<HashMap<u32, Arc<BigInt>>>,
}

impl Pow10Cache {
    /// Create a cache pre-populated with exponents `0..=38`.
    pub fn new() -> Self {
        let mut entries = HashMap::with_capacity(128);
        let mut value = BigInt::from(1);
        for exp in 0..=PREWARM_MAX {
            entries.insert(exp, Arc::new(value.clone()));
            value *= 10;
        }
        Self {
            entries: RwLock::new(entries),
        }
    }

    /// The process-wide cache instance, created on first use.
    pub fn shared() -> &'static Pow10Cache {
        static SHARED: OnceLock<Pow10Cache> = OnceLock::new();
        SHARED.get_or_init(Pow10Cache::new)
    }

    /// Return `10^exp` as a shared immutable big integer.
    ///
    /// # Errors
    /// Returns `InvalidArgument` for a negative exponent. Division by a
    /// power of ten must divide by `get(|exp|)` instead; the caller tracks
    /// the direction of the shift.
    pub fn get(&self, exp: i32) -> DecimalResult<Arc<BigInt>> {
        let exp = u32::try_from(exp).map_err(|_| {
            DecimalError::InvalidArgument(format!(
                "pow10 exponent must be non-negative, got {}",
                exp
            ))
        })?;

        if let Some(p) = self.entries.read().get(&exp) {
            return Ok(Arc::clone(p));
        }

        let mut entries = self.entries.write();

        // Re-check under the exclusive lock: a concurrent writer may have
        // inserted this exponent between our read and write acquisitions.
        if let Some(p) = entries.get(&exp) {
            return Ok(Arc::clone(p));
        }

        tracing::trace!(exp, "computing uncached power of ten");
        let p = Arc::new(BigInt::from(10).pow(exp));
        entries.insert(exp, Arc::clone(&p));
        Ok(p)
    }
}

impl Default for Pow10Cache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_powers() {
        let cache = Pow10Cache::new();
        for (exp, want) in [(0, "1"), (1, "10"), (2, "100"), (10, "10000000000")] {
            assert_eq!(cache.get(exp).unwrap().to_string(), want);
        }
    }

    #[test]
    fn test_beyond_prewarm() {
        let cache = Pow10Cache::new();
        let p = cache.get(40).unwrap();
        assert_eq!(p.to_string(), format!("1{}", "0".repeat(40)));
    }

    #[test]
    fn test_cache_identity() {
        // Same exponent must yield the same stored value, both in the
        // pre-warmed range and past it.
        let cache = Pow10Cache::new();
        let a = cache.get(10).unwrap();
        let b = cache.get(10).unwrap();
        assert!(Arc::ptr_eq(&a, &b));

        let c = cache.get(77).unwrap();
        let d = cache.get(77).unwrap();
        assert!(Arc::ptr_eq(&c, &d));
    }

    #[test]
    fn test_negative_exponent() {
        let cache = Pow10Cache::new();
        assert!(matches!(
            cache.get(-1),
            Err(DecimalError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_concurrent_first_access() {
        let cache = Arc::new(Pow10Cache::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let cache = Arc::clone(&cache);
                std::thread::spawn(move || cache.get(100).unwrap())
            })
            .collect();

        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        // All threads must observe the single inserted entry.
        for p in &results[1..] {
            assert!(Arc::ptr_eq(&results[0], p));
        }
    }
}
