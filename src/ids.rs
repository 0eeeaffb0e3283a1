//! Local identifier generation.

use std::sync::atomic::{AtomicU64, Ordering};

use rand::distr::Alphanumeric;
use rand::Rng;

static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Generate a collision-resistant local id: a monotonically increasing
/// counter plus a short random suffix. Ids only need to be unique within
/// one profile, not globally.
pub(crate) fn fresh(prefix: &str) -> String {
    let seq = COUNTER.fetch_add(1, Ordering::Relaxed);
    let suffix: String = rand::rng()
        .sample_iter(Alphanumeric)
        .take(6)
        .map(char::from)
        .collect();
    format!("{prefix}{seq}-{}", suffix.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_prefixed() {
        let a = fresh("meal-");
        let b = fresh("meal-");
        assert_ne!(a, b);
        assert!(a.starts_with("meal-"));
    }
}
