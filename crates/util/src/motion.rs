//! Reduced-motion preference query.

use std::env;

/// Environment variable signalling that animations should skip their curves
/// and jump straight to their end values.
pub const REDUCED_MOTION_ENV: &str = "MARQUEE_REDUCED_MOTION";

/// Returns `true` when the environment requests reduced motion.
///
/// Any non-empty value other than `0`/`false` (case-insensitive) counts as
/// a request. Read once at startup; the player does not react to changes
/// mid-session.
pub fn reduced_motion_requested() -> bool {
    env::var(REDUCED_MOTION_ENV)
        .map(|v| !v.is_empty() && v != "0" && v.to_lowercase() != "false")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_means_full_motion() {
        temp_env::with_var(REDUCED_MOTION_ENV, None::<&str>, || {
            assert!(!reduced_motion_requested());
        });
    }

    #[test]
    fn truthy_values_enable_reduced_motion() {
        for value in ["1", "true", "TRUE", "yes"] {
            temp_env::with_var(REDUCED_MOTION_ENV, Some(value), || {
                assert!(reduced_motion_requested(), "value: {value}");
            });
        }
    }

    #[test]
    fn falsy_values_keep_full_motion() {
        for value in ["", "0", "false", "False"] {
            temp_env::with_var(REDUCED_MOTION_ENV, Some(value), || {
                assert!(!reduced_motion_requested(), "value: {value}");
            });
        }
    }
}
