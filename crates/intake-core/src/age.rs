//! Coercion of the raw age text into the integer sent on the wire.

use crate::error::{IntakeError, IntakeResult};

/// How the age text is turned into an integer on submit.
///
/// The 0-150 range shown on the input is a hint only; neither policy
/// enforces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AgePolicy {
    /// Trimmed text must be a whole signed integer, otherwise the
    /// submission stops before any request is made.
    #[default]
    Strict,
    /// Browser `parseInt` behavior: leading digits win, no digits yields
    /// "not a number" (sent as `null`).
    ///
    /// Digit runs beyond the `i64` range saturate at `i64::MAX`/`i64::MIN`,
    /// where a browser would keep them as a large float.
    Lenient,
}

impl AgePolicy {
    /// Coerce `raw` according to this policy.
    ///
    /// `Ok(None)` is only possible under [`AgePolicy::Lenient`].
    pub fn coerce(&self, raw: &str) -> IntakeResult<Option<i64>> {
        match self {
            AgePolicy::Strict => raw
                .trim()
                .parse::<i64>()
                .map(Some)
                .map_err(|_| IntakeError::InvalidAge),
            AgePolicy::Lenient => Ok(parse_int_prefix(raw)),
        }
    }
}

/// Parse the leading integer of `s` the way `parseInt(s, 10)` does.
///
/// Leading whitespace is skipped, one optional sign is accepted, then the
/// longest run of ASCII digits is read. Anything after it is ignored.
/// Values beyond `i64` saturate.
pub fn parse_int_prefix(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let mut value: i64 = 0;
    for b in digits[..end].bytes() {
        let d = i64::from(b - b'0');
        value = if negative {
            value.saturating_mul(10).saturating_sub(d)
        } else {
            value.saturating_mul(10).saturating_add(d)
        };
    }
    Some(value)
}
