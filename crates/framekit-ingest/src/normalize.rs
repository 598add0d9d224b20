//! Field normalizers.
//!
//! Pure functions that convert one loosely-typed raw value into its
//! canonical form. Each is total: anything unparseable passes through
//! or degrades to the type's empty value, never an error.

use crate::raw::RawValue;

/// Normalize a raw value into a number where possible.
///
/// Numbers and blank values pass through unchanged. Strings are stripped
/// to digits, `.`, and `-`, then parsed; if that does not yield a finite
/// number the original value is returned unchanged, so `"$89,000"`
/// becomes `89000` while `"n/a"` stays `"n/a"`.
pub fn smart_number(value: RawValue) -> RawValue {
    if value.is_blank() {
        return value;
    }
    match value {
        RawValue::Str(s) => {
            let stripped: String = s
                .chars()
                .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
                .collect();
            match stripped.parse::<f64>() {
                Ok(n) if n.is_finite() => RawValue::Num(n),
                _ => RawValue::Str(s),
            }
        }
        other => other,
    }
}

/// Normalize a raw value into a boolean.
///
/// `true` for a boolean `true` or a string matching (trimmed,
/// case-insensitive) `true`, `1`, `yes`, or `y`. Everything else is
/// `false`.
pub fn smart_bool(value: &RawValue) -> bool {
    match value {
        RawValue::Bool(b) => *b,
        RawValue::Str(s) => matches!(
            s.trim().to_ascii_lowercase().as_str(),
            "true" | "1" | "yes" | "y"
        ),
        _ => false,
    }
}

/// Normalize a raw value into an ordered list of strings.
///
/// Lists pass through unchanged. Strings split on `;` with each segment
/// trimmed and empty segments dropped, order preserved. Any other type
/// yields an empty list.
pub fn split_list(value: RawValue) -> Vec<String> {
    match value {
        RawValue::List(items) => items,
        RawValue::Str(s) => s
            .split(';')
            .map(str::trim)
            .filter(|seg| !seg.is_empty())
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}
