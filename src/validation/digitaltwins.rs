//! Digital Twins name validators.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use super::{as_string, invalid, pattern, valid, ValidateResult};

static INSTANCE_NAME: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"^[A-Za-z0-9][A-Za-z0-9-]+[A-Za-z0-9]$"));

/// 3-63 letters, digits or hyphens, starting and ending with a letter or digit.
///
/// Used for instance names and for the names of their child resources.
pub fn instance_name(value: &Value, key: &str) -> ValidateResult {
    let v = match as_string(value, key) {
        Ok(v) => v,
        Err(result) => return result,
    };

    let len = v.chars().count();
    if !(3..=63).contains(&len) {
        return invalid(
            key,
            format!("length should be between 3 and 63 but got {} for {:?}", len, key),
        );
    }

    if !INSTANCE_NAME.is_match(v) {
        return invalid(
            key,
            format!(
                "{} must begin with a letter or number, end with a letter or number and contain only letters, numbers, and hyphens, got {:?}",
                key, v
            ),
        );
    }

    valid()
}
