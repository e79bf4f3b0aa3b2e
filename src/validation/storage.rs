//! Storage name validators.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use super::{as_string, invalid, pattern, valid, ValidateResult};

static ACCOUNT_NAME: LazyLock<Regex> = LazyLock::new(|| pattern(r"^[a-z0-9]{3,24}$"));

/// 3-24 lowercase letters or digits.
pub fn account_name(value: &Value, key: &str) -> ValidateResult {
    let v = match as_string(value, key) {
        Ok(v) => v,
        Err(result) => return result,
    };

    if !ACCOUNT_NAME.is_match(v) {
        return invalid(
            key,
            format!(
                "{} can only consist of lowercase letters and numbers, and must be between 3 and 24 characters long: {:?}",
                key, v
            ),
        );
    }

    valid()
}
