//! CDN name validators.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use super::{as_string, invalid, pattern, valid, ValidateResult};

static ENDPOINT_NAME: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"^[a-zA-Z0-9]([-a-zA-Z0-9]{0,48}[a-zA-Z0-9])?$"));

/// 1-50 letters, digits or hyphens, starting and ending with a letter or digit.
pub fn endpoint_name(value: &Value, key: &str) -> ValidateResult {
    let v = match as_string(value, key) {
        Ok(v) => v,
        Err(result) => return result,
    };

    if !ENDPOINT_NAME.is_match(v) {
        return invalid(
            key,
            format!(
                "{} must be between 1 and 50 characters in length, begin and end with a letter or number, and may contain only letters, numbers and hyphens: {:?}",
                key, v
            ),
        );
    }

    valid()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::is_valid;
    use serde_json::json;

    #[test]
    fn test_endpoint_name() {
        for name in ["a", "endpoint1", "my-endpoint", "A-1"] {
            assert!(is_valid(endpoint_name, &json!(name)), "{:?} should be valid", name);
        }
        for name in ["", "-endpoint", "endpoint-", "end_point", "end.point"] {
            assert!(!is_valid(endpoint_name, &json!(name)), "{:?} should be invalid", name);
        }
        assert!(is_valid(endpoint_name, &json!("a".repeat(49))));
        assert!(is_valid(endpoint_name, &json!("a".repeat(50))));
        assert!(!is_valid(endpoint_name, &json!("a".repeat(51))));
    }
}
