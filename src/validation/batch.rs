//! Batch name validators.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use super::{as_string, invalid, pattern, valid, ValidateResult};

static ACCOUNT_NAME: LazyLock<Regex> = LazyLock::new(|| pattern(r"^[a-z0-9]{3,24}$"));
static POOL_NAME: LazyLock<Regex> = LazyLock::new(|| pattern(r"^[a-zA-Z0-9_-]+$"));
static JOB_NAME: LazyLock<Regex> = LazyLock::new(|| pattern(r"^[a-zA-Z0-9_-]{1,64}$"));

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
                "{} must be between 3 and 24 characters in length and contain only lowercase letters and numbers: {:?}",
                key, v
            ),
        );
    }

    valid()
}

/// Letters, digits, hyphens and underscores, at most 64 characters.
pub fn pool_name(value: &Value, key: &str) -> ValidateResult {
    let v = match as_string(value, key) {
        Ok(v) => v,
        Err(result) => return result,
    };

    if !POOL_NAME.is_match(v) {
        return invalid(
            key,
            format!(
                "{} can contain any combination of alphanumeric characters including hyphens and underscores: {:?}",
                key, v
            ),
        );
    }

    if v.len() > 64 {
        return invalid(key, format!("{} can contain a maximum of 64 characters: {:?}", key, v));
    }

    valid()
}

/// 1-64 letters, digits, hyphens or underscores.
pub fn job_name(value: &Value, key: &str) -> ValidateResult {
    let v = match as_string(value, key) {
        Ok(v) => v,
        Err(result) => return result,
    };

    if !JOB_NAME.is_match(v) {
        return invalid(
            key,
            format!(
                "{} must be 1 - 64 characters long, and can contain only letters, numbers, hyphens and underscores: {:?}",
                key, v
            ),
        );
    }

    valid()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{is_valid, ValidateFunc};
    use serde_json::json;

    #[test]
    fn test_length_boundaries() {
        let cases: [(ValidateFunc, &str, usize, usize); 3] = [
            (account_name, "account_name", 3, 24),
            (pool_name, "pool_name", 1, 64),
            (job_name, "job_name", 1, 64),
        ];
        for (validator, label, min, max) in cases {
            let table = [
                (min - 1, false),
                (min, true),
                (min + 1, true),
                (max - 1, true),
                (max, true),
                (max + 1, false),
            ];
            for (len, expected) in table {
                let name = json!("a".repeat(len));
                assert_eq!(
                    is_valid(validator, &name),
                    expected,
                    "{} with {} characters",
                    label,
                    len
                );
            }
        }
    }

    #[test]
    fn test_account_name() {
        assert!(is_valid(account_name, &json!("batch1")));
        assert!(!is_valid(account_name, &json!("Batch1")));
        assert!(!is_valid(account_name, &json!("b1")));
        assert!(!is_valid(account_name, &json!("a".repeat(25))));
    }

    #[test]
    fn test_pool_name() {
        assert!(is_valid(pool_name, &json!("pool_1-a")));
        assert!(is_valid(pool_name, &json!("a".repeat(64))));
        assert!(!is_valid(pool_name, &json!("")));
        assert!(!is_valid(pool_name, &json!("pool.1")));

        let (_, errors) = pool_name(&json!("a".repeat(65)), "name");
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("maximum of 64 characters"));
    }

    #[test]
    fn test_job_name() {
        assert!(is_valid(job_name, &json!("job-1_a")));
        assert!(is_valid(job_name, &json!("a".repeat(64))));
        assert!(!is_valid(job_name, &json!("a".repeat(65))));
        assert!(!is_valid(job_name, &json!("job 1")));
    }
}
