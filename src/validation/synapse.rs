//! Synapse name validators.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use super::{as_string, invalid, pattern, valid, ValidateResult};

static WORKSPACE_NAME: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"^[a-z0-9]([a-z0-9-]{0,43}[a-z0-9])?$"));
static SPARK_POOL_NAME: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"^[a-zA-Z][a-zA-Z0-9]{0,14}$"));
static SQL_POOL_NAME: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"^[^<>*%&:\\/?@-]{0,59}[^\s.<>*%&:\\/?@-]$"));
static SQL_ADMINISTRATOR_LOGIN: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"^[a-zA-Z][a-zA-Z0-9_]{0,127}$"));
static FIREWALL_RULE_NAME: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"^[^<>*%&:\\/?]{0,127}[^.<>*%&:\\/?]$"));
static PIPELINE_AND_TRIGGER_NAME: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"^[A-Za-z0-9_][^<>*#.%&:\\+?/]*$"));
static PRIVATE_LINK_HUB_NAME: LazyLock<Regex> = LazyLock::new(|| pattern(r"^[a-z0-9]{1,45}$"));

/// Logins Synapse reserves for itself.
const RESERVED_LOGINS: &[&str] = &[
    "admin",
    "administrator",
    "sa",
    "root",
    "dbmanager",
    "loginmanager",
    "dbo",
    "guest",
    "public",
];

/// 1-45 lowercase letters, digits or hyphens, no leading or trailing hyphen,
/// and no `-ondemand` suffix (reserved for the serverless SQL endpoint).
pub fn workspace_name(value: &Value, key: &str) -> ValidateResult {
    let v = match as_string(value, key) {
        Ok(v) => v,
        Err(result) => return result,
    };

    if !WORKSPACE_NAME.is_match(v) {
        return invalid(
            key,
            format!(
                "{} can contain only lowercase letters, numbers or hyphens, must start and end with a letter or number, and be between 1 and 45 characters long: {:?}",
                key, v
            ),
        );
    }

    if v.contains("-ondemand") {
        return invalid(key, format!("{} must not contain `-ondemand`: {:?}", key, v));
    }

    valid()
}

/// Starts with a letter, letters and digits only, at most 15 characters.
pub fn spark_pool_name(value: &Value, key: &str) -> ValidateResult {
    let v = match as_string(value, key) {
        Ok(v) => v,
        Err(result) => return result,
    };

    if !SPARK_POOL_NAME.is_match(v) {
        return invalid(
            key,
            format!(
                "{} can contain only letters or numbers, must start with a letter, and be between 1 and 15 characters long: {:?}",
                key, v
            ),
        );
    }

    valid()
}

/// 1-60 characters, none of `<>*%&:\/?@-`, not ending with a period or whitespace.
pub fn sql_pool_name(value: &Value, key: &str) -> ValidateResult {
    let v = match as_string(value, key) {
        Ok(v) => v,
        Err(result) => return result,
    };

    if !SQL_POOL_NAME.is_match(v) {
        return invalid(
            key,
            format!(
                "{} can be up to 60 characters long, can't contain <>*%&:\\/?@-, and can't end with a period or a space: {:?}",
                key, v
            ),
        );
    }

    valid()
}

/// Starts with a letter, letters, digits or underscores only, at most 128
/// characters, and not a reserved login.
pub fn sql_administrator_login_name(value: &Value, key: &str) -> ValidateResult {
    let v = match as_string(value, key) {
        Ok(v) => v,
        Err(result) => return result,
    };

    if !SQL_ADMINISTRATOR_LOGIN.is_match(v) {
        return invalid(
            key,
            format!(
                "{} can contain only letters, numbers or underscores, must start with a letter, and be between 1 and 128 characters long: {:?}",
                key, v
            ),
        );
    }

    if RESERVED_LOGINS
        .iter()
        .any(|reserved| reserved.eq_ignore_ascii_case(v))
    {
        return invalid(key, format!("{} cannot be the reserved login {:?}", key, v));
    }

    valid()
}

/// 1-128 characters, none of `<>*%&:\/?`, not ending with a period.
pub fn firewall_rule_name(value: &Value, key: &str) -> ValidateResult {
    let v = match as_string(value, key) {
        Ok(v) => v,
        Err(result) => return result,
    };

    if !FIREWALL_RULE_NAME.is_match(v) {
        return invalid(
            key,
            format!(
                "{} can be up to 128 characters long, can't contain <>*%&:\\/?, and can't end with a period: {:?}",
                key, v
            ),
        );
    }

    valid()
}

/// Pipelines and triggers share one naming rule.
pub fn pipeline_and_trigger_name(value: &Value, key: &str) -> ValidateResult {
    let v = match as_string(value, key) {
        Ok(v) => v,
        Err(result) => return result,
    };

    if !PIPELINE_AND_TRIGGER_NAME.is_match(v) {
        return invalid(
            key,
            format!(
                "{} must start with a letter, number or underscore, and can't contain <>*#.%&:\\+?/: {:?}",
                key, v
            ),
        );
    }

    valid()
}

/// Lowercase letters and digits, 1-45 characters.
pub fn private_link_hub_name(value: &Value, key: &str) -> ValidateResult {
    let v = match as_string(value, key) {
        Ok(v) => v,
        Err(result) => return result,
    };

    if !PRIVATE_LINK_HUB_NAME.is_match(v) {
        return invalid(
            key,
            format!(
                "{} can contain only lowercase letters or numbers, and be between 1 and 45 characters long: {:?}",
                key, v
            ),
        );
    }

    valid()
}

/// Git repository root folders are absolute.
pub fn repo_root_folder(value: &Value, key: &str) -> ValidateResult {
    let v = match as_string(value, key) {
        Ok(v) => v,
        Err(result) => return result,
    };

    if !v.starts_with('/') {
        return invalid(key, format!("{} must start with '/': {:?}", key, v));
    }

    valid()
}
