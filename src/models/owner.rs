use crate::errors::{AppError, AppResult};
use serde::Serialize;
use std::fmt;

/// Identity an entry belongs to.
///
/// Owners are compared case-sensitively and never contain whitespace, so
/// they can be used as-is as part of the `(owner, date)` natural key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Owner(String);

impl Owner {
    pub fn parse(raw: &str) -> AppResult<Self> {
        let name = raw.trim();

        if name.is_empty() {
            return Err(AppError::invalid("user name cannot be empty"));
        }
        if name.chars().any(char::is_whitespace) {
            return Err(AppError::invalid(format!(
                "user name '{}' must not contain spaces",
                name
            )));
        }

        Ok(Owner(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
